//! workerstat core: the in-process metrics publisher and its export objects.
//!
//! The crate carries no runtime dependencies. Hosting applications construct
//! one [`MetricsPublisher`] per process, share it behind an `Arc`, and report
//! the start and completion of every work item. A monitoring listener drives
//! activation through [`ListenerCommand`] and collects [`CounterPayload`]s.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here. Instrumentation
//! must never fault the hosting workload.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod command;
pub mod error;
pub mod metric;
pub mod publisher;

pub use command::ListenerCommand;
pub use error::{Result, WorkerStatError};
pub use metric::{CounterKind, CounterPayload, EventCounter, MetricDescriptor, PollingGauge};
pub use publisher::{ExportState, MetricsPublisher, PROCESSING_TIME, QUEUE_LENGTH};
