//! Export objects a monitoring listener can enable, feed, and poll.
//!
//! Two kinds exist: [`EventCounter`] aggregates pushed samples over one
//! reporting interval, [`PollingGauge`] reads a live value when polled. Both
//! report through the same [`CounterPayload`] shape.

pub mod descriptor;
pub mod event_counter;
pub mod payload;
pub mod polling_gauge;

pub use descriptor::MetricDescriptor;
pub use event_counter::EventCounter;
pub use payload::{CounterKind, CounterPayload};
pub use polling_gauge::PollingGauge;
