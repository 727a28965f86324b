//! workerstat host library.
//!
//! Wires a [`workerstat_core::MetricsPublisher`] into a small simulated worker
//! pool and an in-process listener session. Consumed by the binary
//! (`main.rs`) and by integration tests.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod app_state;
pub mod config;
pub mod host;
pub mod listener;
pub mod workload;
