//! Top-level facade crate for workerstat.
//!
//! Re-exports the publisher core and the host library so users can depend on a single crate.

pub mod core {
    pub use workerstat_core::*;
}

pub mod host {
    pub use workerstat_host::*;
}

pub use workerstat_core::{ListenerCommand, MetricsPublisher};
