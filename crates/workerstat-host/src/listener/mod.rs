//! In-process monitoring listener.
//!
//! Stands in for the external collector: attaches to a publisher with an
//! enable command, polls it on a fixed interval, and hands every payload to
//! a [`PayloadSink`].

pub mod render;
pub mod session;
pub mod sink;

pub use render::{render_json, render_text};
pub use session::ListenerSession;
pub use sink::{LatestSink, MemorySink, PayloadSink, TracingSink};
