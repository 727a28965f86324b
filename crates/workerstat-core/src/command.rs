//! Control-plane commands delivered by a monitoring listener.

use std::time::Duration;

/// A command from the listener side into the publisher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListenerCommand {
    /// A consumer attached and wants live data every `interval`.
    Enable { interval: Duration },
    /// A consumer detached.
    Disable,
    /// The consumer changed its settings without detaching.
    Update,
}

impl ListenerCommand {
    pub fn as_str(&self) -> &'static str {
        match self {
            ListenerCommand::Enable { .. } => "enable",
            ListenerCommand::Disable => "disable",
            ListenerCommand::Update => "update",
        }
    }
}
