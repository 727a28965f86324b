//! Shared error type across workerstat crates.
//!
//! The publisher itself never returns these; they surface from configuration
//! loading and host startup.

use thiserror::Error;

/// Shared result type.
pub type Result<T> = std::result::Result<T, WorkerStatError>;

/// Unified error type used by core and host.
#[derive(Debug, Error)]
pub enum WorkerStatError {
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("io: {0}")]
    Io(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl WorkerStatError {
    /// Stable short code, used in logs and process exit reporting.
    pub fn code(&self) -> &'static str {
        match self {
            WorkerStatError::InvalidConfig(_) => "INVALID_CONFIG",
            WorkerStatError::UnsupportedVersion => "UNSUPPORTED_VERSION",
            WorkerStatError::Io(_) => "IO",
            WorkerStatError::Internal(_) => "INTERNAL",
        }
    }
}
