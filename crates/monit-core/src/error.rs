//! Shared error type across monit crates.

use thiserror::Error;

/// Shared result type.
pub type Result<T> = std::result::Result<T, MonitError>;

/// Unified error type used by the core, adapters and the HTTP layer.
///
/// None of these variants ever reach application code through the
/// `Recorder`; they exist so sinks and loaders can report what went wrong.
#[derive(Debug, Error)]
pub enum MonitError {
    #[error("invalid url: {0}")]
    InvalidUrl(String),
    #[error("transport: {0}")]
    Transport(String),
    #[error("backend rejected write (status {status}): {message}")]
    Rejected { status: u16, message: String },
    #[error("encode: {0}")]
    Encode(String),
    #[error("config: {0}")]
    Config(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl MonitError {
    /// Short, stable label for log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            MonitError::InvalidUrl(_) => "invalid_url",
            MonitError::Transport(_) => "transport",
            MonitError::Rejected { .. } => "rejected",
            MonitError::Encode(_) => "encode",
            MonitError::Config(_) => "config",
            MonitError::Internal(_) => "internal",
        }
    }
}
