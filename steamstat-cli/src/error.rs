use thiserror::Error;

use steamstat_client::ClientError;
use steamstat_core::ReportError;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// Input rejected before any request was made
    #[error("{0}")]
    Report(#[from] ReportError),

    /// Loading data from the backend failed
    #[error("{}", .0.user_message())]
    Client(#[from] ClientError),

    /// Input that is valid but not something we can act on
    #[error("{0}")]
    Unsupported(String),

    /// Configuration error
    #[error("Config error: {0}")]
    Config(String),

    /// Runtime creation or async error
    #[error("Runtime error: {0}")]
    Runtime(String),

    /// I/O error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    pub(crate) fn unsupported(msg: impl Into<String>) -> Self {
        Self::Unsupported(msg.into())
    }

    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub(crate) fn runtime(msg: impl Into<String>) -> Self {
        Self::Runtime(msg.into())
    }

    /// Underlying cause when the display message is a simplified one.
    pub(crate) fn detail(&self) -> Option<String> {
        match self {
            Self::Client(e) => {
                let full = e.to_string();
                (full != e.user_message()).then_some(full)
            }
            _ => None,
        }
    }
}
