//! Error types for the logger

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Logging attempted before `start` or after `stop`
    #[error("Logger has not been initialized")]
    Uninitialized,

    /// `start` called on a logger that already left the uninitialized state
    #[error("Logger has already been started")]
    AlreadyStarted,

    /// A lifecycle guard is already alive in this process
    #[error("A logger guard is already active in this process")]
    AlreadyInitialized,

    /// IO error with context
    #[error("IO error while {operation}: {message}")]
    IoOperation {
        operation: String,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Configuration could not be parsed
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// The consumer thread panicked before draining the queue
    #[error("Log consumer thread panicked: {0}")]
    ConsumerPanicked(String),
}

impl LoggerError {
    /// Create an IO operation error with context
    pub fn io_operation(
        operation: impl Into<String>,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        LoggerError::IoOperation {
            operation: operation.into(),
            message: message.into(),
            source,
        }
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    /// True for the ordering bugs: logging outside the running state
    pub fn is_uninitialized(&self) -> bool {
        matches!(self, LoggerError::Uninitialized)
    }
}
