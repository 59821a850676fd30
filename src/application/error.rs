//! Application-level errors

use thiserror::Error;

/// Application errors: failures of the session itself, never bad user input.
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("terminal I/O failed: {context}")]
    Terminal {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for application layer operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
