//! Error types for fetch-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that abort the run before repository processing starts.
///
/// Failures inside the repository loop never surface here; they are logged
/// and the run continues.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from fetch-core (mapping overlay parsing, I/O)
    #[error(transparent)]
    Core(#[from] fetch_core::Error),

    /// User-facing error with a message
    #[error("{message}")]
    User { message: String },
}

impl CliError {
    /// Create a new user error with the given message
    pub fn user(message: impl Into<String>) -> Self {
        Self::User {
            message: message.into(),
        }
    }
}
