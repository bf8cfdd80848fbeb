use std::io;

use thiserror::Error;

/// Library-wide error type for prwm operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// The event payload does not describe a pull request.
    #[error("This tool must be run on a pull_request event")]
    NotPullRequestEvent,

    /// A workflow file could not be decoded into a trigger spec.
    #[error("Invalid workflow '{file}': {details}")]
    WorkflowDecode { file: String, details: String },

    /// The workflow file glob itself is malformed.
    #[error("Invalid workflows glob '{pattern}': {details}")]
    InvalidGlob { pattern: String, details: String },

    /// GitHub REST API request failed.
    #[error(
        "GitHub API error{}: {message}",
        .status.map(|s| format!(" ({})", s)).unwrap_or_default()
    )]
    GitHubApi { message: String, status: Option<u16> },

    /// Parse error.
    #[error("Failed to parse {what}: {details}")]
    ParseError { what: String, details: String },
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }
}
