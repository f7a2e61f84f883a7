//! Shell error types

use thiserror::Error;

/// Errors raised while driving the shell
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShellError {
    /// Nothing clickable matches the label
    #[error("No clickable element labeled {0:?}")]
    NoSuchTarget(String),
}

/// Result type alias for shell operations
pub type ShellResult<T> = Result<T, ShellError>;
