//! Navigation error types

use thiserror::Error;

/// Errors raised by the navigation state holder
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NavError {
    /// Id is not one of the dashboard sections
    #[error("Unknown section: {0}")]
    UnknownSection(String),
}

/// Result type alias for navigation operations
pub type NavResult<T> = Result<T, NavError>;
