//! Errors raised while constructing names.

use thiserror::Error;

/// A string could not be turned into a [`Name`](crate::Name).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameError {
    /// The text does not match the identifier pattern.
    #[error("value '{value}' does not match the regular expression {pattern}")]
    Invalid {
        /// The rejected text
        value: String,
        /// The pattern it was checked against
        pattern: &'static str,
    },
}

/// A result type for name construction.
pub type Result<T> = std::result::Result<T, NameError>;
