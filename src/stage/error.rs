//! Error types for stage construction.
//!
//! This module provides the configuration error raised when a queue
//! position that requires a callable stage receives a plain value.
//! The error is raised at construction time, before any pipeline runs.

/// Represents an error when a plain value is used where a stage is required.
///
/// This error occurs at the tagged-argument boundary: converting an
/// [`Arg::Value`](crate::extract::Arg) into a [`Stage`](crate::stage::Stage)
/// is a configuration mistake and fails immediately, never at fold time.
///
/// # Examples
///
/// ```rust
/// use yieldback::stage::NotCallableError;
///
/// let error = NotCallableError {
///     operation: "Stage::try_from",
/// };
/// assert_eq!(
///     format!("{}", error),
///     "Stage::try_from: argument is a plain value, not a stage. \
///      Build stages with Stage::item_wise or Stage::list_wise."
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotCallableError {
    /// The name of the operation where the error occurred.
    pub operation: &'static str,
}

impl std::fmt::Display for NotCallableError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "{}: argument is a plain value, not a stage. \
             Build stages with Stage::item_wise or Stage::list_wise.",
            self.operation
        )
    }
}

impl std::error::Error for NotCallableError {}

/// Represents errors that can occur while assembling a pipeline.
///
/// This enum provides a unified error type for all configuration errors.
/// Currently, it only contains `NotCallable`, but it is designed to be
/// extensible for future error types.
///
/// # Examples
///
/// ```rust
/// use yieldback::stage::{NotCallableError, StageError};
///
/// let error = StageError::NotCallable(NotCallableError {
///     operation: "Stage::try_from",
/// });
/// println!("{}", error);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StageError {
    /// A plain value was used where a callable stage is required.
    NotCallable(NotCallableError),
}

impl std::fmt::Display for StageError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotCallable(error) => write!(formatter, "{error}"),
        }
    }
}

impl std::error::Error for StageError {}

impl From<NotCallableError> for StageError {
    fn from(error: NotCallableError) -> Self {
        Self::NotCallable(error)
    }
}
