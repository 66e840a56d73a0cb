//! Shared error types for the services crate.

use thiserror::Error;

use storage::StorageError;

/// Errors emitted by `CompletionService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CompletionError {
    #[error("lesson {lesson} not found in course {course}")]
    UnknownLesson { course: String, lesson: String },
    #[error(transparent)]
    Storage(#[from] StorageError),
}
