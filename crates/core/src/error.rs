use thiserror::Error;

use crate::model::{AssetError, CourseError, LessonError, ModuleError, ParseIdError, PercentError};

/// Any validation failure raised while assembling catalog entities.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    Id(#[from] ParseIdError),
    #[error(transparent)]
    Asset(#[from] AssetError),
    #[error(transparent)]
    Percent(#[from] PercentError),
    #[error(transparent)]
    Lesson(#[from] LessonError),
    #[error(transparent)]
    Module(#[from] ModuleError),
    #[error(transparent)]
    Course(#[from] CourseError),
}
