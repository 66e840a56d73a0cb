mod asset;
mod completion;
mod course;
mod ids;
mod lesson;
mod module;
mod percent;

pub use asset::{AssetError, AssetUri};
pub use completion::LessonCompletion;
pub use course::{
    Course, CourseDraft, CourseError, CourseLevel, Instructor, LessonCountMismatch,
    ParseLevelError,
};
pub use ids::{CourseId, LessonId, ModuleId, ParseIdError};
pub use lesson::{Lesson, LessonError, LessonKind};
pub use module::{Module, ModuleError};
pub use percent::{Percent, PercentError};
