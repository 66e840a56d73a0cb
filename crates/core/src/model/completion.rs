use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::ids::{CourseId, LessonId};

/// A learner finished a lesson.
///
/// Completion events are notifications only; they never flip the catalog's
/// completion flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonCompletion {
    pub course_id: CourseId,
    pub lesson_id: LessonId,
    pub completed_at: DateTime<Utc>,
}

impl LessonCompletion {
    #[must_use]
    pub fn new(course_id: CourseId, lesson_id: LessonId, completed_at: DateTime<Utc>) -> Self {
        Self {
            course_id,
            lesson_id,
            completed_at,
        }
    }
}
