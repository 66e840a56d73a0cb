use std::collections::HashSet;
use thiserror::Error;

use crate::model::ids::{LessonId, ModuleId};
use crate::model::lesson::Lesson;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ModuleError {
    #[error("module id cannot be empty")]
    EmptyId,

    #[error("module {0} has an empty title")]
    EmptyTitle(ModuleId),

    #[error("module {module} contains lesson {lesson} more than once")]
    DuplicateLesson { module: ModuleId, lesson: LessonId },
}

/// Ordered group of lessons inside a course.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Module {
    id: ModuleId,
    title: String,
    lessons: Vec<Lesson>,
}

impl Module {
    /// # Errors
    ///
    /// Returns `ModuleError` for a blank id or title, or when two lessons share an id.
    pub fn new(
        id: ModuleId,
        title: impl Into<String>,
        lessons: Vec<Lesson>,
    ) -> Result<Self, ModuleError> {
        if id.is_blank() {
            return Err(ModuleError::EmptyId);
        }
        let title = title.into().trim().to_owned();
        if title.is_empty() {
            return Err(ModuleError::EmptyTitle(id));
        }

        let mut seen = HashSet::with_capacity(lessons.len());
        for lesson in &lessons {
            if !seen.insert(lesson.id().as_str()) {
                return Err(ModuleError::DuplicateLesson {
                    module: id,
                    lesson: lesson.id().clone(),
                });
            }
        }

        Ok(Self { id, title, lessons })
    }

    #[must_use]
    pub fn id(&self) -> &ModuleId {
        &self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn lessons(&self) -> &[Lesson] {
        &self.lessons
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lessons.is_empty()
    }

    #[must_use]
    pub fn lesson_index(&self, lesson_id: &str) -> Option<usize> {
        self.lessons.iter().position(|l| l.id() == lesson_id)
    }

    #[must_use]
    pub fn first_lesson(&self) -> Option<&Lesson> {
        self.lessons.first()
    }

    #[must_use]
    pub fn last_lesson(&self) -> Option<&Lesson> {
        self.lessons.last()
    }
}
