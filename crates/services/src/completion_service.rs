use std::sync::Arc;

use serde::Serialize;

use academy_core::model::{LessonCompletion, LessonId};
use storage::{CatalogRepository, CompletionRecorder};
use tracing::{info, warn};

use crate::Clock;
use crate::error::CompletionError;

/// Where the learner goes after finishing a lesson.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "step", content = "lesson", rename_all = "snake_case")]
pub enum NextStep {
    Continue(LessonId),
    CourseFinished,
}

/// Acknowledged completion plus the navigation target it unlocks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompletionOutcome {
    pub completion: LessonCompletion,
    pub next: NextStep,
}

impl CompletionOutcome {
    #[must_use]
    pub fn is_course_finished(&self) -> bool {
        matches!(self.next, NextStep::CourseFinished)
    }
}

/// Handles "complete lesson" requests.
///
/// The catalog is never modified: the completion is stamped, handed to the
/// recorder, and only after the recorder acknowledges it does the caller get
/// a navigation target.
#[derive(Clone)]
pub struct CompletionService {
    clock: Clock,
    catalog: Arc<dyn CatalogRepository>,
    recorder: Arc<dyn CompletionRecorder>,
}

impl CompletionService {
    #[must_use]
    pub fn new(
        clock: Clock,
        catalog: Arc<dyn CatalogRepository>,
        recorder: Arc<dyn CompletionRecorder>,
    ) -> Self {
        Self {
            clock,
            catalog,
            recorder,
        }
    }

    /// Record that the learner completed a lesson.
    ///
    /// # Errors
    ///
    /// Returns `CompletionError::UnknownLesson` if the lesson does not exist,
    /// or `CompletionError::Storage` if the recorder rejects the event.
    pub async fn notify_lesson_completed(
        &self,
        course_id: &str,
        lesson_id: &str,
    ) -> Result<CompletionOutcome, CompletionError> {
        let (completion, next) = {
            let Some(found) = self.catalog.lesson(course_id, lesson_id) else {
                warn!(course = course_id, lesson = lesson_id, "completion for unknown lesson");
                return Err(CompletionError::UnknownLesson {
                    course: course_id.to_owned(),
                    lesson: lesson_id.to_owned(),
                });
            };
            let completion = LessonCompletion::new(
                found.course.id().clone(),
                found.lesson.id().clone(),
                self.clock.now(),
            );
            let next = found
                .next()
                .map_or(NextStep::CourseFinished, |l| NextStep::Continue(l.id().clone()));
            (completion, next)
        };

        self.recorder.record(&completion).await?;

        info!(
            course = %completion.course_id,
            lesson = %completion.lesson_id,
            finished = matches!(next, NextStep::CourseFinished),
            "lesson completion acknowledged"
        );
        Ok(CompletionOutcome { completion, next })
    }
}
