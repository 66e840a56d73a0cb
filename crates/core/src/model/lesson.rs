use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::model::asset::AssetUri;
use crate::model::ids::LessonId;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum LessonError {
    #[error("lesson id cannot be empty")]
    EmptyId,

    #[error("lesson {0} has an empty title")]
    EmptyTitle(LessonId),

    #[error("lesson {id} is {kind}; only video lessons carry a video reference")]
    VideoOnNonVideoLesson { id: LessonId, kind: LessonKind },
}

/// How the lesson content is delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LessonKind {
    Video,
    Interactive,
    Reading,
}

impl LessonKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            LessonKind::Video => "video",
            LessonKind::Interactive => "interactive",
            LessonKind::Reading => "reading",
        }
    }
}

impl fmt::Display for LessonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Atomic unit of course content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lesson {
    id: LessonId,
    title: String,
    duration: String,
    kind: LessonKind,
    completed: bool,
    content: Option<String>,
    video: Option<AssetUri>,
}

impl Lesson {
    /// Create an incomplete lesson without content.
    ///
    /// # Errors
    ///
    /// Returns `LessonError` if the id or title is blank.
    pub fn new(
        id: LessonId,
        title: impl Into<String>,
        duration: impl Into<String>,
        kind: LessonKind,
    ) -> Result<Self, LessonError> {
        if id.is_blank() {
            return Err(LessonError::EmptyId);
        }
        let title = title.into().trim().to_owned();
        if title.is_empty() {
            return Err(LessonError::EmptyTitle(id));
        }
        Ok(Self {
            id,
            title,
            duration: duration.into().trim().to_owned(),
            kind,
            completed: false,
            content: None,
            video: None,
        })
    }

    #[must_use]
    pub fn with_completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }

    /// Attach free-text content; blank text is dropped.
    #[must_use]
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        let content = content.into();
        self.content = (!content.trim().is_empty()).then_some(content);
        self
    }

    /// Attach a video reference.
    ///
    /// # Errors
    ///
    /// Returns `LessonError::VideoOnNonVideoLesson` unless the lesson is a video.
    pub fn with_video(mut self, video: AssetUri) -> Result<Self, LessonError> {
        if self.kind != LessonKind::Video {
            return Err(LessonError::VideoOnNonVideoLesson {
                id: self.id,
                kind: self.kind,
            });
        }
        self.video = Some(video);
        Ok(self)
    }

    #[must_use]
    pub fn id(&self) -> &LessonId {
        &self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Free-form duration label such as `15 min`.
    #[must_use]
    pub fn duration(&self) -> &str {
        &self.duration
    }

    #[must_use]
    pub fn kind(&self) -> LessonKind {
        self.kind
    }

    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    #[must_use]
    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    #[must_use]
    pub fn video(&self) -> Option<&AssetUri> {
        self.video.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_lesson_is_incomplete() {
        let lesson = Lesson::new(
            LessonId::new("lesson-1-1"),
            " Qué es el Trading ",
            "15 min",
            LessonKind::Video,
        )
        .unwrap();
        assert_eq!(lesson.title(), "Qué es el Trading");
        assert!(!lesson.is_completed());
        assert!(lesson.content().is_none());
    }

    #[test]
    fn rejects_blank_id_and_title() {
        let blank_id = Lesson::new(LessonId::new(" "), "T", "1 min", LessonKind::Reading);
        assert_eq!(blank_id.unwrap_err(), LessonError::EmptyId);

        let blank_title = Lesson::new(LessonId::new("l"), "  ", "1 min", LessonKind::Reading);
        assert!(matches!(blank_title, Err(LessonError::EmptyTitle(_))));
    }

    #[test]
    fn video_only_on_video_lessons() {
        let video = AssetUri::parse("https://example.com/video1").unwrap();
        let reading = Lesson::new(LessonId::new("l"), "T", "1 min", LessonKind::Reading).unwrap();
        assert!(matches!(
            reading.with_video(video.clone()),
            Err(LessonError::VideoOnNonVideoLesson {
                kind: LessonKind::Reading,
                ..
            })
        ));

        let clip = Lesson::new(LessonId::new("v"), "T", "1 min", LessonKind::Video)
            .unwrap()
            .with_video(video.clone())
            .unwrap();
        assert_eq!(clip.video(), Some(&video));
    }

    #[test]
    fn blank_content_is_dropped() {
        let lesson = Lesson::new(LessonId::new("l"), "T", "1 min", LessonKind::Reading)
            .unwrap()
            .with_content("   ");
        assert!(lesson.content().is_none());
    }
}
