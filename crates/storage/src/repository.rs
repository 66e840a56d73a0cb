use academy_core::model::{Course, CourseId, LessonCompletion, LessonId};
use academy_core::navigation::{self, LessonPosition, LessonRef};
use async_trait::async_trait;
use chrono::SecondsFormat;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, Mutex};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors surfaced by catalog loaders and completion recorders.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("catalog could not be parsed: {0}")]
    Serialization(String),

    #[error("invalid course record {course}: {source}")]
    InvalidRecord {
        course: String,
        #[source]
        source: academy_core::Error,
    },

    #[error("course {0} appears more than once in the catalog")]
    DuplicateCourse(CourseId),

    #[error("course {course} declares {declared} lessons but contains {actual}")]
    LessonCountMismatch {
        course: CourseId,
        declared: u32,
        actual: usize,
    },

    #[error("completion recorder unavailable: {0}")]
    Recorder(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

//
// ─── CATALOG ───────────────────────────────────────────────────────────────────
//

/// Read-only access to the ordered course catalog.
///
/// Only `courses` is required; the lookups default to linear scans so small
/// fixtures can implement the trait in one line.
pub trait CatalogRepository: Send + Sync {
    /// All courses in catalog order.
    fn courses(&self) -> &[Course];

    /// First course whose id equals `id`.
    fn course(&self, id: &str) -> Option<&Course> {
        self.courses().iter().find(|c| c.id() == id)
    }

    /// First lesson with `lesson_id` inside the course `course_id`.
    fn lesson(&self, course_id: &str, lesson_id: &str) -> Option<LessonRef<'_>> {
        self.course(course_id)
            .and_then(|course| navigation::locate(course, lesson_id))
    }
}

/// What to do when a course's declared lesson count disagrees with its modules.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LessonCountPolicy {
    #[default]
    Warn,
    Strict,
    Ignore,
}

impl LessonCountPolicy {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            LessonCountPolicy::Warn => "warn",
            LessonCountPolicy::Strict => "strict",
            LessonCountPolicy::Ignore => "ignore",
        }
    }
}

impl fmt::Display for LessonCountPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LessonCountPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "warn" => Ok(Self::Warn),
            "strict" => Ok(Self::Strict),
            "ignore" => Ok(Self::Ignore),
            other => Err(format!("unknown lesson count policy: {other}")),
        }
    }
}

/// Immutable catalog indexed by course id and by (course, lesson) id.
///
/// Index entries keep the first occurrence, so lookups agree with a linear
/// scan in catalog order.
#[derive(Debug, Clone)]
pub struct StaticCatalog {
    courses: Vec<Course>,
    by_id: HashMap<CourseId, usize>,
    lessons: Vec<HashMap<LessonId, LessonPosition>>,
}

impl StaticCatalog {
    /// Build the catalog, checking declared lesson counts under `policy`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::DuplicateCourse` when two courses share an id, or
    /// `StorageError::LessonCountMismatch` under `LessonCountPolicy::Strict`.
    pub fn new(courses: Vec<Course>, policy: LessonCountPolicy) -> Result<Self, StorageError> {
        let mut by_id = HashMap::with_capacity(courses.len());
        let mut lessons = Vec::with_capacity(courses.len());

        for (index, course) in courses.iter().enumerate() {
            if by_id.insert(course.id().clone(), index).is_some() {
                return Err(StorageError::DuplicateCourse(course.id().clone()));
            }
            check_lesson_count(course, policy)?;
            lessons.push(index_lessons(course));
        }

        debug!(courses = courses.len(), "catalog indexed");
        Ok(Self {
            courses,
            by_id,
            lessons,
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.courses.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}

fn check_lesson_count(course: &Course, policy: LessonCountPolicy) -> Result<(), StorageError> {
    let Some(mismatch) = course.lesson_count_mismatch() else {
        return Ok(());
    };
    match policy {
        LessonCountPolicy::Ignore => Ok(()),
        LessonCountPolicy::Warn => {
            warn!(
                course = %course.id(),
                declared = mismatch.declared,
                actual = mismatch.actual,
                "declared lesson count does not match modules"
            );
            Ok(())
        }
        LessonCountPolicy::Strict => Err(StorageError::LessonCountMismatch {
            course: course.id().clone(),
            declared: mismatch.declared,
            actual: mismatch.actual,
        }),
    }
}

fn index_lessons(course: &Course) -> HashMap<LessonId, LessonPosition> {
    let mut index = HashMap::with_capacity(course.total_lessons());
    for (module_index, module) in course.modules().iter().enumerate() {
        for (lesson_index, lesson) in module.lessons().iter().enumerate() {
            index.entry(lesson.id().clone()).or_insert(LessonPosition {
                module_index,
                lesson_index,
            });
        }
    }
    index
}

impl CatalogRepository for StaticCatalog {
    fn courses(&self) -> &[Course] {
        &self.courses
    }

    fn course(&self, id: &str) -> Option<&Course> {
        self.by_id.get(id).and_then(|i| self.courses.get(*i))
    }

    fn lesson(&self, course_id: &str, lesson_id: &str) -> Option<LessonRef<'_>> {
        let index = *self.by_id.get(course_id)?;
        let course = self.courses.get(index)?;
        let position = *self.lessons.get(index)?.get(lesson_id)?;
        let module = course.modules().get(position.module_index)?;
        let lesson = module.lessons().get(position.lesson_index)?;
        Some(LessonRef {
            course,
            module,
            lesson,
            position,
        })
    }
}

//
// ─── COMPLETIONS ───────────────────────────────────────────────────────────────
//

/// Receives lesson completion notifications.
#[async_trait]
pub trait CompletionRecorder: Send + Sync {
    /// Acknowledge a completion event.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Recorder` if the event could not be accepted.
    async fn record(&self, completion: &LessonCompletion) -> Result<(), StorageError>;
}

/// Logs completions and otherwise discards them.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingCompletionRecorder;

#[async_trait]
impl CompletionRecorder for LoggingCompletionRecorder {
    async fn record(&self, completion: &LessonCompletion) -> Result<(), StorageError> {
        info!(
            course = %completion.course_id,
            lesson = %completion.lesson_id,
            at = %completion.completed_at.to_rfc3339_opts(SecondsFormat::Secs, true),
            "lesson marked as completed"
        );
        Ok(())
    }
}

/// Keeps completion events in memory, in arrival order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCompletionLog {
    events: Arc<Mutex<Vec<LessonCompletion>>>,
}

impl InMemoryCompletionLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of recorded events.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Recorder` if the log lock is poisoned.
    pub fn events(&self) -> Result<Vec<LessonCompletion>, StorageError> {
        let guard = self
            .events
            .lock()
            .map_err(|e| StorageError::Recorder(e.to_string()))?;
        Ok(guard.clone())
    }
}

#[async_trait]
impl CompletionRecorder for InMemoryCompletionLog {
    async fn record(&self, completion: &LessonCompletion) -> Result<(), StorageError> {
        let mut guard = self
            .events
            .lock()
            .map_err(|e| StorageError::Recorder(e.to_string()))?;
        guard.push(completion.clone());
        debug!(
            course = %completion.course_id,
            lesson = %completion.lesson_id,
            recorded = guard.len(),
            "completion stored in memory"
        );
        Ok(())
    }
}

//
// ─── AGGREGATE ─────────────────────────────────────────────────────────────────
//

/// Catalog and completion recorder behind trait objects for easy swapping.
#[derive(Clone)]
pub struct Storage {
    pub catalog: Arc<dyn CatalogRepository>,
    pub completions: Arc<dyn CompletionRecorder>,
}

impl Storage {
    /// Wrap a catalog with the logging completion recorder.
    #[must_use]
    pub fn new(catalog: StaticCatalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
            completions: Arc::new(LoggingCompletionRecorder),
        }
    }

    /// Storage backed by the bundled course dataset.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the bundled dataset fails validation under `policy`.
    pub fn seeded(policy: LessonCountPolicy) -> Result<Self, StorageError> {
        crate::seed::seed_catalog(policy).map(Self::new)
    }

    #[must_use]
    pub fn with_recorder(mut self, recorder: Arc<dyn CompletionRecorder>) -> Self {
        self.completions = recorder;
        self
    }
}
