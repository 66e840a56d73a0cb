//! Serialized catalog shape.
//!
//! Records mirror the JSON layout of the bundled dataset (camelCase keys,
//! `type` for the lesson kind) and convert into validated domain types, so
//! the domain layer never sees raw strings.

use academy_core::model::{
    AssetUri, Course, CourseDraft, CourseLevel, Instructor, Lesson, LessonId, LessonKind, Module,
    Percent,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

use crate::repository::{LessonCountPolicy, StaticCatalog, StorageError};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseRecord {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub full_description: String,
    pub image: String,
    pub lessons_count: u32,
    pub duration: String,
    pub level: CourseLevel,
    #[serde(default)]
    pub progress: u32,
    pub instructor: InstructorRecord,
    #[serde(default)]
    pub modules: Vec<ModuleRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstructorRecord {
    pub name: String,
    pub avatar: String,
    pub title: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModuleRecord {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub lessons: Vec<LessonRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonRecord {
    pub id: String,
    pub title: String,
    pub duration: String,
    #[serde(default)]
    pub is_completed: bool,
    #[serde(rename = "type")]
    pub kind: LessonKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
}

impl LessonRecord {
    /// # Errors
    ///
    /// Returns a validation error for blank fields, a bad video reference, or a
    /// video reference on a non-video lesson.
    pub fn into_lesson(self) -> Result<Lesson, academy_core::Error> {
        let id: LessonId = self.id.parse()?;
        let mut lesson = Lesson::new(id, self.title, self.duration, self.kind)?
            .with_completed(self.is_completed);
        if let Some(content) = self.content {
            lesson = lesson.with_content(content);
        }
        if let Some(url) = self.video_url {
            lesson = lesson.with_video(AssetUri::parse(url)?)?;
        }
        Ok(lesson)
    }
}

impl ModuleRecord {
    /// # Errors
    ///
    /// Returns a validation error from the module or any of its lessons.
    pub fn into_module(self) -> Result<Module, academy_core::Error> {
        let lessons = self
            .lessons
            .into_iter()
            .map(LessonRecord::into_lesson)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Module::new(self.id.parse()?, self.title, lessons)?)
    }
}

impl CourseRecord {
    /// Convert the record into a validated domain `Course`.
    ///
    /// # Errors
    ///
    /// Returns the first validation error found in the course, its modules or lessons.
    pub fn into_course(self) -> Result<Course, academy_core::Error> {
        let modules = self
            .modules
            .into_iter()
            .map(ModuleRecord::into_module)
            .collect::<Result<Vec<_>, _>>()?;
        let instructor = Instructor::new(
            self.instructor.name,
            AssetUri::parse(self.instructor.avatar)?,
            self.instructor.title,
        );
        let draft = CourseDraft {
            id: self.id.parse()?,
            title: self.title,
            summary: self.description,
            description: self.full_description,
            image: AssetUri::parse(self.image)?,
            declared_lessons: self.lessons_count,
            duration: self.duration,
            level: self.level,
            progress: Percent::new(self.progress)?,
            instructor,
            modules,
        };
        Ok(draft.validate()?)
    }
}

/// Parse a JSON array of course records into an indexed catalog.
///
/// # Errors
///
/// Returns `StorageError::Serialization` for malformed JSON,
/// `StorageError::InvalidRecord` for records failing validation, and the
/// catalog errors described on `StaticCatalog::new`.
pub fn load_catalog_json(
    json: &str,
    policy: LessonCountPolicy,
) -> Result<StaticCatalog, StorageError> {
    let records: Vec<CourseRecord> =
        serde_json::from_str(json).map_err(|e| StorageError::Serialization(e.to_string()))?;
    debug!(records = records.len(), "parsed course records");

    let courses = records
        .into_iter()
        .map(|record| {
            let course = record.id.trim().to_owned();
            record
                .into_course()
                .map_err(|source| StorageError::InvalidRecord { course, source })
        })
        .collect::<Result<Vec<_>, _>>()?;

    StaticCatalog::new(courses, policy)
}

/// Read and parse a catalog JSON file.
///
/// # Errors
///
/// Returns `StorageError::Io` if the file cannot be read, otherwise the errors
/// of `load_catalog_json`.
pub fn load_catalog_file(
    path: &Path,
    policy: LessonCountPolicy,
) -> Result<StaticCatalog, StorageError> {
    debug!(path = %path.display(), "loading catalog file");
    let json = std::fs::read_to_string(path)?;
    load_catalog_json(&json, policy)
}
