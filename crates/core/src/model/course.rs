use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::model::asset::AssetUri;
use crate::model::ids::{CourseId, ModuleId};
use crate::model::lesson::Lesson;
use crate::model::module::Module;
use crate::model::percent::Percent;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CourseError {
    #[error("course id cannot be empty")]
    EmptyId,

    #[error("course {0} has an empty title")]
    EmptyTitle(CourseId),

    #[error("course {0} has an instructor without a name")]
    EmptyInstructorName(CourseId),

    #[error("course {course} contains module {module} more than once")]
    DuplicateModule { course: CourseId, module: ModuleId },
}

//
// ─── LEVEL ─────────────────────────────────────────────────────────────────────
//

/// Difficulty level advertised on the course card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CourseLevel {
    #[serde(alias = "Principiante")]
    Beginner,
    #[serde(alias = "Intermedio")]
    Intermediate,
    #[serde(alias = "Avanzado")]
    Advanced,
}

impl CourseLevel {
    pub const ALL: [CourseLevel; 3] = [
        CourseLevel::Beginner,
        CourseLevel::Intermediate,
        CourseLevel::Advanced,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            CourseLevel::Beginner => "beginner",
            CourseLevel::Intermediate => "intermediate",
            CourseLevel::Advanced => "advanced",
        }
    }
}

impl fmt::Display for CourseLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown course level: {0}")]
pub struct ParseLevelError(String);

impl FromStr for CourseLevel {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "beginner" | "principiante" => Ok(CourseLevel::Beginner),
            "intermediate" | "intermedio" => Ok(CourseLevel::Intermediate),
            "advanced" | "avanzado" => Ok(CourseLevel::Advanced),
            _ => Err(ParseLevelError(s.to_owned())),
        }
    }
}

//
// ─── INSTRUCTOR ────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instructor {
    name: String,
    avatar: AssetUri,
    title: String,
}

impl Instructor {
    #[must_use]
    pub fn new(name: impl Into<String>, avatar: AssetUri, title: impl Into<String>) -> Self {
        Self {
            name: name.into().trim().to_owned(),
            avatar,
            title: title.into().trim().to_owned(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn avatar(&self) -> &AssetUri {
        &self.avatar
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }
}

//
// ─── COURSE ────────────────────────────────────────────────────────────────────
//

/// Unvalidated course fields, assembled by loaders before validation.
#[derive(Debug, Clone)]
pub struct CourseDraft {
    pub id: CourseId,
    pub title: String,
    pub summary: String,
    pub description: String,
    pub image: AssetUri,
    pub declared_lessons: u32,
    pub duration: String,
    pub level: CourseLevel,
    pub progress: Percent,
    pub instructor: Instructor,
    pub modules: Vec<Module>,
}

impl CourseDraft {
    /// Validate the draft into an immutable `Course`.
    ///
    /// The declared lesson count is not reconciled here; catalog loaders decide
    /// how to treat a mismatch (see `Course::lesson_count_mismatch`).
    ///
    /// # Errors
    ///
    /// Returns `CourseError` for blank id/title/instructor name, or duplicate module ids.
    pub fn validate(self) -> Result<Course, CourseError> {
        if self.id.is_blank() {
            return Err(CourseError::EmptyId);
        }
        let title = self.title.trim().to_owned();
        if title.is_empty() {
            return Err(CourseError::EmptyTitle(self.id));
        }
        if self.instructor.name().is_empty() {
            return Err(CourseError::EmptyInstructorName(self.id));
        }

        let mut seen = HashSet::with_capacity(self.modules.len());
        for module in &self.modules {
            if !seen.insert(module.id().as_str()) {
                return Err(CourseError::DuplicateModule {
                    course: self.id,
                    module: module.id().clone(),
                });
            }
        }

        Ok(Course {
            id: self.id,
            title,
            summary: self.summary.trim().to_owned(),
            description: self.description.trim().to_owned(),
            image: self.image,
            declared_lessons: self.declared_lessons,
            duration: self.duration.trim().to_owned(),
            level: self.level,
            progress: self.progress,
            instructor: self.instructor,
            modules: self.modules,
        })
    }
}

/// Declared versus actual lesson totals for a course.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LessonCountMismatch {
    pub declared: u32,
    pub actual: usize,
}

/// Top-level catalog entry: an ordered sequence of modules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    id: CourseId,
    title: String,
    summary: String,
    description: String,
    image: AssetUri,
    declared_lessons: u32,
    duration: String,
    level: CourseLevel,
    progress: Percent,
    instructor: Instructor,
    modules: Vec<Module>,
}

impl Course {
    #[must_use]
    pub fn id(&self) -> &CourseId {
        &self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Short description shown on course cards.
    #[must_use]
    pub fn summary(&self) -> &str {
        &self.summary
    }

    /// Full description shown on the course detail page.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn image(&self) -> &AssetUri {
        &self.image
    }

    /// Lesson count as advertised by the catalog, which may differ from
    /// the lessons actually present.
    #[must_use]
    pub fn declared_lessons(&self) -> u32 {
        self.declared_lessons
    }

    #[must_use]
    pub fn duration(&self) -> &str {
        &self.duration
    }

    #[must_use]
    pub fn level(&self) -> CourseLevel {
        self.level
    }

    /// Display-only progress value carried by the catalog.
    #[must_use]
    pub fn progress(&self) -> Percent {
        self.progress
    }

    #[must_use]
    pub fn instructor(&self) -> &Instructor {
        &self.instructor
    }

    #[must_use]
    pub fn modules(&self) -> &[Module] {
        &self.modules
    }

    #[must_use]
    pub fn module(&self, module_id: &str) -> Option<&Module> {
        self.modules.iter().find(|m| m.id() == module_id)
    }

    #[must_use]
    pub fn module_index(&self, module_id: &str) -> Option<usize> {
        self.modules.iter().position(|m| m.id() == module_id)
    }

    /// All lessons in module-then-lesson order.
    pub fn lessons(&self) -> impl Iterator<Item = &Lesson> + '_ {
        self.modules.iter().flat_map(|m| m.lessons().iter())
    }

    #[must_use]
    pub fn total_lessons(&self) -> usize {
        self.modules.iter().map(|m| m.lessons().len()).sum()
    }

    #[must_use]
    pub fn completed_lessons(&self) -> usize {
        self.lessons().filter(|l| l.is_completed()).count()
    }

    #[must_use]
    pub fn lesson_count_mismatch(&self) -> Option<LessonCountMismatch> {
        let actual = self.total_lessons();
        let declared_matches = usize::try_from(self.declared_lessons).is_ok_and(|d| d == actual);
        (!declared_matches).then_some(LessonCountMismatch {
            declared: self.declared_lessons,
            actual,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{LessonId, LessonKind};

    fn module(id: &str, lessons: &[&str]) -> Module {
        let lessons = lessons
            .iter()
            .map(|l| Lesson::new(LessonId::new(*l), *l, "5 min", LessonKind::Video).unwrap())
            .collect();
        Module::new(ModuleId::new(id), id, lessons).unwrap()
    }

    fn draft(modules: Vec<Module>, declared: u32) -> CourseDraft {
        CourseDraft {
            id: CourseId::new("intro-trading"),
            title: "Introducción al Trading".into(),
            summary: "Fundamentos".into(),
            description: "Curso para principiantes".into(),
            image: AssetUri::parse("https://images.example.com/intro.jpg").unwrap(),
            declared_lessons: declared,
            duration: "4 horas".into(),
            level: CourseLevel::Beginner,
            progress: Percent::new(35).unwrap(),
            instructor: Instructor::new(
                "Carlos Rodríguez",
                AssetUri::parse("avatars/carlos.jpg").unwrap(),
                "Trader Profesional",
            ),
            modules,
        }
    }

    #[test]
    fn validate_accepts_well_formed_course() {
        let course = draft(vec![module("m1", &["a", "b"]), module("m2", &["c"])], 3)
            .validate()
            .unwrap();
        assert_eq!(course.total_lessons(), 3);
        assert_eq!(course.module_index("m2"), Some(1));
        assert!(course.lesson_count_mismatch().is_none());
        let ids: Vec<&str> = course.lessons().map(|l| l.id().as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn validate_rejects_duplicate_modules() {
        let err = draft(vec![module("m1", &["a"]), module("m1", &["b"])], 2)
            .validate()
            .unwrap_err();
        assert!(matches!(err, CourseError::DuplicateModule { .. }));
    }

    #[test]
    fn validate_rejects_blank_title() {
        let mut d = draft(Vec::new(), 0);
        d.title = "   ".into();
        assert!(matches!(d.validate(), Err(CourseError::EmptyTitle(_))));
    }

    #[test]
    fn reports_lesson_count_mismatch() {
        let course = draft(vec![module("m1", &["a", "b"])], 12).validate().unwrap();
        assert_eq!(
            course.lesson_count_mismatch(),
            Some(LessonCountMismatch {
                declared: 12,
                actual: 2
            })
        );
    }

    #[test]
    fn level_parses_english_and_spanish_labels() {
        assert_eq!("Intermedio".parse::<CourseLevel>(), Ok(CourseLevel::Intermediate));
        assert_eq!("advanced".parse::<CourseLevel>(), Ok(CourseLevel::Advanced));
        assert!("expert".parse::<CourseLevel>().is_err());
        for level in CourseLevel::ALL {
            assert_eq!(level.to_string().parse::<CourseLevel>(), Ok(level));
        }
    }
}
