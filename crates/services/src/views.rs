//! Presentation-agnostic views over catalog entities.
//!
//! These carry owned, serializable data for list cards, the course detail page
//! and the lesson page. They contain no pre-formatted strings beyond the labels
//! stored in the catalog; front-ends decide how to render them.

use serde::Serialize;

use academy_core::model::{
    Course, CourseId, CourseLevel, Instructor, Lesson, LessonId, LessonKind, Module, ModuleId,
    Percent,
};
use academy_core::navigation::{self, CompletionStats, LessonRef, ResumeTarget};

/// Course card in the catalog list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CourseSummary {
    pub id: CourseId,
    pub title: String,
    pub summary: String,
    pub image: String,
    pub level: CourseLevel,
    pub duration: String,
    pub declared_lessons: u32,
    pub progress: Percent,
}

impl CourseSummary {
    #[must_use]
    pub fn from_course(course: &Course) -> Self {
        Self {
            id: course.id().clone(),
            title: course.title().to_owned(),
            summary: course.summary().to_owned(),
            image: course.image().to_string(),
            level: course.level(),
            duration: course.duration().to_owned(),
            declared_lessons: course.declared_lessons(),
            progress: course.progress(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstructorView {
    pub name: String,
    pub title: String,
    pub avatar: String,
}

impl InstructorView {
    #[must_use]
    pub fn from_instructor(instructor: &Instructor) -> Self {
        Self {
            name: instructor.name().to_owned(),
            title: instructor.title().to_owned(),
            avatar: instructor.avatar().to_string(),
        }
    }
}

/// Enough of a lesson to render a link or list row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LessonLink {
    pub id: LessonId,
    pub title: String,
    pub duration: String,
    pub kind: LessonKind,
    pub completed: bool,
}

impl LessonLink {
    #[must_use]
    pub fn from_lesson(lesson: &Lesson) -> Self {
        Self {
            id: lesson.id().clone(),
            title: lesson.title().to_owned(),
            duration: lesson.duration().to_owned(),
            kind: lesson.kind(),
            completed: lesson.is_completed(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModuleOverview {
    pub id: ModuleId,
    pub title: String,
    pub stats: CompletionStats,
    pub lessons: Vec<LessonLink>,
}

impl ModuleOverview {
    #[must_use]
    pub fn from_module(module: &Module) -> Self {
        Self {
            id: module.id().clone(),
            title: module.title().to_owned(),
            stats: navigation::module_stats(module),
            lessons: module.lessons().iter().map(LessonLink::from_lesson).collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResumeKind {
    Start,
    Continue,
    Restart,
}

/// Target of the "start" / "continue learning" call to action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResumeView {
    pub kind: ResumeKind,
    pub lesson: LessonLink,
}

impl ResumeView {
    #[must_use]
    pub fn from_target(target: ResumeTarget<'_>) -> Self {
        let kind = match target {
            ResumeTarget::Start(_) => ResumeKind::Start,
            ResumeTarget::Continue(_) => ResumeKind::Continue,
            ResumeTarget::Restart(_) => ResumeKind::Restart,
        };
        Self {
            kind,
            lesson: LessonLink::from_lesson(target.lesson()),
        }
    }
}

/// Course detail page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CourseOverview {
    #[serde(flatten)]
    pub summary: CourseSummary,
    pub description: String,
    pub instructor: InstructorView,
    pub stats: CompletionStats,
    pub modules: Vec<ModuleOverview>,
    pub resume: Option<ResumeView>,
}

impl CourseOverview {
    #[must_use]
    pub fn from_course(course: &Course) -> Self {
        Self {
            summary: CourseSummary::from_course(course),
            description: course.description().to_owned(),
            instructor: InstructorView::from_instructor(course.instructor()),
            stats: navigation::course_stats(course),
            modules: course.modules().iter().map(ModuleOverview::from_module).collect(),
            resume: navigation::resume_target(course).map(ResumeView::from_target),
        }
    }
}

/// Lesson page: the lesson, where it sits, and its neighbours.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LessonContext {
    pub course_id: CourseId,
    pub course_title: String,
    pub module_id: ModuleId,
    pub module_title: String,
    /// 1-based position within the module.
    pub lesson_number: usize,
    pub lesson: LessonLink,
    pub content: Option<String>,
    pub video: Option<String>,
    pub previous: Option<LessonLink>,
    pub next: Option<LessonLink>,
    pub course_stats: CompletionStats,
    pub module_lessons: Vec<LessonLink>,
}

impl LessonContext {
    #[must_use]
    pub fn from_ref(found: &LessonRef<'_>) -> Self {
        Self {
            course_id: found.course.id().clone(),
            course_title: found.course.title().to_owned(),
            module_id: found.module.id().clone(),
            module_title: found.module.title().to_owned(),
            lesson_number: found.position.number(),
            lesson: LessonLink::from_lesson(found.lesson),
            content: found.lesson.content().map(str::to_owned),
            video: found.lesson.video().map(ToString::to_string),
            previous: found.prev().map(LessonLink::from_lesson),
            next: found.next().map(LessonLink::from_lesson),
            course_stats: navigation::course_stats(found.course),
            module_lessons: found
                .module
                .lessons()
                .iter()
                .map(LessonLink::from_lesson)
                .collect(),
        }
    }

    #[must_use]
    pub fn is_last(&self) -> bool {
        self.next.is_none()
    }
}
