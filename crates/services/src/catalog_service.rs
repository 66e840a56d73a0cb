use std::sync::Arc;

use academy_core::model::{Course, CourseLevel, Lesson};
use academy_core::navigation::LessonRef;
use storage::CatalogRepository;
use tracing::debug;

use crate::profile::ProfileStats;
use crate::views::{CourseOverview, CourseSummary, LessonContext};

/// Search criteria for the course list.
///
/// An unset or blank query and an unset level match every course.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CourseFilter {
    query: Option<String>,
    level: Option<CourseLevel>,
}

impl CourseFilter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        let query = query.into().trim().to_lowercase();
        self.query = (!query.is_empty()).then_some(query);
        self
    }

    #[must_use]
    pub fn with_level(mut self, level: Option<CourseLevel>) -> Self {
        self.level = level;
        self
    }

    /// Case-insensitive substring match on title or short description, and level equality.
    #[must_use]
    pub fn matches(&self, course: &Course) -> bool {
        let matches_query = self.query.as_deref().is_none_or(|q| {
            course.title().to_lowercase().contains(q) || course.summary().to_lowercase().contains(q)
        });
        let matches_level = self.level.is_none_or(|level| course.level() == level);
        matches_query && matches_level
    }
}

/// Read-only lookups over the injected catalog.
#[derive(Clone)]
pub struct CatalogService {
    catalog: Arc<dyn CatalogRepository>,
}

impl CatalogService {
    #[must_use]
    pub fn new(catalog: Arc<dyn CatalogRepository>) -> Self {
        Self { catalog }
    }

    /// All courses in catalog order.
    #[must_use]
    pub fn courses(&self) -> &[Course] {
        self.catalog.courses()
    }

    /// Returns `None` when no course has this id.
    #[must_use]
    pub fn find_course(&self, course_id: &str) -> Option<&Course> {
        let course = self.catalog.course(course_id);
        if course.is_none() {
            debug!(course = course_id, "course not found");
        }
        course
    }

    /// Returns `None` when the course is missing or none of its modules holds the lesson.
    #[must_use]
    pub fn find_lesson(&self, course_id: &str, lesson_id: &str) -> Option<&Lesson> {
        self.locate_lesson(course_id, lesson_id).map(|found| found.lesson)
    }

    /// Like `find_lesson`, also returning the owning course, module and position.
    #[must_use]
    pub fn locate_lesson(&self, course_id: &str, lesson_id: &str) -> Option<LessonRef<'_>> {
        let found = self.catalog.lesson(course_id, lesson_id);
        if found.is_none() {
            debug!(course = course_id, lesson = lesson_id, "lesson not found");
        }
        found
    }

    /// Courses matching `filter`, in catalog order.
    #[must_use]
    pub fn search(&self, filter: &CourseFilter) -> Vec<&Course> {
        self.courses().iter().filter(|c| filter.matches(c)).collect()
    }

    /// The first `limit` courses, as highlighted on the home screen.
    #[must_use]
    pub fn featured(&self, limit: usize) -> &[Course] {
        let courses = self.courses();
        &courses[..limit.min(courses.len())]
    }

    #[must_use]
    pub fn summaries(&self, filter: &CourseFilter) -> Vec<CourseSummary> {
        self.search(filter)
            .into_iter()
            .map(CourseSummary::from_course)
            .collect()
    }

    #[must_use]
    pub fn course_overview(&self, course_id: &str) -> Option<CourseOverview> {
        self.find_course(course_id).map(CourseOverview::from_course)
    }

    #[must_use]
    pub fn lesson_context(&self, course_id: &str, lesson_id: &str) -> Option<LessonContext> {
        self.locate_lesson(course_id, lesson_id)
            .map(|found| LessonContext::from_ref(&found))
    }

    #[must_use]
    pub fn profile(&self) -> ProfileStats {
        ProfileStats::from_courses(self.courses())
    }
}
