use serde::Serialize;

use academy_core::model::{Course, Percent};

use crate::views::CourseSummary;

/// Aggregates and the course list shown on the learner profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileStats {
    pub courses: usize,
    /// Sum of the lesson counts the courses advertise.
    pub declared_lessons: u64,
    /// Completed lessons actually present in the catalog.
    pub completed_lessons: usize,
    /// Mean of the courses' display progress, rounded.
    pub average_progress: Percent,
    /// Every course with its advertised lesson count, duration and progress.
    pub my_courses: Vec<CourseSummary>,
}

impl ProfileStats {
    #[must_use]
    pub fn from_courses(courses: &[Course]) -> Self {
        let declared_lessons = courses.iter().map(|c| u64::from(c.declared_lessons())).sum();
        let completed_lessons = courses.iter().map(Course::completed_lessons).sum();
        let progress_sum: u32 = courses.iter().map(|c| u32::from(c.progress().value())).sum();

        let average_progress = match u32::try_from(courses.len()) {
            Ok(0) | Err(_) => Percent::ZERO,
            Ok(n) => Percent::new((progress_sum + n / 2) / n).unwrap_or(Percent::FULL),
        };

        Self {
            courses: courses.len(),
            declared_lessons,
            completed_lessons,
            average_progress,
            my_courses: courses.iter().map(CourseSummary::from_course).collect(),
        }
    }
}
