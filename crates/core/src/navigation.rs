//! Derived views over a course: progress counts and lesson-to-lesson navigation.
//!
//! Every function here is pure and never indexes out of bounds. Unknown module
//! ids, out-of-range lesson indices and empty modules degrade to `None`.

use serde::Serialize;

use crate::model::{Course, Lesson, Module, Percent};

/// Completed versus total lessons for some lesson sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct CompletionStats {
    pub completed: usize,
    pub total: usize,
    pub percentage: Percent,
}

impl CompletionStats {
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.total > 0 && self.completed == self.total
    }
}

/// Count completed lessons; the percentage is rounded and zero for no lessons.
pub fn completion_stats<'a, I>(lessons: I) -> CompletionStats
where
    I: IntoIterator<Item = &'a Lesson>,
{
    let (completed, total) = lessons.into_iter().fold((0, 0), |(done, all), lesson| {
        (done + usize::from(lesson.is_completed()), all + 1)
    });
    CompletionStats {
        completed,
        total,
        percentage: Percent::of(completed, total),
    }
}

#[must_use]
pub fn course_stats(course: &Course) -> CompletionStats {
    completion_stats(course.lessons())
}

#[must_use]
pub fn module_stats(module: &Module) -> CompletionStats {
    completion_stats(module.lessons())
}

/// Where a lesson sits inside its course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LessonPosition {
    pub module_index: usize,
    pub lesson_index: usize,
}

impl LessonPosition {
    /// 1-based lesson number within the module.
    #[must_use]
    pub fn number(&self) -> usize {
        self.lesson_index + 1
    }
}

/// Find the first module containing `lesson_id` and the lesson's index in it.
#[must_use]
pub fn lesson_position(course: &Course, lesson_id: &str) -> Option<LessonPosition> {
    course
        .modules()
        .iter()
        .enumerate()
        .find_map(|(module_index, module)| {
            module.lesson_index(lesson_id).map(|lesson_index| LessonPosition {
                module_index,
                lesson_index,
            })
        })
}

/// A lesson resolved together with the course and module that own it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LessonRef<'c> {
    pub course: &'c Course,
    pub module: &'c Module,
    pub lesson: &'c Lesson,
    pub position: LessonPosition,
}

impl<'c> LessonRef<'c> {
    #[must_use]
    pub fn next(&self) -> Option<&'c Lesson> {
        next_lesson(self.course, self.module.id().as_str(), self.position.lesson_index)
    }

    #[must_use]
    pub fn prev(&self) -> Option<&'c Lesson> {
        prev_lesson(self.course, self.module.id().as_str(), self.position.lesson_index)
    }
}

/// Resolve a lesson inside `course`, first match in module-then-lesson order.
#[must_use]
pub fn locate<'c>(course: &'c Course, lesson_id: &str) -> Option<LessonRef<'c>> {
    let position = lesson_position(course, lesson_id)?;
    let module = course.modules().get(position.module_index)?;
    let lesson = module.lessons().get(position.lesson_index)?;
    Some(LessonRef {
        course,
        module,
        lesson,
        position,
    })
}

/// The lesson after `lesson_index` in `module_id`, crossing into later modules.
///
/// Empty modules are skipped when crossing a boundary.
#[must_use]
pub fn next_lesson<'c>(
    course: &'c Course,
    module_id: &str,
    lesson_index: usize,
) -> Option<&'c Lesson> {
    let modules = course.modules();
    let module_index = course.module_index(module_id)?;
    let lessons = modules.get(module_index)?.lessons();
    if lesson_index >= lessons.len() {
        return None;
    }
    if let Some(next) = lessons.get(lesson_index + 1) {
        return Some(next);
    }
    modules
        .get(module_index + 1..)?
        .iter()
        .find_map(Module::first_lesson)
}

/// The lesson before `lesson_index` in `module_id`, crossing into earlier modules.
#[must_use]
pub fn prev_lesson<'c>(
    course: &'c Course,
    module_id: &str,
    lesson_index: usize,
) -> Option<&'c Lesson> {
    let modules = course.modules();
    let module_index = course.module_index(module_id)?;
    let lessons = modules.get(module_index)?.lessons();
    if lesson_index >= lessons.len() {
        return None;
    }
    if lesson_index > 0 {
        return lessons.get(lesson_index - 1);
    }
    modules
        .get(..module_index)?
        .iter()
        .rev()
        .find_map(Module::last_lesson)
}

/// First lesson not yet completed, or the course's first lesson once all are done.
///
/// `None` only when the course has no lessons at all.
#[must_use]
pub fn first_incomplete_lesson(course: &Course) -> Option<&Lesson> {
    course
        .lessons()
        .find(|lesson| !lesson.is_completed())
        .or_else(|| course.lessons().next())
}

/// Where a "continue learning" action should land, and why.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResumeTarget<'c> {
    /// Nothing completed yet.
    Start(&'c Lesson),
    /// Some lessons completed; points at the first incomplete one.
    Continue(&'c Lesson),
    /// Every lesson completed; points back at the first lesson.
    Restart(&'c Lesson),
}

impl<'c> ResumeTarget<'c> {
    #[must_use]
    pub fn lesson(&self) -> &'c Lesson {
        match self {
            ResumeTarget::Start(l) | ResumeTarget::Continue(l) | ResumeTarget::Restart(l) => l,
        }
    }
}

#[must_use]
pub fn resume_target(course: &Course) -> Option<ResumeTarget<'_>> {
    let lesson = first_incomplete_lesson(course)?;
    let stats = course_stats(course);
    Some(if stats.is_finished() {
        ResumeTarget::Restart(lesson)
    } else if stats.completed == 0 {
        ResumeTarget::Start(lesson)
    } else {
        ResumeTarget::Continue(lesson)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        AssetUri, CourseDraft, CourseId, CourseLevel, Instructor, LessonId, LessonKind, ModuleId,
    };

    fn lesson(id: &str, done: bool) -> Lesson {
        Lesson::new(LessonId::new(id), id, "10 min", LessonKind::Video)
            .unwrap()
            .with_completed(done)
    }

    fn module(id: &str, lessons: Vec<Lesson>) -> Module {
        Module::new(ModuleId::new(id), id, lessons).unwrap()
    }

    fn course(modules: Vec<Module>) -> Course {
        CourseDraft {
            id: CourseId::new("intro-trading"),
            title: "Introducción al Trading".into(),
            summary: String::new(),
            description: String::new(),
            image: AssetUri::parse("img.jpg").unwrap(),
            declared_lessons: 0,
            duration: "4 horas".into(),
            level: CourseLevel::Beginner,
            progress: Percent::ZERO,
            instructor: Instructor::new("Carlos", AssetUri::parse("a.jpg").unwrap(), "Trader"),
            modules,
        }
        .validate()
        .unwrap()
    }

    fn intro() -> Course {
        course(vec![
            module(
                "module-1",
                vec![
                    lesson("lesson-1-1", true),
                    lesson("lesson-1-2", true),
                    lesson("lesson-1-3", false),
                    lesson("lesson-1-4", false),
                ],
            ),
            module(
                "module-2",
                vec![
                    lesson("lesson-2-1", false),
                    lesson("lesson-2-2", false),
                    lesson("lesson-2-3", false),
                ],
            ),
        ])
    }

    fn id(lesson: Option<&Lesson>) -> Option<&str> {
        lesson.map(|l| l.id().as_str())
    }

    #[test]
    fn stats_of_empty_sequence_are_zero() {
        let stats = completion_stats(std::iter::empty());
        assert_eq!(stats, CompletionStats::default());
        assert!(!stats.is_finished());
    }

    #[test]
    fn stats_round_percentage() {
        let course = intro();
        let first_six: Vec<&Lesson> = course.lessons().take(6).collect();
        let stats = completion_stats(first_six.iter().copied());
        assert_eq!(stats.completed, 2);
        assert_eq!(stats.total, 6);
        assert_eq!(stats.percentage.value(), 33);

        assert_eq!(course_stats(&course).percentage.value(), 29);
        assert_eq!(module_stats(&course.modules()[0]).percentage.value(), 50);
    }

    #[test]
    fn stats_ignore_order() {
        let course = intro();
        let forward = completion_stats(course.lessons());
        let mut reversed: Vec<&Lesson> = course.lessons().collect();
        reversed.reverse();
        assert_eq!(completion_stats(reversed), forward);
        assert_eq!(completion_stats(course.lessons()), forward);
    }

    #[test]
    fn next_crosses_module_boundary() {
        let course = intro();
        assert_eq!(id(next_lesson(&course, "module-1", 3)), Some("lesson-2-1"));
        assert_eq!(id(next_lesson(&course, "module-1", 0)), Some("lesson-1-2"));
        assert_eq!(id(next_lesson(&course, "module-2", 2)), None);
    }

    #[test]
    fn prev_crosses_module_boundary() {
        let course = intro();
        assert_eq!(id(prev_lesson(&course, "module-2", 0)), Some("lesson-1-4"));
        assert_eq!(id(prev_lesson(&course, "module-2", 2)), Some("lesson-2-2"));
        assert_eq!(id(prev_lesson(&course, "module-1", 0)), None);
    }

    #[test]
    fn unknown_module_or_index_is_none() {
        let course = intro();
        assert!(next_lesson(&course, "module-9", 0).is_none());
        assert!(prev_lesson(&course, "module-9", 0).is_none());
        assert!(next_lesson(&course, "module-1", 4).is_none());
        assert!(prev_lesson(&course, "module-2", 3).is_none());
    }

    #[test]
    fn walking_forward_visits_every_lesson_once() {
        let course = intro();
        let expected: Vec<&str> = course.lessons().map(|l| l.id().as_str()).collect();

        let mut visited = vec!["lesson-1-1"];
        let mut current = LessonPosition {
            module_index: 0,
            lesson_index: 0,
        };
        loop {
            let module_id = course.modules()[current.module_index].id().as_str();
            let Some(next) = next_lesson(&course, module_id, current.lesson_index) else {
                break;
            };
            visited.push(next.id().as_str());
            current = lesson_position(&course, next.id().as_str()).unwrap();
        }
        assert_eq!(visited, expected);
    }

    #[test]
    fn prev_undoes_next() {
        let course = intro();
        for lesson in course.lessons() {
            let pos = lesson_position(&course, lesson.id().as_str()).unwrap();
            let module_id = course.modules()[pos.module_index].id().as_str();
            let Some(next) = next_lesson(&course, module_id, pos.lesson_index) else {
                continue;
            };
            let next_pos = lesson_position(&course, next.id().as_str()).unwrap();
            let next_module = course.modules()[next_pos.module_index].id().as_str();
            let back = prev_lesson(&course, next_module, next_pos.lesson_index);
            assert_eq!(back, Some(lesson));
        }
    }

    #[test]
    fn empty_modules_are_skipped() {
        let course = course(vec![
            module("a", vec![lesson("a-1", false)]),
            module("empty", Vec::new()),
            module("b", vec![lesson("b-1", false)]),
        ]);
        assert_eq!(id(next_lesson(&course, "a", 0)), Some("b-1"));
        assert_eq!(id(prev_lesson(&course, "b", 0)), Some("a-1"));
        assert!(next_lesson(&course, "empty", 0).is_none());
        assert!(prev_lesson(&course, "empty", 0).is_none());
    }

    #[test]
    fn first_incomplete_finds_resume_point() {
        assert_eq!(id(first_incomplete_lesson(&intro())), Some("lesson-1-3"));
    }

    #[test]
    fn first_incomplete_falls_back_to_first_lesson() {
        let done = course(vec![
            module("empty", Vec::new()),
            module("m", vec![lesson("x", true), lesson("y", true)]),
        ]);
        assert_eq!(id(first_incomplete_lesson(&done)), Some("x"));
        assert!(matches!(resume_target(&done), Some(ResumeTarget::Restart(_))));
    }

    #[test]
    fn course_without_lessons_has_no_target() {
        let bare = course(Vec::new());
        assert!(first_incomplete_lesson(&bare).is_none());
        assert!(resume_target(&bare).is_none());

        let hollow = course(vec![module("m", Vec::new())]);
        assert!(first_incomplete_lesson(&hollow).is_none());
        assert!(next_lesson(&hollow, "m", 0).is_none());
    }

    #[test]
    fn resume_target_distinguishes_start_and_continue() {
        let fresh = course(vec![module("m", vec![lesson("x", false)])]);
        assert!(matches!(resume_target(&fresh), Some(ResumeTarget::Start(_))));

        let intro = intro();
        let target = resume_target(&intro).unwrap();
        assert!(matches!(target, ResumeTarget::Continue(_)));
        assert_eq!(target.lesson().id().as_str(), "lesson-1-3");
    }

    #[test]
    fn locate_links_neighbours() {
        let course = intro();
        let found = locate(&course, "lesson-1-4").unwrap();
        assert_eq!(found.module.id().as_str(), "module-1");
        assert_eq!(id(found.next()), Some("lesson-2-1"));
        assert_eq!(id(found.prev()), Some("lesson-1-3"));
        assert!(locate(&course, "lesson-7-7").is_none());
    }

    #[test]
    fn lesson_position_numbers_from_one() {
        let course = intro();
        let pos = lesson_position(&course, "lesson-2-3").unwrap();
        assert_eq!(pos.module_index, 1);
        assert_eq!(pos.number(), 3);
        assert!(lesson_position(&course, "missing").is_none());
    }
}
