use std::sync::Arc;

use academy_core::model::LessonCompletion;
use academy_core::time::{fixed_clock, fixed_now};
use async_trait::async_trait;
use services::{AppServices, CompletionError, NextStep};
use storage::{
    CompletionRecorder, InMemoryCompletionLog, LessonCountPolicy, Storage, StorageError,
};

struct Unreachable;

#[async_trait]
impl CompletionRecorder for Unreachable {
    async fn record(&self, _completion: &LessonCompletion) -> Result<(), StorageError> {
        Err(StorageError::Recorder("progress backend offline".into()))
    }
}

fn services_with(recorder: Arc<dyn CompletionRecorder>) -> AppServices {
    let storage = Storage::seeded(LessonCountPolicy::Warn)
        .expect("seed catalog")
        .with_recorder(recorder);
    AppServices::new(&storage, fixed_clock())
}

#[tokio::test]
async fn completing_a_lesson_points_at_the_next_one() {
    let log = InMemoryCompletionLog::new();
    let services = services_with(Arc::new(log.clone()));

    let outcome = services
        .completions()
        .notify_lesson_completed("intro-trading", "lesson-1-4")
        .await
        .unwrap();

    assert_eq!(outcome.next, NextStep::Continue("lesson-2-1".parse().unwrap()));
    assert_eq!(outcome.completion.completed_at, fixed_now());

    let events = log.events().unwrap();
    assert_eq!(events, vec![outcome.completion]);
}

#[tokio::test]
async fn completing_the_last_lesson_finishes_the_course() {
    let services = services_with(Arc::new(InMemoryCompletionLog::new()));
    let outcome = services
        .completions()
        .notify_lesson_completed("trading-psychology", "lesson-2-2")
        .await
        .unwrap();
    assert!(outcome.is_course_finished());
}

#[tokio::test]
async fn completion_never_mutates_the_catalog() {
    let services = services_with(Arc::new(InMemoryCompletionLog::new()));
    services
        .completions()
        .notify_lesson_completed("intro-trading", "lesson-1-3")
        .await
        .unwrap();

    let lesson = services
        .catalog()
        .find_lesson("intro-trading", "lesson-1-3")
        .map(|l| l.is_completed());
    assert_eq!(lesson, Some(false));
}

#[tokio::test]
async fn unknown_lesson_is_rejected_before_recording() {
    let log = InMemoryCompletionLog::new();
    let services = services_with(Arc::new(log.clone()));
    let err = services
        .completions()
        .notify_lesson_completed("intro-trading", "lesson-3-1")
        .await
        .unwrap_err();
    assert!(matches!(err, CompletionError::UnknownLesson { .. }));
    assert!(log.events().unwrap().is_empty());
}

#[tokio::test]
async fn recorder_failure_is_surfaced() {
    let services = services_with(Arc::new(Unreachable));
    let err = services
        .completions()
        .notify_lesson_completed("intro-trading", "lesson-1-3")
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        CompletionError::Storage(StorageError::Recorder(_))
    ));
}
