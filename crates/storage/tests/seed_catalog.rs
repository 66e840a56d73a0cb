use storage::{CatalogRepository, LessonCountPolicy, Storage, seed_catalog};

#[test]
fn every_seeded_lesson_resolves_to_itself() {
    let catalog = seed_catalog(LessonCountPolicy::Warn).unwrap();
    let mut checked = 0;
    for course in catalog.courses() {
        for module in course.modules() {
            for lesson in module.lessons() {
                let found = catalog
                    .lesson(course.id().as_str(), lesson.id().as_str())
                    .expect("seeded lesson resolves");
                assert!(std::ptr::eq(found.lesson, lesson));
                assert_eq!(found.module.id(), module.id());
                checked += 1;
            }
        }
    }
    assert_eq!(checked, 19);
}

#[test]
fn unknown_ids_resolve_to_nothing() {
    let catalog = seed_catalog(LessonCountPolicy::Warn).unwrap();
    assert!(catalog.course("forex-101").is_none());
    assert!(catalog.course("").is_none());
    assert!(catalog.lesson("forex-101", "lesson-1-1").is_none());
    assert!(catalog.lesson("intro-trading", "lesson-9-9").is_none());
    assert!(catalog.lesson("intro-trading", "").is_none());
}

#[test]
fn seeded_storage_shares_one_catalog() {
    let storage = Storage::seeded(LessonCountPolicy::Ignore).unwrap();
    let copy = storage.clone();
    assert_eq!(storage.catalog.courses().len(), 4);
    assert!(std::sync::Arc::ptr_eq(&storage.catalog, &copy.catalog));
}
