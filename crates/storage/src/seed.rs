use tracing::info;

use crate::records::load_catalog_json;
use crate::repository::{CatalogRepository, LessonCountPolicy, StaticCatalog, StorageError};

/// The bundled trading course dataset.
pub const SEED_CATALOG_JSON: &str = include_str!("../data/courses.json");

/// Build the catalog from the bundled dataset.
///
/// The bundled courses advertise more lessons than they ship, so
/// `LessonCountPolicy::Strict` rejects them. Under `LessonCountPolicy::Warn`
/// the known gap is reported once at info level instead of per course.
///
/// # Errors
///
/// Returns `StorageError` if the dataset fails validation under `policy`.
pub fn seed_catalog(policy: LessonCountPolicy) -> Result<StaticCatalog, StorageError> {
    if policy != LessonCountPolicy::Warn {
        return load_catalog_json(SEED_CATALOG_JSON, policy);
    }
    let catalog = load_catalog_json(SEED_CATALOG_JSON, LessonCountPolicy::Ignore)?;
    let mismatched = catalog
        .courses()
        .iter()
        .filter(|course| course.lesson_count_mismatch().is_some())
        .count();
    if mismatched > 0 {
        info!(courses = mismatched, "bundled catalog declares more lessons than it contains");
    }
    Ok(catalog)
}
