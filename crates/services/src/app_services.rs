use std::sync::Arc;

use storage::{LessonCountPolicy, Storage, StorageError};

use crate::Clock;
use crate::catalog_service::CatalogService;
use crate::completion_service::CompletionService;

/// Assembles app-facing services over one shared storage.
#[derive(Clone)]
pub struct AppServices {
    catalog: Arc<CatalogService>,
    completions: Arc<CompletionService>,
}

impl AppServices {
    #[must_use]
    pub fn new(storage: &Storage, clock: Clock) -> Self {
        let catalog = Arc::new(CatalogService::new(Arc::clone(&storage.catalog)));
        let completions = Arc::new(CompletionService::new(
            clock,
            Arc::clone(&storage.catalog),
            Arc::clone(&storage.completions),
        ));
        Self {
            catalog,
            completions,
        }
    }

    /// Services over the bundled dataset with the logging completion recorder.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the bundled dataset fails validation under `policy`.
    pub fn seeded(policy: LessonCountPolicy, clock: Clock) -> Result<Self, StorageError> {
        let storage = Storage::seeded(policy)?;
        Ok(Self::new(&storage, clock))
    }

    #[must_use]
    pub fn catalog(&self) -> Arc<CatalogService> {
        Arc::clone(&self.catalog)
    }

    #[must_use]
    pub fn completions(&self) -> Arc<CompletionService> {
        Arc::clone(&self.completions)
    }
}
