#![forbid(unsafe_code)]

pub mod records;
pub mod repository;
pub mod seed;

pub use records::{load_catalog_file, load_catalog_json};
pub use repository::{
    CatalogRepository, CompletionRecorder, InMemoryCompletionLog, LessonCountPolicy,
    LoggingCompletionRecorder, StaticCatalog, Storage, StorageError,
};
pub use seed::seed_catalog;
