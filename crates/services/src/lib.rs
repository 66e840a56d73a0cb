#![forbid(unsafe_code)]

pub mod app_services;
pub mod catalog_service;
pub mod completion_service;
pub mod error;
pub mod profile;
pub mod views;

pub use academy_core::Clock;

pub use app_services::AppServices;
pub use catalog_service::{CatalogService, CourseFilter};
pub use completion_service::{CompletionOutcome, CompletionService, NextStep};
pub use error::CompletionError;
pub use profile::ProfileStats;
pub use views::{
    CourseOverview, CourseSummary, InstructorView, LessonContext, LessonLink, ModuleOverview,
    ResumeKind, ResumeView,
};
