//! Core domain logic for the gradebook.
//! This crate is the single source of truth for student and module invariants.

pub mod logging;
pub mod model;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::listing::{rank_by_grade, write_records};
pub use model::module::{Grade, Module, ModuleRecord};
pub use model::student::{IdAllocator, Student, StudentId};
pub use service::gradebook_service::{GradebookError, GradebookResult, GradebookService};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
