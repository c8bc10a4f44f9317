//! Gradebook use-case service.
//!
//! # Responsibility
//! - Own the id allocator so callers enroll students without threading it.
//! - Keep a name-keyed registry of modules in creation order.
//!
//! # Invariants
//! - Module names are unique and non-blank within one service.
//! - Grades are only ever appended through `Module::add_record`.

use crate::model::module::{Grade, Module};
use crate::model::student::{IdAllocator, Student, StudentId};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service-level error for module registry operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GradebookError {
    /// Module name is empty or whitespace only.
    InvalidModuleName(String),
    /// A module with this name already exists.
    DuplicateModule(String),
    /// No module with this name exists.
    ModuleNotFound(String),
}

impl Display for GradebookError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidModuleName(name) => write!(f, "invalid module name: `{name}`"),
            Self::DuplicateModule(name) => write!(f, "module already exists: `{name}`"),
            Self::ModuleNotFound(name) => write!(f, "module not found: `{name}`"),
        }
    }
}

impl Error for GradebookError {}

pub type GradebookResult<T> = Result<T, GradebookError>;

/// Use-case wrapper around one id allocator and its modules.
#[derive(Debug, Default)]
pub struct GradebookService {
    ids: IdAllocator,
    modules: Vec<Module>,
}

impl GradebookService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a student with the next auto-assigned id.
    pub fn enroll(&mut self, first_name: impl Into<String>, surname: impl Into<String>) -> Student {
        let student = Student::new(&mut self.ids, first_name, surname);
        log::debug!(
            "event=student_enrolled module=service status=ok student_id={} auto_id=true",
            student.id
        );
        student
    }

    /// Creates a student with an explicit id; the allocator is not advanced.
    pub fn enroll_with_id(
        &self,
        id: StudentId,
        first_name: impl Into<String>,
        surname: impl Into<String>,
    ) -> Student {
        log::debug!(
            "event=student_enrolled module=service status=ok student_id={id} auto_id=false"
        );
        Student::with_id(id, first_name, surname)
    }

    /// Registers an empty module.
    ///
    /// # Errors
    /// - `InvalidModuleName` when `name` is blank.
    /// - `DuplicateModule` when `name` is already registered.
    pub fn create_module(&mut self, name: impl Into<String>) -> GradebookResult<()> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(GradebookError::InvalidModuleName(name));
        }
        if self.module(name.as_str()).is_some() {
            return Err(GradebookError::DuplicateModule(name));
        }

        log::info!("event=module_created module=service status=ok module_name={name}");
        self.modules.push(Module::new(name));
        Ok(())
    }

    /// Appends `student`'s grade to the named module.
    ///
    /// # Errors
    /// - `ModuleNotFound` when no module is registered under `module_name`.
    pub fn record_grade(
        &mut self,
        module_name: &str,
        student: Student,
        grade: Grade,
    ) -> GradebookResult<()> {
        let module = self
            .modules
            .iter_mut()
            .find(|module| module.name == module_name)
            .ok_or_else(|| GradebookError::ModuleNotFound(module_name.to_string()))?;
        module.add_record(student, grade);
        Ok(())
    }

    pub fn module(&self, name: &str) -> Option<&Module> {
        self.modules.iter().find(|module| module.name == name)
    }

    /// Registered modules in creation order.
    pub fn modules(&self) -> impl Iterator<Item = &Module> {
        self.modules.iter()
    }

    /// Last auto-assigned id, `0` when none.
    pub fn last_id(&self) -> StudentId {
        self.ids.peek()
    }

    /// Restarts auto-assigned ids at `1`. Existing students keep their ids.
    pub fn reset_ids(&mut self) {
        self.ids.reset();
    }
}
