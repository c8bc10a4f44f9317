//! Module and grade record models.
//!
//! # Responsibility
//! - Pair students with grades and group those pairs under a named module.
//! - Keep the stored record order equal to insertion order.
//!
//! # Invariants
//! - Records own their `Student` copy; no record aliases another.
//! - The only mutation is appending; presentation never reorders `grades`.
//! - Duplicate student ids are allowed and kept as separate records.

use crate::model::student::Student;
use serde::{Deserialize, Serialize};

/// Integer grade. No range is enforced.
pub type Grade = i32;

/// A single (student, grade) pairing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleRecord {
    pub student: Student,
    pub grade: Grade,
}

impl ModuleRecord {
    pub fn new(student: Student, grade: Grade) -> Self {
        Self { student, grade }
    }
}

/// Named, insertion-ordered collection of grade records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Module {
    pub name: String,
    pub grades: Vec<ModuleRecord>,
}

impl Module {
    /// Creates an empty module.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_records(name, Vec::new())
    }

    /// Creates a module seeded with `records`, kept in the given order.
    pub fn with_records(name: impl Into<String>, records: Vec<ModuleRecord>) -> Self {
        Self {
            name: name.into(),
            grades: records,
        }
    }

    /// Appends a record for `student` at the end of the canonical order.
    pub fn add_record(&mut self, student: Student, grade: Grade) {
        log::debug!(
            "event=record_added module=model status=ok module_name={} student_id={} grade={}",
            self.name,
            student.id,
            grade
        );
        self.grades.push(ModuleRecord::new(student, grade));
    }

    /// Records in canonical (insertion) order.
    pub fn records(&self) -> &[ModuleRecord] {
        &self.grades
    }

    pub fn len(&self) -> usize {
        self.grades.len()
    }

    pub fn is_empty(&self) -> bool {
        self.grades.is_empty()
    }
}
