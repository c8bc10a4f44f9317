//! Student domain model.
//!
//! # Responsibility
//! - Define the identifiable person that grade records refer to.
//! - Own the sequential id allocation used for auto-assigned ids.
//!
//! # Invariants
//! - Auto-assigned ids are pre-incremented: the first id after a reset is `1`.
//! - An explicit id never advances the allocator.
//! - Cloning a `Student` keeps its id; only `IdAllocator::next` mints ids.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::io::Write;

/// Numeric student identifier.
pub type StudentId = u32;

/// Sequential id source for auto-assigned student ids.
///
/// Replaces a hidden process-wide counter: callers own the allocator and pass
/// it to construction sites, so tests can reset it deterministically.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdAllocator {
    last: StudentId,
}

impl IdAllocator {
    /// Creates an allocator whose first issued id is `1`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Advances the counter and returns the fresh id.
    pub fn next(&mut self) -> StudentId {
        self.last += 1;
        self.last
    }

    /// Returns the last id handed out, or `0` when none was issued yet.
    pub fn peek(&self) -> StudentId {
        self.last
    }

    /// Resets the counter so the next issued id is `1` again.
    pub fn reset(&mut self) {
        self.last = 0;
    }
}

/// One identifiable person.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub first_name: String,
    pub surname: String,
    pub id: StudentId,
}

impl Student {
    /// Creates a student with an id taken from `ids`.
    pub fn new(
        ids: &mut IdAllocator,
        first_name: impl Into<String>,
        surname: impl Into<String>,
    ) -> Self {
        Self::with_id(ids.next(), first_name, surname)
    }

    /// Creates a student with a caller-provided id.
    ///
    /// The id is used verbatim and no allocator is touched. Name fields are
    /// not validated; empty strings are accepted.
    pub fn with_id(
        id: StudentId,
        first_name: impl Into<String>,
        surname: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            surname: surname.into(),
            id,
        }
    }

    /// Writes `"<first_name> <surname> <id>"` to stdout without a newline.
    pub fn print(&self) {
        let mut stdout = std::io::stdout().lock();
        if let Err(err) = write!(stdout, "{self}") {
            log::warn!("event=student_print module=model status=error error={err}");
        }
    }
}

impl Display for Student {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.first_name, self.surname, self.id)
    }
}
