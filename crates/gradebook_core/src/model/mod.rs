//! Gradebook domain model.
//!
//! # Responsibility
//! - Define students, grade records and modules as plain owned data.
//! - Provide the two module listings (canonical order and grade-ranked).
//!
//! # Invariants
//! - Every auto-assigned `StudentId` comes from an explicit `IdAllocator`.
//! - A module's stored record order is insertion order.

pub mod listing;
pub mod module;
pub mod student;
