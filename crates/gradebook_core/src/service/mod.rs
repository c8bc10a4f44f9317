//! Gradebook use-case services.
//!
//! # Responsibility
//! - Orchestrate model construction into caller-facing entry points.
//! - Keep id allocation out of CLI/demo call sites.

pub mod gradebook_service;
