//! Common types and utilities for the jbind foreign-class resolver.
//!
//! This crate provides foundational types used across all jbind crates:
//! - Diagnostics (`Diagnostic`, `DiagnosticCategory`, `diagnostic_codes`)
//! - Qualified names (`QualifiedName`)
//! - Common enums shared between syntax and semantics (`Visibility`)

// Diagnostics - reported, never thrown
pub mod diagnostics;
pub use diagnostics::{Diagnostic, DiagnosticCategory, diagnostic_codes};

// Common enums - shared to break circular dependencies between
// the syntax and semantic crates
pub mod common;
pub use common::Visibility;

// Qualified names for foreign classes
pub mod names;
pub use names::QualifiedName;
