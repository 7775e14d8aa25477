//! Diagnostics reported during resolution.
//!
//! Diagnostics are recorded, never thrown: a malformed external annotation
//! must not abort resolution of the class it is attached to.

use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiagnosticCategory {
    Warning,
    Error,
    Message,
}

/// Diagnostic codes used by the resolution core.
pub mod diagnostic_codes {
    /// Signature-override metadata was present but failed to parse.
    pub const MALFORMED_SIGNATURE_OVERRIDE: u32 = 1001;
    /// A type reference in a signature could not be resolved.
    pub const UNRESOLVED_TYPE_REFERENCE: u32 = 1002;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub category: DiagnosticCategory,
    pub code: u32,
    pub message_text: String,
}

impl Diagnostic {
    pub fn error(code: u32, message: impl Into<String>) -> Self {
        Self {
            category: DiagnosticCategory::Error,
            code,
            message_text: message.into(),
        }
    }

    pub fn warning(code: u32, message: impl Into<String>) -> Self {
        Self {
            category: DiagnosticCategory::Warning,
            code,
            message_text: message.into(),
        }
    }
}
