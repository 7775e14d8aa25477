//! Qualified names for foreign classes.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Dot-separated qualified name of a foreign class, e.g. `java.util.List`.
///
/// Cheap to clone; equality and hashing compare the full text. Names are
/// created once per syntactic entity and shared by reference afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QualifiedName(Arc<str>);

impl QualifiedName {
    pub fn new(text: impl Into<Arc<str>>) -> Self {
        QualifiedName(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The segment after the last dot, or the whole name if there is none.
    pub fn short_name(&self) -> &str {
        self.0.rsplit('.').next().unwrap_or(&self.0)
    }
}

impl From<&str> for QualifiedName {
    fn from(text: &str) -> Self {
        QualifiedName(Arc::from(text))
    }
}

impl std::fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_name_strips_package() {
        let name = QualifiedName::from("java.util.List");
        assert_eq!(name.short_name(), "List");
        assert_eq!(name.as_str(), "java.util.List");
    }

    #[test]
    fn short_name_of_unqualified_name() {
        assert_eq!(QualifiedName::from("List").short_name(), "List");
    }
}
