//! The binding trace: memoization cache and diagnostic sink.
//!
//! Resolved constructors are recorded under the identity of the syntax they
//! came from. For a given key, every successful resolution returns the same
//! descriptor instance (`Arc` clone, reference-identical), never a
//! structurally-equal copy. Entries live for the whole compilation session
//! and are never evicted.
//!
//! The trace assumes a single writer per key: either single-threaded
//! compilation, or an outer layer serializing access per key.

use crate::symbols::ConstructorDescriptor;
use jbind_common::Diagnostic;
use jbind_syntax::{ClassId, CtorId};
use rustc_hash::FxHashMap;
use std::sync::Arc;

/// Identity of a syntactic entity used as a cache key. Synthesized
/// constructors are keyed by their class; declared constructors by their
/// own syntax node.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SyntaxKey {
    Class(ClassId),
    Constructor(CtorId),
}

#[derive(Debug, Default)]
pub struct BindingTrace {
    constructors: FxHashMap<SyntaxKey, Arc<ConstructorDescriptor>>,
    signature_errors: FxHashMap<SyntaxKey, Diagnostic>,
}

impl BindingTrace {
    pub fn new() -> BindingTrace {
        BindingTrace::default()
    }

    pub fn get(&self, key: SyntaxKey) -> Option<Arc<ConstructorDescriptor>> {
        self.constructors.get(&key).cloned()
    }

    pub fn contains(&self, key: SyntaxKey) -> bool {
        self.constructors.contains_key(&key)
    }

    /// Records a resolved constructor. Re-recording under the same key
    /// replaces the entry; the annotation-type synthesis path relies on
    /// this to supersede the default constructor under the class key.
    pub fn record(&mut self, key: SyntaxKey, descriptor: Arc<ConstructorDescriptor>) {
        self.constructors.insert(key, descriptor);
    }

    /// Records a non-fatal signature-override diagnostic against the
    /// constructor it was attached to.
    pub fn record_signature_error(&mut self, key: SyntaxKey, diagnostic: Diagnostic) {
        self.signature_errors.insert(key, diagnostic);
    }

    pub fn signature_error(&self, key: SyntaxKey) -> Option<&Diagnostic> {
        self.signature_errors.get(&key)
    }

    pub fn signature_error_count(&self) -> usize {
        self.signature_errors.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbols::{ClassKind, ClassSymbol, ConstructorDescriptorBuilder};
    use jbind_common::Visibility;

    #[test]
    fn get_returns_the_recorded_instance() {
        let class = ClassSymbol::new(
            ClassId(0),
            "p.C",
            ClassKind::Class,
            vec![],
            Visibility::Public,
        );
        let descriptor = ConstructorDescriptorBuilder::new(class).build();
        let mut trace = BindingTrace::new();
        let key = SyntaxKey::Class(ClassId(0));
        trace.record(key, Arc::clone(&descriptor));
        assert!(Arc::ptr_eq(&trace.get(key).unwrap(), &descriptor));
        assert!(trace.get(SyntaxKey::Constructor(CtorId(0))).is_none());
    }

    #[test]
    fn re_recording_replaces_the_entry() {
        let class = ClassSymbol::new(
            ClassId(0),
            "p.C",
            ClassKind::Class,
            vec![],
            Visibility::Public,
        );
        let first = ConstructorDescriptorBuilder::new(Arc::clone(&class)).build();
        let second = ConstructorDescriptorBuilder::new(class).build();
        let mut trace = BindingTrace::new();
        let key = SyntaxKey::Class(ClassId(0));
        trace.record(key, first);
        trace.record(key, Arc::clone(&second));
        assert!(Arc::ptr_eq(&trace.get(key).unwrap(), &second));
    }
}
