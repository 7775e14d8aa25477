//! Type-variable scopes.
//!
//! A scope maps a type-parameter name occurring in syntax to the
//! corresponding entry in the owning class's type-parameter list. The
//! context label is carried for diagnostics only.

use crate::symbols::ClassSymbol;
use crate::types::TypeParameter;

pub struct TypeVariableScope<'a> {
    parameters: &'a [TypeParameter],
    label: String,
}

impl<'a> TypeVariableScope<'a> {
    /// Scope resolving the type parameters of `class`.
    pub fn for_class(class: &'a ClassSymbol, label: impl Into<String>) -> TypeVariableScope<'a> {
        TypeVariableScope {
            parameters: &class.type_parameters,
            label: label.into(),
        }
    }

    /// A scope with no type variables. Signature overrides never introduce
    /// new type parameters, but they still resolve names under the class
    /// scope; the empty scope exists for contexts outside any class.
    pub fn empty(label: impl Into<String>) -> TypeVariableScope<'static> {
        TypeVariableScope {
            parameters: &[],
            label: label.into(),
        }
    }

    pub fn resolve(&self, name: &str) -> Option<&TypeParameter> {
        self.parameters.iter().find(|p| p.name == name)
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbols::ClassKind;
    use jbind_common::Visibility;
    use jbind_syntax::ClassId;

    #[test]
    fn resolves_declared_parameters_by_name() {
        let class = ClassSymbol::new(
            ClassId(0),
            "p.Box",
            ClassKind::Class,
            vec![TypeParameter::new("T", 0), TypeParameter::new("U", 1)],
            Visibility::Public,
        );
        let scope = TypeVariableScope::for_class(&class, "class p.Box");
        assert_eq!(scope.resolve("U"), Some(&TypeParameter::new("U", 1)));
        assert_eq!(scope.resolve("V"), None);
        assert_eq!(scope.label(), "class p.Box");
    }

    #[test]
    fn empty_scope_resolves_nothing() {
        let scope = TypeVariableScope::empty("override");
        assert_eq!(scope.resolve("T"), None);
    }
}
