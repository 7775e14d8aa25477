//! Class symbols and constructor descriptors.
//!
//! Descriptors are immutable once built. `ConstructorDescriptorBuilder` only
//! yields a descriptor after every field, including the declared return
//! type, has been supplied, so no other resolution in progress can observe a
//! half-initialized descriptor.

use crate::types::{SemanticType, TypeParameter};
use jbind_common::{QualifiedName, Visibility};
use jbind_syntax::{AccessModifier, ClassId, ConstructorSyntax};
use smallvec::SmallVec;
use std::sync::Arc;

/// Kind of a resolved class.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ClassKind {
    Class,
    Interface,
    Object,
    CompanionObject,
    Annotation,
    Enum,
}

/// Semantic descriptor of a class. Owned by the surrounding binder; the
/// constructor resolver only reads it.
#[derive(Debug)]
pub struct ClassSymbol {
    /// Identity of this class's syntax in the arena.
    pub id: ClassId,
    pub name: QualifiedName,
    pub kind: ClassKind,
    pub type_parameters: Vec<TypeParameter>,
    pub visibility: Visibility,
    /// The class's own type applied to its own type parameters. Every
    /// constructor's declared return type.
    default_type: SemanticType,
}

impl ClassSymbol {
    pub fn new(
        id: ClassId,
        name: impl Into<QualifiedName>,
        kind: ClassKind,
        type_parameters: Vec<TypeParameter>,
        visibility: Visibility,
    ) -> Arc<ClassSymbol> {
        let name = name.into();
        let default_type = SemanticType::Class {
            name: name.clone(),
            args: type_parameters
                .iter()
                .map(|p| SemanticType::TypeVar(p.clone()))
                .collect(),
        };
        Arc::new(ClassSymbol {
            id,
            name,
            kind,
            type_parameters,
            visibility,
            default_type,
        })
    }

    pub fn default_type(&self) -> &SemanticType {
        &self.default_type
    }
}

/// One resolved constructor parameter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValueParameterDescriptor {
    pub name: String,
    /// 0-based position in the owning constructor's parameter list.
    pub index: usize,
    pub ty: SemanticType,
    pub has_default: bool,
    /// Element type when the parameter is variadic.
    pub vararg_element: Option<SemanticType>,
}

/// Parameter lists are short in practice; keep small ones inline.
pub type ParamList = SmallVec<[ValueParameterDescriptor; 4]>;

/// A fully resolved constructor.
#[derive(Debug)]
pub struct ConstructorDescriptor {
    owner: Arc<ClassSymbol>,
    /// Copied from the owner, by construction.
    pub type_parameters: Vec<TypeParameter>,
    pub value_parameters: ParamList,
    pub visibility: Visibility,
    pub is_static: bool,
    /// Always the owner's default type.
    pub return_type: SemanticType,
}

impl ConstructorDescriptor {
    pub fn owner(&self) -> &Arc<ClassSymbol> {
        &self.owner
    }
}

/// Builds a [`ConstructorDescriptor`]. The return type and copied
/// type-parameter list come from the owner when `build` runs, so the
/// descriptor invariants hold for every descriptor ever produced.
pub struct ConstructorDescriptorBuilder {
    owner: Arc<ClassSymbol>,
    value_parameters: ParamList,
    visibility: Visibility,
    is_static: bool,
}

impl ConstructorDescriptorBuilder {
    pub fn new(owner: Arc<ClassSymbol>) -> ConstructorDescriptorBuilder {
        let visibility = owner.visibility;
        ConstructorDescriptorBuilder {
            owner,
            value_parameters: ParamList::new(),
            visibility,
            is_static: false,
        }
    }

    pub fn value_parameters(mut self, params: ParamList) -> Self {
        self.value_parameters = params;
        self
    }

    pub fn visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn is_static(mut self, is_static: bool) -> Self {
        self.is_static = is_static;
        self
    }

    pub fn build(self) -> Arc<ConstructorDescriptor> {
        let type_parameters = self.owner.type_parameters.clone();
        let return_type = self.owner.default_type().clone();
        Arc::new(ConstructorDescriptor {
            owner: self.owner,
            type_parameters,
            value_parameters: self.value_parameters,
            visibility: self.visibility,
            is_static: self.is_static,
            return_type,
        })
    }
}

/// The single primary, parameterless constructor of an object or
/// companion-object class. Built fresh per call; object classes are
/// resolved once each, so these are not memoized.
pub fn object_constructor(class: &Arc<ClassSymbol>) -> Arc<ConstructorDescriptor> {
    ConstructorDescriptorBuilder::new(Arc::clone(class))
        .visibility(class.visibility)
        .build()
}

/// Visibility of a declared constructor: derived from the written modifier,
/// overridden by a recognized visibility annotation when present.
pub fn resolve_visibility(ctor: &ConstructorSyntax) -> Visibility {
    if let Some(overridden) = ctor.visibility_override() {
        return overridden;
    }
    match ctor.modifier {
        AccessModifier::Public => Visibility::Public,
        AccessModifier::Protected => Visibility::Protected,
        AccessModifier::PackageLocal => Visibility::PackageLocal,
        AccessModifier::Private => Visibility::Private,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jbind_syntax::AnnotationSyntax;

    fn test_class(kind: ClassKind, params: Vec<TypeParameter>) -> Arc<ClassSymbol> {
        ClassSymbol::new(ClassId(0), "p.C", kind, params, Visibility::Public)
    }

    #[test]
    fn default_type_applies_own_type_parameters() {
        let class = test_class(
            ClassKind::Class,
            vec![TypeParameter::new("T", 0), TypeParameter::new("U", 1)],
        );
        assert_eq!(class.default_type().to_string(), "p.C<T, U>");
    }

    #[test]
    fn builder_copies_owner_type_parameters_and_return_type() {
        let class = test_class(ClassKind::Class, vec![TypeParameter::new("T", 0)]);
        let descriptor = ConstructorDescriptorBuilder::new(Arc::clone(&class)).build();
        assert_eq!(descriptor.type_parameters, class.type_parameters);
        assert_eq!(&descriptor.return_type, class.default_type());
    }

    #[test]
    fn object_constructor_is_parameterless() {
        let class = test_class(ClassKind::Object, vec![]);
        let descriptor = object_constructor(&class);
        assert!(descriptor.value_parameters.is_empty());
        assert_eq!(descriptor.visibility, Visibility::Public);
    }

    #[test]
    fn visibility_annotation_wins_over_modifier() {
        let mut ctor = ConstructorSyntax::new(vec![]);
        ctor.modifier = AccessModifier::Private;
        assert_eq!(resolve_visibility(&ctor), Visibility::Private);
        ctor.annotations
            .push(AnnotationSyntax::VisibilityOverride(Visibility::Protected));
        assert_eq!(resolve_visibility(&ctor), Visibility::Protected);
    }
}
