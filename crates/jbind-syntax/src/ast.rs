//! Syntax node definitions.
//!
//! These mirror the foreign source as written. Class kinds, member kinds,
//! and annotations are closed enums so the semantic layer can match on them
//! exhaustively.

use crate::arena::{CtorId, MemberId};
use jbind_common::{QualifiedName, Visibility};
use serde::Serialize;

/// Primitive types of the foreign source language.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum PrimitiveKind {
    Boolean,
    Byte,
    Short,
    Int,
    Long,
    Char,
    Float,
    Double,
}

impl PrimitiveKind {
    pub fn keyword(self) -> &'static str {
        match self {
            PrimitiveKind::Boolean => "boolean",
            PrimitiveKind::Byte => "byte",
            PrimitiveKind::Short => "short",
            PrimitiveKind::Int => "int",
            PrimitiveKind::Long => "long",
            PrimitiveKind::Char => "char",
            PrimitiveKind::Float => "float",
            PrimitiveKind::Double => "double",
        }
    }

    pub fn from_keyword(text: &str) -> Option<PrimitiveKind> {
        Some(match text {
            "boolean" => PrimitiveKind::Boolean,
            "byte" => PrimitiveKind::Byte,
            "short" => PrimitiveKind::Short,
            "int" => PrimitiveKind::Int,
            "long" => PrimitiveKind::Long,
            "char" => PrimitiveKind::Char,
            "float" => PrimitiveKind::Float,
            "double" => PrimitiveKind::Double,
            _ => return None,
        })
    }
}

/// A type reference as written in the foreign source.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum TypeSyntax {
    Primitive(PrimitiveKind),
    /// A named reference: a class name or a type-parameter name, with
    /// optional generic arguments.
    Named {
        name: String,
        args: Vec<TypeSyntax>,
    },
    Array(Box<TypeSyntax>),
}

impl TypeSyntax {
    pub fn named(name: impl Into<String>) -> TypeSyntax {
        TypeSyntax::Named {
            name: name.into(),
            args: Vec::new(),
        }
    }

    pub fn named_with(name: impl Into<String>, args: Vec<TypeSyntax>) -> TypeSyntax {
        TypeSyntax::Named {
            name: name.into(),
            args,
        }
    }

    pub fn array(component: TypeSyntax) -> TypeSyntax {
        TypeSyntax::Array(Box::new(component))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, TypeSyntax::Array(_))
    }

    /// Component type if this syntactically denotes an array.
    pub fn component(&self) -> Option<&TypeSyntax> {
        match self {
            TypeSyntax::Array(component) => Some(component),
            _ => None,
        }
    }
}

/// Access modifier as written on a declaration. `PackageLocal` stands for
/// the absence of an explicit modifier.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub enum AccessModifier {
    Public,
    Protected,
    PackageLocal,
    Private,
}

/// Annotations recognized by the resolver. Anything else the foreign source
/// carries is dropped before this model is built.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum AnnotationSyntax {
    /// Excludes the constructor from resolution entirely.
    Hidden,
    /// Out-of-band replacement signature, e.g. `"(items: String...)"`.
    /// The payload is parsed by the semantic layer.
    SignatureOverride(String),
    /// Recognized visibility annotation; wins over the written modifier.
    VisibilityOverride(Visibility),
}

/// One declared parameter.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ParamSyntax {
    pub name: String,
    pub ty: TypeSyntax,
    /// Extension-receiver convention. Legal on ordinary methods, never on
    /// constructors.
    pub is_receiver: bool,
    /// Declared variadic (`...`). Always the last parameter, and `ty` is the
    /// corresponding array type.
    pub is_vararg: bool,
}

impl ParamSyntax {
    pub fn new(name: impl Into<String>, ty: TypeSyntax) -> ParamSyntax {
        ParamSyntax {
            name: name.into(),
            ty,
            is_receiver: false,
            is_vararg: false,
        }
    }

    /// A variadic parameter over `component`, e.g. `int... xs`.
    pub fn vararg(name: impl Into<String>, component: TypeSyntax) -> ParamSyntax {
        ParamSyntax {
            name: name.into(),
            ty: TypeSyntax::array(component),
            is_receiver: false,
            is_vararg: true,
        }
    }

    pub fn receiver(ty: TypeSyntax) -> ParamSyntax {
        ParamSyntax {
            name: "<this>".to_string(),
            ty,
            is_receiver: true,
            is_vararg: false,
        }
    }
}

/// One declared constructor as written.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ConstructorSyntax {
    pub params: Vec<ParamSyntax>,
    pub modifier: AccessModifier,
    pub annotations: Vec<AnnotationSyntax>,
}

impl ConstructorSyntax {
    pub fn new(params: Vec<ParamSyntax>) -> ConstructorSyntax {
        ConstructorSyntax {
            params,
            modifier: AccessModifier::Public,
            annotations: Vec::new(),
        }
    }

    pub fn is_hidden(&self) -> bool {
        self.annotations.contains(&AnnotationSyntax::Hidden)
    }

    pub fn signature_override(&self) -> Option<&str> {
        self.annotations.iter().find_map(|a| match a {
            AnnotationSyntax::SignatureOverride(text) => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn visibility_override(&self) -> Option<Visibility> {
        self.annotations.iter().find_map(|a| match a {
            AnnotationSyntax::VisibilityOverride(v) => Some(*v),
            _ => None,
        })
    }
}

impl Default for AccessModifier {
    fn default() -> Self {
        AccessModifier::PackageLocal
    }
}

/// Kind of a declared class member. Only annotation members contribute to
/// constructor synthesis; ordinary methods are carried for completeness.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub enum MemberKind {
    AnnotationMember,
    Method,
}

/// One declared class member as written.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MemberSyntax {
    pub kind: MemberKind,
    pub name: String,
    pub return_type: TypeSyntax,
    /// Whether the member declares a default value.
    pub has_default: bool,
}

impl MemberSyntax {
    pub fn annotation_member(name: impl Into<String>, return_type: TypeSyntax) -> MemberSyntax {
        MemberSyntax {
            kind: MemberKind::AnnotationMember,
            name: name.into(),
            return_type,
            has_default: false,
        }
    }

    pub fn with_default(mut self) -> MemberSyntax {
        self.has_default = true;
        self
    }
}

/// Syntactic view of one foreign class.
#[derive(Clone, Debug, Serialize)]
pub struct ClassSyntax {
    pub name: QualifiedName,
    pub is_interface: bool,
    pub is_annotation: bool,
    pub is_static: bool,
    /// Declared type-parameter names, in order.
    pub type_parameters: Vec<String>,
    /// Declared constructors, in declaration order.
    pub constructors: Vec<CtorId>,
    /// Declared members, in declaration order.
    pub members: Vec<MemberId>,
}

impl ClassSyntax {
    pub fn new(name: impl Into<QualifiedName>) -> ClassSyntax {
        ClassSyntax {
            name: name.into(),
            is_interface: false,
            is_annotation: false,
            is_static: false,
            type_parameters: Vec::new(),
            constructors: Vec::new(),
            members: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_marker_is_detected_among_other_annotations() {
        let mut ctor = ConstructorSyntax::new(vec![]);
        ctor.annotations
            .push(AnnotationSyntax::SignatureOverride("()".to_string()));
        assert!(!ctor.is_hidden());
        ctor.annotations.push(AnnotationSyntax::Hidden);
        assert!(ctor.is_hidden());
    }

    #[test]
    fn signature_override_payload_is_exposed() {
        let mut ctor = ConstructorSyntax::new(vec![]);
        assert_eq!(ctor.signature_override(), None);
        ctor.annotations
            .push(AnnotationSyntax::SignatureOverride("(x: int)".to_string()));
        assert_eq!(ctor.signature_override(), Some("(x: int)"));
    }

    #[test]
    fn array_component_access() {
        let ty = TypeSyntax::array(TypeSyntax::Primitive(PrimitiveKind::Int));
        assert!(ty.is_array());
        assert_eq!(
            ty.component(),
            Some(&TypeSyntax::Primitive(PrimitiveKind::Int))
        );
        assert_eq!(TypeSyntax::named("String").component(), None);
    }
}
