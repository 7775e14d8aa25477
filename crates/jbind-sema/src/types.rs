//! Semantic types and type parameters.

use jbind_common::QualifiedName;
use jbind_syntax::PrimitiveKind;

/// A type parameter declared by a class. The index is the 0-based position
/// in the owning class's type-parameter list.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TypeParameter {
    pub name: String,
    pub index: usize,
}

impl TypeParameter {
    pub fn new(name: impl Into<String>, index: usize) -> TypeParameter {
        TypeParameter {
            name: name.into(),
            index,
        }
    }
}

/// A resolved semantic type.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum SemanticType {
    Primitive(PrimitiveKind),
    Class {
        name: QualifiedName,
        args: Vec<SemanticType>,
    },
    /// A reference to a type parameter of the enclosing class.
    TypeVar(TypeParameter),
    Array(Box<SemanticType>),
}

impl SemanticType {
    pub fn class(name: impl Into<QualifiedName>) -> SemanticType {
        SemanticType::Class {
            name: name.into(),
            args: Vec::new(),
        }
    }

    pub fn class_with(name: impl Into<QualifiedName>, args: Vec<SemanticType>) -> SemanticType {
        SemanticType::Class {
            name: name.into(),
            args,
        }
    }

    pub fn array(element: SemanticType) -> SemanticType {
        SemanticType::Array(Box::new(element))
    }
}

impl std::fmt::Display for SemanticType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SemanticType::Primitive(kind) => f.write_str(kind.keyword()),
            SemanticType::Class { name, args } => {
                write!(f, "{name}")?;
                if !args.is_empty() {
                    f.write_str("<")?;
                    for (i, arg) in args.iter().enumerate() {
                        if i > 0 {
                            f.write_str(", ")?;
                        }
                        write!(f, "{arg}")?;
                    }
                    f.write_str(">")?;
                }
                Ok(())
            }
            SemanticType::TypeVar(param) => f.write_str(&param.name),
            SemanticType::Array(element) => write!(f, "{element}[]"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_of_generic_class_type() {
        let ty = SemanticType::class_with(
            "java.util.Map",
            vec![
                SemanticType::class("java.lang.String"),
                SemanticType::TypeVar(TypeParameter::new("V", 0)),
            ],
        );
        assert_eq!(ty.to_string(), "java.util.Map<java.lang.String, V>");
    }

    #[test]
    fn display_of_array_of_primitive() {
        let ty = SemanticType::array(SemanticType::Primitive(PrimitiveKind::Int));
        assert_eq!(ty.to_string(), "int[]");
    }
}
