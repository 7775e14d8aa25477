//! The type-transformation collaborator contract.
//!
//! The transformer converts a syntactic type reference into a semantic type
//! under a type-variable scope. The real implementation lives with the
//! surrounding binder; [`ClassRegistryTransformer`] is a self-contained
//! implementation backed by a registry of known class names, sufficient for
//! drivers that preload their classpath and for tests.

use crate::scope::TypeVariableScope;
use crate::types::SemanticType;
use jbind_common::QualifiedName;
use jbind_syntax::TypeSyntax;
use rustc_hash::FxHashMap;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransformError {
    #[error("unresolved type reference `{name}` in {context}")]
    UnresolvedReference { name: String, context: String },
}

pub trait TypeTransformer {
    fn transform(
        &self,
        ty: &TypeSyntax,
        scope: &TypeVariableScope<'_>,
    ) -> Result<SemanticType, TransformError>;
}

/// Transformer backed by a registry of known class names. Named references
/// resolve first against the scope's type variables, then against the
/// registry by qualified or short name.
#[derive(Debug, Default)]
pub struct ClassRegistryTransformer {
    by_name: FxHashMap<String, QualifiedName>,
}

impl ClassRegistryTransformer {
    pub fn new() -> ClassRegistryTransformer {
        ClassRegistryTransformer::default()
    }

    /// Registers a class under both its qualified and short names.
    pub fn register(&mut self, name: impl Into<QualifiedName>) {
        let qualified = name.into();
        self.by_name
            .insert(qualified.short_name().to_string(), qualified.clone());
        self.by_name
            .insert(qualified.as_str().to_string(), qualified);
    }
}

impl TypeTransformer for ClassRegistryTransformer {
    fn transform(
        &self,
        ty: &TypeSyntax,
        scope: &TypeVariableScope<'_>,
    ) -> Result<SemanticType, TransformError> {
        match ty {
            TypeSyntax::Primitive(kind) => Ok(SemanticType::Primitive(*kind)),
            TypeSyntax::Array(component) => Ok(SemanticType::array(
                self.transform(component, scope)?,
            )),
            TypeSyntax::Named { name, args } => {
                if args.is_empty()
                    && let Some(param) = scope.resolve(name)
                {
                    return Ok(SemanticType::TypeVar(param.clone()));
                }
                let Some(qualified) = self.by_name.get(name) else {
                    return Err(TransformError::UnresolvedReference {
                        name: name.clone(),
                        context: scope.label().to_string(),
                    });
                };
                let args = args
                    .iter()
                    .map(|arg| self.transform(arg, scope))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(SemanticType::Class {
                    name: qualified.clone(),
                    args,
                })
            }
        }
    }
}
