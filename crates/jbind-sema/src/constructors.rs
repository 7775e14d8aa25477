//! Constructor resolution.
//!
//! Turns the declared (or implied) constructors of a foreign class into
//! [`ConstructorDescriptor`]s. Three paths exist, and exactly one runs per
//! class:
//! - object and companion-object kinds get a single synthesized primary
//!   constructor;
//! - classes with no declared constructors get a synthesized default
//!   constructor, plus the member-mirroring constructor for annotation
//!   types;
//! - declared constructors are resolved one by one, in declaration order.
//!
//! Every resolution is memoized in the [`BindingTrace`] under the identity
//! of the syntax it came from, so repeated queries return the same
//! descriptor instance.

use crate::scope::TypeVariableScope;
use crate::signature::{OverrideOutcome, apply_signature_override};
use crate::symbols::{
    ClassKind, ClassSymbol, ConstructorDescriptor, ConstructorDescriptorBuilder, ParamList,
    ValueParameterDescriptor, object_constructor, resolve_visibility,
};
use crate::trace::{BindingTrace, SyntaxKey};
use crate::params;
use crate::transform::{TransformError, TypeTransformer};
use jbind_common::QualifiedName;
use jbind_syntax::{ClassSyntax, CtorId, MemberKind, SyntaxArena};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// Parameter resolution produced a receiver type for a constructor.
    /// Constructors never declare receivers; this is a contract breach
    /// between the resolver and the shared parameter-resolution path.
    #[error("constructor of class {class} resolved with a receiver type")]
    ReceiverOnConstructor { class: QualifiedName },
    /// The class symbol points at syntax the arena does not hold.
    #[error("no syntax found for class {class}")]
    MissingSyntax { class: QualifiedName },
    #[error(transparent)]
    Transform(#[from] TransformError),
}

/// Resolves constructors of foreign classes against a syntax arena, a type
/// transformer, and a shared binding trace.
///
/// Re-entrant across different classes; not designed for concurrent
/// invocation on the same class.
pub struct ConstructorResolver<'a> {
    arena: &'a SyntaxArena,
    transformer: &'a dyn TypeTransformer,
    trace: &'a mut BindingTrace,
}

impl<'a> ConstructorResolver<'a> {
    pub fn new(
        arena: &'a SyntaxArena,
        transformer: &'a dyn TypeTransformer,
        trace: &'a mut BindingTrace,
    ) -> ConstructorResolver<'a> {
        ConstructorResolver {
            arena,
            transformer,
            trace,
        }
    }

    /// Resolves all constructors of `class`, in declaration order.
    #[tracing::instrument(level = "debug", skip_all, fields(class = %class.name))]
    pub fn resolve_constructors(
        &mut self,
        class: &Arc<ClassSymbol>,
    ) -> Result<Vec<Arc<ConstructorDescriptor>>, ResolveError> {
        let syntax = self
            .arena
            .class(class.id)
            .ok_or_else(|| ResolveError::MissingSyntax {
                class: class.name.clone(),
            })?;
        let scope = TypeVariableScope::for_class(class, format!("class {}", class.name));
        let is_static = syntax.is_static;

        let mut constructors = Vec::new();

        match class.kind {
            ClassKind::Object | ClassKind::CompanionObject => {
                // Object classes are resolved once each in practice, so the
                // primary constructor is built fresh rather than memoized.
                constructors.push(object_constructor(class));
            }
            _ if syntax.constructors.is_empty() => {
                let key = SyntaxKey::Class(class.id);
                if let Some(cached) = self.trace.get(key) {
                    debug!("reusing cached synthesized constructor");
                    constructors.push(cached);
                } else {
                    // Classes and abstract classes still need a default
                    // constructor so subclasses in the host language can
                    // delegate to them; interfaces never do.
                    if !syntax.is_interface {
                        let descriptor = ConstructorDescriptorBuilder::new(Arc::clone(class))
                            .visibility(class.visibility)
                            .is_static(is_static)
                            .build();
                        self.trace.record(key, Arc::clone(&descriptor));
                        constructors.push(descriptor);
                    }
                    if syntax.is_annotation {
                        let descriptor =
                            self.synthesize_annotation_constructor(class, syntax, &scope, is_static)?;
                        // Recorded under the same class key as the default
                        // constructor above; the annotation constructor is
                        // the one later lookups observe.
                        self.trace.record(key, Arc::clone(&descriptor));
                        constructors.push(descriptor);
                    }
                }
            }
            _ => {
                for &ctor_id in &syntax.constructors {
                    if let Some(descriptor) =
                        self.resolve_declared(class, ctor_id, &scope, is_static)?
                    {
                        constructors.push(descriptor);
                    }
                }
            }
        }

        debug_assert!(
            constructors
                .iter()
                .all(|c| c.return_type == *class.default_type()),
            "every constructor's declared return type is the owner's default type"
        );

        Ok(constructors)
    }

    /// Resolves one declared constructor. Returns `None` for constructors
    /// carrying the hidden marker.
    fn resolve_declared(
        &mut self,
        class: &Arc<ClassSymbol>,
        ctor_id: CtorId,
        scope: &TypeVariableScope<'_>,
        is_static: bool,
    ) -> Result<Option<Arc<ConstructorDescriptor>>, ResolveError> {
        let ctor = self
            .arena
            .constructor(ctor_id)
            .ok_or_else(|| ResolveError::MissingSyntax {
                class: class.name.clone(),
            })?;

        if ctor.is_hidden() {
            debug!(ctor = ctor_id.0, "skipping hidden constructor");
            return Ok(None);
        }

        let key = SyntaxKey::Constructor(ctor_id);
        if let Some(cached) = self.trace.get(key) {
            return Ok(Some(cached));
        }

        let resolved = params::resolve_value_parameters(&ctor.params, scope, self.transformer)?;
        if resolved.receiver.is_some() {
            return Err(ResolveError::ReceiverOnConstructor {
                class: class.name.clone(),
            });
        }

        let mut value_parameters = resolved.params;
        match apply_signature_override(ctor, scope, self.transformer) {
            OverrideOutcome::Unchanged => {}
            OverrideOutcome::Replaced(params) => value_parameters = params,
            OverrideOutcome::Failed(diagnostic) => {
                warn!(
                    ctor = ctor_id.0,
                    "keeping inferred signature: {}", diagnostic.message_text
                );
                self.trace.record_signature_error(key, diagnostic);
            }
        }

        let descriptor = ConstructorDescriptorBuilder::new(Arc::clone(class))
            .value_parameters(value_parameters)
            .visibility(resolve_visibility(ctor))
            .is_static(is_static)
            .build();
        self.trace.record(key, Arc::clone(&descriptor));
        Ok(Some(descriptor))
    }

    /// The implicit constructor of an annotation type takes the declared
    /// annotation members as parameters, in declaration order.
    ///
    /// Convention carried over from the foreign language: when the LAST
    /// declared member has an array type, the mirrored parameter becomes a
    /// vararg over the array's component type. Non-final array members stay
    /// plain arrays; this is a deliberate special case, not a general
    /// array-to-vararg rule.
    fn synthesize_annotation_constructor(
        &self,
        class: &Arc<ClassSymbol>,
        syntax: &ClassSyntax,
        scope: &TypeVariableScope<'_>,
        is_static: bool,
    ) -> Result<Arc<ConstructorDescriptor>, ResolveError> {
        let mut value_parameters = ParamList::new();
        let member_count = syntax.members.len();
        for (i, &member_id) in syntax.members.iter().enumerate() {
            let member =
                self.arena
                    .member(member_id)
                    .ok_or_else(|| ResolveError::MissingSyntax {
                        class: class.name.clone(),
                    })?;
            if member.kind != MemberKind::AnnotationMember {
                continue;
            }

            let ty = self.transformer.transform(&member.return_type, scope)?;
            let vararg_element = if i + 1 == member_count {
                match member.return_type.component() {
                    Some(component) => Some(self.transformer.transform(component, scope)?),
                    None => None,
                }
            } else {
                None
            };

            value_parameters.push(ValueParameterDescriptor {
                name: member.name.clone(),
                index: value_parameters.len(),
                ty,
                has_default: member.has_default,
                vararg_element,
            });
        }

        debug!(
            params = value_parameters.len(),
            "synthesized annotation-type constructor"
        );
        Ok(ConstructorDescriptorBuilder::new(Arc::clone(class))
            .value_parameters(value_parameters)
            .visibility(class.visibility)
            .is_static(is_static)
            .build())
    }
}
