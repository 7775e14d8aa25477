//! Semantic descriptors and constructor resolution.
//!
//! This crate turns the syntactic view of a foreign class into fully-typed
//! constructor descriptors. It is organized into several submodules:
//! - `types` - Semantic types and type parameters
//! - `symbols` - Class symbols and constructor descriptors
//! - `scope` - Type-variable scopes for generic classes
//! - `transform` - The `TypeTransformer` collaborator contract
//! - `params` - Value-parameter resolution shared with method resolution
//! - `signature` - Out-of-band signature overrides
//! - `trace` - The binding trace (memoization cache + diagnostic sink)
//! - `constructors` - The constructor resolution orchestrator
//!
//! Resolution is memoized by syntactic identity: resolving the same class
//! twice returns reference-identical descriptors for every cached entry.

pub mod types;
pub use types::{SemanticType, TypeParameter};

pub mod symbols;
pub use symbols::{
    ClassKind, ClassSymbol, ConstructorDescriptor, ConstructorDescriptorBuilder, ParamList,
    ValueParameterDescriptor, object_constructor, resolve_visibility,
};

pub mod scope;
pub use scope::TypeVariableScope;

pub mod transform;
pub use transform::{ClassRegistryTransformer, TransformError, TypeTransformer};

pub mod params;
pub use params::{ResolvedParameters, resolve_value_parameters};

pub mod signature;
pub use signature::{OverrideOutcome, apply_signature_override};

pub mod trace;
pub use trace::{BindingTrace, SyntaxKey};

pub mod constructors;
pub use constructors::{ConstructorResolver, ResolveError};
