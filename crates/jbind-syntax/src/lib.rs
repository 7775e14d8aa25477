//! Syntactic model of foreign class stubs.
//!
//! This crate holds the as-written view of a foreign class: its declared
//! constructors, members, parameter lists, and annotations. Nothing here is
//! typed; semantic resolution lives in `jbind-sema`.
//!
//! All syntactic entities are stored in a [`SyntaxArena`] and addressed by
//! typed indices (`ClassId`, `CtorId`, `MemberId`). The indices are stable
//! for the lifetime of the arena and serve as identities for memoization.

pub mod arena;
pub use arena::{ClassId, CtorId, MemberId, SyntaxArena};

pub mod ast;
pub use ast::{
    AccessModifier, AnnotationSyntax, ClassSyntax, ConstructorSyntax, MemberKind, MemberSyntax,
    ParamSyntax, PrimitiveKind, TypeSyntax,
};
