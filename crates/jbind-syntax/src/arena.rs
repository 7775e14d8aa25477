//! Arena storage for syntactic entities.

use crate::ast::{ClassSyntax, ConstructorSyntax, MemberSyntax};
use serde::Serialize;

/// Index of a class in the arena.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct ClassId(pub u32);

/// Index of a declared constructor in the arena.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct CtorId(pub u32);

/// Index of a declared class member in the arena.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct MemberId(pub u32);

/// Arena-based storage for the syntactic model.
///
/// Entities are stored contiguously and referenced by index. The index of an
/// entity never changes once allocated, which lets the semantic layer use it
/// as a memoization key.
#[derive(Debug, Default, Serialize)]
pub struct SyntaxArena {
    classes: Vec<ClassSyntax>,
    constructors: Vec<ConstructorSyntax>,
    members: Vec<MemberSyntax>,
}

impl SyntaxArena {
    pub fn new() -> SyntaxArena {
        SyntaxArena::default()
    }

    /// Add a class to the arena and return its index.
    pub fn add_class(&mut self, class: ClassSyntax) -> ClassId {
        let index = self.classes.len() as u32;
        self.classes.push(class);
        ClassId(index)
    }

    /// Add a declared constructor to the arena and return its index.
    pub fn add_constructor(&mut self, ctor: ConstructorSyntax) -> CtorId {
        let index = self.constructors.len() as u32;
        self.constructors.push(ctor);
        CtorId(index)
    }

    /// Add a declared member to the arena and return its index.
    pub fn add_member(&mut self, member: MemberSyntax) -> MemberId {
        let index = self.members.len() as u32;
        self.members.push(member);
        MemberId(index)
    }

    pub fn class(&self, id: ClassId) -> Option<&ClassSyntax> {
        self.classes.get(id.0 as usize)
    }

    pub fn constructor(&self, id: CtorId) -> Option<&ConstructorSyntax> {
        self.constructors.get(id.0 as usize)
    }

    pub fn member(&self, id: MemberId) -> Option<&MemberSyntax> {
        self.members.get(id.0 as usize)
    }

    pub fn class_count(&self) -> usize {
        self.classes.len()
    }
}
