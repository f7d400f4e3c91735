//! Portable schema representation of a compiled program.
//!
//! Schema records are plain serde/schemars structs meant to be handed to a
//! structured encoding library. Tagged unions are spelled the portable way:
//! a discriminator field plus one optional field per payload, of which
//! exactly the one matching the discriminator is populated.

pub mod declarations;
pub mod program;
pub mod tags;
pub mod types;

pub use declarations::{
    Callable, Comments, CustomType, DeclarationAttribute, InferredExpressionInformation,
    LocalSymbol, LocalVariableDeclaration, Modifiers, QsTuple, ResolvedSignature, TypeItem,
};
pub use program::{DocumentationItem, Namespace, NamespaceElement, Program, QualifiedName};
pub use tags::{
    AccessModifier, CallableKind, CharacteristicsKind, LocalSymbolKind, NamespaceElementKind,
    OpProperty, QsTupleKind, TypeItemKind, TypeKind,
};
pub use types::{
    ArrowType, CallableInformation, CharacteristicsComposition, InferredCallableInformation,
    Location, OperationType, Position, Range, ResolvedCharacteristics, ResolvedType,
    ResolvedTypeComposition, SetOperation, TypeKindComposition, TypeParameter, UserDefinedType,
};
