//! In-memory syntax tree of a compiled program.
//!
//! This is the representation compiler passes work on. Trees are built
//! upstream by compilation and treated as immutable value graphs here; the
//! codec only ever reads them.

pub mod data_types;
pub mod declarations;
pub mod program;
pub mod types;

pub use data_types::{Location, Nullable, Position, Range};
pub use declarations::{
    Access, AttributeArgument, Callable, CallableKind, Comments, CustomType, DeclarationAttribute,
    InferredExpressionInformation, LocalSymbol, LocalVariableDeclaration, Modifiers, QsTuple,
    ResolvedSignature, Specialization, SpecializationKind, TypeItem,
};
pub use program::{DocumentationIndex, Namespace, NamespaceElement, Program};
pub use types::{
    CallableInformation, CharacteristicsKind, InferredCallableInformation, OpProperty,
    ResolvedCharacteristics, ResolvedType, ResolvedTypeKind, TypeKind, TypeParameter,
    UserDefinedType,
};
