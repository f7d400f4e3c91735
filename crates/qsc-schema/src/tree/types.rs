//! Resolved types of the syntax tree.
//!
//! [`TypeKind`] is the recursive sum type every resolved type is built from.
//! It is generic over four payload domains so the same shape serves fully
//! resolved types as well as any other instantiation a compiler stage needs:
//!
//! - `D`: nested data types (array items, tuple items, arrow domains)
//! - `U`: user-defined-type references
//! - `P`: type-parameter references
//! - `C`: the characteristics payload attached to operations

use super::data_types::{Nullable, Range};
use crate::naming::QualifiedName;

/// One node of a resolved type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeKind<D, U, P, C> {
    UnitType,
    Int,
    BigInt,
    Double,
    Bool,
    String,
    Qubit,
    /// Measurement result
    Result,
    Pauli,
    Range,
    /// Array of `D`
    ArrayType(D),
    /// Tuple with at least one item
    TupleType(Vec<D>),
    UserDefinedType(U),
    TypeParameter(P),
    /// Operation arrow `(domain, codomain)` with its characteristics
    Operation((D, D), C),
    /// Function arrow `(domain, codomain)`
    Function(D, D),
    /// Result of a type error
    InvalidType,
    /// Type that was never given
    MissingType,
    /// Type not yet resolved by inference
    PlaceholderType,
}

impl<D, U, P, C> TypeKind<D, U, P, C> {
    /// Variant name, used in diagnostics.
    pub fn tag_name(&self) -> &'static str {
        match self {
            TypeKind::UnitType => "UnitType",
            TypeKind::Int => "Int",
            TypeKind::BigInt => "BigInt",
            TypeKind::Double => "Double",
            TypeKind::Bool => "Bool",
            TypeKind::String => "String",
            TypeKind::Qubit => "Qubit",
            TypeKind::Result => "Result",
            TypeKind::Pauli => "Pauli",
            TypeKind::Range => "Range",
            TypeKind::ArrayType(_) => "ArrayType",
            TypeKind::TupleType(_) => "TupleType",
            TypeKind::UserDefinedType(_) => "UserDefinedType",
            TypeKind::TypeParameter(_) => "TypeParameter",
            TypeKind::Operation(_, _) => "Operation",
            TypeKind::Function(_, _) => "Function",
            TypeKind::InvalidType => "InvalidType",
            TypeKind::MissingType => "MissingType",
            TypeKind::PlaceholderType => "PlaceholderType",
        }
    }

    /// True for the parameterless kinds.
    pub fn is_leaf(&self) -> bool {
        !matches!(
            self,
            TypeKind::ArrayType(_)
                | TypeKind::TupleType(_)
                | TypeKind::UserDefinedType(_)
                | TypeKind::TypeParameter(_)
                | TypeKind::Operation(_, _)
                | TypeKind::Function(_, _)
        )
    }
}

/// The fully resolved instantiation of [`TypeKind`].
pub type ResolvedTypeKind =
    TypeKind<ResolvedType, UserDefinedType, TypeParameter, CallableInformation>;

/// A fully resolved type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResolvedType(Box<ResolvedTypeKind>);

impl ResolvedType {
    pub fn new(kind: ResolvedTypeKind) -> Self {
        ResolvedType(Box::new(kind))
    }

    pub fn resolution(&self) -> &ResolvedTypeKind {
        &self.0
    }

    pub fn into_resolution(self) -> ResolvedTypeKind {
        *self.0
    }

    pub fn unit() -> Self {
        Self::new(TypeKind::UnitType)
    }

    pub fn int() -> Self {
        Self::new(TypeKind::Int)
    }

    pub fn bool() -> Self {
        Self::new(TypeKind::Bool)
    }

    pub fn string() -> Self {
        Self::new(TypeKind::String)
    }

    pub fn qubit() -> Self {
        Self::new(TypeKind::Qubit)
    }

    pub fn invalid() -> Self {
        Self::new(TypeKind::InvalidType)
    }

    pub fn array(item: ResolvedType) -> Self {
        Self::new(TypeKind::ArrayType(item))
    }

    pub fn tuple(items: Vec<ResolvedType>) -> Self {
        Self::new(TypeKind::TupleType(items))
    }

    pub fn function(domain: ResolvedType, codomain: ResolvedType) -> Self {
        Self::new(TypeKind::Function(domain, codomain))
    }

    pub fn operation(
        domain: ResolvedType,
        codomain: ResolvedType,
        information: CallableInformation,
    ) -> Self {
        Self::new(TypeKind::Operation((domain, codomain), information))
    }
}

impl From<ResolvedTypeKind> for ResolvedType {
    fn from(kind: ResolvedTypeKind) -> Self {
        ResolvedType::new(kind)
    }
}

/// Reference to a user-defined type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserDefinedType {
    pub namespace: String,
    pub name: String,
    pub range: Nullable<Range>,
}

/// Reference to a type parameter of a callable.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeParameter {
    /// The callable declaring the parameter
    pub origin: QualifiedName,
    pub type_name: String,
    pub range: Nullable<Range>,
}

/// Functor support an operation may declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpProperty {
    Adjointable,
    Controllable,
}

/// One node of a characteristics set expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CharacteristicsKind<T> {
    EmptySet,
    SimpleSet(OpProperty),
    Union(T, T),
    Intersection(T, T),
    InvalidSetExpr,
}

/// Resolved characteristics of an operation, as a set expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResolvedCharacteristics(Box<CharacteristicsKind<ResolvedCharacteristics>>);

impl ResolvedCharacteristics {
    pub fn new(expression: CharacteristicsKind<ResolvedCharacteristics>) -> Self {
        ResolvedCharacteristics(Box::new(expression))
    }

    pub fn expression(&self) -> &CharacteristicsKind<ResolvedCharacteristics> {
        &self.0
    }

    pub fn empty() -> Self {
        Self::new(CharacteristicsKind::EmptySet)
    }

    pub fn simple(property: OpProperty) -> Self {
        Self::new(CharacteristicsKind::SimpleSet(property))
    }
}

impl Default for ResolvedCharacteristics {
    fn default() -> Self {
        Self::empty()
    }
}

/// Properties the compiler inferred for a callable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct InferredCallableInformation {
    pub is_self_adjoint: bool,
    pub is_intrinsic: bool,
}

/// Characteristics payload carried by operation types and signatures.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct CallableInformation {
    pub characteristics: ResolvedCharacteristics,
    pub inferred: InferredCallableInformation,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leaf_detection() {
        assert!(ResolvedType::int().resolution().is_leaf());
        assert!(ResolvedType::invalid().resolution().is_leaf());
        assert!(!ResolvedType::array(ResolvedType::int()).resolution().is_leaf());
        assert!(
            !ResolvedType::function(ResolvedType::unit(), ResolvedType::unit())
                .resolution()
                .is_leaf()
        );
    }

    #[test]
    fn test_tag_names() {
        let op = ResolvedType::operation(
            ResolvedType::qubit(),
            ResolvedType::unit(),
            CallableInformation::default(),
        );
        assert_eq!(op.resolution().tag_name(), "Operation");
        assert_eq!(ResolvedType::tuple(vec![]).resolution().tag_name(), "TupleType");
    }
}
