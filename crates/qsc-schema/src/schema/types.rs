//! Schema records for positions and resolved types.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::program::QualifiedName;
use super::tags::{CharacteristicsKind, OpProperty, TypeKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Range {
    pub start: Position,
    pub end: Position,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Location {
    pub offset: Position,
    pub range: Range,
}

/// Domain and codomain of an arrow type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ArrowType<D> {
    pub domain: D,
    pub codomain: D,
}

/// Operation arrow plus its characteristics payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct OperationType<D, C> {
    pub arrow: ArrowType<D>,
    pub characteristics: C,
}

/// Portable form of a type-kind node.
///
/// `kind` selects which single payload field is populated. Leaf kinds
/// populate none of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TypeKindComposition<D, U, P, C> {
    pub kind: TypeKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub array_type: Option<D>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tuple_type: Option<Vec<D>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_defined_type: Option<U>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_parameter: Option<P>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation: Option<OperationType<D, C>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub function: Option<ArrowType<D>>,
}

impl<D, U, P, C> TypeKindComposition<D, U, P, C> {
    /// A composition carrying only its discriminator.
    pub fn tagged(kind: TypeKind) -> Self {
        TypeKindComposition {
            kind,
            array_type: None,
            tuple_type: None,
            user_defined_type: None,
            type_parameter: None,
            operation: None,
            function: None,
        }
    }
}

pub type ResolvedTypeComposition =
    TypeKindComposition<ResolvedType, UserDefinedType, TypeParameter, CallableInformation>;

/// Named wrapper around the recursive type-kind composition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedType {
    pub type_kind: Box<ResolvedTypeComposition>,
}

impl ResolvedType {
    pub fn new(type_kind: ResolvedTypeComposition) -> Self {
        ResolvedType {
            type_kind: Box::new(type_kind),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct UserDefinedType {
    pub namespace: String,
    pub name: String,
    pub range: Option<Range>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TypeParameter {
    pub origin: QualifiedName,
    pub type_name: String,
    pub range: Option<Range>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SetOperation {
    pub lhs: ResolvedCharacteristics,
    pub rhs: ResolvedCharacteristics,
}

/// Portable form of a characteristics set expression node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CharacteristicsComposition {
    pub kind: CharacteristicsKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub simple_set: Option<OpProperty>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub set_operation: Option<SetOperation>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ResolvedCharacteristics {
    pub expression: Box<CharacteristicsComposition>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct InferredCallableInformation {
    pub is_self_adjoint: bool,
    pub is_intrinsic: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CallableInformation {
    pub characteristics: ResolvedCharacteristics,
    pub inferred: InferredCallableInformation,
}
