//! Schema records for declarations.
//!
//! Fields marked "full profile" are only written by the full encoder
//! profile. Readers must treat their absence as a documented gap.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::program::QualifiedName;
use super::tags::{AccessModifier, CallableKind, LocalSymbolKind, QsTupleKind, TypeItemKind};
use super::types::{CallableInformation, Location, Position, Range, ResolvedType, UserDefinedType};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema, Default)]
#[serde(rename_all = "camelCase")]
pub struct Comments {
    pub opening_comments: Vec<String>,
    pub closing_comments: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Modifiers {
    pub access: AccessModifier,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct LocalSymbol {
    pub kind: LocalSymbolKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct InferredExpressionInformation {
    pub is_mutable: bool,
    pub has_local_quantum_dependency: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LocalVariableDeclaration<N> {
    pub variable_name: N,
    #[serde(rename = "type")]
    pub resolved_type: ResolvedType,
    pub inferred_information: InferredExpressionInformation,
    pub position: Option<Position>,
    pub range: Range,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct QsTuple<T> {
    pub kind: QsTupleKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<QsTuple<T>>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TypeItem {
    pub kind: TypeItemKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub named: Option<LocalVariableDeclaration<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anonymous: Option<ResolvedType>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedSignature {
    pub type_parameters: Vec<LocalSymbol>,
    pub argument_type: ResolvedType,
    pub return_type: ResolvedType,
    pub information: CallableInformation,
}

/// An attribute on a declaration. The argument expression is not carried.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeclarationAttribute {
    pub type_id: Option<UserDefinedType>,
    pub type_id_range: Option<Range>,
    pub offset: Position,
    pub comments: Comments,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Callable {
    pub kind: CallableKind,
    pub full_name: QualifiedName,
    /// Full profile
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Vec<DeclarationAttribute>>,
    /// Full profile
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modifiers: Option<Modifiers>,
    pub source_file: String,
    pub location: Option<Location>,
    /// Full profile
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signature: Option<ResolvedSignature>,
    /// Full profile
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub argument_tuple: Option<QsTuple<LocalVariableDeclaration<LocalSymbol>>>,
    pub documentation: Vec<String>,
    pub comments: Comments,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CustomType {
    pub full_name: QualifiedName,
    /// Full profile
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Vec<DeclarationAttribute>>,
    /// Full profile
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modifiers: Option<Modifiers>,
    pub source_file: String,
    pub location: Option<Location>,
    /// Full profile
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub underlying_type: Option<ResolvedType>,
    /// Full profile
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_items: Option<QsTuple<TypeItem>>,
    pub documentation: Vec<String>,
    pub comments: Comments,
}
