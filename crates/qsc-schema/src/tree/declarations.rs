//! Declarations: callables, custom types and the pieces they are made of.

use super::data_types::{Location, Nullable, Position, Range};
use super::types::{CallableInformation, ResolvedType, UserDefinedType};
use crate::naming::QualifiedName;

/// Visibility of a declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Access {
    #[default]
    DefaultAccess,
    Internal,
}

/// Modifiers attached to a declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers {
    pub access: Access,
}

/// Comments before and after a declaration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Comments {
    pub opening: Vec<String>,
    pub closing: Vec<String>,
}

impl Comments {
    pub fn new(opening: Vec<String>, closing: Vec<String>) -> Self {
        Comments { opening, closing }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CallableKind {
    Operation,
    Function,
    TypeConstructor,
}

/// A declared local name, or the marker left behind by an invalid one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LocalSymbol {
    ValidName(String),
    InvalidName,
}

impl LocalSymbol {
    pub fn valid(name: impl Into<String>) -> Self {
        LocalSymbol::ValidName(name.into())
    }
}

/// What the compiler inferred about a local variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct InferredExpressionInformation {
    pub is_mutable: bool,
    pub has_local_quantum_dependency: bool,
}

/// A declared local variable, generic over how its name is represented.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LocalVariableDeclaration<N> {
    pub variable_name: N,
    pub resolved_type: ResolvedType,
    pub inferred: InferredExpressionInformation,
    /// Offset of the enclosing statement, when there is one
    pub position: Nullable<Position>,
    pub range: Range,
}

/// Nested tuple structure, e.g. of callable arguments.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum QsTuple<T> {
    Item(T),
    Tuple(Vec<QsTuple<T>>),
}

impl<T> QsTuple<T> {
    pub fn empty() -> Self {
        QsTuple::Tuple(Vec::new())
    }

    /// Items in depth-first order.
    pub fn items(&self) -> Vec<&T> {
        let mut out = Vec::new();
        self.collect_items(&mut out);
        out
    }

    fn collect_items<'a>(&'a self, out: &mut Vec<&'a T>) {
        match self {
            QsTuple::Item(item) => out.push(item),
            QsTuple::Tuple(items) => items.iter().for_each(|t| t.collect_items(out)),
        }
    }
}

/// An item of a custom type's underlying tuple.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeItem {
    Named(LocalVariableDeclaration<String>),
    Anonymous(ResolvedType),
}

/// Resolved signature of a callable.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResolvedSignature {
    pub type_parameters: Vec<LocalSymbol>,
    pub argument_type: ResolvedType,
    pub return_type: ResolvedType,
    pub information: CallableInformation,
}

impl ResolvedSignature {
    /// Stand-in for a signature the schema did not carry.
    pub fn placeholder() -> Self {
        ResolvedSignature {
            type_parameters: Vec::new(),
            argument_type: ResolvedType::invalid(),
            return_type: ResolvedType::invalid(),
            information: CallableInformation::default(),
        }
    }
}

/// Summary of an attribute's argument expression.
///
/// Expression trees are not modeled here, only the type and extent of the
/// argument.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AttributeArgument {
    pub resolved_type: ResolvedType,
    pub range: Nullable<Range>,
}

impl AttributeArgument {
    /// Stand-in for an argument the schema did not carry.
    pub fn placeholder() -> Self {
        AttributeArgument {
            resolved_type: ResolvedType::invalid(),
            range: Nullable::Null,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DeclarationAttribute {
    /// The attribute's user-defined type, if it resolved
    pub type_id: Nullable<UserDefinedType>,
    pub type_id_range: Nullable<Range>,
    pub argument: AttributeArgument,
    pub offset: Position,
    pub comments: Comments,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpecializationKind {
    Body,
    Adjoint,
    Controlled,
    ControlledAdjoint,
}

/// A specialization of a callable. Implementations are not modeled.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Specialization {
    pub kind: SpecializationKind,
    pub parent: QualifiedName,
    pub attributes: Vec<DeclarationAttribute>,
    pub source_file: String,
    pub location: Nullable<Location>,
    pub type_arguments: Nullable<Vec<ResolvedType>>,
    pub signature: ResolvedSignature,
    pub documentation: Vec<String>,
    pub comments: Comments,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Callable {
    pub kind: CallableKind,
    pub full_name: QualifiedName,
    pub attributes: Vec<DeclarationAttribute>,
    pub modifiers: Modifiers,
    pub source_file: String,
    pub location: Nullable<Location>,
    pub signature: ResolvedSignature,
    pub argument_tuple: QsTuple<LocalVariableDeclaration<LocalSymbol>>,
    pub specializations: Vec<Specialization>,
    pub documentation: Vec<String>,
    pub comments: Comments,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CustomType {
    pub full_name: QualifiedName,
    pub attributes: Vec<DeclarationAttribute>,
    pub modifiers: Modifiers,
    pub source_file: String,
    pub location: Nullable<Location>,
    /// The underlying type the custom type wraps
    pub underlying_type: ResolvedType,
    pub type_items: QsTuple<TypeItem>,
    pub documentation: Vec<String>,
    pub comments: Comments,
}
