//! Generic translation of type-kind nodes between tree and schema.
//!
//! The tag dispatch for [`TypeKind`] lives here and only here. Callers plug
//! in the four payload domains through [`TypeKindTranslator`]; the walkers
//! take care of the discriminator mapping and payload placement, and call
//! back into the translator for nested data types, which is how the walk
//! recurses.
//!
//! # Example
//!
//! ```ignore
//! struct ToSchema;
//!
//! impl TypeKindTranslator for ToSchema {
//!     type DataIn = tree::ResolvedType;
//!     type DataOut = schema::ResolvedType;
//!     // ...
//!     fn translate_data_type(&self, data: &tree::ResolvedType) -> Result<schema::ResolvedType> {
//!         Ok(schema::ResolvedType::new(encode_type_kind(self, data.resolution())?))
//!     }
//! }
//! ```

use crate::error::{CodecError, Result};
use crate::schema::{ArrowType, OperationType, TypeKind as Tag, TypeKindComposition};
use crate::tree::TypeKind;

/// Payload translators for the four domains a type-kind node is generic over.
pub trait TypeKindTranslator {
    type DataIn;
    type DataOut;
    type UdtIn;
    type UdtOut;
    type ParamIn;
    type ParamOut;
    type CharacteristicsIn;
    type CharacteristicsOut;

    /// Translate a nested data type (array item, tuple item, arrow side).
    fn translate_data_type(&self, data: &Self::DataIn) -> Result<Self::DataOut>;

    /// Translate a user-defined-type reference.
    fn translate_user_defined_type(&self, udt: &Self::UdtIn) -> Result<Self::UdtOut>;

    /// Translate a type-parameter reference.
    fn translate_type_parameter(&self, param: &Self::ParamIn) -> Result<Self::ParamOut>;

    /// Translate the characteristics attached to an operation.
    fn translate_characteristics(
        &self,
        characteristics: &Self::CharacteristicsIn,
    ) -> Result<Self::CharacteristicsOut>;
}

type TreeKind<T> = TypeKind<
    <T as TypeKindTranslator>::DataIn,
    <T as TypeKindTranslator>::UdtIn,
    <T as TypeKindTranslator>::ParamIn,
    <T as TypeKindTranslator>::CharacteristicsIn,
>;

type TreeKindOut<T> = TypeKind<
    <T as TypeKindTranslator>::DataOut,
    <T as TypeKindTranslator>::UdtOut,
    <T as TypeKindTranslator>::ParamOut,
    <T as TypeKindTranslator>::CharacteristicsOut,
>;

type Composition<T> = TypeKindComposition<
    <T as TypeKindTranslator>::DataIn,
    <T as TypeKindTranslator>::UdtIn,
    <T as TypeKindTranslator>::ParamIn,
    <T as TypeKindTranslator>::CharacteristicsIn,
>;

type CompositionOut<T> = TypeKindComposition<
    <T as TypeKindTranslator>::DataOut,
    <T as TypeKindTranslator>::UdtOut,
    <T as TypeKindTranslator>::ParamOut,
    <T as TypeKindTranslator>::CharacteristicsOut,
>;

/// Translate a tree type-kind node into its schema composition.
pub fn encode_type_kind<T>(translator: &T, kind: &TreeKind<T>) -> Result<CompositionOut<T>>
where
    T: TypeKindTranslator,
{
    let composition = match kind {
        TypeKind::UnitType => TypeKindComposition::tagged(Tag::UnitType),
        TypeKind::Int => TypeKindComposition::tagged(Tag::Int),
        TypeKind::BigInt => TypeKindComposition::tagged(Tag::BigInt),
        TypeKind::Double => TypeKindComposition::tagged(Tag::Double),
        TypeKind::Bool => TypeKindComposition::tagged(Tag::Bool),
        TypeKind::String => TypeKindComposition::tagged(Tag::String),
        TypeKind::Qubit => TypeKindComposition::tagged(Tag::Qubit),
        TypeKind::Result => TypeKindComposition::tagged(Tag::Result),
        TypeKind::Pauli => TypeKindComposition::tagged(Tag::Pauli),
        TypeKind::Range => TypeKindComposition::tagged(Tag::Range),
        TypeKind::InvalidType => TypeKindComposition::tagged(Tag::InvalidType),
        TypeKind::MissingType => TypeKindComposition::tagged(Tag::MissingType),
        TypeKind::PlaceholderType => TypeKindComposition::tagged(Tag::PlaceholderType),
        TypeKind::ArrayType(item) => TypeKindComposition {
            array_type: Some(translator.translate_data_type(item)?),
            ..TypeKindComposition::tagged(Tag::ArrayType)
        },
        TypeKind::TupleType(items) => {
            let items: Result<Vec<_>> = items
                .iter()
                .map(|item| translator.translate_data_type(item))
                .collect();
            TypeKindComposition {
                tuple_type: Some(items?),
                ..TypeKindComposition::tagged(Tag::TupleType)
            }
        }
        TypeKind::UserDefinedType(udt) => TypeKindComposition {
            user_defined_type: Some(translator.translate_user_defined_type(udt)?),
            ..TypeKindComposition::tagged(Tag::UserDefinedType)
        },
        TypeKind::TypeParameter(param) => TypeKindComposition {
            type_parameter: Some(translator.translate_type_parameter(param)?),
            ..TypeKindComposition::tagged(Tag::TypeParameter)
        },
        TypeKind::Operation((domain, codomain), characteristics) => TypeKindComposition {
            operation: Some(OperationType {
                arrow: ArrowType {
                    domain: translator.translate_data_type(domain)?,
                    codomain: translator.translate_data_type(codomain)?,
                },
                characteristics: translator.translate_characteristics(characteristics)?,
            }),
            ..TypeKindComposition::tagged(Tag::Operation)
        },
        TypeKind::Function(domain, codomain) => TypeKindComposition {
            function: Some(ArrowType {
                domain: translator.translate_data_type(domain)?,
                codomain: translator.translate_data_type(codomain)?,
            }),
            ..TypeKindComposition::tagged(Tag::Function)
        },
    };
    Ok(composition)
}

/// Translate a schema composition back into a tree type-kind node.
///
/// Only the payload field named by the discriminator is read. A known
/// discriminator without its payload, or a tuple without items, fails with
/// `MissingPayload`; an unknown one fails with `UnsupportedVariant`.
pub fn decode_type_kind<T>(translator: &T, composition: &Composition<T>) -> Result<TreeKindOut<T>>
where
    T: TypeKindTranslator,
{
    let tag = composition.kind;
    let kind = match tag {
        Tag::UnitType => TypeKind::UnitType,
        Tag::Int => TypeKind::Int,
        Tag::BigInt => TypeKind::BigInt,
        Tag::Double => TypeKind::Double,
        Tag::Bool => TypeKind::Bool,
        Tag::String => TypeKind::String,
        Tag::Qubit => TypeKind::Qubit,
        Tag::Result => TypeKind::Result,
        Tag::Pauli => TypeKind::Pauli,
        Tag::Range => TypeKind::Range,
        Tag::InvalidType => TypeKind::InvalidType,
        Tag::MissingType => TypeKind::MissingType,
        Tag::PlaceholderType => TypeKind::PlaceholderType,
        Tag::ArrayType => {
            let item = payload(composition.array_type.as_ref(), tag)?;
            TypeKind::ArrayType(translator.translate_data_type(item)?)
        }
        Tag::TupleType => {
            // A tuple has at least one item
            let items = payload(composition.tuple_type.as_ref(), tag)?;
            if items.is_empty() {
                return Err(CodecError::missing_payload("TypeKind", tag));
            }
            let items: Result<Vec<_>> = items
                .iter()
                .map(|item| translator.translate_data_type(item))
                .collect();
            TypeKind::TupleType(items?)
        }
        Tag::UserDefinedType => {
            let udt = payload(composition.user_defined_type.as_ref(), tag)?;
            TypeKind::UserDefinedType(translator.translate_user_defined_type(udt)?)
        }
        Tag::TypeParameter => {
            let param = payload(composition.type_parameter.as_ref(), tag)?;
            TypeKind::TypeParameter(translator.translate_type_parameter(param)?)
        }
        Tag::Operation => {
            let operation = payload(composition.operation.as_ref(), tag)?;
            TypeKind::Operation(
                (
                    translator.translate_data_type(&operation.arrow.domain)?,
                    translator.translate_data_type(&operation.arrow.codomain)?,
                ),
                translator.translate_characteristics(&operation.characteristics)?,
            )
        }
        Tag::Function => {
            let function = payload(composition.function.as_ref(), tag)?;
            TypeKind::Function(
                translator.translate_data_type(&function.domain)?,
                translator.translate_data_type(&function.codomain)?,
            )
        }
        Tag::Unrecognized(_) => return Err(CodecError::unsupported("TypeKind", tag)),
    };
    Ok(kind)
}

fn payload<V>(value: Option<&V>, tag: Tag) -> Result<&V> {
    value.ok_or_else(|| CodecError::missing_payload("TypeKind", tag))
}
