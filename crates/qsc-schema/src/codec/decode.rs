//! Schema to tree direction.
//!
//! Tree fields without a schema counterpart are filled with placeholders;
//! see the module docs of [`crate::codec`].

use tracing::{debug, trace};

use super::adapters::{
    comments_from_schema, nullable_location_from_schema, nullable_position_from_schema,
    nullable_range_from_schema, nullable_user_defined_type_from_schema, position_from_schema,
    qualified_name_from_schema, range_from_schema, type_parameter_from_schema,
    user_defined_type_from_schema,
};
use crate::error::{CodecError, Result};
use crate::naming::validate_identifier;
use crate::schema;
use crate::traversal::{TypeKindTranslator, decode_type_kind};
use crate::tree::{self, CharacteristicsKind, DocumentationIndex};

/// Rebuilds tree values from schema records.
#[derive(Debug, Clone, Copy, Default)]
pub struct Decoder;

/// Look up the payload selected by a discriminator.
fn payload<'a, T>(
    field: Option<&'a T>,
    kind: &'static str,
    variant: impl ToString,
) -> Result<&'a T> {
    field.ok_or_else(|| CodecError::missing_payload(kind, variant))
}

impl Decoder {
    pub fn decode_program(&self, program: &schema::Program) -> Result<tree::Program> {
        debug!(
            namespaces = program.namespaces.len(),
            "decoding program"
        );
        if !program.entry_points.is_empty() {
            debug!(
                entry_points = program.entry_points.len(),
                "discarding entry points, they are not read back"
            );
        }

        let namespaces: Result<Vec<_>> = program
            .namespaces
            .iter()
            .map(|namespace| self.decode_namespace(namespace))
            .collect();

        Ok(tree::Program {
            namespaces: namespaces?,
            entry_points: Vec::new(),
        })
    }

    pub fn decode_namespace(&self, namespace: &schema::Namespace) -> Result<tree::Namespace> {
        trace!(
            namespace = %namespace.name,
            elements = namespace.elements.len(),
            "decoding namespace"
        );

        let elements: Result<Vec<_>> = namespace
            .elements
            .iter()
            .map(|element| self.decode_namespace_element(element))
            .collect();

        let mut documentation = DocumentationIndex::new();
        for item in &namespace.documentation {
            documentation
                .entry(item.source_file_name.clone())
                .or_default()
                .push(item.documentation_instances.clone());
        }

        Ok(tree::Namespace {
            name: validate_identifier(namespace.name.clone(), "Namespace.name")?,
            elements: elements?,
            documentation,
        })
    }

    pub fn decode_namespace_element(
        &self,
        element: &schema::NamespaceElement,
    ) -> Result<tree::NamespaceElement> {
        const KIND: &str = "NamespaceElement";
        match element.kind {
            schema::NamespaceElementKind::Callable => {
                let callable = payload(element.callable.as_ref(), KIND, element.kind)?;
                Ok(tree::NamespaceElement::Callable(
                    self.decode_callable(callable)?,
                ))
            }
            schema::NamespaceElementKind::CustomType => {
                let custom_type = payload(element.custom_type.as_ref(), KIND, element.kind)?;
                Ok(tree::NamespaceElement::CustomType(
                    self.decode_custom_type(custom_type)?,
                ))
            }
            other => Err(CodecError::unsupported(KIND, other)),
        }
    }

    pub fn decode_callable(&self, callable: &schema::Callable) -> Result<tree::Callable> {
        let signature = match &callable.signature {
            Some(signature) => self.decode_signature(signature)?,
            None => tree::ResolvedSignature::placeholder(),
        };
        let argument_tuple = match &callable.argument_tuple {
            Some(tuple) => decode_tuple(tuple, &|declaration| {
                self.decode_local_variable(declaration, decode_local_symbol)
            })?,
            None => tree::QsTuple::empty(),
        };

        Ok(tree::Callable {
            kind: decode_callable_kind(callable.kind)?,
            full_name: qualified_name_from_schema(&callable.full_name)?,
            attributes: self.decode_attributes(callable.attributes.as_deref())?,
            modifiers: decode_modifiers(callable.modifiers.as_ref())?,
            source_file: callable.source_file.clone(),
            location: nullable_location_from_schema(callable.location.as_ref()),
            signature,
            argument_tuple,
            specializations: Vec::new(),
            documentation: callable.documentation.clone(),
            comments: comments_from_schema(&callable.comments),
        })
    }

    pub fn decode_custom_type(&self, custom_type: &schema::CustomType) -> Result<tree::CustomType> {
        let underlying_type = match &custom_type.underlying_type {
            Some(resolved_type) => self.decode_resolved_type(resolved_type)?,
            None => tree::ResolvedType::invalid(),
        };
        let type_items = match &custom_type.type_items {
            Some(tuple) => decode_tuple(tuple, &|item| self.decode_type_item(item))?,
            None => tree::QsTuple::empty(),
        };

        Ok(tree::CustomType {
            full_name: qualified_name_from_schema(&custom_type.full_name)?,
            attributes: self.decode_attributes(custom_type.attributes.as_deref())?,
            modifiers: decode_modifiers(custom_type.modifiers.as_ref())?,
            source_file: custom_type.source_file.clone(),
            location: nullable_location_from_schema(custom_type.location.as_ref()),
            underlying_type,
            type_items,
            documentation: custom_type.documentation.clone(),
            comments: comments_from_schema(&custom_type.comments),
        })
    }

    pub fn decode_resolved_type(
        &self,
        resolved_type: &schema::ResolvedType,
    ) -> Result<tree::ResolvedType> {
        Ok(tree::ResolvedType::new(decode_type_kind(
            self,
            &*resolved_type.type_kind,
        )?))
    }

    pub fn decode_signature(
        &self,
        signature: &schema::ResolvedSignature,
    ) -> Result<tree::ResolvedSignature> {
        let type_parameters: Result<Vec<_>> = signature
            .type_parameters
            .iter()
            .map(decode_local_symbol)
            .collect();

        Ok(tree::ResolvedSignature {
            type_parameters: type_parameters?,
            argument_type: self.decode_resolved_type(&signature.argument_type)?,
            return_type: self.decode_resolved_type(&signature.return_type)?,
            information: decode_callable_information(&signature.information)?,
        })
    }

    fn decode_attributes(
        &self,
        attributes: Option<&[schema::DeclarationAttribute]>,
    ) -> Result<Vec<tree::DeclarationAttribute>> {
        attributes
            .unwrap_or_default()
            .iter()
            .map(|attribute| {
                Ok(tree::DeclarationAttribute {
                    type_id: nullable_user_defined_type_from_schema(attribute.type_id.as_ref())?,
                    type_id_range: nullable_range_from_schema(attribute.type_id_range.as_ref()),
                    argument: tree::AttributeArgument::placeholder(),
                    offset: position_from_schema(&attribute.offset),
                    comments: comments_from_schema(&attribute.comments),
                })
            })
            .collect()
    }

    fn decode_local_variable<S, N>(
        &self,
        declaration: &schema::LocalVariableDeclaration<S>,
        decode_name: impl Fn(&S) -> Result<N>,
    ) -> Result<tree::LocalVariableDeclaration<N>> {
        Ok(tree::LocalVariableDeclaration {
            variable_name: decode_name(&declaration.variable_name)?,
            resolved_type: self.decode_resolved_type(&declaration.resolved_type)?,
            inferred: tree::InferredExpressionInformation {
                is_mutable: declaration.inferred_information.is_mutable,
                has_local_quantum_dependency: declaration
                    .inferred_information
                    .has_local_quantum_dependency,
            },
            position: nullable_position_from_schema(declaration.position.as_ref()),
            range: range_from_schema(&declaration.range),
        })
    }

    fn decode_type_item(&self, item: &schema::TypeItem) -> Result<tree::TypeItem> {
        const KIND: &str = "TypeItem";
        match item.kind {
            schema::TypeItemKind::Named => {
                let named = payload(item.named.as_ref(), KIND, item.kind)?;
                Ok(tree::TypeItem::Named(self.decode_local_variable(
                    named,
                    |name: &String| validate_identifier(name.clone(), "TypeItem.named"),
                )?))
            }
            schema::TypeItemKind::Anonymous => {
                let anonymous = payload(item.anonymous.as_ref(), KIND, item.kind)?;
                Ok(tree::TypeItem::Anonymous(
                    self.decode_resolved_type(anonymous)?,
                ))
            }
            other => Err(CodecError::unsupported(KIND, other)),
        }
    }
}

impl TypeKindTranslator for Decoder {
    type DataIn = schema::ResolvedType;
    type DataOut = tree::ResolvedType;
    type UdtIn = schema::UserDefinedType;
    type UdtOut = tree::UserDefinedType;
    type ParamIn = schema::TypeParameter;
    type ParamOut = tree::TypeParameter;
    type CharacteristicsIn = schema::CallableInformation;
    type CharacteristicsOut = tree::CallableInformation;

    fn translate_data_type(&self, data: &schema::ResolvedType) -> Result<tree::ResolvedType> {
        self.decode_resolved_type(data)
    }

    fn translate_user_defined_type(
        &self,
        udt: &schema::UserDefinedType,
    ) -> Result<tree::UserDefinedType> {
        user_defined_type_from_schema(udt)
    }

    fn translate_type_parameter(
        &self,
        param: &schema::TypeParameter,
    ) -> Result<tree::TypeParameter> {
        type_parameter_from_schema(param)
    }

    fn translate_characteristics(
        &self,
        information: &schema::CallableInformation,
    ) -> Result<tree::CallableInformation> {
        decode_callable_information(information)
    }
}

/// Rebuild a tuple structure, decoding each item with `decode_item`.
pub fn decode_tuple<S, T, F>(tuple: &schema::QsTuple<S>, decode_item: &F) -> Result<tree::QsTuple<T>>
where
    F: Fn(&S) -> Result<T>,
{
    const KIND: &str = "QsTuple";
    match tuple.kind {
        schema::QsTupleKind::Item => {
            let item = payload(tuple.item.as_ref(), KIND, tuple.kind)?;
            Ok(tree::QsTuple::Item(decode_item(item)?))
        }
        schema::QsTupleKind::Tuple => {
            let items: Result<Vec<_>> = payload(tuple.items.as_ref(), KIND, tuple.kind)?
                .iter()
                .map(|inner| decode_tuple(inner, decode_item))
                .collect();
            Ok(tree::QsTuple::Tuple(items?))
        }
        other => Err(CodecError::unsupported(KIND, other)),
    }
}

pub fn decode_local_symbol(symbol: &schema::LocalSymbol) -> Result<tree::LocalSymbol> {
    const KIND: &str = "LocalSymbol";
    match symbol.kind {
        schema::LocalSymbolKind::ValidName => {
            let name = payload(symbol.name.as_ref(), KIND, symbol.kind)?;
            Ok(tree::LocalSymbol::ValidName(validate_identifier(
                name.clone(),
                "LocalSymbol.name",
            )?))
        }
        schema::LocalSymbolKind::InvalidName => Ok(tree::LocalSymbol::InvalidName),
        other => Err(CodecError::unsupported(KIND, other)),
    }
}

pub fn decode_characteristics(
    characteristics: &schema::ResolvedCharacteristics,
) -> Result<tree::ResolvedCharacteristics> {
    const KIND: &str = "ResolvedCharacteristics";
    let expression = &characteristics.expression;
    let set_operation = || -> Result<_> {
        let operation = payload(expression.set_operation.as_ref(), KIND, expression.kind)?;
        Ok((
            decode_characteristics(&operation.lhs)?,
            decode_characteristics(&operation.rhs)?,
        ))
    };

    let decoded = match expression.kind {
        schema::CharacteristicsKind::EmptySet => CharacteristicsKind::EmptySet,
        schema::CharacteristicsKind::InvalidSetExpr => CharacteristicsKind::InvalidSetExpr,
        schema::CharacteristicsKind::SimpleSet => {
            let property = payload(expression.simple_set.as_ref(), KIND, expression.kind)?;
            CharacteristicsKind::SimpleSet(decode_op_property(*property)?)
        }
        schema::CharacteristicsKind::Union => {
            let (lhs, rhs) = set_operation()?;
            CharacteristicsKind::Union(lhs, rhs)
        }
        schema::CharacteristicsKind::Intersection => {
            let (lhs, rhs) = set_operation()?;
            CharacteristicsKind::Intersection(lhs, rhs)
        }
        other => return Err(CodecError::unsupported(KIND, other)),
    };

    Ok(tree::ResolvedCharacteristics::new(decoded))
}

pub fn decode_callable_information(
    information: &schema::CallableInformation,
) -> Result<tree::CallableInformation> {
    Ok(tree::CallableInformation {
        characteristics: decode_characteristics(&information.characteristics)?,
        inferred: tree::InferredCallableInformation {
            is_self_adjoint: information.inferred.is_self_adjoint,
            is_intrinsic: information.inferred.is_intrinsic,
        },
    })
}

fn decode_op_property(property: schema::OpProperty) -> Result<tree::OpProperty> {
    match property {
        schema::OpProperty::Adjointable => Ok(tree::OpProperty::Adjointable),
        schema::OpProperty::Controllable => Ok(tree::OpProperty::Controllable),
        other => Err(CodecError::unsupported("OpProperty", other)),
    }
}

fn decode_callable_kind(kind: schema::CallableKind) -> Result<tree::CallableKind> {
    match kind {
        schema::CallableKind::Operation => Ok(tree::CallableKind::Operation),
        schema::CallableKind::Function => Ok(tree::CallableKind::Function),
        schema::CallableKind::TypeConstructor => Ok(tree::CallableKind::TypeConstructor),
        other => Err(CodecError::unsupported("CallableKind", other)),
    }
}

/// Absent modifiers decode to default access.
fn decode_modifiers(modifiers: Option<&schema::Modifiers>) -> Result<tree::Modifiers> {
    let Some(modifiers) = modifiers else {
        return Ok(tree::Modifiers::default());
    };
    let access = match modifiers.access {
        schema::AccessModifier::DefaultAccess => tree::Access::DefaultAccess,
        schema::AccessModifier::Internal => tree::Access::Internal,
        other => return Err(CodecError::unsupported("AccessModifier", other)),
    };
    Ok(tree::Modifiers { access })
}
