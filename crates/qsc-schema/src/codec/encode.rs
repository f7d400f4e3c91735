//! Tree to schema direction.

use tracing::{debug, trace};

use super::SchemaProfile;
use super::adapters::{
    comments_to_schema, nullable_location_to_schema, nullable_position_to_schema,
    nullable_range_to_schema, nullable_user_defined_type_to_schema, position_to_schema,
    qualified_name_to_schema, range_to_schema, type_parameter_to_schema,
    user_defined_type_to_schema,
};
use crate::error::Result;
use crate::schema;
use crate::traversal::{TypeKindTranslator, encode_type_kind};
use crate::tree::{self, CharacteristicsKind};

/// Builds schema records from a tree program.
///
/// Performs no validation: the tree is assumed to be well formed.
#[derive(Debug, Clone, Copy, Default)]
pub struct Encoder {
    profile: SchemaProfile,
}

impl Encoder {
    pub fn new(profile: SchemaProfile) -> Self {
        Encoder { profile }
    }

    pub fn profile(&self) -> SchemaProfile {
        self.profile
    }

    fn full(&self) -> bool {
        self.profile == SchemaProfile::Full
    }

    pub fn encode_program(&self, program: &tree::Program) -> Result<schema::Program> {
        debug!(
            namespaces = program.namespaces.len(),
            entry_points = program.entry_points.len(),
            profile = ?self.profile,
            "encoding program"
        );

        let namespaces: Result<Vec<_>> = program
            .namespaces
            .iter()
            .map(|namespace| self.encode_namespace(namespace))
            .collect();

        Ok(schema::Program {
            namespaces: namespaces?,
            entry_points: program
                .entry_points
                .iter()
                .map(qualified_name_to_schema)
                .collect(),
        })
    }

    pub fn encode_namespace(&self, namespace: &tree::Namespace) -> Result<schema::Namespace> {
        trace!(
            namespace = %namespace.name,
            elements = namespace.elements.len(),
            "encoding namespace"
        );

        let elements: Result<Vec<_>> = namespace
            .elements
            .iter()
            .map(|element| self.encode_namespace_element(element))
            .collect();

        // One item per documentation group, files in index order
        let documentation = namespace
            .documentation
            .iter()
            .flat_map(|(source_file, groups)| {
                groups.iter().map(move |group| schema::DocumentationItem {
                    source_file_name: source_file.clone(),
                    documentation_instances: group.clone(),
                })
            })
            .collect();

        Ok(schema::Namespace {
            name: namespace.name.clone(),
            elements: elements?,
            documentation,
        })
    }

    pub fn encode_namespace_element(
        &self,
        element: &tree::NamespaceElement,
    ) -> Result<schema::NamespaceElement> {
        let encoded = match element {
            tree::NamespaceElement::Callable(callable) => schema::NamespaceElement {
                kind: schema::NamespaceElementKind::Callable,
                callable: Some(self.encode_callable(callable)?),
                custom_type: None,
            },
            tree::NamespaceElement::CustomType(custom_type) => schema::NamespaceElement {
                kind: schema::NamespaceElementKind::CustomType,
                callable: None,
                custom_type: Some(self.encode_custom_type(custom_type)?),
            },
        };
        Ok(encoded)
    }

    pub fn encode_callable(&self, callable: &tree::Callable) -> Result<schema::Callable> {
        let (attributes, modifiers, signature, argument_tuple) = if self.full() {
            (
                Some(encode_attributes(&callable.attributes)),
                Some(encode_modifiers(&callable.modifiers)),
                Some(self.encode_signature(&callable.signature)?),
                Some(encode_tuple(&callable.argument_tuple, &|declaration| {
                    self.encode_local_variable(declaration, encode_local_symbol)
                })?),
            )
        } else {
            (None, None, None, None)
        };

        Ok(schema::Callable {
            kind: encode_callable_kind(callable.kind),
            full_name: qualified_name_to_schema(&callable.full_name),
            attributes,
            modifiers,
            source_file: callable.source_file.clone(),
            location: nullable_location_to_schema(&callable.location),
            signature,
            argument_tuple,
            documentation: callable.documentation.clone(),
            comments: comments_to_schema(&callable.comments),
        })
    }

    pub fn encode_custom_type(&self, custom_type: &tree::CustomType) -> Result<schema::CustomType> {
        let (attributes, modifiers, underlying_type, type_items) = if self.full() {
            (
                Some(encode_attributes(&custom_type.attributes)),
                Some(encode_modifiers(&custom_type.modifiers)),
                Some(self.encode_resolved_type(&custom_type.underlying_type)?),
                Some(encode_tuple(&custom_type.type_items, &|item| {
                    self.encode_type_item(item)
                })?),
            )
        } else {
            (None, None, None, None)
        };

        Ok(schema::CustomType {
            full_name: qualified_name_to_schema(&custom_type.full_name),
            attributes,
            modifiers,
            source_file: custom_type.source_file.clone(),
            location: nullable_location_to_schema(&custom_type.location),
            underlying_type,
            type_items,
            documentation: custom_type.documentation.clone(),
            comments: comments_to_schema(&custom_type.comments),
        })
    }

    pub fn encode_resolved_type(
        &self,
        resolved_type: &tree::ResolvedType,
    ) -> Result<schema::ResolvedType> {
        Ok(schema::ResolvedType::new(encode_type_kind(
            self,
            resolved_type.resolution(),
        )?))
    }

    pub fn encode_signature(
        &self,
        signature: &tree::ResolvedSignature,
    ) -> Result<schema::ResolvedSignature> {
        Ok(schema::ResolvedSignature {
            type_parameters: signature
                .type_parameters
                .iter()
                .map(encode_local_symbol)
                .collect(),
            argument_type: self.encode_resolved_type(&signature.argument_type)?,
            return_type: self.encode_resolved_type(&signature.return_type)?,
            information: encode_callable_information(&signature.information),
        })
    }

    fn encode_local_variable<N, S>(
        &self,
        declaration: &tree::LocalVariableDeclaration<N>,
        encode_name: impl Fn(&N) -> S,
    ) -> Result<schema::LocalVariableDeclaration<S>> {
        Ok(schema::LocalVariableDeclaration {
            variable_name: encode_name(&declaration.variable_name),
            resolved_type: self.encode_resolved_type(&declaration.resolved_type)?,
            inferred_information: schema::InferredExpressionInformation {
                is_mutable: declaration.inferred.is_mutable,
                has_local_quantum_dependency: declaration.inferred.has_local_quantum_dependency,
            },
            position: nullable_position_to_schema(&declaration.position),
            range: range_to_schema(&declaration.range),
        })
    }

    fn encode_type_item(&self, item: &tree::TypeItem) -> Result<schema::TypeItem> {
        let encoded = match item {
            tree::TypeItem::Named(declaration) => schema::TypeItem {
                kind: schema::TypeItemKind::Named,
                named: Some(self.encode_local_variable(declaration, String::clone)?),
                anonymous: None,
            },
            tree::TypeItem::Anonymous(resolved_type) => schema::TypeItem {
                kind: schema::TypeItemKind::Anonymous,
                named: None,
                anonymous: Some(self.encode_resolved_type(resolved_type)?),
            },
        };
        Ok(encoded)
    }
}

impl TypeKindTranslator for Encoder {
    type DataIn = tree::ResolvedType;
    type DataOut = schema::ResolvedType;
    type UdtIn = tree::UserDefinedType;
    type UdtOut = schema::UserDefinedType;
    type ParamIn = tree::TypeParameter;
    type ParamOut = schema::TypeParameter;
    type CharacteristicsIn = tree::CallableInformation;
    type CharacteristicsOut = schema::CallableInformation;

    fn translate_data_type(&self, data: &tree::ResolvedType) -> Result<schema::ResolvedType> {
        self.encode_resolved_type(data)
    }

    fn translate_user_defined_type(
        &self,
        udt: &tree::UserDefinedType,
    ) -> Result<schema::UserDefinedType> {
        Ok(user_defined_type_to_schema(udt))
    }

    fn translate_type_parameter(
        &self,
        param: &tree::TypeParameter,
    ) -> Result<schema::TypeParameter> {
        Ok(type_parameter_to_schema(param))
    }

    fn translate_characteristics(
        &self,
        information: &tree::CallableInformation,
    ) -> Result<schema::CallableInformation> {
        Ok(encode_callable_information(information))
    }
}

/// Translate a tuple structure, encoding each item with `encode_item`.
pub fn encode_tuple<T, S, F>(tuple: &tree::QsTuple<T>, encode_item: &F) -> Result<schema::QsTuple<S>>
where
    F: Fn(&T) -> Result<S>,
{
    let encoded = match tuple {
        tree::QsTuple::Item(item) => schema::QsTuple {
            kind: schema::QsTupleKind::Item,
            item: Some(encode_item(item)?),
            items: None,
        },
        tree::QsTuple::Tuple(items) => {
            let items: Result<Vec<_>> = items
                .iter()
                .map(|inner| encode_tuple(inner, encode_item))
                .collect();
            schema::QsTuple {
                kind: schema::QsTupleKind::Tuple,
                item: None,
                items: Some(items?),
            }
        }
    };
    Ok(encoded)
}

pub fn encode_local_symbol(symbol: &tree::LocalSymbol) -> schema::LocalSymbol {
    match symbol {
        tree::LocalSymbol::ValidName(name) => schema::LocalSymbol {
            kind: schema::LocalSymbolKind::ValidName,
            name: Some(name.clone()),
        },
        tree::LocalSymbol::InvalidName => schema::LocalSymbol {
            kind: schema::LocalSymbolKind::InvalidName,
            name: None,
        },
    }
}

pub fn encode_characteristics(
    characteristics: &tree::ResolvedCharacteristics,
) -> schema::ResolvedCharacteristics {
    let tagged = |kind| schema::CharacteristicsComposition {
        kind,
        simple_set: None,
        set_operation: None,
    };
    let set_operation = |lhs, rhs| {
        Some(schema::SetOperation {
            lhs: encode_characteristics(lhs),
            rhs: encode_characteristics(rhs),
        })
    };

    let expression = match characteristics.expression() {
        CharacteristicsKind::EmptySet => tagged(schema::CharacteristicsKind::EmptySet),
        CharacteristicsKind::InvalidSetExpr => tagged(schema::CharacteristicsKind::InvalidSetExpr),
        CharacteristicsKind::SimpleSet(property) => schema::CharacteristicsComposition {
            simple_set: Some(match property {
                tree::OpProperty::Adjointable => schema::OpProperty::Adjointable,
                tree::OpProperty::Controllable => schema::OpProperty::Controllable,
            }),
            ..tagged(schema::CharacteristicsKind::SimpleSet)
        },
        CharacteristicsKind::Union(lhs, rhs) => schema::CharacteristicsComposition {
            set_operation: set_operation(lhs, rhs),
            ..tagged(schema::CharacteristicsKind::Union)
        },
        CharacteristicsKind::Intersection(lhs, rhs) => schema::CharacteristicsComposition {
            set_operation: set_operation(lhs, rhs),
            ..tagged(schema::CharacteristicsKind::Intersection)
        },
    };

    schema::ResolvedCharacteristics {
        expression: Box::new(expression),
    }
}

pub fn encode_callable_information(
    information: &tree::CallableInformation,
) -> schema::CallableInformation {
    schema::CallableInformation {
        characteristics: encode_characteristics(&information.characteristics),
        inferred: schema::InferredCallableInformation {
            is_self_adjoint: information.inferred.is_self_adjoint,
            is_intrinsic: information.inferred.is_intrinsic,
        },
    }
}

fn encode_callable_kind(kind: tree::CallableKind) -> schema::CallableKind {
    match kind {
        tree::CallableKind::Operation => schema::CallableKind::Operation,
        tree::CallableKind::Function => schema::CallableKind::Function,
        tree::CallableKind::TypeConstructor => schema::CallableKind::TypeConstructor,
    }
}

fn encode_attributes(
    attributes: &[tree::DeclarationAttribute],
) -> Vec<schema::DeclarationAttribute> {
    // The argument expression has no schema counterpart
    attributes
        .iter()
        .map(|attribute| schema::DeclarationAttribute {
            type_id: nullable_user_defined_type_to_schema(&attribute.type_id),
            type_id_range: nullable_range_to_schema(&attribute.type_id_range),
            offset: position_to_schema(&attribute.offset),
            comments: comments_to_schema(&attribute.comments),
        })
        .collect()
}

fn encode_modifiers(modifiers: &tree::Modifiers) -> schema::Modifiers {
    schema::Modifiers {
        access: match modifiers.access {
            tree::Access::DefaultAccess => schema::AccessModifier::DefaultAccess,
            tree::Access::Internal => schema::AccessModifier::Internal,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::naming::QualifiedName;
    use crate::tree::{Nullable, Position, Range, ResolvedType};

    fn callable(name: &str) -> tree::Callable {
        tree::Callable {
            kind: tree::CallableKind::Operation,
            full_name: QualifiedName::new("Demo", name),
            attributes: Vec::new(),
            modifiers: tree::Modifiers::default(),
            source_file: "demo.qs".to_string(),
            location: Nullable::Null,
            signature: tree::ResolvedSignature {
                type_parameters: vec![tree::LocalSymbol::valid("'T")],
                argument_type: ResolvedType::qubit(),
                return_type: ResolvedType::unit(),
                information: tree::CallableInformation::default(),
            },
            argument_tuple: tree::QsTuple::Tuple(vec![tree::QsTuple::Item(
                tree::LocalVariableDeclaration {
                    variable_name: tree::LocalSymbol::valid("q"),
                    resolved_type: ResolvedType::qubit(),
                    inferred: tree::InferredExpressionInformation::default(),
                    position: Nullable::Value(Position::new(0, 4)),
                    range: Range::new(Position::new(0, 0), Position::new(0, 1)),
                },
            )]),
            specializations: Vec::new(),
            documentation: vec!["Applies something.".to_string()],
            comments: tree::Comments::default(),
        }
    }

    #[test]
    fn test_full_profile_writes_signature_and_arguments() {
        let encoded = Encoder::new(SchemaProfile::Full)
            .encode_callable(&callable("Apply"))
            .unwrap();

        let signature = encoded.signature.unwrap();
        assert_eq!(signature.type_parameters.len(), 1);
        assert_eq!(signature.argument_type.type_kind.kind, schema::TypeKind::Qubit);

        let arguments = encoded.argument_tuple.unwrap();
        assert_eq!(arguments.kind, schema::QsTupleKind::Tuple);
        let item = arguments.items.unwrap()[0].item.clone().unwrap();
        assert_eq!(item.variable_name.name.as_deref(), Some("q"));
        assert_eq!(item.position, Some(schema::Position { line: 0, column: 4 }));
    }

    #[test]
    fn test_minimal_profile_leaves_out_full_fields() {
        let encoded = Encoder::new(SchemaProfile::Minimal)
            .encode_callable(&callable("Apply"))
            .unwrap();

        assert!(encoded.attributes.is_none());
        assert!(encoded.modifiers.is_none());
        assert!(encoded.signature.is_none());
        assert!(encoded.argument_tuple.is_none());
        assert_eq!(encoded.documentation, vec!["Applies something."]);
        assert!(encoded.location.is_none());
    }

    #[test]
    fn test_characteristics_set_operations() {
        let characteristics = tree::ResolvedCharacteristics::new(CharacteristicsKind::Union(
            tree::ResolvedCharacteristics::simple(tree::OpProperty::Adjointable),
            tree::ResolvedCharacteristics::simple(tree::OpProperty::Controllable),
        ));

        let encoded = encode_characteristics(&characteristics);
        assert_eq!(encoded.expression.kind, schema::CharacteristicsKind::Union);
        let operation = encoded.expression.set_operation.as_ref().unwrap();
        assert_eq!(
            operation.lhs.expression.simple_set,
            Some(schema::OpProperty::Adjointable)
        );
        assert_eq!(
            operation.rhs.expression.simple_set,
            Some(schema::OpProperty::Controllable)
        );
        assert!(encoded.expression.simple_set.is_none());
    }

    #[test]
    fn test_documentation_is_flattened_in_order() {
        let mut documentation = tree::DocumentationIndex::new();
        documentation.insert(
            "b.qs".to_string(),
            vec![vec!["first".to_string()], vec!["second".to_string()]],
        );
        documentation.insert("a.qs".to_string(), vec![vec!["third".to_string()]]);

        let namespace = tree::Namespace {
            name: "Demo".to_string(),
            elements: Vec::new(),
            documentation,
        };
        let encoded = Encoder::default().encode_namespace(&namespace).unwrap();

        let files: Vec<_> = encoded
            .documentation
            .iter()
            .map(|item| item.source_file_name.as_str())
            .collect();
        assert_eq!(files, vec!["b.qs", "b.qs", "a.qs"]);
        assert_eq!(encoded.documentation[1].documentation_instances, vec!["second"]);
    }

    #[test]
    fn test_attributes_drop_argument() {
        let attribute = tree::DeclarationAttribute {
            type_id: Nullable::Null,
            type_id_range: Nullable::Value(Range::new(Position::new(1, 1), Position::new(1, 9))),
            argument: tree::AttributeArgument {
                resolved_type: ResolvedType::string(),
                range: Nullable::Null,
            },
            offset: Position::new(1, 0),
            comments: tree::Comments::default(),
        };

        let encoded = encode_attributes(&[attribute]);
        assert_eq!(encoded.len(), 1);
        assert!(encoded[0].type_id.is_none());
        assert_eq!(encoded[0].offset, schema::Position { line: 1, column: 0 });
        assert_eq!(
            encoded[0].type_id_range.map(|range| range.end.column),
            Some(9)
        );
    }

    #[test]
    fn test_entry_points_are_written() {
        let program = tree::Program {
            namespaces: Vec::new(),
            entry_points: vec![QualifiedName::new("Demo", "Main")],
        };
        let encoded = Encoder::default().encode_program(&program).unwrap();
        assert_eq!(encoded.entry_points.len(), 1);
        assert_eq!(encoded.entry_points[0].name, "Main");
    }
}
