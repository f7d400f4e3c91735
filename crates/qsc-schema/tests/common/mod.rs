#![allow(dead_code)]

use qsc_schema::QualifiedName;
use qsc_schema::tree::{
    Access, AttributeArgument, Callable, CallableInformation, CallableKind, CharacteristicsKind,
    Comments, CustomType, DeclarationAttribute, DocumentationIndex, InferredCallableInformation,
    InferredExpressionInformation, Location, LocalSymbol, LocalVariableDeclaration, Modifiers,
    Namespace, NamespaceElement, Nullable, OpProperty, Position, Program, QsTuple, Range,
    ResolvedCharacteristics, ResolvedSignature, ResolvedType, TypeItem, TypeKind, TypeParameter,
    UserDefinedType,
};

pub const NAMESPACE: &str = "Demo.Teleport";

pub fn range(line: u32, start: u32, end: u32) -> Range {
    Range::new(Position::new(line, start), Position::new(line, end))
}

pub fn location(line: u32) -> Location {
    Location::new(Position::new(line, 0), range(0, 10, 18))
}

pub fn adjointable_controllable() -> CallableInformation {
    CallableInformation {
        characteristics: ResolvedCharacteristics::new(CharacteristicsKind::Union(
            ResolvedCharacteristics::simple(OpProperty::Adjointable),
            ResolvedCharacteristics::simple(OpProperty::Controllable),
        )),
        inferred: InferredCallableInformation {
            is_self_adjoint: false,
            is_intrinsic: true,
        },
    }
}

pub fn message_type() -> ResolvedType {
    ResolvedType::new(TypeKind::UserDefinedType(UserDefinedType {
        namespace: NAMESPACE.to_string(),
        name: "Message".to_string(),
        range: Nullable::Value(range(4, 12, 19)),
    }))
}

pub fn type_parameter(callable: &str, name: &str) -> ResolvedType {
    ResolvedType::new(TypeKind::TypeParameter(TypeParameter {
        origin: QualifiedName::new(NAMESPACE, callable),
        type_name: name.to_string(),
        range: Nullable::Null,
    }))
}

/// Attribute as the decoder rebuilds it: the argument is never carried.
pub fn attribute() -> DeclarationAttribute {
    DeclarationAttribute {
        type_id: Nullable::Value(UserDefinedType {
            namespace: "Std.Core".to_string(),
            name: "EntryPoint".to_string(),
            range: Nullable::Null,
        }),
        type_id_range: Nullable::Value(range(2, 1, 11)),
        argument: AttributeArgument::placeholder(),
        offset: Position::new(2, 0),
        comments: Comments::new(vec!["// entry".to_string()], Vec::new()),
    }
}

pub fn argument(name: &str, resolved_type: ResolvedType) -> LocalVariableDeclaration<LocalSymbol> {
    LocalVariableDeclaration {
        variable_name: LocalSymbol::valid(name),
        resolved_type,
        inferred: InferredExpressionInformation {
            is_mutable: false,
            has_local_quantum_dependency: true,
        },
        position: Nullable::Value(Position::new(0, 4)),
        range: range(0, 20, 21),
    }
}

pub fn callable(name: &str, location: Nullable<Location>) -> Callable {
    Callable {
        kind: CallableKind::Operation,
        full_name: QualifiedName::new(NAMESPACE, name),
        attributes: vec![attribute()],
        modifiers: Modifiers {
            access: Access::Internal,
        },
        source_file: "teleport.qs".to_string(),
        location,
        signature: ResolvedSignature {
            type_parameters: vec![LocalSymbol::valid("'T"), LocalSymbol::InvalidName],
            argument_type: ResolvedType::tuple(vec![
                ResolvedType::qubit(),
                type_parameter(name, "'T"),
            ]),
            return_type: ResolvedType::unit(),
            information: adjointable_controllable(),
        },
        argument_tuple: QsTuple::Tuple(vec![
            QsTuple::Item(argument("target", ResolvedType::qubit())),
            QsTuple::Tuple(vec![QsTuple::Item(argument("payload", type_parameter(name, "'T")))]),
        ]),
        specializations: Vec::new(),
        documentation: vec![format!("Runs {name}.")],
        comments: Comments::default(),
    }
}

pub fn custom_type(name: &str) -> CustomType {
    let underlying = ResolvedType::tuple(vec![ResolvedType::int(), ResolvedType::string()]);
    CustomType {
        full_name: QualifiedName::new(NAMESPACE, name),
        attributes: Vec::new(),
        modifiers: Modifiers::default(),
        source_file: "teleport.qs".to_string(),
        location: Nullable::Value(location(4)),
        underlying_type: underlying,
        type_items: QsTuple::Tuple(vec![
            QsTuple::Item(TypeItem::Named(LocalVariableDeclaration {
                variable_name: "Id".to_string(),
                resolved_type: ResolvedType::int(),
                inferred: InferredExpressionInformation::default(),
                position: Nullable::Null,
                range: range(4, 20, 22),
            })),
            QsTuple::Item(TypeItem::Anonymous(ResolvedType::string())),
        ]),
        documentation: Vec::new(),
        comments: Comments::new(Vec::new(), vec!["// end".to_string()]),
    }
}

pub fn documentation() -> DocumentationIndex {
    let mut documentation = DocumentationIndex::new();
    documentation.insert(
        "teleport.qs".to_string(),
        vec![
            vec!["Teleportation samples.".to_string()],
            vec!["See also Measure.".to_string()],
        ],
    );
    documentation.insert(
        "message.qs".to_string(),
        vec![vec!["Message payloads.".to_string()]],
    );
    documentation
}

/// Program using every carried field, with the gaps already at their
/// decoded placeholder values.
pub fn program() -> Program {
    Program {
        namespaces: vec![Namespace {
            name: NAMESPACE.to_string(),
            elements: vec![
                NamespaceElement::CustomType(custom_type("A")),
                NamespaceElement::Callable(callable("B", Nullable::Value(location(8)))),
                NamespaceElement::CustomType(custom_type("C")),
                NamespaceElement::Callable(callable("Send", Nullable::Null)),
            ],
            documentation: documentation(),
        }],
        entry_points: Vec::new(),
    }
}

pub fn operation_returning(resolved_type: ResolvedType) -> ResolvedType {
    ResolvedType::operation(ResolvedType::qubit(), resolved_type, adjointable_controllable())
}

pub fn message_array() -> ResolvedType {
    ResolvedType::array(message_type())
}
