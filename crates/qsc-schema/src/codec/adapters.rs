//! Primitive adapters shared by both directions.
//!
//! All crossings between the tree's [`Nullable`] and the schema's native
//! `Option`/`null` convention go through the `nullable_*` pairs below; the
//! encoder and decoder never inspect a nullable value themselves.

use crate::error::Result;
use crate::naming::{QualifiedName, validate_identifier};
use crate::schema;
use crate::tree::{self, Nullable};

// =============================================================================
// Positions
// =============================================================================

pub fn position_to_schema(position: &tree::Position) -> schema::Position {
    schema::Position {
        line: position.line,
        column: position.column,
    }
}

pub fn position_from_schema(position: &schema::Position) -> tree::Position {
    tree::Position::new(position.line, position.column)
}

pub fn range_to_schema(range: &tree::Range) -> schema::Range {
    schema::Range {
        start: position_to_schema(&range.start),
        end: position_to_schema(&range.end),
    }
}

pub fn range_from_schema(range: &schema::Range) -> tree::Range {
    tree::Range::new(
        position_from_schema(&range.start),
        position_from_schema(&range.end),
    )
}

pub fn location_to_schema(location: &tree::Location) -> schema::Location {
    schema::Location {
        offset: position_to_schema(&location.offset),
        range: range_to_schema(&location.range),
    }
}

pub fn location_from_schema(location: &schema::Location) -> tree::Location {
    tree::Location::new(
        position_from_schema(&location.offset),
        range_from_schema(&location.range),
    )
}

// =============================================================================
// Names and references
// =============================================================================

pub fn qualified_name_to_schema(name: &QualifiedName) -> schema::QualifiedName {
    schema::QualifiedName {
        namespace: name.namespace.clone(),
        name: name.name.clone(),
    }
}

pub fn qualified_name_from_schema(name: &schema::QualifiedName) -> Result<QualifiedName> {
    QualifiedName::try_new(name.namespace.clone(), name.name.clone())
}

pub fn user_defined_type_to_schema(udt: &tree::UserDefinedType) -> schema::UserDefinedType {
    schema::UserDefinedType {
        namespace: udt.namespace.clone(),
        name: udt.name.clone(),
        range: nullable_range_to_schema(&udt.range),
    }
}

pub fn user_defined_type_from_schema(
    udt: &schema::UserDefinedType,
) -> Result<tree::UserDefinedType> {
    Ok(tree::UserDefinedType {
        namespace: validate_identifier(udt.namespace.clone(), "UserDefinedType.namespace")?,
        name: validate_identifier(udt.name.clone(), "UserDefinedType.name")?,
        range: nullable_range_from_schema(udt.range.as_ref()),
    })
}

pub fn type_parameter_to_schema(param: &tree::TypeParameter) -> schema::TypeParameter {
    schema::TypeParameter {
        origin: qualified_name_to_schema(&param.origin),
        type_name: param.type_name.clone(),
        range: nullable_range_to_schema(&param.range),
    }
}

pub fn type_parameter_from_schema(param: &schema::TypeParameter) -> Result<tree::TypeParameter> {
    Ok(tree::TypeParameter {
        origin: qualified_name_from_schema(&param.origin)?,
        type_name: validate_identifier(param.type_name.clone(), "TypeParameter.type_name")?,
        range: nullable_range_from_schema(param.range.as_ref()),
    })
}

pub fn comments_to_schema(comments: &tree::Comments) -> schema::Comments {
    schema::Comments {
        opening_comments: comments.opening.clone(),
        closing_comments: comments.closing.clone(),
    }
}

pub fn comments_from_schema(comments: &schema::Comments) -> tree::Comments {
    tree::Comments::new(
        comments.opening_comments.clone(),
        comments.closing_comments.clone(),
    )
}

// =============================================================================
// Nullable wrap/unwrap pairs
// =============================================================================

pub fn nullable_location_to_schema(
    location: &Nullable<tree::Location>,
) -> Option<schema::Location> {
    location.as_ref().map(location_to_schema).into_option()
}

pub fn nullable_location_from_schema(
    location: Option<&schema::Location>,
) -> Nullable<tree::Location> {
    location.map(location_from_schema).into()
}

pub fn nullable_range_to_schema(range: &Nullable<tree::Range>) -> Option<schema::Range> {
    range.as_ref().map(range_to_schema).into_option()
}

pub fn nullable_range_from_schema(range: Option<&schema::Range>) -> Nullable<tree::Range> {
    range.map(range_from_schema).into()
}

pub fn nullable_position_to_schema(
    position: &Nullable<tree::Position>,
) -> Option<schema::Position> {
    position.as_ref().map(position_to_schema).into_option()
}

pub fn nullable_position_from_schema(
    position: Option<&schema::Position>,
) -> Nullable<tree::Position> {
    position.map(position_from_schema).into()
}

pub fn nullable_user_defined_type_to_schema(
    udt: &Nullable<tree::UserDefinedType>,
) -> Option<schema::UserDefinedType> {
    udt.as_ref().map(user_defined_type_to_schema).into_option()
}

pub fn nullable_user_defined_type_from_schema(
    udt: Option<&schema::UserDefinedType>,
) -> Result<Nullable<tree::UserDefinedType>> {
    Nullable::from(udt).try_map(user_defined_type_from_schema)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CodecError;

    fn sample_location() -> tree::Location {
        tree::Location::new(
            tree::Position::new(3, 0),
            tree::Range::new(tree::Position::new(3, 7), tree::Position::new(3, 20)),
        )
    }

    #[test]
    fn test_location_roundtrip() {
        let location = Nullable::Value(sample_location());
        let encoded = nullable_location_to_schema(&location);

        let range = encoded.as_ref().unwrap().range;
        assert_eq!((range.start.line, range.start.column), (3, 7));
        assert_eq!((range.end.line, range.end.column), (3, 20));

        assert_eq!(nullable_location_from_schema(encoded.as_ref()), location);
    }

    #[test]
    fn test_null_location_becomes_none() {
        let encoded = nullable_location_to_schema(&Nullable::Null);
        assert!(encoded.is_none());
        assert!(nullable_location_from_schema(encoded.as_ref()).is_null());
    }

    #[test]
    fn test_null_serializes_as_json_null() {
        let encoded = nullable_range_to_schema(&Nullable::Null);
        assert_eq!(serde_json::to_string(&encoded).unwrap(), "null");
    }

    #[test]
    fn test_user_defined_type_requires_names() {
        let udt = schema::UserDefinedType {
            namespace: String::new(),
            name: "Complex".to_string(),
            range: None,
        };
        assert!(matches!(
            user_defined_type_from_schema(&udt),
            Err(CodecError::EmptyIdentifier {
                field: "UserDefinedType.namespace"
            })
        ));
        assert!(matches!(
            nullable_user_defined_type_from_schema(Some(&udt)),
            Err(CodecError::EmptyIdentifier { .. })
        ));
        assert!(matches!(
            nullable_user_defined_type_from_schema(None),
            Ok(Nullable::Null)
        ));
    }
}
