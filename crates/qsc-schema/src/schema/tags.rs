//! Discriminators of the schema's tagged unions.
//!
//! Every discriminator travels as a `u16` code. Codes unknown to this build
//! decode to `Unrecognized(code)` instead of failing inside the encoding
//! library, so the codec itself can report which tag it could not handle.

use std::borrow::Cow;
use std::fmt;

use schemars::{JsonSchema, Schema, SchemaGenerator};
use serde::{Deserialize, Serialize};

macro_rules! schema_tag {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($(#[$vmeta:meta])* $variant:ident = $code:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(from = "u16", into = "u16")]
        pub enum $name {
            $($(#[$vmeta])* $variant,)+
            /// A code this version of the schema does not know.
            Unrecognized(u16),
        }

        impl From<u16> for $name {
            fn from(code: u16) -> Self {
                match code {
                    $($code => $name::$variant,)+
                    other => $name::Unrecognized(other),
                }
            }
        }

        impl From<$name> for u16 {
            fn from(tag: $name) -> u16 {
                match tag {
                    $($name::$variant => $code,)+
                    $name::Unrecognized(code) => code,
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match self {
                    $($name::$variant => f.write_str(stringify!($variant)),)+
                    $name::Unrecognized(code) => write!(f, "Unrecognized({})", code),
                }
            }
        }

        impl JsonSchema for $name {
            fn schema_name() -> Cow<'static, str> {
                Cow::Borrowed(stringify!($name))
            }

            fn json_schema(generator: &mut SchemaGenerator) -> Schema {
                u16::json_schema(generator)
            }
        }
    };
}

schema_tag! {
    /// Discriminator of a type-kind composition.
    pub enum TypeKind {
        UnitType = 0,
        Int = 1,
        BigInt = 2,
        Double = 3,
        Bool = 4,
        String = 5,
        Qubit = 6,
        Result = 7,
        Pauli = 8,
        Range = 9,
        ArrayType = 10,
        TupleType = 11,
        UserDefinedType = 12,
        TypeParameter = 13,
        Operation = 14,
        Function = 15,
        InvalidType = 16,
        MissingType = 17,
        PlaceholderType = 18,
    }
}

schema_tag! {
    pub enum CharacteristicsKind {
        EmptySet = 0,
        SimpleSet = 1,
        Union = 2,
        Intersection = 3,
        InvalidSetExpr = 4,
    }
}

schema_tag! {
    pub enum OpProperty {
        Adjointable = 0,
        Controllable = 1,
    }
}

schema_tag! {
    pub enum NamespaceElementKind {
        Callable = 0,
        CustomType = 1,
    }
}

schema_tag! {
    pub enum CallableKind {
        Operation = 0,
        Function = 1,
        TypeConstructor = 2,
    }
}

schema_tag! {
    pub enum LocalSymbolKind {
        ValidName = 0,
        InvalidName = 1,
    }
}

schema_tag! {
    pub enum AccessModifier {
        DefaultAccess = 0,
        Internal = 1,
    }
}

schema_tag! {
    pub enum QsTupleKind {
        Item = 0,
        Tuple = 1,
    }
}

schema_tag! {
    pub enum TypeItemKind {
        Named = 0,
        Anonymous = 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(TypeKind::UnitType, 0)]
    #[case(TypeKind::Operation, 14)]
    #[case(TypeKind::PlaceholderType, 18)]
    #[case(TypeKind::Unrecognized(99), 99)]
    fn test_type_kind_codes(#[case] tag: TypeKind, #[case] code: u16) {
        assert_eq!(u16::from(tag), code);
        assert_eq!(TypeKind::from(code), tag);
    }

    #[test]
    fn test_tags_serialize_as_codes() {
        assert_eq!(serde_json::to_string(&CallableKind::Function).unwrap(), "1");
        let tag: NamespaceElementKind = serde_json::from_str("1").unwrap();
        assert_eq!(tag, NamespaceElementKind::CustomType);
    }

    #[test]
    fn test_unknown_code_is_preserved() {
        let tag: LocalSymbolKind = serde_json::from_str("7").unwrap();
        assert_eq!(tag, LocalSymbolKind::Unrecognized(7));
        assert_eq!(tag.to_string(), "Unrecognized(7)");
        assert_eq!(serde_json::to_string(&tag).unwrap(), "7");
    }
}
