pub mod type_kind;

pub use type_kind::{TypeKindTranslator, decode_type_kind, encode_type_kind};
