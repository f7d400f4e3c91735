//! Names shared by the syntax tree and the schema.

pub mod qualified_name;

pub use qualified_name::{QualifiedName, validate_identifier};
