//! Byte-level glue around the schema.
//!
//! The schema graph is handed to `serde_json` as the structured encoding
//! library. Discriminators travel as integer codes, so a code this build
//! does not know still parses and is reported by the codec instead.

use schemars::Schema;

use crate::codec::{self, EncodeOptions};
use crate::error::Result;
use crate::{schema, tree};

/// Serialize a schema program to bytes.
pub fn to_bytes(program: &schema::Program) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec(program)?)
}

/// Parse a schema program from bytes.
pub fn from_bytes(bytes: &[u8]) -> Result<schema::Program> {
    Ok(serde_json::from_slice(bytes)?)
}

/// Encode a tree program and serialize the result.
pub fn serialize_program(program: &tree::Program, options: &EncodeOptions) -> Result<Vec<u8>> {
    let encoded = codec::encode_program_with_options(program, options)?;
    to_bytes(&encoded)
}

/// Parse bytes and decode the schema program they hold.
pub fn deserialize_program(bytes: &[u8]) -> Result<tree::Program> {
    codec::decode_program(&from_bytes(bytes)?)
}

/// JSON Schema describing the serialized program.
pub fn json_schema() -> Schema {
    schemars::schema_for!(schema::Program)
}
