//! Conversion between the syntax tree and the schema representation.
//!
//! [`encode_program`] walks a tree program and builds a fresh schema
//! program; [`decode_program`] is its inverse. Both are pure functions of
//! their input: nothing is cached, shared or mutated, so independent calls
//! can run concurrently.
//!
//! Some tree fields have no schema counterpart yet. The decoder fills those
//! with explicit placeholders instead of guessing:
//!
//! - entry points: always decoded as an empty list
//! - specializations: always decoded as an empty list
//! - attribute arguments: [`tree::AttributeArgument::placeholder`]
//!
//! Under [`SchemaProfile::Minimal`] the encoder additionally leaves out
//! attributes, modifiers, signatures, argument tuples, underlying types and
//! type items, which then decode to their placeholders as well.

pub mod adapters;
pub mod decode;
pub mod encode;

use serde::{Deserialize, Serialize};

pub use decode::Decoder;
pub use encode::Encoder;

use crate::error::Result;
use crate::{schema, tree};

/// Which field set the encoder writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaProfile {
    /// Names, locations, documentation and comments only
    Minimal,
    /// Every field the schema can carry
    #[default]
    Full,
}

/// Options controlling the tree to schema direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EncodeOptions {
    pub profile: SchemaProfile,
}

/// Convert a tree program to a schema program using the full profile.
pub fn encode_program(program: &tree::Program) -> Result<schema::Program> {
    encode_program_with_options(program, &EncodeOptions::default())
}

/// Convert a tree program to a schema program with the given options.
pub fn encode_program_with_options(
    program: &tree::Program,
    options: &EncodeOptions,
) -> Result<schema::Program> {
    Encoder::new(options.profile).encode_program(program)
}

/// Convert a schema program back to a tree program.
///
/// The resulting program never has entry points.
pub fn decode_program(program: &schema::Program) -> Result<tree::Program> {
    Decoder.decode_program(program)
}

/// Convert a single resolved type to its schema form.
pub fn encode_resolved_type(resolved_type: &tree::ResolvedType) -> Result<schema::ResolvedType> {
    Encoder::default().encode_resolved_type(resolved_type)
}

/// Convert a single schema resolved type back to the tree form.
pub fn decode_resolved_type(resolved_type: &schema::ResolvedType) -> Result<tree::ResolvedType> {
    Decoder.decode_resolved_type(resolved_type)
}
