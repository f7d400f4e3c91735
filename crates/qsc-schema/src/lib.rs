//! Bidirectional codec between the compiler's syntax tree and its portable
//! schema representation.
//!
//! ```ignore
//! let schema = qsc_schema::encode_program(&program)?;
//! let bytes = qsc_schema::wire::to_bytes(&schema)?;
//! let back = qsc_schema::decode_program(&qsc_schema::wire::from_bytes(&bytes)?)?;
//! ```

pub mod codec;
pub mod config;
pub mod error;
pub mod naming;
pub mod schema;
pub mod traversal;
pub mod tree;
pub mod wire;

pub use codec::{
    Decoder, EncodeOptions, Encoder, SchemaProfile, decode_program, decode_resolved_type,
    encode_program, encode_program_with_options, encode_resolved_type,
};
pub use config::CodecConfig;
pub use error::{CodecError, Result};
pub use naming::QualifiedName;
