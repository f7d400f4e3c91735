//! Error types for the syntax-tree/schema codec.
//!
//! Both translation directions are all-or-nothing: the first error raised
//! anywhere in the recursive walk aborts the call and no partial output is
//! returned.

use thiserror::Error;

/// Result type alias for codec operations
pub type Result<T> = std::result::Result<T, CodecError>;

/// Main error type for codec operations
#[derive(Error, Debug)]
pub enum CodecError {
    /// A discriminator that this version of the codec does not know.
    ///
    /// Signals that the tree and schema shapes have drifted apart; never retry.
    #[error("unsupported {kind} variant: {variant}")]
    UnsupportedVariant { kind: &'static str, variant: String },

    /// A known discriminator whose payload field is not populated.
    #[error("{kind} is tagged {variant} but carries no {variant} payload")]
    MissingPayload { kind: &'static str, variant: String },

    /// An identifier that must be non-empty was empty.
    #[error("empty identifier in {field}")]
    EmptyIdentifier { field: &'static str },

    #[error("wire encoding error: {0}")]
    Wire(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid codec configuration: {0}")]
    Config(String),
}

impl CodecError {
    /// Create an unsupported-variant error for the given tagged union.
    pub fn unsupported(kind: &'static str, variant: impl ToString) -> Self {
        CodecError::UnsupportedVariant {
            kind,
            variant: variant.to_string(),
        }
    }

    /// Create a missing-payload error for the given tagged union.
    pub fn missing_payload(kind: &'static str, variant: impl ToString) -> Self {
        CodecError::MissingPayload {
            kind,
            variant: variant.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CodecError::unsupported("TypeKind", "Unrecognized(42)");
        assert_eq!(err.to_string(), "unsupported TypeKind variant: Unrecognized(42)");

        let err = CodecError::missing_payload("TypeKind", "ArrayType");
        assert_eq!(
            err.to_string(),
            "TypeKind is tagged ArrayType but carries no ArrayType payload"
        );

        let err = CodecError::EmptyIdentifier {
            field: "QualifiedName.name",
        };
        assert_eq!(err.to_string(), "empty identifier in QualifiedName.name");
    }
}
