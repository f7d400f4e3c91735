use std::fmt;

use crate::error::{CodecError, Result};

/// A fully qualified callable or type name: namespace plus local name.
///
/// Both components are non-empty. Trees built upstream are trusted to honor
/// this; the decoder checks it through [`QualifiedName::try_new`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QualifiedName {
    pub namespace: String,
    pub name: String,
}

impl QualifiedName {
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
        }
    }

    /// Create a qualified name, rejecting empty components.
    pub fn try_new(namespace: impl Into<String>, name: impl Into<String>) -> Result<Self> {
        let namespace = validate_identifier(namespace.into(), "QualifiedName.namespace")?;
        let name = validate_identifier(name.into(), "QualifiedName.name")?;
        Ok(Self { namespace, name })
    }

    /// Parse `Some.Namespace.Name`, splitting at the last dot.
    pub fn parse(s: &str) -> Option<Self> {
        let (namespace, name) = s.rsplit_once('.')?;
        if namespace.is_empty() || name.is_empty() {
            return None;
        }
        Some(Self::new(namespace, name))
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.namespace, self.name)
    }
}

/// Reject empty identifiers. `field` names the offending location.
pub fn validate_identifier(value: String, field: &'static str) -> Result<String> {
    if value.is_empty() {
        Err(CodecError::EmptyIdentifier { field })
    } else {
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qualified_name_parsing() {
        let qn = QualifiedName::parse("Microsoft.Quantum.Intrinsic.H").unwrap();
        assert_eq!(qn.namespace, "Microsoft.Quantum.Intrinsic");
        assert_eq!(qn.name, "H");
        assert_eq!(qn.to_string(), "Microsoft.Quantum.Intrinsic.H");

        assert!(QualifiedName::parse("NoNamespace").is_none());
        assert!(QualifiedName::parse("Trailing.").is_none());
    }

    #[test]
    fn test_try_new_rejects_empty_components() {
        assert!(QualifiedName::try_new("Ns", "Op").is_ok());
        assert!(matches!(
            QualifiedName::try_new("", "Op"),
            Err(CodecError::EmptyIdentifier {
                field: "QualifiedName.namespace"
            })
        ));
        assert!(matches!(
            QualifiedName::try_new("Ns", ""),
            Err(CodecError::EmptyIdentifier {
                field: "QualifiedName.name"
            })
        ));
    }
}
