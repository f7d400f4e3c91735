//! Program roots: namespaces and their elements.

use indexmap::IndexMap;

use super::declarations::{Callable, CustomType};
use crate::naming::QualifiedName;

/// Namespace documentation, keyed by source file.
///
/// Each file contributes an ordered sequence of documentation groups; the
/// map keeps files in first-contribution order.
pub type DocumentationIndex = IndexMap<String, Vec<Vec<String>>>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NamespaceElement {
    Callable(Callable),
    CustomType(CustomType),
}

impl NamespaceElement {
    pub fn full_name(&self) -> &QualifiedName {
        match self {
            NamespaceElement::Callable(c) => &c.full_name,
            NamespaceElement::CustomType(t) => &t.full_name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Namespace {
    pub name: String,
    pub elements: Vec<NamespaceElement>,
    pub documentation: DocumentationIndex,
}

/// A compiled program.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Program {
    pub namespaces: Vec<Namespace>,
    pub entry_points: Vec<QualifiedName>,
}
