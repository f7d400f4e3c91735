//! Schema records for the program root.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::declarations::{Callable, CustomType};
use super::tags::NamespaceElementKind;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct QualifiedName {
    pub namespace: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct NamespaceElement {
    pub kind: NamespaceElementKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub callable: Option<Callable>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_type: Option<CustomType>,
}

/// One documentation group contributed by a source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DocumentationItem {
    pub source_file_name: String,
    pub documentation_instances: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Namespace {
    pub name: String,
    pub elements: Vec<NamespaceElement>,
    /// Flattened documentation index, in contribution order
    pub documentation: Vec<DocumentationItem>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Program {
    pub namespaces: Vec<Namespace>,
    /// Written on encode; not read back on decode
    #[serde(default)]
    pub entry_points: Vec<QualifiedName>,
}
