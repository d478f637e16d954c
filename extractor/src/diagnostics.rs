//! Label-resolution warnings.

use std::collections::HashSet;
use std::fmt;

use onto2dot_statements::ResourceId;
use serde::Serialize;

/// Whether an unlabelled resource is a class or a property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// A graph node.
    Class,
    /// An attribute row or an edge.
    Property,
}

impl Role {
    /// Returns the lowercase name of the role.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Class => "class",
            Role::Property => "property",
        }
    }
}

/// No label in the preferred language exists for a resource.
///
/// Non-fatal: classes and link endpoints are kept with an empty label,
/// attribute rows are dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabelWarning {
    /// The unlabelled resource.
    pub resource: ResourceId,
    /// What the resource is used as in the graph.
    pub role: Role,
    /// The language tag that had no match.
    pub language: String,
}

impl fmt::Display for LabelWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "missing @{} label for {}", self.language, self.resource)
    }
}

/// Collects warnings in discovery order.
///
/// Unlabelled nodes and edge ends warn once per resource; every dropped
/// attribute row warns on its own.
#[derive(Debug)]
pub(crate) struct WarningSink {
    language: String,
    seen: HashSet<ResourceId>,
    warnings: Vec<LabelWarning>,
}

impl WarningSink {
    pub(crate) fn new(language: &str) -> Self {
        Self {
            language: language.to_string(),
            seen: HashSet::new(),
            warnings: Vec::new(),
        }
    }

    pub(crate) fn missing(&mut self, resource: &ResourceId, role: Role) {
        if self.seen.insert(resource.clone()) {
            self.push(resource, role);
        }
    }

    pub(crate) fn dropped(&mut self, property: &ResourceId) {
        self.push(property, Role::Property);
    }

    fn push(&mut self, resource: &ResourceId, role: Role) {
        self.warnings.push(LabelWarning {
            resource: resource.clone(),
            role,
            language: self.language.clone(),
        });
    }

    pub(crate) fn into_warnings(self) -> Vec<LabelWarning> {
        self.warnings
    }
}
