//! Intermediate model produced by the extractor and consumed by renderers.
//!
//! Every record is owned and ordered. Class order is the order in which
//! classes were first seen in the statement sequence; attributes and links
//! follow the order in which properties were attached to each class.

use onto2dot_statements::ResourceId;
use serde::Serialize;

/// A class node: its display label and its literal-attribute rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassRecord {
    /// Class identifier.
    pub id: ResourceId,
    /// Preferred-language label, or `""` when none was found.
    pub label: String,
    /// Labels of the properties rendered as attribute rows, in attachment order.
    pub attributes: Vec<String>,
}

/// A property and the classes it connects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PropertyRecord {
    /// Property identifier.
    pub id: ResourceId,
    /// Preferred-language label, or `""` when none was found.
    pub label: String,
    /// Classes that declared this property in their domain.
    pub domain: Vec<ResourceId>,
    /// Range targets that are known classes.
    pub range: Vec<ResourceId>,
}

impl PropertyRecord {
    /// Returns true if this property is drawn as edges rather than attribute rows.
    #[must_use]
    pub fn is_relation(&self) -> bool {
        !self.range.is_empty()
    }
}

/// A directed, labelled edge between two classes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkRecord {
    /// Label of the domain class.
    pub from: String,
    /// Label of the range class.
    pub to: String,
    /// Label of the property.
    pub label: String,
}

/// The finalized classes, properties and links of one ontology.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OntologyModel {
    /// Class nodes in first-seen order.
    pub classes: Vec<ClassRecord>,
    /// Properties in first-seen order.
    pub properties: Vec<PropertyRecord>,
    /// Edges in discovery order.
    pub links: Vec<LinkRecord>,
}

impl OntologyModel {
    /// Finds a class by identifier.
    #[must_use]
    pub fn class(&self, id: &str) -> Option<&ClassRecord> {
        self.classes.iter().find(|c| c.id.as_str() == id)
    }

    /// Finds a property by identifier.
    #[must_use]
    pub fn property(&self, id: &str) -> Option<&PropertyRecord> {
        self.properties.iter().find(|p| p.id.as_str() == id)
    }

    /// Total number of attribute rows across all classes.
    #[must_use]
    pub fn attribute_count(&self) -> usize {
        self.classes.iter().map(|c| c.attributes.len()).sum()
    }
}
