//! First pass: index type declarations, labels, domains and ranges by resource.
//!
//! The index is built without regard to statement order, so a label or range
//! statement that precedes its subject's type declaration is still attributed
//! to the right resource.

use std::collections::HashMap;

use indexmap::{IndexMap, IndexSet};
use onto2dot_statements::{vocab, Object, ResourceId, Statement};

/// Per-resource lookups over one statement sequence.
#[derive(Debug, Default)]
pub(crate) struct StatementIndex<'a> {
    /// Known classes in first-seen order, each with the properties whose
    /// domain names it, in attachment order.
    classes: IndexMap<&'a ResourceId, IndexSet<&'a ResourceId>>,
    /// Declared or domain-attached properties in first-seen order.
    properties: IndexSet<&'a ResourceId>,
    /// First preferred-language label per resource.
    labels: HashMap<&'a ResourceId, &'a str>,
    /// Range targets per property, before restriction to known classes.
    ranges: HashMap<&'a ResourceId, IndexSet<&'a ResourceId>>,
}

impl<'a> StatementIndex<'a> {
    pub(crate) fn build(statements: &'a [Statement], language: &str) -> Self {
        let mut index = Self::default();
        for statement in statements {
            index.add(statement, language);
        }
        index
    }

    fn add(&mut self, statement: &'a Statement, language: &str) {
        let subject = &statement.subject;
        match (statement.predicate.as_str(), &statement.object) {
            (vocab::RDF_TYPE, Object::Resource(kind)) => {
                if vocab::is_class_type(kind.as_str()) {
                    self.classes.entry(subject).or_default();
                } else if vocab::is_property_type(kind.as_str()) {
                    self.properties.insert(subject);
                }
            }
            (vocab::RDFS_LABEL, Object::Literal(lit)) if lit.has_language(language) => {
                self.labels.entry(subject).or_insert(lit.value.as_str());
            }
            (vocab::RDFS_DOMAIN, Object::Resource(class)) => {
                self.classes.entry(class).or_default().insert(subject);
                self.properties.insert(subject);
            }
            (vocab::RDFS_RANGE, Object::Resource(target)) => {
                self.ranges.entry(subject).or_default().insert(target);
            }
            _ => {}
        }
    }

    /// Known classes with their attached properties.
    pub(crate) fn classes(
        &self,
    ) -> impl Iterator<Item = (&'a ResourceId, &'_ IndexSet<&'a ResourceId>)> + '_ {
        self.classes.iter().map(|(class, props)| (*class, props))
    }

    pub(crate) fn properties(&self) -> impl Iterator<Item = &'a ResourceId> + '_ {
        self.properties.iter().copied()
    }

    pub(crate) fn is_class(&self, id: &ResourceId) -> bool {
        self.classes.contains_key(id)
    }

    /// The resource's preferred-language label; empty labels count as missing.
    pub(crate) fn label(&self, id: &ResourceId) -> Option<&'a str> {
        self.labels.get(id).copied().filter(|label| !label.is_empty())
    }

    /// Range targets of `property` that are known classes.
    pub(crate) fn range_classes(&self, property: &ResourceId) -> Vec<&'a ResourceId> {
        self.ranges
            .get(property)
            .map(|targets| {
                targets
                    .iter()
                    .copied()
                    .filter(|target| self.is_class(target))
                    .collect()
            })
            .unwrap_or_default()
    }
}
