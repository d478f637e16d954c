//! onto2dot ontology extractor.
//!
//! Turns a statement sequence into the [`OntologyModel`]: one
//! [`ClassRecord`] per RDFS class, with the properties whose range is not a
//! known class folded in as attribute rows, and one [`LinkRecord`] per
//! (domain class, property, range class) for the rest.
//!
//! Extraction runs in two passes. The first indexes type declarations,
//! preferred-language labels, domains and ranges by resource; the second walks
//! the known classes and resolves everything by lookup. The result therefore
//! does not depend on how the statements about one resource are grouped in
//! the source.
//!
//! # Entry Point
//!
//! ```
//! use onto2dot_extractor::{extract, ExtractorConfig};
//! use onto2dot_statements::{vocab, Statement};
//!
//! let statements = vec![
//!     Statement::resource("urn:C1", vocab::RDF_TYPE, vocab::RDFS_CLASS),
//!     Statement::literal("urn:C1", vocab::RDFS_LABEL, "Person", "no"),
//!     Statement::resource("urn:P2", vocab::RDFS_DOMAIN, "urn:C1"),
//!     Statement::literal("urn:P2", vocab::RDFS_LABEL, "age", "no"),
//! ];
//! let extraction = extract(&statements, &ExtractorConfig::default());
//! assert_eq!(extraction.model.classes[0].label, "Person");
//! assert_eq!(extraction.model.classes[0].attributes, vec!["age".to_string()]);
//! assert!(extraction.warnings.is_empty());
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod diagnostics;
mod index;
pub mod model;

use onto2dot_statements::{ResourceId, Statement};

pub use diagnostics::{LabelWarning, Role};
pub use model::{ClassRecord, LinkRecord, OntologyModel, PropertyRecord};

use diagnostics::WarningSink;
use index::StatementIndex;

/// Language tag used when none is configured.
pub const DEFAULT_LANGUAGE: &str = "no";

/// Extractor settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractorConfig {
    /// Language tag whose `rdfs:label` literals become display labels.
    pub preferred_language: String,
}

impl ExtractorConfig {
    /// Creates a configuration preferring `language`.
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            preferred_language: language.into(),
        }
    }
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self::new(DEFAULT_LANGUAGE)
    }
}

/// The model extracted from one statement sequence, with its label warnings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    /// Classes, properties and links.
    pub model: OntologyModel,
    /// Label warnings in discovery order: one per unlabelled class or relation,
    /// one per dropped attribute row.
    pub warnings: Vec<LabelWarning>,
}

/// Extracts the class/link model from `statements`.
///
/// Deterministic: the same statements and configuration always yield the
/// same [`Extraction`].
#[must_use]
pub fn extract(statements: &[Statement], config: &ExtractorConfig) -> Extraction {
    let index = StatementIndex::build(statements, &config.preferred_language);
    let mut sink = WarningSink::new(&config.preferred_language);
    let mut model = OntologyModel::default();

    for (class, properties) in index.classes() {
        let class_label = resolve(&index, &mut sink, class, Role::Class);
        let mut attributes = Vec::new();

        for property in properties {
            let range = index.range_classes(property);
            if range.is_empty() {
                match index.label(property) {
                    Some(label) => attributes.push(label.to_string()),
                    None => sink.dropped(property),
                }
                continue;
            }

            let relation = resolve(&index, &mut sink, property, Role::Property);
            for target in range {
                model.links.push(LinkRecord {
                    from: class_label.clone(),
                    to: resolve(&index, &mut sink, target, Role::Class),
                    label: relation.clone(),
                });
            }
        }

        model.classes.push(ClassRecord {
            id: class.clone(),
            label: class_label,
            attributes,
        });
    }

    model.properties = index
        .properties()
        .map(|property| PropertyRecord {
            id: property.clone(),
            label: index.label(property).unwrap_or_default().to_string(),
            domain: index
                .classes()
                .filter(|(_, attached)| attached.contains(property))
                .map(|(class, _)| class.clone())
                .collect(),
            range: index.range_classes(property).into_iter().cloned().collect(),
        })
        .collect();

    tracing::debug!(
        classes = model.classes.len(),
        properties = model.properties.len(),
        links = model.links.len(),
        attributes = model.attribute_count(),
        "extracted ontology model"
    );

    Extraction {
        model,
        warnings: sink.into_warnings(),
    }
}

/// Returns the label of a class or link endpoint, warning once if it is missing.
fn resolve(
    index: &StatementIndex<'_>,
    sink: &mut WarningSink,
    id: &ResourceId,
    role: Role,
) -> String {
    match index.label(id) {
        Some(label) => label.to_string(),
        None => {
            sink.missing(id, role);
            String::new()
        }
    }
}
