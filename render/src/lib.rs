//! onto2dot renderers.
//!
//! Projects an [`OntologyModel`] onto text. [`render_dot`] produces the
//! Graphviz document: one plaintext node per class drawn as an HTML-like
//! table (header row = class label, one row per attribute) and one labelled
//! edge per link. [`render_json`] dumps the model itself.
//!
//! Both are pure functions of their inputs.
//!
//! ```
//! use onto2dot_extractor::{ClassRecord, OntologyModel};
//! use onto2dot_render::{render_dot, RenderOptions};
//!
//! let model = OntologyModel {
//!     classes: vec![ClassRecord {
//!         id: "urn:C1".into(),
//!         label: "Person".into(),
//!         attributes: vec!["age".into()],
//!     }],
//!     ..OntologyModel::default()
//! };
//! let dot = render_dot(&model, &RenderOptions::default());
//! assert!(dot.starts_with("digraph Ontology {"));
//! assert!(dot.contains("<B>age</B>"));
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod dot;
pub mod error;
pub mod escape;
pub mod json;

pub use dot::{render_dot, write_dot};
pub use error::RenderError;
pub use json::render_json;

pub use onto2dot_extractor::OntologyModel;

/// Rendering settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Escape markup-significant characters in labels.
    ///
    /// Off by default, in which case labels are interpolated verbatim and a
    /// label containing `<`, `&` or `"` can produce an invalid document.
    pub escape_labels: bool,
}
