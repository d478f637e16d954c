//! RDF statements as typed Rust data, and the Turtle reader that produces them.
//!
//! The `onto2dot-statements` crate is the statement source of the workspace:
//! it turns a Turtle document into an ordered `Vec<Statement>` that the
//! extractor consumes. Every statement is owned; no parser types leak out of
//! this crate.
//!
//! # Entry Point
//!
//! ```
//! use onto2dot_statements::{parse_turtle, vocab};
//!
//! let statements = parse_turtle(
//!     r#"@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
//!        <urn:x:Person> a rdfs:Class ; rdfs:label "Person"@en ."#,
//!     "inline",
//! )
//! .unwrap();
//! assert_eq!(statements.len(), 2);
//! assert_eq!(statements[0].predicate.as_str(), vocab::RDF_TYPE);
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod error;
pub mod model;
pub mod turtle;
pub mod vocab;

pub use error::SourceError;
pub use model::{Literal, Object, ResourceId, Statement};
pub use turtle::{parse_turtle, read_turtle};
