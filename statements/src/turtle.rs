//! Turtle 1.1 reader.
//!
//! Parses with `sophia_turtle` and converts every triple into an owned
//! [`Statement`], preserving document order. RDF-star quoted triples and
//! variables have no counterpart in the statement model and are skipped.

use std::fs;
use std::path::Path;

use sophia_api::source::TripleSource;
use sophia_api::term::Term;
use sophia_api::triple::Triple;
use sophia_turtle::parser::turtle;

use crate::error::SourceError;
use crate::model::{Literal, Object, ResourceId, Statement};

/// Reads and parses the Turtle document at `path`.
///
/// # Errors
///
/// Returns [`SourceError::Read`] if the file cannot be read and
/// [`SourceError::Syntax`] if it is not valid Turtle.
pub fn read_turtle(path: &Path) -> Result<Vec<Statement>, SourceError> {
    let content = fs::read_to_string(path).map_err(|source| SourceError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_turtle(&content, &path.display().to_string())
}

/// Parses a Turtle document held in memory.
///
/// `origin` names the document in error messages.
///
/// # Errors
///
/// Returns [`SourceError::Syntax`] if `text` is not valid Turtle. No
/// statements are returned in that case, even those parsed before the error.
pub fn parse_turtle(text: &str, origin: &str) -> Result<Vec<Statement>, SourceError> {
    let mut statements = Vec::new();
    turtle::parse_str(text)
        .for_each_triple(|t| {
            if let Some(statement) = to_statement(&t.s(), &t.p(), &t.o()) {
                statements.push(statement);
            }
        })
        .map_err(|e| SourceError::Syntax {
            origin: origin.to_string(),
            message: e.to_string(),
        })?;
    Ok(statements)
}

fn to_statement<S: Term, P: Term, O: Term>(s: &S, p: &P, o: &O) -> Option<Statement> {
    let subject = resource_id(s)?;
    let predicate = resource_id(p)?;
    let object = match resource_id(o) {
        Some(id) => Object::Resource(id),
        None => Object::Literal(literal(o)?),
    };
    Some(Statement {
        subject,
        predicate,
        object,
    })
}

fn resource_id<T: Term>(term: &T) -> Option<ResourceId> {
    if let Some(iri) = term.iri() {
        return Some(ResourceId::new(iri.as_str()));
    }
    term.bnode_id()
        .map(|id| ResourceId::new(format!("_:{}", id.as_str())))
}

fn literal<T: Term>(term: &T) -> Option<Literal> {
    let value = term.lexical_form()?;
    let language = term
        .language_tag()
        .map(|tag| tag.as_str().to_string())
        .unwrap_or_default();
    Some(Literal::new(value.to_string(), language))
}
