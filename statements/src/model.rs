//! Statement model types.
//!
//! A [`Statement`] is an immutable (subject, predicate, object) fact. Subjects
//! and predicates are always [`ResourceId`]s; objects are either a resource or
//! a [`Literal`]. Blank nodes are admitted as resources under the `_:<label>`
//! identifier form.

use std::fmt;

/// An opaque, globally unique resource identifier (an IRI or `_:` blank node).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(transparent))]
pub struct ResourceId(String);

impl ResourceId {
    /// Wraps an identifier string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if this resource is a blank node.
    #[cfg(test)]
    pub(crate) fn is_blank(&self) -> bool {
        self.0.starts_with("_:")
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ResourceId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// A literal value with its language tag.
///
/// The tag is empty for plain and datatyped literals.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Literal {
    /// Lexical form.
    pub value: String,
    /// Language tag, or `""` when the literal carries none.
    pub language: String,
}

impl Literal {
    /// Creates a literal with the given language tag (`""` for none).
    pub fn new(value: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            language: language.into(),
        }
    }

    /// Returns true if the literal's tag equals `language`.
    ///
    /// Tags compare case-insensitively, as BCP 47 requires.
    #[must_use]
    pub fn has_language(&self, language: &str) -> bool {
        self.language.eq_ignore_ascii_case(language)
    }
}

/// The object position of a statement.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Object {
    /// A reference to another resource.
    Resource(ResourceId),
    /// A literal value.
    Literal(Literal),
}

impl Object {
    /// Returns the resource if this object is one.
    #[must_use]
    pub fn as_resource(&self) -> Option<&ResourceId> {
        match self {
            Object::Resource(id) => Some(id),
            Object::Literal(_) => None,
        }
    }

    /// Returns the literal if this object is one.
    #[must_use]
    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Object::Literal(lit) => Some(lit),
            Object::Resource(_) => None,
        }
    }

    /// Returns true if this object is the resource with identifier `iri`.
    #[cfg(test)]
    pub(crate) fn is_resource(&self, iri: &str) -> bool {
        self.as_resource().is_some_and(|id| id.as_str() == iri)
    }
}

/// A single (subject, predicate, object) fact.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Statement {
    /// Subject resource.
    pub subject: ResourceId,
    /// Predicate resource.
    pub predicate: ResourceId,
    /// Object resource or literal.
    pub object: Object,
}

impl Statement {
    /// Creates a statement whose object is a resource.
    pub fn resource(
        subject: impl Into<String>,
        predicate: impl Into<String>,
        object: impl Into<String>,
    ) -> Self {
        Self {
            subject: ResourceId::new(subject),
            predicate: ResourceId::new(predicate),
            object: Object::Resource(ResourceId::new(object)),
        }
    }

    /// Creates a statement whose object is a literal.
    pub fn literal(
        subject: impl Into<String>,
        predicate: impl Into<String>,
        value: impl Into<String>,
        language: impl Into<String>,
    ) -> Self {
        Self {
            subject: ResourceId::new(subject),
            predicate: ResourceId::new(predicate),
            object: Object::Literal(Literal::new(value, language)),
        }
    }

    /// Returns true if the predicate is `iri`.
    #[must_use]
    pub fn has_predicate(&self, iri: &str) -> bool {
        self.predicate.as_str() == iri
    }
}
