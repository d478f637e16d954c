//! RDF, RDFS and OWL vocabulary IRIs recognised by the extractor.

/// `rdf:type`.
pub const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
/// `rdf:Property`.
pub const RDF_PROPERTY: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#Property";
/// `rdfs:Class`.
pub const RDFS_CLASS: &str = "http://www.w3.org/2000/01/rdf-schema#Class";
/// `rdfs:Property`. Not part of RDFS proper, but emitted by some tools.
pub const RDFS_PROPERTY: &str = "http://www.w3.org/2000/01/rdf-schema#Property";
/// `rdfs:label`.
pub const RDFS_LABEL: &str = "http://www.w3.org/2000/01/rdf-schema#label";
/// `rdfs:domain`.
pub const RDFS_DOMAIN: &str = "http://www.w3.org/2000/01/rdf-schema#domain";
/// `rdfs:range`.
pub const RDFS_RANGE: &str = "http://www.w3.org/2000/01/rdf-schema#range";
/// `owl:Class`.
pub const OWL_CLASS: &str = "http://www.w3.org/2002/07/owl#Class";
/// `owl:ObjectProperty`.
pub const OWL_OBJECT_PROPERTY: &str = "http://www.w3.org/2002/07/owl#ObjectProperty";
/// `owl:DatatypeProperty`.
pub const OWL_DATATYPE_PROPERTY: &str = "http://www.w3.org/2002/07/owl#DatatypeProperty";

const CLASS_TYPES: &[&str] = &[RDFS_CLASS, OWL_CLASS];

const PROPERTY_TYPES: &[&str] = &[
    RDFS_PROPERTY,
    RDF_PROPERTY,
    OWL_OBJECT_PROPERTY,
    OWL_DATATYPE_PROPERTY,
];

/// Returns true if `iri` names a class metaclass (`rdfs:Class`, `owl:Class`).
#[must_use]
pub fn is_class_type(iri: &str) -> bool {
    CLASS_TYPES.contains(&iri)
}

/// Returns true if `iri` names a property metaclass.
#[must_use]
pub fn is_property_type(iri: &str) -> bool {
    PROPERTY_TYPES.contains(&iri)
}
