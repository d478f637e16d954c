//! Ontologies with resources lacking a Norwegian label.

/// `ex:Car` has only an English label.
pub const UNLABELLED_CLASS: &str = r#"
@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
@prefix ex:   <http://example.org/onto#> .

ex:Person a rdfs:Class ;
    rdfs:label "Person"@no .

ex:Car a rdfs:Class ;
    rdfs:label "Car"@en .

ex:owns a rdfs:Property ;
    rdfs:label "eier"@no ;
    rdfs:domain ex:Person ;
    rdfs:range ex:Car .
"#;

/// `ex:age` has an untagged label only.
pub const UNLABELLED_PROPERTY: &str = r#"
@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
@prefix ex:   <http://example.org/onto#> .

ex:Person a rdfs:Class ;
    rdfs:label "Person"@no .

ex:age a rdfs:Property ;
    rdfs:label "age" ;
    rdfs:domain ex:Person .

ex:name a rdfs:Property ;
    rdfs:label "navn"@no ;
    rdfs:domain ex:Person .
"#;
