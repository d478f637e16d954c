//! The same ontology written grouped by subject and scattered.

/// Every statement about a resource follows its type declaration.
pub const GROUPED: &str = r#"
@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
@prefix owl:  <http://www.w3.org/2002/07/owl#> .
@prefix ex:   <http://example.org/onto#> .

ex:Author a owl:Class ;
    rdfs:label "Forfatter"@no .

ex:Book a rdfs:Class ;
    rdfs:label "Bok"@no .

ex:wrote a owl:ObjectProperty ;
    rdfs:label "skrev"@no ;
    rdfs:domain ex:Author ;
    rdfs:range ex:Book .

ex:title a owl:DatatypeProperty ;
    rdfs:label "tittel"@no ;
    rdfs:domain ex:Book .
"#;

/// Labels, domains and ranges precede the type declarations they belong to.
pub const UNGROUPED: &str = r#"
@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
@prefix owl:  <http://www.w3.org/2002/07/owl#> .
@prefix ex:   <http://example.org/onto#> .

ex:title rdfs:label "tittel"@no .
ex:wrote rdfs:range ex:Book .
ex:Book rdfs:label "Bok"@no .
ex:wrote rdfs:label "skrev"@no .
ex:Author rdfs:label "Forfatter"@no .
ex:wrote rdfs:domain ex:Author .
ex:title rdfs:domain ex:Book .
ex:wrote a owl:ObjectProperty .
ex:Book a rdfs:Class .
ex:title a owl:DatatypeProperty .
ex:Author a owl:Class .
"#;
