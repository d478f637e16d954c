//! Person owns Car; Person has an age and a name.
//!
//! Labels exist in Norwegian and English. `hasColour` ranges over a datatype,
//! so it stays an attribute of Car.

/// Two classes, one relation, three attribute properties.
pub const PERSON_CAR: &str = r#"
@prefix rdf:  <http://www.w3.org/1999/02/22-rdf-syntax-ns#> .
@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
@prefix xsd:  <http://www.w3.org/2001/XMLSchema#> .
@prefix ex:   <http://example.org/onto#> .

ex:Person a rdfs:Class ;
    rdfs:label "Person"@no, "Person"@en .

ex:Car a rdfs:Class ;
    rdfs:label "Bil"@no, "Car"@en .

ex:owns a rdfs:Property ;
    rdfs:label "eier"@no, "owns"@en ;
    rdfs:domain ex:Person ;
    rdfs:range ex:Car .

ex:age a rdfs:Property ;
    rdfs:label "alder"@no, "age"@en ;
    rdfs:domain ex:Person .

ex:name a rdf:Property ;
    rdfs:label "navn"@no, "name"@en ;
    rdfs:domain ex:Person ;
    rdfs:range xsd:string .

ex:hasColour a rdfs:Property ;
    rdfs:label "farge"@no, "colour"@en ;
    rdfs:domain ex:Car ;
    rdfs:range xsd:string .
"#;
