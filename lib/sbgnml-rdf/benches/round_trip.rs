#![allow(clippy::panic)]

use codspeed_criterion_compat::{criterion_group, criterion_main, Criterion};
use sbgnml_rdf::{Annotation, AnnotationConfig};
use std::fmt::Write;

fn annotation_round_trip(c: &mut Criterion) {
    let config = AnnotationConfig::default();
    let text = generate_annotation(100);
    c.bench_function("Annotation::from_xml_str", |b| {
        b.iter(|| Annotation::from_xml_str(&text, &config).unwrap());
    });

    let annotation = Annotation::from_xml_str(&text, &config).unwrap();
    c.bench_function("Annotation::to_xml_string", |b| {
        b.iter(|| annotation.to_xml_string(&config).unwrap());
    });
}

criterion_group!(round_trip, annotation_round_trip);
criterion_main!(round_trip);

fn generate_annotation(glyphs: usize) -> String {
    let mut text = String::from(
        r#"<annotation><rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#" xmlns:bqbiol="http://biomodels.net/biology-qualifiers/" xmlns:sio="http://semanticscience.org/resource/" xmlns:eisbm="http://www.eisbm.org/">"#,
    );
    for i in 0..glyphs {
        write!(
            text,
            r##"<rdf:Description rdf:about="#glyph{i}"><bqbiol:is><rdf:Bag><rdf:li rdf:resource="http://identifiers.org/CHEBI:{i}"/></rdf:Bag></bqbiol:is><eisbm:hasProperty><rdf:Bag><rdf:li sio:SIO_000116="index" rdf:value="{i}"/></rdf:Bag></eisbm:hasProperty></rdf:Description>"##
        )
        .unwrap();
    }
    text.push_str("</rdf:RDF></annotation>");
    text
}
