use sbgnml_rdf::error::{AnnotationError, StructureError};
use sbgnml_rdf::model::vocab::bqbiol;
use sbgnml_rdf::model::{NamedNode, NamespaceRegistry, Triple};
use sbgnml_rdf::storage::TripleStore;
use sbgnml_rdf::xml::Element;
use sbgnml_rdf::{Annotation, AnnotationConfig};

const ANNOTATION: &str = r##"<annotation>
  <rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#" xmlns:bqmodel="http://biomodels.net/model-qualifiers/" xmlns:bqbiol="http://biomodels.net/biology-qualifiers/" xmlns:sio="http://semanticscience.org/resource/" xmlns:eisbm="http://www.eisbm.org/">
    <rdf:Description rdf:about="#_000001">
      <bqmodel:is>
        <rdf:Bag>
          <rdf:li rdf:resource="http://identifiers.org/biomodels.db/BIOMD0000000004"/>
        </rdf:Bag>
      </bqmodel:is>
      <eisbm:hasProperty>
        <rdf:Bag>
          <rdf:li sio:SIO_000116="data" rdf:value="42"/>
        </rdf:Bag>
      </eisbm:hasProperty>
    </rdf:Description>
  </rdf:RDF>
</annotation>"##;

fn graph(registry: &NamespaceRegistry, fragment: &str, target: &str) -> TripleStore {
    let mut store = TripleStore::new();
    store.add_triple(Triple::new(
        registry.document_iri(fragment).unwrap(),
        bqbiol::IS,
        NamedNode::new(target).unwrap(),
    ));
    store
}

#[test]
fn test_annotation_round_trip() {
    let config = AnnotationConfig::default();
    let annotation = Annotation::from_xml_str(ANNOTATION, &config).unwrap();
    assert_eq!(annotation.len(), 1);
    assert_eq!(annotation.graphs()[0].len(), 8);
    assert_eq!(annotation.to_xml_string(&config).unwrap(), ANNOTATION);
}

#[test]
fn test_annotation_round_trip_is_fixed_point() {
    let config = AnnotationConfig::default();
    let once = Annotation::from_xml_str(ANNOTATION, &config)
        .unwrap()
        .to_xml_string(&config)
        .unwrap();
    let twice = Annotation::from_xml_str(&once, &config)
        .unwrap()
        .to_xml_string(&config)
        .unwrap();
    assert_eq!(once, twice);
}

#[test]
fn test_wrong_wrapper_is_structure_error() {
    let config = AnnotationConfig::default();
    let element = Element::parse("<notes><rdf:RDF/></notes>").unwrap();
    assert_eq!(
        Annotation::from_xml(&element, &config),
        Err(StructureError {
            expected: "annotation".to_owned(),
            found: "notes".to_owned(),
        })
    );
    assert!(matches!(
        Annotation::from_xml_str("<notes/>", &config),
        Err(AnnotationError::Structure(_))
    ));
    assert!(matches!(
        Annotation::from_xml_str("<annotation>", &config),
        Err(AnnotationError::Xml(_))
    ));
}

#[test]
fn test_graphs_keep_document_order() {
    let config = AnnotationConfig::default();
    let first = graph(config.registry(), "glyph1", "http://identifiers.org/CHEBI:15422");
    let second = graph(config.registry(), "glyph2", "http://identifiers.org/CHEBI:16761");
    let annotation = [first.clone(), second.clone()]
        .into_iter()
        .collect::<Annotation>();

    let element = annotation.to_xml(&config).unwrap();
    assert_eq!(element.name(), "annotation");
    let blocks = element.child_elements().collect::<Vec<_>>();
    assert_eq!(blocks.len(), 2);
    assert!(blocks.iter().all(|block| block.name() == "rdf:RDF"));

    let read = Annotation::from_xml(&element, &config).unwrap();
    assert_eq!(read.graphs(), [first, second]);
}

#[test]
fn test_non_rdf_children_are_skipped() {
    let config = AnnotationConfig::default();
    let text = r##"<annotation>
  <notes>Curated by hand</notes>
  <rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#" xmlns:bqbiol="http://biomodels.net/biology-qualifiers/">
    <rdf:Description rdf:about="#glyph1">
      <bqbiol:is rdf:resource="http://identifiers.org/CHEBI:15422"/>
    </rdf:Description>
  </rdf:RDF>
</annotation>"##;

    let annotation = Annotation::from_xml_str(text, &config).unwrap();
    assert_eq!(annotation.len(), 1);
    assert_eq!(annotation.graphs()[0].len(), 1);
}

#[test]
fn test_malformed_block_becomes_empty_graph() {
    let config = AnnotationConfig::default();
    let text = r##"<annotation>
  <rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#">
    <rdf:Description rdf:about="#glyph1">
      <dc:title>Glucose</dc:title>
    </rdf:Description>
  </rdf:RDF>
</annotation>"##;

    let annotation = Annotation::from_xml_str(text, &config).unwrap();
    assert_eq!(annotation.len(), 1);
    assert!(annotation.graphs()[0].is_empty());
}

#[test]
fn test_blocks_see_wrapper_namespaces() {
    let config = AnnotationConfig::default();
    let text = r##"<annotation xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#" xmlns:dc="http://purl.org/dc/terms/">
  <rdf:RDF>
    <rdf:Description rdf:about="#glyph1">
      <dc:title>Glucose</dc:title>
    </rdf:Description>
  </rdf:RDF>
</annotation>"##;

    let annotation = Annotation::from_xml_str(text, &config).unwrap();
    assert_eq!(annotation.len(), 1);
    let graph = &annotation.graphs()[0];
    assert_eq!(graph.len(), 1);
    let quad = graph.iter().next().unwrap();
    assert_eq!(quad.predicate.as_str(), "http://purl.org/dc/terms/title");
    assert_eq!(quad.subject.to_string(), "<http://sbgn.org/document#glyph1>");
}

#[test]
fn test_document_subject_round_trip() {
    let config = AnnotationConfig::default();
    let text = r##"<annotation>
  <rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#" xmlns:bqmodel="http://biomodels.net/model-qualifiers/" xmlns:bqbiol="http://biomodels.net/biology-qualifiers/" xmlns:sio="http://semanticscience.org/resource/" xmlns:eisbm="http://www.eisbm.org/">
    <rdf:Description rdf:about="">
      <bqmodel:is>
        <rdf:Bag>
          <rdf:li rdf:resource="http://identifiers.org/biomodels.db/BIOMD0000000004"/>
        </rdf:Bag>
      </bqmodel:is>
    </rdf:Description>
  </rdf:RDF>
</annotation>"##;

    let annotation = Annotation::from_xml_str(text, &config).unwrap();
    let quad = annotation.graphs()[0].iter().next().unwrap();
    assert_eq!(quad.subject.to_string(), "<http://sbgn.org/document>");
    assert_eq!(annotation.to_xml_string(&config).unwrap(), text);
}

#[test]
fn test_empty_graph_is_written_as_empty_block() {
    let registry = NamespaceRegistry::builder()
        .with_prefix(bqbiol::PREFIX, bqbiol::NAMESPACE)
        .build()
        .unwrap();
    let config = AnnotationConfig::default().with_namespaces(registry);
    let mut annotation = Annotation::new();
    annotation.add_graph(TripleStore::new());

    assert_eq!(
        annotation.to_xml_string(&config).unwrap(),
        r##"<annotation>
  <rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#" xmlns:bqbiol="http://biomodels.net/biology-qualifiers/"/>
</annotation>"##
    );
}

#[test]
fn test_custom_tags() {
    let config = AnnotationConfig::default().with_wrapper_tag("sbgn:annotation");
    let text = r##"<sbgn:annotation>
  <rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#" xmlns:bqbiol="http://biomodels.net/biology-qualifiers/">
    <rdf:Description rdf:about="#glyph1">
      <bqbiol:is rdf:resource="http://identifiers.org/CHEBI:15422"/>
    </rdf:Description>
  </rdf:RDF>
</sbgn:annotation>"##;

    let annotation = Annotation::from_xml_str(text, &config).unwrap();
    assert_eq!(annotation.len(), 1);
    assert!(Annotation::from_xml_str(text, &AnnotationConfig::default()).is_err());

    let element = annotation
        .to_xml(&config.with_rdf_block_tag("RDF"))
        .unwrap();
    assert_eq!(element.name(), "sbgn:annotation");
    let block = element.find_child("RDF").unwrap();
    assert!(block.find_child("rdf:Description").is_some());
}

#[test]
fn test_empty_annotation() {
    let config = AnnotationConfig::default();
    let annotation = Annotation::from_xml_str("<annotation/>", &config).unwrap();
    assert!(annotation.is_empty());
    assert_eq!(annotation.to_xml_string(&config).unwrap(), "<annotation/>");
    assert_eq!((&annotation).into_iter().count(), 0);
}
