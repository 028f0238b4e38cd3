//! End-to-end tests for classification and citetrails over TEI fixtures.

use std::fs;
use std::path::Path;

use pretty_assertions::assert_eq;
use roxmltree::Document;

use teidocs_analysis::xml::{ancestor_elements, get_xml_id};
use teidocs_analysis::{
    index_document, AnalysisError, DocAnalysis, DocConfig, DocType, DocumentIndex, NodeType,
};

/// Load fixture file content.
fn load_fixture(name: &str) -> String {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("Failed to load {}: {}", path.display(), e))
}

fn run_index(xml: &str, doc_type: DocType, lang: &str) -> DocumentIndex {
    let doc = Document::parse(xml).expect("Failed to parse fixture XML");
    let config = DocConfig::new(doc_type.as_str(), doc_type)
        .and_then(|c| c.with_lang(lang))
        .expect("valid config");
    let analysis = config.analysis();
    index_document(analysis.as_ref(), &doc).expect("indexing succeeds")
}

fn citetrail_of<'a>(index: &'a DocumentIndex, xml_id: &str) -> &'a str {
    &index
        .find_by_xml_id(xml_id)
        .unwrap_or_else(|| panic!("{xml_id} not indexed"))
        .citetrail
}

#[test]
fn test_guidelines_citetrails() {
    let index = run_index(&load_fixture("guidelines.xml"), DocType::Guidelines, "en");

    let rows: Vec<(&str, &str, NodeType)> = index
        .nodes
        .iter()
        .map(|n| (n.citetrail.as_str(), n.tag.as_str(), n.node_type))
        .collect();
    assert_eq!(
        rows,
        vec![
            ("1", "div", NodeType::Structural),
            ("1.1", "head", NodeType::Basic),
            ("1.2", "head", NodeType::Basic),
            ("1.3", "p", NodeType::Basic),
            ("1.4", "p", NodeType::Basic),
            ("2", "div", NodeType::Structural),
            ("2.1", "head", NodeType::Basic),
            ("2.2", "div", NodeType::Structural),
            ("2.2.1", "head", NodeType::Basic),
            ("2.2.2", "p", NodeType::Basic),
            ("2.2.3", "list", NodeType::Basic),
            ("2.3", "div", NodeType::Structural),
            ("2.3.1", "head", NodeType::Basic),
            ("2.3.2", "p", NodeType::Basic),
        ]
    );
}

#[test]
fn test_guidelines_excluded_nodes() {
    let index = run_index(&load_fixture("guidelines.xml"), DocType::Guidelines, "en");

    // Header division and the list nested in a paragraph are not indexed
    assert!(index.find_by_xml_id("rev-notes").is_none());
    assert!(index.find_by_xml_id("rev-p").is_none());
    assert!(index.find_by_xml_id("intro-p2-list").is_none());
}

#[test]
fn test_guidelines_titles_follow_language() {
    let en = run_index(&load_fixture("guidelines.xml"), DocType::Guidelines, "en");
    let es = run_index(&load_fixture("guidelines.xml"), DocType::Guidelines, "es");

    assert_eq!(en.find_by_xml_id("intro").unwrap().title.as_deref(), Some("Introduction"));
    assert_eq!(es.find_by_xml_id("intro").unwrap().title.as_deref(), Some("Introducción"));
    assert_eq!(
        es.find_by_xml_id("structure").unwrap().title.as_deref(),
        Some("Text structure")
    );
    assert_eq!(en.find_by_xml_id("intro-p1").unwrap().title, None);
}

#[test]
fn test_citetrail_prefix_invariant() {
    let xml = load_fixture("guidelines.xml");
    let doc = Document::parse(&xml).unwrap();
    let config = DocConfig::new("guidelines", DocType::Guidelines).unwrap();
    let analysis = config.analysis();
    let index = index_document(analysis.as_ref(), &doc).unwrap();

    for node in doc.descendants().filter(|n| !get_xml_id(*n).is_empty()) {
        let Some(indexed) = index.find_by_xml_id(get_xml_id(node)) else {
            continue;
        };
        let parent = ancestor_elements(node)
            .find(|anc| analysis.get_node_type(*anc).is_classified());

        match parent {
            Some(parent) => {
                let parent_trail = citetrail_of(&index, get_xml_id(parent));
                let ordinal = analysis.citetrail_ordinal(node);
                assert_eq!(indexed.citetrail, format!("{parent_trail}.{ordinal}"));
                assert!(indexed.citetrail.starts_with(&format!("{parent_trail}.")));
            }
            None => assert!(!indexed.citetrail.contains('.')),
        }
    }
}

#[test]
fn test_sibling_ordinals_increase_in_document_order() {
    let index = run_index(&load_fixture("guidelines.xml"), DocType::Guidelines, "en");

    let last_ordinal = |trail: &str| -> usize {
        trail.rsplit('.').next().unwrap().parse().unwrap()
    };
    assert!(last_ordinal(citetrail_of(&index, "intro-p1")) < last_ordinal(citetrail_of(&index, "intro-p2")));
    assert!(
        last_ordinal(citetrail_of(&index, "structure-divisions"))
            < last_ordinal(citetrail_of(&index, "structure-notes"))
    );

    let mut trails: Vec<_> = index.nodes.iter().map(|n| n.citetrail.clone()).collect();
    let count = trails.len();
    trails.sort();
    trails.dedup();
    assert_eq!(trails.len(), count, "citetrails must be unique");
}

#[test]
fn test_processing_instruction_and_comment_not_classified() {
    let xml = load_fixture("guidelines.xml");
    let doc = Document::parse(&xml).unwrap();
    let config = DocConfig::new("guidelines", DocType::Guidelines).unwrap();
    let analysis = config.analysis();

    let non_elements: Vec<_> = doc
        .descendants()
        .filter(|n| n.is_comment() || n.is_pi())
        .collect();
    assert!(non_elements.len() >= 3);
    for node in non_elements {
        assert_eq!(analysis.get_node_type(node), NodeType::None);
    }
}

#[test]
fn test_projectmembers_index() {
    let index = run_index(&load_fixture("projectmembers.xml"), DocType::Projectmembers, "en");

    assert_eq!(citetrail_of(&index, "team"), "1");
    assert_eq!(citetrail_of(&index, "org-academy"), "1.3");
    assert_eq!(citetrail_of(&index, "team-editors"), "1.4");
    assert_eq!(citetrail_of(&index, "pers-ruiz"), "1.4.2");
    assert_eq!(citetrail_of(&index, "pers-weber"), "1.4.3");

    assert!(index.find_by_xml_id("org-university").is_none());
    assert!(index.find_by_xml_id("hdr-persons").is_none());
    assert!(index.find_by_xml_id("hdr-person").is_none());

    assert_eq!(
        index.find_by_xml_id("pers-ruiz").unwrap().title.as_deref(),
        Some("Ana Ruiz")
    );
    assert_eq!(
        index.find_by_xml_id("team-editors").unwrap().title.as_deref(),
        Some("Editors")
    );
}

#[test]
fn test_projectmembers_title_in_german() {
    let index = run_index(&load_fixture("projectmembers.xml"), DocType::Projectmembers, "de");

    assert_eq!(index.find_by_xml_id("team").unwrap().title.as_deref(), Some("Projektteam"));
    // No German head: falls back to English
    assert_eq!(
        index.find_by_xml_id("team-editors").unwrap().title.as_deref(),
        Some("Editors")
    );
}

#[test]
fn test_specialchars_classification_and_titles() {
    let xml = load_fixture("specialchars.xml");
    let doc = Document::parse(&xml).unwrap();
    let config = DocConfig::new("specialchars", DocType::Specialchars)
        .unwrap()
        .with_lang("de")
        .unwrap();
    let analysis = config.analysis();

    let classified: Vec<_> = doc
        .descendants()
        .filter(|n| analysis.get_node_type(*n).is_classified())
        .map(|n| (get_xml_id(n), analysis.get_node_type(n)))
        .collect();
    assert_eq!(
        classified,
        vec![
            ("charDecl", NodeType::Structural),
            ("char017f", NodeType::Basic),
            ("char204a", NodeType::Basic),
            ("charUnnamed", NodeType::Basic),
        ]
    );

    let title = |id: &str| {
        let node = doc.descendants().find(|n| get_xml_id(*n) == id).unwrap();
        analysis.make_title(node).unwrap()
    };
    assert_eq!(title("charDecl").as_deref(), Some("Sonderzeichen"));
    assert_eq!(title("char204a").as_deref(), Some("TIRONIAN SIGN ET"));
    assert_eq!(title("charUnnamed"), None);
}

#[test]
fn test_specialchars_index_fails_loudly() {
    let xml = load_fixture("specialchars.xml");
    let doc = Document::parse(&xml).unwrap();
    let config = DocConfig::new("specialchars", DocType::Specialchars).unwrap();
    let analysis = config.analysis();

    let err = index_document(analysis.as_ref(), &doc).unwrap_err();
    assert!(matches!(err, AnalysisError::NotImplemented { .. }));
}

#[test]
fn test_documents_have_independent_mappings() {
    let first = run_index(&load_fixture("guidelines.xml"), DocType::Guidelines, "en");
    let second = run_index(&load_fixture("projectmembers.xml"), DocType::Projectmembers, "en");

    assert_eq!(first.mapping.doc_id(), "guidelines");
    assert_eq!(second.mapping.doc_id(), "projectmembers");
    assert!(first.mapping.get_citetrail("team").is_none());
    assert_eq!(second.mapping.get_citetrail("team"), Some("1"));
}
