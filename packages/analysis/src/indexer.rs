//! Document indexer: drives an analysis over a whole document.
//!
//! The indexer is the caller the analysis relies on. It visits nodes in
//! document order, outer before inner, and persists each citetrail under the
//! node's `xml:id` before any descendant asks for it.

use std::collections::HashSet;

use roxmltree::{Document, Node};
use serde::Serialize;

use crate::analysis::{DocAnalysis, NodeType};
use crate::error::{AnalysisError, Result};
use crate::mapping::CitetrailMapping;
use crate::xml::get_xml_id;

/// One classified node of an indexed document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexedNode {
    /// `xml:id`, empty when the node has none.
    pub xml_id: String,
    /// Local element name.
    pub tag: String,
    pub node_type: NodeType,
    pub citetrail: String,
    /// Nesting depth, 1 for top-level nodes.
    pub level: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// Result of indexing one document.
#[derive(Debug)]
pub struct DocumentIndex {
    pub nodes: Vec<IndexedNode>,
    pub mapping: CitetrailMapping,
}

impl DocumentIndex {
    /// Find an indexed node by citetrail.
    #[must_use]
    pub fn find_by_citetrail(&self, citetrail: &str) -> Option<&IndexedNode> {
        self.nodes.iter().find(|n| n.citetrail == citetrail)
    }

    /// Find an indexed node by `xml:id`.
    #[must_use]
    pub fn find_by_xml_id(&self, xml_id: &str) -> Option<&IndexedNode> {
        self.nodes.iter().find(|n| !xml_id.is_empty() && n.xml_id == xml_id)
    }
}

/// Index every classified node of a document.
///
/// # Errors
/// Propagates analysis errors (missing parent ids, unimplemented operations)
/// and mapping errors (duplicate ids). Two nodes numbered alike fail with
/// `DuplicateCitetrail`.
pub fn index_document(analysis: &dyn DocAnalysis, doc: &Document<'_>) -> Result<DocumentIndex> {
    let doc_id = analysis.config().doc_id.as_str();
    let mut mapping = CitetrailMapping::new(doc_id);
    let mut nodes = Vec::new();
    let mut seen = HashSet::new();

    for node in doc.descendants().filter(Node::is_element) {
        let node_type = analysis.get_node_type(node);
        if !node_type.is_classified() {
            continue;
        }
        let indexed = index_node(analysis, node, node_type, &mut mapping)?;
        if !seen.insert(indexed.citetrail.clone()) {
            return Err(AnalysisError::DuplicateCitetrail {
                citetrail: indexed.citetrail,
                tag: indexed.tag,
                doc_id: doc_id.to_string(),
            });
        }
        nodes.push(indexed);
    }

    tracing::info!(
        doc_id = %doc_id,
        doc_type = %analysis.doc_type(),
        nodes = nodes.len(),
        "Indexed document"
    );

    Ok(DocumentIndex { nodes, mapping })
}

fn index_node(
    analysis: &dyn DocAnalysis,
    node: Node<'_, '_>,
    node_type: NodeType,
    mapping: &mut CitetrailMapping,
) -> Result<IndexedNode> {
    let xml_id = get_xml_id(node);
    let citetrail = analysis.make_citetrail(node, mapping)?;
    let title = analysis.make_title(node)?;

    if xml_id.is_empty() {
        tracing::debug!(
            tag = %node.tag_name().name(),
            citetrail = %citetrail,
            "Classified node without xml:id, citetrail not persisted"
        );
    } else {
        mapping.put(xml_id, citetrail.clone())?;
    }

    tracing::debug!(
        xml_id = %xml_id,
        node_type = %node_type,
        citetrail = %citetrail,
        "Indexed node"
    );

    Ok(IndexedNode {
        xml_id: xml_id.to_string(),
        tag: node.tag_name().name().to_string(),
        node_type,
        level: citetrail.split('.').count(),
        citetrail,
        title,
    })
}
