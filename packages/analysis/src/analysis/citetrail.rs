//! Citetrail construction shared by the document types that number their nodes.

use roxmltree::Node;

use super::DocAnalysis;
use crate::error::{AnalysisError, Result};
use crate::mapping::CitetrailMapping;
use crate::xml::{ancestor_elements, get_xml_id};

/// Build the citetrail of a node from its ordinal and its parent's citetrail.
///
/// The parent is the nearest classified ancestor. Top-level nodes get their
/// bare ordinal ("3"), nested nodes get `parent + "." + ordinal` ("1.2.3").
///
/// # Errors
/// `MissingXmlId` if the parent has no `xml:id`, `MissingCitetrail` if the
/// parent's citetrail has not been persisted in `mapping`.
pub fn build_citetrail<A: DocAnalysis + ?Sized>(
    analysis: &A,
    node: Node<'_, '_>,
    mapping: &CitetrailMapping,
) -> Result<String> {
    let cite = analysis.citetrail_ordinal(node).to_string();

    let Some(parent) =
        ancestor_elements(node).find(|anc| analysis.get_node_type(*anc).is_classified())
    else {
        return Ok(cite);
    };

    let parent_id = get_xml_id(parent);
    if parent_id.is_empty() {
        return Err(AnalysisError::MissingXmlId {
            tag: parent.tag_name().name().to_string(),
        });
    }

    let parent_citetrail =
        mapping
            .get_citetrail(parent_id)
            .ok_or_else(|| AnalysisError::MissingCitetrail {
                xml_id: parent_id.to_string(),
                doc_id: mapping.doc_id().to_string(),
            })?;

    Ok(format!("{parent_citetrail}.{cite}"))
}
