//! Document analysis: node classification, citetrails and titles.
//!
//! Every supported document type implements [`DocAnalysis`] with its own
//! grammar. The caller picks the implementation through
//! [`DocConfig::analysis`](crate::config::DocConfig::analysis).

mod citetrail;
mod guidelines;
mod projectmembers;
mod specialchars;
mod title;

use std::fmt;

use roxmltree::Node;
use serde::Serialize;

use crate::config::{DocConfig, DocType};
use crate::error::Result;
use crate::mapping::CitetrailMapping;
use crate::xml::{ancestor_elements, preceding_sibling_elements};

pub use citetrail::build_citetrail;
pub use guidelines::GuidelinesAnalysis;
pub use projectmembers::ProjectmembersAnalysis;
pub use specialchars::SpecialcharsAnalysis;
pub use title::{select_by_lang, title_text};

/// Classification of a node for indexing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum NodeType {
    /// Container holding other structural or basic nodes.
    #[serde(rename = "structural")]
    Structural,
    /// Leaf content unit (paragraph, heading, list, ...).
    #[serde(rename = "basic")]
    Basic,
    /// Not relevant for indexing.
    #[serde(rename = "")]
    None,
}

impl NodeType {
    /// String form: `"structural"`, `"basic"` or `""`.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Structural => "structural",
            Self::Basic => "basic",
            Self::None => "",
        }
    }

    /// Whether the node takes part in citetrail numbering.
    #[must_use]
    pub fn is_classified(&self) -> bool {
        !matches!(self, Self::None)
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Analysis capabilities of one document type.
///
/// Implementations are pure: they never mutate the tree or the mapping, so
/// the same call on the same node always gives the same answer.
pub trait DocAnalysis {
    /// The document type this analysis belongs to.
    fn doc_type(&self) -> DocType;

    /// Settings of the document being analysed.
    fn config(&self) -> &DocConfig;

    /// Whether the node is a section containing structural and/or basic nodes.
    fn is_structural_node(&self, node: Node<'_, '_>) -> bool;

    /// Whether the node is a basic text unit that is not further nested.
    fn is_basic_node(&self, node: Node<'_, '_>) -> bool;

    /// Title of a node from its attributes or content.
    ///
    /// Returns `Ok(None)` when no title source applies.
    fn make_title(&self, node: Node<'_, '_>) -> Result<Option<String>>;

    /// Citetrail of a node.
    ///
    /// The citetrail of the nearest classified ancestor must already be in
    /// `mapping`. The result is not persisted; that is the caller's job.
    fn make_citetrail(&self, node: Node<'_, '_>, mapping: &CitetrailMapping) -> Result<String>;

    /// Node type, checking structural before basic.
    fn get_node_type(&self, node: Node<'_, '_>) -> NodeType {
        if self.is_structural_node(node) {
            NodeType::Structural
        } else if self.is_basic_node(node) {
            NodeType::Basic
        } else {
            NodeType::None
        }
    }

    /// Classified ancestors of a node, nearest first.
    fn citetrail_ancestors<'a, 'input>(&self, node: Node<'a, 'input>) -> Vec<Node<'a, 'input>> {
        ancestor_elements(node)
            .filter(|anc| self.get_node_type(*anc).is_classified())
            .collect()
    }

    /// 1-based rank of a node among its classified siblings.
    fn citetrail_ordinal(&self, node: Node<'_, '_>) -> usize {
        preceding_sibling_elements(node)
            .filter(|prec| self.get_node_type(*prec).is_classified())
            .count()
            + 1
    }
}
