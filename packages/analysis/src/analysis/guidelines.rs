//! Editorial guidelines documents.
//!
//! ```text
//! TEI
//! └── text
//!     └── body
//!         └── div                (structural)
//!             ├── head           (basic)
//!             ├── p              (basic)
//!             │   └── list       (nested, not indexed)
//!             └── div            (structural)
//!                 └── list       (basic)
//! ```

use roxmltree::Node;

use super::{build_citetrail, select_by_lang, title_text, DocAnalysis};
use crate::config::{DocConfig, DocType};
use crate::error::Result;
use crate::grammar::{Grammar, Rule};
use crate::mapping::CitetrailMapping;
use crate::namespace::tei;
use crate::xml::{find_children, has_tag, normalize_space};

/// Grammar: divisions inside `tei:text`, with paragraphs, heads and lists.
#[must_use]
pub fn guidelines_grammar() -> Grammar {
    Grammar::new(
        Rule::tag(tei("div")).within(Rule::tag(tei("text"))),
        Rule::any_tag([tei("p"), tei("head"), tei("list")]),
    )
}

/// Analysis for editorial guidelines.
#[derive(Debug, Clone)]
pub struct GuidelinesAnalysis {
    config: DocConfig,
    grammar: Grammar,
}

impl GuidelinesAnalysis {
    #[must_use]
    pub fn new(config: DocConfig) -> Self {
        Self {
            config,
            grammar: guidelines_grammar(),
        }
    }
}

impl DocAnalysis for GuidelinesAnalysis {
    fn doc_type(&self) -> DocType {
        DocType::Guidelines
    }

    fn config(&self) -> &DocConfig {
        &self.config
    }

    fn is_structural_node(&self, node: Node<'_, '_>) -> bool {
        self.grammar.is_structural(node)
    }

    fn is_basic_node(&self, node: Node<'_, '_>) -> bool {
        self.grammar.is_basic(node)
    }

    /// A division is titled by its head (in the configured language) or its
    /// `n` attribute; a head by its own text. Paragraphs and lists have none.
    fn make_title(&self, node: Node<'_, '_>) -> Result<Option<String>> {
        if has_tag(node, tei("div")) {
            let langs = self.config.title_langs();
            let from_head =
                select_by_lang(find_children(node, tei("head")), &langs).and_then(title_text);
            let from_n = || {
                node.attribute("n")
                    .map(normalize_space)
                    .filter(|n| !n.is_empty())
            };
            return Ok(from_head.or_else(from_n));
        }
        if has_tag(node, tei("head")) {
            return Ok(title_text(node));
        }
        Ok(None)
    }

    fn make_citetrail(&self, node: Node<'_, '_>, mapping: &CitetrailMapping) -> Result<String> {
        build_citetrail(self, node, mapping)
    }
}
