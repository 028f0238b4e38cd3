//! Project members listings.
//!
//! Person lists in the text body hold a heading plus organization and
//! person entries. Person lists may nest (e.g. per work group).

use roxmltree::Node;

use super::{build_citetrail, select_by_lang, title_text, DocAnalysis};
use crate::config::{DocConfig, DocType};
use crate::error::Result;
use crate::grammar::{Grammar, Rule};
use crate::mapping::CitetrailMapping;
use crate::namespace::tei;
use crate::xml::{find_child, find_children, has_tag};

#[must_use]
pub fn projectmembers_grammar() -> Grammar {
    Grammar::new(
        Rule::tag(tei("listPerson")).within(Rule::tag(tei("text"))),
        Rule::any_tag([tei("head"), tei("org"), tei("person")]),
    )
}

/// Analysis for project members listings.
#[derive(Debug, Clone)]
pub struct ProjectmembersAnalysis {
    config: DocConfig,
    grammar: Grammar,
}

impl ProjectmembersAnalysis {
    #[must_use]
    pub fn new(config: DocConfig) -> Self {
        Self {
            config,
            grammar: projectmembers_grammar(),
        }
    }
}

impl DocAnalysis for ProjectmembersAnalysis {
    fn doc_type(&self) -> DocType {
        DocType::Projectmembers
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

    fn make_title(&self, node: Node<'_, '_>) -> Result<Option<String>> {
        let title = if has_tag(node, tei("listPerson")) {
            select_by_lang(find_children(node, tei("head")), &self.config.title_langs())
                .and_then(title_text)
        } else if has_tag(node, tei("person")) {
            find_child(node, tei("persName")).and_then(title_text)
        } else if has_tag(node, tei("org")) {
            find_child(node, tei("orgName")).and_then(title_text)
        } else if has_tag(node, tei("head")) {
            title_text(node)
        } else {
            None
        };
        Ok(title)
    }

    fn make_citetrail(&self, node: Node<'_, '_>, mapping: &CitetrailMapping) -> Result<String> {
        build_citetrail(self, node, mapping)
    }
}
