//! Special characters declarations (`tei:charDecl` in the TEI header).

use roxmltree::Node;

use super::{select_by_lang, title_text, DocAnalysis};
use crate::config::{DocConfig, DocType};
use crate::error::{AnalysisError, Result};
use crate::grammar::{Grammar, Rule};
use crate::mapping::CitetrailMapping;
use crate::namespace::tei;
use crate::xml::{ancestor_elements, find_by_path, find_child, has_tag};

#[must_use]
pub fn specialchars_grammar() -> Grammar {
    Grammar::new(
        Rule::tag(tei("charDecl")).within(Rule::tag(tei("teiHeader"))),
        Rule::tag(tei("char")),
    )
    .with_nested_leaves()
}

/// Analysis for special characters declarations.
#[derive(Debug, Clone)]
pub struct SpecialcharsAnalysis {
    config: DocConfig,
    grammar: Grammar,
}

impl SpecialcharsAnalysis {
    #[must_use]
    pub fn new(config: DocConfig) -> Self {
        Self {
            config,
            grammar: specialchars_grammar(),
        }
    }
}

impl DocAnalysis for SpecialcharsAnalysis {
    fn doc_type(&self) -> DocType {
        DocType::Specialchars
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

    /// The declaration is titled by the document title, a character by its
    /// description.
    fn make_title(&self, node: Node<'_, '_>) -> Result<Option<String>> {
        if has_tag(node, tei("charDecl")) {
            let title_stmt = ancestor_elements(node)
                .find(|anc| has_tag(*anc, tei("teiHeader")))
                .and_then(|header| find_by_path(header, &[tei("fileDesc"), tei("titleStmt")]));
            let Some(title_stmt) = title_stmt else {
                return Ok(None);
            };
            let titles = title_stmt
                .children()
                .filter(|child| has_tag(*child, tei("title")));
            return Ok(select_by_lang(titles, &self.config.title_langs()).and_then(title_text));
        }
        if has_tag(node, tei("char")) {
            return Ok(find_child(node, tei("desc")).and_then(title_text));
        }
        Ok(None)
    }

    fn make_citetrail(&self, _node: Node<'_, '_>, _mapping: &CitetrailMapping) -> Result<String> {
        Err(AnalysisError::NotImplemented {
            operation: "make_citetrail",
            doc_type: self.doc_type().as_str(),
        })
    }
}
