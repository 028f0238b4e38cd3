//! Citetrail mapping: per-document cache from `xml:id` to citetrail.

use std::collections::HashMap;

use crate::error::{AnalysisError, Result};

/// Already-computed citetrails of one document, keyed by `xml:id`.
///
/// The analyzer only reads from the mapping. Whoever drives the traversal
/// persists each accepted citetrail with [`CitetrailMapping::put`] before
/// asking for the citetrails of that node's descendants.
#[derive(Debug, Clone, Default)]
pub struct CitetrailMapping {
    doc_id: String,
    citetrails: HashMap<String, String>,
}

impl CitetrailMapping {
    /// Create an empty mapping for a document.
    #[must_use]
    pub fn new(doc_id: impl Into<String>) -> Self {
        Self {
            doc_id: doc_id.into(),
            citetrails: HashMap::new(),
        }
    }

    /// The document this mapping belongs to.
    #[must_use]
    pub fn doc_id(&self) -> &str {
        &self.doc_id
    }

    /// Look up the citetrail recorded for an `xml:id`.
    #[must_use]
    pub fn get_citetrail(&self, xml_id: &str) -> Option<&str> {
        self.citetrails.get(xml_id).map(String::as_str)
    }

    /// Record the citetrail of a node.
    ///
    /// # Errors
    /// `EmptyXmlId` for an empty id, `DuplicateXmlId` if the id was already
    /// recorded in this document.
    pub fn put(&mut self, xml_id: &str, citetrail: impl Into<String>) -> Result<()> {
        let citetrail = citetrail.into();
        if xml_id.is_empty() {
            return Err(AnalysisError::EmptyXmlId { citetrail });
        }
        if self.citetrails.contains_key(xml_id) {
            return Err(AnalysisError::DuplicateXmlId {
                xml_id: xml_id.to_string(),
                doc_id: self.doc_id.clone(),
            });
        }
        self.citetrails.insert(xml_id.to_string(), citetrail);
        Ok(())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.citetrails.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.citetrails.is_empty()
    }
}
