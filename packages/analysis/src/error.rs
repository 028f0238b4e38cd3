//! Error types for document analysis.
//!
//! Classification misses and absent titles are not errors: they are reported
//! as `NodeType::None` and `Ok(None)`. Everything here is a hard failure that
//! would otherwise corrupt an index.

use thiserror::Error;

/// Main error type for the analysis library.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// A citetrail parent has not been persisted in the mapping yet.
    #[error("No citetrail recorded for xml:id '{xml_id}' in document {doc_id}; ancestors must be indexed before their descendants")]
    MissingCitetrail { xml_id: String, doc_id: String },

    /// A node that must act as a citetrail parent has no `xml:id`.
    #[error("Element <{tag}> has no xml:id and cannot anchor a citetrail")]
    MissingXmlId { tag: String },

    /// The same `xml:id` was persisted twice in one document.
    #[error("Duplicate xml:id '{xml_id}' in document {doc_id}")]
    DuplicateXmlId { xml_id: String, doc_id: String },

    /// Two classified nodes of one document were given the same citetrail.
    #[error("Duplicate citetrail '{citetrail}' for <{tag}> in document {doc_id}")]
    DuplicateCitetrail {
        citetrail: String,
        tag: String,
        doc_id: String,
    },

    /// A citetrail was recorded under an empty `xml:id`.
    #[error("Cannot record citetrail '{citetrail}' under an empty xml:id")]
    EmptyXmlId { citetrail: String },

    /// The document type does not define this operation.
    #[error("{operation} is not implemented for document type '{doc_type}'")]
    NotImplemented {
        operation: &'static str,
        doc_type: &'static str,
    },

    /// Unknown document type name.
    #[error("Unknown document type: '{0}'. Expected one of: guidelines, projectmembers, specialchars")]
    UnknownDocType(String),

    /// Unsupported or malformed title language.
    #[error("Invalid title language: '{0}'. Expected one of: en, es, de")]
    InvalidLanguage(String),

    /// Malformed document identifier.
    #[error("Invalid document id: '{0}'")]
    InvalidDocId(String),

    /// No element carries the requested `xml:id`.
    #[error("No element with xml:id '{0}'")]
    NodeNotFound(String),

    /// XML parsing failed.
    #[error("XML parsing failed: {0}")]
    XmlParse(#[from] roxmltree::Error),

    /// Writing a fragment failed.
    #[error("Fragment serialization failed: {0}")]
    Serialize(String),

    /// JSON output failed.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for analysis operations.
pub type Result<T> = std::result::Result<T, AnalysisError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_citetrail_display() {
        let err = AnalysisError::MissingCitetrail {
            xml_id: "div-1".to_string(),
            doc_id: "W0004".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("div-1"));
        assert!(msg.contains("W0004"));
    }

    #[test]
    fn test_not_implemented_display() {
        let err = AnalysisError::NotImplemented {
            operation: "make_citetrail",
            doc_type: "specialchars",
        };
        assert_eq!(
            err.to_string(),
            "make_citetrail is not implemented for document type 'specialchars'"
        );
    }

    #[test]
    fn test_duplicate_citetrail_display() {
        let err = AnalysisError::DuplicateCitetrail {
            citetrail: "1.1".to_string(),
            tag: "head".to_string(),
            doc_id: "W0004".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Duplicate citetrail '1.1' for <head> in document W0004"
        );
    }

    #[test]
    fn test_unknown_doc_type_display() {
        let err = AnalysisError::UnknownDocType("works".to_string());
        assert!(err.to_string().contains("'works'"));
        assert!(err.to_string().contains("guidelines"));
    }
}
