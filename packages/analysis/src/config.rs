//! Document configuration: document types, title language policy and
//! identifier validation.

use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use crate::analysis::{DocAnalysis, GuidelinesAnalysis, ProjectmembersAnalysis, SpecialcharsAnalysis};
use crate::error::{AnalysisError, Result};

/// Title language used when none is requested, and the first fallback.
pub const DEFAULT_LANG: &str = "en";

/// Languages titles may be requested in.
pub const SUPPORTED_LANGS: &[&str] = &["en", "es", "de"];

/// Document id pattern: ASCII letters, digits, `_`, `-` and `.`.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static DOC_ID_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9_.-]*$").expect("valid regex"));

/// Validate a title language code.
///
/// # Examples
/// ```
/// use teidocs_analysis::config::validate_lang;
///
/// assert!(validate_lang("es").is_ok());
/// assert!(validate_lang("fr").is_err());
/// ```
pub fn validate_lang(lang: &str) -> Result<()> {
    if SUPPORTED_LANGS.contains(&lang) {
        Ok(())
    } else {
        Err(AnalysisError::InvalidLanguage(lang.to_string()))
    }
}

/// Validate a document identifier.
///
/// # Examples
/// ```
/// use teidocs_analysis::config::validate_doc_id;
///
/// assert!(validate_doc_id("W0004").is_ok());
/// assert!(validate_doc_id("../etc").is_err());
/// ```
pub fn validate_doc_id(doc_id: &str) -> Result<()> {
    if DOC_ID_PATTERN.is_match(doc_id) && !doc_id.contains("..") {
        Ok(())
    } else {
        Err(AnalysisError::InvalidDocId(doc_id.to_string()))
    }
}

/// Supported document types, one grammar each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocType {
    /// Editorial guidelines: nested divisions of paragraphs, heads and lists.
    Guidelines,
    /// Project members listing: person lists of heads, orgs and persons.
    Projectmembers,
    /// Special characters declaration in the TEI header.
    Specialchars,
}

impl DocType {
    pub const ALL: [DocType; 3] = [Self::Guidelines, Self::Projectmembers, Self::Specialchars];

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Guidelines => "guidelines",
            Self::Projectmembers => "projectmembers",
            Self::Specialchars => "specialchars",
        }
    }
}

impl fmt::Display for DocType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocType {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == name)
            .ok_or_else(|| AnalysisError::UnknownDocType(s.to_string()))
    }
}

/// Settings for analysing one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocConfig {
    pub doc_id: String,
    pub doc_type: DocType,
    /// Preferred language for titles.
    pub lang: String,
}

impl DocConfig {
    /// Create a configuration with the default title language.
    ///
    /// # Errors
    /// `InvalidDocId` if the id is malformed.
    pub fn new(doc_id: impl Into<String>, doc_type: DocType) -> Result<Self> {
        let doc_id = doc_id.into();
        validate_doc_id(&doc_id)?;
        Ok(Self {
            doc_id,
            doc_type,
            lang: DEFAULT_LANG.to_string(),
        })
    }

    /// Set the preferred title language.
    ///
    /// # Errors
    /// `InvalidLanguage` if the language is not supported.
    pub fn with_lang(mut self, lang: impl Into<String>) -> Result<Self> {
        let lang = lang.into();
        validate_lang(&lang)?;
        self.lang = lang;
        Ok(self)
    }

    /// Create the analysis for the configured document type.
    #[must_use]
    pub fn analysis(self) -> Box<dyn DocAnalysis> {
        match self.doc_type {
            DocType::Guidelines => Box::new(GuidelinesAnalysis::new(self)),
            DocType::Projectmembers => Box::new(ProjectmembersAnalysis::new(self)),
            DocType::Specialchars => Box::new(SpecialcharsAnalysis::new(self)),
        }
    }

    /// Languages to try for a title, in order: requested, then default.
    #[must_use]
    pub fn title_langs(&self) -> Vec<&str> {
        let mut langs = vec![self.lang.as_str()];
        if self.lang != DEFAULT_LANG {
            langs.push(DEFAULT_LANG);
        }
        langs
    }
}
