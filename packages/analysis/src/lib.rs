//! teidocs analysis - classify TEI document nodes and derive citetrails.
//!
//! Given a parsed TEI tree, each document type decides which nodes are
//! *structural* (containers), *basic* (leaf content units) or irrelevant,
//! and numbers the classified nodes with hierarchical citetrails such as
//! `"2.1.3"`.
//!
//! # Example
//!
//! ```
//! use roxmltree::Document;
//! use teidocs_analysis::{index_document, DocConfig, DocType};
//!
//! let xml = r#"<TEI xmlns="http://www.tei-c.org/ns/1.0"><text><body>
//!     <div xml:id="intro"><p>One</p><p>Two</p></div>
//! </body></text></TEI>"#;
//! let doc = Document::parse(xml).unwrap();
//!
//! let config = DocConfig::new("guidelines", DocType::Guidelines).unwrap();
//! let analysis = config.analysis();
//! let index = index_document(analysis.as_ref(), &doc).unwrap();
//!
//! let trails: Vec<_> = index.nodes.iter().map(|n| n.citetrail.as_str()).collect();
//! assert_eq!(trails, vec!["1", "1.1", "1.2"]);
//! ```
//!
//! # Architecture
//!
//! - [`namespace`]: Namespace registry and qualified names
//! - [`xml`]: Node predicate library
//! - [`grammar`]: Tree-matching rules for classification
//! - [`analysis`]: The `DocAnalysis` trait and one implementation per document type
//! - [`mapping`]: Per-document citetrail cache
//! - [`config`]: Document types, title languages, validation
//! - [`indexer`]: Document-order traversal that persists citetrails
//! - [`fragment`]: DTS fragment serialization
//! - [`error`]: Error types and Result alias
//! - [`cli`]: Command-line interface

pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod fragment;
pub mod grammar;
pub mod indexer;
pub mod mapping;
pub mod namespace;
pub mod xml;

pub use analysis::{DocAnalysis, NodeType};
pub use config::{DocConfig, DocType};
pub use error::{AnalysisError, Result};
pub use indexer::{index_document, DocumentIndex, IndexedNode};
pub use mapping::CitetrailMapping;
