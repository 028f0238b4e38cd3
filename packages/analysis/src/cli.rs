//! Command-line interface for the analysis.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use console::style;

use crate::config::{DocConfig, DocType, DEFAULT_LANG};
use crate::error::{AnalysisError, Result};
use crate::fragment::wrap_in_dts_fragment;
use crate::indexer::{index_document, IndexedNode};
use crate::xml::get_node_by_xml_id;

/// teidocs analysis - classify TEI nodes and compute their citetrails.
#[derive(Parser)]
#[command(name = "teidocs-analysis")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Index a TEI document and print its citetrails.
    Index {
        /// Path to the TEI XML file
        file: PathBuf,

        /// Document type (guidelines, projectmembers, specialchars)
        #[arg(short = 't', long)]
        doc_type: String,

        /// Title language (en, es, de)
        #[arg(short, long, default_value = DEFAULT_LANG)]
        lang: String,

        /// Document id (default: file stem)
        #[arg(long)]
        doc_id: Option<String>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Print the element with the given xml:id wrapped in a DTS fragment.
    Fragment {
        /// Path to the TEI XML file
        file: PathBuf,

        /// xml:id of the element
        #[arg(long)]
        id: String,
    },
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Index {
            file,
            doc_type,
            lang,
            doc_id,
            json,
        } => index_command(&file, &doc_type, &lang, doc_id.as_deref(), json),
        Commands::Fragment { file, id } => fragment_command(&file, &id),
    }
}

fn index_command(
    file: &Path,
    doc_type: &str,
    lang: &str,
    doc_id: Option<&str>,
    json: bool,
) -> Result<()> {
    // Validate arguments before touching the file
    let doc_type: DocType = doc_type.parse()?;
    let doc_id = doc_id
        .map(String::from)
        .or_else(|| file.file_stem().map(|s| s.to_string_lossy().into_owned()))
        .unwrap_or_else(|| doc_type.as_str().to_string());
    let config = DocConfig::new(doc_id, doc_type)?.with_lang(lang)?;

    let xml = std::fs::read_to_string(file)?;
    let doc = roxmltree::Document::parse(&xml)?;

    let analysis = config.analysis();
    let index = index_document(analysis.as_ref(), &doc)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&index.nodes)?);
        return Ok(());
    }

    println!(
        "{} {} ({})",
        style("Indexed").bold(),
        style(index.mapping.doc_id()).cyan(),
        style(doc_type).green()
    );
    println!();
    for node in &index.nodes {
        println!("{}", format_row(node));
    }
    println!();
    println!("  Nodes: {}", index.nodes.len());

    Ok(())
}

fn format_row(node: &IndexedNode) -> String {
    let indent = "  ".repeat(node.level.saturating_sub(1));
    format!(
        "{indent}{:<12} {:<10} {:<16} {}",
        node.citetrail,
        node.node_type.as_str(),
        node.xml_id,
        node.title.as_deref().unwrap_or("-")
    )
}

fn fragment_command(file: &Path, id: &str) -> Result<()> {
    let xml = std::fs::read_to_string(file)?;
    let doc = roxmltree::Document::parse(&xml)?;

    let node = get_node_by_xml_id(doc.root(), id)
        .ok_or_else(|| AnalysisError::NodeNotFound(id.to_string()))?;
    println!("{}", wrap_in_dts_fragment(node)?);

    Ok(())
}
