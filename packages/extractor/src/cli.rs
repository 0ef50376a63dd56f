//! Command-line interface for the extractor.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::config::{slugify, validate_document_id};
use crate::error::{ExtractorError, Result};
use crate::extraction::{document_rules, SectionExtractor};
use crate::input::load_source_lines;
use crate::output::save_yaml;
use crate::references::{resolve_references, InMemoryIndex, ReferenceMatch};
use crate::types::{DocumentType, ExtractedDocument};

/// BridgeFacile Section Extractor - Segment regulatory bridge documents.
#[derive(Parser)]
#[command(name = "bridgefacile-extractor")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extract hierarchical sections from a converted document text file.
    Extract {
        /// Path to the plain-text source (PDF conversion happens upstream)
        file: PathBuf,

        /// Document type: rnc, code-of-laws or bidding-categories
        #[arg(short = 't', long = "doc-type")]
        doc_type: String,

        /// Identifier recorded as the source document (default: file stem)
        #[arg(short = 'i', long)]
        document_id: Option<String>,

        /// Output directory (default: extracted/)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Skip intra-document reference resolution
        #[arg(long)]
        no_references: bool,
    },
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Extract {
            file,
            doc_type,
            document_id,
            output,
            no_references,
        } => extract_command(
            &file,
            &doc_type,
            document_id.as_deref(),
            output.as_deref(),
            no_references,
        ),
    }
}

/// Execute the extract command.
fn extract_command(
    file: &std::path::Path,
    doc_type: &str,
    document_id: Option<&str>,
    output: Option<&std::path::Path>,
    no_references: bool,
) -> Result<()> {
    let document_type = DocumentType::parse(doc_type)?;

    // Default the document id to the (slugified) file stem.
    let document_id = match document_id {
        Some(id) => id.to_string(),
        None => slugify(&file.file_stem().unwrap_or_default().to_string_lossy()),
    };
    validate_document_id(&document_id)?;

    // Validate output directory (if specified) before doing any work.
    if let Some(output_dir) = output {
        if output_dir.exists() && !output_dir.is_dir() {
            return Err(ExtractorError::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("Output path is not a directory: {}", output_dir.display()),
            )));
        }
    }

    println!(
        "{} {} as {}",
        style("Extracting").bold(),
        style(file.display()).cyan(),
        style(document_type.as_str()).green()
    );
    println!();

    // Create progress spinner
    let pb = ProgressBar::new_spinner();
    #[allow(clippy::expect_used)] // Static template string that is guaranteed to be valid
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .expect("valid template"),
    );
    pb.enable_steady_tick(std::time::Duration::from_millis(100));

    pb.set_message("Reading source text...");
    let lines = match load_source_lines(file) {
        Ok(lines) => lines,
        Err(e) => {
            pb.finish_and_clear();
            return Err(e);
        }
    };

    pb.set_message("Extracting sections...");
    let rules = document_rules(document_type)?;
    let extractor = SectionExtractor::new(rules);
    let outcome = extractor.extract(&lines);

    let document = ExtractedDocument::new(
        document_id,
        document_type,
        outcome.sections,
        outcome.warnings,
    );

    // Resolve intra-document references unless disabled.
    let references: Vec<Vec<ReferenceMatch>> = if no_references {
        vec![Vec::new(); document.sections.len()]
    } else {
        pb.set_message("Resolving references...");
        let index = InMemoryIndex::from_document(&document);
        document
            .sections
            .iter()
            .map(|section| resolve_references(&section.body, &index))
            .collect()
    };

    let resolved: usize = references
        .iter()
        .flatten()
        .filter(|r| r.resolved.is_some())
        .count();
    let unresolved: usize = references
        .iter()
        .flatten()
        .filter(|r| r.resolved.is_none())
        .count();

    println!("  Sections: {}", document.sections.len());
    if !no_references {
        println!("  References: {resolved} resolved, {unresolved} unresolved");
    }
    if !document.warnings.is_empty() {
        println!(
            "  Warnings: {}",
            style(document.warnings.len()).yellow().bold()
        );
        for warning in &document.warnings {
            println!("    {}", style(warning).yellow());
        }
    }

    pb.set_message("Saving YAML...");
    let output_path = match save_yaml(&document, &references, output) {
        Ok(path) => path,
        Err(e) => {
            pb.finish_and_clear();
            return Err(e);
        }
    };

    pb.finish_and_clear();

    println!();
    println!(
        "{} {}",
        style("Saved to:").green().bold(),
        output_path.display()
    );

    Ok(())
}
