//! luadefs — generate Lua language-server definition stubs from JSON API
//! descriptions.
//!
//! Reads every recognized document in an input directory and writes one
//! `---@meta` annotation file per document. Documents are processed
//! independently: a malformed input is reported and skipped, never
//! aborting the rest of the run.

mod model;
mod render;
mod schema;
mod snippet;

use anyhow::{bail, Context, Result};
use clap::Parser;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "luadefs",
    about = "Generate Lua language-server definition stubs from JSON API descriptions"
)]
struct Cli {
    /// Directory containing JSON API-description documents
    input: PathBuf,

    /// Output directory for generated definition files
    #[arg(short = 'o', long)]
    output: PathBuf,

    /// Output format: luals (lua-language-server annotations)
    #[arg(short = 'f', long, default_value = "luals")]
    format: String,

    /// Also write completion snippets for all generated documents
    /// to this JSON file
    #[arg(long)]
    snippets: Option<PathBuf>,
}

/// File extensions recognized as API-description documents.
const SUPPORTED_EXTENSIONS: &[&str] = &["json"];

fn main() -> Result<()> {
    let cli = Cli::parse();

    let inputs = discover_inputs(&cli.input)?;
    if inputs.is_empty() {
        bail!(
            "no API description documents found in {}",
            cli.input.display()
        );
    }

    let renderer = render::create_renderer(&cli.format)?;

    fs::create_dir_all(&cli.output).with_context(|| {
        format!("failed to create output directory: {}", cli.output.display())
    })?;

    let mut snippets: BTreeMap<String, snippet::Snippet> = BTreeMap::new();

    for path in &inputs {
        match process(path, &cli.output, renderer.as_ref()) {
            Ok((out_path, doc)) => {
                if cli.snippets.is_some() {
                    snippet::collect(&doc, &mut snippets);
                }
                println!("generated {} ({})", out_path.display(), doc.version);
            }
            Err(e) => {
                eprintln!("error: skipping {}: {:#}", path.display(), e);
            }
        }
    }

    if let Some(ref snippets_path) = cli.snippets {
        write_snippets(snippets_path, &snippets)?;
        println!("generated {}", snippets_path.display());
    }

    Ok(())
}

/// Scan the input directory (non-recursive) for recognized documents.
/// Sorted by name so the run order, and with it every diagnostic line,
/// is deterministic.
fn discover_inputs(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("failed to read input directory: {}", dir.display()))?;

    let mut files = Vec::new();
    for entry in entries.flatten() {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
            if SUPPORTED_EXTENSIONS.contains(&ext) {
                files.push(path);
            }
        }
    }
    files.sort();
    Ok(files)
}

/// Process one document end to end: read, parse, render, write. Returns
/// the output path and the parsed document for optional snippet
/// collection.
fn process(
    path: &Path,
    output_dir: &Path,
    renderer: &dyn render::Renderer,
) -> Result<(PathBuf, model::ApiDocument)> {
    let bytes = fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    let doc = schema::parse_document(&bytes)?;

    let out_path = output_dir.join(output_file_name(path, renderer.file_extension()));
    let rendered = renderer.render(&doc);
    fs::write(&out_path, rendered)
        .with_context(|| format!("failed to write {}", out_path.display()))?;

    Ok((out_path, doc))
}

/// Derive the output file name from the input: same stem, renderer
/// extension. "data/cc-tweaked.json" → "cc-tweaked.lua"
fn output_file_name(input: &Path, ext: &str) -> String {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    format!("{}.{}", stem, ext)
}

fn write_snippets(path: &Path, snippets: &BTreeMap<String, snippet::Snippet>) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).with_context(|| {
                format!("failed to create snippets directory: {}", parent.display())
            })?;
        }
    }
    let json = serde_json::to_string_pretty(snippets).context("failed to encode snippets")?;
    fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))
}
