//! CLI binary for inline parameter-name annotations: extract call sites,
//! annotate a file from recorded hovers, parse signature text, toggle.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use inlay_annotate::oracle::StaticOracle;
use inlay_annotate::pipeline::{Document, annotate_document};
use inlay_core::config::InlayConfig;
use inlay_core::model::CallSiteGroup;
use inlay_parser::calls::{ExtractOptions, extract_call_sites};
use inlay_parser::languages::Language;
use inlay_parser::signature::parse_signature;
use rayon::prelude::*;
use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "inlay-params", about = "Inline parameter-name annotations")]
struct Cli {
    /// Project root holding .inlay/config.toml (defaults to current directory)
    #[arg(short, long, global = true)]
    project: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the call sites found in files or directories as JSON
    Extract {
        /// Files or directories to scan
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// Treat documents as tab-indented
        #[arg(long)]
        tabs: bool,
    },

    /// Annotate one file using recorded hover answers
    Annotate {
        /// Source file to annotate
        file: PathBuf,

        /// JSON hover fixture: [{"line", "character", "contents": [..]}]
        #[arg(long)]
        hovers: PathBuf,

        /// Treat the document as tab-indented
        #[arg(long)]
        tabs: bool,
    },

    /// Parse hover text into parameter names
    Signature {
        /// Language id (typescript, php, lua, java, ...)
        #[arg(short, long)]
        lang: String,

        /// Hover text describing the callee
        text: String,
    },

    /// Flip the enabled switch in .inlay/config.toml
    Toggle,
}

#[derive(Serialize)]
struct FileCallSites {
    file: PathBuf,
    language: Language,
    call_sites: Vec<CallSiteGroup>,
}

fn get_project_root(cli: &Cli) -> Result<PathBuf> {
    match &cli.project {
        Some(p) => Ok(p.clone()),
        None => std::env::current_dir().context("failed to get current directory"),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let project_root = get_project_root(&cli)?;

    match cli.command {
        Commands::Extract { paths, tabs } => cmd_extract(&project_root, &paths, tabs),
        Commands::Annotate { file, hovers, tabs } => {
            cmd_annotate(&project_root, &file, &hovers, tabs)
        }
        Commands::Signature { lang, text } => cmd_signature(&lang, &text),
        Commands::Toggle => cmd_toggle(&project_root),
    }
}

/// Collect supported source files under `paths`, honouring ignore files.
fn collect_source_files(paths: &[PathBuf]) -> Vec<(PathBuf, Language)> {
    let mut files = Vec::new();
    for root in paths {
        let walker = ignore::WalkBuilder::new(root)
            .hidden(true)
            .git_ignore(true)
            .add_custom_ignore_filename(".inlayignore")
            .build();
        for entry in walker.flatten() {
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            if let Some(language) = Language::from_path(path) {
                files.push((path.to_path_buf(), language));
            } else if path == root.as_path() {
                tracing::warn!("skipping {}: unsupported file type", path.display());
            }
        }
    }
    files.sort_by(|a, b| a.0.cmp(&b.0));
    files.dedup_by(|a, b| a.0 == b.0);
    files
}

fn cmd_extract(project_root: &Path, paths: &[PathBuf], tabs: bool) -> Result<()> {
    let config = InlayConfig::load(project_root)?;
    let options = ExtractOptions {
        hide_single_parameters: config.annotations.hide_single_parameters,
        tab_indented: tabs,
    };

    let files = collect_source_files(paths);
    if files.is_empty() {
        anyhow::bail!("no supported source files found");
    }
    tracing::info!("scanning {} files", files.len());

    let results: Vec<FileCallSites> = files
        .into_par_iter()
        .filter_map(|(file, language)| match std::fs::read_to_string(&file) {
            Ok(source) => Some(FileCallSites {
                call_sites: extract_call_sites(&source, language, &options),
                file,
                language,
            }),
            Err(e) => {
                tracing::warn!("failed to read {}: {}", file.display(), e);
                None
            }
        })
        .collect();

    let total: usize = results.iter().map(|r| r.call_sites.len()).sum();
    tracing::info!("found {} call sites", total);
    println!("{}", serde_json::to_string_pretty(&results)?);
    Ok(())
}

fn cmd_annotate(project_root: &Path, file: &Path, hovers: &Path, tabs: bool) -> Result<()> {
    let config = InlayConfig::load(project_root)?;
    let oracle = StaticOracle::load(hovers)?;
    let mut document = Document::from_path(file)?;
    if tabs {
        document = document.with_tabs();
    }

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;
    let annotations = runtime.block_on(annotate_document(&oracle, &document, &config));

    if !config.enabled {
        let config_path = InlayConfig::path(project_root);
        tracing::info!("annotations are disabled in {}", config_path.display());
    }
    for annotation in &annotations {
        println!("{}\t{}", annotation.span.start, annotation.label);
    }
    Ok(())
}

fn cmd_signature(lang: &str, text: &str) -> Result<()> {
    let language = Language::from_language_id(lang)
        .or_else(|| Language::from_extension(lang))
        .ok_or_else(|| anyhow::anyhow!("unsupported language: {}", lang))?;
    let Some(signature) = parse_signature(language, text) else {
        anyhow::bail!("no parameter list found in the given text");
    };
    println!("{}", serde_json::to_string_pretty(&signature)?);
    Ok(())
}

fn cmd_toggle(project_root: &Path) -> Result<()> {
    let mut config = InlayConfig::load(project_root)?;
    let enabled = config.toggle_enabled();
    config.save(project_root)?;
    println!(
        "Inline parameter annotations {}",
        if enabled { "enabled" } else { "disabled" }
    );
    Ok(())
}
