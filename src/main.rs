//! docmeta — resolve endpoint metadata from tokenized doc blocks and render it.
//!
//! Two modes:
//!
//! - **stdin mode**: `docmeta < endpoints.json`
//! - **file mode**: `docmeta -o docs/api -f markdown api/*.json`

use anyhow::{Context, Result};
use clap::Parser;
use docmeta::config::{self, Config};
use docmeta::filter::{self, Filter};
use docmeta::input;
use docmeta::model::Document;
use docmeta::render::{self, Renderer};
use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "docmeta",
    about = "Resolve API endpoint metadata from parsed doc blocks"
)]
struct Cli {
    /// Input JSON files (glob patterns and directories supported). If omitted, reads from stdin.
    files: Vec<String>,

    /// Output directory (required when files are given)
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Output format: json (default), markdown
    #[arg(short = 'f', long, default_value = "json")]
    format: String,

    /// Group for endpoints without a @group tag. Overrides the config file.
    #[arg(long, env = "DOCMETA_DEFAULT_GROUP")]
    default_group: Option<String>,

    /// Config file (defaults to .docmetarc.json in the current directory)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Filter endpoints by flag. Prefix with ! to exclude.
    /// Can be specified multiple times. E.g. --filter authenticated --filter '!superadmin'
    #[arg(long)]
    filter: Vec<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let cwd = std::env::current_dir().context("failed to read current directory")?;
    let config = config::load_config(cli.config.as_deref(), &cwd)?
        .with_default_group(cli.default_group.as_deref())
        .context("invalid --default-group")?;
    let filters = filter::parse_filters(&cli.filter)?;
    let renderer = render::create_renderer(&cli.format)?;

    if cli.files.is_empty() {
        return stdin_mode(&config, &filters, renderer.as_ref());
    }

    file_mode(&cli, &config, &filters, renderer.as_ref())
}

/// stdin mode: read endpoint JSON from stdin, write rendered output to stdout.
fn stdin_mode(config: &Config, filters: &[Filter], renderer: &dyn Renderer) -> Result<()> {
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("failed to read stdin")?;

    let doc = process(&input, config, filters)?;
    print!("{}", renderer.render(&doc)?);
    Ok(())
}

/// file mode: resolve each input file and write one output file per input.
fn file_mode(cli: &Cli, config: &Config, filters: &[Filter], renderer: &dyn Renderer) -> Result<()> {
    let output_dir = cli
        .output
        .as_deref()
        .context("--output is required when files are given")?;

    fs::create_dir_all(output_dir)
        .with_context(|| format!("failed to create output directory: {}", output_dir.display()))?;

    let input_files = expand_globs(&cli.files)?;
    let ext = renderer.file_extension();

    for path in &input_files {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!("skipping {}: {}", path.display(), e);
                continue;
            }
        };
        let doc = match process(&content, config, filters) {
            Ok(doc) => doc,
            Err(e) => {
                tracing::warn!("skipping {}: {:#}", path.display(), e);
                continue;
            }
        };
        if doc.endpoints.is_empty() {
            tracing::info!("no endpoints left in {}", path.display());
            continue;
        }

        let out_path = output_dir.join(format!("{}.{}", derive_output_name(path), ext));
        fs::write(&out_path, renderer.render(&doc)?)
            .with_context(|| format!("failed to write {}", out_path.display()))?;
        tracing::debug!(endpoints = doc.endpoints.len(), "wrote {}", out_path.display());
    }

    Ok(())
}

fn process(content: &str, config: &Config, filters: &[Filter]) -> Result<Document> {
    let sources = input::load(content)?;
    let mut doc = input::resolve_all(&sources, &config.default_group);
    filter::filter_endpoints(&mut doc, filters);
    Ok(doc)
}

/// Turn the positional arguments into a sorted, de-duplicated file list.
///
/// Each argument may be a file, a directory (its `*.json` children, not
/// recursive), or a glob pattern.
fn expand_globs(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for pattern in patterns {
        let path = Path::new(pattern);
        let found = if path.is_file() {
            vec![path.to_path_buf()]
        } else if path.is_dir() {
            json_files_in(path)?
        } else {
            glob_files(pattern)?
        };
        if found.is_empty() {
            tracing::warn!("no files matched: {}", pattern);
        }
        files.extend(found);
    }
    files.sort();
    files.dedup();
    Ok(files)
}

fn json_files_in(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?;
    Ok(entries
        .flatten()
        .map(|entry| entry.path())
        .filter(|p| p.is_file() && p.extension().is_some_and(|ext| ext == "json"))
        .collect())
}

fn glob_files(pattern: &str) -> Result<Vec<PathBuf>> {
    Ok(glob::glob(pattern)
        .with_context(|| format!("invalid glob pattern: {}", pattern))?
        .filter_map(|r| r.ok())
        .filter(|p| p.is_file())
        .collect())
}

/// "api/cars.json" → "cars"
fn derive_output_name(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string_lossy().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_name_from_json() {
        assert_eq!(derive_output_name(Path::new("api/cars.json")), "cars");
        assert_eq!(derive_output_name(Path::new("cars.json")), "cars");
    }

    #[test]
    fn output_name_no_extension() {
        assert_eq!(derive_output_name(Path::new("endpoints")), "endpoints");
    }

    #[test]
    fn expand_directory_picks_json_only() {
        let dir = tempfile::TempDir::new().unwrap();
        fs::write(dir.path().join("b.json"), "[]").unwrap();
        fs::write(dir.path().join("a.json"), "[]").unwrap();
        fs::write(dir.path().join("notes.txt"), "").unwrap();

        let files = expand_globs(&[dir.path().to_string_lossy().to_string()]).unwrap();
        let names: Vec<String> = files.iter().map(|p| derive_output_name(p)).collect();
        assert_eq!(names, ["a", "b"]);
    }

    #[test]
    fn expand_dedups_overlapping_patterns() {
        let dir = tempfile::TempDir::new().unwrap();
        let file = dir.path().join("cars.json");
        fs::write(&file, "[]").unwrap();

        let patterns = [
            file.to_string_lossy().to_string(),
            format!("{}/*.json", dir.path().display()),
        ];
        let files = expand_globs(&patterns).unwrap();
        assert_eq!(files, [file]);
    }
}
