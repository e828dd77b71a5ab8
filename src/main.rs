//! docview — render documentation snapshots into HTML pages.
//!
//! A snapshot is the JSON data an external documentation extractor writes
//! for one page. Supports two modes:
//!
//! - **stdin mode**: `docview < docs/pkg.json > pkg.html`
//! - **file mode**: `docview -o site/docs data/docs/*.json`

mod config;
mod links;
mod logging;
mod markup;
mod model;
mod page;
mod render;
mod tree;

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::links::Links;
use crate::model::Snapshot;
use crate::page::index::{IndexPages, TocView};
use crate::page::PageKind;
use crate::render::Renderer;

#[derive(Parser)]
#[command(
    name = "docview",
    about = "Render documentation snapshots into HTML pages"
)]
struct Cli {
    /// Snapshot files (glob patterns and directories supported). If omitted, reads from stdin.
    files: Vec<String>,

    /// Output directory (required when files are given)
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Output format: html (default), json
    #[arg(short = 'f', long, default_value = "html")]
    format: String,

    /// Page kind to render. Detected from the snapshot sections when omitted.
    #[arg(short = 'p', long, value_enum)]
    page: Option<PageKind>,

    /// Navigation list shown initially on the index page
    #[arg(long, value_enum)]
    view: Option<TocView>,

    /// Config file. Defaults to docview.toml in the working directory, if any.
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

/// Settings shared by every page rendered in one run.
struct Settings {
    links: Links,
    view: TocView,
    page: Option<PageKind>,
    renderer: Box<dyn Renderer>,
}

impl Settings {
    /// Names of the main page copies written for the snapshot `stem`.
    fn index_pages(&self, stem: &str) -> IndexPages {
        IndexPages {
            stem: stem.to_string(),
            extension: self.renderer.file_extension().to_string(),
            initial: self.view,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    let config = match cli.config {
        Some(ref path) => Config::load(path)?,
        None => Config::discover(Path::new("."))?,
    };
    let settings = Settings {
        links: config.links(),
        view: cli.view.unwrap_or(config.page.initial_view),
        page: cli.page,
        renderer: render::create_renderer(&cli.format, config.page.stylesheet.as_deref())?,
    };

    if cli.files.is_empty() {
        return stdin_mode(&settings);
    }

    file_mode(&cli, &settings)
}

/// stdin mode: read one snapshot from stdin, write one page to stdout.
///
/// An index snapshot prints only the copy for the selected view. Its menu
/// links name the sibling copies, which only file mode writes.
fn stdin_mode(settings: &Settings) -> Result<()> {
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("failed to read stdin")?;

    let snapshot = Snapshot::from_json(&input).context("failed to parse snapshot from stdin")?;
    let kind = page_kind(&snapshot, settings)?;
    let pages = settings.index_pages("index");
    print!("{}", render_page(&snapshot, kind, settings, &pages, settings.view)?);
    Ok(())
}

/// file mode: render each snapshot into the output directory.
///
/// Snapshots that fail to parse or lack the requested section are skipped
/// with a warning so one bad data file does not abort a whole site.
fn file_mode(cli: &Cli, settings: &Settings) -> Result<()> {
    let output_dir = cli
        .output
        .as_deref()
        .context("--output is required when files are given")?;

    fs::create_dir_all(output_dir)
        .with_context(|| format!("failed to create output directory: {}", output_dir.display()))?;

    let ext = settings.renderer.file_extension();

    for path in collect_snapshots(&cli.files)? {
        let stem = output_stem(&path.to_string_lossy());
        let rendered = fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))
            .and_then(|content| {
                Snapshot::from_json(&content)
                    .with_context(|| format!("failed to parse {}", path.display()))
            })
            .and_then(|snapshot| render_outputs(&snapshot, settings, &stem));

        let outputs = match rendered {
            Ok(outputs) => outputs,
            Err(e) => {
                tracing::warn!("skipping {}: {:#}", path.display(), e);
                continue;
            }
        };

        for (name, content) in outputs {
            let out_path = output_dir.join(format!("{}.{}", name, ext));
            fs::write(&out_path, content)
                .with_context(|| format!("failed to write {}", out_path.display()))?;
            tracing::info!(output = %out_path.display(), "page written");
        }
    }

    Ok(())
}

/// Every output file of one snapshot as `(stem, content)` pairs.
///
/// An index snapshot yields one copy of the main page per navigation view,
/// so the menu works without scripting. Other kinds yield a single page.
fn render_outputs(
    snapshot: &Snapshot,
    settings: &Settings,
    stem: &str,
) -> Result<Vec<(String, String)>> {
    let kind = page_kind(snapshot, settings)?;
    let pages = settings.index_pages(stem);
    if kind != PageKind::Index {
        let content = render_page(snapshot, kind, settings, &pages, settings.view)?;
        return Ok(vec![(stem.to_string(), content)]);
    }

    TocView::ALL
        .iter()
        .map(|&view| {
            let content = render_page(snapshot, kind, settings, &pages, view)?;
            Ok((pages.stem_for(view), content))
        })
        .collect()
}

fn page_kind(snapshot: &Snapshot, settings: &Settings) -> Result<PageKind> {
    match settings.page {
        Some(kind) => Ok(kind),
        None => PageKind::detect(snapshot).context("snapshot has no renderable section"),
    }
}

fn render_page(
    snapshot: &Snapshot,
    kind: PageKind,
    settings: &Settings,
    pages: &IndexPages,
    view: TocView,
) -> Result<String> {
    let page = page::build(snapshot, kind, &settings.links, pages, view)?;
    settings.renderer.render(&page)
}

fn is_snapshot(path: &Path) -> bool {
    path.is_file() && path.extension().is_some_and(|ext| ext == "json")
}

/// Resolve command-line inputs to snapshot paths.
///
/// An input is a file, a directory (its `*.json` entries, not recursive) or
/// a glob pattern. Sorted and deduplicated so pages are written in a stable
/// order.
fn collect_snapshots(inputs: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for input in inputs {
        let path = Path::new(input);
        if path.is_file() {
            files.push(path.to_path_buf());
        } else if path.is_dir() {
            let entries = fs::read_dir(path)
                .with_context(|| format!("failed to read directory: {}", path.display()))?;
            files.extend(entries.flatten().map(|e| e.path()).filter(|p| is_snapshot(p)));
        } else {
            let before = files.len();
            let matches = glob::glob(input)
                .with_context(|| format!("invalid glob pattern: {}", input))?;
            files.extend(matches.filter_map(|r| r.ok()).filter(|p| p.is_file()));
            if files.len() == before {
                tracing::warn!(pattern = %input, "no snapshot files matched");
            }
        }
    }
    files.sort();
    files.dedup();
    Ok(files)
}

/// Output stem of a snapshot: its file name without `.json`.
/// `data/docs/shapes.drawing.json` → `shapes.drawing`
fn output_stem(source: &str) -> String {
    let file_name = source.rsplit(['/', '\\']).next().unwrap_or(source);
    file_name
        .strip_suffix(".json")
        .unwrap_or(file_name)
        .to_string()
}
