//! Page assemblers — one builder per page category.

pub mod category;
pub mod documentation;
pub mod index;
pub mod inheritance;
pub mod source;

use crate::links::Links;
use crate::model::Snapshot;
use crate::tree::{Tree, TreeBuilder};
use anyhow::{anyhow, Result};
use index::{IndexPages, TocView};

/// The page categories a snapshot can be rendered as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum PageKind {
    /// Main page with menu and navigation lists
    Index,
    /// Documentation of one package or class
    Documentation,
    /// Letter-grouped entities of one category
    Category,
    /// Inheritance tree
    Inheritance,
    /// Source file listing
    Source,
}

impl PageKind {
    /// Guess the page kind from the sections present in `snapshot`.
    ///
    /// Page-specific sections win over `Index`, which most data files carry.
    pub fn detect(snapshot: &Snapshot) -> Option<Self> {
        if snapshot.documentation.is_some() {
            Some(PageKind::Documentation)
        } else if snapshot.entities_category.is_some() {
            Some(PageKind::Category)
        } else if snapshot.source_file.is_some() {
            Some(PageKind::Source)
        } else if snapshot.inheritance_index.is_some() {
            Some(PageKind::Inheritance)
        } else if snapshot.index.is_some() {
            Some(PageKind::Index)
        } else {
            None
        }
    }
}

/// A built page: its title and the content tree rooted at `div#body`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub title: String,
    pub tree: Tree,
}

/// Render `snapshot` as a page of the given kind.
///
/// `pages` and `view` only matter for [`PageKind::Index`]: they pick the
/// navigation view and name the sibling copies the menu links to.
pub fn build(
    snapshot: &Snapshot,
    kind: PageKind,
    links: &Links,
    pages: &IndexPages,
    view: TocView,
) -> Result<Page> {
    let mut tree = Tree::new("div");
    let root = tree.root();
    tree.set_attribute(root, "id", "body");

    let title = match kind {
        PageKind::Index => {
            let title = snapshot
                .index
                .as_ref()
                .map(|i| i.project.clone())
                .ok_or_else(|| missing("Index"))?;
            index::build(&mut tree, root, snapshot, links, pages, view);
            title
        }
        PageKind::Documentation => {
            let page = snapshot
                .documentation
                .as_ref()
                .ok_or_else(|| missing("Documentation"))?;
            documentation::build(&mut tree, root, page, links);
            page.label.clone()
        }
        PageKind::Category => {
            let category = snapshot
                .entities_category
                .as_ref()
                .ok_or_else(|| missing("EntitiesCategory"))?;
            category::build(&mut tree, root, category, links);
            category.label.clone()
        }
        PageKind::Inheritance => {
            let entries = snapshot
                .inheritance_index
                .as_deref()
                .ok_or_else(|| missing("InheritanceIndex"))?;
            inheritance::build(&mut tree, root, entries);
            "Inheritance Tree".to_string()
        }
        PageKind::Source => {
            let file = snapshot
                .source_file
                .as_ref()
                .ok_or_else(|| missing("SourceFile"))?;
            source::build(&mut tree, root, file, links);
            file.label.clone()
        }
    };

    tracing::debug!(?kind, nodes = tree.node_count(), "page built");
    Ok(Page { title, tree })
}

fn missing(section: &str) -> anyhow::Error {
    anyhow!("snapshot has no {} section", section)
}
