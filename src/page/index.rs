//! Main index page: project pane, menu, navigation lists and content frame.
//!
//! The navigation lists are all built up front and hidden; selecting a menu
//! entry ([`Navigation::show`]) only toggles visibility. Output is static, so
//! each view is written as its own copy of the page ([`IndexPages`]) and the
//! menu entries link between those copies.

use crate::links::Links;
use crate::model::{IndexEntry, Snapshot};
use crate::tree::TreeBuilder;
use serde::Deserialize;

const HIDDEN: &str = "display: none";
const VISIBLE: &str = "display: block";

/// Which navigation list the table of contents shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TocView {
    #[default]
    Packages,
    Entities,
    Inheritance,
    Sources,
}

impl TocView {
    pub const ALL: [TocView; 4] = [
        TocView::Packages,
        TocView::Entities,
        TocView::Inheritance,
        TocView::Sources,
    ];

    fn menu_label(self) -> &'static str {
        match self {
            TocView::Packages => "Packages and Classes",
            TocView::Entities => "Entities Index",
            TocView::Inheritance => "Inheritance Tree",
            TocView::Sources => "Source Files",
        }
    }

    fn menu_id(self) -> &'static str {
        match self {
            TocView::Packages => "packagesAndClassesMenu",
            TocView::Entities => "entitiesMenu",
            TocView::Inheritance => "inheritanceMenu",
            TocView::Sources => "sourcesMenu",
        }
    }

    /// Page loaded into the content frame when the view is selected.
    fn content_src(self) -> &'static str {
        match self {
            TocView::Inheritance => INHERITANCE_PAGE,
            _ => "blank.html",
        }
    }

    fn slug(self) -> &'static str {
        match self {
            TocView::Packages => "packages",
            TocView::Entities => "entities",
            TocView::Inheritance => "inheritance",
            TocView::Sources => "sources",
        }
    }
}

const INHERITANCE_PAGE: &str = "inheritance_index.html";

/// File names of the per-view copies of the main page.
///
/// The initial view keeps the bare stem (`index.html`); every other view gets
/// `<stem>-<view>` (`index-sources.html`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexPages {
    pub stem: String,
    pub extension: String,
    pub initial: TocView,
}

impl Default for IndexPages {
    fn default() -> Self {
        Self {
            stem: "index".to_string(),
            extension: "html".to_string(),
            initial: TocView::default(),
        }
    }
}

impl IndexPages {
    pub fn stem_for(&self, view: TocView) -> String {
        if view == self.initial {
            self.stem.clone()
        } else {
            format!("{}-{}", self.stem, view.slug())
        }
    }

    /// Link from one copy of the main page to the copy showing `view`.
    pub fn href(&self, view: TocView) -> String {
        format!("{}.{}", self.stem_for(view), self.extension)
    }
}

/// Handles to the toggled parts of a built index page.
#[derive(Debug, Clone)]
pub struct Navigation<H> {
    /// Every child of the table-of-contents container.
    toc_children: Vec<H>,
    lists: Vec<(TocView, H)>,
    menu_items: Vec<(TocView, H)>,
    content: H,
}

impl<H: Copy> Navigation<H> {
    /// Select `view`: hide the whole table of contents, unmark every menu
    /// item, then show the view's list and mark its menu item.
    pub fn show<B: TreeBuilder<Handle = H>>(&self, b: &mut B, view: TocView) {
        for &child in &self.toc_children {
            b.set_attribute(child, "style", HIDDEN);
        }
        for &(_, item) in &self.menu_items {
            b.remove_attribute(item, "class");
        }

        b.set_attribute(self.content, "src", view.content_src());
        if let Some(&(_, list)) = self.lists.iter().find(|(v, _)| *v == view) {
            b.set_attribute(list, "style", VISIBLE);
        }
        if let Some(&(_, item)) = self.menu_items.iter().find(|(v, _)| *v == view) {
            b.set_attribute(item, "class", "current");
        }
    }
}

/// Build the copy of the main page that shows `view`.
pub fn build<B: TreeBuilder>(
    b: &mut B,
    root: B::Handle,
    snapshot: &Snapshot,
    links: &Links,
    pages: &IndexPages,
    view: TocView,
) -> Navigation<B::Handle> {
    tracing::debug!(?view, "building index page");

    if let Some(ref index) = snapshot.index {
        let info = b.append_element(root, "div");
        b.set_attribute(info, "id", "projectInfo");
        let name = b.append_element(info, "span");
        b.set_attribute(name, "id", "projectName");
        b.append_text(name, &index.project);
        b.append_text(info, " ");
        let timestamp = b.append_element(info, "span");
        b.set_attribute(timestamp, "id", "documentationTimestamp");
        b.append_text(timestamp, &index.timestamp);
    }

    let menu_items = build_menu(b, root, pages);

    let toc = b.append_element(root, "div");
    b.set_attribute(toc, "id", "tocView");

    let packages = build_list(b, toc, &snapshot.documentation_index, "packagesAndClasses", links);
    let entities = build_list(b, toc, &snapshot.entities_categories_index, "entities", links);

    let header = b.append_element(toc, "h1");
    let a = b.append_link(header, INHERITANCE_PAGE, "Inheritance Tree");
    b.set_attribute(a, "target", &links.frame_target);

    let sources = build_list(b, toc, &snapshot.source_file_index, "sources", links);

    let content = b.append_element(root, "iframe");
    b.set_attribute(content, "id", &links.frame_target);
    b.set_attribute(content, "name", &links.frame_target);

    let navigation = Navigation {
        toc_children: vec![packages, entities, header, sources],
        lists: vec![
            (TocView::Packages, packages),
            (TocView::Entities, entities),
            (TocView::Sources, sources),
        ],
        menu_items,
        content,
    };
    navigation.show(b, view);
    navigation
}

fn build_menu<B: TreeBuilder>(
    b: &mut B,
    root: B::Handle,
    pages: &IndexPages,
) -> Vec<(TocView, B::Handle)> {
    let menu = b.append_element(root, "div");
    b.set_attribute(menu, "id", "tocMenu");
    let list = b.append_element(menu, "ul");

    TocView::ALL
        .iter()
        .map(|&view| {
            let item = b.append_element(list, "li");
            b.set_attribute(item, "id", view.menu_id());
            b.append_link(item, &pages.href(view), view.menu_label());
            (view, item)
        })
        .collect()
}

/// Flat `li > a` list opening entries in the content frame, initially hidden.
pub fn build_list<B: TreeBuilder>(
    b: &mut B,
    parent: B::Handle,
    entries: &[IndexEntry],
    id: &'static str,
    links: &Links,
) -> B::Handle {
    let list = b.append_element(parent, "ul");
    for entry in entries {
        let item = b.append_element(list, "li");
        let a = b.append_link(item, &entry.link, &entry.label);
        b.set_attribute(a, "target", &links.frame_target);
    }
    b.set_attribute(list, "style", HIDDEN);
    b.set_attribute(list, "id", id);
    list
}
