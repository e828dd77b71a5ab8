//! Inheritance tree: one nested list mirroring the hierarchy.

use crate::model::InheritanceEntry;
use crate::tree::TreeBuilder;

/// Append the whole inheritance tree to `root` as nested `ul` lists.
///
/// Links are written as given; the inheritance page sits at the
/// documentation root. The hierarchy is assumed acyclic.
pub fn build<B: TreeBuilder>(b: &mut B, root: B::Handle, entries: &[InheritanceEntry]) {
    tracing::debug!(roots = entries.len(), "building inheritance tree");
    let list = b.append_element(root, "ul");
    build_level(b, list, entries);
}

fn build_level<B: TreeBuilder>(b: &mut B, list: B::Handle, entries: &[InheritanceEntry]) {
    for entry in entries {
        let item = b.append_element(list, "li");
        b.append_link(item, &entry.doc_href, &entry.label);
        if let Some(ref inherited) = entry.inherited {
            let sublist = b.append_element(item, "ul");
            build_level(b, sublist, inherited);
        }
    }
}
