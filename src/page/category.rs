//! Letter-grouped entities page.
//!
//! The input is expected to be sorted by label already; a new group heading
//! is emitted whenever the upper-cased first character changes.

use crate::links::Links;
use crate::model::GroupedCategory;
use crate::tree::TreeBuilder;

pub fn build<B: TreeBuilder>(b: &mut B, root: B::Handle, category: &GroupedCategory, links: &Links) {
    tracing::debug!(label = %category.label, entities = category.entities.len(), "building category page");

    let header = b.append_element(root, "h1");
    b.append_text(header, &category.label);

    let list = b.create_element("dl");
    let mut current: Option<String> = None;

    for entity in &category.entities {
        match group_key(&entity.label) {
            Some(key) if current.as_deref() != Some(key.as_str()) => {
                let heading = b.append_element(list, "dt");
                b.append_text(heading, &key);
                current = Some(key);
            }
            Some(_) => {}
            None => tracing::warn!("entity with empty label listed under the current group"),
        }

        let item = b.append_element(list, "dd");
        b.append_link(item, &links.resolve(&entity.doc_href), &entity.label);
        b.append_text(item, " from ");
        b.append_link(item, &links.resolve(&entity.src_href), &entity.declared);
    }

    b.append_child(root, list);
}

/// Upper-cased first character of `label`.
fn group_key(label: &str) -> Option<String> {
    label.chars().next().map(|c| c.to_uppercase().collect())
}
