//! Source file listing page.

use crate::links::Links;
use crate::markup;
use crate::model::SourceFile;
use crate::tree::TreeBuilder;

pub fn build<B: TreeBuilder>(b: &mut B, root: B::Handle, file: &SourceFile, links: &Links) {
    tracing::debug!(label = %file.label, "building source page");
    let header = b.append_element(root, "h1");
    b.append_text(header, &file.label);
    markup::render(b, root, std::slice::from_ref(&file.root), links);
}
