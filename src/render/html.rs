//! HTML renderer — standalone HTML page wrapping the built tree.

use crate::page::Page;
use crate::render::Renderer;
use crate::tree::{NodeId, Tree, TreeNode};
use anyhow::Result;

pub struct HtmlRenderer {
    pub stylesheet: Option<String>,
}

/// Elements without a closing tag.
const VOID_TAGS: &[&str] = &["img", "br", "hr", "meta", "link"];

/// Elements followed by a newline, to keep the output diffable.
const BLOCK_TAGS: &[&str] = &[
    "div", "h1", "h2", "h3", "p", "ul", "li", "dl", "dt", "dd", "table", "tr", "iframe",
];

impl Renderer for HtmlRenderer {
    fn render(&self, page: &Page) -> Result<String> {
        let mut out = String::new();

        out.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
        out.push_str("<meta charset=\"utf-8\">\n");
        out.push_str(&format!("<title>{}</title>\n", html_escape(&page.title)));
        if let Some(ref href) = self.stylesheet {
            out.push_str(&format!(
                "<link rel=\"stylesheet\" href=\"{}\">\n",
                attr_escape(href)
            ));
        }
        out.push_str("</head>\n<body>\n");
        write_node(&mut out, &page.tree, page.tree.root());
        out.push_str("</body>\n</html>\n");
        Ok(out)
    }

    fn file_extension(&self) -> &str {
        "html"
    }
}

/// Serialize one node and its descendants.
pub fn write_node(out: &mut String, tree: &Tree, id: NodeId) {
    let element = match tree.node(id) {
        Some(TreeNode::Element(element)) => element,
        Some(TreeNode::Text(text)) => {
            out.push_str(&html_escape(text));
            return;
        }
        None => return,
    };

    out.push('<');
    out.push_str(element.tag);
    for (name, value) in &element.attributes {
        out.push_str(&format!(" {}=\"{}\"", name, attr_escape(value)));
    }
    out.push('>');

    if VOID_TAGS.contains(&element.tag) {
        return;
    }

    for &child in &element.children {
        write_node(out, tree, child);
    }
    out.push_str(&format!("</{}>", element.tag));
    if BLOCK_TAGS.contains(&element.tag) {
        out.push('\n');
    }
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn attr_escape(s: &str) -> String {
    html_escape(s).replace('"', "&quot;")
}
