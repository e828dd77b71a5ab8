//! Markup renderer — turns documentation nodes into output elements.
//!
//! One output element per input node, in input order. Containers recurse;
//! spans and images are leaves.

use crate::links::{line_anchor, Links};
use crate::model::{Line, Node, Span};
use crate::tree::TreeBuilder;

/// Append the rendering of `nodes` to `parent`.
pub fn render<B: TreeBuilder>(b: &mut B, parent: B::Handle, nodes: &[Node], links: &Links) {
    for node in nodes {
        let element = match node {
            Node::CodeBlock { children } => render_code(b, children, links),
            Node::Paragraph { children } => container(b, "p", children, links),
            Node::List { children } => container(b, "ul", children, links),
            Node::ListItem { children } => container(b, "li", children, links),
            Node::Span(span) => render_span(b, span, links),
            Node::Image { src } => {
                let img = b.create_element("img");
                b.set_attribute(img, "src", src);
                img
            }
        };
        b.append_child(parent, element);
    }
}

fn container<B: TreeBuilder>(
    b: &mut B,
    tag: &'static str,
    children: &[Node],
    links: &Links,
) -> B::Handle {
    let element = b.create_element(tag);
    render(b, element, children, links);
    element
}

/// Code block: one row per line, the number cell doubling as the line anchor.
fn render_code<B: TreeBuilder>(b: &mut B, lines: &[Line], links: &Links) -> B::Handle {
    let table = b.create_element("table");
    b.set_attribute(table, "class", "code");
    b.set_attribute(table, "cellpadding", "0");
    b.set_attribute(table, "cellspacing", "0");
    let body = b.append_element(table, "tbody");

    for line in lines {
        let row = b.append_element(body, "tr");
        let number = b.append_element(row, "th");
        b.set_attribute(number, "id", &line_anchor(line.number));
        b.append_text(number, &line.number.to_string());
        let cell = b.append_element(row, "td");
        render(b, cell, &line.children, links);
    }

    table
}

fn render_span<B: TreeBuilder>(b: &mut B, span: &Span, links: &Links) -> B::Handle {
    let element = b.create_element("span");
    match span.href {
        Some(ref href) => {
            b.append_link(element, &links.resolve(href), &span.text);
        }
        None => b.append_text(element, &span.text),
    }
    if let Some(ref class) = span.css_class {
        b.set_attribute(element, "class", class);
    }
    element
}
