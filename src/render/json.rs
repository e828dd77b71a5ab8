//! JSON renderer — the built tree as a structured document object.
//!
//! Elements become `{"tag", "attributes", "children"}` objects and text
//! nodes become plain strings. Useful for tooling and for diffing pages.

use crate::page::Page;
use crate::render::Renderer;
use crate::tree::{NodeId, Tree, TreeNode};
use anyhow::{Context, Result};
use serde_json::{json, Map, Value};

pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render(&self, page: &Page) -> Result<String> {
        let doc = json!({
            "title": page.title,
            "body": node_value(&page.tree, page.tree.root()),
        });
        let mut out = serde_json::to_string_pretty(&doc)
            .with_context(|| format!("failed to serialize page: {}", page.title))?;
        out.push('\n');
        Ok(out)
    }

    fn file_extension(&self) -> &str {
        "json"
    }
}

fn node_value(tree: &Tree, id: NodeId) -> Value {
    match tree.node(id) {
        None => Value::Null,
        Some(TreeNode::Text(text)) => Value::String(text.clone()),
        Some(TreeNode::Element(element)) => {
            let mut object = Map::new();
            object.insert("tag".to_string(), Value::String(element.tag.to_string()));
            if !element.attributes.is_empty() {
                let attributes: Map<String, Value> = element
                    .attributes
                    .iter()
                    .map(|(name, value)| (name.to_string(), Value::String(value.clone())))
                    .collect();
                object.insert("attributes".to_string(), Value::Object(attributes));
            }
            if !element.children.is_empty() {
                let children = element
                    .children
                    .iter()
                    .map(|&child| node_value(tree, child))
                    .collect();
                object.insert("children".to_string(), Value::Array(children));
            }
            Value::Object(object)
        }
    }
}
