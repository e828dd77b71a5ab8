//! Renderer module — trait-based format dispatch over built pages.

pub mod html;
pub mod json;

use crate::page::Page;
use anyhow::{anyhow, Result};

/// Trait for serializing a built page into a specific output format.
pub trait Renderer {
    fn render(&self, page: &Page) -> Result<String>;
    fn file_extension(&self) -> &str;
}

/// Create a renderer for the given format name.
pub fn create_renderer(format: &str, stylesheet: Option<&str>) -> Result<Box<dyn Renderer>> {
    match format {
        "html" => Ok(Box::new(html::HtmlRenderer {
            stylesheet: stylesheet.map(str::to_string),
        })),
        "json" => Ok(Box::new(json::JsonRenderer)),
        _ => Err(anyhow!("unknown format: {}. Use html or json", format)),
    }
}
