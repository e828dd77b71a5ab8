//! Link conventions shared by every page builder.
//!
//! Pages live one directory below the documentation root, so links into
//! other pages are prefixed with a parent-directory base. Navigation links
//! open in the content frame of the main page.

/// In-page anchor of a source listing line: `L<line>`.
pub fn line_anchor(line: u32) -> String {
    format!("L{}", line)
}

/// In-page anchor of an entity, parameter, field or literal: `L<line>C<column>`.
pub fn entity_anchor(line: u32, column: u32) -> String {
    format!("L{}C{}", line, column)
}

/// Resolves cross-page links and names the content frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Links {
    pub base: String,
    pub frame_target: String,
}

impl Default for Links {
    fn default() -> Self {
        Self {
            base: "../".to_string(),
            frame_target: "contentView".to_string(),
        }
    }
}

impl Links {
    /// Resolve `href` against the documentation root.
    pub fn resolve(&self, href: &str) -> String {
        format!("{}{}", self.base, href)
    }

    /// Link to a line of a rendered source file.
    pub fn source_line(&self, src: &str, line: u32) -> String {
        format!("{}#{}", self.resolve(src), line_anchor(line))
    }
}
