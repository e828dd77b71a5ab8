//! Data model for a documentation snapshot — read-only input to the page builders.
//!
//! Field names follow the JSON written by the documentation extractor, so the
//! serde renames below are part of the input format.

use serde::Deserialize;

/// One markup node. The set of kinds is closed: an unknown `kind` fails
/// deserialization instead of being silently dropped at render time.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Node {
    #[serde(rename = "code")]
    CodeBlock {
        #[serde(default)]
        children: Vec<Line>,
    },
    Paragraph {
        #[serde(default)]
        children: Vec<Node>,
    },
    #[serde(rename = "ul")]
    List {
        #[serde(default)]
        children: Vec<Node>,
    },
    #[serde(rename = "li")]
    ListItem {
        #[serde(default)]
        children: Vec<Node>,
    },
    Span(Span),
    Image { src: String },
}

/// A leaf run of text.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Span {
    pub text: String,
    #[serde(default)]
    pub href: Option<String>,
    #[serde(default, rename = "cssClass")]
    pub css_class: Option<String>,
}

/// One line of a code block. `number` is 1-based and used verbatim.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Line {
    pub number: u32,
    #[serde(default)]
    pub children: Vec<Node>,
}

/// Where an entity lives: in the documented sources, or on another page.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Placement {
    /// Defined elsewhere; only rendered as a cross-reference.
    External { href: String },
    Source {
        line: u32,
        column: u32,
        /// Link to the rendered source file, relative to the docs root.
        #[serde(default)]
        src: Option<String>,
    },
}

/// A reference to another documented type.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TypeRef {
    pub label: String,
    #[serde(default, rename = "docHref")]
    pub doc_href: Option<String>,
}

/// A parameter of a subprogram or a field of a record.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Member {
    pub label: String,
    pub line: u32,
    pub column: u32,
    #[serde(rename = "type")]
    pub ty: TypeRef,
    #[serde(default)]
    pub description: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Returns {
    #[serde(default, rename = "type")]
    pub ty: Option<TypeRef>,
    #[serde(default)]
    pub description: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Exceptions {
    #[serde(default)]
    pub description: Vec<Node>,
}

/// An enumeration literal.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Literal {
    pub label: String,
    pub line: u32,
    pub column: u32,
    #[serde(default)]
    pub description: Vec<Node>,
}

/// One documented program entity.
///
/// The optional groups keep presence semantics: `Some(vec![])` still renders
/// the group header, `None` skips it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Entity {
    pub label: String,
    #[serde(flatten)]
    pub placement: Placement,
    #[serde(default)]
    pub summary: Vec<Node>,
    #[serde(default)]
    pub description: Vec<Node>,
    #[serde(default)]
    pub inherits: Option<Vec<TypeRef>>,
    #[serde(default)]
    pub inherited: Option<Vec<TypeRef>>,
    #[serde(default)]
    pub parameters: Option<Vec<Member>>,
    #[serde(default)]
    pub returns: Option<Returns>,
    #[serde(default)]
    pub exceptions: Option<Exceptions>,
    #[serde(default)]
    pub fields: Option<Vec<Member>>,
    #[serde(default)]
    pub literals: Option<Vec<Literal>>,
}

/// Entities of one kind (types, subprograms, ...) within a page.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EntityCategory {
    pub label: String,
    #[serde(default)]
    pub entities: Vec<Entity>,
}

/// The documentation page of one package or class.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DocumentationPage {
    pub label: String,
    #[serde(default)]
    pub summary: Vec<Node>,
    #[serde(default)]
    pub entities: Vec<EntityCategory>,
    #[serde(default)]
    pub description: Vec<Node>,
}

/// A navigation entry. Each index flavor spells the link key differently.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct IndexEntry {
    pub label: String,
    #[serde(alias = "file", alias = "href", alias = "srcHref")]
    pub link: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct InheritanceEntry {
    pub label: String,
    #[serde(rename = "docHref")]
    pub doc_href: String,
    #[serde(default)]
    pub inherited: Option<Vec<InheritanceEntry>>,
}

/// Entry of a letter-grouped category page.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GroupedEntity {
    pub label: String,
    #[serde(rename = "docHref")]
    pub doc_href: String,
    #[serde(rename = "srcHref")]
    pub src_href: String,
    /// Label of the declaring unit.
    pub declared: String,
}

/// Entities of one category, pre-sorted by label.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GroupedCategory {
    pub label: String,
    #[serde(default)]
    pub entities: Vec<GroupedEntity>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SourceFile {
    pub label: String,
    #[serde(flatten)]
    pub root: Node,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProjectIndex {
    pub project: String,
    pub timestamp: String,
}

/// Complete input of one render. Every section is optional; a page kind
/// needs only its own sections.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Snapshot {
    pub index: Option<ProjectIndex>,
    pub documentation: Option<DocumentationPage>,
    pub documentation_index: Vec<IndexEntry>,
    pub entities_categories_index: Vec<IndexEntry>,
    pub source_file_index: Vec<IndexEntry>,
    pub inheritance_index: Option<Vec<InheritanceEntry>>,
    pub entities_category: Option<GroupedCategory>,
    pub source_file: Option<SourceFile>,
}

impl Snapshot {
    pub fn from_json(input: &str) -> serde_json::Result<Self> {
        serde_json::from_str(input)
    }
}
