//! Documentation page of one package or class.
//!
//! Built in four passes over the model: summary, entities overview table,
//! long description, then one detail section per locally defined entity.

use crate::links::{entity_anchor, Links};
use crate::markup;
use crate::model::*;
use crate::tree::TreeBuilder;

pub fn build<B: TreeBuilder>(b: &mut B, root: B::Handle, page: &DocumentationPage, links: &Links) {
    tracing::debug!(label = %page.label, categories = page.entities.len(), "building documentation page");

    build_summary(b, root, page, links);
    build_overview(b, root, page, links);

    let header = b.append_element(root, "h2");
    b.set_attribute(header, "id", "Description");
    b.append_text(header, "Description");
    markup::render(b, root, &page.description, links);

    for entity in page.entities.iter().flat_map(|set| set.entities.iter()) {
        if let Placement::Source { line, column, ref src } = entity.placement {
            build_entity(b, root, entity, (line, column), src.as_deref(), links);
        }
    }
}

fn build_summary<B: TreeBuilder>(
    b: &mut B,
    root: B::Handle,
    page: &DocumentationPage,
    links: &Links,
) {
    let header = b.append_element(root, "h1");
    b.append_text(header, &page.label);
    markup::render(b, root, &page.summary, links);
    b.append_link(root, "#Description", "More...");
}

fn build_overview<B: TreeBuilder>(
    b: &mut B,
    root: B::Handle,
    page: &DocumentationPage,
    links: &Links,
) {
    let header = b.append_element(root, "h2");
    b.append_text(header, "Entities");

    for set in &page.entities {
        let header = b.append_element(root, "h3");
        b.append_text(header, &set.label);

        let table = b.append_element(root, "table");
        b.set_attribute(table, "class", "entities");
        b.set_attribute(table, "cellpadding", "0");
        b.set_attribute(table, "cellspacing", "0");
        let body = b.append_element(table, "tbody");

        for entity in &set.entities {
            let row = b.append_element(body, "tr");
            let cell = b.append_element(row, "th");
            let href = match entity.placement {
                Placement::External { ref href } => href.clone(),
                Placement::Source { line, column, .. } => {
                    format!("#{}", entity_anchor(line, column))
                }
            };
            b.append_link(cell, &href, &entity.label);
            let cell = b.append_element(row, "td");
            markup::render(b, cell, &entity.summary, links);
        }
    }
}

fn build_entity<B: TreeBuilder>(
    b: &mut B,
    root: B::Handle,
    entity: &Entity,
    (line, column): (u32, u32),
    src: Option<&str>,
    links: &Links,
) {
    let header = b.append_element(root, "h3");
    b.set_attribute(header, "id", &entity_anchor(line, column));
    b.append_text(header, &entity.label);
    if let Some(src) = src {
        let sup = b.append_element(header, "sup");
        b.set_attribute(sup, "class", "srcHref");
        b.append_link(sup, &links.source_line(src, line), " [source]");
    }

    markup::render(b, root, &entity.description, links);

    if let Some(ref inherits) = entity.inherits {
        let paragraph = b.append_element(root, "p");
        b.append_text(paragraph, "Inherits ");
        for (i, parent) in inherits.iter().enumerate() {
            if i != 0 {
                b.append_text(paragraph, ", ");
            }
            match parent.doc_href {
                Some(ref href) => {
                    frame_link(b, paragraph, href, &parent.label, links);
                }
                None => b.append_text(paragraph, &parent.label),
            }
        }
    }

    if let Some(ref inherited) = entity.inherited {
        let paragraph = b.append_element(root, "p");
        b.append_text(paragraph, "Inherited by ");
        for (i, child) in inherited.iter().enumerate() {
            if i != 0 {
                b.append_text(paragraph, ", ");
            }
            type_link(b, paragraph, child, links);
        }
    }

    build_definitions(b, root, entity, links);
}

/// Parameters, return value, exceptions, fields and literals share one
/// definition list, in that order. The list is only emitted when at least
/// one group is present.
fn build_definitions<B: TreeBuilder>(b: &mut B, root: B::Handle, entity: &Entity, links: &Links) {
    let has_any = entity.parameters.is_some()
        || entity.returns.is_some()
        || entity.exceptions.is_some()
        || entity.fields.is_some()
        || entity.literals.is_some();
    if !has_any {
        return;
    }

    if entity.parameters.is_some() && entity.fields.is_some() {
        tracing::warn!(
            entity = %entity.label,
            "entity has both parameters and fields; listing both"
        );
    }

    let list = b.create_element("dl");

    for parameter in entity.parameters.iter().flatten() {
        member_entry(b, list, parameter, links);
    }

    if let Some(ref returns) = entity.returns {
        let term = b.append_element(list, "dt");
        b.append_text(term, "Return value");
        if let Some(ref ty) = returns.ty {
            b.append_text(term, " of type ");
            type_link(b, term, ty, links);
        }
        let description = b.append_element(list, "dd");
        markup::render(b, description, &returns.description, links);
    }

    if let Some(ref exceptions) = entity.exceptions {
        let term = b.append_element(list, "dt");
        b.append_text(term, "Exceptions");
        let description = b.append_element(list, "dd");
        markup::render(b, description, &exceptions.description, links);
    }

    for field in entity.fields.iter().flatten() {
        member_entry(b, list, field, links);
    }

    for literal in entity.literals.iter().flatten() {
        let term = b.append_element(list, "dt");
        b.set_attribute(term, "id", &entity_anchor(literal.line, literal.column));
        b.append_text(term, &literal.label);
        let description = b.append_element(list, "dd");
        markup::render(b, description, &literal.description, links);
    }

    b.append_child(root, list);
}

fn member_entry<B: TreeBuilder>(b: &mut B, list: B::Handle, member: &Member, links: &Links) {
    let term = b.append_element(list, "dt");
    b.set_attribute(term, "id", &entity_anchor(member.line, member.column));
    b.append_text(term, &member.label);
    b.append_text(term, " of type ");
    type_link(b, term, &member.ty, links);
    let description = b.append_element(list, "dd");
    markup::render(b, description, &member.description, links);
}

/// A type reference opening in the content frame. Without a documentation
/// link the label is written as plain text.
fn type_link<B: TreeBuilder>(b: &mut B, parent: B::Handle, ty: &TypeRef, links: &Links) {
    match ty.doc_href {
        Some(ref href) => {
            frame_link(b, parent, href, &ty.label, links);
        }
        None => b.append_text(parent, &ty.label),
    }
}

fn frame_link<B: TreeBuilder>(
    b: &mut B,
    parent: B::Handle,
    href: &str,
    text: &str,
    links: &Links,
) -> B::Handle {
    let a = b.append_link(parent, &links.resolve(href), text);
    b.set_attribute(a, "target", &links.frame_target);
    a
}
