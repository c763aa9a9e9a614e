use crate::dom::{VNode, VirtualDomDocument};
use crate::error::{ParseError, ParseResult};
use html5ever::tendril::TendrilSink;
use html5ever::{local_name, namespace_url, ns, parse_document, parse_fragment, QualName};
use indexmap::IndexMap;
use markup5ever_rcdom::{Handle, NodeData, RcDom};

/// Parse markup as the content of a `<body>` element.
///
/// Tree construction follows the HTML standard: character references are
/// decoded, implied end tags are inserted and misnested markup is repaired the
/// way a browser would.
pub fn parse(source: &str) -> ParseResult<VirtualDomDocument> {
    let context = QualName::new(None, ns!(html), local_name!("body"));
    let dom = parse_fragment(RcDom::default(), Default::default(), context, Vec::new()).one(source);

    let mut document = VirtualDomDocument::new();
    // The fragment parser hangs everything off a synthetic <html> root
    for root in dom.document.children.borrow().iter() {
        for child in root.children.borrow().iter() {
            push_node(&mut document.nodes, child);
        }
    }
    Ok(document)
}

/// Parse a full page template.
///
/// The `<html>`, `<head>` and `<body>` elements are always present afterwards.
/// A template without a single element of its own is rejected.
pub fn parse_template(source: &str) -> ParseResult<VirtualDomDocument> {
    let dom = parse_document(RcDom::default(), Default::default()).one(source);

    let mut document = VirtualDomDocument::new();
    for child in dom.document.children.borrow().iter() {
        match &child.data {
            NodeData::Doctype {
                name,
                public_id,
                system_id,
            } => {
                if document.doctype.is_none() {
                    document.doctype = Some(doctype(name, public_id, system_id));
                }
            }
            _ => push_node(&mut document.nodes, child),
        }
    }

    let has_markup = document
        .document_element()
        .map(|html| html.element_children().any(|section| section.element_children().next().is_some()))
        .unwrap_or(false);
    if !has_markup {
        return Err(ParseError::NoMarkup);
    }
    Ok(document)
}

fn doctype(name: &str, public_id: &str, system_id: &str) -> String {
    let mut out = format!("DOCTYPE {}", name);
    if !public_id.is_empty() {
        out.push_str(&format!(" PUBLIC \"{}\"", public_id));
        if !system_id.is_empty() {
            out.push_str(&format!(" \"{}\"", system_id));
        }
    } else if !system_id.is_empty() {
        out.push_str(&format!(" SYSTEM \"{}\"", system_id));
    }
    out
}

fn push_node(siblings: &mut Vec<VNode>, handle: &Handle) {
    match &handle.data {
        NodeData::Element {
            name,
            attrs,
            template_contents,
            ..
        } => {
            let mut attributes = IndexMap::new();
            for attr in attrs.borrow().iter() {
                let key = match &attr.name.prefix {
                    Some(prefix) => format!("{}:{}", prefix, attr.name.local),
                    None => attr.name.local.to_string(),
                };
                attributes.entry(key).or_insert_with(|| attr.value.to_string());
            }

            let mut children = Vec::new();
            // <template> keeps its content in a separate fragment
            let contents = template_contents.borrow();
            let source = contents.as_ref().unwrap_or(handle);
            for child in source.children.borrow().iter() {
                push_node(&mut children, child);
            }

            siblings.push(VNode::Element {
                tag: name.local.to_string(),
                attributes,
                children,
            });
        }

        NodeData::Text { contents } => {
            let text = contents.borrow();
            if let Some(VNode::Text { content }) = siblings.last_mut() {
                content.push_str(&text);
            } else {
                siblings.push(VNode::text(text.to_string()));
            }
        }

        NodeData::Comment { contents } => siblings.push(VNode::comment(contents.to_string())),

        NodeData::Document | NodeData::Doctype { .. } | NodeData::ProcessingInstruction { .. } => {}
    }
}
