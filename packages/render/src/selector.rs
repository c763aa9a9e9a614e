//! # Typed Selectors
//!
//! A small selector language expressed as static data. A `Selector` is a
//! descendant chain of compounds; each compound is a list of simple conditions
//! that must all hold on one element. Resolution walks the document in
//! preorder and returns the path of the first match.

use folio_parser::{NodePath, VNode, VirtualDomDocument};
use std::fmt;

/// One condition on a single element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Simple {
    Tag(&'static str),
    Id(&'static str),
    Class(&'static str),
    /// Attribute equals value
    AttrEq(&'static str, &'static str),
    /// Attribute value contains substring
    AttrContains(&'static str, &'static str),
    /// 1-based position among element siblings
    NthChild(usize),
}

impl Simple {
    fn matches(&self, node: &VNode, position: usize) -> bool {
        match *self {
            Simple::Tag(tag) => node.tag() == Some(tag),
            Simple::Id(id) => node.attr("id") == Some(id),
            Simple::Class(class) => node.has_class(class),
            Simple::AttrEq(name, value) => node.attr(name) == Some(value),
            Simple::AttrContains(name, needle) => {
                node.attr(name).map(|v| v.contains(needle)).unwrap_or(false)
            }
            Simple::NthChild(n) => position == n,
        }
    }
}

/// Compound selector: all conditions hold on one element
pub type Compound = &'static [Simple];

/// Descendant chain, outermost compound first
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selector(pub &'static [Compound]);

impl Selector {
    pub fn compounds(&self) -> &'static [Compound] {
        self.0
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, compound) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            for simple in compound.iter() {
                match simple {
                    Simple::Tag(tag) => write!(f, "{}", tag)?,
                    Simple::Id(id) => write!(f, "#{}", id)?,
                    Simple::Class(class) => write!(f, ".{}", class)?,
                    Simple::AttrEq(name, value) => write!(f, "[{}=\"{}\"]", name, value)?,
                    Simple::AttrContains(name, value) => write!(f, "[{}*=\"{}\"]", name, value)?,
                    Simple::NthChild(n) => write!(f, ":nth-child({})", n)?,
                }
            }
        }
        Ok(())
    }
}

fn compound_matches(compound: Compound, node: &VNode, position: usize) -> bool {
    node.is_element() && compound.iter().all(|simple| simple.matches(node, position))
}

/// Preorder search over `nodes`. `remaining` is the part of the chain not yet
/// matched by an ancestor.
fn search(nodes: &[VNode], remaining: &[Compound], prefix: &mut NodePath) -> Option<NodePath> {
    let (head, tail) = remaining.split_first()?;
    let mut position = 0;

    for (index, node) in nodes.iter().enumerate() {
        if !node.is_element() {
            continue;
        }
        position += 1;
        prefix.push(index);

        if compound_matches(head, node, position) {
            if tail.is_empty() {
                return Some(prefix.clone());
            }
            if let Some(found) = search(node.children(), tail, prefix) {
                return Some(found);
            }
        }
        // Same chain can still start deeper down
        if let Some(found) = search(node.children(), remaining, prefix) {
            return Some(found);
        }

        prefix.pop();
    }

    None
}

/// Selector lookups over a virtual document
pub trait QueryExt {
    /// Path of the first element matching `selector`
    fn query(&self, selector: &Selector) -> Option<NodePath>;

    /// Like `query`, but only among descendants of the node at `base`.
    /// The returned path is absolute.
    fn query_from(&self, base: &[usize], selector: &Selector) -> Option<NodePath>;

    fn query_node(&self, selector: &Selector) -> Option<&VNode>;

    fn query_node_mut(&mut self, selector: &Selector) -> Option<&mut VNode>;

    /// Path of the first element whose `id` equals `id`
    fn query_id(&self, id: &str) -> Option<NodePath>;
}

impl QueryExt for VirtualDomDocument {
    fn query(&self, selector: &Selector) -> Option<NodePath> {
        if selector.0.is_empty() {
            return None;
        }
        search(&self.nodes, selector.0, &mut Vec::new())
    }

    fn query_from(&self, base: &[usize], selector: &Selector) -> Option<NodePath> {
        if selector.0.is_empty() {
            return None;
        }
        let root = self.node(base)?;
        let mut prefix = base.to_vec();
        search(root.children(), selector.0, &mut prefix)
    }

    fn query_node(&self, selector: &Selector) -> Option<&VNode> {
        let path = self.query(selector)?;
        self.node(&path)
    }

    fn query_node_mut(&mut self, selector: &Selector) -> Option<&mut VNode> {
        let path = self.query(selector)?;
        self.node_mut(&path)
    }

    fn query_id(&self, id: &str) -> Option<NodePath> {
        fn walk(nodes: &[VNode], id: &str, prefix: &mut NodePath) -> Option<NodePath> {
            for (index, node) in nodes.iter().enumerate() {
                prefix.push(index);
                if node.attr("id") == Some(id) {
                    return Some(prefix.clone());
                }
                if let Some(found) = walk(node.children(), id, prefix) {
                    return Some(found);
                }
                prefix.pop();
            }
            None
        }
        walk(&self.nodes, id, &mut Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_parser::{parse, parse_template};

    const PAGE: &str = r#"<html><body>
        <header><a class="logo"><img src="a.png"><span>Name</span></a></header>
        <section id="contact">
            <a href="https://wa.me/">WhatsApp</a>
            <a href="mailto:">Email</a>
            <div class="social"><a aria-label="Facebook">f</a><a aria-label="TikTok">t</a></div>
        </section>
    </body></html>"#;

    #[test]
    fn test_descendant_chain() {
        let doc = parse_template(PAGE).unwrap();
        const LOGO_NAME: Selector = Selector(&[&[Simple::Class("logo")], &[Simple::Tag("span")]]);

        let node = doc.query_node(&LOGO_NAME).unwrap();
        assert_eq!(node.text_content(), "Name");
    }

    #[test]
    fn test_attribute_conditions() {
        let doc = parse_template(PAGE).unwrap();
        const MAIL: Selector = Selector(&[
            &[Simple::Id("contact")],
            &[Simple::Tag("a"), Simple::AttrContains("href", "mailto:")],
        ]);
        const TIKTOK: Selector = Selector(&[&[Simple::Tag("a"), Simple::AttrEq("aria-label", "TikTok")]]);

        assert_eq!(doc.query_node(&MAIL).unwrap().text_content(), "Email");
        assert_eq!(doc.query_node(&TIKTOK).unwrap().text_content(), "t");
    }

    #[test]
    fn test_nth_child_counts_elements_only() {
        let doc = parse("<ul>\n<li>a</li>\n<li>b</li>\n</ul>").unwrap();
        const SECOND: Selector = Selector(&[&[Simple::Tag("li"), Simple::NthChild(2)]]);

        assert_eq!(doc.query_node(&SECOND).unwrap().text_content(), "b");
    }

    #[test]
    fn test_query_from_is_scoped() {
        let doc = parse("<div id=\"a\"><p>1</p></div><div id=\"b\"><p>2</p></div>").unwrap();
        const B: Selector = Selector(&[&[Simple::Id("b")]]);
        const P: Selector = Selector(&[&[Simple::Tag("p")]]);

        let base = doc.query(&B).unwrap();
        let path = doc.query_from(&base, &P).unwrap();
        assert_eq!(doc.node(&path).unwrap().text_content(), "2");
    }

    #[test]
    fn test_missing_target() {
        let doc = parse_template(PAGE).unwrap();
        const NOPE: Selector = Selector(&[&[Simple::Id("projects")]]);
        assert!(doc.query(&NOPE).is_none());
    }

    #[test]
    fn test_query_id() {
        let doc = parse_template(PAGE).unwrap();
        let path = doc.query_id("contact").unwrap();
        assert_eq!(doc.node(&path).unwrap().tag(), Some("section"));
        assert!(doc.query_id("missing").is_none());
    }

    #[test]
    fn test_display() {
        const SEL: Selector = Selector(&[
            &[Simple::Id("contact")],
            &[Simple::Tag("a"), Simple::AttrContains("href", "wa.me")],
        ]);
        assert_eq!(SEL.to_string(), "#contact a[href*=\"wa.me\"]");
    }
}
