use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Elements that never have children or an end tag
pub const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "basefont", "bgsound", "br", "col", "embed", "frame", "hr", "img", "input",
    "keygen", "link", "meta", "param", "source", "track", "wbr",
];

/// Elements whose text is written out unescaped
pub const RAW_TEXT_ELEMENTS: &[&str] = &[
    "iframe", "noembed", "noframes", "noscript", "plaintext", "script", "style", "xmp",
];

pub fn is_void(tag: &str) -> bool {
    VOID_ELEMENTS.contains(&tag)
}

pub fn is_raw_text(tag: &str) -> bool {
    RAW_TEXT_ELEMENTS.contains(&tag)
}

/// Virtual DOM node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum VNode {
    /// HTML element; attributes keep source order so output is stable
    Element {
        tag: String,
        attributes: IndexMap<String, String>,
        children: Vec<VNode>,
    },

    /// Text node
    Text { content: String },

    /// Comment node
    Comment { content: String },
}

impl VNode {
    pub fn element(tag: impl Into<String>) -> Self {
        VNode::Element {
            tag: tag.into(),
            attributes: IndexMap::new(),
            children: Vec::new(),
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        VNode::Text {
            content: content.into(),
        }
    }

    pub fn comment(content: impl Into<String>) -> Self {
        VNode::Comment {
            content: content.into(),
        }
    }

    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        if let VNode::Element {
            ref mut attributes, ..
        } = self
        {
            attributes.insert(key.into(), value.into());
        }
        self
    }

    pub fn with_class(self, class: impl Into<String>) -> Self {
        self.with_attr("class", class)
    }

    pub fn with_text(self, content: impl Into<String>) -> Self {
        self.with_child(VNode::text(content))
    }

    pub fn with_child(mut self, child: VNode) -> Self {
        if let VNode::Element {
            ref mut children, ..
        } = self
        {
            children.push(child);
        }
        self
    }

    pub fn with_children(mut self, new_children: impl IntoIterator<Item = VNode>) -> Self {
        if let VNode::Element {
            ref mut children, ..
        } = self
        {
            children.extend(new_children);
        }
        self
    }

    pub fn is_element(&self) -> bool {
        matches!(self, VNode::Element { .. })
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            VNode::Element { tag, .. } => Some(tag),
            _ => None,
        }
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        match self {
            VNode::Element { attributes, .. } => attributes.get(name).map(String::as_str),
            _ => None,
        }
    }

    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        if let VNode::Element { attributes, .. } = self {
            attributes.insert(name.into(), value.into());
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.attr("class")
            .map(|classes| classes.split_ascii_whitespace().any(|c| c == class))
            .unwrap_or(false)
    }

    pub fn add_class(&mut self, class: &str) {
        if !self.is_element() || self.has_class(class) {
            return;
        }
        let classes = match self.attr("class") {
            Some(existing) if !existing.trim().is_empty() => format!("{} {}", existing.trim(), class),
            _ => class.to_string(),
        };
        self.set_attr("class", classes);
    }

    pub fn remove_class(&mut self, class: &str) {
        if !self.has_class(class) {
            return;
        }
        let remaining = self
            .attr("class")
            .unwrap_or_default()
            .split_ascii_whitespace()
            .filter(|c| *c != class)
            .collect::<Vec<_>>()
            .join(" ");
        self.set_attr("class", remaining);
    }

    /// Set one declaration of the inline `style` attribute, keeping the others
    pub fn set_style_property(&mut self, property: &str, value: &str) {
        if !self.is_element() {
            return;
        }
        let mut declarations: IndexMap<String, String> = IndexMap::new();
        for declaration in self.attr("style").unwrap_or_default().split(';') {
            if let Some((name, val)) = declaration.split_once(':') {
                let name = name.trim();
                if !name.is_empty() {
                    declarations.insert(name.to_string(), val.trim().to_string());
                }
            }
        }
        declarations.insert(property.trim().to_string(), value.trim().to_string());

        let style = declarations
            .iter()
            .map(|(name, val)| format!("{}: {};", name, val))
            .collect::<Vec<_>>()
            .join(" ");
        self.set_attr("style", style);
    }

    pub fn children(&self) -> &[VNode] {
        match self {
            VNode::Element { children, .. } => children,
            _ => &[],
        }
    }

    pub fn children_mut(&mut self) -> Option<&mut Vec<VNode>> {
        match self {
            VNode::Element { children, .. } => Some(children),
            _ => None,
        }
    }

    /// Element children only, in document order
    pub fn element_children(&self) -> impl Iterator<Item = &VNode> {
        self.children().iter().filter(|c| c.is_element())
    }

    /// Concatenated text of all descendant text nodes
    pub fn text_content(&self) -> String {
        match self {
            VNode::Text { content } => content.clone(),
            VNode::Comment { .. } => String::new(),
            VNode::Element { children, .. } => children.iter().map(VNode::text_content).collect(),
        }
    }

    /// Replace all children with a single text node (none for empty text)
    pub fn set_text_content(&mut self, content: &str) {
        match self {
            VNode::Element { children, .. } => {
                children.clear();
                if !content.is_empty() {
                    children.push(VNode::text(content));
                }
            }
            VNode::Text { content: existing } | VNode::Comment { content: existing } => {
                *existing = content.to_string();
            }
        }
    }
}

/// Index path from the document roots down to one node
pub type NodePath = Vec<usize>;

/// Virtual document: optional doctype plus root nodes
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VirtualDomDocument {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doctype: Option<String>,
    pub nodes: Vec<VNode>,
}

impl VirtualDomDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_node(&mut self, node: VNode) {
        self.nodes.push(node);
    }

    /// The `<html>` element, if present
    pub fn document_element(&self) -> Option<&VNode> {
        self.nodes.iter().find(|n| n.tag() == Some("html"))
    }

    pub fn document_element_mut(&mut self) -> Option<&mut VNode> {
        self.nodes.iter_mut().find(|n| n.tag() == Some("html"))
    }

    pub fn node(&self, path: &[usize]) -> Option<&VNode> {
        let (first, rest) = path.split_first()?;
        let mut node = self.nodes.get(*first)?;
        for index in rest {
            node = node.children().get(*index)?;
        }
        Some(node)
    }

    pub fn node_mut(&mut self, path: &[usize]) -> Option<&mut VNode> {
        let (first, rest) = path.split_first()?;
        let mut node = self.nodes.get_mut(*first)?;
        for index in rest {
            node = node.children_mut()?.get_mut(*index)?;
        }
        Some(node)
    }
}
