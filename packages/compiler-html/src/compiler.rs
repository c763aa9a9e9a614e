use folio_parser::dom::{is_raw_text, is_void};
use folio_parser::{VNode, VirtualDomDocument};

/// Options for HTML output
#[derive(Debug, Clone)]
pub struct CompileOptions {
    /// Re-indent the document, dropping whitespace-only text
    pub pretty: bool,
    /// Indentation string
    pub indent: String,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            pretty: false,
            indent: "  ".to_string(),
        }
    }
}

impl CompileOptions {
    pub fn pretty() -> Self {
        Self {
            pretty: true,
            ..Self::default()
        }
    }
}

struct Context {
    options: CompileOptions,
    depth: usize,
    buffer: String,
}

impl Context {
    fn new(options: CompileOptions) -> Self {
        Self {
            options,
            depth: 0,
            buffer: String::new(),
        }
    }

    fn add(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    fn add_indent(&mut self) {
        for _ in 0..self.depth {
            self.buffer.push_str(&self.options.indent);
        }
    }

    fn start_line(&mut self) {
        if self.options.pretty {
            self.add_indent();
        }
    }

    fn end_line(&mut self) {
        if self.options.pretty {
            self.add("\n");
        }
    }

    fn indent(&mut self) {
        self.depth += 1;
    }

    fn dedent(&mut self) {
        if self.depth > 0 {
            self.depth -= 1;
        }
    }

    fn get_output(self) -> String {
        self.buffer
    }
}

/// Serialize a virtual document to markup
pub fn compile_to_html(document: &VirtualDomDocument, options: CompileOptions) -> String {
    let mut ctx = Context::new(options);

    if let Some(doctype) = &document.doctype {
        ctx.add(&format!("<!{}>", doctype));
        ctx.end_line();
    }

    for node in &document.nodes {
        compile_node(node, &mut ctx);
    }

    ctx.get_output()
}

/// Serialize a single node and its subtree
pub fn compile_fragment(node: &VNode, options: CompileOptions) -> String {
    let mut ctx = Context::new(options);
    compile_node(node, &mut ctx);
    ctx.get_output()
}

fn compile_node(node: &VNode, ctx: &mut Context) {
    match node {
        VNode::Element {
            tag,
            attributes,
            children,
        } => compile_element(tag, attributes, children, ctx),

        VNode::Text { content } => {
            if ctx.options.pretty {
                let trimmed = content.trim();
                if !trimmed.is_empty() {
                    ctx.start_line();
                    ctx.add(&escape_text(trimmed));
                    ctx.end_line();
                }
            } else {
                ctx.add(&escape_text(content));
            }
        }

        VNode::Comment { content } => {
            ctx.start_line();
            ctx.add(&format!("<!--{}-->", content));
            ctx.end_line();
        }
    }
}

fn compile_element(
    tag: &str,
    attributes: &indexmap::IndexMap<String, String>,
    children: &[VNode],
    ctx: &mut Context,
) {
    ctx.start_line();
    ctx.add(&format!("<{}", tag));
    for (name, value) in attributes {
        ctx.add(&format!(" {}=\"{}\"", name, escape_attribute(value)));
    }
    ctx.add(">");

    if is_void(tag) {
        ctx.end_line();
        return;
    }

    if is_raw_text(tag) {
        for child in children {
            if let VNode::Text { content } = child {
                ctx.add(content);
            }
        }
    } else if ctx.options.pretty && has_element_children(children) {
        ctx.add("\n");
        ctx.indent();
        for child in children {
            compile_node(child, ctx);
        }
        ctx.dedent();
        ctx.add_indent();
    } else if ctx.options.pretty {
        // Text-only content stays on the opening line
        ctx.add(&escape_text(&collapse_whitespace(children)));
    } else {
        for child in children {
            compile_node(child, ctx);
        }
    }

    ctx.add(&format!("</{}>", tag));
    ctx.end_line();
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('\u{a0}', "&nbsp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn escape_attribute(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('\u{a0}', "&nbsp;")
        .replace('"', "&quot;")
}

fn has_element_children(children: &[VNode]) -> bool {
    children.iter().any(|child| !matches!(child, VNode::Text { .. }))
}

fn collapse_whitespace(children: &[VNode]) -> String {
    children
        .iter()
        .map(VNode::text_content)
        .collect::<String>()
        .trim()
        .to_string()
}
