use folio_parser::{parse_template, VNode};

const TEMPLATE: &str = include_str!("../../../templates/template-prestige.html");

fn find<'a>(node: &'a VNode, predicate: &dyn Fn(&VNode) -> bool) -> Option<&'a VNode> {
    if predicate(node) {
        return Some(node);
    }
    node.children().iter().find_map(|child| find(child, predicate))
}

#[test]
fn test_template_parses_with_root() {
    let document = parse_template(TEMPLATE).expect("template parses");

    assert_eq!(document.doctype.as_deref(), Some("DOCTYPE html"));
    let html = document.document_element().unwrap();
    assert_eq!(html.tag(), Some("html"));
    assert_eq!(html.attr("lang"), Some("en"));
}

#[test]
fn test_template_sections_present() {
    let document = parse_template(TEMPLATE).unwrap();
    let html = document.document_element().unwrap();

    for id in ["hero", "about", "skills", "projects", "testimonials", "contact"] {
        assert!(
            find(html, &|node| node.attr("id") == Some(id)).is_some(),
            "missing #{}",
            id
        );
    }
}

#[test]
fn test_template_entities_decoded() {
    let document = parse_template(TEMPLATE).unwrap();
    let html = document.document_element().unwrap();

    let copyright = find(html, &|node| node.has_class("copyright")).unwrap();
    assert!(copyright.text_content().starts_with('©'));

    let menu = find(html, &|node| node.has_class("mobile-menu-btn")).unwrap();
    assert_eq!(menu.text_content(), "☰");
}

#[test]
fn test_template_void_elements_have_no_children() {
    let document = parse_template(TEMPLATE).unwrap();
    let html = document.document_element().unwrap();

    let meta = find(html, &|node| node.tag() == Some("meta")).unwrap();
    assert!(meta.children().is_empty());
    let img = find(html, &|node| node.tag() == Some("img")).unwrap();
    assert!(img.children().is_empty());
}
