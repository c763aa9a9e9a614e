//! Integration tests for the editor crate, driving a session against the
//! bundled template.

use folio_common::{MockTemplateSource, DEFAULT_TEMPLATE_PATH};
use folio_editor::{
    EditSession, EditorError, ExportOutcome, FieldRef, FormEdit, FsDownloadSink, MemoryDownloads,
    SessionOptions, Theme,
};
use folio_parser::VNode;
use folio_render::bindings::{container, CAROUSEL};
use folio_render::carousel::ACTIVE_CLASS;
use folio_render::reconciler::slide_count;
use folio_render::{
    Capabilities, HeadlessCarousel, QueryExt, RenderOptions, ScalarField, Section, Selector, Simple,
};

const TEMPLATE: &str = include_str!("../../../templates/template-prestige.html");

fn options(carousel: &HeadlessCarousel) -> SessionOptions {
    SessionOptions {
        render: RenderOptions::for_year(2025),
        capabilities: Capabilities::none().with_carousel(carousel.clone()),
        pretty: false,
    }
}

async fn open(carousel: &HeadlessCarousel) -> EditSession {
    let source = MockTemplateSource::new().with_template(DEFAULT_TEMPLATE_PATH, TEMPLATE);
    let mut session = EditSession::start(&source, DEFAULT_TEMPLATE_PATH, options(carousel)).await;
    session.run_until_idle();
    session
}

fn set(session: &mut EditSession, field: ScalarField, value: &str) {
    session
        .handle_input(FormEdit::SetField {
            field,
            value: value.to_string(),
        })
        .unwrap();
}

fn set_item(session: &mut EditSession, section: Section, index: usize, field: &str, value: &str) {
    session
        .handle_input(FormEdit::SetItemField {
            section,
            index,
            field: field.to_string(),
            value: value.to_string(),
        })
        .unwrap();
}

fn fill_required(session: &mut EditSession) {
    set(session, ScalarField::Name, "Ada Lovelace");
    set(session, ScalarField::Title, "Analyst");
    set(session, ScalarField::Email, "ada@example.com");
}

fn author_names(session: &EditSession) -> Vec<String> {
    let wrapper = session
        .frame()
        .document()
        .query_node(&container(Section::Testimonials))
        .unwrap();
    let mut names = Vec::new();
    collect_class(wrapper, "author-name", &mut names);
    names
}

fn collect_class(node: &VNode, class: &str, out: &mut Vec<String>) {
    if node.has_class(class) {
        out.push(node.text_content());
    }
    for child in node.children() {
        collect_class(child, class, out);
    }
}

#[tokio::test]
async fn test_preview_starts_with_demo_content() {
    let carousel = HeadlessCarousel::new();
    let session = open(&carousel).await;

    let doc = session.frame().document();
    let title = doc.query_node(&Selector(&[&[Simple::Tag("title")]])).unwrap();
    assert_eq!(title.text_content(), "Portfolio | Amina Koné");
    assert!(session.is_pristine());
    assert!(session.is_export_disabled());
}

#[tokio::test]
async fn test_missing_template_keeps_editing_alive() {
    let carousel = HeadlessCarousel::new();
    let source = MockTemplateSource::new();
    let mut session = EditSession::start(&source, DEFAULT_TEMPLATE_PATH, options(&carousel)).await;
    session.run_until_idle();

    let fault = session
        .frame()
        .document()
        .query_node(&Selector(&[&[Simple::Class("preview-fault")]]))
        .unwrap();
    assert!(fault.text_content().contains("Template not found"));

    fill_required(&mut session);
    assert!(!session.is_export_disabled());
    let mut sink = MemoryDownloads::new();
    assert!(matches!(
        session.export(&mut sink),
        Err(EditorError::PreviewUnavailable(_))
    ));
}

#[tokio::test]
async fn test_skill_round_trip_through_the_form() {
    let carousel = HeadlessCarousel::new();
    let mut session = open(&carousel).await;

    let index = session.add_item(Section::Skills);
    set_item(&mut session, Section::Skills, index, "title", "Design");
    set_item(&mut session, Section::Skills, index, "item1", "Branding");
    session.run_until_idle();

    let skills = session
        .frame()
        .document()
        .query_node(&container(Section::Skills))
        .unwrap();
    let groups: Vec<&VNode> = skills.element_children().collect();
    assert_eq!(groups.len(), 1);

    let heading = groups[0].element_children().next().unwrap();
    assert_eq!(heading.text_content(), "Design");
    let list = groups[0].element_children().nth(1).unwrap();
    let items: Vec<String> = list.element_children().map(VNode::text_content).collect();
    assert_eq!(items, vec!["Branding".to_string()]);
}

#[tokio::test]
async fn test_same_snapshot_renders_identically() {
    let carousel = HeadlessCarousel::new();
    let mut session = open(&carousel).await;
    fill_required(&mut session);
    session.run_until_idle();

    let mut first = MemoryDownloads::new();
    session.export(&mut first).unwrap();

    // Rewriting a field with its current value projects the same snapshot again
    set(&mut session, ScalarField::Email, "ada@example.com");
    let mut second = MemoryDownloads::new();
    session.export(&mut second).unwrap();

    assert_eq!(first.last().unwrap().content, second.last().unwrap().content);
}

#[tokio::test]
async fn test_removing_testimonials_by_position() {
    let carousel = HeadlessCarousel::new();
    let mut session = open(&carousel).await;

    for (text, author) in [("One", "A"), ("Two", "B"), ("Three", "C")] {
        let index = session.add_item(Section::Testimonials);
        set_item(&mut session, Section::Testimonials, index, "text", text);
        set_item(&mut session, Section::Testimonials, index, "authorName", author);
    }
    session.run_until_idle();
    assert_eq!(author_names(&session), vec!["A", "B", "C"]);
    assert!(session.frame().has_carousel_instance());

    session.remove_item(Section::Testimonials, 1).unwrap();
    session.run_until_idle();
    assert_eq!(author_names(&session), vec!["A", "C"]);
    assert_eq!(slide_count(session.frame().document()), 2);
    let root = session.frame().document().query_node(&CAROUSEL).unwrap();
    assert!(root.has_class(ACTIVE_CLASS));

    session.remove_item(Section::Testimonials, 0).unwrap();
    session.run_until_idle();
    assert_eq!(author_names(&session), vec!["C"]);
    let root = session.frame().document().query_node(&CAROUSEL).unwrap();
    assert!(!root.has_class(ACTIVE_CLASS));
    assert!(!session.frame().has_carousel_instance());
}

#[tokio::test]
async fn test_reloads_leave_one_live_carousel() {
    let carousel = HeadlessCarousel::new();
    let mut session = open(&carousel).await;

    for (text, author) in [("One", "A"), ("Two", "B")] {
        let index = session.add_item(Section::Testimonials);
        set_item(&mut session, Section::Testimonials, index, "text", text);
        set_item(&mut session, Section::Testimonials, index, "authorName", author);
        session.run_until_idle();
    }
    for name in ["Ada", "Ada L", "Ada Lovelace"] {
        set(&mut session, ScalarField::Name, name);
        session.run_until_idle();
        assert!(carousel.live_instances() <= 1);
    }

    assert_eq!(carousel.live_instances(), 1);
    assert!(session.frame().has_carousel_instance());
}

#[tokio::test]
async fn test_remove_out_of_range_is_an_edit_error() {
    let carousel = HeadlessCarousel::new();
    let mut session = open(&carousel).await;

    let result = session.remove_item(Section::Projects, 0);
    assert!(matches!(result, Err(EditorError::Edit(_))));
    assert!(session.is_pristine());
}

#[tokio::test]
async fn test_export_is_gated_on_validation() {
    let carousel = HeadlessCarousel::new();
    let mut session = open(&carousel).await;
    set(&mut session, ScalarField::Name, "Ada Lovelace");
    set(&mut session, ScalarField::Title, "Analyst");

    let mut sink = MemoryDownloads::new();
    let outcome = session.export(&mut sink).unwrap();

    let email = FieldRef::scalar(ScalarField::Email);
    assert_eq!(
        outcome,
        ExportOutcome::Blocked {
            field: Some(email.clone())
        }
    );
    assert!(sink.artifacts.is_empty());
    assert_eq!(session.form().scroll_target(), Some(&email));
    assert!(!session.is_confirmation_visible());

    set(&mut session, ScalarField::Email, "ada@example.com");
    let outcome = session.export(&mut sink).unwrap();

    assert!(outcome.is_delivered());
    assert_eq!(sink.artifacts.len(), 1);
    let artifact = sink.last().unwrap();
    assert_eq!(artifact.file_name, "index.html");
    assert!(artifact.content.starts_with("<!DOCTYPE html>"));
    assert!(artifact.content.contains("Ada Lovelace"));
    assert!(artifact.content.contains("mailto:ada@example.com"));
    assert!(artifact.content.contains("© 2025 Ada Lovelace - All rights reserved."));
    assert!(session.is_confirmation_visible());
}

#[tokio::test]
async fn test_invalid_repeater_url_blocks_export() {
    let carousel = HeadlessCarousel::new();
    let mut session = open(&carousel).await;
    fill_required(&mut session);
    let index = session.add_item(Section::Projects);
    set_item(&mut session, Section::Projects, index, "image", "not a url");

    let mut sink = MemoryDownloads::new();
    let outcome = session.export(&mut sink).unwrap();

    assert_eq!(
        outcome,
        ExportOutcome::Blocked {
            field: Some(FieldRef::item(Section::Projects, 0, "image"))
        }
    );
}

#[tokio::test]
async fn test_out_of_range_micro_update_is_ignored() {
    let carousel = HeadlessCarousel::new();
    let mut session = open(&carousel).await;
    let before = session.frame().document().clone();

    session.post_micro_update(Section::Projects, 42, "title", "Ghost");
    session.run_until_idle();
    assert_eq!(session.frame().document(), &before);

    session.post_micro_update(Section::Projects, 0, "title", "Renamed");
    session.run_until_idle();
    let grid = session
        .frame()
        .document()
        .query_node(&container(Section::Projects))
        .unwrap();
    assert!(grid.text_content().contains("Renamed"));
}

#[tokio::test]
async fn test_theme_and_scroll_directives() {
    let carousel = HeadlessCarousel::new();
    let mut session = open(&carousel).await;

    session.apply_theme(Theme::Dark);
    session.scroll_preview_to("contact");
    session.run_until_idle();

    let root = session.frame().document().document_element().unwrap();
    assert!(root.attr("style").unwrap().contains("--bg-color: #121212"));
    assert_eq!(session.frame().scroll_target(), Some("contact"));
}

#[tokio::test]
async fn test_export_to_directory() {
    let carousel = HeadlessCarousel::new();
    let mut session = open(&carousel).await;
    fill_required(&mut session);

    let dir = tempfile::tempdir().unwrap();
    let mut sink = FsDownloadSink::new(dir.path());
    session.export(&mut sink).unwrap();

    let written = std::fs::read_to_string(dir.path().join("index.html")).unwrap();
    assert!(written.contains("Ada Lovelace"));
}
