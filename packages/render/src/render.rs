//! # List Rendering
//!
//! Builds the child nodes of each list-backed section from its records.
//! Output is a pure function of the records: filtered, in order, and never
//! assembled from markup strings.

use crate::model::{PortfolioData, Project, Record, Section, SkillGroup, Testimonial};
use folio_parser::{VNode, VirtualDomDocument};

pub const DEFAULT_AVATAR: &str = "https://i.pravatar.cc/100";

pub fn render_skill(skill: &SkillGroup) -> VNode {
    VNode::element("div")
        .with_class("skill-category")
        .with_attr("data-aos", "fade-up")
        .with_child(VNode::element("h3").with_text(&skill.title))
        .with_child(
            VNode::element("ul").with_children(
                skill
                    .items()
                    .map(|item| VNode::element("li").with_text(item)),
            ),
        )
}

pub fn render_project(project: &Project) -> VNode {
    let link = if project.link.is_empty() {
        "#"
    } else {
        &project.link
    };

    VNode::element("article")
        .with_class("project-card")
        .with_attr("data-aos", "fade-up")
        .with_child(
            VNode::element("div").with_class("project-img").with_child(
                VNode::element("img")
                    .with_attr("src", &project.image)
                    .with_attr("alt", &project.title),
            ),
        )
        .with_child(
            VNode::element("div")
                .with_class("project-info")
                .with_child(VNode::element("h3").with_text(&project.title))
                .with_child(VNode::element("p").with_text(&project.description))
                .with_child(
                    VNode::element("div").with_class("project-links").with_child(
                        VNode::element("a")
                            .with_attr("href", link)
                            .with_attr("target", "_blank")
                            .with_class("btn btn-secondary")
                            .with_text("Learn more"),
                    ),
                ),
        )
}

pub fn render_testimonial(testimonial: &Testimonial, placeholder_avatar: &str) -> VNode {
    let photo = if testimonial.author_photo.is_empty() {
        placeholder_avatar
    } else {
        &testimonial.author_photo
    };

    VNode::element("div").with_class("swiper-slide").with_child(
        VNode::element("figure")
            .with_class("testimonial-card")
            .with_child(
                VNode::element("blockquote")
                    .with_class("testimonial-text")
                    .with_text(&testimonial.text),
            )
            .with_child(
                VNode::element("figcaption")
                    .with_class("testimonial-author")
                    .with_child(
                        VNode::element("img")
                            .with_attr("src", photo)
                            .with_attr("alt", format!("Photo of {}", testimonial.author_name))
                            .with_class("author-photo"),
                    )
                    .with_child(
                        VNode::element("div")
                            .with_class("author-info")
                            .with_child(
                                VNode::element("p")
                                    .with_class("author-name")
                                    .with_text(&testimonial.author_name),
                            )
                            .with_child(
                                VNode::element("cite")
                                    .with_class("author-title")
                                    .with_text(&testimonial.author_title),
                            ),
                    ),
            ),
    )
}

/// Children for one section's container
pub fn render_section(section: Section, data: &PortfolioData, placeholder_avatar: &str) -> Vec<VNode> {
    match section {
        Section::Skills => rendered(&data.skills).map(render_skill).collect(),
        Section::Projects => rendered(&data.projects).map(render_project).collect(),
        Section::Testimonials => rendered(&data.testimonials)
            .map(|t| render_testimonial(t, placeholder_avatar))
            .collect(),
    }
}

/// Page shown in place of the preview when the template cannot be used
pub fn render_fault_page(headline: &str, detail: &str) -> VirtualDomDocument {
    let mut document = VirtualDomDocument::new();
    document.doctype = Some("DOCTYPE html".to_string());
    document.add_node(
        VNode::element("html")
            .with_attr("lang", "en")
            .with_child(
                VNode::element("head")
                    .with_child(VNode::element("meta").with_attr("charset", "UTF-8"))
                    .with_child(VNode::element("title").with_text("Preview unavailable")),
            )
            .with_child(
                VNode::element("body").with_child(
                    VNode::element("div")
                        .with_class("preview-fault")
                        .with_attr("role", "alert")
                        .with_child(VNode::element("h1").with_text(headline))
                        .with_child(VNode::element("p").with_text(detail))
                        .with_child(
                            VNode::element("p")
                                .with_text("The form keeps working; export is disabled until the preview loads."),
                        ),
                ),
            ),
    );
    document
}

fn rendered<R: Record>(records: &[R]) -> impl Iterator<Item = &R> {
    records.iter().filter(|record| record.is_rendered())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skill_round_trip_shape() {
        let skill = SkillGroup {
            title: "Design".into(),
            item1: "Branding".into(),
            ..Default::default()
        };
        let node = render_skill(&skill);

        let h3 = node.element_children().next().unwrap();
        assert_eq!(h3.text_content(), "Design");
        let ul = node.element_children().nth(1).unwrap();
        let items: Vec<_> = ul.element_children().map(VNode::text_content).collect();
        assert_eq!(items, vec!["Branding"]);
    }

    #[test]
    fn test_project_link_defaults_to_hash() {
        let node = render_project(&Project {
            title: "Shop".into(),
            ..Default::default()
        });
        let info = &node.children()[1];
        let link = &info.children()[2].children()[0];
        assert_eq!(link.attr("href"), Some("#"));
        assert_eq!(link.text_content(), "Learn more");
    }

    #[test]
    fn test_testimonial_placeholder_avatar() {
        let node = render_testimonial(
            &Testimonial {
                text: "Great".into(),
                author_name: "Jean".into(),
                ..Default::default()
            },
            DEFAULT_AVATAR,
        );
        let caption = &node.children()[0].children()[1];
        let img = &caption.children()[0];
        assert_eq!(img.attr("src"), Some(DEFAULT_AVATAR));
        assert_eq!(img.attr("alt"), Some("Photo of Jean"));
    }

    #[test]
    fn test_unrendered_records_filtered() {
        let mut data = PortfolioData::blank();
        data.skills = vec![SkillGroup::default(), SkillGroup {
            title: "Writing".into(),
            ..Default::default()
        }];
        data.testimonials = vec![Testimonial {
            text: "No author".into(),
            ..Default::default()
        }];

        assert_eq!(render_section(Section::Skills, &data, DEFAULT_AVATAR).len(), 1);
        assert!(render_section(Section::Testimonials, &data, DEFAULT_AVATAR).is_empty());
    }

    #[test]
    fn test_fault_page_names_the_problem() {
        let page = render_fault_page("Template not found", "template-prestige.html");
        let html = page.document_element().unwrap();
        assert!(html.text_content().contains("Template not found"));
        assert!(html.text_content().contains("template-prestige.html"));
    }

    #[test]
    fn test_markup_in_content_stays_text() {
        let node = render_skill(&SkillGroup {
            title: "<b>bold</b>".into(),
            ..Default::default()
        });
        let h3 = &node.children()[0];
        assert_eq!(h3.children(), &[VNode::text("<b>bold</b>")]);
    }
}
