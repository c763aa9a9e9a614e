//! # Reconciler
//!
//! Applies projection messages to the preview document. A full snapshot
//! rewrites every static binding and rebuilds the three list sections; a micro
//! update touches one field of one rendered record.

use crate::bindings::{self, Apply, MicroAction, CAROUSEL, SLIDE_CLASS, STATIC_BINDINGS};
use crate::carousel::{Capabilities, Carousel, CarouselMode, ScrollAnimator};
use crate::message::Message;
use crate::model::{PortfolioData, Section};
use crate::render::{render_section, DEFAULT_AVATAR};
use crate::selector::QueryExt;
use chrono::Datelike;
use folio_parser::{NodePath, VirtualDomDocument};
use indexmap::IndexMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Year shown in the copyright line
    pub copyright_year: i32,
    /// Photo used for testimonials without one
    pub placeholder_avatar: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            copyright_year: chrono::Local::now().year(),
            placeholder_avatar: DEFAULT_AVATAR.to_string(),
        }
    }
}

impl RenderOptions {
    /// Options for a fixed year, without consulting the clock
    pub fn for_year(year: i32) -> Self {
        Self {
            copyright_year: year,
            placeholder_avatar: DEFAULT_AVATAR.to_string(),
        }
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.copyright_year = year;
        self
    }
}

/// What a full snapshot changed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FullUpdateReport {
    pub bindings_applied: usize,
    /// Bindings whose target is not in the template
    pub bindings_skipped: usize,
    pub skills: usize,
    pub projects: usize,
    pub testimonials: usize,
    /// `None` when the template has no testimonial section
    pub carousel: Option<CarouselMode>,
}

/// Outcome of applying one decoded message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Applied {
    Full(FullUpdateReport),
    Micro(bool),
    Theme(bool),
    Scroll(Option<NodePath>),
}

pub struct Reconciler {
    options: RenderOptions,
    carousel: Carousel,
    animator: Option<Box<dyn ScrollAnimator>>,
}

impl Reconciler {
    pub fn new(options: RenderOptions, capabilities: Capabilities) -> Self {
        Self {
            options,
            carousel: Carousel::new(capabilities.carousel),
            animator: capabilities.animator,
        }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    pub fn has_carousel_instance(&self) -> bool {
        self.carousel.has_instance()
    }

    /// A fresh copy of the template finished loading
    pub fn on_load(&mut self, document: &mut VirtualDomDocument) {
        self.carousel.reset();
        if let Some(animator) = self.animator.as_mut() {
            if let Err(err) = animator.init() {
                tracing::warn!("Scroll animation library failed to initialize: {}", err);
            }
        }
        self.sync_carousel(document);
    }

    pub fn apply(&mut self, document: &mut VirtualDomDocument, message: &Message) -> Applied {
        match message {
            Message::FullUpdate(data) => Applied::Full(self.apply_full(document, data)),
            Message::MicroUpdate {
                section,
                index,
                field,
                content,
            } => Applied::Micro(apply_micro(document, *section, *index, field, content)),
            Message::UpdateTheme(variables) => Applied::Theme(apply_theme(document, variables)),
            Message::ScrollToSection(id) => Applied::Scroll(document.query_id(id)),
        }
    }

    pub fn apply_full(&mut self, document: &mut VirtualDomDocument, data: &PortfolioData) -> FullUpdateReport {
        let mut report = FullUpdateReport::default();

        for binding in STATIC_BINDINGS {
            let Some(node) = document.query_node_mut(&binding.target) else {
                tracing::debug!("No target for {}", binding.target);
                report.bindings_skipped += 1;
                continue;
            };
            let value = binding.source.resolve(data, self.options.copyright_year);
            match binding.apply {
                Apply::Text => node.set_text_content(&value),
                Apply::Attr(name) => node.set_attr(name, value),
            }
            report.bindings_applied += 1;
        }

        for section in Section::ALL {
            let Some(container) = document.query_node_mut(&bindings::container(section)) else {
                continue;
            };
            let rendered = render_section(section, data, &self.options.placeholder_avatar);
            let count = rendered.len();
            if let Some(children) = container.children_mut() {
                *children = rendered;
            }
            match section {
                Section::Skills => report.skills = count,
                Section::Projects => report.projects = count,
                Section::Testimonials => report.testimonials = count,
            }
        }

        report.carousel = self.sync_carousel(document);

        if let Some(animator) = self.animator.as_mut() {
            if let Err(err) = animator.refresh() {
                tracing::warn!("Scroll animation refresh failed: {}", err);
            }
        }

        report
    }

    fn sync_carousel(&mut self, document: &mut VirtualDomDocument) -> Option<CarouselMode> {
        let slides = slide_count(document);
        let root = document.query_node_mut(&CAROUSEL)?;
        Some(self.carousel.sync(root, slides))
    }
}

/// Testimonial slides currently in the page
pub fn slide_count(document: &VirtualDomDocument) -> usize {
    document
        .query_node(&bindings::container(Section::Testimonials))
        .map(|wrapper| {
            wrapper
                .element_children()
                .filter(|slide| slide.has_class(SLIDE_CLASS))
                .count()
        })
        .unwrap_or(0)
}

/// Update one field of the `index`-th rendered record of `section`.
///
/// Returns false without touching the page when the record, the field or its
/// target does not exist.
pub fn apply_micro(
    document: &mut VirtualDomDocument,
    section: Section,
    index: usize,
    field: &str,
    content: &str,
) -> bool {
    let Some(slot) = bindings::micro_slot(section, field) else {
        return false;
    };
    let Some(mut record) = document.query(&bindings::container(section)) else {
        return false;
    };
    let Some(child) = document.node(&record).and_then(|container| {
        container
            .children()
            .iter()
            .enumerate()
            .filter(|(_, node)| node.is_element())
            .nth(index)
            .map(|(position, _)| position)
    }) else {
        return false;
    };
    record.push(child);

    let Some(target) = document
        .query_from(&record, &slot.locator)
        .and_then(|path| document.node_mut(&path))
    else {
        return false;
    };
    match slot.action {
        MicroAction::Text => target.set_text_content(content),
        MicroAction::Src => target.set_attr("src", content),
        MicroAction::Href => target.set_attr("href", content),
    }
    true
}

/// Set CSS custom properties on the root element
pub fn apply_theme(document: &mut VirtualDomDocument, variables: &IndexMap<String, String>) -> bool {
    let Some(root) = document.document_element_mut() else {
        return false;
    };
    for (name, value) in variables {
        root.set_style_property(name, value);
    }
    true
}
