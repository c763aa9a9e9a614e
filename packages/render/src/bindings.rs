//! # Binding Tables
//!
//! Where each piece of portfolio data lands in the page, as data. Static
//! bindings are applied on every full snapshot; micro slots resolve one field
//! of one rendered record.

use crate::model::{PortfolioData, ScalarField, Section};
use crate::selector::{Selector, Simple};

/// How a resolved value is written to its target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Apply {
    Text,
    Attr(&'static str),
}

/// Where a bound value comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueSource {
    /// Scalar field as-is (empty clears the target)
    Field(ScalarField),
    /// `https://wa.me/<number>`
    WhatsAppLink,
    /// `mailto:<email>`
    MailtoLink,
    /// Social profile URL, `#` when empty
    SocialLink(ScalarField),
    /// Footer copyright line
    Copyright,
}

impl ValueSource {
    pub fn resolve(&self, data: &PortfolioData, year: i32) -> String {
        match *self {
            ValueSource::Field(field) => data.scalar(field).to_string(),
            ValueSource::WhatsAppLink => format!("https://wa.me/{}", data.whatsapp),
            ValueSource::MailtoLink => format!("mailto:{}", data.email),
            ValueSource::SocialLink(field) => match data.scalar(field) {
                "" => "#".to_string(),
                url => url.to_string(),
            },
            ValueSource::Copyright => {
                let name = if data.name.is_empty() {
                    DEFAULT_NAME
                } else {
                    &data.name
                };
                format!("© {} {} - All rights reserved.", year, name)
            }
        }
    }
}

pub const DEFAULT_NAME: &str = "Your Name";

#[derive(Debug, Clone, Copy)]
pub struct Binding {
    pub target: Selector,
    pub apply: Apply,
    pub source: ValueSource,
}

const fn text(target: Selector, source: ValueSource) -> Binding {
    Binding {
        target,
        apply: Apply::Text,
        source,
    }
}

const fn attr(target: Selector, name: &'static str, source: ValueSource) -> Binding {
    Binding {
        target,
        apply: Apply::Attr(name),
        source,
    }
}

use Simple::*;
use ValueSource::*;

/// Every static binding, applied in order on a full snapshot
pub const STATIC_BINDINGS: &[Binding] = &[
    text(
        Selector(&[&[Tag("head")], &[Tag("title")]]),
        Field(ScalarField::PageTitle),
    ),
    attr(
        Selector(&[&[Tag("head")], &[Tag("meta"), AttrEq("name", "description")]]),
        "content",
        Field(ScalarField::MetaDescription),
    ),
    attr(
        Selector(&[&[Tag("head")], &[Tag("meta"), AttrEq("property", "og:image")]]),
        "content",
        Field(ScalarField::OgImage),
    ),
    attr(
        Selector(&[&[Class("logo-prestige")], &[Tag("img")]]),
        "src",
        Field(ScalarField::Logo),
    ),
    text(
        Selector(&[&[Class("logo-prestige")], &[Tag("span")]]),
        Field(ScalarField::Name),
    ),
    text(Selector(&[&[Class("hero-intro")]]), Field(ScalarField::Title)),
    text(
        Selector(&[&[Class("hero-text")], &[Tag("h1")]]),
        Field(ScalarField::Name),
    ),
    text(
        Selector(&[&[Class("hero-description")]]),
        Field(ScalarField::Tagline),
    ),
    attr(
        Selector(&[&[Class("hero-image")], &[Tag("img")]]),
        "src",
        Field(ScalarField::ProfilePhoto),
    ),
    text(
        Selector(&[&[Id("about")], &[Class("about-text")], &[Tag("h3")]]),
        Field(ScalarField::AboutTitle),
    ),
    text(
        Selector(&[&[Id("about")], &[Class("about-text")], &[Tag("p")]]),
        Field(ScalarField::AboutBody),
    ),
    text(
        Selector(&[&[Id("contact")], &[Class("section-intro-portfolio")]]),
        Field(ScalarField::ContactIntro),
    ),
    attr(
        Selector(&[
            &[Class("contact-buttons-container")],
            &[Tag("a"), AttrContains("href", "wa.me")],
        ]),
        "href",
        WhatsAppLink,
    ),
    attr(
        Selector(&[
            &[Class("contact-buttons-container")],
            &[Tag("a"), AttrContains("href", "mailto")],
        ]),
        "href",
        MailtoLink,
    ),
    attr(
        Selector(&[&[Class("social-icons")], &[Tag("a"), AttrEq("aria-label", "Facebook")]]),
        "href",
        SocialLink(ScalarField::Facebook),
    ),
    attr(
        Selector(&[&[Class("social-icons")], &[Tag("a"), AttrEq("aria-label", "Instagram")]]),
        "href",
        SocialLink(ScalarField::Instagram),
    ),
    attr(
        Selector(&[&[Class("social-icons")], &[Tag("a"), AttrEq("aria-label", "LinkedIn")]]),
        "href",
        SocialLink(ScalarField::Linkedin),
    ),
    attr(
        Selector(&[&[Class("social-icons")], &[Tag("a"), AttrEq("aria-label", "TikTok")]]),
        "href",
        SocialLink(ScalarField::Tiktok),
    ),
    text(Selector(&[&[Class("copyright")]]), Copyright),
];

/// Container whose children are rebuilt from a section's records
pub const fn container(section: Section) -> Selector {
    match section {
        Section::Skills => Selector(&[&[Id("skills")], &[Class("skills-container")]]),
        Section::Projects => Selector(&[&[Id("projects")], &[Class("projects-grid")]]),
        Section::Testimonials => Selector(&[&[Id("testimonials")], &[Class("swiper-wrapper")]]),
    }
}

/// Carousel root around the testimonial slides
pub const CAROUSEL: Selector = Selector(&[&[Class("testimonial-swiper")]]);

/// Class carried by each testimonial slide
pub const SLIDE_CLASS: &str = "swiper-slide";

/// Update performed by a micro slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MicroAction {
    Text,
    Src,
    Href,
}

#[derive(Debug, Clone, Copy)]
pub struct MicroSlot {
    pub field: &'static str,
    /// Resolved from the record's root element
    pub locator: Selector,
    pub action: MicroAction,
}

const fn slot(field: &'static str, locator: Selector, action: MicroAction) -> MicroSlot {
    MicroSlot {
        field,
        locator,
        action,
    }
}

const SKILL_SLOTS: &[MicroSlot] = &[
    slot("title", Selector(&[&[Tag("h3")]]), MicroAction::Text),
    slot("item1", Selector(&[&[Tag("li"), NthChild(1)]]), MicroAction::Text),
    slot("item2", Selector(&[&[Tag("li"), NthChild(2)]]), MicroAction::Text),
    slot("item3", Selector(&[&[Tag("li"), NthChild(3)]]), MicroAction::Text),
];

const PROJECT_SLOTS: &[MicroSlot] = &[
    slot("title", Selector(&[&[Tag("h3")]]), MicroAction::Text),
    slot("description", Selector(&[&[Tag("p")]]), MicroAction::Text),
    slot(
        "image",
        Selector(&[&[Class("project-img")], &[Tag("img")]]),
        MicroAction::Src,
    ),
    slot(
        "link",
        Selector(&[&[Class("project-links")], &[Tag("a")]]),
        MicroAction::Href,
    ),
];

const TESTIMONIAL_SLOTS: &[MicroSlot] = &[
    slot("text", Selector(&[&[Class("testimonial-text")]]), MicroAction::Text),
    slot("authorName", Selector(&[&[Class("author-name")]]), MicroAction::Text),
    slot("authorTitle", Selector(&[&[Class("author-title")]]), MicroAction::Text),
    slot("authorPhoto", Selector(&[&[Class("author-photo")]]), MicroAction::Src),
];

pub fn micro_slots(section: Section) -> &'static [MicroSlot] {
    match section {
        Section::Skills => SKILL_SLOTS,
        Section::Projects => PROJECT_SLOTS,
        Section::Testimonials => TESTIMONIAL_SLOTS,
    }
}

pub fn micro_slot(section: Section, field: &str) -> Option<&'static MicroSlot> {
    micro_slots(section).iter().find(|slot| slot.field == field)
}
