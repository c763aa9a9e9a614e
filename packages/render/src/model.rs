//! # Portfolio Data Model
//!
//! The canonical snapshot of everything the author has written. It is rebuilt
//! from the form on every interaction and shipped whole to the preview, so it
//! is plain data: no identity, no caching, no partial state.
//!
//! Wire keys match the page script the templates were written against
//! (`nomComplet`, `titre`, ...). Every key is optional on decode, and a
//! `null` reads as the empty value.

use serde::{Deserialize, Deserializer, Serialize};

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// One of the three list-backed sections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Skills,
    Projects,
    Testimonials,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::Skills, Section::Projects, Section::Testimonials];

    pub fn as_str(self) -> &'static str {
        match self {
            Section::Skills => "skills",
            Section::Projects => "projects",
            Section::Testimonials => "testimonials",
        }
    }

    /// Field tags of one record, in form order
    pub fn fields(self) -> &'static [&'static str] {
        match self {
            Section::Skills => SkillGroup::FIELDS,
            Section::Projects => Project::FIELDS,
            Section::Testimonials => Testimonial::FIELDS,
        }
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Section {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Section::ALL
            .into_iter()
            .find(|section| section.as_str() == s)
            .ok_or_else(|| format!("Unknown section: {}", s))
    }
}

/// A structured sub-record addressed by field tag
pub trait Record: Default {
    const SECTION: Section;
    const FIELDS: &'static [&'static str];

    fn field(&self, tag: &str) -> Option<&str>;

    fn field_mut(&mut self, tag: &str) -> Option<&mut String>;

    /// Whether the record produces any markup
    fn is_rendered(&self) -> bool;

    /// Build a record from a tag lookup; missing tags stay empty
    fn from_fields<'a>(mut lookup: impl FnMut(&str) -> Option<&'a str>) -> Self {
        let mut record = Self::default();
        for tag in Self::FIELDS {
            if let (Some(slot), Some(value)) = (record.field_mut(tag), lookup(tag)) {
                *slot = value.to_string();
            }
        }
        record
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillGroup {
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub item1: String,
    #[serde(deserialize_with = "null_as_default")]
    pub item2: String,
    #[serde(deserialize_with = "null_as_default")]
    pub item3: String,
}

impl SkillGroup {
    /// Non-blank items, trimmed
    pub fn items(&self) -> impl Iterator<Item = &str> {
        [&self.item1, &self.item2, &self.item3]
            .into_iter()
            .map(|item| item.trim())
            .filter(|item| !item.is_empty())
    }
}

impl Record for SkillGroup {
    const SECTION: Section = Section::Skills;
    const FIELDS: &'static [&'static str] = &["title", "item1", "item2", "item3"];

    fn field(&self, tag: &str) -> Option<&str> {
        match tag {
            "title" => Some(&self.title),
            "item1" => Some(&self.item1),
            "item2" => Some(&self.item2),
            "item3" => Some(&self.item3),
            _ => None,
        }
    }

    fn field_mut(&mut self, tag: &str) -> Option<&mut String> {
        match tag {
            "title" => Some(&mut self.title),
            "item1" => Some(&mut self.item1),
            "item2" => Some(&mut self.item2),
            "item3" => Some(&mut self.item3),
            _ => None,
        }
    }

    fn is_rendered(&self) -> bool {
        !self.title.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub image: String,
    #[serde(deserialize_with = "null_as_default")]
    pub link: String,
}

impl Record for Project {
    const SECTION: Section = Section::Projects;
    const FIELDS: &'static [&'static str] = &["title", "description", "image", "link"];

    fn field(&self, tag: &str) -> Option<&str> {
        match tag {
            "title" => Some(&self.title),
            "description" => Some(&self.description),
            "image" => Some(&self.image),
            "link" => Some(&self.link),
            _ => None,
        }
    }

    fn field_mut(&mut self, tag: &str) -> Option<&mut String> {
        match tag {
            "title" => Some(&mut self.title),
            "description" => Some(&mut self.description),
            "image" => Some(&mut self.image),
            "link" => Some(&mut self.link),
            _ => None,
        }
    }

    fn is_rendered(&self) -> bool {
        !self.title.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Testimonial {
    #[serde(deserialize_with = "null_as_default")]
    pub text: String,
    #[serde(deserialize_with = "null_as_default")]
    pub author_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub author_title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub author_photo: String,
}

impl Record for Testimonial {
    const SECTION: Section = Section::Testimonials;
    const FIELDS: &'static [&'static str] = &["text", "authorName", "authorTitle", "authorPhoto"];

    fn field(&self, tag: &str) -> Option<&str> {
        match tag {
            "text" => Some(&self.text),
            "authorName" => Some(&self.author_name),
            "authorTitle" => Some(&self.author_title),
            "authorPhoto" => Some(&self.author_photo),
            _ => None,
        }
    }

    fn field_mut(&mut self, tag: &str) -> Option<&mut String> {
        match tag {
            "text" => Some(&mut self.text),
            "authorName" => Some(&mut self.author_name),
            "authorTitle" => Some(&mut self.author_title),
            "authorPhoto" => Some(&mut self.author_photo),
            _ => None,
        }
    }

    fn is_rendered(&self) -> bool {
        !self.text.is_empty() && !self.author_name.is_empty()
    }
}

/// Scalar (non-list) fields of the portfolio
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScalarField {
    #[serde(rename = "nomComplet")]
    Name,
    #[serde(rename = "titre")]
    Title,
    #[serde(rename = "accroche")]
    Tagline,
    #[serde(rename = "logo")]
    Logo,
    #[serde(rename = "photoProfil")]
    ProfilePhoto,
    #[serde(rename = "aboutTitre")]
    AboutTitle,
    #[serde(rename = "aboutP")]
    AboutBody,
    #[serde(rename = "contactIntro")]
    ContactIntro,
    #[serde(rename = "whatsapp")]
    Whatsapp,
    #[serde(rename = "email")]
    Email,
    #[serde(rename = "facebook")]
    Facebook,
    #[serde(rename = "instagram")]
    Instagram,
    #[serde(rename = "linkedin")]
    Linkedin,
    #[serde(rename = "tiktok")]
    Tiktok,
    #[serde(rename = "titrePage")]
    PageTitle,
    #[serde(rename = "metaDescription")]
    MetaDescription,
    #[serde(rename = "ogImage")]
    OgImage,
}

impl ScalarField {
    pub const ALL: [ScalarField; 17] = [
        ScalarField::Name,
        ScalarField::Title,
        ScalarField::Tagline,
        ScalarField::Logo,
        ScalarField::ProfilePhoto,
        ScalarField::AboutTitle,
        ScalarField::AboutBody,
        ScalarField::ContactIntro,
        ScalarField::Whatsapp,
        ScalarField::Email,
        ScalarField::Facebook,
        ScalarField::Instagram,
        ScalarField::Linkedin,
        ScalarField::Tiktok,
        ScalarField::PageTitle,
        ScalarField::MetaDescription,
        ScalarField::OgImage,
    ];

    /// Wire key (also the form input id)
    pub fn key(self) -> &'static str {
        match self {
            ScalarField::Name => "nomComplet",
            ScalarField::Title => "titre",
            ScalarField::Tagline => "accroche",
            ScalarField::Logo => "logo",
            ScalarField::ProfilePhoto => "photoProfil",
            ScalarField::AboutTitle => "aboutTitre",
            ScalarField::AboutBody => "aboutP",
            ScalarField::ContactIntro => "contactIntro",
            ScalarField::Whatsapp => "whatsapp",
            ScalarField::Email => "email",
            ScalarField::Facebook => "facebook",
            ScalarField::Instagram => "instagram",
            ScalarField::Linkedin => "linkedin",
            ScalarField::Tiktok => "tiktok",
            ScalarField::PageTitle => "titrePage",
            ScalarField::MetaDescription => "metaDescription",
            ScalarField::OgImage => "ogImage",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.key() == key)
    }
}

/// Canonical snapshot of all authored content
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortfolioData {
    #[serde(rename = "nomComplet")]
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(rename = "titre")]
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(rename = "accroche")]
    #[serde(deserialize_with = "null_as_default")]
    pub tagline: String,
    #[serde(deserialize_with = "null_as_default")]
    pub logo: String,
    #[serde(rename = "photoProfil")]
    #[serde(deserialize_with = "null_as_default")]
    pub profile_photo: String,
    #[serde(rename = "aboutTitre")]
    #[serde(deserialize_with = "null_as_default")]
    pub about_title: String,
    #[serde(rename = "aboutP")]
    #[serde(deserialize_with = "null_as_default")]
    pub about_body: String,
    #[serde(rename = "contactIntro")]
    #[serde(deserialize_with = "null_as_default")]
    pub contact_intro: String,
    #[serde(deserialize_with = "null_as_default")]
    pub whatsapp: String,
    #[serde(deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(deserialize_with = "null_as_default")]
    pub facebook: String,
    #[serde(deserialize_with = "null_as_default")]
    pub instagram: String,
    #[serde(deserialize_with = "null_as_default")]
    pub linkedin: String,
    #[serde(deserialize_with = "null_as_default")]
    pub tiktok: String,
    #[serde(rename = "titrePage")]
    #[serde(deserialize_with = "null_as_default")]
    pub page_title: String,
    #[serde(rename = "metaDescription")]
    #[serde(deserialize_with = "null_as_default")]
    pub meta_description: String,
    #[serde(rename = "ogImage")]
    #[serde(deserialize_with = "null_as_default")]
    pub og_image: String,
    #[serde(deserialize_with = "null_as_default")]
    pub skills: Vec<SkillGroup>,
    #[serde(deserialize_with = "null_as_default")]
    pub projects: Vec<Project>,
    #[serde(deserialize_with = "null_as_default")]
    pub testimonials: Vec<Testimonial>,
}

impl PortfolioData {
    /// All fields empty, all lists empty
    pub fn blank() -> Self {
        Self::default()
    }

    /// Sample content shown until the first edit
    pub fn demo() -> Self {
        Self {
            name: "Amina Koné".into(),
            title: "Digital Content Strategist".into(),
            tagline: "I build bridges between your craft and your digital audience.".into(),
            logo: "https://i.postimg.cc/0yvG60sL/file-00000000848c61f8a4258e05177b8d23.png".into(),
            profile_photo: "https://i.postimg.cc/cCmxFWv7/ghjj.png".into(),
            about_title: "Your story deserves to be told well.".into(),
            about_body: "Passionate about the treasures of our local culture...".into(),
            contact_intro: "A project, a question, an opportunity?".into(),
            whatsapp: "22891234567".into(),
            email: "contact@aminakone.com".into(),
            facebook: "#".into(),
            instagram: "#".into(),
            linkedin: "#".into(),
            tiktok: "#".into(),
            page_title: "Portfolio | Amina Koné".into(),
            meta_description: "I build bridges between your craft and your digital audience.".into(),
            og_image: "https://i.postimg.cc/DZbLWMNQ/file-000000000870623092ddda64044457d7.png".into(),
            skills: vec![SkillGroup {
                title: "Strategy & Content".into(),
                item1: "Editorial Calendar".into(),
                item2: "Copywriting".into(),
                item3: "Community Management".into(),
            }],
            projects: vec![Project {
                title: "\"Trésors d'Afrique\" - Jewellery".into(),
                description: "Instagram page redesign...".into(),
                image: "https://i.postimg.cc/QxNtgZT8/file-00000000cbe462309cfa73d75f72a3ed.png".into(),
                link: "#".into(),
            }],
            testimonials: vec![Testimonial {
                text: "Amina transformed our online presence...".into(),
                author_name: "Jean Dupont".into(),
                author_title: "Manager, Trésors d'Afrique".into(),
                author_photo: "https://i.postimg.cc/TwBgTr0N/202fb21b3b1567ac1714898f04cc541e-1.jpg".into(),
            }],
        }
    }

    pub fn scalar(&self, field: ScalarField) -> &str {
        match field {
            ScalarField::Name => &self.name,
            ScalarField::Title => &self.title,
            ScalarField::Tagline => &self.tagline,
            ScalarField::Logo => &self.logo,
            ScalarField::ProfilePhoto => &self.profile_photo,
            ScalarField::AboutTitle => &self.about_title,
            ScalarField::AboutBody => &self.about_body,
            ScalarField::ContactIntro => &self.contact_intro,
            ScalarField::Whatsapp => &self.whatsapp,
            ScalarField::Email => &self.email,
            ScalarField::Facebook => &self.facebook,
            ScalarField::Instagram => &self.instagram,
            ScalarField::Linkedin => &self.linkedin,
            ScalarField::Tiktok => &self.tiktok,
            ScalarField::PageTitle => &self.page_title,
            ScalarField::MetaDescription => &self.meta_description,
            ScalarField::OgImage => &self.og_image,
        }
    }

    pub fn scalar_mut(&mut self, field: ScalarField) -> &mut String {
        match field {
            ScalarField::Name => &mut self.name,
            ScalarField::Title => &mut self.title,
            ScalarField::Tagline => &mut self.tagline,
            ScalarField::Logo => &mut self.logo,
            ScalarField::ProfilePhoto => &mut self.profile_photo,
            ScalarField::AboutTitle => &mut self.about_title,
            ScalarField::AboutBody => &mut self.about_body,
            ScalarField::ContactIntro => &mut self.contact_intro,
            ScalarField::Whatsapp => &mut self.whatsapp,
            ScalarField::Email => &mut self.email,
            ScalarField::Facebook => &mut self.facebook,
            ScalarField::Instagram => &mut self.instagram,
            ScalarField::Linkedin => &mut self.linkedin,
            ScalarField::Tiktok => &mut self.tiktok,
            ScalarField::PageTitle => &mut self.page_title,
            ScalarField::MetaDescription => &mut self.meta_description,
            ScalarField::OgImage => &mut self.og_image,
        }
    }
}
