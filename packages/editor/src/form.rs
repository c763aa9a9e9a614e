//! # Form Model
//!
//! The editing surface: static fields, one repeater per list section, and the
//! per-group error markers validation writes into. The portfolio data model is
//! always read back from here in full.

use crate::validation::{validate_field, Validation};
use folio_render::{PortfolioData, Project, Record, ScalarField, Section, SkillGroup, Testimonial};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputKind {
    Text,
    TextArea,
    Url,
    Email,
}

/// Static description of one input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Input id for static fields, `data-field` tag for repeater fields
    pub tag: &'static str,
    pub label: &'static str,
    pub kind: InputKind,
    pub placeholder: &'static str,
    pub required: bool,
}

const fn spec(
    tag: &'static str,
    label: &'static str,
    kind: InputKind,
    placeholder: &'static str,
    required: bool,
) -> FieldSpec {
    FieldSpec {
        tag,
        label,
        kind,
        placeholder,
        required,
    }
}

use InputKind::*;

pub const STATIC_FIELDS: &[(ScalarField, FieldSpec)] = &[
    (ScalarField::Name, spec("nomComplet", "Full name", Text, "e.g. Amina Koné", true)),
    (ScalarField::Title, spec("titre", "Professional title", Text, "e.g. Digital Content Strategist", true)),
    (ScalarField::Tagline, spec("accroche", "Tagline", TextArea, "One sentence about what you do", false)),
    (ScalarField::Logo, spec("logo", "Logo URL", Url, "https://...", false)),
    (ScalarField::ProfilePhoto, spec("photoProfil", "Profile photo URL", Url, "https://...", false)),
    (ScalarField::AboutTitle, spec("aboutTitre", "About title", Text, "e.g. Your story deserves to be told well.", false)),
    (ScalarField::AboutBody, spec("aboutP", "About text", TextArea, "A few words about you", false)),
    (ScalarField::ContactIntro, spec("contactIntro", "Contact intro", TextArea, "e.g. A project, a question?", false)),
    (ScalarField::Whatsapp, spec("whatsapp", "WhatsApp number", Text, "e.g. 22891234567", false)),
    (ScalarField::Email, spec("email", "Email", Email, "you@example.com", true)),
    (ScalarField::Facebook, spec("facebook", "Facebook URL", Url, "https://facebook.com/...", false)),
    (ScalarField::Instagram, spec("instagram", "Instagram URL", Url, "https://instagram.com/...", false)),
    (ScalarField::Linkedin, spec("linkedin", "LinkedIn URL", Url, "https://linkedin.com/in/...", false)),
    (ScalarField::Tiktok, spec("tiktok", "TikTok URL", Url, "https://tiktok.com/@...", false)),
    (ScalarField::PageTitle, spec("titrePage", "Page title", Text, "e.g. Portfolio | Amina Koné", false)),
    (ScalarField::MetaDescription, spec("metaDescription", "Meta description", TextArea, "Shown by search engines", false)),
    (ScalarField::OgImage, spec("ogImage", "Social preview image URL", Url, "https://...", false)),
];

const SKILL_FIELDS: &[FieldSpec] = &[
    spec("title", "Category title", Text, "e.g. Strategy & Content", false),
    spec("item1", "Skill 1", Text, "e.g. Editorial Calendar", false),
    spec("item2", "Skill 2", Text, "e.g. Copywriting", false),
    spec("item3", "Skill 3", Text, "e.g. SEO", false),
];

const PROJECT_FIELDS: &[FieldSpec] = &[
    spec("title", "Project title", Text, "e.g. Trésors d'Afrique redesign", false),
    spec("description", "Description", TextArea, "Describe the project and its results", false),
    spec("image", "Project image URL", Url, "https://...", false),
    spec("link", "Project link (optional)", Url, "https://...", false),
];

const TESTIMONIAL_FIELDS: &[FieldSpec] = &[
    spec("text", "Testimonial", TextArea, "e.g. Amina transformed our online presence...", false),
    spec("authorName", "Author name", Text, "e.g. Mariam A.", false),
    spec("authorTitle", "Author role", Text, "e.g. Manager, Trésors d'Afrique", false),
    spec("authorPhoto", "Author photo URL", Url, "https://...", false),
];

/// Field schema of one repeater block
pub fn item_schema(section: Section) -> &'static [FieldSpec] {
    match section {
        Section::Skills => SKILL_FIELDS,
        Section::Projects => PROJECT_FIELDS,
        Section::Testimonials => TESTIMONIAL_FIELDS,
    }
}

/// Address of one input in the form
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum FieldRef {
    Static { field: ScalarField },
    Item { section: Section, index: usize, field: String },
}

impl FieldRef {
    pub fn scalar(field: ScalarField) -> Self {
        FieldRef::Static { field }
    }

    pub fn item(section: Section, index: usize, field: impl Into<String>) -> Self {
        FieldRef::Item {
            section,
            index,
            field: field.into(),
        }
    }
}

impl fmt::Display for FieldRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldRef::Static { field } => f.write_str(field.key()),
            FieldRef::Item {
                section,
                index,
                field,
            } => write!(f, "{}[{}].{}", section, index, field),
        }
    }
}

/// One input plus the error state of its containing group
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub spec: FieldSpec,
    pub value: String,
    /// Hidden inputs are exempt from form-wide validity checks
    pub visible: bool,
    /// `has-error` marker of the containing group
    pub has_error: bool,
    /// Text of the group's error slot
    pub error_message: String,
}

impl FormField {
    pub fn new(spec: FieldSpec) -> Self {
        Self {
            spec,
            value: String::new(),
            visible: true,
            has_error: false,
            error_message: String::new(),
        }
    }

    fn mark(&mut self, result: &Validation) {
        self.has_error = !result.valid;
        self.error_message = result.message.clone();
    }
}

/// One repeater block: its fields and a remove control bound to its section
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemBlock {
    pub section: Section,
    pub fields: Vec<FormField>,
}

impl ItemBlock {
    pub fn new(section: Section) -> Self {
        Self {
            section,
            fields: item_schema(section).iter().copied().map(FormField::new).collect(),
        }
    }

    pub fn field(&self, tag: &str) -> Option<&FormField> {
        self.fields.iter().find(|f| f.spec.tag == tag)
    }

    pub fn field_mut(&mut self, tag: &str) -> Option<&mut FormField> {
        self.fields.iter_mut().find(|f| f.spec.tag == tag)
    }

    /// Value of a field by tag (missing tags read as empty)
    pub fn value(&self, tag: &str) -> &str {
        self.field(tag).map(|f| f.value.as_str()).unwrap_or("")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Form {
    statics: Vec<(ScalarField, FormField)>,
    skills: Vec<ItemBlock>,
    projects: Vec<ItemBlock>,
    testimonials: Vec<ItemBlock>,
    /// The whole form is hidden by the layout
    hidden: bool,
    /// Field last scrolled into view
    scroll_target: Option<FieldRef>,
}

impl Default for Form {
    fn default() -> Self {
        Self::new()
    }
}

impl Form {
    /// All static fields empty, no repeater blocks
    pub fn new() -> Self {
        Self {
            statics: STATIC_FIELDS
                .iter()
                .map(|(field, spec)| (*field, FormField::new(*spec)))
                .collect(),
            skills: Vec::new(),
            projects: Vec::new(),
            testimonials: Vec::new(),
            hidden: false,
            scroll_target: None,
        }
    }

    pub fn blocks(&self, section: Section) -> &[ItemBlock] {
        match section {
            Section::Skills => &self.skills,
            Section::Projects => &self.projects,
            Section::Testimonials => &self.testimonials,
        }
    }

    pub(crate) fn blocks_mut(&mut self, section: Section) -> &mut Vec<ItemBlock> {
        match section {
            Section::Skills => &mut self.skills,
            Section::Projects => &mut self.projects,
            Section::Testimonials => &mut self.testimonials,
        }
    }

    pub fn static_field(&self, field: ScalarField) -> Option<&FormField> {
        self.statics.iter().find(|(f, _)| *f == field).map(|(_, input)| input)
    }

    pub(crate) fn static_field_mut(&mut self, field: ScalarField) -> Option<&mut FormField> {
        self.statics
            .iter_mut()
            .find(|(f, _)| *f == field)
            .map(|(_, input)| input)
    }

    pub fn field(&self, at: &FieldRef) -> Option<&FormField> {
        match at {
            FieldRef::Static { field } => self.static_field(*field),
            FieldRef::Item {
                section,
                index,
                field,
            } => self.blocks(*section).get(*index)?.field(field),
        }
    }

    pub fn field_mut(&mut self, at: &FieldRef) -> Option<&mut FormField> {
        match at {
            FieldRef::Static { field } => self.static_field_mut(*field),
            FieldRef::Item {
                section,
                index,
                field,
            } => self.blocks_mut(*section).get_mut(*index)?.field_mut(field),
        }
    }

    /// Every input in document order, with its address
    pub fn fields(&self) -> impl Iterator<Item = (FieldRef, &FormField)> {
        let statics = self
            .statics
            .iter()
            .map(|(field, input)| (FieldRef::scalar(*field), input));
        let items = Section::ALL.into_iter().flat_map(move |section| {
            self.blocks(section).iter().enumerate().flat_map(move |(index, block)| {
                block
                    .fields
                    .iter()
                    .map(move |input| (FieldRef::item(section, index, input.spec.tag), input))
            })
        });
        statics.chain(items)
    }

    /// Append an empty block; returns its position
    pub fn add_item(&mut self, section: Section) -> usize {
        let blocks = self.blocks_mut(section);
        blocks.push(ItemBlock::new(section));
        blocks.len() - 1
    }

    /// Remove the block at `index`, if there is one
    pub fn remove_item(&mut self, section: Section, index: usize) -> Option<ItemBlock> {
        let blocks = self.blocks_mut(section);
        (index < blocks.len()).then(|| blocks.remove(index))
    }

    /// Read one repeater back into records, block order preserved
    pub fn collect<R: Record>(&self) -> Vec<R> {
        self.blocks(R::SECTION)
            .iter()
            .map(|block| R::from_fields(|tag| block.field(tag).map(|f| f.value.as_str())))
            .collect()
    }

    /// Rebuild the whole data model from current form state
    pub fn collect_all(&self) -> PortfolioData {
        let mut data = PortfolioData::blank();
        for (field, input) in &self.statics {
            *data.scalar_mut(*field) = input.value.clone();
        }
        data.skills = self.collect::<SkillGroup>();
        data.projects = self.collect::<Project>();
        data.testimonials = self.collect::<Testimonial>();
        data
    }

    /// Validate one field and update its group's marker
    pub fn validate(&mut self, at: &FieldRef) -> Option<Validation> {
        let input = self.field_mut(at)?;
        let result = validate_field(input);
        input.mark(&result);
        Some(result)
    }

    /// Validate every visible field without stopping at the first failure
    pub fn check_validity(&mut self) -> bool {
        if self.hidden {
            return true;
        }
        let mut valid = true;
        let inputs = self
            .statics
            .iter_mut()
            .map(|(_, input)| input)
            .chain(
                self.skills
                    .iter_mut()
                    .chain(self.projects.iter_mut())
                    .chain(self.testimonials.iter_mut())
                    .flat_map(|block| block.fields.iter_mut()),
            );
        for input in inputs.filter(|input| input.visible) {
            let result = validate_field(input);
            input.mark(&result);
            valid &= result.valid;
        }
        valid
    }

    /// First field whose group carries the error marker
    pub fn first_error(&self) -> Option<FieldRef> {
        self.fields()
            .find(|(_, input)| input.has_error)
            .map(|(at, _)| at)
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }

    pub fn set_visible(&mut self, at: &FieldRef, visible: bool) -> bool {
        match self.field_mut(at) {
            Some(input) => {
                input.visible = visible;
                true
            }
            None => false,
        }
    }

    pub fn scroll_target(&self) -> Option<&FieldRef> {
        self.scroll_target.as_ref()
    }

    pub fn scroll_into_view(&mut self, at: FieldRef) {
        self.scroll_target = Some(at);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_schema_covers_every_scalar() {
        let form = Form::new();
        for field in ScalarField::ALL {
            let input = form.static_field(field).unwrap();
            assert_eq!(input.spec.tag, field.key());
        }
    }

    #[test]
    fn test_item_schema_matches_records() {
        for section in Section::ALL {
            let tags: Vec<_> = item_schema(section).iter().map(|s| s.tag).collect();
            assert_eq!(tags, section.fields());
        }
    }

    #[test]
    fn test_collect_reads_blocks_in_order() {
        let mut form = Form::new();
        for title in ["A", "B"] {
            let index = form.add_item(Section::Projects);
            form.field_mut(&FieldRef::item(Section::Projects, index, "title"))
                .unwrap()
                .value = title.into();
        }

        let projects: Vec<Project> = form.collect();
        assert_eq!(projects.len(), 2);
        assert_eq!(projects[0].title, "A");
        assert_eq!(projects[1].title, "B");
        assert_eq!(projects[1].link, "");
    }

    #[test]
    fn test_remove_item_by_position() {
        let mut form = Form::new();
        form.add_item(Section::Skills);
        assert!(form.remove_item(Section::Skills, 3).is_none());
        assert!(form.remove_item(Section::Skills, 0).is_some());
        assert!(form.blocks(Section::Skills).is_empty());
    }

    #[test]
    fn test_check_validity_marks_every_failure() {
        let mut form = Form::new();
        form.field_mut(&FieldRef::scalar(ScalarField::Logo)).unwrap().value = "nope".into();

        assert!(!form.check_validity());

        let marked: Vec<_> = form
            .fields()
            .filter(|(_, input)| input.has_error)
            .map(|(at, _)| at.to_string())
            .collect();
        assert_eq!(marked, vec!["nomComplet", "titre", "logo", "email"]);
        assert_eq!(form.first_error(), Some(FieldRef::scalar(ScalarField::Name)));
    }

    #[test]
    fn test_hidden_fields_are_exempt() {
        let mut form = Form::new();
        for field in [ScalarField::Name, ScalarField::Title, ScalarField::Email] {
            assert!(form.set_visible(&FieldRef::scalar(field), false));
        }
        assert!(form.check_validity());
        assert!(!form.static_field(ScalarField::Name).unwrap().has_error);
    }

    #[test]
    fn test_hidden_form_keeps_markers() {
        let mut form = Form::new();
        form.check_validity();
        form.set_hidden(true);

        assert!(form.check_validity());
        assert!(form.static_field(ScalarField::Email).unwrap().has_error);
    }

    #[test]
    fn test_validate_clears_marker() {
        let mut form = Form::new();
        let at = FieldRef::scalar(ScalarField::Email);
        form.validate(&at);
        assert!(form.field(&at).unwrap().has_error);

        form.field_mut(&at).unwrap().value = "a@b.co".into();
        let result = form.validate(&at).unwrap();
        assert!(result.valid);
        let input = form.field(&at).unwrap();
        assert!(!input.has_error);
        assert_eq!(input.error_message, "");
    }

    #[test]
    fn test_field_ref_display() {
        assert_eq!(
            FieldRef::item(Section::Testimonials, 2, "authorName").to_string(),
            "testimonials[2].authorName"
        );
    }
}
