//! # Form Edits
//!
//! User intent against the form, expressed as data.
//!
//! ## Edit Semantics
//!
//! ### SetField / SetItemField
//! - Atomic replacement of the input value
//! - Fails if the block or field tag does not exist
//!
//! ### AddItem
//! - Appends an empty block at the end of the section
//! - Not an interaction: the preview is left alone until a field is typed into
//!
//! ### RemoveItem
//! - Removes the block at that position; later blocks shift down

use crate::form::{item_schema, FieldRef, Form};
use folio_render::{PortfolioData, Record, ScalarField, Section};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "edit", rename_all = "camelCase")]
pub enum FormEdit {
    SetField {
        field: ScalarField,
        value: String,
    },

    AddItem {
        section: Section,
    },

    SetItemField {
        section: Section,
        index: usize,
        field: String,
        value: String,
    },

    RemoveItem {
        section: Section,
        index: usize,
    },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EditError {
    #[error("No {section} block at position {index} (there are {len})")]
    IndexOutOfRange {
        section: Section,
        index: usize,
        len: usize,
    },

    #[error("Unknown {section} field: {field}")]
    UnknownField { section: Section, field: String },
}

/// What an applied edit did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    /// A value changed or a block went away
    Changed(Option<FieldRef>),
    /// A block was appended at this position
    Appended(usize),
}

impl FormEdit {
    /// Counts as user interaction (rebuild, project, re-validate)
    pub fn is_interaction(&self) -> bool {
        !matches!(self, FormEdit::AddItem { .. })
    }

    /// Apply the edit with validation
    pub fn apply(&self, form: &mut Form) -> Result<EditOutcome, EditError> {
        self.validate(form)?;

        match self {
            FormEdit::SetField { field, value } => {
                let at = FieldRef::scalar(*field);
                if let Some(input) = form.field_mut(&at) {
                    input.value = value.clone();
                }
                Ok(EditOutcome::Changed(Some(at)))
            }

            FormEdit::AddItem { section } => Ok(EditOutcome::Appended(form.add_item(*section))),

            FormEdit::SetItemField {
                section,
                index,
                field,
                value,
            } => {
                let at = FieldRef::item(*section, *index, field.as_str());
                if let Some(input) = form.field_mut(&at) {
                    input.value = value.clone();
                }
                Ok(EditOutcome::Changed(Some(at)))
            }

            FormEdit::RemoveItem { section, index } => {
                form.remove_item(*section, *index);
                Ok(EditOutcome::Changed(None))
            }
        }
    }

    /// Edits that type `data` into an empty form, field by field
    pub fn typing(data: &PortfolioData) -> Vec<FormEdit> {
        let mut edits: Vec<FormEdit> = ScalarField::ALL
            .into_iter()
            .map(|field| FormEdit::SetField {
                field,
                value: data.scalar(field).to_string(),
            })
            .collect();

        push_records(&mut edits, &data.skills);
        push_records(&mut edits, &data.projects);
        push_records(&mut edits, &data.testimonials);
        edits
    }

    /// Check the edit's address against the form
    pub fn validate(&self, form: &Form) -> Result<(), EditError> {
        match self {
            FormEdit::SetField { .. } | FormEdit::AddItem { .. } => Ok(()),

            FormEdit::SetItemField {
                section,
                index,
                field,
                ..
            } => {
                check_index(form, *section, *index)?;
                if item_schema(*section).iter().any(|spec| spec.tag == field) {
                    Ok(())
                } else {
                    Err(EditError::UnknownField {
                        section: *section,
                        field: field.clone(),
                    })
                }
            }

            FormEdit::RemoveItem { section, index } => check_index(form, *section, *index),
        }
    }
}

fn push_records<R: Record>(edits: &mut Vec<FormEdit>, records: &[R]) {
    for (index, record) in records.iter().enumerate() {
        edits.push(FormEdit::AddItem { section: R::SECTION });
        for tag in R::FIELDS {
            edits.push(FormEdit::SetItemField {
                section: R::SECTION,
                index,
                field: tag.to_string(),
                value: record.field(tag).unwrap_or_default().to_string(),
            });
        }
    }
}

fn check_index(form: &Form, section: Section, index: usize) -> Result<(), EditError> {
    let len = form.blocks(section).len();
    if index < len {
        Ok(())
    } else {
        Err(EditError::IndexOutOfRange {
            section,
            index,
            len,
        })
    }
}
