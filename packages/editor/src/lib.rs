//! # Folio Editor
//!
//! The editing side of the portfolio builder.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ form: static fields + repeater blocks       │
//! │  - FormEdit applied with validation         │
//! │  - per-field rules, form-wide validity      │
//! └─────────────────────────────────────────────┘
//!                     ↓ collect_all
//! ┌─────────────────────────────────────────────┐
//! │ session: pristine → dirty, projection,      │
//! │          export gating                      │
//! └─────────────────────────────────────────────┘
//!                     ↓ Message (JSON)
//! ┌─────────────────────────────────────────────┐
//! │ render: preview frame + reconciler          │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use folio_common::MockTemplateSource;
//! use folio_editor::{EditSession, FormEdit, MemoryDownloads, SessionOptions};
//! use folio_render::ScalarField;
//!
//! let source = MockTemplateSource::new().with_template("template-prestige.html", html);
//! let mut session = EditSession::start(&source, "template-prestige.html", SessionOptions::default()).await;
//!
//! session.handle_input(FormEdit::SetField {
//!     field: ScalarField::Name,
//!     value: "Ada Lovelace".into(),
//! })?;
//!
//! let mut downloads = MemoryDownloads::new();
//! session.export(&mut downloads)?;
//! ```

mod errors;
mod export;
mod form;
mod mutations;
mod preferences;
mod projector;
mod session;
mod validation;

pub use errors::EditorError;
pub use export::{
    DownloadSink, ExportArtifact, ExportOutcome, FsDownloadSink, MemoryDownloads, EXPORT_FILE_NAME,
    EXPORT_MIME,
};
pub use form::{item_schema, FieldRef, FieldSpec, Form, FormField, InputKind, ItemBlock, STATIC_FIELDS};
pub use mutations::{EditError, EditOutcome, FormEdit};
pub use preferences::{
    load_theme, save_theme, JsonFilePreferences, MemoryPreferences, PreferenceStore, Theme, THEME_KEY,
};
pub use projector::Projector;
pub use session::{EditSession, Layout, Preview, SessionOptions};
pub use validation::{
    is_absolute_url, is_email, validate_field, validate_value, Validation, EMAIL_MESSAGE,
    REQUIRED_MESSAGE, URL_MESSAGE,
};

// Re-export common types for convenience
pub use folio_render::{PortfolioData, ScalarField, Section};
