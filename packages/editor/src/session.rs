//! # Edit Session
//!
//! The controller. An EditSession owns the form, the current data model, the
//! host side of the preview channel and the preview frame itself, and turns
//! user actions into form edits, projections and validity checks.
//!
//! Sessions only exist once the template fetch has resolved, so nothing can be
//! projected before the template is known.

use crate::errors::EditorError;
use crate::export::{DownloadSink, ExportArtifact, ExportOutcome};
use crate::form::{FieldRef, Form};
use crate::mutations::{EditOutcome, FormEdit};
use crate::preferences::Theme;
use crate::projector::Projector;
use folio_common::{TemplateError, TemplateResult, TemplateSource};
use folio_compiler_html::{compile_to_html, CompileOptions};
use folio_parser::{parse_template, VirtualDomDocument};
use folio_render::{
    connect, Capabilities, Message, PortfolioData, PreviewFrame, RenderOptions, Section,
};

pub struct SessionOptions {
    pub render: RenderOptions,
    pub capabilities: Capabilities,
    /// Re-indent exported markup
    pub pretty: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            render: RenderOptions::default(),
            capabilities: Capabilities::none(),
            pretty: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Form and preview side by side
    Editing,
    /// Preview fills the window, form hidden
    FullscreenPreview,
}

/// What the preview is built from
#[derive(Debug, Clone)]
pub enum Preview {
    Live { base: VirtualDomDocument },
    Unavailable { headline: String, detail: String },
}

pub struct EditSession {
    form: Form,
    data: PortfolioData,
    pristine: bool,
    export_disabled: bool,
    confirmation_visible: bool,
    layout: Layout,
    preview: Preview,
    projector: Projector,
    frame: PreviewFrame,
    pretty: bool,
}

impl EditSession {
    /// Fetch the template and open a session over it
    pub async fn start<S: TemplateSource>(
        source: &S,
        path: &str,
        options: SessionOptions,
    ) -> Self {
        let fetched = source.fetch(path).await;
        Self::from_fetch(fetched, options)
    }

    /// Open a session from an already resolved template fetch
    pub fn from_fetch(fetched: TemplateResult<String>, options: SessionOptions) -> Self {
        let parsed = fetched.and_then(|source| {
            parse_template(&source).map_err(|err| TemplateError::Malformed(err.to_string()))
        });
        let preview = match parsed {
            Ok(base) => Preview::Live { base },
            Err(err) => Preview::Unavailable {
                headline: err.headline().to_string(),
                detail: err.to_string(),
            },
        };

        let (host, end) = connect();
        let mut frame = PreviewFrame::new(end, options.render, options.capabilities);
        if let Preview::Unavailable { headline, detail } = &preview {
            frame.show_fault(headline, detail);
        }

        let mut session = Self {
            form: Form::new(),
            data: PortfolioData::demo(),
            pristine: true,
            export_disabled: true,
            confirmation_visible: false,
            layout: Layout::Editing,
            preview,
            projector: Projector::new(host),
            frame,
            pretty: options.pretty,
        };

        tracing::info!(
            live = session.is_preview_live(),
            "Edit session started"
        );
        session.project();
        session.refresh_validity();
        session
    }

    pub fn form(&self) -> &Form {
        &self.form
    }

    /// Current data model (the demo content while pristine)
    pub fn data(&self) -> &PortfolioData {
        &self.data
    }

    pub fn is_pristine(&self) -> bool {
        self.pristine
    }

    pub fn is_export_disabled(&self) -> bool {
        self.export_disabled
    }

    pub fn is_confirmation_visible(&self) -> bool {
        self.confirmation_visible
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn preview(&self) -> &Preview {
        &self.preview
    }

    pub fn is_preview_live(&self) -> bool {
        matches!(self.preview, Preview::Live { .. })
    }

    pub fn frame(&self) -> &PreviewFrame {
        &self.frame
    }

    pub fn projector(&self) -> &Projector {
        &self.projector
    }

    /// Apply a form edit. Anything but appending a block counts as an
    /// interaction: the model is rebuilt from the whole form and projected.
    pub fn handle_input(&mut self, edit: FormEdit) -> Result<EditOutcome, EditorError> {
        let outcome = edit.apply(&mut self.form)?;
        if edit.is_interaction() {
            self.interaction();
        }
        Ok(outcome)
    }

    /// Append an empty block
    pub fn add_item(&mut self, section: Section) -> usize {
        self.form.add_item(section)
    }

    pub fn remove_item(&mut self, section: Section, index: usize) -> Result<(), EditorError> {
        self.handle_input(FormEdit::RemoveItem { section, index })?;
        Ok(())
    }

    /// Focus left a field
    pub fn handle_blur(&mut self, at: &FieldRef) {
        self.form.validate(at);
        self.refresh_validity();
    }

    fn interaction(&mut self) {
        if self.pristine {
            self.data = PortfolioData::blank();
            self.pristine = false;
        }
        self.data = self.form.collect_all();
        self.project();
        self.refresh_validity();
    }

    /// Reload the preview from the template and queue the current snapshot
    fn project(&mut self) {
        let Preview::Live { base } = &self.preview else {
            tracing::debug!("Preview unavailable, skipping projection");
            return;
        };
        let generation = self.frame.reload(base);
        self.projector.begin_reload(generation);
        self.projector.post(Message::FullUpdate(self.data.clone()));
    }

    fn refresh_validity(&mut self) -> bool {
        let valid = self.form.check_validity();
        self.export_disabled = !valid;
        valid
    }

    /// Update one field of one rendered record without a reload
    pub fn post_micro_update(
        &mut self,
        section: Section,
        index: usize,
        field: impl Into<String>,
        content: impl Into<String>,
    ) {
        self.projector.post(Message::MicroUpdate {
            section,
            index,
            field: field.into(),
            content: content.into(),
        });
    }

    pub fn scroll_preview_to(&mut self, section_id: impl Into<String>) {
        self.projector
            .post(Message::ScrollToSection(section_id.into()));
    }

    pub fn apply_theme(&mut self, theme: Theme) {
        self.projector.post(Message::UpdateTheme(theme.variables()));
    }

    pub fn enter_fullscreen_preview(&mut self) {
        self.layout = Layout::FullscreenPreview;
        self.form.set_hidden(true);
    }

    pub fn exit_fullscreen_preview(&mut self) {
        self.layout = Layout::Editing;
        self.form.set_hidden(false);
    }

    pub fn dismiss_confirmation(&mut self) {
        self.confirmation_visible = false;
    }

    /// Drive the frame and the projector until neither has work left
    pub fn run_until_idle(&mut self) {
        loop {
            let frame_busy = self.frame.pump();
            let sent = self.projector.poll();
            if !frame_busy && sent == 0 {
                break;
            }
        }
    }

    /// Serialize the live preview and hand it to `sink`, unless validation
    /// fails, in which case the first failing field is scrolled into view.
    pub fn export(&mut self, sink: &mut dyn DownloadSink) -> Result<ExportOutcome, EditorError> {
        self.run_until_idle();

        if !self.refresh_validity() {
            let field = self.form.first_error();
            if let Some(at) = &field {
                tracing::info!(field = %at, "Export blocked by validation");
                self.form.scroll_into_view(at.clone());
            }
            return Ok(ExportOutcome::Blocked { field });
        }

        if let Preview::Unavailable { headline, .. } = &self.preview {
            return Err(EditorError::PreviewUnavailable(headline.clone()));
        }

        let options = if self.pretty {
            CompileOptions::pretty()
        } else {
            CompileOptions::default()
        };
        let artifact = ExportArtifact::html(compile_to_html(self.frame.document(), options));
        sink.deliver(&artifact)?;

        self.confirmation_visible = true;
        tracing::info!(bytes = artifact.content.len(), "Exported {}", artifact.file_name);
        Ok(ExportOutcome::Delivered {
            bytes: artifact.content.len(),
            file_name: artifact.file_name,
        })
    }
}
