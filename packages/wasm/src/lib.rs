use folio_common::{TemplateError, DEFAULT_TEMPLATE_PATH};
use folio_compiler_html::{compile_to_html, CompileOptions};
use folio_editor::{
    EditSession, ExportOutcome, FieldRef, FormEdit, MemoryDownloads, SessionOptions, Theme,
};
use folio_render::{Capabilities, RenderOptions, ScalarField, Section};
use serde::Serialize;
use std::fmt::Display;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

fn js_error(err: impl Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn section(name: &str) -> Result<Section, JsValue> {
    name.parse::<Section>().map_err(js_error)
}

fn scalar(key: &str) -> Result<ScalarField, JsValue> {
    ScalarField::from_key(key).ok_or_else(|| js_error(format!("Unknown field: {}", key)))
}

#[derive(Serialize)]
struct FieldErrorJson {
    field: String,
    message: String,
}

/// One editing session, driven from the host page
#[wasm_bindgen]
pub struct FolioEditor {
    session: EditSession,
}

#[wasm_bindgen]
impl FolioEditor {
    /// Open a session over a fetched template. Pass `None` with the HTTP
    /// status when the fetch failed.
    #[wasm_bindgen(constructor)]
    pub fn new(template: Option<String>, status: u16, year: i32) -> FolioEditor {
        let fetched = template.ok_or(TemplateError::Status {
            path: DEFAULT_TEMPLATE_PATH.to_string(),
            status,
        });
        let options = SessionOptions {
            render: RenderOptions::for_year(year),
            capabilities: Capabilities::none(),
            pretty: false,
        };
        let mut session = EditSession::from_fetch(fetched, options);
        session.run_until_idle();
        FolioEditor { session }
    }

    /// Apply a JSON-encoded form edit
    #[wasm_bindgen(js_name = applyEdit)]
    pub fn apply_edit(&mut self, edit_json: &str) -> Result<(), JsValue> {
        let edit: FormEdit = serde_json::from_str(edit_json).map_err(js_error)?;
        self.apply(edit)
    }

    #[wasm_bindgen(js_name = setField)]
    pub fn set_field(&mut self, key: &str, value: &str) -> Result<(), JsValue> {
        self.apply(FormEdit::SetField {
            field: scalar(key)?,
            value: value.to_string(),
        })
    }

    #[wasm_bindgen(js_name = addItem)]
    pub fn add_item(&mut self, section_name: &str) -> Result<usize, JsValue> {
        Ok(self.session.add_item(section(section_name)?))
    }

    #[wasm_bindgen(js_name = setItemField)]
    pub fn set_item_field(
        &mut self,
        section_name: &str,
        index: usize,
        field: &str,
        value: &str,
    ) -> Result<(), JsValue> {
        self.apply(FormEdit::SetItemField {
            section: section(section_name)?,
            index,
            field: field.to_string(),
            value: value.to_string(),
        })
    }

    #[wasm_bindgen(js_name = removeItem)]
    pub fn remove_item(&mut self, section_name: &str, index: usize) -> Result<(), JsValue> {
        self.apply(FormEdit::RemoveItem {
            section: section(section_name)?,
            index,
        })
    }

    /// Focus left a static field
    #[wasm_bindgen(js_name = blurField)]
    pub fn blur_field(&mut self, key: &str) -> Result<(), JsValue> {
        self.session.handle_blur(&FieldRef::scalar(scalar(key)?));
        Ok(())
    }

    /// Focus left a repeater field
    #[wasm_bindgen(js_name = blurItemField)]
    pub fn blur_item_field(&mut self, section_name: &str, index: usize, field: &str) -> Result<(), JsValue> {
        self.session
            .handle_blur(&FieldRef::item(section(section_name)?, index, field));
        Ok(())
    }

    #[wasm_bindgen(getter, js_name = exportDisabled)]
    pub fn export_disabled(&self) -> bool {
        self.session.is_export_disabled()
    }

    #[wasm_bindgen(getter, js_name = isPristine)]
    pub fn is_pristine(&self) -> bool {
        self.session.is_pristine()
    }

    #[wasm_bindgen(getter, js_name = confirmationVisible)]
    pub fn confirmation_visible(&self) -> bool {
        self.session.is_confirmation_visible()
    }

    #[wasm_bindgen(js_name = dismissConfirmation)]
    pub fn dismiss_confirmation(&mut self) {
        self.session.dismiss_confirmation();
    }

    /// Every field carrying an error marker, as JSON
    #[wasm_bindgen(js_name = fieldErrors)]
    pub fn field_errors(&self) -> String {
        let errors: Vec<FieldErrorJson> = self
            .session
            .form()
            .fields()
            .filter(|(_, input)| input.has_error)
            .map(|(at, input)| FieldErrorJson {
                field: at.to_string(),
                message: input.error_message.clone(),
            })
            .collect();
        serde_json::to_string(&errors).unwrap_or_else(|_| "[]".to_string())
    }

    /// Field the form should scroll into view
    #[wasm_bindgen(getter, js_name = scrollTarget)]
    pub fn scroll_target(&self) -> Option<String> {
        self.session.form().scroll_target().map(ToString::to_string)
    }

    /// Markup of the preview as currently rendered
    #[wasm_bindgen(js_name = previewHtml)]
    pub fn preview_html(&mut self) -> String {
        self.session.run_until_idle();
        compile_to_html(self.session.frame().document(), CompileOptions::default())
    }

    #[wasm_bindgen(js_name = setTheme)]
    pub fn set_theme(&mut self, value: &str) {
        self.session.apply_theme(Theme::parse(value));
        self.session.run_until_idle();
    }

    #[wasm_bindgen(js_name = scrollPreviewTo)]
    pub fn scroll_preview_to(&mut self, section_id: &str) -> Option<String> {
        self.session.scroll_preview_to(section_id);
        self.session.run_until_idle();
        self.session.frame().scroll_target().map(str::to_string)
    }

    #[wasm_bindgen(js_name = enterFullscreenPreview)]
    pub fn enter_fullscreen_preview(&mut self) {
        self.session.enter_fullscreen_preview();
    }

    #[wasm_bindgen(js_name = exitFullscreenPreview)]
    pub fn exit_fullscreen_preview(&mut self) {
        self.session.exit_fullscreen_preview();
    }

    /// The page to download, or `None` when validation blocked the export
    pub fn export(&mut self) -> Result<Option<String>, JsValue> {
        let mut downloads = MemoryDownloads::new();
        match self.session.export(&mut downloads).map_err(js_error)? {
            ExportOutcome::Delivered { .. } => {
                Ok(downloads.artifacts.pop().map(|artifact| artifact.content))
            }
            ExportOutcome::Blocked { .. } => Ok(None),
        }
    }
}

impl FolioEditor {
    fn apply(&mut self, edit: FormEdit) -> Result<(), JsValue> {
        self.session.handle_input(edit).map_err(js_error)?;
        self.session.run_until_idle();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEMPLATE: &str = include_str!("../../../templates/template-prestige.html");

    fn editor() -> FolioEditor {
        FolioEditor::new(Some(TEMPLATE.to_string()), 200, 2025)
    }

    #[test]
    fn test_preview_shows_demo() {
        let mut editor = editor();
        assert!(editor.is_pristine());
        assert!(editor.preview_html().contains("Amina Koné"));
    }

    #[test]
    fn test_export_after_filling_required_fields() {
        let mut editor = editor();
        assert!(editor.set_field("nomComplet", "Ada").is_ok());
        assert!(editor.set_field("titre", "Analyst").is_ok());
        assert!(editor.export().ok().flatten().is_none());
        assert_eq!(editor.scroll_target().as_deref(), Some("email"));

        assert!(editor.set_field("email", "ada@example.com").is_ok());
        let page = editor.export().ok().flatten().unwrap();
        assert!(page.contains("mailto:ada@example.com"));
        assert!(editor.confirmation_visible());
    }

    #[test]
    fn test_apply_edit_json() {
        let mut editor = editor();
        let index = editor.add_item("skills").ok().unwrap();
        let edit = format!(
            r#"{{"edit":"setItemField","section":"skills","index":{},"field":"title","value":"Design"}}"#,
            index
        );
        assert!(editor.apply_edit(&edit).is_ok());
        assert!(editor.preview_html().contains("Design"));
        assert_eq!(editor.field_errors().matches("This field is required.").count(), 3);
    }
}
