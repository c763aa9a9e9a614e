use std::path::PathBuf;
use thiserror::Error;

/// Failure to obtain the page template.
///
/// Unrecoverable for the session that hit it: the preview shows a fault page
/// built from the display text, everything else keeps working.
#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("Template file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read template {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Template request for {path} failed with status {status}")]
    Status { path: String, status: u16 },

    #[error("Template is not valid markup: {0}")]
    Malformed(String),
}

impl TemplateError {
    /// Short text for the inline fault block
    pub fn headline(&self) -> &'static str {
        match self {
            TemplateError::NotFound(_) | TemplateError::Status { .. } => "Template not found",
            TemplateError::Io { .. } => "Template could not be read",
            TemplateError::Malformed(_) => "Template could not be parsed",
        }
    }
}
