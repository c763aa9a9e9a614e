//! Error types for the editor

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EditorError {
    #[error("Edit error: {0}")]
    Edit(#[from] crate::mutations::EditError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Preferences file is not valid JSON: {0}")]
    Preferences(#[from] serde_json::Error),

    /// Export needs a loaded preview
    #[error("Preview is unavailable: {0}")]
    PreviewUnavailable(String),
}
