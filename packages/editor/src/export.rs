//! # Export
//!
//! The downloadable page and where it goes.

use crate::errors::EditorError;
use crate::form::FieldRef;
use std::path::{Path, PathBuf};

pub const EXPORT_FILE_NAME: &str = "index.html";
pub const EXPORT_MIME: &str = "text/html";

/// The rendered page, ready to be saved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    pub file_name: String,
    pub mime: String,
    pub content: String,
}

impl ExportArtifact {
    pub fn html(content: String) -> Self {
        Self {
            file_name: EXPORT_FILE_NAME.to_string(),
            mime: EXPORT_MIME.to_string(),
            content,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// Handed to the sink
    Delivered { file_name: String, bytes: usize },
    /// Validation failed; `field` is the first one carrying an error
    Blocked { field: Option<FieldRef> },
}

impl ExportOutcome {
    pub fn is_delivered(&self) -> bool {
        matches!(self, ExportOutcome::Delivered { .. })
    }
}

/// Receives exported artifacts
pub trait DownloadSink {
    fn deliver(&mut self, artifact: &ExportArtifact) -> Result<(), EditorError>;
}

/// Writes artifacts into a directory, creating it if needed
#[derive(Debug, Clone)]
pub struct FsDownloadSink {
    dir: PathBuf,
}

impl FsDownloadSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_of(&self, artifact: &ExportArtifact) -> PathBuf {
        self.dir.join(&artifact.file_name)
    }
}

impl DownloadSink for FsDownloadSink {
    fn deliver(&mut self, artifact: &ExportArtifact) -> Result<(), EditorError> {
        std::fs::create_dir_all(&self.dir)?;
        let path = self.path_of(artifact);
        std::fs::write(&path, &artifact.content)?;
        tracing::info!(path = %path.display(), "Wrote export");
        Ok(())
    }
}

/// Keeps artifacts in memory
#[derive(Debug, Default, Clone)]
pub struct MemoryDownloads {
    pub artifacts: Vec<ExportArtifact>,
}

impl MemoryDownloads {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<&ExportArtifact> {
        self.artifacts.last()
    }
}

impl DownloadSink for MemoryDownloads {
    fn deliver(&mut self, artifact: &ExportArtifact) -> Result<(), EditorError> {
        self.artifacts.push(artifact.clone());
        Ok(())
    }
}
