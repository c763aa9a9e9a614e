use crate::{TemplateError, TemplateResult};
use std::collections::HashMap;
use std::future::Future;
#[cfg(feature = "fs")]
use std::path::{Path, PathBuf};

/// Default relative path of the page template
pub const DEFAULT_TEMPLATE_PATH: &str = "template-prestige.html";

/// Where the page template comes from.
///
/// Fetching is the only suspending step of a session; nothing is projected
/// before it resolves.
pub trait TemplateSource {
    /// Fetch the template at a path relative to the source root
    fn fetch(&self, path: &str) -> impl Future<Output = TemplateResult<String>> + Send;
}

/// Templates read from a directory on disk
#[cfg(feature = "fs")]
#[derive(Debug, Clone)]
pub struct FsTemplateSource {
    root: PathBuf,
}

#[cfg(feature = "fs")]
impl FsTemplateSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

#[cfg(feature = "fs")]
impl TemplateSource for FsTemplateSource {
    async fn fetch(&self, path: &str) -> TemplateResult<String> {
        let full_path = self.root.join(path);
        tracing::debug!(path = %full_path.display(), "Fetching template");

        match tokio::fs::read_to_string(&full_path).await {
            Ok(source) => Ok(source),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(TemplateError::NotFound(full_path))
            }
            Err(source) => Err(TemplateError::Io {
                path: full_path,
                source,
            }),
        }
    }
}

/// In-memory templates for tests and embedded hosts
#[derive(Debug, Default, Clone)]
pub struct MockTemplateSource {
    pub templates: HashMap<String, String>,
}

impl MockTemplateSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_template(mut self, path: impl Into<String>, source: impl Into<String>) -> Self {
        self.templates.insert(path.into(), source.into());
        self
    }
}

impl TemplateSource for MockTemplateSource {
    async fn fetch(&self, path: &str) -> TemplateResult<String> {
        self.templates
            .get(path)
            .cloned()
            .ok_or_else(|| TemplateError::Status {
                path: path.to_string(),
                status: 404,
            })
    }
}
