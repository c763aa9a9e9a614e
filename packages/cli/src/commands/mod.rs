pub mod check;
pub mod export;
pub mod init;
pub mod theme;

pub use check::{check, CheckArgs};
pub use export::{export, ExportArgs};
pub use init::{init, InitArgs};
pub use theme::{theme, ThemeArgs};

use anyhow::Context;
use folio_render::PortfolioData;
use std::path::Path;

/// Read a content file in the wire format
pub(crate) fn load_content(path: &Path) -> anyhow::Result<PortfolioData> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Cannot read content file {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("{} is not valid portfolio content", path.display()))
}
