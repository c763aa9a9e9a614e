use folio_common::DEFAULT_TEMPLATE_PATH;
use folio_render::RenderOptions;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_NAME: &str = "folio.config.json";

/// Folio configuration file format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Page template, relative to the project root
    #[serde(default = "default_template_path")]
    pub template_path: String,

    /// Portfolio content (JSON, wire field names)
    #[serde(default = "default_content_file")]
    pub content_file: String,

    /// Where `index.html` is written
    #[serde(default = "default_out_dir")]
    pub out_dir: String,

    /// Re-indent exported markup
    #[serde(default)]
    pub pretty: bool,

    #[serde(default = "default_preferences_file")]
    pub preferences_file: String,

    /// Year in the copyright line; the current year when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub copyright_year: Option<i32>,
}

fn default_template_path() -> String {
    DEFAULT_TEMPLATE_PATH.to_string()
}

fn default_content_file() -> String {
    "portfolio.json".to_string()
}

fn default_out_dir() -> String {
    "dist".to_string()
}

fn default_preferences_file() -> String {
    ".folio/preferences.json".to_string()
}

impl Config {
    /// Load config from a directory
    pub fn load(cwd: &Path) -> anyhow::Result<Self> {
        let config_path = cwd.join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            // Return default config if none exists
            Ok(Config::default())
        }
    }

    pub fn content_path(&self, cwd: &Path) -> PathBuf {
        cwd.join(&self.content_file)
    }

    pub fn out_dir(&self, cwd: &Path) -> PathBuf {
        cwd.join(&self.out_dir)
    }

    pub fn preferences_path(&self, cwd: &Path) -> PathBuf {
        cwd.join(&self.preferences_file)
    }

    pub fn render_options(&self) -> RenderOptions {
        match self.copyright_year {
            Some(year) => RenderOptions::for_year(year),
            None => RenderOptions::default(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            template_path: default_template_path(),
            content_file: default_content_file(),
            out_dir: default_out_dir(),
            pretty: false,
            preferences_file: default_preferences_file(),
            copyright_year: None,
        }
    }
}
