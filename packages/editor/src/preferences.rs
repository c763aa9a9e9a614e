//! # Theme Preference
//!
//! The only state that outlives a session.

use crate::errors::EditorError;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

pub const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Read a stored value: only the exact string `dark` is dark
    pub fn parse(value: &str) -> Self {
        if value == "dark" {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// CSS custom properties pushed into the preview
    pub fn variables(self) -> IndexMap<String, String> {
        let pairs: [(&str, &str); 4] = match self {
            Theme::Light => [
                ("--bg-color", "#ffffff"),
                ("--text-color", "#1a1a1a"),
                ("--card-bg", "#f7f5f0"),
                ("--accent-color", "#c9a227"),
            ],
            Theme::Dark => [
                ("--bg-color", "#121212"),
                ("--text-color", "#f1f1f1"),
                ("--card-bg", "#1e1e1e"),
                ("--accent-color", "#d4af37"),
            ],
        };
        pairs
            .into_iter()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect()
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => Err(format!("Unknown theme: {} (expected light or dark)", s)),
        }
    }
}

/// String key/value storage
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, EditorError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), EditorError>;
}

pub fn load_theme(store: &dyn PreferenceStore) -> Result<Theme, EditorError> {
    Ok(store
        .get(THEME_KEY)?
        .map(|value| Theme::parse(&value))
        .unwrap_or_default())
}

pub fn save_theme(store: &mut dyn PreferenceStore, theme: Theme) -> Result<(), EditorError> {
    store.set(THEME_KEY, theme.as_str())
}

/// Preferences kept in a flat JSON object on disk
#[derive(Debug, Clone)]
pub struct JsonFilePreferences {
    path: PathBuf,
}

impl JsonFilePreferences {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>, EditorError> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) if content.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }
}

impl PreferenceStore for JsonFilePreferences {
    fn get(&self, key: &str) -> Result<Option<String>, EditorError> {
        Ok(self.read_all()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), EditorError> {
        let mut all = self.read_all()?;
        all.insert(key.to_string(), value.to_string());
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, serde_json::to_string_pretty(&all)?)?;
        Ok(())
    }
}

#[derive(Debug, Default, Clone)]
pub struct MemoryPreferences {
    values: BTreeMap<String, String>,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPreferences {
    fn get(&self, key: &str) -> Result<Option<String>, EditorError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), EditorError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_exact_dark_reads_as_dark() {
        assert_eq!(Theme::parse("dark"), Theme::Dark);
        assert_eq!(Theme::parse("DARK"), Theme::Light);
        assert_eq!(Theme::parse(" dark"), Theme::Light);
        assert_eq!(Theme::parse("sepia"), Theme::Light);
        assert_eq!(Theme::parse(""), Theme::Light);
    }

    #[test]
    fn test_from_str_is_strict() {
        assert_eq!("light".parse::<Theme>(), Ok(Theme::Light));
        assert_eq!("dark".parse::<Theme>(), Ok(Theme::Dark));
        assert!("neon".parse::<Theme>().is_err());
        assert!("Dark".parse::<Theme>().is_err());
    }

    #[test]
    fn test_missing_preference_is_light() {
        let store = MemoryPreferences::new();
        assert_eq!(load_theme(&store).unwrap(), Theme::Light);
    }

    #[test]
    fn test_json_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs/preferences.json");

        let mut store = JsonFilePreferences::new(&path);
        assert_eq!(load_theme(&store).unwrap(), Theme::Light);

        save_theme(&mut store, Theme::Dark).unwrap();
        let reopened = JsonFilePreferences::new(&path);
        assert_eq!(load_theme(&reopened).unwrap(), Theme::Dark);

        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.contains("\"theme\": \"dark\""));
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.json");
        std::fs::write(&path, "not json").unwrap();

        let store = JsonFilePreferences::new(&path);
        assert!(matches!(store.get(THEME_KEY), Err(EditorError::Preferences(_))));
    }

    #[test]
    fn test_theme_variables() {
        let vars = Theme::Dark.variables();
        assert_eq!(vars.get("--bg-color").map(String::as_str), Some("#121212"));
        assert_eq!(vars.len(), 4);
        assert_eq!(Theme::Light.toggle(), Theme::Dark);
    }
}
