use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::suggest::{DEFAULT_TARGET_CONTRAST, MAX_SUGGESTIONS};

/// How the CLI renders results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettingsConfig {
    pub version: u32,
    #[serde(default = "default_text_color")]
    pub text_color: Color,
    #[serde(default = "default_background_color")]
    pub background_color: Color,
    #[serde(default = "default_target_contrast")]
    pub target_contrast: f64,
    #[serde(default = "default_max_suggestions")]
    pub max_suggestions: usize,
    #[serde(default)]
    pub output: OutputFormat,
}

fn default_text_color() -> Color { Color::BLACK }
fn default_background_color() -> Color { Color::WHITE }
fn default_target_contrast() -> f64 { DEFAULT_TARGET_CONTRAST }
fn default_max_suggestions() -> usize { MAX_SUGGESTIONS }

impl Default for SettingsConfig {
    fn default() -> Self {
        Self {
            version: 1,
            text_color: Color::BLACK,
            background_color: Color::WHITE,
            target_contrast: DEFAULT_TARGET_CONTRAST,
            max_suggestions: MAX_SUGGESTIONS,
            output: OutputFormat::Text,
        }
    }
}

impl SettingsConfig {
    /// `<config dir>/colorsage/settings.json`, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("colorsage").join("settings.json"))
    }

    /// Load from the default location, falling back to defaults.
    pub fn load() -> Self {
        let Some(path) = Self::default_path() else {
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load from `path`. A missing file yields defaults silently; an unreadable
    /// or invalid one yields defaults with a warning.
    pub fn load_from(path: &Path) -> Self {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Self::default(),
            Err(e) => {
                log::warn!("Failed to read settings {}: {e}", path.display());
                return Self::default();
            }
        };
        let parsed = serde_json::from_str::<Self>(&json)
            .map_err(anyhow::Error::from)
            .and_then(|s| s.validate().map(|()| s));
        match parsed {
            Ok(settings) => {
                log::debug!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Ignoring invalid settings {}: {e}", path.display());
                Self::default()
            }
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("creating {}", dir.display()))?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
        log::info!("Saved settings to {}", path.display());
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if !(1.0..=21.0).contains(&self.target_contrast) {
            bail!(
                "target_contrast must be between 1 and 21, got {}",
                self.target_contrast
            );
        }
        if !(1..=MAX_SUGGESTIONS).contains(&self.max_suggestions) {
            bail!(
                "max_suggestions must be between 1 and {MAX_SUGGESTIONS}, got {}",
                self.max_suggestions
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_black_on_white() {
        let s = SettingsConfig::default();
        assert_eq!(s.text_color.to_hex(), "#000000");
        assert_eq!(s.background_color.to_hex(), "#ffffff");
        assert_eq!(s.target_contrast, 4.5);
        assert_eq!(s.max_suggestions, 6);
        assert!(s.validate().is_ok());
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");
        let s = SettingsConfig {
            text_color: Color::parse("#777777").unwrap(),
            target_contrast: 7.0,
            max_suggestions: 3,
            output: OutputFormat::Json,
            ..Default::default()
        };
        s.save_to(&path).unwrap();
        assert_eq!(SettingsConfig::load_from(&path), s);
    }

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let s = SettingsConfig::load_from(&dir.path().join("absent.json"));
        assert_eq!(s, SettingsConfig::default());
    }

    #[test]
    fn partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r##"{"version": 1, "background_color": "#abc"}"##).unwrap();
        let s = SettingsConfig::load_from(&path);
        assert_eq!(s.background_color.to_hex(), "#aabbcc");
        assert_eq!(s.text_color, Color::BLACK);
        assert_eq!(s.output, OutputFormat::Text);
    }

    #[test]
    fn invalid_files_give_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        for json in [
            "not json",
            r##"{"version": 1, "text_color": "black"}"##,
            r##"{"version": 1, "target_contrast": 30.0}"##,
            r##"{"version": 1, "max_suggestions": 0}"##,
            r##"{"version": 1, "output": "yaml"}"##,
        ] {
            std::fs::write(&path, json).unwrap();
            assert_eq!(SettingsConfig::load_from(&path), SettingsConfig::default(), "{json}");
        }
    }

    #[test]
    fn output_format_serde_roundtrip() {
        for f in [OutputFormat::Text, OutputFormat::Json] {
            let json = serde_json::to_string(&f).unwrap();
            let f2: OutputFormat = serde_json::from_str(&json).unwrap();
            assert_eq!(f, f2);
        }
        assert_eq!(serde_json::to_string(&OutputFormat::Json).unwrap(), "\"json\"");
    }
}
