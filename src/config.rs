//! Classifier configuration: the allow-lists that decide what counts as a
//! data element on a chart.
//!
//! The defaults cover the chart library markup the selection engine ships
//! with. Charts that render custom primitives can extend the lists and keep
//! them in a JSON or YAML file next to the rest of their settings.

use std::path::Path;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Class names that always mark a data element (or a selection overlay).
pub const DEFAULT_DATA_CLASSES: &[&str] = &[
    "recharts-dot",
    "recharts-active-dot",
    "recharts-scatter-symbol",
    "recharts-symbols",
    "recharts-rectangle",
    "recharts-bar-rectangle",
    "recharts-line-dot",
    "recharts-curve",
    "recharts-area-area",
    "recharts-sector",
    // Selection overlays. Clicking them mid-drag must not clear anything.
    "recharts-brush",
    "recharts-brush-slide",
    "selection-box",
    "lasso-path",
];

/// SVG primitive tags that may render a sample.
pub const DEFAULT_SVG_PRIMITIVES: &[&str] = &["circle", "rect", "path", "line", "polygon", "ellipse"];

/// Attributes that tie an element to a sample.
pub const DEFAULT_SAMPLE_ATTRIBUTES: &[&str] = &["data-index", "data-sample"];

/// Containers that group the data elements of one series.
pub const DEFAULT_DATA_GROUP_SELECTORS: &[&str] = &[
    ".recharts-scatter",
    ".recharts-bar",
    ".recharts-line",
    ".recharts-area",
    ".recharts-pie",
];

/// Symbol and bar-rectangle wrappers searched for inside a data group.
pub const DEFAULT_SYMBOL_SELECTORS: &[&str] = &[
    ".recharts-symbols",
    ".recharts-scatter-symbol",
    ".recharts-bar-rectangle",
    ".recharts-rectangle",
];

static DEFAULT_CONFIG: Lazy<ClassifierConfig> = Lazy::new(ClassifierConfig::default);

/// Errors raised while loading or saving a [`ClassifierConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid JSON config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid YAML config: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// On-disk format of a config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Yaml,
}

impl ConfigFormat {
    /// `.yaml` / `.yml` are YAML, everything else is JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                ConfigFormat::Yaml
            }
            _ => ConfigFormat::Json,
        }
    }
}

/// Allow-lists used by the background classifier.
///
/// Missing fields in a config file fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ClassifierConfig {
    pub data_classes: Vec<String>,
    pub svg_primitives: Vec<String>,
    pub sample_attributes: Vec<String>,
    pub data_group_selectors: Vec<String>,
    pub symbol_selectors: Vec<String>,
}

fn owned(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| (*s).to_string()).collect()
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            data_classes: owned(DEFAULT_DATA_CLASSES),
            svg_primitives: owned(DEFAULT_SVG_PRIMITIVES),
            sample_attributes: owned(DEFAULT_SAMPLE_ATTRIBUTES),
            data_group_selectors: owned(DEFAULT_DATA_GROUP_SELECTORS),
            symbol_selectors: owned(DEFAULT_SYMBOL_SELECTORS),
        }
    }
}

impl ClassifierConfig {
    /// Shared default instance.
    pub fn shared_default() -> &'static ClassifierConfig {
        &DEFAULT_CONFIG
    }

    /// Adds a class to the data-element allow-list (no duplicates).
    pub fn with_data_class(mut self, class: impl Into<String>) -> Self {
        let class = class.into();
        if !self.data_classes.contains(&class) {
            self.data_classes.push(class);
        }
        self
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Save to `path`, picking the format from the extension.
    pub fn save_to_path(&self, path: &Path) -> Result<(), ConfigError> {
        let txt = match ConfigFormat::from_path(path) {
            ConfigFormat::Json => self.to_json()?,
            ConfigFormat::Yaml => self.to_yaml()?,
        };
        std::fs::write(path, txt)?;
        tracing::debug!(path = %path.display(), "saved classifier config");
        Ok(())
    }

    /// Load from `path`, picking the format from the extension.
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let txt = std::fs::read_to_string(path)?;
        let cfg = match ConfigFormat::from_path(path) {
            ConfigFormat::Json => Self::from_json(&txt)?,
            ConfigFormat::Yaml => Self::from_yaml(&txt)?,
        };
        tracing::debug!(path = %path.display(), "loaded classifier config");
        Ok(cfg)
    }
}
