//! Shared configuration loader for ctrlcv.
//!
//! `defaults/ctrlcv.default.toml` is embedded into the binary so that docs and
//! runtime behavior stay in sync. Callers layer user files and command-line
//! overrides on top of those defaults via [`Loader`] before deserializing into
//! [`CtrlcvConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File, FileFormat, ValueKind};
use ctrlcv_render::{FieldNames, PageOptions, RenderOptions};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub use config::ConfigError;

const DEFAULT_TOML: &str = include_str!("../defaults/ctrlcv.default.toml");

/// File name picked up from the working directory when present.
pub const LOCAL_CONFIG_FILE: &str = "ctrlcv.toml";

/// Top-level configuration consumed by ctrlcv.
#[derive(Debug, Clone, Deserialize)]
pub struct CtrlcvConfig {
    pub paths: PathsConfig,
    pub input: InputConfig,
    pub fields: FieldsConfig,
    pub page: PageConfig,
}

impl CtrlcvConfig {
    /// Everything the renderer needs, assembled from the input, fields and page groups.
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            tab_width: self.input.tab_width,
            fields: (&self.fields).into(),
            page: (&self.page).into(),
        }
    }
}

/// Input and output locations, relative to the working directory.
#[derive(Debug, Clone, Deserialize)]
pub struct PathsConfig {
    pub journals: PathBuf,
    pub papers: PathBuf,
    pub output: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InputConfig {
    pub tab_width: usize,
    pub bootstrap_missing: bool,
}

/// Names of the fields that get special treatment.
#[derive(Debug, Clone, Deserialize)]
pub struct FieldsConfig {
    pub articles: String,
    pub abstract_key: String,
    pub journal: String,
    pub value_label: String,
}

impl From<FieldsConfig> for FieldNames {
    fn from(config: FieldsConfig) -> Self {
        FieldNames {
            articles: config.articles,
            abstract_key: config.abstract_key,
            journal: config.journal,
            value_label: config.value_label,
        }
    }
}

impl From<&FieldsConfig> for FieldNames {
    fn from(config: &FieldsConfig) -> Self {
        config.clone().into()
    }
}

/// Page template knobs.
#[derive(Debug, Clone, Deserialize)]
pub struct PageConfig {
    pub title: String,
    pub separators: Vec<String>,
    pub copied_glyph: String,
    pub copy_revert_ms: u64,
    pub highlight_fade_ms: u64,
    pub scroll_offset_px: u32,
}

impl From<PageConfig> for PageOptions {
    fn from(config: PageConfig) -> Self {
        PageOptions {
            title: config.title,
            separators: config.separators,
            copied_glyph: config.copied_glyph,
            copy_revert_ms: config.copy_revert_ms,
            highlight_fade_ms: config.highlight_fade_ms,
            scroll_offset_px: config.scroll_offset_px,
        }
    }
}

impl From<&PageConfig> for PageOptions {
    fn from(config: &PageConfig) -> Self {
        config.clone().into()
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (command-line flags).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<CtrlcvConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<CtrlcvConfig, ConfigError> {
    Loader::new().build()
}
