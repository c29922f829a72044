//! Shared configuration loader for the formsmith tools.
//!
//! `defaults/formsmith.default.toml` is embedded into every binary so that docs and runtime
//! behavior stay in sync. Applications layer user-specific files on top of those defaults via
//! [`Loader`] before deserializing into [`FormsmithConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use formsmith_babel::ExportOptions;
use formsmith_builder::BuilderSettings;
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/formsmith.default.toml");

/// Top-level configuration consumed by formsmith applications.
#[derive(Debug, Clone, Deserialize)]
pub struct FormsmithConfig {
    pub form: FormConfig,
    pub preview: PreviewConfig,
    pub export: ExportConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FormConfig {
    pub default_title: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PreviewConfig {
    pub submitted_notice: String,
}

/// How the exported artifact is named and what it tells the user.
#[derive(Debug, Clone, Deserialize)]
pub struct ExportConfig {
    pub file_name: String,
    pub mime_type: String,
    pub completion_notice: String,
}

impl FormsmithConfig {
    pub fn export_options(&self) -> ExportOptions {
        ExportOptions {
            default_title: self.form.default_title.clone(),
            completion_notice: self.export.completion_notice.clone(),
        }
    }

    pub fn builder_settings(&self) -> BuilderSettings {
        BuilderSettings {
            submitted_notice: self.preview.submitted_notice.clone(),
            file_name: self.export.file_name.clone(),
            mime_type: self.export.mime_type.clone(),
            export: self.export_options(),
        }
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

    /// Apply a single key/value override.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    pub fn build(self) -> Result<FormsmithConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<FormsmithConfig, ConfigError> {
    Loader::new().build()
}
