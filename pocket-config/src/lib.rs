//! Shared configuration loader for pocket-seed.
//!
//! `defaults/pocket.default.toml` is embedded into the binary so that docs and runtime
//! behavior stay in sync. The CLI layers a user file and its flags on top of those defaults
//! via [`Loader`] before deserializing into [`PocketConfig`]. Environment variables are not
//! consulted.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use pocket_emit::SqlOptions;
use serde::Deserialize;
use std::path::{Path, PathBuf};

const DEFAULT_TOML: &str = include_str!("../defaults/pocket.default.toml");

/// Top-level configuration consumed by pocket-seed.
#[derive(Debug, Clone, Deserialize)]
pub struct PocketConfig {
    pub sources: SourcesConfig,
    pub sql: SqlConfig,
    pub json: JsonConfig,
}

/// Directories holding the course and quiz text files.
#[derive(Debug, Clone, Deserialize)]
pub struct SourcesConfig {
    pub courses_dir: PathBuf,
    pub quizzes_dir: PathBuf,
}

/// Seed script output.
#[derive(Debug, Clone, Deserialize)]
pub struct SqlConfig {
    pub output: PathBuf,
    #[serde(flatten)]
    pub script: SqlOptions,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JsonConfig {
    pub pretty: bool,
}

/// Where the user's configuration file comes from.
#[derive(Debug, Clone, Copy)]
pub enum UserFile<'a> {
    /// Given explicitly (`--config`): it must exist.
    Explicit(&'a Path),
    /// The conventional `pocket.toml`: used when present.
    Discovered(&'a Path),
}

/// Embedded defaults, then at most one user file, then per-key overrides.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    pub fn new(user_file: Option<UserFile<'_>>) -> Self {
        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        if let Some(user_file) = user_file {
            let (path, required) = match user_file {
                UserFile::Explicit(path) => (path, true),
                UserFile::Discovered(path) => (path, false),
            };
            builder = builder.add_source(
                File::from(path)
                    .format(FileFormat::Toml)
                    .required(required),
            );
        }
        Self { builder }
    }

    /// Override one dotted key, e.g. `sources.courses_dir`.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    pub fn build(self) -> Result<PocketConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

/// The embedded defaults alone.
pub fn load_defaults() -> Result<PocketConfig, ConfigError> {
    Loader::new(None).build()
}
