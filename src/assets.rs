//! Asset loading with an embedded default palette
//!
//! The palette config is resolved in this order:
//!
//! - `--config <path>` on the command line
//! - the `CONFIG_FILE` env var
//! - the embedded `assets/palette.yaml`
//!
//! A configured file that cannot be read is an error. There is no silent
//! fallback to the embedded palette once a path has been given.

use rust_embed::RustEmbed;
use std::borrow::Cow;
use std::fmt;
use std::fs;
use std::io;
use std::path::PathBuf;

use crate::error::ConfigError;

/// Env var naming an external palette config
pub const CONFIG_FILE_ENV: &str = "CONFIG_FILE";

/// File name of the embedded default palette
pub const EMBEDDED_CONFIG_NAME: &str = "palette.yaml";

/// Embedded default palette config
#[derive(RustEmbed)]
#[folder = "assets/"]
#[include = "palette.yaml"]
struct EmbeddedConfig;

/// Where the active config comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    Embedded,
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigSource::File(path) => write!(f, "{}", path.display()),
            ConfigSource::Embedded => write!(f, "(embedded {EMBEDDED_CONFIG_NAME})"),
        }
    }
}

/// Report of init (extraction) operations
#[derive(Debug, Default)]
pub struct InitReport {
    pub written: Vec<String>,
    pub skipped: Vec<String>,
}

/// Asset loader with optional filesystem override
pub struct AssetLoader {
    /// External config file path (from --config or CONFIG_FILE)
    config_file: Option<PathBuf>,
}

impl AssetLoader {
    /// Create a new asset loader
    ///
    /// If `config_file` is `None`, the embedded palette is used.
    pub fn new(config_file: Option<PathBuf>) -> Self {
        Self { config_file }
    }

    /// Create a loader from a command-line override, falling back to `CONFIG_FILE`
    pub fn from_env(cli_override: Option<PathBuf>) -> Self {
        let config_file = cli_override.or_else(|| {
            std::env::var(CONFIG_FILE_ENV)
                .ok()
                .filter(|s| !s.is_empty())
                .map(PathBuf::from)
        });
        Self::new(config_file)
    }

    pub fn config_source(&self) -> ConfigSource {
        match &self.config_file {
            Some(path) => ConfigSource::File(path.clone()),
            None => ConfigSource::Embedded,
        }
    }

    /// Read the config file
    pub fn read_config(&self) -> Result<Cow<'static, [u8]>, ConfigError> {
        if let Some(ref path) = self.config_file {
            tracing::trace!(path = %path.display(), "Loading config from filesystem");
            return fs::read(path)
                .map(Cow::Owned)
                .map_err(|source| ConfigError::Read {
                    path: path.display().to_string(),
                    source,
                });
        }

        EmbeddedConfig::get(EMBEDDED_CONFIG_NAME)
            .map(|f| {
                tracing::trace!("Loading config from embedded assets");
                f.data
            })
            .ok_or(ConfigError::MissingEmbedded)
    }

    /// Read config as a UTF-8 string
    pub fn read_config_string(&self) -> Result<String, ConfigError> {
        let bytes = self.read_config()?;
        String::from_utf8(bytes.into_owned()).map_err(|e| ConfigError::Read {
            path: self.config_source().to_string(),
            source: io::Error::new(io::ErrorKind::InvalidData, e),
        })
    }

    /// Extract the embedded palette to the filesystem (init command)
    ///
    /// Writes to the configured path, or `./palette.yaml` if none is set.
    pub fn init(&self, force: bool) -> io::Result<InitReport> {
        let mut report = InitReport::default();
        let path = self
            .config_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(EMBEDDED_CONFIG_NAME));

        if !force && path.exists() {
            report.skipped.push(path.display().to_string());
            return Ok(report);
        }
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        if let Some(data) = EmbeddedConfig::get(EMBEDDED_CONFIG_NAME) {
            fs::write(&path, &*data.data)?;
            tracing::info!(path = %path.display(), "Wrote default palette");
            report.written.push(path.display().to_string());
        }

        Ok(report)
    }

    /// List embedded assets (for display)
    pub fn list_embedded() -> Vec<String> {
        EmbeddedConfig::iter().map(|s| s.to_string()).collect()
    }
}
