//! Configuration system for pyp.
//!
//! Loads config from:
//! 1. Global: ~/.config/pyp/config.toml
//! 2. Per-project: .pyp/config.toml (overrides global)
//!
//! Command-line flags override both.
//!
//! Example config.toml:
//! ```toml
//! [translate]
//! code_char = "%"
//! handler = "emit"
//! header_code = "import sys"
//!
//! [output]
//! save_python = true
//! ```

use pyp_engine::Config;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Error reading a config file that exists.
#[derive(Debug, thiserror::Error)]
pub enum ConfigFileError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config in {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Translation settings.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct TranslateConfig {
    /// First character of a code line.
    pub code_char: Option<char>,
    /// Function called for each text line.
    pub handler: Option<String>,
    /// Code emitted before the document.
    pub header_code: Option<String>,
    /// Code emitted after the document.
    pub footer_code: Option<String>,
}

/// Output settings.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct OutputConfig {
    /// Write generated code next to each input as `<file>.py`.
    pub save_python: Option<bool>,
}

/// Root configuration structure.
///
/// Every field is optional so that a layer only overrides what it sets.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct PypConfig {
    pub translate: TranslateConfig,
    pub output: OutputConfig,
}

impl PypConfig {
    /// Load configuration for a project.
    ///
    /// Loads global config from ~/.config/pyp/config.toml,
    /// then merges with per-project config from .pyp/config.toml.
    /// Files that cannot be read or parsed are skipped with a warning.
    pub fn load(root: &Path) -> Self {
        let project_path = root.join(".pyp").join("config.toml");
        Self::load_layers(Self::global_config_path().iter().chain([&project_path]))
    }

    /// Merge config files in order, later files overriding earlier ones.
    fn load_layers<'a>(paths: impl IntoIterator<Item = &'a PathBuf>) -> Self {
        paths
            .into_iter()
            .fold(Self::default(), |config, path| config.merge_file(path))
    }

    /// Get the global config path.
    fn global_config_path() -> Option<PathBuf> {
        let config_home = std::env::var("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .ok()
            .or_else(|| dirs::home_dir().map(|h| h.join(".config")))?;
        Some(config_home.join("pyp").join("config.toml"))
    }

    fn merge_file(self, path: &Path) -> Self {
        match Self::load_file(path) {
            Ok(Some(layer)) => {
                tracing::debug!(path = %path.display(), "loaded config");
                self.merge(layer)
            }
            Ok(None) => self,
            Err(e) => {
                tracing::warn!("{}", e);
                self
            }
        }
    }

    /// Load config from a file path. A missing file is `Ok(None)`.
    pub fn load_file(path: &Path) -> Result<Option<Self>, ConfigFileError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(ConfigFileError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        toml::from_str(&content)
            .map(Some)
            .map_err(|source| ConfigFileError::Parse {
                path: path.to_path_buf(),
                source,
            })
    }

    /// Merge another config into this one. Fields set in `other` win.
    pub fn merge(self, other: Self) -> Self {
        Self {
            translate: TranslateConfig {
                code_char: other.translate.code_char.or(self.translate.code_char),
                handler: other.translate.handler.or(self.translate.handler),
                header_code: other.translate.header_code.or(self.translate.header_code),
                footer_code: other.translate.footer_code.or(self.translate.footer_code),
            },
            output: OutputConfig {
                save_python: other.output.save_python.or(self.output.save_python),
            },
        }
    }

    /// Engine settings, with defaults for anything left unset.
    pub fn engine_config(&self) -> Config {
        let mut config = Config::default();
        if let Some(marker) = self.translate.code_char {
            config.code_marker = marker;
        }
        if let Some(handler) = &self.translate.handler {
            config.handler = handler.clone();
        }
        config.header_code = self.translate.header_code.clone();
        config.footer_code = self.translate.footer_code.clone();
        config
    }

    pub fn save_python(&self) -> bool {
        self.output.save_python.unwrap_or(false)
    }
}

/// Expand the two-character sequence `\n` into a real newline, so multi-line
/// header and footer code can be passed as a single shell argument.
pub fn expand_newline_markers(code: &str) -> String {
    code.replace("\\n", "\n")
}
