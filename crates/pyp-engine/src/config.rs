//! Engine configuration.

use serde::{Deserialize, Serialize};

/// Character that marks a code line when no other is configured.
pub const DEFAULT_CODE_MARKER: char = '!';

/// Handler called for text lines when no other is configured.
pub const DEFAULT_HANDLER: &str = "print";

/// Error returned by [`Config::validate`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("code marker cannot be whitespace")]
    WhitespaceMarker,

    #[error("code marker {0:?} collides with a block character")]
    MarkerIsBlockChar(char),

    #[error("block start and block end must differ (both are {0:?})")]
    SameBlockChars(char),

    #[error("block characters cannot be whitespace")]
    WhitespaceBlockChar,

    #[error("handler name cannot be empty")]
    EmptyHandler,
}

/// Settings for one translation run.
///
/// `header_code` and `footer_code` are each translated as a single code line.
/// Multi-statement snippets are joined with real newlines by the caller before
/// they get here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// First character of a code line.
    pub code_marker: char,
    /// Trailing character that opens a block on a code line.
    pub block_start: char,
    /// Leading character that closes a block on a code line.
    pub block_end: char,
    /// Function every translated text line calls.
    pub handler: String,
    pub header_code: Option<String>,
    pub footer_code: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            code_marker: DEFAULT_CODE_MARKER,
            block_start: '{',
            block_end: '}',
            handler: DEFAULT_HANDLER.to_string(),
            header_code: None,
            footer_code: None,
        }
    }
}

impl Config {
    pub fn with_code_marker(mut self, marker: char) -> Self {
        self.code_marker = marker;
        self
    }

    pub fn with_handler(mut self, handler: impl Into<String>) -> Self {
        self.handler = handler.into();
        self
    }

    pub fn with_header(mut self, code: impl Into<String>) -> Self {
        self.header_code = Some(code.into());
        self
    }

    pub fn with_footer(mut self, code: impl Into<String>) -> Self {
        self.footer_code = Some(code.into());
        self
    }

    /// Header code, treating an empty string the same as no header.
    pub fn header(&self) -> Option<&str> {
        self.header_code.as_deref().filter(|code| !code.is_empty())
    }

    /// Footer code, treating an empty string the same as no footer.
    pub fn footer(&self) -> Option<&str> {
        self.footer_code.as_deref().filter(|code| !code.is_empty())
    }

    /// Check that the marker characters can be told apart.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.code_marker.is_whitespace() {
            return Err(ConfigError::WhitespaceMarker);
        }
        if self.block_start.is_whitespace() || self.block_end.is_whitespace() {
            return Err(ConfigError::WhitespaceBlockChar);
        }
        if self.block_start == self.block_end {
            return Err(ConfigError::SameBlockChars(self.block_start));
        }
        if self.code_marker == self.block_start || self.code_marker == self.block_end {
            return Err(ConfigError::MarkerIsBlockChar(self.code_marker));
        }
        if self.handler.trim().is_empty() {
            return Err(ConfigError::EmptyHandler);
        }
        Ok(())
    }
}
