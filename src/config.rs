//! Configuration
//!
//! Hard ceilings for the filesystem and shell, plus the glyph cell geometry the
//! viewport metrics are derived from. Every field has a default; a TOML file only
//! needs to name the values it overrides.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read config '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Filesystem ceilings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FsLimits {
    /// Maximum children per directory
    pub max_children: usize,
    /// Maximum live nodes, root included
    pub max_nodes: usize,
    /// Maximum name length in bytes
    pub max_name_len: usize,
    /// Maximum file content length in bytes
    pub max_content: usize,
}

impl Default for FsLimits {
    fn default() -> Self {
        Self {
            max_children: 20,
            max_nodes: 100,
            max_name_len: 255,
            max_content: 4096,
        }
    }
}

/// Shell ceilings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ShellLimits {
    /// Maximum scrollback lines
    pub max_scrollback: usize,
    /// Maximum history entries
    pub max_history: usize,
    /// Maximum input line length in characters
    pub max_input: usize,
}

impl Default for ShellLimits {
    fn default() -> Self {
        Self {
            max_scrollback: 1000,
            max_history: 100,
            max_input: 255,
        }
    }
}

/// Fixed glyph cell geometry, in pixels.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GlyphMetrics {
    pub cell_width: u32,
    pub cell_height: u32,
    /// Horizontal margin subtracted from the content width
    pub margin: u32,
    /// Lines kept at the bottom for the cwd indicator and the prompt
    pub reserved_lines: u32,
}

impl Default for GlyphMetrics {
    fn default() -> Self {
        Self {
            cell_width: 8,
            cell_height: 16,
            margin: 10,
            reserved_lines: 2,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub fs: FsLimits,
    pub shell: ShellLimits,
    pub glyph: GlyphMetrics,
}

impl Config {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Load a TOML config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        log::debug!("loaded config from {}: {:?}", path.display(), config);
        Ok(config)
    }
}
