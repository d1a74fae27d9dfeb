//! Configuration loaded from `.xcw.toml`

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::WorkspaceError;
use crate::location::LocationType;

/// Conventional config file name, looked up in the working directory.
pub const CONFIG_FILE: &str = ".xcw.toml";

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct XcwConfig {
    /// How workspace documents are written
    #[serde(default)]
    pub format: FormatConfig,

    /// Defaults applied to references added by tooling
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

/// Output layout of `contents.xcworkspacedata`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormatConfig {
    /// Spaces per nesting level (Xcode uses 3)
    #[serde(default = "default_indent_width")]
    pub indent_width: usize,

    /// End the document with a newline
    #[serde(default = "default_trailing_newline")]
    pub trailing_newline: bool,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            indent_width: default_indent_width(),
            trailing_newline: default_trailing_newline(),
        }
    }
}

/// Defaults for new references
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Location type given to added project references (e.g. "group", "container")
    #[serde(default)]
    pub location: LocationType,
}

// Serde default functions
fn default_indent_width() -> usize {
    3
}

fn default_trailing_newline() -> bool {
    true
}

impl XcwConfig {
    /// Load config from a TOML file
    pub fn load(path: &Path) -> Result<Self, WorkspaceError> {
        let content = std::fs::read_to_string(path).map_err(|source| WorkspaceError::IoError {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|e| WorkspaceError::Config(e.to_string()))
    }

    /// Try to load config, returning default if the file is missing or invalid
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(WorkspaceError::IoError { .. }) => Self::default(),
            Err(e) => {
                tracing::warn!("ignoring {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn defaults_match_xcode_layout() {
        let config = XcwConfig::default();
        assert_eq!(config.format.indent_width, 3);
        assert!(config.format.trailing_newline);
        assert_eq!(config.defaults.location, LocationType::RelativeToGroup);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let config: XcwConfig = toml::from_str(
            r#"
[defaults]
location = "container"
"#,
        )
        .unwrap();
        assert_eq!(config.defaults.location, LocationType::Container);
        assert_eq!(config.format, FormatConfig::default());
    }

    #[test]
    fn load_reads_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "[format]\nindent_width = 2\ntrailing_newline = false\n").unwrap();

        let config = XcwConfig::load(&path).unwrap();
        assert_eq!(config.format.indent_width, 2);
        assert!(!config.format.trailing_newline);
    }

    #[test]
    fn unknown_location_is_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "[defaults]\nlocation = \"elsewhere\"\n").unwrap();

        assert!(matches!(
            XcwConfig::load(&path),
            Err(WorkspaceError::Config(_))
        ));
        assert_eq!(XcwConfig::load_or_default(&path), XcwConfig::default());
    }

    #[test]
    fn missing_file_falls_back_to_default() {
        let dir = tempdir().unwrap();
        let config = XcwConfig::load_or_default(&dir.path().join("absent.toml"));
        assert_eq!(config, XcwConfig::default());
    }
}
