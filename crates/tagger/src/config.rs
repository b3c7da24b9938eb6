//! URL configuration loaded from `tagger.toml`.

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;

use crate::urls::{self, RequestRoot, UrlResolver};

/// Configuration file structure (tagger.toml).
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct TaggerConfig {
    /// Root URL of the site, e.g. "https://example.com"
    #[serde(default)]
    pub root: String,

    /// Route actions: "Home@index" -> "/" or a full URL
    #[serde(default)]
    pub routes: HashMap<String, String>,
}

impl TaggerConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let config = content.parse()?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load configuration if the file exists, defaults otherwise.
    /// Returns an error if the file exists but is malformed.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }
}

impl FromStr for TaggerConfig {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        toml::from_str(s).map_err(|e| ConfigError::Parse(e.to_string()))
    }
}

impl RequestRoot for TaggerConfig {
    fn root(&self) -> String {
        self.root.trim_end_matches('/').to_string()
    }
}

impl UrlResolver for TaggerConfig {
    fn action(&self, action: &str) -> Option<String> {
        let route = self.routes.get(action)?;
        if route.starts_with('/') && !urls::is_absolute(route) {
            Some(urls::join(&self.root, route))
        } else {
            Some(route.clone())
        }
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {message}")]
    Read { path: String, message: String },

    #[error("Invalid TOML in config: {0}")]
    Parse(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn parses_root_and_routes() {
        let config: TaggerConfig = r#"
root = "https://example.com/"

[routes]
"Home@index" = "/"
"Docs@show" = "/docs"
"Blog@index" = "https://blog.example.com"
"#
        .parse()
        .unwrap();

        assert_eq!(config.root(), "https://example.com");
        assert_eq!(config.action("Home@index").as_deref(), Some("https://example.com/"));
        assert_eq!(config.action("Docs@show").as_deref(), Some("https://example.com/docs"));
        assert_eq!(
            config.action("Blog@index").as_deref(),
            Some("https://blog.example.com")
        );
        assert_eq!(config.action("Missing@index"), None);
    }

    #[test]
    fn empty_config_uses_defaults() {
        let config: TaggerConfig = "".parse().unwrap();
        assert_eq!(config, TaggerConfig::default());
        assert_eq!(config.root(), "");
    }

    #[test]
    fn errors_on_invalid_toml() {
        let result = "root = [unclosed".parse::<TaggerConfig>();
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn loads_from_file() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("tagger.toml");
        fs::write(&path, "root = \"https://example.org\"\n").unwrap();

        let config = TaggerConfig::load(&path).unwrap();
        assert_eq!(config.root, "https://example.org");
    }

    #[test]
    fn missing_file_falls_back_to_default() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("tagger.toml");

        assert_eq!(TaggerConfig::load_or_default(&path).unwrap(), TaggerConfig::default());
        assert!(matches!(TaggerConfig::load(&path), Err(ConfigError::Read { .. })));
    }
}
