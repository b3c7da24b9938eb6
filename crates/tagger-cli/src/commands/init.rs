//! Write a default config file.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Run the init command.
pub fn run(config_path: &Path, yes: bool) -> Result<()> {
    if config_path.exists() && !yes {
        tracing::warn!(
            "{} already exists. Use --yes to overwrite.",
            config_path.display()
        );
        return Ok(());
    }

    fs::write(config_path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    tracing::info!("Created {}", config_path.display());

    Ok(())
}

const DEFAULT_CONFIG: &str = r#"# Tagger Configuration

# Root URL that relative asset paths (img, script, style, favicon) are joined onto
root = "http://localhost:8000"

# Route actions for links like `tagger render a Home@index`.
# Values starting with "/" are joined onto root.
[routes]
"Home@index" = "/"
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use tagger::{RequestRoot, TaggerConfig, UrlResolver};
    use tempfile::tempdir;

    #[test]
    fn writes_default_config() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("tagger.toml");

        run(&path, false).unwrap();

        let config = TaggerConfig::load(&path).unwrap();
        assert_eq!(config.root(), "http://localhost:8000");
        assert_eq!(config.action("Home@index").as_deref(), Some("http://localhost:8000/"));
    }

    #[test]
    fn keeps_existing_config_without_yes() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("tagger.toml");
        fs::write(&path, "root = \"https://mine.test\"\n").unwrap();

        run(&path, false).unwrap();
        assert!(fs::read_to_string(&path).unwrap().contains("mine.test"));

        run(&path, true).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), DEFAULT_CONFIG);
    }
}
