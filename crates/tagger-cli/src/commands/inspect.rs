//! Inspect command.

use std::path::Path;

use anyhow::{Context, Result};
use tagger::TagSnapshot;

use super::{build_tag, load_tagger};

/// Run the inspect command.
pub fn run(config: &Path, identifier: &str, content: Option<&str>, attrs: &[String]) -> Result<()> {
    let tagger = load_tagger(config)?;
    let tag = build_tag(&tagger, identifier, content, attrs)?;

    let json = serde_json::to_string_pretty(&TagSnapshot::from(&tag))
        .context("Failed to serialize tag")?;
    println!("{json}");

    Ok(())
}
