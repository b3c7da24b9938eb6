//! List presets command.

use std::path::Path;

use anyhow::Result;

use super::load_tagger;

/// Run the presets command.
pub fn run(config: &Path) -> Result<()> {
    let tagger = load_tagger(config)?;
    for name in tagger.names() {
        println!("{name}");
    }
    Ok(())
}
