//! CLI subcommands.

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use tagger::{Tag, Tagger, TaggerConfig, Value};

pub mod init;
pub mod inspect;
pub mod presets;
pub mod render;

/// Build the tag factory from the config file, if there is one.
pub fn load_tagger(config: &Path) -> Result<Tagger> {
    let config = TaggerConfig::load_or_default(config)
        .with_context(|| format!("Failed to load {}", config.display()))?;
    Ok(Tagger::with_presets(Arc::new(config)))
}

/// Build a tag from command line arguments.
///
/// Each `--attr` is applied as a setter call: `name=value` passes one
/// argument, a bare `name` passes none and is rejected.
pub fn build_tag(
    tagger: &Tagger,
    identifier: &str,
    content: Option<&str>,
    attrs: &[String],
) -> Result<Tag> {
    let mut tag = tagger.make(identifier, content);
    for attr in attrs {
        let (name, args) = parse_attr(attr);
        tag.dispatch(name, args)
            .with_context(|| format!("Invalid --attr {attr:?}"))?;
    }
    Ok(tag)
}

fn parse_attr(attr: &str) -> (&str, Vec<Value>) {
    match attr.split_once('=') {
        Some((name, value)) => (name, vec![Value::from(value)]),
        None => (attr, Vec::new()),
    }
}
