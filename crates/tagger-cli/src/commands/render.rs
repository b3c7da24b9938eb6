//! Render command.

use std::path::Path;

use anyhow::Result;
use tagger::Tag;

use super::{build_tag, load_tagger};

/// Part of a tag to print.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Part {
    Full,
    Open,
    Close,
}

impl Part {
    fn of(self, tag: &Tag) -> String {
        match self {
            Part::Full => tag.render(),
            Part::Open => tag.open(),
            Part::Close => tag.close(),
        }
    }
}

/// Run the render command.
pub fn run(
    config: &Path,
    identifier: &str,
    content: Option<&str>,
    attrs: &[String],
    part: Part,
) -> Result<()> {
    let tagger = load_tagger(config)?;
    let tag = build_tag(&tagger, identifier, content, attrs)?;
    tracing::debug!("Rendering {:?} of <{}>", part, tag.identifier());

    println!("{}", part.of(&tag));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prints_requested_part() {
        let tag = Tag::create("p", "text").class("lead");

        assert_eq!(Part::Full.of(&tag), r#"<p class="lead">text</p>"#);
        assert_eq!(Part::Open.of(&tag), r#"<p class="lead">"#);
        assert_eq!(Part::Close.of(&tag), "</p>");
    }
}
