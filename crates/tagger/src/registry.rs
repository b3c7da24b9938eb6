//! Tag factory with named presets.
//!
//! Looks up a preset by tag name and falls back to a generic [`Tag`] when
//! nothing is registered under that name.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::config::TaggerConfig;
use crate::presets;
use crate::tag::Tag;
use crate::urls::Urls;

/// Builds a pre-configured tag from an optional argument.
pub type Preset = Arc<dyn Fn(Option<&str>, &dyn Urls) -> Tag + Send + Sync>;

/// A factory for tags, keyed by tag name.
#[derive(Clone)]
pub struct Tagger {
    /// URL collaborators handed to presets
    urls: Arc<dyn Urls>,

    /// Presets by name (lowercase)
    presets: HashMap<String, Preset>,
}

impl Tagger {
    /// Create a factory without presets.
    pub fn new(urls: Arc<dyn Urls>) -> Self {
        Self {
            urls,
            presets: HashMap::new(),
        }
    }

    /// Create a factory with the built-in presets registered.
    pub fn with_presets(urls: Arc<dyn Urls>) -> Self {
        let mut tagger = Self::new(urls);
        tagger
            .register("a", |link, urls| presets::anchor(link, urls))
            .register("img", |path, urls| presets::img(path, urls))
            .register("script", |src, urls| presets::script(src, urls))
            .register("style", |src, urls| presets::style(src, urls))
            .register("icon", |name, _| presets::icon(name))
            .register("favicon", |link, urls| presets::favicon(link, urls));
        tagger
    }

    /// Register a preset, replacing any previous one with the same name.
    pub fn register<F>(&mut self, name: &str, preset: F) -> &mut Self
    where
        F: Fn(Option<&str>, &dyn Urls) -> Tag + Send + Sync + 'static,
    {
        self.presets.insert(name.to_lowercase(), Arc::new(preset));
        self
    }

    /// Check if a preset exists (case-insensitive).
    pub fn contains(&self, name: &str) -> bool {
        self.presets.contains_key(&name.to_lowercase())
    }

    /// All registered preset names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.presets.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Build a tag named `name`.
    ///
    /// A registered preset receives `arg`; otherwise `arg` becomes the
    /// content of a generic tag. The identifier defaults to `name` when the
    /// preset leaves it unset.
    pub fn make(&self, name: &str, arg: Option<&str>) -> Tag {
        let mut tag = match self.presets.get(&name.to_lowercase()) {
            Some(preset) => preset(arg, self.urls.as_ref()),
            None => {
                tracing::debug!("No preset for {}, using a generic tag", name);
                match arg {
                    Some(content) => Tag::create(name, content),
                    None => Tag::new(name),
                }
            }
        };

        if tag.identifier().is_empty() {
            tag.set_identifier(name);
        }
        tag
    }

    pub fn urls(&self) -> &dyn Urls {
        self.urls.as_ref()
    }
}

impl Default for Tagger {
    fn default() -> Self {
        Self::with_presets(Arc::new(TaggerConfig::default()))
    }
}

impl fmt::Debug for Tagger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tagger")
            .field("presets", &self.names())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn site() -> Arc<dyn Urls> {
        let config: TaggerConfig = r#"
root = "https://example.com"

[routes]
"Home@index" = "/"
"#
        .parse()
        .unwrap();
        Arc::new(config)
    }

    #[test]
    fn falls_back_to_generic_tag() {
        let tagger = Tagger::with_presets(site());

        assert_eq!(tagger.make("foo", None).render(), "<foo></foo>");
        assert_eq!(tagger.make("foo", Some("test")).render(), "<foo>test</foo>");
    }

    #[test]
    fn uses_registered_presets() {
        let tagger = Tagger::with_presets(site());

        assert_eq!(
            tagger.make("a", Some("Home@index")).content("Home").render(),
            r#"<a href="https://example.com/">Home</a>"#
        );
        assert_eq!(
            tagger.make("icon", Some("user")).render(),
            r#"<i class="icon-user"></i>"#
        );
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let tagger = Tagger::with_presets(site());

        assert!(tagger.contains("IMG"));
        assert_eq!(
            tagger.make("Img", Some("a.png")).render(),
            r#"<img src="https://example.com/a.png"></img>"#
        );
    }

    #[test]
    fn identifier_defaults_to_name_only_if_unset() {
        let mut tagger = Tagger::new(site());
        tagger.register("button", |label, _| {
            let mut tag = Tag::default();
            tag.set_attribute("type", "button");
            if let Some(label) = label {
                tag.set_content(label);
            }
            tag
        });

        assert_eq!(
            tagger.make("button", Some("Go")).render(),
            r#"<button type="button">Go</button>"#
        );
        // the style preset names itself "link"
        let tagger = Tagger::with_presets(site());
        assert_eq!(tagger.make("style", Some("a.css")).identifier(), "link");
    }

    #[test]
    fn lists_presets_sorted() {
        let tagger = Tagger::default();
        assert_eq!(
            tagger.names(),
            vec!["a", "favicon", "icon", "img", "script", "style"]
        );
        assert!(Tagger::new(site()).names().is_empty());
    }
}
