//! Resolved, serializable view of a tag.

use indexmap::IndexMap;
use serde::Serialize;

use crate::tag::Tag;

/// A tag with every deferred value evaluated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TagSnapshot {
    pub identifier: String,

    /// Attribute values in render order
    pub attributes: IndexMap<String, String>,

    pub content: Option<String>,
}

impl From<&Tag> for TagSnapshot {
    fn from(tag: &Tag) -> Self {
        Self {
            identifier: tag.identifier().to_string(),
            attributes: tag
                .attributes()
                .iter()
                .map(|(name, value)| (name.clone(), value.resolve(tag)))
                .collect(),
            content: tag.get_content().map(|content| content.resolve(tag)),
        }
    }
}
