//! Attribute and content values.
//!
//! A value is either literal text or a deferred producer that is invoked
//! with the owning tag every time the tag is rendered.

use std::fmt;
use std::sync::Arc;

use crate::tag::Tag;

/// A function producing a string on demand from the tag it belongs to.
pub type Producer = Arc<dyn Fn(&Tag) -> String + Send + Sync>;

/// The value of an attribute or of a tag's content.
#[derive(Clone)]
pub enum Value {
    /// Literal text, rendered verbatim.
    Text(String),
    /// Evaluated at render time.
    Deferred(Producer),
}

impl Value {
    /// Wrap a closure as a deferred value.
    pub fn deferred<F>(producer: F) -> Self
    where
        F: Fn(&Tag) -> String + Send + Sync + 'static,
    {
        Value::Deferred(Arc::new(producer))
    }

    /// Produce the string this value stands for.
    pub fn resolve(&self, tag: &Tag) -> String {
        match self {
            Value::Text(text) => text.clone(),
            Value::Deferred(producer) => producer(tag),
        }
    }

    /// Get as string if it's a literal value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(text) => Some(text),
            Value::Deferred(_) => None,
        }
    }

    pub fn is_deferred(&self) -> bool {
        matches!(self, Value::Deferred(_))
    }

    /// Literal empty text. Deferred values are never considered empty.
    pub fn is_empty(&self) -> bool {
        matches!(self, Value::Text(text) if text.is_empty())
    }
}

impl Default for Value {
    fn default() -> Self {
        Value::Text(String::new())
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Value::Deferred(_) => f.write_str("Deferred(..)"),
        }
    }
}

impl PartialEq<str> for Value {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == Some(other)
    }
}

impl PartialEq<&str> for Value {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == Some(*other)
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Value::Text(text)
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Value::Text(text.to_string())
    }
}

impl From<&String> for Value {
    fn from(text: &String) -> Self {
        Value::Text(text.clone())
    }
}

/// Nested markup: the inner tag is rendered at conversion time.
impl From<Tag> for Value {
    fn from(tag: Tag) -> Self {
        Value::Text(tag.render())
    }
}

impl From<&Tag> for Value {
    fn from(tag: &Tag) -> Self {
        Value::Text(tag.render())
    }
}

/// `None` maps to empty text, which setters ignore.
impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_resolves_verbatim() {
        let tag = Tag::new("p");
        let value = Value::from("a \"quoted\" <b>");

        assert_eq!(value.resolve(&tag), "a \"quoted\" <b>");
        assert_eq!(value.as_str(), Some("a \"quoted\" <b>"));
    }

    #[test]
    fn deferred_sees_the_tag() {
        let tag = Tag::new("section");
        let value = Value::deferred(|tag| format!("inside {}", tag.identifier()));

        assert!(value.is_deferred());
        assert_eq!(value.as_str(), None);
        assert_eq!(value.resolve(&tag), "inside section");
    }

    #[test]
    fn none_is_empty() {
        let value = Value::from(None::<&str>);
        assert!(value.is_empty());
        assert!(!Value::deferred(|_| String::new()).is_empty());
    }

    #[test]
    fn nested_tag_renders_on_conversion() {
        let inner = Tag::create("em", "hi");
        assert_eq!(Value::from(&inner), "<em>hi</em>");
    }
}
