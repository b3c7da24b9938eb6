//! The tag builder.
//!
//! A [`Tag`] is one HTML element: an identifier, an insertion-ordered set of
//! attributes and an optional content slot. Setters chain, and rendering
//! produces a one-shot string.
//!
//! ```
//! use tagger::Tag;
//!
//! let html = Tag::create("div", "content").class("foo").id("bar").render();
//! assert_eq!(html, r#"<div class="foo" id="bar">content</div>"#);
//! ```

use std::fmt::{self, Write};

use indexmap::IndexMap;

use crate::error::TagError;
use crate::value::Value;

/// Attributes of a tag, in insertion order.
pub type Attributes = IndexMap<String, Value>;

/// HTML tag builder.
#[derive(Debug, Clone, Default)]
pub struct Tag {
    identifier: String,
    attributes: Attributes,
    content: Option<Value>,
}

impl Tag {
    /// Create a tag without content.
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            ..Self::default()
        }
    }

    /// Create a tag with initial content.
    ///
    /// Deferred content is kept as is and evaluated when the tag renders.
    pub fn create(identifier: impl Into<String>, content: impl Into<Value>) -> Self {
        let mut tag = Self::new(identifier);
        tag.set_content(content);
        tag
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn set_identifier(&mut self, identifier: impl Into<String>) -> &mut Self {
        self.identifier = identifier.into();
        self
    }

    /// Set an attribute.
    ///
    /// Empty literal values are ignored: nothing is inserted and an existing
    /// value is left untouched. Re-setting a key keeps its original position.
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        let value = value.into();
        if value.is_empty() {
            return self;
        }
        self.attributes.insert(name.into(), value);
        self
    }

    /// Set an attribute to a value computed at render time.
    pub fn set_attribute_with<F>(&mut self, name: impl Into<String>, producer: F) -> &mut Self
    where
        F: Fn(&Tag) -> String + Send + Sync + 'static,
    {
        self.set_attribute(name, Value::deferred(producer))
    }

    /// Set several attributes in iteration order.
    pub fn set_attributes<I, K, V>(&mut self, attributes: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        for (name, value) in attributes {
            self.set_attribute(name, value);
        }
        self
    }

    /// Get a stored attribute value. Deferred values are returned unresolved.
    pub fn get_attribute(&self, name: &str) -> Result<&Value, TagError> {
        self.attributes
            .get(name)
            .ok_or_else(|| TagError::MissingAttribute(name.to_string()))
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }

    /// True only if every name is set.
    pub fn has_attributes<I, S>(&self, names: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        names
            .into_iter()
            .all(|name| self.has_attribute(name.as_ref()))
    }

    /// Remove an attribute, keeping the order of the others.
    pub fn remove_attribute(&mut self, name: &str) -> Option<Value> {
        self.attributes.shift_remove(name)
    }

    /// Set an attribute named after a method call.
    ///
    /// This is the explicit form of `tag.href("#")`: exactly one argument
    /// sets the attribute, anything else is rejected.
    pub fn dispatch(&mut self, method: &str, args: Vec<Value>) -> Result<&mut Self, TagError> {
        let count = args.len();
        let mut args = args.into_iter();
        match (args.next(), args.next()) {
            (Some(value), None) => Ok(self.set_attribute(method, value)),
            _ => Err(TagError::InvalidArgument {
                method: method.to_string(),
                count,
            }),
        }
    }

    pub fn set_content(&mut self, content: impl Into<Value>) -> &mut Self {
        self.content = Some(content.into());
        self
    }

    /// Set content computed at render time.
    pub fn set_content_with<F>(&mut self, producer: F) -> &mut Self
    where
        F: Fn(&Tag) -> String + Send + Sync + 'static,
    {
        self.set_content(Value::deferred(producer))
    }

    /// Raw stored content, not resolved.
    pub fn get_content(&self) -> Option<&Value> {
        self.content.as_ref()
    }

    /// Set an attribute.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set_attribute(name, value);
        self
    }

    /// Set an attribute computed at render time.
    ///
    /// ```
    /// use tagger::Tag;
    ///
    /// let tag = Tag::new("a").attr_with("title", |tag| format!("{} link", tag.identifier()));
    /// assert_eq!(tag.render(), r#"<a title="a link"></a>"#);
    /// ```
    pub fn attr_with<F>(mut self, name: impl Into<String>, producer: F) -> Self
    where
        F: Fn(&Tag) -> String + Send + Sync + 'static,
    {
        self.set_attribute_with(name, producer);
        self
    }

    pub fn attrs<I, K, V>(mut self, attributes: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        self.set_attributes(attributes);
        self
    }

    pub fn content(mut self, content: impl Into<Value>) -> Self {
        self.set_content(content);
        self
    }

    pub fn content_with<F>(mut self, producer: F) -> Self
    where
        F: Fn(&Tag) -> String + Send + Sync + 'static,
    {
        self.set_content_with(producer);
        self
    }

    pub fn id(self, id: impl Into<Value>) -> Self {
        self.attr("id", id)
    }

    pub fn class(self, class: impl Into<Value>) -> Self {
        self.attr("class", class)
    }

    pub fn href(self, href: impl Into<Value>) -> Self {
        self.attr("href", href)
    }

    pub fn src(self, src: impl Into<Value>) -> Self {
        self.attr("src", src)
    }

    pub fn title(self, title: impl Into<Value>) -> Self {
        self.attr("title", title)
    }

    pub fn rel(self, rel: impl Into<Value>) -> Self {
        self.attr("rel", rel)
    }

    /// Set the `type` attribute.
    pub fn kind(self, kind: impl Into<Value>) -> Self {
        self.attr("type", kind)
    }

    pub fn style(self, style: impl Into<Value>) -> Self {
        self.attr("style", style)
    }

    pub fn name(self, name: impl Into<Value>) -> Self {
        self.attr("name", name)
    }

    pub fn alt(self, alt: impl Into<Value>) -> Self {
        self.attr("alt", alt)
    }

    /// The opening tag with all attributes.
    pub fn open(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_open(&mut out);
        out
    }

    /// The closing tag.
    pub fn close(&self) -> String {
        format!("</{}>", self.identifier)
    }

    /// Render the tag as an HTML string.
    pub fn render(&self) -> String {
        self.to_string()
    }

    fn write_open(&self, out: &mut impl Write) -> fmt::Result {
        write!(out, "<{}", self.identifier)?;
        for (name, value) in &self.attributes {
            write!(out, " {}=\"{}\"", name, value.resolve(self))?;
        }
        out.write_char('>')
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_open(f)?;
        if let Some(content) = &self.content {
            f.write_str(&content.resolve(self))?;
        }
        write!(f, "</{}>", self.identifier)
    }
}
