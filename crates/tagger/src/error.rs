//! Errors raised by the tag builder.

/// Errors that can occur while working with a [`Tag`](crate::Tag).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TagError {
    #[error("Attribute not set: {0}")]
    MissingAttribute(String),

    #[error("Can't set the {method} attribute with {count} arguments, expected exactly one")]
    InvalidArgument { method: String, count: usize },
}
