//! Fluent builder for HTML tags.
//!
//! This crate builds single HTML elements through chained calls and renders
//! them to strings. Attribute and content values can be deferred and are then
//! evaluated every time the tag renders. Presets and the [`Tagger`] factory
//! cover common tags whose links depend on the host application's URLs.

pub mod config;
pub mod error;
pub mod presets;
pub mod registry;
pub mod snapshot;
pub mod tag;
pub mod urls;
pub mod value;

pub use config::{ConfigError, TaggerConfig};
pub use error::TagError;
pub use registry::{Preset, Tagger};
pub use snapshot::TagSnapshot;
pub use tag::{Attributes, Tag};
pub use urls::{RequestRoot, UrlResolver, Urls};
pub use value::{Producer, Value};
