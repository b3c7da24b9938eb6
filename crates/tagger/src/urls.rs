//! URL collaborators used by the presets.
//!
//! The builder itself never resolves URLs. Presets that need a link to a
//! named route or a path below the current request root ask these traits,
//! which the host application implements (see [`TaggerConfig`] for a
//! configuration-driven one).
//!
//! [`TaggerConfig`]: crate::TaggerConfig

/// Resolves `Controller@action` style route names to URLs.
pub trait UrlResolver: Send + Sync {
    /// Resolve a route action, `None` if it is unknown.
    fn action(&self, action: &str) -> Option<String>;
}

/// Provides the root URL of the current request.
pub trait RequestRoot: Send + Sync {
    /// Root URL without a trailing slash, e.g. `https://example.com`.
    fn root(&self) -> String;
}

/// Both collaborators, as needed by the preset registry.
pub trait Urls: UrlResolver + RequestRoot {}

impl<T: UrlResolver + RequestRoot> Urls for T {}

/// Join a path onto a root URL with exactly one slash between them.
pub fn join(root: &str, path: &str) -> String {
    format!(
        "{}/{}",
        root.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Whether a path already points somewhere on its own.
pub fn is_absolute(path: &str) -> bool {
    path.starts_with("http://") || path.starts_with("https://") || path.starts_with("//")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_normalizes_slashes() {
        assert_eq!(join("https://example.com", "css/app.css"), "https://example.com/css/app.css");
        assert_eq!(join("https://example.com/", "/css/app.css"), "https://example.com/css/app.css");
        assert_eq!(join("", "app.js"), "/app.js");
        assert_eq!(join("https://example.com", ""), "https://example.com/");
    }

    #[test]
    fn detects_absolute_paths() {
        assert!(is_absolute("http://cdn.test/a.png"));
        assert!(is_absolute("https://cdn.test/a.png"));
        assert!(is_absolute("//cdn.test/a.png"));
        assert!(!is_absolute("images/a.png"));
        assert!(!is_absolute("/images/a.png"));
    }
}
