//! Pre-configured tags for commonly used elements.
//!
//! Each preset is a plain [`Tag`] with its identifier and a few attributes
//! already set; everything else works exactly like a tag built by hand.
//! A missing argument leaves the corresponding attribute unset.

use crate::tag::Tag;
use crate::urls::{self, RequestRoot, UrlResolver};

/// `<a>` pointing at `link`.
///
/// Links containing `@` name a route action and are resolved through
/// `resolver`; unknown actions are kept verbatim.
pub fn anchor<R>(link: Option<&str>, resolver: &R) -> Tag
where
    R: UrlResolver + ?Sized,
{
    let href = link.map(|link| {
        if !link.contains('@') {
            return link.to_string();
        }
        match resolver.action(link) {
            Some(url) => url,
            None => {
                tracing::warn!("No route for action {}, using it verbatim", link);
                link.to_string()
            }
        }
    });
    Tag::new("a").href(href)
}

/// `<img>` with `src` below the request root, unless `path` is absolute.
pub fn img<R>(path: Option<&str>, root: &R) -> Tag
where
    R: RequestRoot + ?Sized,
{
    let src = path.map(|path| {
        if urls::is_absolute(path) {
            path.to_string()
        } else {
            urls::join(&root.root(), path)
        }
    });
    Tag::new("img").src(src)
}

/// `<script>` loading `src` below the request root.
pub fn script<R>(src: Option<&str>, root: &R) -> Tag
where
    R: RequestRoot + ?Sized,
{
    Tag::new("script")
        .kind("text/javascript")
        .src(src.map(|src| urls::join(&root.root(), src)))
}

/// Stylesheet `<link>` for `src` below the request root.
pub fn style<R>(src: Option<&str>, root: &R) -> Tag
where
    R: RequestRoot + ?Sized,
{
    Tag::new("link")
        .kind("text/css")
        .href(src.map(|src| urls::join(&root.root(), src)))
        .rel("stylesheet")
        .attr("media", "screen")
}

/// `<i class="icon-{name}">`.
pub fn icon(name: Option<&str>) -> Tag {
    Tag::new("i").class(name.map(|name| format!("icon-{name}")))
}

/// Shortcut icon `<link>` for `link` below the request root.
pub fn favicon<R>(link: Option<&str>, root: &R) -> Tag
where
    R: RequestRoot + ?Sized,
{
    Tag::new("link")
        .rel("shortcut icon")
        .kind("image/x-icon")
        .href(link.map(|link| urls::join(&root.root(), link)))
}
