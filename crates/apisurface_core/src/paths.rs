//! Package-path normalization.
//!
//! A vendored package (`github.com/acme/app/vendor/golang.org/x/net/context`) must render exactly like the
//! upstream copy (`golang.org/x/net/context`), otherwise re-vendoring a dependency would show up as a surface change.

/// Strip everything up to and including the last occurrence of `segment` (usually `/vendor/`).
///
/// An empty `segment` disables normalization.
///
/// ## Examples
/// ```rust
/// use apisurface_core::devendor;
/// use apisurface_core::lang::conventions::VENDOR_SEGMENT;
///
/// assert_eq!(devendor("net/http", VENDOR_SEGMENT), "net/http");
/// assert_eq!(devendor("a/vendor/b/vendor/c/d", VENDOR_SEGMENT), "c/d");
/// ```
pub fn devendor<'a>(path: &'a str, segment: &str) -> &'a str {
    if segment.is_empty() {
        return path;
    }
    match path.rfind(segment) {
        Some(i) => &path[i + segment.len()..],
        None => path,
    }
}
