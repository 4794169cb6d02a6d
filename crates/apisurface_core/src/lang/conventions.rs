//! Shared surface conventions (well-known identifiers and markers).

/// Package clause name of a program entry point. Such packages have no importable surface.
pub const ENTRY_PACKAGE_NAME: &str = "main";

/// Path segment marking a vendored copy of a package.
pub const VENDOR_SEGMENT: &str = "/vendor/";

/// Leading word of every rendered line (`pkg <path>, ...`).
pub const LINE_PREFIX: &str = "pkg";

/// Marker written before the element type of a trailing variadic parameter.
pub const VARIADIC_MARKER: &str = "...";

/// Report whether an identifier is exported: its first character is an uppercase letter.
///
/// ## Examples
/// ```rust
/// use apisurface_core::lang::conventions::is_exported;
///
/// assert!(is_exported("Reader"));
/// assert!(is_exported("Ära"));
/// assert!(!is_exported("reader"));
/// assert!(!is_exported("_Hidden"));
/// assert!(!is_exported(""));
/// ```
pub fn is_exported(name: &str) -> bool {
    name.chars().next().is_some_and(char::is_uppercase)
}
