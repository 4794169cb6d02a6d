//! Surface rendering configuration.
//!
//! The defaults reproduce the canonical wire format exactly. The knobs exist for front-ends with different
//! conventions (a vendoring directory with another name, an entry-point package not called `main`); changing them
//! changes the output, so two surfaces are only comparable when produced with the same configuration.

use apisurface_core::lang::conventions::{ENTRY_PACKAGE_NAME, LINE_PREFIX, VENDOR_SEGMENT};

/// Surface rendering configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatConfig {
    /// Segment marking vendored package copies. Empty disables de-vendoring.
    pub vendor_segment: String,
    /// First word of every line
    pub line_prefix: String,
    /// Drop entry-point packages when rendering several packages
    pub skip_entry_packages: bool,
    /// Package clause name identifying an entry point
    pub entry_package_name: String,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            vendor_segment: VENDOR_SEGMENT.to_string(),
            line_prefix: LINE_PREFIX.to_string(),
            skip_entry_packages: true,
            entry_package_name: ENTRY_PACKAGE_NAME.to_string(),
        }
    }
}

impl FormatConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the vendoring segment
    pub fn with_vendor_segment(mut self, segment: impl Into<String>) -> Self {
        self.vendor_segment = segment.into();
        self
    }

    /// Set the line prefix
    pub fn with_line_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.line_prefix = prefix.into();
        self
    }

    /// Keep or drop entry-point packages
    pub fn with_skip_entry_packages(mut self, skip: bool) -> Self {
        self.skip_entry_packages = skip;
        self
    }

    /// Set the entry-point package name
    pub fn with_entry_package_name(mut self, name: impl Into<String>) -> Self {
        self.entry_package_name = name.into();
        self
    }
}
