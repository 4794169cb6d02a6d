//! Canonical surface formatter
//!
//! Renders resolved packages into the line-oriented surface document:
//! - one line per exported declaration, exported field, or exported method
//! - every line prefixed with `pkg <path>, `
//! - lines sorted bytewise, once, per package
//! - packages ordered by import path

mod config;
mod errors;
mod formatter;
mod types;
mod writer;

pub use config::FormatConfig;
pub use errors::RenderError;
pub use formatter::Formatter;
pub use types::TypeRenderer;
pub use writer::SurfaceWriter;

use apisurface_model::ResolvedPackage;

/// Render one package with default settings
pub fn format_package(package: &ResolvedPackage) -> Result<String, RenderError> {
    format_package_with_config(package, &FormatConfig::default())
}

/// Render one package with custom configuration
pub fn format_package_with_config(package: &ResolvedPackage, config: &FormatConfig) -> Result<String, RenderError> {
    Formatter::new(package, config).format()
}

/// Render several packages with default settings
pub fn format_packages(packages: &[ResolvedPackage]) -> Result<String, RenderError> {
    format_packages_with_config(packages, &FormatConfig::default())
}

/// Render several packages into one document.
///
/// Entry-point packages are dropped (unless configured otherwise), the rest are ordered by import path as loaded
/// and their documents concatenated. Any package failing to render fails the whole document.
#[tracing::instrument(skip_all, fields(package_count = packages.len()))]
pub fn format_packages_with_config(packages: &[ResolvedPackage], config: &FormatConfig) -> Result<String, RenderError> {
    let mut selected: Vec<&ResolvedPackage> = packages
        .iter()
        .filter(|pkg| {
            let skip = config.skip_entry_packages && pkg.is_entry_point(&config.entry_package_name);
            if skip {
                tracing::info!(package = %pkg.path, "skipping entry-point package");
            }
            !skip
        })
        .collect();
    // Ordered by the import path as loaded, vendoring prefix included.
    selected.sort_by(|a, b| a.path.cmp(&b.path));

    let mut out = String::new();
    for pkg in selected {
        let doc = format_package_with_config(pkg, config).map_err(|e| e.in_package(&pkg.path))?;
        out.push_str(&doc);
    }
    Ok(out)
}
