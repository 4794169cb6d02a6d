//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use apisurface_model::LoadError;

use super::{CliError, CliResult, ExitCode};
use crate::format::{FormatConfig, format_packages_with_config};
use crate::frontend::loader::ProgramLoader;

/// Load, render, and write the surface of every package named by `specs`.
pub fn extract(
    specs: &[String],
    loader: &dyn ProgramLoader,
    config: &FormatConfig,
    output: Option<&Path>,
) -> CliResult<ExitCode> {
    let document = render_surface(specs, loader, config)?;
    write_output(&document, output)?;
    Ok(ExitCode::SUCCESS)
}

/// Load and render without writing anything.
///
/// ## Errors
///
/// - Exit code 2 if the loader fails (nothing is rendered).
/// - Exit code 3 if a package holds a shape the formatter cannot render (nothing is returned).
pub fn render_surface(specs: &[String], loader: &dyn ProgramLoader, config: &FormatConfig) -> CliResult<String> {
    let packages = loader.load(specs).map_err(load_failure)?;
    tracing::debug!(packages = packages.len(), "packages loaded");

    format_packages_with_config(&packages, config)
        .map_err(|e| CliError::new(format!("error: {}", e), ExitCode::RENDER_FAILURE))
}

fn load_failure(err: LoadError) -> CliError {
    // Debug formatting of a miette report renders the full diagnostic with source context.
    let report = miette::Report::new(err);
    CliError::new(format!("failed to load packages: {:?}", report), ExitCode::LOAD_FAILURE)
}

fn write_output(document: &str, output: Option<&Path>) -> CliResult<()> {
    match output {
        Some(path) => fs::write(path, document)
            .map_err(|e| CliError::failure(format!("Error writing '{}': {}", path.display(), e))),
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(document.as_bytes())
                .and_then(|_| stdout.flush())
                .map_err(|e| CliError::failure(format!("Error writing to stdout: {}", e)))
        }
    }
}
