//! Program loader boundary.
//!
//! The formatter never parses or type-checks source. A [`ProgramLoader`] turns package specifications (whatever
//! the front-end understands) into fully resolved packages, or fails before any rendering starts.

use std::io::{self, Read};
use std::path::{Path, PathBuf};

use apisurface_model::{LoadError, ResolvedPackage, load_program_file, load_program_str};

/// Package specification meaning "read the document from standard input".
pub const STDIN_SPEC: &str = "-";

/// Load resolved packages for a list of package specifications.
pub trait ProgramLoader {
    /// Resolve every spec. All-or-nothing: one failing spec fails the load.
    fn load(&self, specs: &[String]) -> Result<Vec<ResolvedPackage>, LoadError>;
}

/// Loader reading JSON package documents from disk (or stdin for `-`).
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonProgramLoader;

impl ProgramLoader for JsonProgramLoader {
    #[tracing::instrument(skip_all, fields(spec_count = specs.len()))]
    fn load(&self, specs: &[String]) -> Result<Vec<ResolvedPackage>, LoadError> {
        let mut packages = Vec::new();
        for spec in specs {
            let program = if spec == STDIN_SPEC {
                let mut source = String::new();
                io::stdin().read_to_string(&mut source).map_err(|source| LoadError::Io {
                    path: PathBuf::from(STDIN_SPEC),
                    source,
                })?;
                load_program_str(&source, "<stdin>")?
            } else {
                load_program_file(Path::new(spec))?
            };
            tracing::debug!(spec = %spec, packages = program.packages.len(), "loaded");
            packages.extend(program.packages);
        }
        Ok(packages)
    }
}
