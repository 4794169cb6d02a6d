//! JSON program loader.
//!
//! A document is either a whole [`Program`] (`{"packages": [...]}`) or a single bare [`ResolvedPackage`].
//! Malformed documents produce a [`LoadError`] carrying a source span, so `miette` can point at the offending
//! line.

use std::fs;
use std::path::{Path, PathBuf};

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

use crate::model::{Program, ResolvedPackage};

/// Errors raised while reading a package document.
#[derive(Debug, Error, Diagnostic)]
pub enum LoadError {
    #[error("failed to read package document '{}'", path.display())]
    #[diagnostic(code(apisurface::load::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid package document '{origin}': {message}")]
    #[diagnostic(
        code(apisurface::load::parse),
        help("expected a resolved package object or {{\"packages\": [...]}}")
    )]
    Parse {
        origin: String,
        message: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("here")]
        span: SourceSpan,
    },

    #[error("package document '{origin}' contains no packages")]
    #[diagnostic(code(apisurface::load::empty))]
    Empty { origin: String },
}

/// Parse a package document held in memory.
///
/// `origin` names the document in diagnostics (usually its path).
#[tracing::instrument(skip_all, fields(origin = origin, source_len = source.len()))]
pub fn load_program_str(source: &str, origin: &str) -> Result<Program, LoadError> {
    // Syntax first, so a bare package and a program are told apart only on well-formed input.
    let value: serde_json::Value = serde_json::from_str(source).map_err(|e| parse_error(source, origin, &e))?;

    let program = if value.get("packages").is_some() {
        serde_json::from_str::<Program>(source).map_err(|e| parse_error(source, origin, &e))?
    } else {
        let package = serde_json::from_str::<ResolvedPackage>(source).map_err(|e| parse_error(source, origin, &e))?;
        Program {
            packages: vec![package],
        }
    };

    if program.packages.is_empty() {
        return Err(LoadError::Empty {
            origin: origin.to_string(),
        });
    }

    tracing::debug!(packages = program.packages.len(), "loaded package document");
    Ok(program)
}

/// Read and parse a package document from disk.
pub fn load_program_file(path: &Path) -> Result<Program, LoadError> {
    let source = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load_program_str(&source, &path.display().to_string())
}

fn parse_error(source: &str, origin: &str, err: &serde_json::Error) -> LoadError {
    let offset = byte_offset(source, err.line(), err.column());
    LoadError::Parse {
        origin: origin.to_string(),
        message: err.to_string(),
        src: NamedSource::new(origin, source.to_string()),
        span: SourceSpan::from(offset..offset),
    }
}

/// Convert serde_json's 1-based line/column into a byte offset, clamped to the source length.
fn byte_offset(source: &str, line: usize, column: usize) -> usize {
    if line == 0 {
        return 0;
    }
    let line_start: usize = source
        .split_inclusive('\n')
        .take(line - 1)
        .map(str::len)
        .sum();
    (line_start + column.saturating_sub(1)).min(source.len())
}
