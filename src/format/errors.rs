//! Define error types for surface rendering.
//!
//! Every variant is a contract violation by the loader: the model promised a closed set of shapes and something
//! outside it reached the formatter. Rendering stops at the first one; a surface with silently dropped entries would
//! hide breaking changes.

use thiserror::Error;

/// Error during surface rendering.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("cannot render {kind} declaration `{name}`")]
    UnsupportedDeclaration { name: String, kind: &'static str },

    #[error("cannot render a {shape} type in this position")]
    UnsupportedType { shape: &'static str },

    #[error("variadic signature must end in a slice parameter, found {found}")]
    InvalidVariadic { found: &'static str },

    #[error("structure of type `{name}` was not resolved by the loader")]
    UnresolvedUnderlying { name: String },

    #[error("package {path}: {source}")]
    InPackage {
        path: String,
        #[source]
        source: Box<RenderError>,
    },
}

impl RenderError {
    /// Attach the package path to an error raised while rendering that package.
    pub fn in_package(self, path: impl Into<String>) -> Self {
        RenderError::InPackage {
            path: path.into(),
            source: Box::new(self),
        }
    }
}
