//! Resolved package model and program loader for API surface extraction.
//!
//! A front-end (parser + type checker) hands packages over in this shape; the surface formatter in the
//! `apisurface` crate never re-resolves anything.
//!
//! ## Notes
//! - This crate is "model-only": no visibility rules and no rendering.
//! - Vocabulary (const kinds, channel directions, exportedness) comes from `apisurface_core::lang`.
//!
//! ## Examples
//! ```rust
//! use apisurface_model::loader;
//!
//! let program = loader::load_program_str(r#"{"path": "p", "name": "p"}"#, "inline").unwrap();
//! assert_eq!(program.packages.len(), 1);
//! ```

pub mod loader;
pub mod model;

pub use loader::{LoadError, load_program_file, load_program_str};
pub use model::{
    ChanDir, ConstKind, DeclKind, DeclScope, Declaration, Field, Method, NamedType, Param, Program, ResolvedPackage,
    ResolvedType, Signature,
};
