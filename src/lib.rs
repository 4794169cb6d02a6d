#![forbid(unsafe_code)]
//! Public API surface extraction
//!
//! Turns a fully type-checked package into a canonical, deterministic text document: one sorted line per
//! exported declaration, exported struct field, and exported interface method. Two versions of a package can then
//! be compared with a plain text diff to spot breaking API changes.
//!
//! ```text
//! pkg example.com/p, const C string
//! pkg example.com/p, func Foo(int, ...interface{})
//! pkg example.com/p, type Foo interface { Close, Read }
//! pkg example.com/p, type Foo interface, Close() error
//! ```
//!
//! ## Layout
//!
//! - `frontend`: loader seam and visibility rules
//! - `format`: type rendering, line collection, output assembly
//! - `cli`: command-line driver
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! - **Contract violations** (a shape the formatter cannot render) are `RenderError`s, never panics. Rendering is
//!   all-or-nothing per document.

pub mod cli;
pub mod format;
pub mod frontend;
pub mod version;

pub use frontend::loader::{JsonProgramLoader, ProgramLoader};
pub use frontend::model;
pub use frontend::visibility;

pub use format::{
    FormatConfig, Formatter, RenderError, format_package, format_package_with_config, format_packages,
    format_packages_with_config,
};
