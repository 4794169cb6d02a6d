//! API surface vocabulary registries.
//!
//! Callers work with **stable IDs** (e.g. `ConstKindId`, `ChanDirId`) and look up spellings via registry tables,
//! instead of scattering string literals across the formatter and the loader.
//!
//! ## Notes
//! - Registries are intentionally **pure**: no model types, no IO, no side effects.
//!
//! ## Examples
//! ```rust
//! use apisurface_core::lang::const_kinds::{self, ConstKindId};
//!
//! assert_eq!(const_kinds::from_str("float"), Some(ConstKindId::Float));
//! assert_eq!(const_kinds::as_str(ConstKindId::Float), "float");
//! ```

pub mod chan_dirs;
pub mod const_kinds;
pub mod conventions;
pub mod registry;
