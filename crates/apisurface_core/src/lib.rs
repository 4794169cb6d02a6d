//! Provide shared, pure vocabulary and helpers for public API surface extraction.
//!
//! This crate is intentionally small and dependency-free. It holds the spellings and conventions that both the
//! resolved model (loader side) and the canonical formatter (output side) must agree on:
//! - constant-kind words (`bool`, `string`, `int`, `float`, `complex`),
//! - channel-direction spellings,
//! - the exported-identifier convention,
//! - package-path de-vendoring,
//! - struct-tag quoting.
//!
//! ## Notes
//!
//! - This is a “semantic core” crate: **no IO**, no global state, and no model-specific types.
//! - Everything here participates in the output wire format. Changing a spelling is a breaking change for every
//!   consumer diffing two surfaces.

pub mod lang;
pub mod paths;
pub mod quote;

pub use paths::devendor;
pub use quote::quote;
