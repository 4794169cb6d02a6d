//! Surface Frontend
//!
//! Everything on the input side of the formatter:
//! - `loader`: the seam through which a type-checking front-end hands over resolved packages
//! - `visibility`: which declarations and members belong to the public surface
//!
//! The resolved model itself lives in the shared `apisurface_model` crate.

pub use apisurface_model::model;

pub mod loader;
pub mod visibility;
