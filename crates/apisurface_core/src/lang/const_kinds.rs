//! Constant-kind vocabulary.
//!
//! A constant is rendered by the *kind* of its value, not by its declared type: `const C MyInt = 3` renders as
//! `const C int`.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**.
//!
//! ## Examples
//! ```rust
//! use apisurface_core::lang::const_kinds::{self, ConstKindId};
//!
//! assert_eq!(const_kinds::from_str("string"), Some(ConstKindId::String));
//! assert_eq!(const_kinds::from_str("bool"), Some(ConstKindId::Bool));
//! assert_eq!(const_kinds::as_str(ConstKindId::Complex), "complex");
//! ```

use crate::lang::registry::VocabInfo;

/// Stable identifier for constant kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConstKindId {
    Bool,
    String,
    Int,
    Float,
    Complex,
}

/// Metadata for a constant kind.
pub type ConstKindInfo = VocabInfo<ConstKindId>;

/// Registry of constant kinds. Model deserialization resolves spellings here.
pub const CONST_KINDS: &[ConstKindInfo] = &[
    info(ConstKindId::Bool, "bool", &["boolean"]),
    info(ConstKindId::String, "string", &[]),
    info(ConstKindId::Int, "int", &["integer"]),
    info(ConstKindId::Float, "float", &[]),
    info(ConstKindId::Complex, "complex", &[]),
];

/// Resolve a spelling to a [`ConstKindId`].
///
/// ## Returns
/// - `Some(ConstKindId)` if the spelling is canonical or an alias.
/// - `None` otherwise.
pub fn from_str(name: &str) -> Option<ConstKindId> {
    CONST_KINDS.iter().find(|k| k.matches(name)).map(|k| k.id)
}

/// Return the canonical spelling for a constant kind.
pub fn as_str(id: ConstKindId) -> &'static str {
    match id {
        ConstKindId::Bool => "bool",
        ConstKindId::String => "string",
        ConstKindId::Int => "int",
        ConstKindId::Float => "float",
        ConstKindId::Complex => "complex",
    }
}

const fn info(id: ConstKindId, canonical: &'static str, aliases: &'static [&'static str]) -> ConstKindInfo {
    VocabInfo { id, canonical, aliases }
}
