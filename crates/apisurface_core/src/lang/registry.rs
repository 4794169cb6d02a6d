//! Shareable metadata for `apisurface_core::lang` registries.
//!
//! ## Notes
//! - These types are `Copy` so registries can live in `const` tables.

/// Shared metadata shape for “registry-first” vocabulary items.
///
/// - stable identity (`id`)
/// - accepted spellings (`canonical` + `aliases`)
///
/// ## Notes
/// - `canonical` is the spelling written when a model is serialized. Aliases are accepted on input only.
///
/// ## Examples
/// ```rust
/// use apisurface_core::lang::registry::VocabInfo;
///
/// let info = VocabInfo { id: 1u8, canonical: "int", aliases: &["integer"] };
/// assert!(info.matches("integer"));
/// assert!(!info.matches("Int"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct VocabInfo<Id> {
    pub id: Id,
    pub canonical: &'static str,
    pub aliases: &'static [&'static str],
}

impl<Id> VocabInfo<Id> {
    /// Return true if `name` is the canonical spelling or one of the aliases.
    pub fn matches(&self, name: &str) -> bool {
        self.canonical == name || self.aliases.contains(&name)
    }
}
