//! Channel-direction vocabulary.
//!
//! Each direction has an input spelling (used by the loader hand-off) and a rendered prefix that is written
//! in front of the element type.
//!
//! | Direction   | Rendered            |
//! |-------------|---------------------|
//! | `send_recv` | `chan T`            |
//! | `send_only` | `chan <- T`         |
//! | `recv_only` | `<- chan T`         |
//!
//! ## Examples
//! ```rust
//! use apisurface_core::lang::chan_dirs::{self, ChanDirId};
//!
//! assert_eq!(chan_dirs::from_str("recv_only"), Some(ChanDirId::RecvOnly));
//! assert_eq!(chan_dirs::render_prefix(ChanDirId::SendOnly), "chan <- ");
//! ```

use crate::lang::registry::VocabInfo;

/// Stable identifier for channel directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChanDirId {
    SendRecv,
    SendOnly,
    RecvOnly,
}

/// Metadata for a channel direction.
pub type ChanDirInfo = VocabInfo<ChanDirId>;

/// Registry of channel directions.
pub const CHAN_DIRS: &[ChanDirInfo] = &[
    info(ChanDirId::SendRecv, "send_recv", &["both"]),
    info(ChanDirId::SendOnly, "send_only", &["send"]),
    info(ChanDirId::RecvOnly, "recv_only", &["recv"]),
];

/// Resolve an input spelling to a [`ChanDirId`].
pub fn from_str(name: &str) -> Option<ChanDirId> {
    CHAN_DIRS.iter().find(|d| d.matches(name)).map(|d| d.id)
}

/// Return the canonical input spelling for a direction.
pub fn as_str(id: ChanDirId) -> &'static str {
    match id {
        ChanDirId::SendRecv => "send_recv",
        ChanDirId::SendOnly => "send_only",
        ChanDirId::RecvOnly => "recv_only",
    }
}

/// Return the rendered prefix (including the trailing space) written before the element type.
pub fn render_prefix(id: ChanDirId) -> &'static str {
    match id {
        ChanDirId::SendRecv => "chan ",
        ChanDirId::SendOnly => "chan <- ",
        ChanDirId::RecvOnly => "<- chan ",
    }
}

const fn info(id: ChanDirId, canonical: &'static str, aliases: &'static [&'static str]) -> ChanDirInfo {
    VocabInfo { id, canonical, aliases }
}
