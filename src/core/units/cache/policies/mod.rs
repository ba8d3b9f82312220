//! Cache replacement policies.

/// Age-based least recently used replacement.
pub mod lru;

pub use lru::LruPolicy;
