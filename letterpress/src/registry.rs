//! Process-wide cache registry
//!
//! The explicit [`GlyphCache`] value is the primary design; this module is
//! the process-wide convenience over it. The two surfaces are observably
//! equivalent: both hand out handles over one shared mapping.
//!
//! Lifecycle: the global cache is built on first use (or seeded once via
//! [`init`]) and torn down with the process. There is no teardown hook to
//! call; the map only grows and owns nothing beyond memory.

use once_cell::sync::OnceCell;

use crate::cache::GlyphCache;

static GLOBAL: OnceCell<GlyphCache> = OnceCell::new();

/// Handle to the process-wide cache, initializing it empty on first use.
pub fn global() -> &'static GlyphCache {
    GLOBAL.get_or_init(GlyphCache::new)
}

/// Seed the process-wide cache before anything uses it.
///
/// Fails with the rejected cache if [`global`] or an earlier [`init`] call
/// already installed one.
pub fn init(cache: GlyphCache) -> Result<(), GlyphCache> {
    GLOBAL.set(cache)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::FontStyle;
    use std::sync::Arc;

    // Tests in this module share one process-wide registry, so they only
    // assert behavior that holds regardless of ordering.

    #[test]
    fn test_global_is_one_mapping() {
        let a = global().get_or_create('⌘', FontStyle::default());
        let b = global().get_or_create('⌘', FontStyle::default());
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_independently_obtained_handles_share_glyphs() {
        let handle1 = global().clone();
        let handle2 = global().clone();

        let via1 = handle1.get_or_create('⎋', FontStyle::default());
        let via2 = handle2.get_or_create('⎋', FontStyle::default());

        assert!(Arc::ptr_eq(&via1, &via2));
    }

    #[test]
    fn test_init_after_use_is_rejected() {
        let _ = global();
        assert!(init(GlyphCache::new()).is_err());
    }
}
