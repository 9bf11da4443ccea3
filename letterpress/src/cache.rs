//! GlyphCache - shared glyph instance cache
//!
//! The constructing-and-caching access point: at most one [`Glyph`] exists
//! per distinct character for the cache's lifetime, and every request for an
//! equal character returns a handle to that same instance.
//!
//! Design points:
//! - check-then-insert runs as one critical section under a `Mutex`, so the
//!   one-instance-per-key invariant holds under concurrent callers
//! - returned handles are `Arc`s: stable, never invalidated by later inserts
//! - the map only grows; entries are never evicted or mutated in place
//! - hit/miss/construction counters are relaxed atomics, readable without
//!   taking the map lock

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;
use rustc_hash::FxHashMap;

use crate::glyph::Glyph;
use crate::style::FontStyle;

// ============================================================================
// CacheError
// ============================================================================

/// Input rejected by the validating lookup path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheError {
    /// Control characters have no glyph to share.
    InvalidKey(char),
}

impl fmt::Display for CacheError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CacheError::InvalidKey(ch) => {
                write!(f, "invalid glyph key: control character {ch:?}")
            }
        }
    }
}

impl std::error::Error for CacheError {}

// ============================================================================
// CacheStats
// ============================================================================

/// Counter snapshot, taken under no particular synchronization with ongoing
/// lookups.
#[derive(Debug, Clone, Copy, serde::Serialize)]
pub struct CacheStats {
    /// Glyphs constructed so far. Equals the number of distinct characters
    /// ever requested, not the number of calls.
    pub constructions: u64,
    /// Lookups answered from the map.
    pub hits: u64,
    /// Lookups that found nothing cached.
    pub misses: u64,
    /// Current number of cached glyphs.
    pub glyphs: usize,
}

// ============================================================================
// GlyphCache
// ============================================================================

struct CacheInner {
    /// char -> shared glyph. Guarded so check-then-insert is indivisible.
    glyphs: Mutex<FxHashMap<char, Arc<Glyph>>>,
    constructions: AtomicU64,
    hits: AtomicU64,
    misses: AtomicU64,
}

/// Cheap-cloneable handle to a shared glyph cache.
///
/// Every clone observes the same underlying mapping: a glyph constructed
/// through one handle is returned, same instance, through any other.
#[derive(Clone)]
pub struct GlyphCache {
    inner: Arc<CacheInner>,
}

impl GlyphCache {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Pre-size the map for callers that know their working set.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: Arc::new(CacheInner {
                glyphs: Mutex::new(FxHashMap::with_capacity_and_hasher(
                    capacity,
                    Default::default(),
                )),
                constructions: AtomicU64::new(0),
                hits: AtomicU64::new(0),
                misses: AtomicU64::new(0),
            }),
        }
    }

    /// Get the shared glyph for `ch`, constructing it on first sight.
    ///
    /// On a hit the existing instance is returned unchanged and `style` is
    /// ignored: the attributes that stick are the ones from the first
    /// request for this character. Intentional, not a bug.
    pub fn get_or_create(&self, ch: char, style: FontStyle) -> Arc<Glyph> {
        let mut glyphs = self.inner.glyphs.lock();
        if let Some(glyph) = glyphs.get(&ch) {
            self.inner.hits.fetch_add(1, Ordering::Relaxed);
            return Arc::clone(glyph);
        }

        self.inner.misses.fetch_add(1, Ordering::Relaxed);
        self.inner.constructions.fetch_add(1, Ordering::Relaxed);
        tracing::debug!("constructing glyph {:?} ({} cached)", ch, glyphs.len());

        let glyph = Arc::new(Glyph::new(ch, style));
        glyphs.insert(ch, Arc::clone(&glyph));
        glyph
    }

    /// Validating variant of [`get_or_create`](Self::get_or_create):
    /// rejects characters a typesetter cannot cache.
    pub fn try_get_or_create(
        &self,
        ch: char,
        style: FontStyle,
    ) -> Result<Arc<Glyph>, CacheError> {
        if ch.is_control() {
            return Err(CacheError::InvalidKey(ch));
        }
        Ok(self.get_or_create(ch, style))
    }

    /// Non-constructing lookup.
    pub fn get(&self, ch: char) -> Option<Arc<Glyph>> {
        let glyphs = self.inner.glyphs.lock();
        match glyphs.get(&ch) {
            Some(glyph) => {
                self.inner.hits.fetch_add(1, Ordering::Relaxed);
                Some(Arc::clone(glyph))
            }
            None => {
                self.inner.misses.fetch_add(1, Ordering::Relaxed);
                None
            }
        }
    }

    /// Glyphs constructed so far, i.e. distinct characters seen.
    #[inline]
    pub fn constructions(&self) -> u64 {
        self.inner.constructions.load(Ordering::Relaxed)
    }

    /// Number of cached glyphs.
    pub fn len(&self) -> usize {
        self.inner.glyphs.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Counter snapshot.
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            constructions: self.inner.constructions.load(Ordering::Relaxed),
            hits: self.inner.hits.load(Ordering::Relaxed),
            misses: self.inner.misses.load(Ordering::Relaxed),
            glyphs: self.len(),
        }
    }
}

impl Default for GlyphCache {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for GlyphCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stats = self.stats();
        f.debug_struct("GlyphCache")
            .field("glyphs", &stats.glyphs)
            .field("constructions", &stats.constructions)
            .field("hits", &stats.hits)
            .field("misses", &stats.misses)
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================
