//! Letterpress - shared glyph instance cache
//!
//! A letterpress case holds one piece of type per sort and reuses it across
//! the whole page; this crate does the same for glyphs. [`GlyphCache`]
//! guarantees at most one immutable [`Glyph`] per distinct character and
//! hands it out behind `Arc`, so repeated requests for equal characters
//! never allocate repeated instances.
//!
//! Design points:
//! - check-then-insert is one atomic critical section, safe to share across
//!   threads
//! - returned handles stay valid independent of the cache's own lifetime
//! - the cache only grows; entries are never evicted or mutated
//!
//! ```
//! use letterpress::{FontStyle, GlyphCache};
//! use std::sync::Arc;
//!
//! let cache = GlyphCache::new();
//! let first = cache.get_or_create('t', FontStyle::new("sans", 16.0, 0));
//! let again = cache.get_or_create('t', FontStyle::new("serif", 24.0, 0));
//! assert!(Arc::ptr_eq(&first, &again)); // attributes are ignored on a hit
//! assert_eq!(cache.constructions(), 1);
//! ```

pub mod cache;
pub mod glyph;
pub mod registry;
pub mod style;
pub mod typeset;

pub use cache::{CacheError, CacheStats, GlyphCache};
pub use glyph::{Glyph, GlyphClass};
pub use style::FontStyle;
pub use typeset::{PlacedGlyph, Typesetter};
