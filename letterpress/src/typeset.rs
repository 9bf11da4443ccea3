//! Typesetter - extrinsic placement of shared glyphs
//!
//! The glyph is the intrinsic, shared half; where it lands on the page is
//! extrinsic and lives here. Placing the same character twice stores two
//! positions but one glyph instance.

use std::fmt;
use std::sync::Arc;

use smallvec::SmallVec;

use crate::cache::GlyphCache;
use crate::glyph::Glyph;
use crate::style::FontStyle;

/// A glyph pinned to a cell position.
#[derive(Debug, Clone)]
pub struct PlacedGlyph {
    pub glyph: Arc<Glyph>,
    pub col: u16,
    pub line: u16,
}

impl fmt::Display for PlacedGlyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {} {}", self.glyph.ch, self.col, self.line)
    }
}

/// Lays out characters against a shared glyph cache.
pub struct Typesetter {
    cache: GlyphCache,
    placed: Vec<PlacedGlyph>,
}

impl Typesetter {
    pub fn new(cache: GlyphCache) -> Self {
        Self {
            cache,
            placed: Vec::new(),
        }
    }

    /// The cache this typesetter draws from.
    #[inline]
    pub fn cache(&self) -> &GlyphCache {
        &self.cache
    }

    /// Place one character, sharing its glyph with every other placement of
    /// the same character.
    pub fn place(&mut self, ch: char, style: FontStyle, col: u16, line: u16) -> PlacedGlyph {
        let glyph = self.cache.get_or_create(ch, style);
        let placed = PlacedGlyph { glyph, col, line };
        self.placed.push(placed.clone());
        placed
    }

    /// Place a run of characters starting at `(col, line)`, advancing by
    /// each glyph's cell width. Zero-width characters occupy no cell.
    pub fn place_str(
        &mut self,
        text: &str,
        style: &FontStyle,
        col: u16,
        line: u16,
    ) -> SmallVec<[PlacedGlyph; 8]> {
        let mut run = SmallVec::new();
        let mut col = col;
        for ch in text.chars() {
            let placed = self.place(ch, style.clone(), col, line);
            col = col.saturating_add(placed.glyph.width as u16);
            run.push(placed);
        }
        run
    }

    /// Everything placed so far, in placement order.
    pub fn placed(&self) -> &[PlacedGlyph] {
        &self.placed
    }
}
