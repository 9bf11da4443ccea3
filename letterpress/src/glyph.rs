//! Glyph - the shared, immutable per-character value
//!
//! Exactly one `Glyph` exists per distinct character for a cache's lifetime.
//! Consumers hold it behind `Arc`, so the payload cannot be mutated through a
//! handle and a handle stays valid independent of the cache.

use unicode_width::UnicodeWidthChar;

use crate::style::FontStyle;

// ============================================================================
// GlyphClass - shape classification
// ============================================================================

/// Shape class of a glyph.
///
/// The variant set is fixed and known at compile time, so drawing code can
/// match exhaustively instead of dispatching through a trait object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlyphClass {
    /// Ordinary text, rendered through the font.
    Text,
    /// Box Drawing (U+2500-U+257F) - lines, corners, crossings
    BoxDrawing,
    /// Block Elements (U+2580-U+259F), minus the shades
    BlockElement,
    /// Shade characters (░▒▓)
    Shade,
    /// Legacy Computing (U+1FB00-U+1FB3B)
    LegacyComputing,
    /// Powerline symbols (U+E0B0-U+E0BF)
    Powerline,
    /// Braille patterns (U+2800-U+28FF)
    Braille,
}

impl GlyphClass {
    /// Classify a character.
    ///
    /// Priority: Block Elements (including shades) > Box Drawing > the rest.
    pub fn of(ch: char) -> Self {
        match ch {
            '\u{2580}'..='\u{259F}' => {
                if is_shade(ch) {
                    GlyphClass::Shade
                } else {
                    GlyphClass::BlockElement
                }
            }
            '\u{2500}'..='\u{257F}' => GlyphClass::BoxDrawing,
            '\u{1FB00}'..='\u{1FB3B}' => GlyphClass::LegacyComputing,
            '\u{E0B0}'..='\u{E0BF}' => GlyphClass::Powerline,
            '\u{2800}'..='\u{28FF}' => GlyphClass::Braille,
            _ => GlyphClass::Text,
        }
    }

    /// Whether the glyph is drawn by custom block/box routines rather than
    /// the font rasterizer.
    #[inline]
    pub fn is_custom_drawn(&self) -> bool {
        !matches!(self, GlyphClass::Text)
    }
}

/// Block Element (U+2580-U+259F): fills, half blocks, quadrants, shades.
#[inline]
pub fn is_block_element(ch: char) -> bool {
    matches!(ch, '\u{2580}'..='\u{259F}')
}

/// Box Drawing (U+2500-U+257F): lines, corners, crossings, double variants.
#[inline]
pub fn is_box_drawing(ch: char) -> bool {
    matches!(ch, '\u{2500}'..='\u{257F}')
}

/// Shade characters (░▒▓), a subset of the Block Elements.
#[inline]
pub fn is_shade(ch: char) -> bool {
    matches!(ch, '░' | '▒' | '▓')
}

// ============================================================================
// Glyph
// ============================================================================

/// Immutable glyph payload, built once per distinct character.
#[derive(Debug)]
pub struct Glyph {
    /// The character itself.
    pub ch: char,
    /// Style captured when the glyph was first requested.
    pub style: FontStyle,
    /// Terminal cell width (1 = narrow, 2 = wide emoji/CJK, 0 = combining
    /// or control).
    pub width: u8,
    /// Shape class, for custom drawing.
    pub class: GlyphClass,
}

impl Glyph {
    pub fn new(ch: char, style: FontStyle) -> Self {
        Self {
            ch,
            style,
            width: UnicodeWidthChar::width(ch).unwrap_or(0) as u8,
            class: GlyphClass::of(ch),
        }
    }

    #[inline]
    pub fn is_wide(&self) -> bool {
        self.width == 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_block_elements() {
        assert_eq!(GlyphClass::of('█'), GlyphClass::BlockElement);
        assert_eq!(GlyphClass::of('▀'), GlyphClass::BlockElement); // upper half
        assert_eq!(GlyphClass::of('▟'), GlyphClass::BlockElement); // quadrant

        // Shades are split out of the Block Elements range
        assert_eq!(GlyphClass::of('░'), GlyphClass::Shade);
        assert_eq!(GlyphClass::of('▒'), GlyphClass::Shade);
        assert_eq!(GlyphClass::of('▓'), GlyphClass::Shade);
    }

    #[test]
    fn test_classify_box_drawing() {
        assert_eq!(GlyphClass::of('─'), GlyphClass::BoxDrawing);
        assert_eq!(GlyphClass::of('┌'), GlyphClass::BoxDrawing);
        assert_eq!(GlyphClass::of('╬'), GlyphClass::BoxDrawing);
        assert!(is_box_drawing('│'));
        assert!(!is_box_drawing('a'));
    }

    #[test]
    fn test_classify_braille_and_powerline() {
        assert_eq!(GlyphClass::of('⠿'), GlyphClass::Braille);
        assert_eq!(GlyphClass::of('\u{E0B0}'), GlyphClass::Powerline);
        assert_eq!(GlyphClass::of('\u{1FB00}'), GlyphClass::LegacyComputing);
    }

    #[test]
    fn test_classify_text() {
        assert_eq!(GlyphClass::of('a'), GlyphClass::Text);
        assert_eq!(GlyphClass::of('中'), GlyphClass::Text);
        assert!(!GlyphClass::of('a').is_custom_drawn());
        assert!(GlyphClass::of('█').is_custom_drawn());
    }

    #[test]
    fn test_glyph_width() {
        let style = FontStyle::default();
        assert_eq!(Glyph::new('a', style.clone()).width, 1);
        assert_eq!(Glyph::new('中', style.clone()).width, 2);
        assert!(Glyph::new('中', style.clone()).is_wide());
        // Combining mark occupies no cell of its own
        assert_eq!(Glyph::new('\u{0301}', style).width, 0);
    }
}
