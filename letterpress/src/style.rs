//! FontStyle - construction attributes for a glyph
//!
//! Captured once, when a glyph is first built. On a cache hit the style
//! argument is ignored, so equal characters keep whatever style their first
//! request carried.

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

/// Font attributes used when a glyph is first constructed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FontStyle {
    /// Font family name.
    pub family: SmolStr,
    /// Physical pixel size, quantized to 0.1 px.
    size: u16,
    /// Style flags: bit0=bold, bit1=italic.
    pub flags: u8,
}

impl FontStyle {
    pub const FLAG_BOLD: u8 = 0b0001;
    pub const FLAG_ITALIC: u8 = 0b0010;

    pub fn new(family: &str, size_px: f32, flags: u8) -> Self {
        Self {
            family: SmolStr::new(family),
            size: (size_px * 10.0) as u16, // quantized: 0.1 px precision
            flags,
        }
    }

    /// Pixel size with the quantization undone.
    #[inline]
    pub fn size_px(&self) -> f32 {
        self.size as f32 / 10.0
    }

    #[inline]
    pub fn is_bold(&self) -> bool {
        self.flags & Self::FLAG_BOLD != 0
    }

    #[inline]
    pub fn is_italic(&self) -> bool {
        self.flags & Self::FLAG_ITALIC != 0
    }
}

impl Default for FontStyle {
    fn default() -> Self {
        Self::new("monospace", 14.0, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_style_flags() {
        let bold = FontStyle::new("sans", 16.0, FontStyle::FLAG_BOLD);
        assert!(bold.is_bold());
        assert!(!bold.is_italic());

        let both = FontStyle::new("sans", 16.0, FontStyle::FLAG_BOLD | FontStyle::FLAG_ITALIC);
        assert!(both.is_bold());
        assert!(both.is_italic());
    }

    #[test]
    fn test_size_quantization() {
        // 0.1 px precision: 14.02 and 14.04 land on the same slot
        let a = FontStyle::new("sans", 14.02, 0);
        let b = FontStyle::new("sans", 14.04, 0);
        assert_eq!(a, b);
        assert_eq!(a.size_px(), 14.0);
    }

    #[test]
    fn test_styles_with_different_family_differ() {
        let a = FontStyle::new("sans", 16.0, 0);
        let b = FontStyle::new("serif", 16.0, 0);
        assert_ne!(a, b);
    }
}
