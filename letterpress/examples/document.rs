//! Typeset "that" and watch the cache construct only three glyphs.

use letterpress::{FontStyle, GlyphCache, Typesetter};

fn main() {
    let style = FontStyle::new("sans", 16.0, 0);
    let mut typesetter = Typesetter::new(GlyphCache::new());

    for (line, ch) in ['t', 'h', 'a', 't'].into_iter().enumerate() {
        let placed = typesetter.place(ch, style.clone(), 0, line as u16);
        println!("{placed}");
    }

    let stats = typesetter.cache().stats();
    println!(
        "constructed {} glyphs for {} placements",
        stats.constructions,
        typesetter.placed().len()
    );
}
