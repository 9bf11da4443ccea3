//! Two independently obtained handles observe the same mapping: glyphs
//! created through the first are reused, same instance, through the second.

use letterpress::{registry, FontStyle};

fn main() {
    let style = FontStyle::new("sans", 16.0, 0);

    let first = registry::global().clone();
    for (line, ch) in ['t', 'h', 'a', 't'].into_iter().enumerate() {
        let glyph = first.get_or_create(ch, style.clone());
        println!("{} at 0 {line}", glyph.ch);
    }

    println!("---------------------------------");

    let second = registry::global().clone();
    for (line, ch) in ['t', 'h', 'i', 's'].into_iter().enumerate() {
        let glyph = second.get_or_create(ch, style.clone());
        println!("{} at 0 {line}", glyph.ch);
    }

    // t, h, a from the first run; the second run only adds i and s
    println!("{:?}", second.stats());
}
