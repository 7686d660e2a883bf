//! Structural pattern: Flyweight
//! Example: sharing one glyph object per character
//!
//! A text editor rendering thousands of characters keeps a single `Glyph` per
//! symbol and hands out `Rc` clones of it.

use std::fmt;
use std::rc::Rc;

use rustc_hash::FxHashMap;

use crate::console::Console;
use crate::error::Result;

#[derive(Debug, PartialEq, Eq)]
pub struct Glyph {
    symbol: char,
}

impl Glyph {
    pub fn symbol(&self) -> char {
        self.symbol
    }
}

impl fmt::Display for Glyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Character: {}", self.symbol)
    }
}

#[derive(Debug, Default)]
pub struct GlyphFactory {
    cache: FxHashMap<char, Rc<Glyph>>,
}

impl GlyphFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the shared glyph for `symbol`, creating it on first request.
    pub fn get(&mut self, symbol: char) -> Rc<Glyph> {
        let glyph = self.cache.entry(symbol).or_insert_with(|| {
            tracing::trace!(%symbol, "creating glyph");
            Rc::new(Glyph { symbol })
        });
        Rc::clone(glyph)
    }

    /// Number of distinct glyphs created so far.
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}

pub fn run(console: &mut Console<'_>) -> Result<()> {
    let mut factory = GlyphFactory::new();

    let a = factory.get('A');
    let b = factory.get('B');
    let a_again = factory.get('A');

    console.line(&a)?;
    console.line(&b)?;
    console.line(&a_again)?;
    console.line(Rc::ptr_eq(&a, &a_again))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_same_symbol_same_instance() {
        let mut factory = GlyphFactory::new();
        let first = factory.get('x');
        let second = factory.get('x');
        assert!(Rc::ptr_eq(&first, &second));
        assert_eq!(factory.len(), 1);
    }

    #[test]
    fn test_different_symbols_distinct() {
        let mut factory = GlyphFactory::new();
        let x = factory.get('x');
        let y = factory.get('y');
        assert!(!Rc::ptr_eq(&x, &y));
        assert_eq!(y.symbol(), 'y');
        assert_eq!(factory.len(), 2);
    }

    #[test]
    fn test_narration() {
        assert_eq!(
            Console::capture(run).unwrap(),
            "Character: A\nCharacter: B\nCharacter: A\ntrue\n"
        );
    }

    proptest! {
        #[test]
        fn test_one_glyph_per_distinct_symbol(text in "\\PC{0,64}") {
            let mut factory = GlyphFactory::new();
            let glyphs: Vec<_> = text.chars().map(|c| factory.get(c)).collect();

            let mut distinct: Vec<char> = text.chars().collect();
            distinct.sort_unstable();
            distinct.dedup();
            prop_assert_eq!(factory.len(), distinct.len());

            for (glyph, c) in glyphs.iter().zip(text.chars()) {
                prop_assert!(Rc::ptr_eq(glyph, &factory.get(c)));
            }
        }
    }
}
