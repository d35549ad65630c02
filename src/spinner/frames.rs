//! Glyph rotation for the spinner

use crate::constants::terminal::SPINNER_FRAMES;

/// Endless rotation over the spinner glyphs
///
/// Iterating yields the current glyph and then advances, so the first item is
/// always `|` and the sequence wraps after `\` without ever ending.
#[derive(Debug, Clone, Default)]
pub struct Frames {
    frame: usize,
}

impl Frames {
    /// Creates a rotation positioned at the first glyph
    pub fn new() -> Self {
        Self { frame: 0 }
    }

    /// Gets the glyph that would be drawn next
    pub fn current_frame(&self) -> char {
        SPINNER_FRAMES[self.frame]
    }

    /// Advances to the next glyph
    pub fn next_frame(&mut self) {
        self.frame = (self.frame + 1) % SPINNER_FRAMES.len();
    }
}

impl Iterator for Frames {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        let glyph = self.current_frame();
        self.next_frame();
        Some(glyph)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}
