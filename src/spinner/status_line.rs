//! Status line composition and erasing
//!
//! A status line is drawn in place: its text is written, then one backspace per
//! character moves the cursor back to where the text began. The next frame
//! overwrites it, and the final cleanup overwrites it with spaces.

use crate::constants::terminal::{BACKSPACE, SEPARATOR};
use std::fmt;
use std::io::{self, Write};

/// One frame of the spinner: glyph, separator and label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    text: String,
    width: usize,
}

impl StatusLine {
    pub fn new(glyph: char, label: &str) -> Self {
        let mut text = String::with_capacity(label.len() + 2);
        text.push(glyph);
        text.push(SEPARATOR);
        text.push_str(label);
        let width = text.chars().count();
        Self { text, width }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of characters the line occupies on screen
    pub fn width(&self) -> usize {
        self.width
    }

    /// Backspaces returning the cursor to the start of this line
    pub fn erase_sequence(&self) -> String {
        erase_sequence(self.width)
    }
}

impl fmt::Display for StatusLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

fn erase_sequence(width: usize) -> String {
    std::iter::repeat_n(BACKSPACE, width).collect()
}

/// Spaces over `width` columns, then backspaces back to the start
pub fn blank_sequence(width: usize) -> String {
    let mut blank = " ".repeat(width);
    blank.push_str(&erase_sequence(width));
    blank
}

/// Owns the output while the spinner draws and guarantees the line is blanked
///
/// The width of the most recently drawn line is remembered so [`LineEraser::clear`]
/// wipes exactly what is on screen. If the eraser is dropped without being cleared
/// (a failed draw, or the task being torn down) the line is blanked on drop.
pub struct LineEraser<W: Write> {
    out: W,
    width: usize,
    dirty: bool,
}

impl<W: Write> LineEraser<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            width: 0,
            dirty: false,
        }
    }

    /// Width of the line currently on screen, zero when nothing has been drawn
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn draw(&mut self, line: &StatusLine) -> io::Result<()> {
        self.width = line.width();
        self.dirty = true;
        self.out.write_all(line.text().as_bytes())?;
        self.out.flush()?;
        self.out.write_all(line.erase_sequence().as_bytes())
    }

    /// Overwrites the last drawn line with spaces; a clean line is left alone
    pub fn clear(&mut self) -> io::Result<()> {
        if !self.dirty {
            return Ok(());
        }
        self.dirty = false;
        self.out.write_all(blank_sequence(self.width).as_bytes())?;
        self.out.flush()
    }
}

impl<W: Write> Drop for LineEraser<W> {
    fn drop(&mut self) {
        if self.dirty {
            let _ = self.clear();
        }
    }
}
