//! Helpers for capturing and inspecting spinner output in tests

use crate::constants::terminal::BACKSPACE;
use std::io::{self, Write};
use std::sync::{Arc, Mutex, PoisonError};

/// In-memory writer whose clones all append to the same buffer
///
/// One clone can be moved into the spinner task while the test keeps another
/// to read what was written.
#[derive(Debug, Clone, Default)]
pub struct SharedBuffer {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl SharedBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, decoded as UTF-8
    pub fn contents(&self) -> String {
        let bytes = self.bytes.lock().unwrap_or_else(PoisonError::into_inner);
        String::from_utf8_lossy(&bytes).into_owned()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut bytes = self.bytes.lock().unwrap_or_else(PoisonError::into_inner);
        bytes.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Writer that rejects every write, for exercising error propagation
#[derive(Debug, Clone, Copy, Default)]
pub struct FailingWriter;

impl Write for FailingWriter {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "output closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// A run of visible text and the backspaces that immediately follow it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub backspaces: usize,
}

impl Segment {
    pub fn glyph(&self) -> char {
        self.text.chars().next().unwrap_or(' ')
    }

    pub fn width(&self) -> usize {
        self.text.chars().count()
    }

    /// The cursor ends where the text began
    pub fn is_balanced(&self) -> bool {
        self.width() == self.backspaces
    }

    /// Spaces only, i.e. the final wipe of the line
    pub fn is_blank(&self) -> bool {
        !self.text.is_empty() && self.text.chars().all(|c| c == ' ')
    }
}

/// Captured spinner output split into drawn frames and cleanups
#[derive(Debug, Clone, Default)]
pub struct OutputTrace {
    segments: Vec<Segment>,
}

impl OutputTrace {
    pub fn parse(output: &str) -> Self {
        let mut segments: Vec<Segment> = Vec::new();
        let mut text = String::new();
        let mut backspaces = 0;

        for c in output.chars() {
            if c == BACKSPACE {
                backspaces += 1;
                continue;
            }
            if backspaces > 0 {
                segments.push(Segment {
                    text: std::mem::take(&mut text),
                    backspaces,
                });
                backspaces = 0;
            }
            text.push(c);
        }
        if !text.is_empty() || backspaces > 0 {
            segments.push(Segment { text, backspaces });
        }

        Self { segments }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Animation frames, in the order they were drawn
    pub fn cycles(&self) -> Vec<&Segment> {
        self.segments.iter().filter(|s| !s.is_blank()).collect()
    }

    /// Number of times the line was wiped
    pub fn cleanups(&self) -> usize {
        self.segments.iter().filter(|s| s.is_blank()).count()
    }

    pub fn ends_with_cleanup(&self) -> bool {
        self.segments.last().is_some_and(Segment::is_blank)
    }
}
