//! Terminal busy indicator
//!
//! The spinner draws `<glyph> <label>` in place on the current line, cycling
//! through `| / - \`, and never writes a line terminator. Stopping it blanks the
//! line so nothing is left behind for the next output.

pub mod frames;
pub mod indicator;
pub mod status_line;

pub use frames::Frames;
pub use indicator::{SpinnerHandle, SpinnerState, spawn};
pub use status_line::{LineEraser, StatusLine};
