//! Application-wide constants
//!
//! Fixed values for the spinner animation and the delayed computation live here
//! so the rest of the crate never hardcodes them.

/// Name used for the config directory, the log directory and the log file
pub const APP_NAME: &str = "spinwait";

/// Label shown next to the spinning glyph when nothing else is configured
pub const DEFAULT_LABEL: &str = "thinking!";

/// The value produced by the delayed computation
pub const ANSWER: i64 = 42;

/// Animation timing in milliseconds
pub mod timing {
    /// Pause between two animation frames
    pub const FRAME_INTERVAL_MS: u64 = 100;

    /// How long the delayed computation sleeps before answering
    pub const COMPUTATION_DELAY_MS: u64 = 3000;
}

/// Terminal output constants
pub mod terminal {
    /// Glyph rotation of the spinner, drawn in this order and wrapped forever
    pub const SPINNER_FRAMES: [char; 4] = ['|', '/', '-', '\\'];

    /// Moves the cursor one column back without erasing anything
    pub const BACKSPACE: char = '\x08';

    /// Separates the glyph from the label
    pub const SEPARATOR: char = ' ';
}

/// Environment variables that override config file values
pub mod env_vars {
    pub const LABEL: &str = "SPINWAIT_LABEL";
    pub const FRAME_INTERVAL_MS: &str = "SPINWAIT_FRAME_INTERVAL_MS";
    pub const DELAY_MS: &str = "SPINWAIT_DELAY_MS";
    pub const LOG_FILE: &str = "SPINWAIT_LOG_FILE";
}
