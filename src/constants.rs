//! Application constants.
//!
//! Centralizes layout values and environment keys.

/// Chord-over-lyrics layout constants.
pub mod render {
    /// Minimum spaces between a chord and the next chord on the chord row.
    pub const CHORD_GAP: usize = 1;
}

/// Environment variable names.
pub mod env {
    /// Default output format (`json` or `text`).
    pub const FORMAT: &str = "CHORDLINE_FORMAT";
}

/// Logging defaults.
pub mod logging {
    /// Filter used when `RUST_LOG` is unset or invalid.
    pub const DEFAULT_FILTER: &str = "chordline=warn";
}
