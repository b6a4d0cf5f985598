//! `chordline` - ChordPro-style lyric line segmentation.
//!
//! Splits lines like `[Am]Hello [G]world` into chord/text segments and lays
//! them out for display, either as JSON records or chords above lyrics.

pub mod chordpro;
pub mod config;
pub mod constants;
pub mod convert;
pub mod error;
pub mod render;

pub use chordpro::{parse_line, Segment};
