//! Chord-over-lyrics text layout.
//!
//! Lays a parsed line out as two rows, chords above the lyric text they
//! start on. Widths are measured in terminal columns so wide and combining
//! characters line up.

use std::fmt;

use unicode_width::UnicodeWidthStr;

use crate::chordpro::Segment;
use crate::constants::render::CHORD_GAP;

/// A line laid out as a chord row above a lyric row.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RenderedLine {
    /// Chord labels positioned over their lyric columns.
    pub chords: String,
    /// Lyric text, padded where a chord is wider than its text.
    pub lyrics: String,
}

impl RenderedLine {
    /// Whether the chord row has anything on it.
    pub fn has_chords(&self) -> bool {
        !self.chords.is_empty()
    }
}

impl fmt::Display for RenderedLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.has_chords() {
            writeln!(f, "{}", self.chords)?;
        }
        f.write_str(&self.lyrics)
    }
}

/// Lay out segments with each chord above the start of its text.
///
/// A chord wider than its text pushes the following lyrics right so the next
/// chord never collides with it. Trailing whitespace is trimmed from both rows.
pub fn render_line(segments: &[Segment]) -> RenderedLine {
    let mut chords = String::new();
    let mut lyrics = String::new();

    for (i, segment) in segments.iter().enumerate() {
        let is_last = i + 1 == segments.len();
        let text_width = segment.text().width();
        let chord_width = segment.chord().map_or(0, |chord| chord.width());
        let chord_span = if segment.has_chord() && !is_last {
            chord_width + CHORD_GAP
        } else {
            chord_width
        };
        let block = text_width.max(chord_span);

        if let Some(chord) = segment.chord() {
            chords.push_str(chord);
        }
        pad(&mut chords, block.saturating_sub(chord_width));

        lyrics.push_str(segment.text());
        pad(&mut lyrics, block.saturating_sub(text_width));
    }

    RenderedLine {
        chords: chords.trim_end().to_string(),
        lyrics: lyrics.trim_end().to_string(),
    }
}

fn pad(row: &mut String, columns: usize) {
    row.push_str(&" ".repeat(columns));
}
