//! ChordPro-style lyric line segmentation.
//!
//! A line such as `[Am]Hello [G]world` carries inline chord annotations in
//! square brackets. [`parse_line`] splits it into [`Segment`]s, each pairing
//! an optional chord label with the lyric text that follows it.
//!
//! An annotation is a `[`, one or more characters other than `]`, then `]`.
//! Annotations never nest; a lone `[` or an empty `[]` stays in the lyric text.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Regex matching a bracketed chord annotation like `[F#m7]`.
#[allow(clippy::expect_used)]
static RE_CHORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[([^\]]+)\]").expect("valid regex: RE_CHORD")
});

/// One unit of a parsed line: an optional chord and the lyric text it precedes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Segment {
    chord: Option<String>,
    text: String,
}

impl Segment {
    /// Create a segment with a chord attached.
    pub fn chorded(chord: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            chord: Some(chord.into()),
            text: text.into(),
        }
    }

    /// Create a segment of lyric text with no chord.
    pub fn lyric(text: impl Into<String>) -> Self {
        Self {
            chord: None,
            text: text.into(),
        }
    }

    /// The chord label, if this segment starts at an annotation.
    pub fn chord(&self) -> Option<&str> {
        self.chord.as_deref()
    }

    /// The lyric text of this segment. May be empty.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether a chord is attached.
    pub const fn has_chord(&self) -> bool {
        self.chord.is_some()
    }
}

/// Writes the segment back in inline form, e.g. `[Am]Hello `.
impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(chord) = &self.chord {
            write!(f, "[{chord}]")?;
        }
        f.write_str(&self.text)
    }
}

/// Split a ChordPro-formatted line into chord/text segments.
///
/// Text before the first annotation becomes a chordless segment. Each
/// annotation owns the text up to the next annotation or the end of the line.
/// An empty line yields no segments; a line without annotations yields one
/// chordless segment holding the whole line.
pub fn parse_line(line: &str) -> Vec<Segment> {
    if line.is_empty() {
        return Vec::new();
    }

    let mut annotations = RE_CHORD
        .captures_iter(line)
        .filter_map(|caps| Some((caps.get(0)?, caps.get(1)?)))
        .peekable();

    if annotations.peek().is_none() {
        return vec![Segment::lyric(line)];
    }

    let mut segments = Vec::new();
    let mut cursor = 0;

    while let Some((whole, label)) = annotations.next() {
        if whole.start() > cursor {
            segments.push(Segment::lyric(&line[cursor..whole.start()]));
        }

        let text_end = annotations
            .peek()
            .map_or(line.len(), |(next, _)| next.start());

        segments.push(Segment::chorded(label.as_str(), &line[whole.end()..text_end]));
        cursor = text_end;
    }

    segments
}

/// Remove every chord annotation, leaving only the lyric text.
pub fn strip_chords(line: &str) -> String {
    RE_CHORD.replace_all(line, "").into_owned()
}

/// Chord labels in the order they appear, borrowed from the line.
pub fn chord_labels(line: &str) -> Vec<&str> {
    RE_CHORD
        .captures_iter(line)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .collect()
}

/// Join segments back into a single inline-annotated line.
pub fn to_chordpro(segments: &[Segment]) -> String {
    segments.iter().map(ToString::to_string).collect()
}
