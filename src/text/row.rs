//! Parsed representation of input lines.

use serde::Serialize;

/// A run of graphemes within a line.
///
/// Word runs keep their reading order when the line is flipped; every
/// other part is mirrored grapheme by grapheme and reversed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Part<'a> {
    /// Source text of the run.
    pub text: &'a str,
    /// The run split into graphemes; concatenates to `text`.
    pub graphemes: Vec<&'a str>,
    pub is_word_run: bool,
}

impl<'a> Part<'a> {
    /// Create a part that will be mirrored.
    #[must_use]
    pub fn plain(text: &'a str, graphemes: Vec<&'a str>) -> Self {
        Self {
            text,
            graphemes,
            is_word_run: false,
        }
    }

    /// Create a part whose reading order is preserved.
    #[must_use]
    pub fn word(text: &'a str, graphemes: Vec<&'a str>) -> Self {
        Self {
            text,
            graphemes,
            is_word_run: true,
        }
    }

    /// Number of graphemes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.graphemes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.graphemes.is_empty()
    }
}

/// One input line after parsing.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ParsedRow<'a> {
    /// Rendered width of the whole line, in the units of the width measure.
    pub display_width: f64,
    /// Runs in source order; they concatenate to the line.
    pub parts: Vec<Part<'a>>,
}

impl ParsedRow<'_> {
    /// Reassemble the source line.
    #[must_use]
    pub fn text(&self) -> String {
        self.parts.iter().map(|part| part.text).collect()
    }

    /// Total number of graphemes across all parts.
    #[must_use]
    pub fn grapheme_count(&self) -> usize {
        self.parts.iter().map(Part::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}
