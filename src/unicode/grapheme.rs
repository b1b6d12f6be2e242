//! Grapheme cluster segmentation.

use unicode_segmentation::UnicodeSegmentation;

/// Splits text into user-perceived characters.
///
/// Contract: the returned slices are non-empty, borrowed from `text`, in
/// order, and concatenate back to `text` exactly. Implementations are pure.
pub trait Segmenter {
    fn segment<'a>(&self, text: &'a str) -> Vec<&'a str>;
}

/// Unicode extended grapheme clusters (UAX #29).
///
/// Combining marks stay on their base, ZWJ emoji sequences and regional
/// indicator pairs stay joined. Unassigned code points come out as their
/// own cluster.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UnicodeSegmenter;

impl Segmenter for UnicodeSegmenter {
    fn segment<'a>(&self, text: &'a str) -> Vec<&'a str> {
        text.graphemes(true).collect()
    }
}

impl<S: Segmenter + ?Sized> Segmenter for &S {
    fn segment<'a>(&self, text: &'a str) -> Vec<&'a str> {
        (**self).segment(text)
    }
}

/// Iterate over extended grapheme clusters in a string.
pub fn graphemes(s: &str) -> impl Iterator<Item = &str> {
    s.graphemes(true)
}

/// Check whether `grapheme` survives as a standalone cluster when embedded
/// between ordinary letters.
///
/// A table key that fails this would never be looked up, because the
/// segmenter merges it with a neighbour or splits it apart.
#[must_use]
pub fn segments_standalone<S: Segmenter + ?Sized>(segmenter: &S, grapheme: &str) -> bool {
    let embedded = format!("Test{grapheme}Test");
    segmenter.segment(&embedded).contains(&grapheme)
}
