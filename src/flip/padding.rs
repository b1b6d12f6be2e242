//! Whitespace padding that fills a width gap.

use crate::unicode::WidthMeasure;

/// U+3000 IDEOGRAPHIC SPACE, wider than a regular space in most fonts.
pub const IDEOGRAPHIC_SPACE: &str = "\u{3000}";

const EPSILON: f64 = 1e-9;

/// Upper bound on the ideographic-space counts tried for one gap.
const MAX_IDEOGRAPHIC: usize = 256;

/// How the regular spaces filling a remainder are counted.
#[derive(Clone, Copy)]
enum Fill {
    /// Nearest count, may overshoot by up to half a space.
    Nearest,
    /// Largest count that does not overshoot.
    Within,
}

impl Fill {
    fn spaces_for(self, width: f64, space: f64) -> usize {
        let count = width / space;
        let count = match self {
            Self::Nearest => count.round(),
            Self::Within => (count + EPSILON).floor(),
        };
        count.max(0.0) as usize
    }
}

/// Build a run of spaces whose measured width best matches `gap`.
///
/// ASCII-only mode uses regular spaces. Otherwise regular and ideographic
/// spaces are mixed: for every count of ideographic spaces that fits, the
/// rest is filled with the nearest number of regular spaces, and the
/// combination with the smallest error wins (fewest ideographic spaces on
/// ties). Ideographic spaces come first.
pub fn fit_spaces<M: WidthMeasure + ?Sized>(gap: f64, ascii_only: bool, measure: &M) -> String {
    mix_spaces(gap, ascii_only, measure, Fill::Nearest)
}

/// Like [`fit_spaces`], but the padding never measures wider than `gap`.
///
/// Filling the leftover of a previous call yields nothing, so padding a
/// line twice is the same as padding it once.
pub fn fit_spaces_within<M: WidthMeasure + ?Sized>(
    gap: f64,
    ascii_only: bool,
    measure: &M,
) -> String {
    mix_spaces(gap, ascii_only, measure, Fill::Within)
}

fn mix_spaces<M: WidthMeasure + ?Sized>(
    gap: f64,
    ascii_only: bool,
    measure: &M,
    fill: Fill,
) -> String {
    if gap.is_nan() || gap <= EPSILON {
        return String::new();
    }
    let space = measure.grapheme_width(" ");
    if space.is_nan() || space <= EPSILON {
        return String::new();
    }

    let narrow_only = fill.spaces_for(gap, space);
    if ascii_only {
        return " ".repeat(narrow_only);
    }

    let mut best_wide = 0;
    let mut best_narrow = narrow_only;
    let mut best_error = (gap - narrow_only as f64 * space).abs();

    let wide = measure.grapheme_width(IDEOGRAPHIC_SPACE);
    if wide > EPSILON {
        for wide_count in 1..=MAX_IDEOGRAPHIC {
            let rest = gap - wide_count as f64 * wide;
            if rest < -EPSILON {
                break;
            }
            let narrow = fill.spaces_for(rest, space);
            let error = (rest - narrow as f64 * space).abs();
            if error + EPSILON < best_error {
                best_wide = wide_count;
                best_narrow = narrow;
                best_error = error;
            }
        }
    }

    let mut padding = IDEOGRAPHIC_SPACE.repeat(best_wide);
    padding.push_str(&" ".repeat(best_narrow));
    padding
}
