//! Property-based tests for flipping, parsing and padding.
//!
//! Uses proptest to verify invariants that must hold across all valid inputs.

use flip_text_art::flip::{IDEOGRAPHIC_SPACE, fit_spaces, fit_spaces_within};
use flip_text_art::{
    FlipOptions, Flipper, GlyphMetrics, GraphemeCount, ParseOptions, WidthMeasure,
    blockify_text, flip_text, parse_text,
};
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

/// Arbitrary printable text, possibly spanning several lines.
fn multiline_text() -> impl Strategy<Value = String> {
    prop::collection::vec("\\PC{0,40}", 0..6).prop_map(|lines| lines.join("\n"))
}

/// Text from a fixed alphabet of ASCII, CJK, emoji and combining sequences.
fn mixed_text() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop::sample::select(vec![
            "a", "b", "o", "K", " ", "(", ">", "/", "-", "\n", "漢", "字", "👍", "👍🏽", "e\u{301}",
            "┌", "╗", "▒", "\u{3000}",
        ]),
        0..80,
    )
    .prop_map(|parts| parts.concat())
}

/// ASCII art drawn only from glyphs that mirror back to themselves.
fn reversible_art() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop::collection::vec(
            prop::sample::select(vec![
                ' ', '(', ')', '[', ']', '{', '}', '<', '>', '/', '\\', '|', '-', '_', '=', '+',
                '*', '#', '.', ':',
            ]),
            0..30,
        ),
        1..8,
    )
    .prop_map(|lines| {
        lines
            .into_iter()
            .map(|line| line.into_iter().collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    })
}

fn any_options() -> impl Strategy<Value = FlipOptions> {
    (any::<bool>(), any::<bool>(), any::<bool>()).prop_map(|(ascii_only, preserve_words, trim)| {
        FlipOptions::default()
            .with_ascii_only(ascii_only)
            .with_preserve_words(preserve_words)
            .with_trim_trailing_space(trim)
    })
}

// ============================================================================
// Flipping Properties
// ============================================================================

proptest! {
    /// Flipping never panics and keeps the number of lines.
    #[test]
    fn flip_keeps_line_count(text in multiline_text(), options in any_options()) {
        let flipped = flip_text(&text, &options);
        prop_assert_eq!(flipped.split('\n').count(), text.split('\n').count());
    }

    /// Same as above with wide glyphs, emoji and combining marks.
    #[test]
    fn flip_mixed_keeps_line_count(text in mixed_text(), options in any_options()) {
        let flipped = flip_text(&text, &options);
        prop_assert_eq!(flipped.split('\n').count(), text.split('\n').count());
    }

    /// Untrimmed flipped lines all share the block width.
    #[test]
    fn untrimmed_flip_is_rectangular(text in reversible_art()) {
        let options = FlipOptions::default().with_trim_trailing_space(false);
        let flipped = flip_text(&text, &options);
        let widest = text.split('\n').map(|line| line.chars().count()).max().unwrap_or(0);
        for line in flipped.split('\n') {
            prop_assert_eq!(line.chars().count(), widest);
        }
    }

    /// Flipping reversible art twice gives back the art padded into a block.
    #[test]
    fn double_flip_restores_block(text in reversible_art()) {
        let options = FlipOptions::default().with_trim_trailing_space(false);
        let twice = flip_text(&flip_text(&text, &options), &options);
        prop_assert_eq!(twice, blockify_text(&text));
    }

    /// Word preservation never changes the set of words in a plain sentence.
    #[test]
    fn preserved_sentence_is_unchanged(words in prop::collection::vec("[a-z]{2,8}", 1..6)) {
        let sentence = words.join(" ");
        let options = FlipOptions::default().with_preserve_words(true);
        prop_assert_eq!(flip_text(&sentence, &options), sentence);
    }
}

// ============================================================================
// Parsing Properties
// ============================================================================

proptest! {
    /// Parsing is lossless: the rows rebuild the input.
    #[test]
    fn parse_is_lossless(text in multiline_text(), preserve_words in any::<bool>()) {
        let options = ParseOptions::default().with_preserve_words(preserve_words);
        let rows = parse_text(&text, &options);
        let rebuilt = rows.iter().map(|row| row.text()).collect::<Vec<_>>().join("\n");
        prop_assert_eq!(rebuilt, text);
    }

    /// Part graphemes concatenate to the part text, and no part is empty.
    #[test]
    fn parts_are_consistent(text in mixed_text(), preserve_words in any::<bool>()) {
        let options = ParseOptions::default().with_preserve_words(preserve_words);
        for row in parse_text(&text, &options) {
            prop_assert_eq!(row.display_width, row.grapheme_count() as f64);
            for part in &row.parts {
                prop_assert!(!part.is_empty());
                prop_assert_eq!(part.graphemes.concat(), part.text);
            }
        }
    }

    /// Blockifying twice changes nothing.
    #[test]
    fn blockify_is_idempotent(text in mixed_text()) {
        let once = blockify_text(&text);
        prop_assert_eq!(blockify_text(&once), once);
    }

    /// Blockifying twice changes nothing, even with fractional glyph widths.
    #[test]
    fn blockify_with_metrics_is_idempotent(
        parts in prop::collection::vec(prop::sample::select(vec!["X", "(", "o", " ", "\n"]), 0..60),
        x_width in 0.5f64..3.0,
        wide in 0.5f64..3.0,
    ) {
        let metrics = GlyphMetrics::new(1.0)
            .with_width("X", x_width)
            .with_width(IDEOGRAPHIC_SPACE, wide);
        let flipper = Flipper::new().with_measure(metrics);
        let once = flipper.blockify(&parts.concat());
        prop_assert_eq!(flipper.blockify(&once), once);
    }
}

// ============================================================================
// Padding Properties
// ============================================================================

proptest! {
    /// Padding is never off by more than half a regular space.
    #[test]
    fn padding_error_is_bounded(gap in 0.0f64..60.0, wide in 0.5f64..3.0, ascii_only in any::<bool>()) {
        let metrics = GlyphMetrics::new(1.0).with_width(IDEOGRAPHIC_SPACE, wide);
        let padding = fit_spaces(gap, ascii_only, &metrics);
        let graphemes: Vec<&str> = flip_text_art::unicode::graphemes(&padding).collect();
        let width = metrics.graphemes_width(&graphemes);
        prop_assert!((width - gap).abs() <= 0.5 + 1e-9, "gap {gap}, got {width}");
        if ascii_only {
            prop_assert!(!padding.contains(IDEOGRAPHIC_SPACE));
        }
    }

    /// Bounded padding never overshoots, and its leftover takes no more spaces.
    #[test]
    fn padding_within_never_overshoots(gap in 0.0f64..60.0, wide in 0.5f64..3.0, ascii_only in any::<bool>()) {
        let metrics = GlyphMetrics::new(1.0).with_width(IDEOGRAPHIC_SPACE, wide);
        let padding = fit_spaces_within(gap, ascii_only, &metrics);
        let graphemes: Vec<&str> = flip_text_art::unicode::graphemes(&padding).collect();
        let width = metrics.graphemes_width(&graphemes);
        prop_assert!(width <= gap + 1e-9, "gap {gap}, got {width}");
        prop_assert_eq!(fit_spaces_within(gap - width, ascii_only, &metrics), "");
    }

    /// With grapheme counting the padding is exactly the rounded gap.
    #[test]
    fn count_padding_is_plain_spaces(gap in 0usize..200) {
        let padding = fit_spaces(gap as f64, false, &GraphemeCount);
        prop_assert_eq!(padding, " ".repeat(gap));
    }
}
