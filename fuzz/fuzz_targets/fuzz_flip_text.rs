//! Fuzz target for flipping.
//!
//! Tests that flipping, parsing and blockifying handle arbitrary text without
//! panicking, and that the line count and parse coverage hold for any input.

#![no_main]

use arbitrary::Arbitrary;
use flip_text_art::{FlipOptions, ParseOptions, blockify_text, flip_text, parse_text};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input<'a> {
    text: &'a str,
    ascii_only: bool,
    preserve_words: bool,
    trim_trailing_space: bool,
}

fuzz_target!(|input: Input<'_>| {
    let options = FlipOptions::default()
        .with_ascii_only(input.ascii_only)
        .with_preserve_words(input.preserve_words)
        .with_trim_trailing_space(input.trim_trailing_space);

    let flipped = flip_text(input.text, &options);
    assert_eq!(
        flipped.split('\n').count(),
        input.text.split('\n').count(),
        "line count changed"
    );

    let rows = parse_text(
        input.text,
        &ParseOptions::default().with_preserve_words(input.preserve_words),
    );
    for row in &rows {
        for part in &row.parts {
            assert_eq!(part.graphemes.concat(), part.text);
        }
    }

    let _ = blockify_text(input.text);
});
