//! Line splitting, grapheme segmentation and word-run detection.
//!
//! # Word runs
//!
//! With word preservation on, text embedded in ASCII art should stay
//! readable after flipping while lone letters used as drawing strokes
//! (`o`, `b`, `J`) still get mirrored. The rules are a heuristic:
//!
//! 1. A *letter* is a grapheme whose first code point is in the Unicode
//!    general category Letter (`\p{L}`). Symbols such as `Ⓐ` or the
//!    Roman numeral `Ⅻ` are not letters, even though they are alphabetic.
//! 2. A maximal run of letters is a word run when it has two or more
//!    graphemes, or when its single grapheme is `I`, `A`, `a`, or contains
//!    a non-ASCII letter. Other letter runs join the surrounding plain part.
//! 3. Two word runs separated by exactly one whitespace grapheme merge into
//!    one, repeatedly, so `"this way here"` is a single run. Wider gaps keep
//!    runs apart: they tend to separate labels in a drawing.

use super::row::{ParsedRow, Part};
use crate::unicode::{Segmenter, WidthMeasure};
use regex::Regex;
use std::ops::Range;
use std::sync::OnceLock;

/// Split text into lines on `\n`, dropping a `\r` before each break.
///
/// Always yields at least one line; leading and trailing empty lines are kept.
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
}

/// Parse every line of `text`.
pub fn parse_rows<'a, S, M>(
    text: &'a str,
    preserve_words: bool,
    segmenter: &S,
    measure: &M,
) -> Vec<ParsedRow<'a>>
where
    S: Segmenter + ?Sized,
    M: WidthMeasure + ?Sized,
{
    split_lines(text)
        .map(|line| parse_line(line, preserve_words, segmenter, measure))
        .collect()
}

/// Parse a single line (without its line break).
pub fn parse_line<'a, S, M>(
    line: &'a str,
    preserve_words: bool,
    segmenter: &S,
    measure: &M,
) -> ParsedRow<'a>
where
    S: Segmenter + ?Sized,
    M: WidthMeasure + ?Sized,
{
    let graphemes = segmenter.segment(line);
    let display_width = measure.graphemes_width(&graphemes);

    let parts = if graphemes.is_empty() {
        Vec::new()
    } else if preserve_words {
        word_parts(line, &graphemes)
    } else {
        vec![Part::plain(line, graphemes)]
    };

    ParsedRow {
        display_width,
        parts,
    }
}

/// Whether a grapheme counts as a letter for word detection.
#[must_use]
pub fn is_letter(grapheme: &str) -> bool {
    static LEADING_LETTER: OnceLock<Option<Regex>> = OnceLock::new();
    LEADING_LETTER
        .get_or_init(|| Regex::new(r"^\p{L}").ok())
        .as_ref()
        .is_some_and(|re| re.is_match(grapheme))
}

fn has_non_ascii_letter(grapheme: &str) -> bool {
    static NON_ASCII_LETTER: OnceLock<Option<Regex>> = OnceLock::new();
    NON_ASCII_LETTER
        .get_or_init(|| Regex::new(r"[\p{L}&&[^\x00-\x7F]]").ok())
        .as_ref()
        .is_some_and(|re| re.is_match(grapheme))
}

/// Whether a maximal run of letters is kept in reading order.
#[must_use]
pub fn is_word_run(run: &[&str]) -> bool {
    match run {
        [] => false,
        [single] => matches!(*single, "I" | "A" | "a") || has_non_ascii_letter(single),
        _ => true,
    }
}

fn is_single_space(graphemes: &[&str]) -> bool {
    matches!(graphemes, [g] if g.chars().all(char::is_whitespace))
}

/// Grapheme-index span of a part.
struct Span {
    range: Range<usize>,
    is_word_run: bool,
}

fn word_parts<'a>(line: &'a str, graphemes: &[&'a str]) -> Vec<Part<'a>> {
    let mut spans: Vec<Span> = Vec::new();
    let mut i = 0;
    while i < graphemes.len() {
        let start = i;
        if is_letter(graphemes[i]) {
            while i < graphemes.len() && is_letter(graphemes[i]) {
                i += 1;
            }
            if is_word_run(&graphemes[start..i]) {
                push_word(&mut spans, graphemes, start..i);
                continue;
            }
        } else {
            i += 1;
        }
        push_plain(&mut spans, start..i);
    }

    // Byte offset of each grapheme start, plus the end of the line.
    let mut offsets = Vec::with_capacity(graphemes.len() + 1);
    let mut offset = 0;
    offsets.push(0);
    for grapheme in graphemes {
        offset += grapheme.len();
        offsets.push(offset);
    }
    debug_assert_eq!(offset, line.len(), "segmenter must cover the whole line");

    spans
        .into_iter()
        .map(|span| {
            let text = line
                .get(offsets[span.range.start]..offsets[span.range.end])
                .unwrap_or_default();
            Part {
                text,
                graphemes: graphemes[span.range].to_vec(),
                is_word_run: span.is_word_run,
            }
        })
        .collect()
}

fn push_plain(spans: &mut Vec<Span>, range: Range<usize>) {
    match spans.last_mut() {
        Some(last) if !last.is_word_run => last.range.end = range.end,
        _ => spans.push(Span {
            range,
            is_word_run: false,
        }),
    }
}

/// Push a word run, folding `word, single space, word` into one run.
///
/// Because the fold happens on every push, a chain of words separated by
/// single spaces collapses completely.
fn push_word(spans: &mut Vec<Span>, graphemes: &[&str], range: Range<usize>) {
    let merge = matches!(
        spans.as_slice(),
        [.., before, gap] if before.is_word_run
            && !gap.is_word_run
            && is_single_space(&graphemes[gap.range.clone()])
    );
    if merge {
        spans.pop();
        if let Some(before) = spans.last_mut() {
            before.range.end = range.end;
        }
        return;
    }
    spans.push(Span {
        range,
        is_word_run: true,
    });
}
