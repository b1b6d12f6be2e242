//! Line compositor: turns one parsed row into its mirrored line.

use super::options::FlipOptions;
use super::padding::fit_spaces;
use crate::mirror::MirrorTable;
use crate::text::{ParsedRow, Part};
use crate::unicode::WidthMeasure;

/// Append the flipped form of `part` to `out`.
///
/// Word runs are copied unchanged. Other parts are mirrored grapheme by
/// grapheme, last grapheme first.
pub fn push_flipped_part(out: &mut String, table: &MirrorTable, part: &Part<'_>, ascii_only: bool) {
    if part.is_word_run {
        out.push_str(part.text);
        return;
    }
    for grapheme in part.graphemes.iter().rev() {
        out.push_str(table.mirror(grapheme, ascii_only));
    }
}

/// Compose the flipped line for `row` inside a block `target_width` wide.
///
/// The line is reversed part by part, so the rightmost part of the source
/// comes first. Padding goes in front, where the short end of the line now
/// sits.
pub fn compose_row<M: WidthMeasure + ?Sized>(
    table: &MirrorTable,
    measure: &M,
    row: &ParsedRow<'_>,
    target_width: f64,
    options: &FlipOptions,
) -> String {
    let mut line = fit_spaces(
        target_width - row.display_width,
        options.ascii_only,
        measure,
    );
    for part in row.parts.iter().rev() {
        push_flipped_part(&mut line, table, part, options.ascii_only);
    }
    if options.trim_trailing_space {
        let trimmed = line.trim_end().len();
        line.truncate(trimmed);
    }
    line
}

/// Widest row of a block, or 0 for an empty block.
#[must_use]
pub fn block_width(rows: &[ParsedRow<'_>]) -> f64 {
    rows.iter().map(|row| row.display_width).fold(0.0, f64::max)
}
