//! The flip engine.
//!
//! [`Flipper`] ties a [`MirrorTable`], a [`Segmenter`] and a
//! [`WidthMeasure`] together. The crate-level [`flip_text`],
//! [`blockify_text`] and [`parse_text`] use the defaults: the built-in
//! table, Unicode grapheme clusters, and one unit per grapheme.
//!
//! # Example
//!
//! ```
//! use flip_text_art::{FlipOptions, flip_text};
//!
//! assert_eq!(flip_text("({[<", &FlipOptions::default()), ">]})");
//!
//! let options = FlipOptions::default().with_preserve_words(true);
//! assert_eq!(flip_text("<--this way---", &options), "---this way-->");
//! ```

mod compose;
mod options;
mod padding;

pub use compose::{block_width, compose_row, push_flipped_part};
pub use options::{FlipOptions, ParseOptions};
pub use padding::{IDEOGRAPHIC_SPACE, fit_spaces, fit_spaces_within};

use crate::mirror::MirrorTable;
use crate::text::{ParsedRow, parse_rows};
use crate::unicode::{GraphemeCount, Segmenter, UnicodeSegmenter, WidthMeasure};

/// Text flipping engine.
///
/// Every operation is a pure function of its input; rows are independent
/// and only the final join imposes their order.
#[derive(Clone, Debug)]
pub struct Flipper<'t, S = UnicodeSegmenter, M = GraphemeCount> {
    table: &'t MirrorTable,
    segmenter: S,
    measure: M,
}

impl Flipper<'static, UnicodeSegmenter, GraphemeCount> {
    /// Engine with the built-in table and default collaborators.
    #[must_use]
    pub fn new() -> Self {
        Self {
            table: MirrorTable::builtin(),
            segmenter: UnicodeSegmenter,
            measure: GraphemeCount,
        }
    }
}

impl Default for Flipper<'static, UnicodeSegmenter, GraphemeCount> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'t, S: Segmenter, M: WidthMeasure> Flipper<'t, S, M> {
    /// Engine with explicit collaborators.
    pub fn with_parts(table: &'t MirrorTable, segmenter: S, measure: M) -> Self {
        Self {
            table,
            segmenter,
            measure,
        }
    }

    /// Swap the mirror table.
    pub fn with_table<'u>(self, table: &'u MirrorTable) -> Flipper<'u, S, M> {
        Flipper {
            table,
            segmenter: self.segmenter,
            measure: self.measure,
        }
    }

    /// Swap the grapheme segmenter.
    pub fn with_segmenter<S2: Segmenter>(self, segmenter: S2) -> Flipper<'t, S2, M> {
        Flipper {
            table: self.table,
            segmenter,
            measure: self.measure,
        }
    }

    /// Swap the width measure.
    pub fn with_measure<M2: WidthMeasure>(self, measure: M2) -> Flipper<'t, S, M2> {
        Flipper {
            table: self.table,
            segmenter: self.segmenter,
            measure,
        }
    }

    #[must_use]
    pub fn table(&self) -> &'t MirrorTable {
        self.table
    }

    #[must_use]
    pub fn measure(&self) -> &M {
        &self.measure
    }

    /// Split text into rows of parts, measuring each row.
    pub fn parse<'a>(&self, text: &'a str, options: &ParseOptions) -> Vec<ParsedRow<'a>> {
        parse_rows(text, options.preserve_words, &self.segmenter, &self.measure)
    }

    /// Mirror `text` horizontally.
    ///
    /// Each line is reversed grapheme by grapheme (word runs stay intact
    /// when `preserve_words` is set), every grapheme is replaced by its
    /// mirror, and shorter lines are padded in front so the block keeps its
    /// right edge aligned. Lines are joined with `\n`.
    pub fn flip(&self, text: &str, options: &FlipOptions) -> String {
        let rows = self.parse(text, &options.parse_options());
        let target = block_width(&rows);
        rows.iter()
            .map(|row| compose_row(self.table, &self.measure, row, target, options))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Pad every line at its end to the width of the widest line.
    ///
    /// Nothing is mirrored or reversed. Applying it twice changes nothing.
    pub fn blockify(&self, text: &str) -> String {
        let rows = self.parse(text, &ParseOptions::default());
        let target = block_width(&rows);
        rows.iter()
            .map(|row| {
                let mut line = row.text();
                line.push_str(&fit_spaces_within(
                    target - row.display_width,
                    false,
                    &self.measure,
                ));
                line
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Mirror of a single grapheme.
    #[must_use]
    pub fn flip_grapheme<'a>(&'a self, grapheme: &'a str, ascii_only: bool) -> &'a str
    where
        't: 'a,
    {
        self.table.mirror(grapheme, ascii_only)
    }
}

/// Flip `text` with the default engine.
#[must_use]
pub fn flip_text(text: &str, options: &FlipOptions) -> String {
    Flipper::new().flip(text, options)
}

/// Pad every line of `text` to a common width with the default engine.
#[must_use]
pub fn blockify_text(text: &str) -> String {
    Flipper::new().blockify(text)
}

/// Parse `text` into rows with the default engine.
#[must_use]
pub fn parse_text<'a>(text: &'a str, options: &ParseOptions) -> Vec<ParsedRow<'a>> {
    Flipper::new().parse(text, options)
}
