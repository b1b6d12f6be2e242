//! `flip_text_art` - mirror text and ASCII art horizontally
//!
//! Lines are split into grapheme clusters, reversed, and every grapheme is
//! replaced by its mirror image (`(` becomes `)`, `┌` becomes `┐`, `e`
//! becomes `ɘ`). Shorter lines are padded so a block of ASCII art keeps its
//! shape. Words embedded in art can optionally keep their reading order.
//!
//! ```
//! use flip_text_art::{FlipOptions, flip_text};
//!
//! let art = "┌─┐\n│ └──>\n└─┘";
//! assert_eq!(flip_text(art, &FlipOptions::default()), "   ┌─┐\n<──┘ │\n   └─┘");
//! ```

// Crate-level lint configuration
#![allow(clippy::cast_possible_truncation)] // Width rounding to space counts
#![allow(clippy::cast_sign_loss)] // Rounded widths are clamped to >= 0
#![allow(clippy::cast_precision_loss)] // Column counts are far below 2^52
#![allow(clippy::module_name_repetitions)] // Allow mirror::MirrorTable etc
#![allow(clippy::struct_excessive_bools)] // Options naturally have several flags
#![allow(clippy::missing_errors_doc)] // Docs WIP
#![allow(clippy::missing_panics_doc)] // Docs WIP
#![allow(clippy::missing_const_for_fn)] // Many functions could be const, not critical
#![allow(clippy::doc_markdown)] // Allow technical names without backticks
#![allow(clippy::float_cmp)] // Widths in tests are exact small values
#![allow(clippy::items_after_statements)] // Common pattern in tests

pub mod error;
pub mod event;
pub mod flip;
pub mod mirror;
pub mod text;
pub mod unicode;

// Re-export core types at crate root
pub use error::{Error, Result};
pub use event::{LogLevel, emit_log, set_log_callback};
pub use flip::{FlipOptions, Flipper, ParseOptions, blockify_text, flip_text, parse_text};
pub use mirror::{MirrorTable, Mirroring, Rule, TableKind, ValidationReport, Violation};
pub use text::{ParsedRow, Part};
pub use unicode::{
    GlyphMetrics, GraphemeCount, MemoizedWidth, Segmenter, TerminalWidth, UnicodeSegmenter,
    WidthMeasure, WidthMethod,
};
