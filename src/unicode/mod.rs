//! Unicode utilities for grapheme handling and display width.

mod grapheme;
mod width;

pub use grapheme::{Segmenter, UnicodeSegmenter, graphemes, segments_standalone};
pub use width::{
    GlyphMetrics, GraphemeCount, MemoizedWidth, TerminalWidth, WidthMeasure, WidthMethod,
    display_width_with_method,
};
