//! Text parsing: lines, graphemes, and word runs.

mod parser;
mod row;

pub use parser::{is_letter, is_word_run, parse_line, parse_rows, split_lines};
pub use row::{ParsedRow, Part};
