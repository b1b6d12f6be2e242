//! Display width measurement.
//!
//! Padding has to line up visually, so the engine asks a [`WidthMeasure`]
//! how wide each grapheme renders. Widths are `f64` "units" so that real
//! font advances (which are rarely whole cells) can be plugged in.

use crate::error::{Error, Result};
use serde::Deserialize;
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::Path;
use unicode_width::UnicodeWidthStr;

/// Width calculation method for ambiguous-width characters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WidthMethod {
    /// POSIX-like wcwidth: ambiguous width = 1.
    #[default]
    WcWidth,
    /// Unicode East Asian Width: ambiguous width = 2.
    Unicode,
}

impl WidthMethod {
    /// Parse a method name as accepted on the command line.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "wcwidth" => Some(Self::WcWidth),
            "unicode" | "cjk" => Some(Self::Unicode),
            _ => None,
        }
    }
}

/// Get the display width of a string in terminal columns using a specific method.
#[must_use]
pub fn display_width_with_method(s: &str, method: WidthMethod) -> usize {
    match method {
        WidthMethod::WcWidth => UnicodeWidthStr::width(s),
        WidthMethod::Unicode => UnicodeWidthStr::width_cjk(s),
    }
}

/// Measures how wide a grapheme renders.
///
/// Implementations must be deterministic: the same grapheme always yields
/// the same width, which is what makes [`MemoizedWidth`] sound.
pub trait WidthMeasure {
    fn grapheme_width(&self, grapheme: &str) -> f64;

    /// Sum of the widths of a sequence of graphemes.
    fn graphemes_width(&self, graphemes: &[&str]) -> f64 {
        graphemes.iter().map(|g| self.grapheme_width(g)).sum()
    }
}

impl<M: WidthMeasure + ?Sized> WidthMeasure for &M {
    fn grapheme_width(&self, grapheme: &str) -> f64 {
        (**self).grapheme_width(grapheme)
    }
}

/// Every grapheme is one unit wide.
///
/// The headless default: without a text-measuring backend, width degrades
/// to grapheme count.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GraphemeCount;

impl WidthMeasure for GraphemeCount {
    fn grapheme_width(&self, _grapheme: &str) -> f64 {
        1.0
    }
}

/// Terminal cell width from the Unicode East Asian Width tables.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TerminalWidth {
    pub method: WidthMethod,
}

impl TerminalWidth {
    #[must_use]
    pub const fn new(method: WidthMethod) -> Self {
        Self { method }
    }
}

impl WidthMeasure for TerminalWidth {
    fn grapheme_width(&self, grapheme: &str) -> f64 {
        display_width_with_method(grapheme, self.method) as f64
    }
}

#[derive(Deserialize)]
struct MetricsFile {
    #[serde(default = "default_advance")]
    default: f64,
    #[serde(default)]
    widths: HashMap<String, f64>,
}

const fn default_advance() -> f64 {
    1.0
}

/// Explicit per-grapheme advance widths, e.g. exported from a font.
///
/// JSON form: `{ "default": 1.0, "widths": { "　": 1.6, "👍": 1.9 } }`.
#[derive(Clone, Debug, PartialEq)]
pub struct GlyphMetrics {
    default: f64,
    widths: HashMap<String, f64>,
}

impl GlyphMetrics {
    /// Create metrics where every grapheme has `default` width.
    #[must_use]
    pub fn new(default: f64) -> Self {
        Self {
            default,
            widths: HashMap::new(),
        }
    }

    /// Set the advance of a single grapheme.
    #[must_use]
    pub fn with_width(mut self, grapheme: impl Into<String>, width: f64) -> Self {
        self.widths.insert(grapheme.into(), width);
        self
    }

    /// Parse metrics from JSON, rejecting negative or non-finite widths.
    pub fn from_json(json: &str) -> Result<Self> {
        let file: MetricsFile = serde_json::from_str(json)?;
        check_width("<default>", file.default)?;
        for (grapheme, width) in &file.widths {
            check_width(grapheme, *width)?;
        }
        Ok(Self {
            default: file.default,
            widths: file.widths,
        })
    }

    /// Read and parse a metrics file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}

fn check_width(grapheme: &str, width: f64) -> Result<()> {
    if width.is_finite() && width >= 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidWidth {
            grapheme: grapheme.to_string(),
            width,
        })
    }
}

impl WidthMeasure for GlyphMetrics {
    fn grapheme_width(&self, grapheme: &str) -> f64 {
        self.widths.get(grapheme).copied().unwrap_or(self.default)
    }
}

/// Caches the widths reported by another measure.
///
/// Keyed purely by grapheme text. Not `Sync`; one engine per thread.
#[derive(Debug, Default)]
pub struct MemoizedWidth<M> {
    inner: M,
    cache: RefCell<HashMap<String, f64>>,
}

impl<M: WidthMeasure> MemoizedWidth<M> {
    #[must_use]
    pub fn new(inner: M) -> Self {
        Self {
            inner,
            cache: RefCell::new(HashMap::new()),
        }
    }

    /// Number of distinct graphemes measured so far.
    #[must_use]
    pub fn cached_len(&self) -> usize {
        self.cache.borrow().len()
    }
}

impl<M: WidthMeasure> WidthMeasure for MemoizedWidth<M> {
    fn grapheme_width(&self, grapheme: &str) -> f64 {
        if let Some(width) = self.cache.borrow().get(grapheme) {
            return *width;
        }
        let width = self.inner.grapheme_width(grapheme);
        self.cache.borrow_mut().insert(grapheme.to_string(), width);
        width
    }
}
