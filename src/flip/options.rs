//! Options for flipping and parsing.

use serde::{Deserialize, Serialize};

/// How [`flip_text`](crate::flip_text) treats its input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlipOptions {
    /// Use only the ASCII mirror table and plain spaces for padding.
    pub ascii_only: bool,
    /// Keep words in reading order instead of mirroring them.
    pub preserve_words: bool,
    /// Strip whitespace from the end of every output line.
    pub trim_trailing_space: bool,
}

impl Default for FlipOptions {
    fn default() -> Self {
        Self {
            ascii_only: false,
            preserve_words: false,
            trim_trailing_space: true,
        }
    }
}

impl FlipOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_ascii_only(mut self, ascii_only: bool) -> Self {
        self.ascii_only = ascii_only;
        self
    }

    #[must_use]
    pub fn with_preserve_words(mut self, preserve_words: bool) -> Self {
        self.preserve_words = preserve_words;
        self
    }

    #[must_use]
    pub fn with_trim_trailing_space(mut self, trim: bool) -> Self {
        self.trim_trailing_space = trim;
        self
    }

    /// The parse options these flip options imply.
    #[must_use]
    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions {
            preserve_words: self.preserve_words,
        }
    }
}

/// How [`parse_text`](crate::parse_text) splits lines into parts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    pub preserve_words: bool,
}

impl ParseOptions {
    #[must_use]
    pub fn with_preserve_words(mut self, preserve_words: bool) -> Self {
        self.preserve_words = preserve_words;
        self
    }
}
