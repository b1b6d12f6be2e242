//! The mirror table: which glyph each grapheme turns into when flipped.
//!
//! The table is static data (`data/mirror_table.json`), embedded at build
//! time and parsed once. It has four parts:
//!
//! - `ascii`: mirrors that stay inside printable ASCII (`(` -> `)`, `b` -> `d`).
//! - `unicode`: everything else, including Unicode look-alikes for ASCII
//!   letters (`e` -> `ɘ`). Consulted first unless ASCII-only output is wanted.
//! - `symmetrical`: graphemes known to mirror onto themselves. Lookup treats
//!   them like unmapped graphemes; the list records that they were reviewed.
//! - `accepted_one_way`: keys allowed to break the involution rule, such as
//!   `a` -> `ɒ` -> `ɑ`.
//!
//! # Invariants
//!
//! Checked on demand by [`MirrorTable::validate`], never at load time:
//!
//! - Every key outside `accepted_one_way` satisfies `flip(flip(g)) == g`.
//! - No key repeats within a table, and no key has the same value in both.
//! - Every key survives grapheme segmentation as a single unit.

mod validate;

pub use validate::{Rule, ValidationReport, Violation, code_points};

use crate::error::Result;
use crate::event::{LogLevel, emit_log};
use serde::de::{Deserializer, MapAccess, Visitor};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::path::Path;
use std::sync::OnceLock;

const BUILTIN_TABLE_JSON: &str = include_str!("../../data/mirror_table.json");

/// Which of the two mapping tables an entry lives in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TableKind {
    Ascii,
    Unicode,
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ascii => f.write_str("ascii"),
            Self::Unicode => f.write_str("unicode"),
        }
    }
}

/// How the table treats a grapheme.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mirroring<'a> {
    /// The grapheme has an explicit mirror.
    Mapped(&'a str),
    /// Listed as its own mirror.
    Symmetrical,
    /// Not in the table; flips to itself.
    Unmapped,
}

/// Object entries in file order, duplicates kept.
#[derive(Default)]
struct Entries(Vec<(String, String)>);

impl<'de> Deserialize<'de> for Entries {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct EntriesVisitor;

        impl<'de> Visitor<'de> for EntriesVisitor {
            type Value = Entries;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an object mapping graphemes to their mirrors")
            }

            fn visit_map<A>(self, mut map: A) -> std::result::Result<Entries, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some(entry) = map.next_entry::<String, String>()? {
                    entries.push(entry);
                }
                Ok(Entries(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor)
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TableFile {
    #[serde(default)]
    ascii: Entries,
    #[serde(default)]
    unicode: Entries,
    #[serde(default)]
    symmetrical: Vec<String>,
    #[serde(default)]
    accepted_one_way: Vec<String>,
}

/// Immutable grapheme -> mirrored grapheme mapping.
#[derive(Clone, Debug, Default)]
pub struct MirrorTable {
    ascii: HashMap<String, String>,
    unicode: HashMap<String, String>,
    /// Distinct keys of both tables, in file order (ascii first).
    keys: Vec<String>,
    symmetrical: Vec<String>,
    symmetrical_set: HashSet<String>,
    accepted_one_way: Vec<String>,
    accepted_set: HashSet<String>,
    /// Keys that appeared more than once within one table.
    duplicate_keys: Vec<(TableKind, String)>,
}

impl MirrorTable {
    /// The table shipped with the crate, parsed on first use.
    ///
    /// Should the embedded data ever fail to parse, an error is logged and
    /// an empty table is used, so flipping degrades to plain reversal.
    pub fn builtin() -> &'static Self {
        static BUILTIN: OnceLock<MirrorTable> = OnceLock::new();
        BUILTIN.get_or_init(|| match Self::from_json(BUILTIN_TABLE_JSON) {
            Ok(table) => {
                emit_log(
                    LogLevel::Debug,
                    &format!(
                        "mirror table loaded: {} ascii, {} unicode, {} symmetrical",
                        table.ascii.len(),
                        table.unicode.len(),
                        table.symmetrical_set.len()
                    ),
                );
                table
            }
            Err(e) => {
                emit_log(
                    LogLevel::Error,
                    &format!("built-in mirror table failed to load: {e}"),
                );
                Self::default()
            }
        })
    }

    /// The JSON source of the built-in table.
    #[must_use]
    pub fn builtin_json() -> &'static str {
        BUILTIN_TABLE_JSON
    }

    /// Parse a table from JSON.
    ///
    /// Duplicate keys do not fail the parse: the last value wins, as it
    /// would for a JSON object, and the repeat shows up in [`validate`].
    ///
    /// [`validate`]: Self::validate
    pub fn from_json(json: &str) -> Result<Self> {
        let file: TableFile = serde_json::from_str(json)?;
        Ok(Self::from_file(file))
    }

    /// Read and parse a table file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    fn from_file(file: TableFile) -> Self {
        let mut table = Self::default();
        let mut seen_keys = HashSet::new();

        for (kind, entries) in [
            (TableKind::Ascii, file.ascii),
            (TableKind::Unicode, file.unicode),
        ] {
            for (key, value) in entries.0 {
                if !seen_keys.contains(&key) {
                    seen_keys.insert(key.clone());
                    table.keys.push(key.clone());
                }
                let map = match kind {
                    TableKind::Ascii => &mut table.ascii,
                    TableKind::Unicode => &mut table.unicode,
                };
                if map.insert(key.clone(), value).is_some() {
                    table.duplicate_keys.push((kind, key));
                }
            }
        }

        table.symmetrical_set = file.symmetrical.iter().cloned().collect();
        table.symmetrical = file.symmetrical;
        table.accepted_set = file.accepted_one_way.iter().cloned().collect();
        table.accepted_one_way = file.accepted_one_way;
        table
    }

    /// Explicit mirror of `grapheme`, if any.
    ///
    /// The Unicode table is consulted first unless `ascii_only`, then the
    /// ASCII table.
    #[must_use]
    pub fn lookup(&self, grapheme: &str, ascii_only: bool) -> Option<&str> {
        if !ascii_only {
            if let Some(mirrored) = self.unicode.get(grapheme) {
                return Some(mirrored.as_str());
            }
        }
        self.ascii.get(grapheme).map(String::as_str)
    }

    /// Mirror of `grapheme`, or `grapheme` itself when unmapped.
    #[must_use]
    pub fn mirror<'a>(&'a self, grapheme: &'a str, ascii_only: bool) -> &'a str {
        self.lookup(grapheme, ascii_only).unwrap_or(grapheme)
    }

    /// Classify `grapheme` as mapped, known symmetrical, or unknown.
    #[must_use]
    pub fn classify(&self, grapheme: &str, ascii_only: bool) -> Mirroring<'_> {
        match self.lookup(grapheme, ascii_only) {
            Some(mirrored) => Mirroring::Mapped(mirrored),
            None if self.symmetrical_set.contains(grapheme) => Mirroring::Symmetrical,
            None => Mirroring::Unmapped,
        }
    }

    /// Follow the mirror function `hops` times from `grapheme`.
    ///
    /// The result always has `hops + 1` elements and starts with `grapheme`.
    #[must_use]
    pub fn orbit<'a>(&'a self, grapheme: &'a str, hops: usize, ascii_only: bool) -> Vec<&'a str> {
        let mut chain = Vec::with_capacity(hops + 1);
        let mut current = grapheme;
        chain.push(current);
        for _ in 0..hops {
            current = self.mirror(current, ascii_only);
            chain.push(current);
        }
        chain
    }

    /// Whether flipping `grapheme` twice gives it back.
    #[must_use]
    pub fn is_involution(&self, grapheme: &str, ascii_only: bool) -> bool {
        self.orbit(grapheme, 2, ascii_only)[2] == grapheme
    }

    /// Distinct keys across both tables, ASCII table first, in file order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(String::as_str)
    }

    /// Entry of the ASCII table.
    #[must_use]
    pub fn ascii_entry(&self, grapheme: &str) -> Option<&str> {
        self.ascii.get(grapheme).map(String::as_str)
    }

    /// Entry of the Unicode table.
    #[must_use]
    pub fn unicode_entry(&self, grapheme: &str) -> Option<&str> {
        self.unicode.get(grapheme).map(String::as_str)
    }

    #[must_use]
    pub fn ascii_len(&self) -> usize {
        self.ascii.len()
    }

    #[must_use]
    pub fn unicode_len(&self) -> usize {
        self.unicode.len()
    }

    /// Symmetrical glyphs as listed, duplicates included.
    #[must_use]
    pub fn symmetrical(&self) -> &[String] {
        &self.symmetrical
    }

    /// Accepted one-way flips as listed, duplicates included.
    #[must_use]
    pub fn accepted_one_way(&self) -> &[String] {
        &self.accepted_one_way
    }

    #[must_use]
    pub fn is_symmetrical(&self, grapheme: &str) -> bool {
        self.symmetrical_set.contains(grapheme)
    }

    #[must_use]
    pub fn is_accepted_one_way(&self, grapheme: &str) -> bool {
        self.accepted_set.contains(grapheme)
    }

    /// Keys repeated within a single table, in the order the repeats appeared.
    #[must_use]
    pub fn duplicate_keys(&self) -> &[(TableKind, String)] {
        &self.duplicate_keys
    }
}
