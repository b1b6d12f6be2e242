//! On-demand consistency checks for a [`MirrorTable`].
//!
//! Table defects (broken involutions, keys the segmenter would never
//! produce, duplicates) are data-quality problems. They are reported here as
//! a structured list for tests and tooling to act on; loading a table never
//! checks anything.

use super::{MirrorTable, TableKind};
use crate::event::{LogLevel, emit_log};
use crate::flip::{FlipOptions, Flipper};
use crate::unicode::{GraphemeCount, Segmenter, UnicodeSegmenter, segments_standalone};
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;

/// A consistency rule a mirror table must satisfy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    /// A key appears twice within the same table.
    DuplicateKey,
    /// `flip(flip(g)) != g` for a key that is not an accepted one-way flip.
    OneWayFlip,
    /// An accepted one-way flip is actually an involution.
    AcceptedInvolution,
    /// A key maps to the same value in both tables.
    RedundantMapping,
    /// The segmenter does not yield the key as a single grapheme.
    SplitGrapheme,
    /// Flipping the key in context disagrees with the table.
    FlipMismatch,
    /// A symmetrical glyph is listed more than once.
    DuplicateSymmetrical,
    /// An accepted one-way flip is listed more than once.
    DuplicateAcceptedOneWay,
    /// A glyph listed as symmetrical mirrors to something else.
    SymmetricalMapped,
}

impl Rule {
    pub const ALL: [Self; 9] = [
        Self::DuplicateKey,
        Self::OneWayFlip,
        Self::AcceptedInvolution,
        Self::RedundantMapping,
        Self::SplitGrapheme,
        Self::FlipMismatch,
        Self::DuplicateSymmetrical,
        Self::DuplicateAcceptedOneWay,
        Self::SymmetricalMapped,
    ];

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::DuplicateKey => "duplicate keys within a table",
            Self::OneWayFlip => "one-way flips that have not been accepted",
            Self::AcceptedInvolution => "accepted one-way flips that are not one-way",
            Self::RedundantMapping => "mappings identical in the ascii and unicode tables",
            Self::SplitGrapheme => "keys the segmenter does not keep as one grapheme",
            Self::FlipMismatch => "keys whose flip in context disagrees with the table",
            Self::DuplicateSymmetrical => "duplicate symmetrical glyphs",
            Self::DuplicateAcceptedOneWay => "duplicate accepted one-way flips",
            Self::SymmetricalMapped => "symmetrical glyphs that mirror to something else",
        }
    }
}

/// One rule broken by one grapheme.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub rule: Rule,
    pub grapheme: String,
    /// Graphemes that show the problem: the orbit `g, f(g), f(f(g))` for
    /// involution rules, `[expected, actual]` for flip mismatches, the
    /// conflicting value otherwise. May be empty.
    pub chain: Vec<String>,
    /// Table the offending entry lives in, where that matters.
    pub table: Option<TableKind>,
}

impl Violation {
    fn new(rule: Rule, grapheme: &str) -> Self {
        Self {
            rule,
            grapheme: grapheme.to_string(),
            chain: Vec::new(),
            table: None,
        }
    }

    fn with_chain<'a>(mut self, chain: impl IntoIterator<Item = &'a str>) -> Self {
        self.chain = chain.into_iter().map(str::to_string).collect();
        self
    }

    fn in_table(mut self, table: TableKind) -> Self {
        self.table = Some(table);
        self
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.grapheme, code_points(&self.grapheme))?;
        if let Some(table) = self.table {
            write!(f, " in {table}")?;
        }
        if !self.chain.is_empty() {
            let arrows: Vec<String> = self
                .chain
                .iter()
                .map(|g| format!("{g} ({})", code_points(g)))
                .collect();
            write!(f, ": {}", arrows.join(" ⟶ "))?;
        }
        Ok(())
    }
}

/// Format the code points of `s` as `U+0061 U+0301`.
#[must_use]
pub fn code_points(s: &str) -> String {
    s.chars()
        .map(|c| format!("U+{:04X}", u32::from(c)))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Result of [`MirrorTable::validate`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub violations: Vec<Violation>,
    pub keys_checked: usize,
}

impl ValidationReport {
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }

    /// Violations of a single rule.
    pub fn by_rule(&self, rule: Rule) -> impl Iterator<Item = &Violation> {
        self.violations.iter().filter(move |v| v.rule == rule)
    }

    #[must_use]
    pub fn count(&self, rule: Rule) -> usize {
        self.by_rule(rule).count()
    }

    /// Offending graphemes for a rule.
    #[must_use]
    pub fn graphemes(&self, rule: Rule) -> Vec<&str> {
        self.by_rule(rule).map(|v| v.grapheme.as_str()).collect()
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_clean() {
            return write!(
                f,
                "mirror table consistent ({} keys checked)",
                self.keys_checked
            );
        }
        write!(
            f,
            "{} problem(s) in mirror table ({} keys checked)",
            self.violations.len(),
            self.keys_checked
        )?;
        for rule in Rule::ALL {
            let count = self.count(rule);
            if count == 0 {
                continue;
            }
            write!(f, "\n\n{} ({count}):", rule.description())?;
            for violation in self.by_rule(rule) {
                write!(f, "\n  {violation}")?;
            }
        }
        Ok(())
    }
}

/// Values that occur more than once, each reported once, in first-repeat order.
fn find_duplicates(values: &[String]) -> Vec<&str> {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    let mut duplicates = Vec::new();
    for value in values {
        if !seen.insert(value.as_str()) && reported.insert(value.as_str()) {
            duplicates.push(value.as_str());
        }
    }
    duplicates
}

impl MirrorTable {
    /// Check every consistency rule using Unicode grapheme segmentation.
    #[must_use]
    pub fn validate(&self) -> ValidationReport {
        self.validate_with(&UnicodeSegmenter)
    }

    /// Check every consistency rule against a specific segmenter.
    ///
    /// Involutions are checked in full (non ASCII-only) mode, which is the
    /// lookup order every key participates in.
    pub fn validate_with<S: Segmenter + ?Sized>(&self, segmenter: &S) -> ValidationReport {
        let mut violations = Vec::new();
        let flipper = Flipper::with_parts(self, segmenter, GraphemeCount);
        let options = FlipOptions::default();

        for (kind, key) in &self.duplicate_keys {
            violations.push(Violation::new(Rule::DuplicateKey, key).in_table(*kind));
        }

        let mut keys_checked = 0;
        for key in self.keys() {
            keys_checked += 1;

            let orbit = self.orbit(key, 2, false);
            if orbit[2] != key && !self.is_accepted_one_way(key) {
                // A fixed point after one hop adds nothing to the chain.
                let shown = if orbit[2] == orbit[1] { 2 } else { 3 };
                violations.push(
                    Violation::new(Rule::OneWayFlip, key).with_chain(orbit[..shown].iter().copied()),
                );
            }

            if let (Some(ascii), Some(unicode)) = (self.ascii_entry(key), self.unicode_entry(key)) {
                if ascii == unicode {
                    violations.push(Violation::new(Rule::RedundantMapping, key).with_chain([ascii]));
                }
            }

            if !segments_standalone(segmenter, key) {
                violations.push(Violation::new(Rule::SplitGrapheme, key));
            } else {
                let bracketed = format!("<{key}>");
                let expected = format!(
                    "{}{}{}",
                    self.mirror(">", false),
                    self.mirror(key, false),
                    self.mirror("<", false)
                );
                let actual = flipper.flip(&bracketed, &options);
                if actual != expected {
                    violations.push(
                        Violation::new(Rule::FlipMismatch, key)
                            .with_chain([expected.as_str(), actual.as_str()]),
                    );
                }
            }
        }

        let mut checked_accepted = HashSet::new();
        for accepted in &self.accepted_one_way {
            if checked_accepted.insert(accepted.as_str()) && self.is_involution(accepted, false) {
                let orbit = self.orbit(accepted, 2, false);
                violations.push(Violation::new(Rule::AcceptedInvolution, accepted).with_chain(orbit));
            }
        }

        for duplicate in find_duplicates(&self.symmetrical) {
            violations.push(Violation::new(Rule::DuplicateSymmetrical, duplicate));
        }
        for duplicate in find_duplicates(&self.accepted_one_way) {
            violations.push(Violation::new(Rule::DuplicateAcceptedOneWay, duplicate));
        }

        let mut checked_symmetrical = HashSet::new();
        for glyph in &self.symmetrical {
            if !checked_symmetrical.insert(glyph.as_str()) {
                continue;
            }
            if let Some(mirrored) = self.lookup(glyph, false) {
                if mirrored != glyph {
                    violations.push(Violation::new(Rule::SymmetricalMapped, glyph).with_chain([mirrored]));
                }
            }
        }

        let report = ValidationReport {
            violations,
            keys_checked,
        };
        if report.is_clean() {
            emit_log(
                LogLevel::Info,
                &format!("mirror table consistent ({keys_checked} keys checked)"),
            );
        } else {
            emit_log(
                LogLevel::Warn,
                &format!(
                    "mirror table has {} problem(s) ({keys_checked} keys checked)",
                    report.violations.len()
                ),
            );
        }
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(json: &str) -> MirrorTable {
        MirrorTable::from_json(json).unwrap()
    }

    #[test]
    fn test_builtin_table_is_clean() {
        let report = MirrorTable::builtin().validate();
        assert!(report.is_clean(), "{report}");
        assert!(report.keys_checked > 300);
    }

    #[test]
    fn test_one_way_flip_chain() {
        let report = table(r#"{ "ascii": { "<": ">", ">": "<", "K": "4", "4": "R", "R": "4" } }"#)
            .validate();
        assert_eq!(report.graphemes(Rule::OneWayFlip), vec!["K"]);
        let violation = report.by_rule(Rule::OneWayFlip).next().unwrap();
        assert_eq!(violation.chain, vec!["K", "4", "R"]);
    }

    #[test]
    fn test_one_way_into_fixed_point_shows_two_steps() {
        let report = table(r#"{ "ascii": { "<": ">", ">": "<", "?": "S" } }"#).validate();
        let violation = report.by_rule(Rule::OneWayFlip).next().unwrap();
        assert_eq!(violation.chain, vec!["?", "S"]);
    }

    #[test]
    fn test_accepted_involution() {
        let report = table(
            r#"{ "ascii": { "<": ">", ">": "<" }, "accepted_one_way": ["<", "<"] }"#,
        )
        .validate();
        assert_eq!(report.graphemes(Rule::AcceptedInvolution), vec!["<"]);
        assert_eq!(report.graphemes(Rule::DuplicateAcceptedOneWay), vec!["<"]);
    }

    #[test]
    fn test_redundant_mapping() {
        let report = table(
            r#"{ "ascii": { "<": ">", ">": "<" }, "unicode": { "<": ">" } }"#,
        )
        .validate();
        assert_eq!(report.graphemes(Rule::RedundantMapping), vec!["<"]);
    }

    #[test]
    fn test_split_grapheme() {
        // A bare combining mark glues onto the preceding letter.
        let report = table(
            r#"{ "ascii": { "<": ">", ">": "<" }, "unicode": { "\u0301": "\u0300", "\u0300": "\u0301" } }"#,
        )
        .validate();
        assert_eq!(
            report.graphemes(Rule::SplitGrapheme),
            vec!["\u{0301}", "\u{0300}"]
        );
        assert_eq!(report.count(Rule::FlipMismatch), 0);
    }

    #[test]
    fn test_symmetrical_rules() {
        let report = table(
            r#"{ "ascii": { "<": ">", ">": "<" }, "symmetrical": ["o", "o", "<"] }"#,
        )
        .validate();
        assert_eq!(report.graphemes(Rule::DuplicateSymmetrical), vec!["o"]);
        assert_eq!(report.graphemes(Rule::SymmetricalMapped), vec!["<"]);
    }

    #[test]
    fn test_report_display_lists_code_points() {
        let report = table(r#"{ "ascii": { "<": ">", ">": "<", "a": "b" } }"#).validate();
        let text = report.to_string();
        assert!(text.contains("one-way flips that have not been accepted (1)"));
        assert!(text.contains("a (U+0061): a (U+0061) ⟶ b (U+0062)"));
        assert!(text.contains("b (U+0062)"));
    }

    #[test]
    fn test_code_points() {
        assert_eq!(code_points("e\u{0301}"), "U+0065 U+0301");
        assert_eq!(code_points("👍"), "U+1F44D");
    }
}
