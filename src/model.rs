//! The records that flow through the engine: lines, words, tree paths and
//! the per-candidate results handed back to callers.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::catalog::{NUM_METERS, NUM_RUBAI_METERS};

/// A word's scansion alternatives, as produced by the (out-of-scope)
/// orthographic transducer.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Word {
    pub surface: String,
    /// Primary alternative scansion codes, deduplicated.
    pub codes: Vec<String>,
    /// Cross-word elision-graft codes: alternatives produced by a final
    /// vowel of this word fusing with the next. Empty when not applicable.
    pub graft_codes: Vec<String>,
}

impl Word {
    pub fn new(surface: impl Into<String>, codes: Vec<String>) -> Self {
        let mut deduped: Vec<String> = Vec::with_capacity(codes.len());
        for code in codes {
            if !deduped.contains(&code) {
                deduped.push(code);
            }
        }
        Word { surface: surface.into(), codes: deduped, graft_codes: Vec::new() }
    }

    pub fn with_graft(mut self, graft_codes: Vec<String>) -> Self {
        self.graft_codes = graft_codes;
        self
    }

    /// All alternatives, primary first then graft, deduplicated.
    pub fn all_codes(&self) -> Vec<&str> {
        let mut out: Vec<&str> = self.codes.iter().map(String::as_str).collect();
        for g in &self.graft_codes {
            if !out.contains(&g.as_str()) {
                out.push(g.as_str());
            }
        }
        out
    }
}

/// A single line of verse: its original text and word-level code choices.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Line {
    pub original: String,
    pub words: Vec<Word>,
}

impl Line {
    pub fn new(original: impl Into<String>, words: Vec<Word>) -> Self {
        Line { original: original.into(), words }
    }
}

/// Tagged meter identity: a disjoint union rather than a sentinel-encoded
/// integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MeterId {
    Regular(usize),
    Rubai(usize),
    Special(usize),
}

impl MeterId {
    /// Converts to a flat integer space, where rubaʿi meters follow regular
    /// meters and special meters are represented by their own
    /// negative/offset scheme. Needed only where a caller wants that legacy
    /// id comparison.
    pub fn legacy_flat_index(self) -> i64 {
        match self {
            MeterId::Regular(i) => i as i64,
            MeterId::Rubai(i) => (NUM_METERS + i) as i64,
            MeterId::Special(i) => -2 - i as i64,
        }
    }

    pub fn is_rubai(self) -> bool {
        matches!(self, MeterId::Rubai(_))
    }

    pub fn is_special(self) -> bool {
        matches!(self, MeterId::Special(_))
    }
}

/// A location along a scan path: the code contributed at this step, which
/// word and alternative it came from, and the word's surface form for
/// display. The root of every path is `CodeLocation::root()`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CodeLocation {
    pub code: String,
    pub word_ref: Option<usize>,
    pub code_ref: usize,
    pub word: String,
    pub fuzzy: bool,
}

impl CodeLocation {
    pub fn root() -> Self {
        CodeLocation {
            code: "root".to_string(),
            word_ref: None,
            code_ref: 0,
            word: String::new(),
            fuzzy: false,
        }
    }

    pub fn is_root(&self) -> bool {
        self.word_ref.is_none()
    }
}

/// An ordered sequence of [`CodeLocation`]s from the root, plus the meter
/// ids still alive on this path (and, in fuzzy mode, each one's score).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanPath {
    pub locations: Vec<CodeLocation>,
    pub live_meters: Vec<MeterId>,
}

impl ScanPath {
    pub fn root() -> Self {
        ScanPath { locations: vec![CodeLocation::root()], live_meters: Vec::new() }
    }

    /// The concatenated code of every non-root location.
    pub fn code(&self) -> String {
        self.locations.iter().filter(|l| !l.is_root()).map(|l| l.code.as_str()).collect()
    }

    /// Merges consecutive locations that share a word_ref, restoring
    /// per-word granularity after a per-character traversal (see
    /// `pattern_tree.rs`).
    pub fn compressed(&self) -> ScanPath {
        let mut merged: Vec<CodeLocation> = Vec::new();
        for loc in &self.locations {
            if loc.is_root() {
                merged.push(loc.clone());
                continue;
            }
            if let Some(last) = merged.last_mut() {
                if !last.is_root() && last.word_ref == loc.word_ref {
                    last.code.push_str(&loc.code);
                    continue;
                }
            }
            merged.push(loc.clone());
        }
        ScanPath { locations: merged, live_meters: self.live_meters.clone() }
    }
}

/// A named, coded foot within a scanned line.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Feet {
    pub foot: String,
    pub code: String,
}

/// An exact-match result for one candidate meter on one line.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LineScansionResult {
    pub original: String,
    pub words: Vec<String>,
    pub word_taqti: Vec<String>,
    pub full_code: String,
    pub meter_id: Option<usize>,
    pub meter_name: String,
    pub meter_roman: Option<String>,
    pub feet: String,
    pub feet_list: Vec<Feet>,
}

/// A fuzzy-match result: an exact result plus the edit score against the
/// chosen meter.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LineScansionResultFuzzy {
    pub original: String,
    pub words: Vec<String>,
    pub word_taqti: Vec<String>,
    pub full_code: String,
    pub id: i64,
    pub meter_name: String,
    pub meter_roman: Option<String>,
    pub feet: String,
    pub feet_list: Vec<Feet>,
    pub score: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_dedups_primary_codes() {
        let w = Word::new("gul", vec!["==".to_string(), "==".to_string()]);
        assert_eq!(w.codes, vec!["==".to_string()]);
    }

    #[test]
    fn word_dedups_non_adjacent_codes() {
        let w = Word::new(
            "gul",
            vec!["-===".to_string(), "==--".to_string(), "-===".to_string()],
        );
        assert_eq!(w.codes, vec!["-===".to_string(), "==--".to_string()]);
    }

    #[test]
    fn all_codes_merges_graft_without_duplicates() {
        let w = Word::new("ka", vec!["-".to_string()]).with_graft(vec!["-".to_string(), "=".to_string()]);
        assert_eq!(w.all_codes(), vec!["-", "="]);
    }

    #[test]
    fn scan_path_code_skips_root() {
        let mut path = ScanPath::root();
        path.locations.push(CodeLocation {
            code: "-===".to_string(),
            word_ref: Some(0),
            code_ref: 0,
            word: "mufaaeelun".to_string(),
            fuzzy: false,
        });
        assert_eq!(path.code(), "-===");
    }

    #[test]
    fn compression_merges_same_word_ref_locations() {
        let mut path = ScanPath::root();
        for (i, c) in "-===".chars().enumerate() {
            path.locations.push(CodeLocation {
                code: c.to_string(),
                word_ref: Some(0),
                code_ref: i,
                word: "mufaaeelun".to_string(),
                fuzzy: false,
            });
        }
        let compressed = path.compressed();
        assert_eq!(compressed.locations.len(), 2); // root + one merged word
        assert_eq!(compressed.locations[1].code, "-===");
    }

    #[test]
    fn legacy_flat_index_matches_source_sentinels() {
        assert_eq!(MeterId::Rubai(0).legacy_flat_index(), NUM_METERS as i64);
        assert_eq!(MeterId::Special(0).legacy_flat_index(), -2);
        assert!(MeterId::Rubai(NUM_RUBAI_METERS - 1).legacy_flat_index() >= NUM_METERS as i64);
    }
}
