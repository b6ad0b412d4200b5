//! The per-line prefix tree over alternative word codes, and the three
//! traversal modes (exact, fuzzy, free-verse) that walk it to find
//! candidate meters.

use crate::aligner::align_distance;
use crate::catalog::Catalog;
use crate::model::{CodeLocation, Line, MeterId, ScanPath};

struct TreeNode {
    location: CodeLocation,
    children: Vec<TreeNode>,
}

/// A per-line prefix tree of alternative scansion codes. Depth equals the
/// line's word count; a child is distinguished by `(word_ref, code_ref)`.
pub struct CodeTree {
    root: TreeNode,
}

impl CodeTree {
    pub fn build(line: &Line) -> Self {
        CodeTree { root: TreeNode { location: CodeLocation::root(), children: build_level(line, 0) } }
    }

    /// Exact traversal: online pruning during descent, full-length recheck
    /// at every leaf.
    pub fn find_meter_exact(&self, catalog: &Catalog, meters: &[MeterId]) -> Vec<ScanPath> {
        let mut results = Vec::new();
        let initial = ScanPath { locations: vec![CodeLocation::root()], live_meters: meters.to_vec() };
        dfs_exact(catalog, &self.root.children, initial, &mut results);
        results
    }

    /// Fuzzy traversal: no online pruning; each leaf is scored against
    /// every candidate meter and kept if within `error_param`.
    pub fn find_meter_fuzzy(
        &self,
        catalog: &Catalog,
        meters: &[MeterId],
        error_param: u32,
    ) -> Vec<(ScanPath, Vec<(MeterId, u32)>)> {
        let mut results = Vec::new();
        let initial = ScanPath { locations: vec![CodeLocation::root()], live_meters: meters.to_vec() };
        dfs_fuzzy(catalog, &self.root.children, initial, error_param, &mut results);
        results
    }

    /// Free-verse traversal: at each leaf, keep meters whose some variation
    /// has the leaf's code as a prefix under the wildcard match relation.
    pub fn find_meter_free_verse(&self, catalog: &Catalog, meters: &[MeterId]) -> Vec<ScanPath> {
        let mut results = Vec::new();
        let initial = ScanPath { locations: vec![CodeLocation::root()], live_meters: meters.to_vec() };
        dfs_free_verse(catalog, &self.root.children, initial, &mut results);
        results
    }

    /// Flattens every leaf path's concatenated code — used to seed
    /// `PatternTree` for the special-meter pass, which rebuilds its own tree
    /// at per-character granularity from these strings.
    pub fn leaf_codes(&self) -> Vec<String> {
        let mut out = Vec::new();
        collect_leaf_codes(&self.root.children, String::new(), &mut out);
        out
    }

    /// Every leaf's full word-level path, unfiltered by any meter — the
    /// driver pairs these with `PatternTree::is_match` results (keyed by the
    /// same flattened code from `leaf_codes`) to attach special-meter hits
    /// back onto their originating words.
    pub fn all_leaf_paths(&self) -> Vec<ScanPath> {
        let mut results = Vec::new();
        let initial = ScanPath { locations: vec![CodeLocation::root()], live_meters: Vec::new() };
        collect_leaf_paths(&self.root.children, initial, &mut results);
        results
    }
}

fn build_level(line: &Line, idx: usize) -> Vec<TreeNode> {
    if idx >= line.words.len() {
        return Vec::new();
    }
    let word = &line.words[idx];
    word.all_codes()
        .into_iter()
        .enumerate()
        .map(|(code_ref, code)| TreeNode {
            location: CodeLocation {
                code: code.to_string(),
                word_ref: Some(idx),
                code_ref,
                word: word.surface.clone(),
                fuzzy: false,
            },
            children: build_level(line, idx + 1),
        })
        .collect()
}

fn collect_leaf_codes(children: &[TreeNode], prefix: String, out: &mut Vec<String>) {
    if children.is_empty() {
        if !prefix.is_empty() {
            out.push(prefix);
        }
        return;
    }
    for child in children {
        let mut next = prefix.clone();
        next.push_str(&child.location.code);
        collect_leaf_codes(&child.children, next, out);
    }
}

fn collect_leaf_paths(children: &[TreeNode], path: ScanPath, out: &mut Vec<ScanPath>) {
    if children.is_empty() {
        if path.locations.len() > 1 {
            out.push(path.compressed());
        }
        return;
    }
    for child in children {
        let mut next = path.clone();
        next.locations.push(child.location.clone());
        collect_leaf_paths(&child.children, next, out);
    }
}

/// The four tolerant variations of a (slash-stripped) meter pattern: bare,
/// trailing-tolerant, caesura-tolerant, both.
fn variations(pattern: &str) -> [String; 4] {
    let flat: String = pattern.chars().filter(|&c| c != '/').collect();
    let bare = flat.replace('+', "");
    let caesura_tolerant = flat.replace('+', "~");
    [
        bare.clone(),
        format!("{bare}~"),
        format!("{caesura_tolerant}~"),
        caesura_tolerant,
    ]
}

fn meter_pattern<'c>(catalog: &'c Catalog, id: MeterId) -> Option<&'c str> {
    match id {
        MeterId::Regular(i) => catalog.meters.get(i).map(|m| m.pattern),
        MeterId::Rubai(i) => catalog.rubai_meters.get(i).copied(),
        MeterId::Special(_) => None,
    }
}

/// `S[i]` (from a meter variation) matches `c[i]` (from a code) iff
/// `S[i] ∈ {-,=}` and (`c[i] == S[i]` or `c[i] == 'x'`), or `S[i] == '~'`
/// and `c[i] == '-'`.
fn slot_matches(pattern_char: char, code_char: char) -> bool {
    match pattern_char {
        '-' | '=' => code_char == pattern_char || code_char == 'x',
        '~' => code_char == '-',
        _ => false,
    }
}

/// Does variation `M`, at the offset already consumed by tentative prefix
/// `T`, accept the next `c.len()` characters?
fn variation_accepts(variation: &str, tentative_len: usize, code: &str) -> bool {
    let v: Vec<char> = variation.chars().collect();
    if v.len() < tentative_len + code.len() {
        return false;
    }
    let slot = &v[tentative_len..tentative_len + code.len()];
    slot.iter().zip(code.chars()).all(|(&s, c)| slot_matches(s, c))
}

fn caesura_ok(flat_with_plus: &str, tentative_len: usize, code: &str) -> bool {
    let chars: Vec<char> = flat_with_plus.chars().collect();
    if chars.len() <= tentative_len + code.len() {
        return true; // no more pattern beyond this word: caesura rule only applies mid-line
    }
    let caesura_pos = tentative_len + code.len() - 1;
    if caesura_pos >= chars.len() || chars[caesura_pos] != '+' {
        return true;
    }
    let code_chars: Vec<char> = code.chars().collect();
    if code_chars.len() >= 2 {
        *code_chars.last().unwrap() == '-'
    } else {
        true // length-1 word codes are always allowed at a caesura
    }
}

fn is_match(catalog: &Catalog, meter: MeterId, tentative: &str, code: &str) -> bool {
    let Some(pattern) = meter_pattern(catalog, meter) else { return false };
    let flat: String = pattern.chars().filter(|&c| c != '/').collect();
    if !caesura_ok(&flat, tentative.len(), code) {
        return false;
    }
    let ends_short = code.chars().last() == Some('-');
    variations(pattern).iter().enumerate().any(|(i, v)| {
        // Variations 2 and 3 (indices 1, 2) require this word's own code to
        // end short, independent of where the variation's trailing `~`
        // lands — that constraint only happens to coincide with the `~`
        // slot for the line's last word, not for every word.
        if (i == 1 || i == 2) && !ends_short {
            return false;
        }
        variation_accepts(v, tentative.len(), code)
    })
}

fn check_code_length(catalog: &Catalog, full_code: &str, meters: &[MeterId]) -> Vec<MeterId> {
    meters
        .iter()
        .copied()
        .filter(|&meter| {
            let Some(pattern) = meter_pattern(catalog, meter) else { return false };
            variations(pattern)
                .iter()
                .any(|v| v.chars().count() == full_code.chars().count() && variation_accepts(v, 0, full_code))
        })
        .collect()
}

fn dfs_exact(catalog: &Catalog, children: &[TreeNode], path: ScanPath, results: &mut Vec<ScanPath>) {
    if children.is_empty() {
        if path.locations.len() > 1 {
            let full_code = path.code();
            let survivors = check_code_length(catalog, &full_code, &path.live_meters);
            if !survivors.is_empty() {
                let mut finished = path;
                finished.live_meters = survivors;
                results.push(finished.compressed());
            }
        }
        return;
    }
    let tentative = path.code();
    for child in children {
        let live: Vec<MeterId> = path
            .live_meters
            .iter()
            .copied()
            .filter(|&m| is_match(catalog, m, &tentative, &child.location.code))
            .collect();
        if live.is_empty() {
            continue;
        }
        let mut next = path.clone();
        next.locations.push(child.location.clone());
        next.live_meters = live;
        dfs_exact(catalog, &child.children, next, results);
    }
}

fn dfs_fuzzy(
    catalog: &Catalog,
    children: &[TreeNode],
    path: ScanPath,
    error_param: u32,
    results: &mut Vec<(ScanPath, Vec<(MeterId, u32)>)>,
) {
    if children.is_empty() {
        if path.locations.len() > 1 {
            let full_code = path.code();
            let mut scored = Vec::new();
            for &meter in &path.live_meters {
                if let Some(pattern) = meter_pattern(catalog, meter) {
                    let best = variations(pattern)
                        .iter()
                        .map(|v| align_distance(v, &full_code))
                        .min()
                        .unwrap_or(u32::MAX);
                    if best <= error_param {
                        scored.push((meter, best));
                    }
                }
            }
            if !scored.is_empty() {
                results.push((path.compressed(), scored));
            }
        }
        return;
    }
    for child in children {
        let mut next = path.clone();
        next.locations.push(child.location.clone());
        dfs_fuzzy(catalog, &child.children, next, error_param, results);
    }
}

fn dfs_free_verse(catalog: &Catalog, children: &[TreeNode], path: ScanPath, results: &mut Vec<ScanPath>) {
    if children.is_empty() {
        if path.locations.len() > 1 {
            let full_code = path.code();
            let survivors: Vec<MeterId> = path
                .live_meters
                .iter()
                .copied()
                .filter(|&m| {
                    meter_pattern(catalog, m)
                        .map(|pattern| variations(pattern).iter().any(|v| is_prefix_match(v, &full_code)))
                        .unwrap_or(false)
                })
                .collect();
            if !survivors.is_empty() {
                let mut finished = path;
                finished.live_meters = survivors;
                results.push(finished.compressed());
            }
        }
        return;
    }
    for child in children {
        let mut next = path.clone();
        next.locations.push(child.location.clone());
        dfs_free_verse(catalog, &child.children, next, results);
    }
}

fn is_prefix_match(variation: &str, code: &str) -> bool {
    let v: Vec<char> = variation.chars().collect();
    if v.len() < code.chars().count() {
        return false;
    }
    v.iter().zip(code.chars()).all(|(&s, c)| slot_matches(s, c))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Word;

    fn hazaj_musamman_salim_line() -> Line {
        Line::new(
            "perfect hazaj",
            vec![
                Word::new("w1", vec!["-===".to_string()]),
                Word::new("w2", vec!["-===".to_string()]),
                Word::new("w3", vec!["-===".to_string()]),
                Word::new("w4", vec!["-===".to_string()]),
            ],
        )
    }

    #[test]
    fn exact_match_finds_perfect_hazaj() {
        let catalog = Catalog::new();
        let line = hazaj_musamman_salim_line();
        let tree = CodeTree::build(&line);
        let meters: Vec<MeterId> = (0..catalog.meters.len()).map(MeterId::Regular).collect();
        let results = tree.find_meter_exact(&catalog, &meters);
        assert!(results.iter().any(|r| r.live_meters.contains(&MeterId::Regular(0))));
    }

    #[test]
    fn trailing_shortening_matches_mahzoof_variant() {
        let catalog = Catalog::new();
        let line = Line::new(
            "trailing short",
            vec![
                Word::new("w1", vec!["-===".to_string()]),
                Word::new("w2", vec!["-===".to_string()]),
                Word::new("w3", vec!["-===".to_string()]),
                Word::new("w4", vec!["-==".to_string()]),
            ],
        );
        let tree = CodeTree::build(&line);
        let meters: Vec<MeterId> = (0..catalog.meters.len()).map(MeterId::Regular).collect();
        let results = tree.find_meter_exact(&catalog, &meters);
        // meter index 1 is "-===/-===/-===/-==" (mahzoof)
        assert!(results.iter().any(|r| r.live_meters.contains(&MeterId::Regular(1))));
    }

    #[test]
    fn caesura_violation_rejects_offending_variations() {
        let catalog = Catalog::new();
        // meter index 3, "=-=/-===+=-=/-===", places '+' at flat-pattern
        // index 7; a second word ending at that same code-space index with
        // a non-'-' final character violates the caesura invariant.
        let line = Line::new(
            "caesura break",
            vec![
                Word::new("w1", vec!["=-=".to_string()]),
                Word::new("w2", vec!["==-==".to_string()]), // len 5, ends '='
            ],
        );
        let tree = CodeTree::build(&line);
        let meters = vec![MeterId::Regular(3)];
        let results = tree.find_meter_exact(&catalog, &meters);
        assert!(results.is_empty());
    }

    #[test]
    fn fuzzy_scores_single_substitution_within_threshold() {
        let catalog = Catalog::new();
        let line = Line::new("fuzzy", vec![Word::new("w1", vec!["====".to_string()])]);
        let tree = CodeTree::build(&line);
        let four_char_meter = catalog
            .meters
            .iter()
            .position(|m| m.pattern.chars().filter(|&c| c != '/').count() == 4 && !m.pattern.contains('+'));
        let idx = four_char_meter.expect("catalog should contain a 4-char meter without caesura");
        let results = tree.find_meter_fuzzy(&catalog, &[MeterId::Regular(idx)], 6);
        assert!(!results.is_empty());
        let (_, scores) = &results[0];
        assert!(scores.iter().any(|&(m, s)| m == MeterId::Regular(idx) && s <= 6));
    }

    #[test]
    fn free_verse_accepts_a_proper_prefix() {
        let catalog = Catalog::new();
        let line = Line::new("partial", vec![Word::new("w1", vec!["-===".to_string()])]);
        let tree = CodeTree::build(&line);
        let meters = vec![MeterId::Regular(0)]; // "-===/-===/-===/-===" — our code is a strict prefix
        let results = tree.find_meter_free_verse(&catalog, &meters);
        assert!(results.iter().any(|r| r.live_meters.contains(&MeterId::Regular(0))));
    }
}
