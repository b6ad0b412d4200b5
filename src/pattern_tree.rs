//! Structural matcher for special (Hindi/Zamzama) meters. Built once per
//! `CodeTree` leaf: expands every flexible syllable (`x`) in that leaf's
//! flattened code into both `-` and `=` branches, then walks both
//! automata over every resulting `-`/`=` string.

use crate::catalog::{NUM_METERS, NUM_RUBAI_METERS};
use crate::state_machine::{original_hindi_meter, zamzama_meter};

/// Regular + rubaʿi meters occupy indices `0..meter_base`; special meters
/// are `meter_base + offset` for `offset` in `0..11`.
pub const SPECIAL_METER_BASE: usize = NUM_METERS + NUM_RUBAI_METERS;

/// Hard cap on `x`-expansion branching: a line with more flexible
/// syllables than this yields no special-meter match rather than blowing
/// up the tree.
pub const MAX_X_EXPANSIONS: u32 = 12;

struct PatternNode {
    code: char,
    children: Vec<PatternNode>,
}

/// A small per-leaf tree enumerating every `-`/`=` resolution of a code
/// string's flexible syllables.
pub struct PatternTree {
    root: Vec<PatternNode>,
}

impl PatternTree {
    /// Builds the tree from one flattened line code. The last character is
    /// normalized from `x` to `=` first (trailing-syllable convention);
    /// earlier `x`s are expanded into both branches.
    pub fn build(leaf_code: &str) -> Self {
        let normalized = normalize_trailing_x(leaf_code);
        let chars: Vec<char> = normalized.chars().collect();
        let x_count = chars.iter().filter(|&&c| c == 'x').count() as u32;
        let mut root = Vec::new();
        if x_count <= MAX_X_EXPANSIONS {
            insert(&mut root, &chars);
        }
        PatternTree { root }
    }

    /// Runs both automata over every enumerated `-`/`=` string and returns
    /// the deduplicated set of accepted special-meter indices (already
    /// offset by [`SPECIAL_METER_BASE`]).
    pub fn is_match(&self) -> Vec<usize> {
        let mut hits = Vec::new();
        let mut prefix = Vec::new();
        walk_leaves(&self.root, &mut prefix, &mut hits);
        hits.sort_unstable();
        hits.dedup();
        hits
    }
}

fn normalize_trailing_x(code: &str) -> String {
    let mut chars: Vec<char> = code.chars().collect();
    if let Some(last) = chars.last_mut() {
        if *last == 'x' {
            *last = '=';
        }
    }
    chars.into_iter().collect()
}

fn insert(nodes: &mut Vec<PatternNode>, remaining: &[char]) {
    if remaining.is_empty() {
        return;
    }
    let c = remaining[0];
    let rest = &remaining[1..];
    if c == 'x' {
        insert_one(nodes, '-', rest);
        insert_one(nodes, '=', rest);
    } else {
        insert_one(nodes, c, rest);
    }
}

fn insert_one(nodes: &mut Vec<PatternNode>, c: char, rest: &[char]) {
    if let Some(node) = nodes.iter_mut().find(|n| n.code == c) {
        insert(&mut node.children, rest);
    } else {
        let mut node = PatternNode { code: c, children: Vec::new() };
        insert(&mut node.children, rest);
        nodes.push(node);
    }
}

fn walk_leaves(nodes: &[PatternNode], prefix: &mut Vec<char>, hits: &mut Vec<usize>) {
    for node in nodes {
        prefix.push(node.code);
        if node.children.is_empty() {
            evaluate_leaf(prefix, hits);
        } else {
            walk_leaves(&node.children, prefix, hits);
        }
        prefix.pop();
    }
}

fn evaluate_leaf(chars: &[char], hits: &mut Vec<usize>) {
    if walk_dfa(chars, original_hindi_meter) {
        if let Some(offset) = original_hindi_offset(chars) {
            hits.push(SPECIAL_METER_BASE + offset);
        }
    }
    if walk_dfa(chars, zamzama_meter) {
        if let Some(offset) = zamzama_offset(chars) {
            hits.push(SPECIAL_METER_BASE + 8 + offset);
        }
    }
}

fn walk_dfa(chars: &[char], step: impl Fn(char, i8) -> i8) -> bool {
    let mut state = 0i8;
    for &c in chars {
        state = step(c, state);
        if state == -1 {
            return false;
        }
    }
    true
}

fn morae(chars: &[char]) -> u32 {
    chars.iter().map(|&c| if c == '=' { 2 } else { 1 }).sum()
}

fn last_char(chars: &[char]) -> Option<char> {
    chars.last().copied()
}

fn ends_short_long(chars: &[char]) -> bool {
    chars.len() >= 2 && chars[chars.len() - 2] == '-' && chars[chars.len() - 1] == '='
}

/// Offsets 0..7 per the Original-Hindi morae/terminator acceptance table.
fn original_hindi_offset(chars: &[char]) -> Option<usize> {
    const TABLE: [(u32, u32, usize); 8] = [
        (30, 31, 0),
        (22, 23, 1),
        (32, 33, 2),
        (14, 15, 3),
        (16, 17, 4),
        (10, 11, 5),
        (24, 25, 6),
        (8, 9, 7),
    ];
    let m = morae(chars);
    for &(m_even, m_odd, offset) in &TABLE {
        if m == m_even && last_char(chars) == Some('=') {
            return Some(offset);
        }
        if m == m_odd && ends_short_long(chars) {
            return Some(offset);
        }
    }
    None
}

/// Offsets 0..2 (reported as 8..10 overall) per the Zamzama acceptance table.
fn zamzama_offset(chars: &[char]) -> Option<usize> {
    const TABLE: [(u32, u32, usize); 3] = [(32, 33, 0), (24, 25, 1), (16, 17, 2)];
    let m = morae(chars);
    for &(m_even, m_odd, offset) in &TABLE {
        if m == m_even && last_char(chars) == Some('=') {
            return Some(offset);
        }
        if m == m_odd && ends_short_long(chars) {
            return Some(offset);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn original_hindi_offset_seven_accepts_eight_morae_ending_long() {
        // "====" => 4 long syllables => morae 8, ends '='
        let tree = PatternTree::build("====");
        let hits = tree.is_match();
        assert!(hits.contains(&(SPECIAL_METER_BASE + 7)));
    }

    #[test]
    fn flexible_syllable_is_expanded_into_both_branches() {
        let tree = PatternTree::build("x===");
        // x resolves to both '-' (morae 7) and '=' (morae 8, offset 7 hit)
        let hits = tree.is_match();
        assert!(hits.contains(&(SPECIAL_METER_BASE + 7)));
    }

    #[test]
    fn trailing_x_normalizes_to_long_before_expansion() {
        let tree = PatternTree::build("===x");
        let hits = tree.is_match();
        assert!(hits.contains(&(SPECIAL_METER_BASE + 7)));
    }

    #[test]
    fn too_many_flexible_syllables_yields_no_match() {
        let long_code = "x".repeat((MAX_X_EXPANSIONS + 1) as usize);
        let tree = PatternTree::build(&long_code);
        assert!(tree.is_match().is_empty());
    }

    #[test]
    fn non_special_shape_yields_no_hits() {
        let tree = PatternTree::build("-");
        assert!(tree.is_match().is_empty());
    }
}
