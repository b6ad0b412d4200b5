//! Levenshtein-with-wildcards alignment between a meter pattern (or one of
//! its variations) and a scansion code. Standalone: the DP here does not
//! know about meters, trees, or catalogs — it is a pure string algorithm
//! reused by fuzzy traversal (`code_tree.rs`) and exposed directly as
//! corrective feedback via `align`.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// `p` matches `c` when they're equal, when `c` is the flexible syllable `x`
/// (and `p` isn't the aligner-only wildcard `~`), or when `p` is `~` and `c`
/// is a short syllable `-`.
pub fn match_char(p: char, c: char) -> bool {
    p == c || (c == 'x' && p != '~') || (p == '~' && c == '-')
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum EditKind {
    Match,
    Substitute,
    /// A pattern character with no corresponding code character.
    Insert,
    /// A code character with no corresponding pattern character.
    Delete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EditOp {
    pub kind: EditKind,
    pub pattern_pos: Option<usize>,
    pub code_pos: Option<usize>,
    pub pattern_char: Option<char>,
    pub code_char: Option<char>,
}

/// A maximal contiguous range of `code` indices covered by `match` ops.
/// Exclusive end, like a Rust slice range.
pub type Leverage = (usize, usize);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alignment {
    pub distance: u32,
    pub ops: Vec<EditOp>,
    pub leverage: Vec<Leverage>,
}

/// Computes the minimum-cost edit script aligning `pattern` to `code` under
/// `match_char`, with backtracking tie-break order diagonal > up > left.
pub fn align(pattern: &str, code: &str) -> Alignment {
    let p: Vec<char> = pattern.chars().collect();
    let c: Vec<char> = code.chars().collect();
    let m = p.len();
    let n = c.len();

    let mut d = vec![vec![0u32; n + 1]; m + 1];
    for i in 0..=m {
        d[i][0] = i as u32;
    }
    for j in 0..=n {
        d[0][j] = j as u32;
    }
    for i in 1..=m {
        for j in 1..=n {
            let sub_cost = if match_char(p[i - 1], c[j - 1]) { 0 } else { 1 };
            let diag = d[i - 1][j - 1] + sub_cost;
            let up = d[i - 1][j] + 1;
            let left = d[i][j - 1] + 1;
            d[i][j] = diag.min(up).min(left);
        }
    }

    let mut ops = Vec::new();
    let (mut i, mut j) = (m, n);
    while i > 0 || j > 0 {
        if i > 0 && j > 0 {
            let sub_cost = if match_char(p[i - 1], c[j - 1]) { 0 } else { 1 };
            if d[i][j] == d[i - 1][j - 1] + sub_cost {
                let kind = if sub_cost == 0 { EditKind::Match } else { EditKind::Substitute };
                ops.push(EditOp {
                    kind,
                    pattern_pos: Some(i - 1),
                    code_pos: Some(j - 1),
                    pattern_char: Some(p[i - 1]),
                    code_char: Some(c[j - 1]),
                });
                i -= 1;
                j -= 1;
                continue;
            }
        }
        if i > 0 && d[i][j] == d[i - 1][j] + 1 {
            ops.push(EditOp {
                kind: EditKind::Insert,
                pattern_pos: Some(i - 1),
                code_pos: None,
                pattern_char: Some(p[i - 1]),
                code_char: None,
            });
            i -= 1;
            continue;
        }
        // j > 0 is the only remaining possibility here.
        ops.push(EditOp {
            kind: EditKind::Delete,
            pattern_pos: None,
            code_pos: Some(j - 1),
            pattern_char: None,
            code_char: Some(c[j - 1]),
        });
        j -= 1;
    }
    ops.reverse();

    let leverage = leverage_from_ops(&ops);

    Alignment { distance: d[m][n], ops, leverage }
}

/// Minimum-cost distance only, without materializing the edit script or
/// leverage — used by fuzzy traversal, which scores far more (pattern,
/// code) pairs than it ever needs full scripts for.
pub fn align_distance(pattern: &str, code: &str) -> u32 {
    let p: Vec<char> = pattern.chars().collect();
    let c: Vec<char> = code.chars().collect();
    let m = p.len();
    let n = c.len();

    let mut prev: Vec<u32> = (0..=n as u32).collect();
    let mut curr = vec![0u32; n + 1];
    for i in 1..=m {
        curr[0] = i as u32;
        for j in 1..=n {
            let sub_cost = if match_char(p[i - 1], c[j - 1]) { 0 } else { 1 };
            curr[j] = (prev[j - 1] + sub_cost).min(prev[j] + 1).min(curr[j - 1] + 1);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[n]
}

fn leverage_from_ops(ops: &[EditOp]) -> Vec<Leverage> {
    let mut ranges = Vec::new();
    let mut current: Option<(usize, usize)> = None;
    for op in ops {
        if op.kind == EditKind::Match {
            let pos = op.code_pos.expect("match op always carries a code position");
            match current {
                Some((start, end)) if end == pos => current = Some((start, pos + 1)),
                Some((start, end)) => {
                    ranges.push((start, end));
                    current = Some((pos, pos + 1));
                }
                None => current = Some((pos, pos + 1)),
            }
        }
    }
    if let Some(range) = current {
        ranges.push(range);
    }
    ranges
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_strings_have_zero_distance() {
        let a = align("-===", "-===");
        assert_eq!(a.distance, 0);
        assert!(a.ops.iter().all(|op| op.kind == EditKind::Match));
    }

    #[test]
    fn single_substitution() {
        let a = align("-===", "====");
        assert_eq!(a.distance, 1);
        let subs: Vec<_> = a.ops.iter().filter(|op| op.kind == EditKind::Substitute).collect();
        assert_eq!(subs.len(), 1);
        assert_eq!(subs[0].pattern_pos, Some(0));
        assert_eq!(subs[0].code_pos, Some(0));
    }

    #[test]
    fn flexible_syllable_matches_either_long_or_short() {
        assert!(match_char('-', 'x'));
        assert!(match_char('=', 'x'));
        assert!(!match_char('~', 'x'));
    }

    #[test]
    fn aligner_wildcard_matches_short_only() {
        assert!(match_char('~', '-'));
        assert!(!match_char('~', '='));
    }

    #[test]
    fn leverage_covers_every_match_op() {
        let a = align("-===", "-=x=");
        let matched: std::collections::BTreeSet<usize> = a
            .ops
            .iter()
            .filter(|op| op.kind == EditKind::Match)
            .map(|op| op.code_pos.unwrap())
            .collect();
        let covered: std::collections::BTreeSet<usize> =
            a.leverage.iter().flat_map(|&(s, e)| s..e).collect();
        assert_eq!(matched, covered);
    }

    #[test]
    fn align_distance_matches_full_align_distance() {
        for (p, c) in [("-===", "===="), ("==-=", "--=="), ("=-=-", "=-=-")] {
            assert_eq!(align(p, c).distance, align_distance(p, c));
        }
    }

    #[test]
    fn insertion_and_deletion_are_distinguished() {
        let a = align("-===", "-==");
        assert_eq!(a.distance, 1);
        assert!(a.ops.iter().any(|op| op.kind == EditKind::Insert));
    }
}
