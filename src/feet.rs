//! Foot decomposition for the special (Hindi/Zamzama) meters, whose feet
//! are not read directly off a pattern string the way regular meters' are
//! (`Catalog::afail`) but walked off the scanned code itself.

use crate::model::Feet;

/// Greedy-first-match foot segmentation for Hindi meters (special-meter
/// offsets 0..7). Pattern order matters and is **not** longest-match —
/// `==` is tried, and wins, before `==-` even though the latter is longer;
/// this is deliberate, not a bug.
const HINDI_PATTERNS: [&str; 8] = ["==", "=-", "-==", "-=-", "-=", "=", "==-", "-==-"];
const HINDI_NAMES: [&str; 8] = ["فعلن", "فعْل", "فعولن", "فعول", "فَعَل", "فع", "فعْلان", "فعولان"];

/// Expected foot count per special-meter offset 0..7; a segmentation that
/// doesn't land on this count is rejected entirely rather than returned
/// partial.
fn expected_hindi_feet(offset: usize) -> Option<usize> {
    match offset {
        0 => Some(8),
        1 => Some(6),
        2 => Some(8),
        3 => Some(4),
        4 => Some(4),
        5 => Some(3),
        6 => Some(6),
        7 => Some(2),
        _ => None,
    }
}

/// Segments `code` into Hindi feet for special-meter offset `offset`.
/// Returns `("", [])` if the offset is out of range, the code is empty, or
/// the resulting foot count doesn't match the offset's expectation.
pub fn hindi_feet(offset: usize, code: &str) -> (String, Vec<Feet>) {
    let Some(expected) = expected_hindi_feet(offset) else { return (String::new(), Vec::new()) };

    let mut chars: Vec<char> = code.chars().collect();
    if chars.last() == Some(&'-') {
        chars.pop();
    }
    if chars.is_empty() {
        return (String::new(), Vec::new());
    }

    let mut names = Vec::new();
    let mut list = Vec::new();
    let mut j = 0usize;
    while j < chars.len() {
        let found = HINDI_PATTERNS.iter().enumerate().find(|(_, pattern)| {
            let plen = pattern.chars().count();
            j + plen <= chars.len() && pattern.chars().eq(chars[j..j + plen].iter().copied())
        });
        match found {
            Some((k, pattern)) => {
                names.push(HINDI_NAMES[k]);
                list.push(Feet { foot: HINDI_NAMES[k].to_string(), code: pattern.to_string() });
                j += pattern.chars().count();
            }
            None => break,
        }
    }

    if names.len() == expected {
        (names.join(" "), list)
    } else {
        (String::new(), Vec::new())
    }
}

/// Walks `code` for Zamzama meters (special-meter offsets 8..10), matching
/// `--=` against `فَعِلن` and `==` against `فعْلن`; stops at the first
/// unrecognized prefix and returns whatever was parsed so far.
pub fn zamzama_feet(code: &str) -> (String, Vec<Feet>) {
    let mut chars: Vec<char> = code.chars().collect();
    if chars.last() == Some(&'-') {
        chars.pop();
    }

    let mut names = Vec::new();
    let mut list = Vec::new();
    let mut i = 0usize;
    while i < chars.len() {
        if chars[i] == '-' {
            if i + 2 < chars.len() && chars[i + 1] == '-' && chars[i + 2] == '=' {
                names.push("فَعِلن");
                list.push(Feet { foot: "فَعِلن".to_string(), code: "--=".to_string() });
                i += 3;
                continue;
            }
            break;
        } else if i + 1 < chars.len() && chars[i + 1] == '=' {
            names.push("فعْلن");
            list.push(Feet { foot: "فعْلن".to_string(), code: "==".to_string() });
            i += 2;
            continue;
        } else {
            break;
        }
    }

    (names.join(" "), list)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hindi_feet_offset_seven_splits_two_long_syllable_feet() {
        let (feet, list) = hindi_feet(7, "====");
        assert_eq!(feet, "فعلن فعلن");
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn hindi_feet_rejects_wrong_count() {
        let (feet, list) = hindi_feet(7, "==");
        assert_eq!(feet, "");
        assert!(list.is_empty());
    }

    #[test]
    fn hindi_feet_greedy_order_prefers_two_char_pattern() {
        // "==-=" would admit "==-" (3 chars) then "=" at offset 6 (6 feet
        // expected), but greedy-first-match takes "==" first.
        let (feet, _) = hindi_feet(7, "====");
        assert!(feet.starts_with("فعلن فعلن"));
    }

    #[test]
    fn zamzama_feet_parses_mixed_pattern() {
        let (feet, list) = zamzama_feet("--=--=");
        assert_eq!(feet, "فَعِلن فَعِلن");
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn zamzama_feet_stops_at_first_unrecognized_prefix() {
        let (feet, _) = zamzama_feet("==-x");
        assert_eq!(feet, "فعْلن");
    }
}
