//! Top-level entry points tying the catalog, code tree, pattern tree and
//! foot decomposition together into per-line results.

use tracing::{info_span, trace};

use crate::catalog::Catalog;
use crate::code_tree::CodeTree;
use crate::error::ScansionError;
use crate::feet::{hindi_feet, zamzama_feet};
use crate::model::{Feet, Line, LineScansionResult, LineScansionResultFuzzy, MeterId, ScanPath};
use crate::options::{MeterSelection, ScanOptions};
use crate::pattern_tree::{PatternTree, SPECIAL_METER_BASE};

/// Builds a fresh, integrity-checked catalog. A thin wrapper so callers
/// don't need to know `Catalog::new` panics on a corrupt built-in table.
pub fn build_catalog() -> Catalog {
    Catalog::new()
}

fn validate(line: &Line) -> Result<(), ScansionError> {
    if line.words.is_empty() {
        return Err(ScansionError::EmptyLine);
    }
    for word in &line.words {
        let codes = word.all_codes();
        if codes.is_empty() {
            return Err(ScansionError::NoWords(word.surface.clone()));
        }
        for code in codes {
            if let Some(bad) = code.chars().find(|c| !matches!(c, '-' | '=' | 'x')) {
                return Err(ScansionError::InvalidCode {
                    word: word.surface.clone(),
                    code: format!("{code} (contains {bad:?})"),
                });
            }
        }
    }
    Ok(())
}

fn all_regular_meter_ids(catalog: &Catalog) -> Vec<MeterId> {
    (0..catalog.meters.len()).map(MeterId::Regular).collect()
}

/// Meter ids to try first for a given selection. For `Preferred` this is
/// only the non-deprecated subset; callers must fall back to
/// `all_regular_meter_ids` themselves if that first pass finds nothing —
/// "finds nothing" means the traversal over these ids returns no paths, not
/// that this subset happens to be empty.
fn regular_meter_ids(catalog: &Catalog, selection: &MeterSelection) -> Vec<MeterId> {
    match selection {
        MeterSelection::Preferred => {
            (0..catalog.meters.len()).filter(|&i| catalog.usage[i]).map(MeterId::Regular).collect()
        }
        MeterSelection::All => all_regular_meter_ids(catalog),
        MeterSelection::RubaiOnly => (0..catalog.rubai_meters.len()).map(MeterId::Rubai).collect(),
        MeterSelection::WithSpecial => {
            let mut ids = all_regular_meter_ids(catalog);
            ids.extend((0..catalog.rubai_meters.len()).map(MeterId::Rubai));
            ids
        }
        MeterSelection::Explicit(ids) => ids.clone(),
    }
}

fn meter_name(catalog: &Catalog, id: MeterId) -> String {
    match id {
        MeterId::Regular(i) => catalog.meters.get(i).map(|m| m.name.to_string()).unwrap_or_default(),
        MeterId::Rubai(i) => catalog.rubai_meter_names.get(i).map(|s| s.to_string()).unwrap_or_default(),
        MeterId::Special(offset) => {
            let idx = offset.saturating_sub(SPECIAL_METER_BASE);
            catalog.special_meter_names.get(idx).map(|s| s.to_string()).unwrap_or_default()
        }
    }
}

/// Foot decomposition for a single meter candidate's full code. Mirrors
/// `Catalog::afail`/`afail_list` for regular/rubaʿi meters and
/// `feet::hindi_feet`/`feet::zamzama_feet` for special ones.
pub fn feet_of(catalog: &Catalog, id: MeterId, full_code: &str) -> (String, Vec<Feet>) {
    match id {
        MeterId::Regular(i) => {
            let Some(meter) = catalog.meters.get(i) else { return (String::new(), Vec::new()) };
            let list = catalog
                .afail_list(meter.pattern)
                .into_iter()
                .map(|(name, code)| Feet { foot: name.to_string(), code: code.to_string() })
                .collect();
            (catalog.afail(meter.pattern), list)
        }
        MeterId::Rubai(i) => {
            let Some(pattern) = catalog.rubai_meters.get(i) else { return (String::new(), Vec::new()) };
            let list = catalog
                .afail_list(pattern)
                .into_iter()
                .map(|(name, code)| Feet { foot: name.to_string(), code: code.to_string() })
                .collect();
            (catalog.afail(pattern), list)
        }
        MeterId::Special(offset) => {
            let local = offset.saturating_sub(SPECIAL_METER_BASE);
            if local < 8 {
                hindi_feet(local, full_code)
            } else {
                zamzama_feet(full_code)
            }
        }
    }
}

fn words_and_taqti(path: &ScanPath) -> (Vec<String>, Vec<String>) {
    let compressed = path.compressed();
    let mut words = Vec::new();
    let mut taqti = Vec::new();
    for loc in &compressed.locations {
        if loc.is_root() {
            continue;
        }
        words.push(loc.word.clone());
        taqti.push(loc.code.clone());
    }
    (words, taqti)
}

/// Pairs each leaf's flattened code with its word-level path and the
/// special-meter offsets that code satisfies.
fn special_matches(code_tree: &CodeTree) -> Vec<(ScanPath, Vec<MeterId>)> {
    let codes = code_tree.leaf_codes();
    let paths = code_tree.all_leaf_paths();
    codes
        .into_iter()
        .zip(paths)
        .filter_map(|(code, path)| {
            let hits = PatternTree::build(&code).is_match();
            if hits.is_empty() {
                None
            } else {
                Some((path, hits.into_iter().map(MeterId::Special).collect()))
            }
        })
        .collect()
}

/// Exact scan: every regular/rubaʿi meter matched by pattern equality, plus
/// (when requested) special meters matched structurally.
pub fn scan_line(
    catalog: &Catalog,
    line: &Line,
    options: &ScanOptions,
) -> Result<Vec<LineScansionResult>, ScansionError> {
    validate(line)?;
    let span = info_span!("scan_line", words = line.words.len());
    let _enter = span.enter();

    let tree = CodeTree::build(line);
    let meters = regular_meter_ids(catalog, &options.meters);

    let mut results = Vec::new();
    if options.free_verse {
        let mut paths = tree.find_meter_free_verse(catalog, &meters);
        if paths.is_empty() && matches!(options.meters, MeterSelection::Preferred) {
            paths = tree.find_meter_free_verse(catalog, &all_regular_meter_ids(catalog));
        }
        for path in paths {
            push_exact(catalog, line, &path, &mut results);
        }
    } else {
        let mut paths = tree.find_meter_exact(catalog, &meters);
        if paths.is_empty() && matches!(options.meters, MeterSelection::Preferred) {
            paths = tree.find_meter_exact(catalog, &all_regular_meter_ids(catalog));
        }
        for path in paths {
            push_exact(catalog, line, &path, &mut results);
        }
        if matches!(options.meters, MeterSelection::WithSpecial) {
            for (mut path, hits) in special_matches(&tree) {
                path.live_meters = hits;
                push_exact(catalog, line, &path, &mut results);
            }
        }
    }

    trace!(candidates = results.len(), "scan_line finished");
    Ok(results)
}

fn push_exact(catalog: &Catalog, line: &Line, path: &ScanPath, out: &mut Vec<LineScansionResult>) {
    let full_code = path.code();
    let (words, taqti) = words_and_taqti(path);
    for &id in &path.live_meters {
        let (feet_str, feet_list) = feet_of(catalog, id, &full_code);
        out.push(LineScansionResult {
            original: line.original.clone(),
            words: words.clone(),
            word_taqti: taqti.clone(),
            full_code: full_code.clone(),
            meter_id: match id {
                MeterId::Regular(i) => Some(i),
                _ => None,
            },
            meter_name: meter_name(catalog, id),
            meter_roman: None,
            feet: feet_str,
            feet_list,
        });
    }
}

/// Fuzzy scan: every live meter within `options.error_param` edits, scored
/// by the cheaper distance-only aligner.
pub fn scan_line_fuzzy(
    catalog: &Catalog,
    line: &Line,
    options: &ScanOptions,
) -> Result<Vec<LineScansionResultFuzzy>, ScansionError> {
    validate(line)?;
    let span = info_span!("scan_line_fuzzy", words = line.words.len());
    let _enter = span.enter();

    let tree = CodeTree::build(line);
    let meters = regular_meter_ids(catalog, &options.meters);

    let mut fuzzy_matches = tree.find_meter_fuzzy(catalog, &meters, options.error_param);
    if fuzzy_matches.is_empty() && matches!(options.meters, MeterSelection::Preferred) {
        fuzzy_matches =
            tree.find_meter_fuzzy(catalog, &all_regular_meter_ids(catalog), options.error_param);
    }

    let mut results = Vec::new();
    for (path, scored) in fuzzy_matches {
        let full_code = path.code();
        let (words, taqti) = words_and_taqti(&path);
        for (id, score) in scored {
            let (feet_str, feet_list) = feet_of(catalog, id, &full_code);
            results.push(LineScansionResultFuzzy {
                original: line.original.clone(),
                words: words.clone(),
                word_taqti: taqti.clone(),
                full_code: full_code.clone(),
                id: id.legacy_flat_index(),
                meter_name: meter_name(catalog, id),
                meter_roman: None,
                feet: feet_str,
                feet_list,
                score,
            });
        }
    }

    trace!(candidates = results.len(), "scan_line_fuzzy finished");
    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Word;

    fn hazaj_line() -> Line {
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
    fn empty_line_is_rejected() {
        let catalog = build_catalog();
        let line = Line::new("", Vec::new());
        let err = scan_line(&catalog, &line, &ScanOptions::default()).unwrap_err();
        assert_eq!(err, ScansionError::EmptyLine);
    }

    #[test]
    fn word_with_no_codes_is_rejected() {
        let catalog = build_catalog();
        let line = Line::new("bad", vec![Word::new("w1", Vec::new())]);
        let err = scan_line(&catalog, &line, &ScanOptions::default()).unwrap_err();
        assert_eq!(err, ScansionError::NoWords("w1".to_string()));
    }

    #[test]
    fn scan_line_finds_perfect_hazaj_with_feet() {
        let catalog = build_catalog();
        let line = hazaj_line();
        let opts = ScanOptions { meters: MeterSelection::All, ..ScanOptions::default() };
        let results = scan_line(&catalog, &line, &opts).unwrap();
        let hit = results.iter().find(|r| r.meter_id == Some(0)).expect("hazaj musamman salim present");
        assert_eq!(hit.feet, "مفاعیلن مفاعیلن مفاعیلن مفاعیلن");
        assert_eq!(hit.words.len(), 4);
    }

    #[test]
    fn scan_line_fuzzy_scores_a_near_miss() {
        let catalog = build_catalog();
        let line = Line::new(
            "near hazaj",
            vec![
                Word::new("w1", vec!["-===".to_string()]),
                Word::new("w2", vec!["-===".to_string()]),
                Word::new("w3", vec!["-===".to_string()]),
                Word::new("w4", vec!["-==-".to_string()]),
            ],
        );
        let opts = ScanOptions { meters: MeterSelection::All, error_param: 6, ..ScanOptions::default() };
        let results = scan_line_fuzzy(&catalog, &line, &opts).unwrap();
        assert!(results.iter().any(|r| r.id == 0 && r.score <= 2));
    }

    #[test]
    fn scan_line_with_special_meters_finds_hindi_offset_seven() {
        let catalog = build_catalog();
        let line = Line::new("hindi", vec![Word::new("w1", vec!["====".to_string()])]);
        let opts = ScanOptions { meters: MeterSelection::WithSpecial, ..ScanOptions::default() };
        let results = scan_line(&catalog, &line, &opts).unwrap();
        assert!(results.iter().any(|r| matches!(
            r.meter_name.as_str(),
            "بحرِ ہندی/ متقارب مربع محذوف"
        )));
    }
}
