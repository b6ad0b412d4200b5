//! Resolves one meter for a whole poem from many per-line candidates.

use tracing::{debug, info};

use crate::catalog::Catalog;
use crate::model::{LineScansionResult, LineScansionResultFuzzy};

/// Counts how many of `line_feet` appear in `meter_feet`, in order,
/// stopping at the first foot that can't be found in the remaining meter
/// feet. Greedy, no backtracking.
pub fn ordered_match_count(line_feet: &[String], meter_feet: &[String]) -> usize {
    let mut count = 0;
    let mut j = 0;
    for f in line_feet {
        let mut found = false;
        while j < meter_feet.len() {
            if *f == meter_feet[j] {
                count += 1;
                j += 1;
                found = true;
                break;
            }
            j += 1;
        }
        if !found {
            break;
        }
    }
    count
}

fn split_feet(feet: &str) -> Vec<String> {
    feet.split(' ').map(str::trim).filter(|s| !s.is_empty()).map(str::to_string).collect()
}

/// Score for how well `line_feet` matches `meter_name`: the best
/// `ordered_match_count` across every catalog variant sharing that name,
/// requiring the variant's foot count to equal the line's foot count. Checks
/// the regular-meter table first, then falls back to the rubaʿi table so
/// quatrain lines dominance-resolve too.
fn calculate_score(catalog: &Catalog, meter_name: &str, line_feet: &str) -> usize {
    let line_arkaan = split_feet(line_feet);
    let mut patterns: Vec<&str> = catalog
        .meter_index(meter_name)
        .into_iter()
        .filter_map(|idx| catalog.meters.get(idx).map(|m| m.pattern))
        .collect();
    if patterns.is_empty() {
        patterns = catalog
            .rubai_meter_names
            .iter()
            .zip(catalog.rubai_meters.iter())
            .filter(|(name, _)| **name == meter_name)
            .map(|(_, pattern)| *pattern)
            .collect();
    }

    let mut best = 0;
    for pattern in patterns {
        let meter_feet = split_feet(&catalog.afail(pattern));
        if line_arkaan.len() != meter_feet.len() {
            continue;
        }
        let score = ordered_match_count(&line_arkaan, &meter_feet);
        best = best.max(score);
    }
    best
}

/// Collects unique meter names from `results`, preserving first-seen order.
fn unique_meter_names<'a, I: Iterator<Item = &'a str>>(names: I) -> Vec<&'a str> {
    let mut out: Vec<&str> = Vec::new();
    for name in names {
        if !name.is_empty() && !out.contains(&name) {
            out.push(name);
        }
    }
    out
}

/// Exact-path dominance: score every distinct meter name by summing
/// `calculate_score` across all matching results, then keep the
/// highest-scoring meter's results (last-encountered wins ties).
pub fn resolve_dominant(catalog: &Catalog, results: &[LineScansionResult]) -> Vec<LineScansionResult> {
    if results.is_empty() {
        return Vec::new();
    }
    let names = unique_meter_names(results.iter().map(|r| r.meter_name.as_str()));
    if names.is_empty() {
        return Vec::new();
    }

    let mut scores = vec![0u64; names.len()];
    for (i, name) in names.iter().enumerate() {
        for item in results {
            if item.meter_name == *name {
                scores[i] += calculate_score(catalog, name, &item.feet) as u64;
            }
        }
        debug!(meter = *name, score = scores[i], "dominance scoring");
    }

    let mut paired: Vec<(u64, &str)> = scores.into_iter().zip(names.iter().copied()).collect();
    paired.sort_by_key(|(score, _)| *score);
    let Some(&(_, final_meter)) = paired.last() else { return Vec::new() };

    info!(meter = final_meter, "dominance selected");
    results.iter().filter(|item| item.meter_name == final_meter).cloned().collect()
}

/// Fuzzy-path dominance: aggregate each meter's scores with
/// `exp(mean(log(score+1 if 0 else score))) - zero_count`, then keep the
/// *lowest*-aggregate meter's results — lower is closer under Levenshtein
/// distance. Not a true metric across meters, so callers should not compare
/// aggregates beyond picking the minimum.
pub fn resolve_dominant_fuzzy(
    catalog: &Catalog,
    results: &[LineScansionResultFuzzy],
) -> Vec<LineScansionResultFuzzy> {
    if results.is_empty() {
        return Vec::new();
    }
    let names = unique_meter_names(results.iter().map(|r| r.meter_name.as_str()));
    if names.is_empty() {
        return Vec::new();
    }

    let mut aggregates = Vec::with_capacity(names.len());
    for name in &names {
        let mut score_sum = 0.0f64;
        let mut subtract = 0.0f64;
        let mut count = 0.0f64;
        for item in results {
            if item.meter_name == *name {
                if item.score == 0 {
                    score_sum += ((item.score + 1) as f64).ln();
                    subtract += 1.0;
                } else {
                    score_sum += (item.score as f64).ln();
                }
                count += 1.0;
            }
        }
        let aggregate = if count > 0.0 { (score_sum / count).exp() - subtract } else { f64::INFINITY };
        aggregates.push(aggregate);
    }

    let mut paired: Vec<(f64, &str)> = aggregates.into_iter().zip(names.iter().copied()).collect();
    paired.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));
    let Some(&(_, final_meter)) = paired.first() else { return Vec::new() };

    info!(meter = final_meter, "fuzzy dominance selected");

    let meter_indices = catalog.meter_index(final_meter);
    results
        .iter()
        .filter(|item| {
            if item.id < 0 || meter_indices.is_empty() {
                item.meter_name == final_meter
            } else {
                item.id == meter_indices[0] as i64
            }
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Feet;

    fn result(meter_name: &str, feet: &str) -> LineScansionResult {
        LineScansionResult {
            original: String::new(),
            words: Vec::new(),
            word_taqti: Vec::new(),
            full_code: String::new(),
            meter_id: None,
            meter_name: meter_name.to_string(),
            meter_roman: None,
            feet: feet.to_string(),
            feet_list: Vec::<Feet>::new(),
        }
    }

    #[test]
    fn ordered_match_count_stops_at_first_failure() {
        let line = vec!["a".to_string(), "x".to_string(), "b".to_string()];
        let meter = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        assert_eq!(ordered_match_count(&line, &meter), 1);
    }

    #[test]
    fn ordered_match_count_counts_full_prefix_match() {
        let line = vec!["a".to_string(), "b".to_string()];
        let meter = vec!["a".to_string(), "b".to_string(), "c".to_string(), "d".to_string()];
        assert_eq!(ordered_match_count(&line, &meter), 2);
    }

    #[test]
    fn dominance_picks_the_higher_scoring_meter() {
        let catalog = Catalog::new();
        // "ہزج مثمن سالم" == "مفاعیلن مفاعیلن مفاعیلن مفاعیلن" (4 feet)
        let a_feet = "مفاعیلن مفاعیلن مفاعیلن مفاعیلن";
        // "متقارب مثمن سالم" == "فعولن فعولن فعولن فعولن" (4 feet)
        let b_feet = "فعولن فعولن فعولن فعولن";
        let results = vec![
            result("ہزج مثمن سالم", a_feet),
            result("ہزج مثمن سالم", a_feet),
            result("متقارب مثمن سالم", b_feet),
        ];
        let dominant = resolve_dominant(&catalog, &results);
        assert!(dominant.iter().all(|r| r.meter_name == "ہزج مثمن سالم"));
    }

    #[test]
    fn dominance_is_idempotent() {
        let catalog = Catalog::new();
        let a_feet = "مفاعیلن مفاعیلن مفاعیلن مفاعیلن";
        let results = vec![result("ہزج مثمن سالم", a_feet)];
        let once = resolve_dominant(&catalog, &results);
        let twice = resolve_dominant(&catalog, &once);
        assert_eq!(once, twice);
    }
}
