//! Caller-facing scan configuration: one small struct with a sensible
//! `Default`.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::model::MeterId;

/// Default Levenshtein-distance ceiling for fuzzy matching.
pub const DEFAULT_ERROR_PARAM: u32 = 6;

/// Which meters a scan considers.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MeterSelection {
    /// Non-deprecated regular meters; falls back to deprecated ones only if
    /// that first pass finds nothing.
    Preferred,
    /// Every regular meter, deprecated or not.
    All,
    /// Rubaʿi meters only.
    RubaiOnly,
    /// Every regular/rubaʿi meter plus the special Hindi/Zamzama meters.
    WithSpecial,
    /// A caller-chosen explicit set.
    Explicit(Vec<MeterId>),
}

impl Default for MeterSelection {
    fn default() -> Self {
        MeterSelection::Preferred
    }
}

/// Options governing one call to `scan_line`/`scan_line_fuzzy`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScanOptions {
    /// Levenshtein distance ceiling for fuzzy matching; ignored in exact and
    /// free-verse modes.
    pub error_param: u32,
    /// Accept any candidate that is a prefix of some meter variation,
    /// instead of requiring exact or within-threshold matches.
    pub free_verse: bool,
    pub meters: MeterSelection,
}

impl Default for ScanOptions {
    fn default() -> Self {
        ScanOptions {
            error_param: DEFAULT_ERROR_PARAM,
            free_verse: false,
            meters: MeterSelection::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options_prefer_non_deprecated_meters() {
        let opts = ScanOptions::default();
        assert_eq!(opts.meters, MeterSelection::Preferred);
        assert_eq!(opts.error_param, DEFAULT_ERROR_PARAM);
        assert!(!opts.free_verse);
    }
}
