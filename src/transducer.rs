//! Seams for the two out-of-scope collaborators: the orthographic-to-code
//! transducer and the foot-name dictionary. Neither is a linguistic engine
//! here — just enough surface to exercise the matching engine independently.

use std::collections::HashMap;

use crate::catalog::Catalog;

/// Produces a word's alternative scansion codes. The real implementation
/// (Urdu-script analysis) is out of scope; callers supply their own or use
/// [`StaticTransducer`] for tests and the CLI demo.
pub trait CodeTransducer {
    /// Primary alternative codes for `surface`, in preference order.
    fn codes_for_word(&self, surface: &str) -> Vec<String>;

    /// Elision-graft codes: alternatives arising from this word's final
    /// vowel fusing with the next word. Empty by default.
    fn graft_codes_for_word(&self, surface: &str) -> Vec<String> {
        let _ = surface;
        Vec::new()
    }
}

/// Read-only foot-pattern-to-name lookup. [`Catalog`] already satisfies this
/// so the default path needs no separate implementation; the trait exists so
/// a caller can substitute a richer dictionary.
pub trait FootDictionary {
    fn name_for(&self, code: &str) -> Option<&str>;
}

impl FootDictionary for Catalog {
    fn name_for(&self, code: &str) -> Option<&str> {
        self.foot_name(code)
    }
}

/// An in-memory [`CodeTransducer`] built from a caller-supplied map, for
/// tests and the CLI demo. Unknown surfaces yield no codes.
#[derive(Debug, Clone, Default)]
pub struct StaticTransducer {
    codes: HashMap<String, Vec<String>>,
    grafts: HashMap<String, Vec<String>>,
}

impl StaticTransducer {
    pub fn new() -> Self {
        StaticTransducer { codes: HashMap::new(), grafts: HashMap::new() }
    }

    pub fn with_word(mut self, surface: impl Into<String>, codes: Vec<String>) -> Self {
        self.codes.insert(surface.into(), codes);
        self
    }

    pub fn with_graft(mut self, surface: impl Into<String>, graft_codes: Vec<String>) -> Self {
        self.grafts.insert(surface.into(), graft_codes);
        self
    }
}

impl CodeTransducer for StaticTransducer {
    fn codes_for_word(&self, surface: &str) -> Vec<String> {
        self.codes.get(surface).cloned().unwrap_or_default()
    }

    fn graft_codes_for_word(&self, surface: &str) -> Vec<String> {
        self.grafts.get(surface).cloned().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_transducer_round_trips_codes_and_grafts() {
        let t = StaticTransducer::new()
            .with_word("gul", vec!["==".to_string()])
            .with_graft("gul", vec!["=-".to_string()]);
        assert_eq!(t.codes_for_word("gul"), vec!["==".to_string()]);
        assert_eq!(t.graft_codes_for_word("gul"), vec!["=-".to_string()]);
    }

    #[test]
    fn static_transducer_unknown_word_yields_nothing() {
        let t = StaticTransducer::new();
        assert!(t.codes_for_word("unknown").is_empty());
        assert!(t.graft_codes_for_word("unknown").is_empty());
    }

    #[test]
    fn catalog_satisfies_foot_dictionary() {
        let catalog = Catalog::new();
        let dict: &dyn FootDictionary = &catalog;
        assert_eq!(dict.name_for("-==="), Some("مفاعیلن"));
    }
}
