//! `taqti` scans Urdu/Arabic-meter poetry: given one or more lines of verse as
//! prosodic codes (a string over `-` short, `=` long, `x` flexible), it finds
//! which classical meter(s) the line follows, how the line's syllables group
//! into feet, and, in fuzzy mode, the closest meter together with a minimal
//! edit script. The matching engine is a prefix tree over each line's
//! alternative scansion codes (the orthographic transducer that produces
//! those alternatives from Urdu script is out of scope — see
//! [`transducer`]), walked in exact, fuzzy, or free-verse mode; a secondary
//! state-machine tree covers "special" Hindi/Zamzama meters whose acceptance
//! is structural (morae count and terminator shape) rather than pattern
//! equality.
//!
//! # Example: exact scan
//!
//! ```rust
//! use taqti::{build_catalog, scan_line, Line, Word, ScanOptions, MeterSelection};
//!
//! let catalog = build_catalog();
//! let line = Line::new(
//!     "dil-e-nadaan tujhe hua kya hai",
//!     vec![
//!         Word::new("w1", vec!["-===".to_string()]),
//!         Word::new("w2", vec!["-===".to_string()]),
//!         Word::new("w3", vec!["-===".to_string()]),
//!         Word::new("w4", vec!["-===".to_string()]),
//!     ],
//! );
//! let options = ScanOptions { meters: MeterSelection::All, ..ScanOptions::default() };
//! let results = scan_line(&catalog, &line, &options).unwrap();
//! for hit in &results {
//!     println!("{}: {}", hit.meter_name, hit.feet);
//! }
//! ```
//!
//! # Example: fuzzy scan and correction
//!
//! ```rust
//! use taqti::{align, build_catalog, scan_line_fuzzy, Line, Word, ScanOptions, MeterSelection};
//!
//! let catalog = build_catalog();
//! let line = Line::new("near miss", vec![Word::new("w1", vec!["-==-".to_string()])]);
//! let options = ScanOptions { meters: MeterSelection::All, ..ScanOptions::default() };
//! let results = scan_line_fuzzy(&catalog, &line, &options).unwrap();
//! if let Some(closest) = results.iter().min_by_key(|r| r.score) {
//!     let alignment = align("-===", &closest.full_code);
//!     println!("{} edits to reach {}", alignment.distance, closest.meter_name);
//! }
//! ```
//!
//! # Example: resolving one meter for a whole poem
//!
//! ```rust
//! use taqti::{build_catalog, resolve_dominant, scan_line, Line, Word, ScanOptions, MeterSelection};
//!
//! let catalog = build_catalog();
//! let options = ScanOptions { meters: MeterSelection::All, ..ScanOptions::default() };
//! let mut all_results = Vec::new();
//! for _ in 0..2 {
//!     let line = Line::new("l", vec![Word::new("w1", vec!["-===".to_string()]); 4]);
//!     all_results.extend(scan_line(&catalog, &line, &options).unwrap());
//! }
//! let dominant = resolve_dominant(&catalog, &all_results);
//! assert!(!dominant.is_empty());
//! ```

pub mod aligner;
pub mod catalog;
pub mod code_tree;
pub mod dominance;
pub mod driver;
pub mod error;
pub mod feet;
pub mod model;
pub mod options;
pub mod pattern_tree;
pub mod state_machine;
pub mod transducer;

pub use aligner::{align, align_distance, Alignment, EditKind, EditOp, Leverage};
pub use catalog::Catalog;
pub use code_tree::CodeTree;
pub use dominance::{ordered_match_count, resolve_dominant, resolve_dominant_fuzzy};
pub use driver::{build_catalog, feet_of, scan_line, scan_line_fuzzy};
pub use error::ScansionError;
pub use feet::{hindi_feet, zamzama_feet};
pub use model::{
    CodeLocation, Feet, Line, LineScansionResult, LineScansionResultFuzzy, MeterId, ScanPath, Word,
};
pub use options::{MeterSelection, ScanOptions, DEFAULT_ERROR_PARAM};
pub use pattern_tree::{PatternTree, MAX_X_EXPANSIONS, SPECIAL_METER_BASE};
pub use transducer::{CodeTransducer, FootDictionary, StaticTransducer};
