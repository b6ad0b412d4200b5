use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Input-shape errors surfaced by the scansion driver.
///
/// No-match is not represented here: an exact scan that finds nothing simply
/// returns an empty result list. These variants are reserved for malformed
/// input the caller must fix before re-scanning.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ScansionError {
    #[error("line has no words")]
    EmptyLine,

    #[error("word {0:?} produced no candidate scansion codes")]
    NoWords(String),

    #[error("word {word:?} has code {code:?} containing characters outside {{-,=,x}}")]
    InvalidCode { word: String, code: String },
}
