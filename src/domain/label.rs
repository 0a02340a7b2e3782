// ============================================================
// Layer 3 — Binary Sentiment Label
// ============================================================
// After preprocessing, a sentiment is one of exactly two values.
// Storing it as an enum instead of a string or a raw integer
// means a row can never hold anything other than 0 or 1.
//
//   "happiness"  →  Positive  →  1
//   "sadness"    →  Negative  →  0
//
// Reference: Rust Book §6 (Enums and Pattern Matching)

use std::fmt;

/// The encoded sentiment of a preprocessed row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryLabel {
    /// The first configured label, encoded as 1
    Positive,
    /// The second configured label, encoded as 0
    Negative,
}

impl BinaryLabel {
    pub fn as_int(self) -> u8 {
        match self {
            BinaryLabel::Positive => 1,
            BinaryLabel::Negative => 0,
        }
    }
}

impl fmt::Display for BinaryLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_int())
    }
}

/// Which columns to use and which two label strings to keep.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelConfig {
    /// Identifier column, dropped during preprocessing
    pub id_column:    String,
    /// Categorical column holding the sentiment string
    pub label_column: String,
    /// Label string mapped to 1
    pub positive:     String,
    /// Label string mapped to 0
    pub negative:     String,
}

impl LabelConfig {
    /// Encode a raw label string, or `None` if it is outside the label set.
    /// Matching is exact: no trimming, no case folding.
    pub fn encode(&self, raw: &str) -> Option<BinaryLabel> {
        if raw == self.positive {
            Some(BinaryLabel::Positive)
        } else if raw == self.negative {
            Some(BinaryLabel::Negative)
        } else {
            None
        }
    }
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            id_column:    "tweet_id".to_string(),
            label_column: "sentiment".to_string(),
            positive:     "happiness".to_string(),
            negative:     "sadness".to_string(),
        }
    }
}
