//! Pool eligibility rules.
//!
//! The default filter keeps single words of at least three letters and drops
//! phrases and proper nouns. Narrowing to a unit is optional.

use serde::{Deserialize, Serialize};

use crate::quiz_engine::models::VocabularyEntry;

pub const DEFAULT_MIN_WORD_LEN: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PoolFilter {
    pub min_word_len: usize,
    pub include_phrases: bool,
    pub include_proper_nouns: bool,
    /// Only keep entries whose `unit` equals this name.
    pub unit: Option<String>,
}

impl Default for PoolFilter {
    fn default() -> Self {
        PoolFilter {
            min_word_len: DEFAULT_MIN_WORD_LEN,
            include_phrases: false,
            include_proper_nouns: false,
            unit: None,
        }
    }
}

impl PoolFilter {
    /// Default rules restricted to one unit.
    pub fn for_unit(unit: impl Into<String>) -> Self {
        PoolFilter { unit: Some(unit.into()), ..Self::default() }
    }

    pub fn matches(&self, entry: &VocabularyEntry) -> bool {
        if entry.word_len() < self.min_word_len {
            return false;
        }
        if entry.is_phrase && !self.include_phrases {
            return false;
        }
        if entry.is_proper_noun && !self.include_proper_nouns {
            return false;
        }
        match &self.unit {
            Some(unit) => entry.unit.as_deref() == Some(unit.as_str()),
            None => true,
        }
    }
}
