use serde::{Deserialize, Serialize};

use crate::quiz_engine::grading;

// ---------------------------------------------------------------------------
// Dataset types (read-only, deserialized from library JSON)
// ---------------------------------------------------------------------------

/// One word as it appears in a textbook vocabulary list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyEntry {
    pub word: String,
    pub meaning: String,
    #[serde(default)]
    pub false_meanings: Vec<String>,
    #[serde(default)]
    pub phonetic: Option<String>,
    #[serde(default)]
    pub part_of_speech: Option<String>,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub is_phrase: bool,
    #[serde(default)]
    pub is_proper_noun: bool,
}

impl VocabularyEntry {
    /// Minimal entry with no metadata; handy for building pools in code.
    pub fn new(word: impl Into<String>, meaning: impl Into<String>) -> Self {
        VocabularyEntry {
            word: word.into(),
            meaning: meaning.into(),
            false_meanings: Vec::new(),
            phonetic: None,
            part_of_speech: None,
            unit: None,
            is_phrase: false,
            is_proper_noun: false,
        }
    }

    /// Word length in characters (not bytes).
    pub fn word_len(&self) -> usize {
        self.word.chars().count()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Textbook {
    #[serde(default)]
    pub vocabulary: Vec<VocabularyEntry>,
}

/// A whole library file: `{ "textbooks": [ { "vocabulary": [...] }, ... ] }`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VocabularyLibrary {
    #[serde(default)]
    pub textbooks: Vec<Textbook>,
}

impl VocabularyLibrary {
    /// All entries across every textbook, in file order.
    pub fn entries(&self) -> impl Iterator<Item = &VocabularyEntry> + '_ {
        self.textbooks.iter().flat_map(|t| t.vocabulary.iter())
    }

    /// Distinct unit names in encounter order.
    pub fn units(&self) -> Vec<String> {
        crate::quiz_engine::generator::list_units(self.entries())
    }
}

// ---------------------------------------------------------------------------
// Generated question
// ---------------------------------------------------------------------------

/// A single quiz item: pick the meaning, then spell the word.
///
/// Created fresh by the generator and handed over to the caller; the UI layer
/// owns `inputs`, `submitted` and `selected_option` from then on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: String,
    pub word: String,
    pub phonetic: String,
    pub unit: String,
    pub part_of_speech: String,
    pub correct_meaning: String,
    /// Correct meaning plus every false meaning, shuffled.
    pub options: Vec<String>,
    /// Position of `correct_meaning` inside `options`.
    pub correct_index: usize,
    /// One empty slot per character of `word`.
    pub inputs: Vec<String>,
    pub submitted: bool,
    pub selected_option: String,
}

impl Question {
    pub fn check_spelling<S: AsRef<str>>(&self, inputs: &[S]) -> bool {
        grading::check_spelling(&self.word, inputs)
    }

    pub fn check_meaning(&self, selected_option: &str) -> bool {
        grading::check_meaning(self, selected_option)
    }
}

// ---------------------------------------------------------------------------
// Generator / grading reports
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolStats {
    pub pool_size: usize,
    /// Questions served since the last (re)shuffle.
    pub served: usize,
    pub remaining: usize,
    /// Course/unit currently loaded, if any.
    pub course_id: Option<String>,
}

/// Per-position result of comparing spelling inputs against the word.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpellingFeedback {
    pub correct_indices: Vec<usize>,
    pub wrong_indices: Vec<usize>,
}

impl SpellingFeedback {
    pub fn all_correct(&self) -> bool {
        self.wrong_indices.is_empty()
    }
}
