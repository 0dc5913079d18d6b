//! Core quiz engine: vocabulary pools, question generation and grading.
//!
//! ## Module overview
//!
//! | Module      | Purpose |
//! |-------------|---------|
//! | `models`    | Dataset entries, libraries, generated questions, stats |
//! | `filter`    | Which entries are eligible for a pool |
//! | `shuffle`   | Fisher-Yates shuffling over an injected RNG |
//! | `library`   | Library catalog, JSON loading, grade → textbook shelf |
//! | `generator` | `QuestionGenerator`: shuffled pool with reshuffle on exhaustion |
//! | `grading`   | Spelling and meaning checks |
//! | `error`     | `QuizError` and `QuizResult` |

pub mod error;
pub mod filter;
pub mod generator;
pub mod grading;
pub mod library;
pub mod models;
pub mod shuffle;

// Re-export the public API surface so callers can use
// `quiz_engine::QuestionGenerator` without reaching into sub-modules.
pub use error::{QuizError, QuizResult};
pub use filter::PoolFilter;
pub use generator::{list_units, QuestionGenerator};
pub use grading::{check_meaning, check_spelling, spelling_feedback};
pub use library::{books_for_grade, BookInfo, Grade, LibraryCatalog};
pub use models::{
    PoolStats, Question, SpellingFeedback, Textbook, VocabularyEntry, VocabularyLibrary,
};
