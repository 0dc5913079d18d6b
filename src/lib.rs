//! # vocab_drill_gen
//!
//! Offline vocabulary quiz engine for textbook word lists.
//!
//! Each question shows an English word and asks for two things: pick its
//! meaning from a shuffled list of options, then spell it letter by letter.
//! Words come from a pool built out of one textbook library (optionally one
//! unit of it) and are served in random order without repeats. When the pool
//! has been used up it is reshuffled, so a session can run indefinitely.
//!
//! ## How it works
//!
//! 1. Load library JSON files (`{ "textbooks": [ { "vocabulary": [...] } ] }`)
//!    into a [`LibraryCatalog`].
//! 2. Create a [`QuestionGenerator`] (entropy-seeded, or `with_seed` for
//!    reproducible runs) and call [`QuestionGenerator::load_library`] with a
//!    library id and optional unit.
//! 3. Call [`QuestionGenerator::next_question`] as often as needed and grade
//!    answers with [`check_meaning`] and [`check_spelling`].
//! 4. Optionally record the session result on a [`Leaderboard`].
//!
//! ## Quick start
//!
//! ```rust
//! use vocab_drill_gen::{check_spelling, LibraryCatalog, QuestionGenerator};
//!
//! let mut catalog = LibraryCatalog::new();
//! catalog.load_json("PEP_2022_grade7_up", r#"{ "textbooks": [ { "vocabulary": [
//!     { "word": "apple", "meaning": "苹果", "false_meanings": ["香蕉", "橙子"], "unit": "Unit 1" }
//! ] } ] }"#).unwrap();
//!
//! let mut generator = QuestionGenerator::with_seed(42);
//! generator.load_library(&catalog, "PEP_2022_grade7_up", Some("Unit 1")).unwrap();
//!
//! let q = generator.next_question().expect("pool is not empty");
//! assert_eq!(q.options[q.correct_index], q.correct_meaning);
//! assert!(q.check_meaning("苹果"));
//! assert!(check_spelling(&q.word, &["A", "p", "p", "l", "e"]));
//! ```

pub mod leaderboard;
pub mod quiz_engine;

// Convenience re-exports so callers can use `vocab_drill_gen::QuestionGenerator`
// directly without reaching into `quiz_engine::`.
pub use leaderboard::{
    hash_to_color, initials_from_name, intl_rank_text, JsonFileStore, KeyValueStore,
    Leaderboard, LeaderboardEntry, LeaderboardUser, MemoryStore, RankInfo, ScoreSubmission,
    SubmitOutcome,
};
pub use quiz_engine::{
    books_for_grade, check_meaning, check_spelling, list_units, spelling_feedback, BookInfo,
    Grade, LibraryCatalog, PoolFilter, PoolStats, Question, QuestionGenerator, QuizError,
    QuizResult, SpellingFeedback, Textbook, VocabularyEntry, VocabularyLibrary,
};
