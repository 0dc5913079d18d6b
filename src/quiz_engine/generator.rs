//! The question generator: a shuffled pool served one word at a time.
//!
//! Words are drawn from a random permutation of the pool without repeats.
//! Once every word has been served the permutation is rebuilt, so a non-empty
//! pool never runs dry. Only an empty pool ends the stream.

use std::collections::HashSet;

use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::quiz_engine::{
    error::QuizResult,
    filter::PoolFilter,
    library::LibraryCatalog,
    models::{PoolStats, Question, VocabularyEntry},
    shuffle,
};

/// Distinct, non-empty unit names in the order they first appear.
pub fn list_units<'a, I>(entries: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a VocabularyEntry>,
{
    let mut seen = HashSet::new();
    let mut units = Vec::new();
    for unit in entries.into_iter().filter_map(|e| e.unit.as_deref()) {
        if !unit.is_empty() && seen.insert(unit) {
            units.push(unit.to_string());
        }
    }
    units
}

/// Owns the word pool for one quiz session.
///
/// Not internally synchronized: one caller drives one instance.
pub struct QuestionGenerator<R: Rng = StdRng> {
    rng: R,
    pool: Vec<VocabularyEntry>,
    /// Permutation of indices into `pool`.
    shuffled_order: Vec<usize>,
    cursor: usize,
    course_id: Option<String>,
    /// Questions issued over the generator's lifetime; feeds question ids.
    issued: u64,
}

impl QuestionGenerator<StdRng> {
    /// Generator seeded from OS entropy.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Deterministic generator: same seed and pool give the same questions.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for QuestionGenerator<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> QuestionGenerator<R> {
    pub fn with_rng(rng: R) -> Self {
        QuestionGenerator {
            rng,
            pool: Vec::new(),
            shuffled_order: Vec::new(),
            cursor: 0,
            course_id: None,
            issued: 0,
        }
    }

    /// Replace the pool with the entries accepted by `filter` and start a
    /// fresh shuffle. Returns the new pool size.
    pub fn load_pool<'a, I>(
        &mut self,
        course_id: impl Into<String>,
        entries: I,
        filter: &PoolFilter,
    ) -> usize
    where
        I: IntoIterator<Item = &'a VocabularyEntry>,
    {
        let pool: Vec<VocabularyEntry> =
            entries.into_iter().filter(|e| filter.matches(e)).cloned().collect();
        let order = shuffle::permutation(&mut self.rng, pool.len());
        let course_id = course_id.into();

        info!("Loaded {} words for {}", pool.len(), course_id);

        self.pool = pool;
        self.shuffled_order = order;
        self.cursor = 0;
        self.course_id = Some(course_id);
        self.pool.len()
    }

    /// Load a library from `catalog`, optionally narrowed to one unit.
    ///
    /// An unknown `library_id` fails with `LibraryNotFound` and leaves the
    /// current pool untouched.
    pub fn load_library(
        &mut self,
        catalog: &LibraryCatalog,
        library_id: &str,
        unit: Option<&str>,
    ) -> QuizResult<usize> {
        let library = catalog.get(library_id)?;
        let (course_id, filter) = match unit {
            Some(unit) => (format!("{library_id}/{unit}"), PoolFilter::for_unit(unit)),
            None => (library_id.to_string(), PoolFilter::default()),
        };
        Ok(self.load_pool(course_id, library.entries(), &filter))
    }

    /// Next question, or `None` if the pool is empty.
    pub fn next_question(&mut self) -> Option<Question> {
        if self.cursor >= self.shuffled_order.len() {
            if !self.shuffled_order.is_empty() {
                debug!(
                    "Reshuffling at index {} of {}",
                    self.cursor,
                    self.shuffled_order.len()
                );
            }
            self.shuffled_order = shuffle::permutation(&mut self.rng, self.pool.len());
            self.cursor = 0;
        }

        let Some(&idx) = self.shuffled_order.get(self.cursor) else {
            warn!("No available words found");
            return None;
        };
        self.cursor += 1;

        let entry = &self.pool[idx];
        let mut options = Vec::with_capacity(1 + entry.false_meanings.len());
        options.push(entry.meaning.clone());
        options.extend(entry.false_meanings.iter().cloned());
        shuffle::shuffle_in_place(&mut self.rng, &mut options);
        // `meaning` was pushed above, so it is always found.
        let correct_index = options
            .iter()
            .position(|o| *o == entry.meaning)
            .unwrap_or_default();

        self.issued += 1;
        let id = format!("Q-{:06}-{:08X}", self.issued, self.rng.next_u32());

        Some(Question {
            id,
            word: entry.word.clone(),
            phonetic: entry.phonetic.clone().unwrap_or_default(),
            unit: entry.unit.clone().unwrap_or_default(),
            part_of_speech: entry.part_of_speech.clone().unwrap_or_default(),
            correct_meaning: entry.meaning.clone(),
            options,
            correct_index,
            inputs: vec![String::new(); entry.word_len()],
            submitted: false,
            selected_option: String::new(),
        })
    }

    /// Up to `count` questions; shorter only when the pool is empty.
    pub fn next_questions(&mut self, count: usize) -> Vec<Question> {
        let mut questions = Vec::with_capacity(count);
        for _ in 0..count {
            match self.next_question() {
                Some(q) => questions.push(q),
                None => break,
            }
        }
        questions
    }

    pub fn stats(&self) -> PoolStats {
        PoolStats {
            pool_size: self.pool.len(),
            served: self.cursor,
            remaining: self.shuffled_order.len() - self.cursor,
            course_id: self.course_id.clone(),
        }
    }

    /// Start over with a new shuffle of the same pool.
    pub fn reset(&mut self) {
        self.cursor = 0;
        if !self.pool.is_empty() {
            self.shuffled_order = shuffle::permutation(&mut self.rng, self.pool.len());
        }
    }

    pub fn pool(&self) -> &[VocabularyEntry] {
        &self.pool
    }

    pub fn course_id(&self) -> Option<&str> {
        self.course_id.as_deref()
    }
}
