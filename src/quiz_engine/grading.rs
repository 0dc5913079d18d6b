//! Answer checking for the two halves of a question.

use crate::quiz_engine::models::{Question, SpellingFeedback};

/// True when `inputs` has one slot per character of `word` and the slots
/// spell it, ignoring case. A length mismatch is simply `false`.
///
/// An empty word never counts as spelled, even against empty inputs. Pools
/// built with `min_word_len: 0` can hold such entries; they are ungradable.
pub fn check_spelling<S: AsRef<str>>(word: &str, inputs: &[S]) -> bool {
    if word.is_empty() || inputs.len() != word.chars().count() {
        return false;
    }
    let typed: String = inputs.iter().map(|s| s.as_ref()).collect();
    typed.to_lowercase() == word.to_lowercase()
}

/// Compares option text, not index, so a caller that reorders `options`
/// still gets the right answer.
pub fn check_meaning(question: &Question, selected_option: &str) -> bool {
    selected_option == question.correct_meaning
}

/// Marks each input slot correct or wrong against the character at the same
/// position of `word`. Slots past the end of the word are wrong.
pub fn spelling_feedback<S: AsRef<str>>(word: &str, inputs: &[S]) -> SpellingFeedback {
    let letters: Vec<String> = word.chars().map(|c| c.to_lowercase().collect()).collect();
    let mut feedback = SpellingFeedback::default();
    for (i, input) in inputs.iter().enumerate() {
        let typed = input.as_ref().to_lowercase();
        match letters.get(i) {
            Some(expected) if *expected == typed => feedback.correct_indices.push(i),
            _ => feedback.wrong_indices.push(i),
        }
    }
    feedback
}
