use thiserror::Error;

/// Errors surfaced by library loading and leaderboard storage.
///
/// An empty pool is not an error: [`QuestionGenerator::next_question`]
/// returns `None` instead.
///
/// [`QuestionGenerator::next_question`]: crate::QuestionGenerator::next_question
#[derive(Error, Debug)]
pub enum QuizError {
    #[error("library not found: {0}")]
    LibraryNotFound(String),

    #[error("unknown grade: {0}")]
    UnknownGrade(String),

    #[error("malformed JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

pub type QuizResult<T> = Result<T, QuizError>;
