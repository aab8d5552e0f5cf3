//! Error types for question construction and answer collection.
//!
//! Every answer-parsing failure is fatal: nothing in the exam flow retries or
//! re-prompts, so callers propagate these straight up to the entry point.

use thiserror::Error;

/// A line of user input that does not fit the format a question expects.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// Expected `true` or `false`.
    #[error("expected true or false, got {0:?}")]
    NotABoolean(String),

    /// Expected a whole number.
    #[error("expected a number, got {0:?}")]
    NotAnInteger(String),

    /// A multi-choice selection named an option that does not exist.
    #[error("option {selected} is out of range (1-{options})")]
    OptionOutOfRange { selected: i64, options: usize },
}

/// Errors raised while presenting or grading an exam.
#[derive(Debug, Error)]
pub enum ExamError {
    /// The user typed something that could not be parsed as an answer.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InputError),

    /// Input ended while an answer was still expected.
    #[error("input closed before an answer was given")]
    InputClosed,

    /// Reading from or writing to the console failed.
    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

impl ExamError {
    /// Returns `true` if the failure was caused by what the user typed
    /// rather than by the console itself.
    pub fn is_input_error(&self) -> bool {
        matches!(self, ExamError::InvalidInput(_) | ExamError::InputClosed)
    }
}

/// A question whose answer key does not line up with its options.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuestionError {
    /// A choice question was built without any options.
    #[error("question has no options")]
    NoOptions,

    /// The correct option index points past the end of the option list.
    #[error("correct option {index} is out of range for {options} options")]
    CorrectIndexOutOfRange { index: usize, options: usize },

    /// The correct-option mask and the option list have different lengths.
    #[error("answer mask has {mask} entries but there are {options} options")]
    MaskLengthMismatch { mask: usize, options: usize },
}
