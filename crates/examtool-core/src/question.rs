//! Question model and answer checking.
//!
//! A question is a header, a body, a point value and one of a closed set of
//! answer rules. Each rule knows how to print its choices and how to parse and
//! judge a single line of input.

use std::io::{BufRead, Write};

use crate::console::Console;
use crate::error::{ExamError, InputError, QuestionError};

/// A single exam question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    /// Topic label printed above the body.
    pub header: String,
    /// The question text.
    pub body: String,
    /// Points awarded for a correct answer.
    pub marks: u32,
    kind: QuestionKind,
}

/// The answer rule of a question.
#[derive(Debug, Clone, PartialEq, Eq)]
enum QuestionKind {
    /// Answered with a boolean literal.
    TrueFalse { correct: bool },
    /// Answered with the 1-based number of one option.
    ChooseOne {
        options: Vec<String>,
        correct_index: usize,
    },
    /// Answered with a comma-separated list of 1-based option numbers; every
    /// correct option and no other must be selected.
    ChooseAll {
        options: Vec<String>,
        correct: Vec<bool>,
    },
}

impl Question {
    pub fn true_false(
        header: impl Into<String>,
        body: impl Into<String>,
        marks: u32,
        correct: bool,
    ) -> Self {
        Self {
            header: header.into(),
            body: body.into(),
            marks,
            kind: QuestionKind::TrueFalse { correct },
        }
    }

    /// Build a single-choice question. `correct_index` is 0-based.
    pub fn choose_one(
        header: impl Into<String>,
        body: impl Into<String>,
        marks: u32,
        options: Vec<String>,
        correct_index: usize,
    ) -> Result<Self, QuestionError> {
        if options.is_empty() {
            return Err(QuestionError::NoOptions);
        }
        if correct_index >= options.len() {
            return Err(QuestionError::CorrectIndexOutOfRange {
                index: correct_index,
                options: options.len(),
            });
        }
        Ok(Self {
            header: header.into(),
            body: body.into(),
            marks,
            kind: QuestionKind::ChooseOne {
                options,
                correct_index,
            },
        })
    }

    /// Build a multi-choice question. `correct` must have one entry per option.
    pub fn choose_all(
        header: impl Into<String>,
        body: impl Into<String>,
        marks: u32,
        options: Vec<String>,
        correct: Vec<bool>,
    ) -> Result<Self, QuestionError> {
        if options.is_empty() {
            return Err(QuestionError::NoOptions);
        }
        if correct.len() != options.len() {
            return Err(QuestionError::MaskLengthMismatch {
                mask: correct.len(),
                options: options.len(),
            });
        }
        Ok(Self {
            header: header.into(),
            body: body.into(),
            marks,
            kind: QuestionKind::ChooseAll { options, correct },
        })
    }

    /// Write the header, body and choices.
    pub fn display<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        writeln!(out, "{}", self.header)?;
        writeln!(out, "{}", self.body)?;
        match &self.kind {
            QuestionKind::TrueFalse { .. } => writeln!(out, "True or False?")?,
            QuestionKind::ChooseOne { options, .. } | QuestionKind::ChooseAll { options, .. } => {
                for (i, option) in options.iter().enumerate() {
                    writeln!(out, "{}. {option}", i + 1)?;
                }
            }
        }
        Ok(())
    }

    /// Read one answer line from the console and judge it.
    pub fn check_answer<R: BufRead, W: Write>(
        &self,
        console: &mut Console<R, W>,
    ) -> Result<bool, ExamError> {
        let line = console.read_line()?;
        Ok(self.evaluate(&line)?)
    }

    /// Judge one line of input against the answer key.
    pub fn evaluate(&self, input: &str) -> Result<bool, InputError> {
        match &self.kind {
            QuestionKind::TrueFalse { correct } => Ok(parse_bool(input)? == *correct),
            QuestionKind::ChooseOne { correct_index, .. } => {
                let selected = i64::from(parse_int(input)?) - 1;
                Ok(usize::try_from(selected).is_ok_and(|i| i == *correct_index))
            }
            QuestionKind::ChooseAll { options, correct } => {
                let mut selection = vec![false; options.len()];
                for piece in input.split(',') {
                    let number = i64::from(parse_int(piece)?);
                    let index = usize::try_from(number - 1)
                        .ok()
                        .filter(|i| *i < options.len())
                        .ok_or(InputError::OptionOutOfRange {
                            selected: number,
                            options: options.len(),
                        })?;
                    selection[index] = true;
                }
                Ok(selection == *correct)
            }
        }
    }
}

/// Case-insensitive `true`/`false`, surrounding whitespace ignored.
fn parse_bool(input: &str) -> Result<bool, InputError> {
    let trimmed = input.trim();
    if trimmed.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if trimmed.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(InputError::NotABoolean(input.to_string()))
    }
}

/// Parse a 32-bit integer, surrounding whitespace ignored.
pub(crate) fn parse_int(input: &str) -> Result<i32, InputError> {
    input
        .trim()
        .parse()
        .map_err(|_| InputError::NotAnInteger(input.to_string()))
}
