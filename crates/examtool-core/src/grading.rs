//! The scoring pass.

use std::fmt;
use std::io::{BufRead, Write};

use serde::{Deserialize, Serialize};

use crate::console::Console;
use crate::error::ExamError;
use crate::exam::Exam;

/// Outcome of one grading pass. Not retained after it is printed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grade {
    pub total_marks: u64,
    pub obtained_marks: u64,
    /// Whether each question, in exam order, was answered correctly.
    pub correct: Vec<bool>,
}

impl Grade {
    /// Fraction of marks obtained, in `0.0..=1.0`. Zero when nothing was at stake.
    pub fn percentage(&self) -> f64 {
        if self.total_marks == 0 {
            return 0.0;
        }
        self.obtained_marks as f64 / self.total_marks as f64
    }

    pub fn correct_count(&self) -> usize {
        self.correct.iter().filter(|c| **c).count()
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Exam Result:")?;
        writeln!(f, "Total Marks: {}", self.total_marks)?;
        write!(f, "Obtained Marks: {}", self.obtained_marks)
    }
}

/// Display every question, read one answer for each and add up the marks.
///
/// All-or-nothing per question, no early exit on a wrong answer. Any input
/// error ends the pass.
pub fn grade_exam<R: BufRead, W: Write>(
    exam: &Exam,
    console: &mut Console<R, W>,
) -> Result<Grade, ExamError> {
    let mut grade = Grade {
        total_marks: 0,
        obtained_marks: 0,
        correct: Vec::with_capacity(exam.questions().len()),
    };

    for (i, question) in exam.questions().iter().enumerate() {
        question.display(console.output())?;
        let is_correct = question.check_answer(console)?;
        tracing::debug!(question = i + 1, is_correct, marks = question.marks, "graded");

        grade.total_marks += u64::from(question.marks);
        if is_correct {
            grade.obtained_marks += u64::from(question.marks);
        }
        grade.correct.push(is_correct);
    }

    tracing::info!(
        "{} exam graded: {}/{}",
        exam.kind,
        grade.obtained_marks,
        grade.total_marks
    );
    Ok(grade)
}
