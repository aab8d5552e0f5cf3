//! Exams: metadata, an ordered question list and a presentation style.

use std::fmt;
use std::io::{BufRead, Write};
use std::rc::Rc;
use std::str::FromStr;

use crate::console::Console;
use crate::error::ExamError;
use crate::question::Question;

/// How an exam presents itself before grading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExamKind {
    /// Collects answers while showing and reports correctness per question.
    Practice,
    /// Only lists the questions.
    Final,
}

impl ExamKind {
    /// Map the number typed at the selection prompt: `1` is practice,
    /// anything else is final.
    pub fn from_choice(choice: i32) -> Self {
        if choice == 1 {
            ExamKind::Practice
        } else {
            ExamKind::Final
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ExamKind::Practice => "Practice Exam",
            ExamKind::Final => "Final Exam",
        }
    }
}

impl fmt::Display for ExamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExamKind::Practice => write!(f, "practice"),
            ExamKind::Final => write!(f, "final"),
        }
    }
}

impl FromStr for ExamKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "practice" | "1" => Ok(ExamKind::Practice),
            "final" | "2" => Ok(ExamKind::Final),
            other => Err(format!("unknown exam kind: {other}")),
        }
    }
}

/// An exam over a shared, read-only list of questions.
#[derive(Debug, Clone)]
pub struct Exam {
    pub subject: String,
    /// Short course name used in the welcome line. Defaults to `subject`.
    pub course: String,
    /// Allotted time in minutes. Shown in the banner, never enforced.
    pub time_minutes: u32,
    /// Question count shown in the banner. Not checked against `questions`.
    pub declared_questions: u32,
    pub kind: ExamKind,
    questions: Rc<[Question]>,
}

impl Exam {
    pub fn new(
        kind: ExamKind,
        subject: impl Into<String>,
        time_minutes: u32,
        declared_questions: u32,
        questions: Rc<[Question]>,
    ) -> Self {
        let subject = subject.into();
        let exam = Self {
            course: subject.clone(),
            subject,
            time_minutes,
            declared_questions,
            kind,
            questions,
        };
        if exam.declared_questions as usize != exam.questions.len() {
            tracing::warn!(
                "{} exam declares {} questions but has {}",
                exam.kind,
                exam.declared_questions,
                exam.questions.len()
            );
        }
        exam
    }

    pub fn with_course(mut self, course: impl Into<String>) -> Self {
        self.course = course.into();
        self
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Sum of the marks of every question.
    pub fn total_marks(&self) -> u64 {
        self.questions.iter().map(|q| u64::from(q.marks)).sum()
    }

    /// Print the banner and the questions. Practice exams then read one
    /// answer per question and say whether it was right.
    pub fn show<R: BufRead, W: Write>(&self, console: &mut Console<R, W>) -> Result<(), ExamError> {
        let out = console.output();
        // The reference transcript's author credit after the course name is not printed.
        writeln!(out, "Welcome To {} Exams", self.course)?;
        writeln!(out, "Subject: {}", self.subject)?;
        writeln!(out, "Time: {} minutes", self.time_minutes)?;
        writeln!(out, "Number of Questions: {}", self.declared_questions)?;
        writeln!(out, "{}", self.kind.title())?;

        writeln!(out)?;
        writeln!(out, "Exam Questions:")?;
        for question in self.questions.iter() {
            question.display(out)?;
        }

        if self.kind == ExamKind::Practice {
            writeln!(console.output(), "\nExam Answers:")?;
            for question in self.questions.iter() {
                let verdict = if question.check_answer(console)? {
                    "Correct"
                } else {
                    "Incorrect"
                };
                writeln!(console.output(), "{verdict}")?;
            }
        }

        Ok(())
    }
}
