//! The built-in OOP course and the selection step that picks an exam from it.

use std::io::{BufRead, Write};
use std::rc::Rc;

use crate::console::Console;
use crate::error::{ExamError, QuestionError};
use crate::exam::{Exam, ExamKind};
use crate::question::{parse_int, Question};

const SUBJECT: &str = "OOP Course";
const COURSE: &str = "OOP";

/// A practice and a final exam over the same questions.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub practice: Exam,
    pub final_exam: Exam,
}

impl Catalog {
    /// The three-question OOP course: 60 minutes for practice, 90 for the final.
    pub fn oop_course() -> Result<Self, QuestionError> {
        let questions: Rc<[Question]> = Rc::from(vec![
            Question::true_false(
                SUBJECT,
                "Object-oriented programming (OOP) is a programming paradigm based on the concept of objects.",
                1,
                true,
            ),
            Question::choose_one(
                SUBJECT,
                "Which of the following is NOT a principle of object-oriented programming?",
                1,
                options(&["Encapsulation", "Inheritance", "Polymorphism", "Abstraction"]),
                3,
            )?,
            Question::choose_all(
                SUBJECT,
                "Which of the following are access modifiers in C#?",
                1,
                options(&["public", "private", "protected", "internal"]),
                vec![true; 4],
            )?,
        ]);

        Ok(Self {
            practice: Exam::new(ExamKind::Practice, SUBJECT, 60, 3, Rc::clone(&questions))
                .with_course(COURSE),
            final_exam: Exam::new(ExamKind::Final, SUBJECT, 90, 3, questions).with_course(COURSE),
        })
    }

    pub fn select(&self, kind: ExamKind) -> &Exam {
        match kind {
            ExamKind::Practice => &self.practice,
            ExamKind::Final => &self.final_exam,
        }
    }

    pub fn exams(&self) -> [&Exam; 2] {
        [&self.practice, &self.final_exam]
    }
}

fn options(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Print the exam menu and read the choice. `1` is practice, any other
/// number is final, anything that is not a number is an error.
pub fn prompt_exam_kind<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> Result<ExamKind, ExamError> {
    let out = console.output();
    writeln!(out, "Select the Exam Type:")?;
    writeln!(out, "1. Practice Exam")?;
    writeln!(out, "2. Final Exam")?;
    console.prompt("Enter your choice: ")?;

    let line = console.read_line()?;
    let kind = ExamKind::from_choice(parse_int(&line)?);
    tracing::info!("selected {kind} exam");
    Ok(kind)
}
