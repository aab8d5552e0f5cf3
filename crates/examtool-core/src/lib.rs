//! examtool-core — question model, exam presentation, and grading.
//!
//! Questions and exams are closed sets of variants dispatched with `match`.
//! All console interaction goes through [`console::Console`] so a full exam
//! session can be replayed from an in-memory transcript.

pub mod catalog;
pub mod console;
pub mod error;
pub mod exam;
pub mod grading;
pub mod question;

pub use catalog::Catalog;
pub use console::Console;
pub use error::{ExamError, InputError, QuestionError};
pub use exam::{Exam, ExamKind};
pub use grading::{grade_exam, Grade};
pub use question::Question;
