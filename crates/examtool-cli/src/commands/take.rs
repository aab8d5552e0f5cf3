//! The `examtool take` command.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use serde::Serialize;

use examtool_core::catalog::prompt_exam_kind;
use examtool_core::{grade_exam, Catalog, Console, ExamKind, Grade};

pub fn execute(exam: Option<ExamKind>, format: String) -> Result<()> {
    let mut console = Console::stdio();
    run(&mut console, exam, &format)
}

/// Select, show, grade, print the result, then wait for one last line.
fn run<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    preselected: Option<ExamKind>,
    format: &str,
) -> Result<()> {
    let catalog = Catalog::oop_course().context("built-in exam is malformed")?;

    let kind = match preselected {
        Some(kind) => kind,
        None => prompt_exam_kind(console).context("failed to read exam choice")?,
    };
    let exam = catalog.select(kind);

    writeln!(console.output(), "\nStarting the Exam...")?;
    exam.show(console)
        .with_context(|| format!("{kind} exam stopped"))?;

    writeln!(console.output(), "\nGrading the Exam...")?;
    let grade = grade_exam(exam, console).context("grading stopped")?;

    print_grade(console.output(), &grade, format)?;
    console.wait_for_exit()?;
    Ok(())
}

/// JSON shape of the result: the grade plus derived figures.
#[derive(Serialize)]
struct GradeSummary<'a> {
    #[serde(flatten)]
    grade: &'a Grade,
    correct_answers: usize,
    percentage: f64,
}

impl<'a> From<&'a Grade> for GradeSummary<'a> {
    fn from(grade: &'a Grade) -> Self {
        Self {
            grade,
            correct_answers: grade.correct_count(),
            percentage: (grade.percentage() * 1000.0).round() / 10.0,
        }
    }
}

fn print_grade<W: Write>(out: &mut W, grade: &Grade, format: &str) -> Result<()> {
    match format {
        "json" => {
            writeln!(out)?;
            let summary = GradeSummary::from(grade);
            writeln!(out, "{}", serde_json::to_string_pretty(&summary)?)?;
        }
        other => {
            if other != "text" {
                eprintln!("Unknown format: {other}, using text");
            }
            writeln!(out)?;
            writeln!(out, "{grade}")?;
        }
    }
    Ok(())
}
