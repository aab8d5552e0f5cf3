//! The `examtool list` command.

use anyhow::{Context, Result};
use comfy_table::{Cell, Table};

use examtool_core::Catalog;

pub fn execute() -> Result<()> {
    let catalog = Catalog::oop_course().context("built-in exam is malformed")?;

    let mut table = Table::new();
    table.set_header(vec![
        "Exam",
        "Subject",
        "Time",
        "Declared",
        "Questions",
        "Total Marks",
    ]);

    for exam in catalog.exams() {
        table.add_row(vec![
            Cell::new(exam.kind.title()),
            Cell::new(&exam.subject),
            Cell::new(format!("{} min", exam.time_minutes)),
            Cell::new(exam.declared_questions),
            Cell::new(exam.questions().len()),
            Cell::new(exam.total_marks()),
        ]);
    }

    println!("{table}");
    Ok(())
}
