//! CLI integration tests using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;

fn examtool() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("examtool").unwrap()
}

#[test]
fn practice_exam_gives_feedback_then_grades() {
    examtool()
        .write_stdin("1\nTrue\n4\n1,2,3,4\nTrue\n4\n1,2,3,4\n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Enter your choice: "))
        .stdout(predicate::str::contains("Welcome To OOP Exams"))
        .stdout(predicate::str::contains("Practice Exam"))
        .stdout(predicate::str::contains("Time: 60 minutes"))
        .stdout(predicate::str::contains("Exam Answers:\nCorrect\nCorrect\nCorrect"))
        .stdout(predicate::str::contains("Grading the Exam..."))
        .stdout(predicate::str::contains("Total Marks: 3\nObtained Marks: 3"));
}

#[test]
fn final_exam_grades_without_feedback() {
    examtool()
        .arg("take")
        .write_stdin("2\nFalse\n1\n1,2,3\n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Final Exam"))
        .stdout(predicate::str::contains("Time: 90 minutes"))
        .stdout(predicate::str::contains("Exam Answers:").not())
        .stdout(predicate::str::contains("Total Marks: 3\nObtained Marks: 0"));
}

#[test]
fn any_other_number_selects_final() {
    examtool()
        .write_stdin("42\nTrue\n4\n1,2,3,4\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Final Exam"))
        .stdout(predicate::str::contains("Obtained Marks: 3"));
}

#[test]
fn non_numeric_choice_fails() {
    examtool()
        .write_stdin("practice\n")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error"))
        .stderr(predicate::str::contains("expected a number"));
}

#[test]
fn malformed_answer_fails() {
    examtool()
        .write_stdin("2\nyes\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected true or false"));
}

#[test]
fn preselected_exam_with_json_result() {
    examtool()
        .args(["take", "--exam", "final", "--format", "json"])
        .write_stdin("True\n4\n1,2\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Select the Exam Type:").not())
        .stdout(predicate::str::contains("\"total_marks\": 3"))
        .stdout(predicate::str::contains("\"obtained_marks\": 2"))
        .stdout(predicate::str::contains("\"correct_answers\": 2"))
        .stdout(predicate::str::contains("\"percentage\": 66.7"));
}

#[test]
fn unknown_exam_kind_is_rejected() {
    examtool()
        .args(["take", "--exam", "midterm"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown exam kind"));
}

#[test]
fn list_shows_both_exams() {
    examtool()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Practice Exam"))
        .stdout(predicate::str::contains("Final Exam"))
        .stdout(predicate::str::contains("OOP Course"))
        .stdout(predicate::str::contains("90 min"));
}
