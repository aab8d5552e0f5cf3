//! Grading properties over the built-in OOP course.
//!
//! Drives show + grade through an in-memory console the same way the binary
//! drives them through stdin/stdout.

use std::io::Cursor;

use examtool_core::{grade_exam, Catalog, Console, ExamError, ExamKind, Grade};

const ALL_CORRECT: [&str; 3] = ["True", "4", "1,2,3,4"];
const ALL_WRONG: [&str; 3] = ["False", "1", "1,2,3"];

fn lines(answers: &[&str]) -> String {
    answers.iter().map(|a| format!("{a}\n")).collect()
}

fn session(kind: ExamKind, input: &str) -> (Result<Grade, ExamError>, String) {
    let catalog = Catalog::oop_course().unwrap();
    let exam = catalog.select(kind);
    let mut console = Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
    let result = exam
        .show(&mut console)
        .and_then(|_| grade_exam(exam, &mut console));
    (result, String::from_utf8(console.into_output()).unwrap())
}

#[test]
fn final_exam_all_correct_scores_three_of_three() {
    let (grade, out) = session(ExamKind::Final, &lines(&ALL_CORRECT));
    let grade = grade.unwrap();
    assert_eq!(grade.total_marks, 3);
    assert_eq!(grade.obtained_marks, 3);
    assert!(out.contains("Final Exam"));
    assert!(!out.contains("Exam Answers:"));
}

#[test]
fn practice_exam_collects_answers_twice() {
    // First pass feeds the per-question feedback, second pass is scored.
    let input = lines(&ALL_WRONG) + &lines(&ALL_CORRECT);
    let (grade, out) = session(ExamKind::Practice, &input);
    let grade = grade.unwrap();
    assert!(out.contains("Exam Answers:\nIncorrect\nIncorrect\nIncorrect\n"));
    assert_eq!(grade.obtained_marks, 3);
}

#[test]
fn practice_feedback_does_not_affect_score() {
    let input = lines(&ALL_CORRECT) + &lines(&ALL_WRONG);
    let (grade, out) = session(ExamKind::Practice, &input);
    let grade = grade.unwrap();
    assert!(out.contains("Exam Answers:\nCorrect\nCorrect\nCorrect\n"));
    assert_eq!(grade.total_marks, 3);
    assert_eq!(grade.obtained_marks, 0);
}

#[test]
fn practice_exam_with_one_pass_of_answers_runs_dry() {
    let (grade, _) = session(ExamKind::Practice, &lines(&ALL_CORRECT));
    assert!(matches!(grade, Err(ExamError::InputClosed)));
}

#[test]
fn obtained_never_exceeds_total() {
    let answers = ["True", "False"];
    let singles = ["1", "2", "3", "4", "9"];
    let multis = ["1,2,3,4", "1", "4,3", "2,2,2"];
    for tf in answers {
        for one in singles {
            for all in multis {
                let (grade, _) = session(ExamKind::Final, &lines(&[tf, one, all]));
                let grade = grade.unwrap();
                assert_eq!(grade.total_marks, 3);
                assert!(grade.obtained_marks <= grade.total_marks);

                let expected = u64::from(tf == "True")
                    + u64::from(one == "4")
                    + u64::from(all == "1,2,3,4");
                assert_eq!(grade.obtained_marks, expected, "answers {tf}/{one}/{all}");
            }
        }
    }
}

#[test]
fn out_of_range_multi_choice_is_fatal() {
    let (grade, _) = session(ExamKind::Final, &lines(&["True", "4", "1,5"]));
    let err = grade.unwrap_err();
    assert!(err.is_input_error());
    assert!(err.to_string().contains("out of range"));
}
