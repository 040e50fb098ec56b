//! End-to-end library workflow: bank import, assembly, groups, persistence,
//! and export, without going through the binary.

use std::path::Path;

use quizdesk_core::parser::parse_bank_str;
use quizdesk_core::sampling::SequenceSource;
use quizdesk_core::{DeskError, QuestionFilter, StudyDesk};

const BANK: &str = r#"[bank]
name = "Workflow"

[[questions]]
prompt = "Q1"
answer = "A1"

[[questions]]
prompt = "Q2"
answer = "B"
type = "mcq"
options = ["w", "x", "y", "z"]

[[questions]]
prompt = "Q3"
answer = "A3"

[[questions]]
prompt = "Q4"
answer = "A4"

[[questions]]
prompt = "Q5"
answer = "D"
type = "mcq"
options = ["w", "x", "y", "z"]

[[students]]
name = "Alice"

[[students]]
name = "Bob"

[[students]]
name = "Carol"
"#;

fn imported() -> StudyDesk {
    let bank = parse_bank_str(BANK, Path::new("workflow.toml")).unwrap();
    let mut desk = StudyDesk::new();
    for question in bank.questions {
        desk.add_question(question);
    }
    for student in bank.students {
        desk.add_student(student.name).unwrap();
    }
    desk
}

fn prompts(desk: &StudyDesk, quiz_id: &str) -> Vec<String> {
    desk.quiz(quiz_id)
        .unwrap()
        .questions()
        .iter()
        .map(|q| q.prompt().to_string())
        .collect()
}

#[test]
fn full_session_survives_reload() {
    let mut desk = imported();

    desk.create_quiz_manually("Manual", &[1, 3]).unwrap();
    assert!(desk
        .questions_and_answers("Manual")
        .unwrap()
        .contains("1. Q1\n\n2. Q3\n\n"));

    // Draws land on positions 4, 1, 2 of the five-question pool
    let mut source = SequenceSource::new([4, 0, 0]);
    desk.create_quiz_automatically("Random", 3, QuestionFilter::All, &mut source)
        .unwrap();
    assert_eq!(prompts(&desk, "Random"), ["Q5", "Q2", "Q3"]);

    // Open pool has three questions; asking for four takes all in bank order
    desk.create_quiz_automatically(
        "Open",
        4,
        QuestionFilter::OpenEnded,
        &mut SequenceSource::default(),
    )
    .unwrap();
    assert_eq!(prompts(&desk, "Open"), ["Q1", "Q3", "Q4"]);

    desk.add_quiz_question("Manual", 2, 1).unwrap();
    assert_eq!(prompts(&desk, "Manual"), ["Q2", "Q1", "Q3"]);

    desk.create_group("Tutorial", &[2, 1]).unwrap();
    desk.add_student_to_group("Tutorial", 3, 2).unwrap();
    assert_eq!(
        desk.students_in_group("Tutorial").unwrap(),
        "1. Bob\n2. Carol\n3. Alice"
    );

    // Bank edits never reach existing quizzes
    desk.delete_question(1).unwrap();
    assert_eq!(prompts(&desk, "Manual"), ["Q2", "Q1", "Q3"]);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("desk.json");
    desk.save_json(&path).unwrap();
    let reloaded = StudyDesk::load_json(&path).unwrap();

    assert_eq!(reloaded.questions().len(), 4);
    assert_eq!(prompts(&reloaded, "Manual"), ["Q2", "Q1", "Q3"]);
    assert_eq!(reloaded.quizzes().index_of("Random"), Some(1));
    assert_eq!(
        reloaded.quiz("Manual").unwrap().questions()[0].id(),
        desk.quiz("Manual").unwrap().questions()[0].id()
    );
    assert_eq!(
        reloaded.students_in_group("Tutorial"),
        desk.students_in_group("Tutorial")
    );
}

#[test]
fn failures_leave_desk_unchanged() {
    let mut desk = imported();

    assert!(matches!(
        desk.create_quiz_manually("Bad", &[1, 6]),
        Err(DeskError::IndexOutOfRange { index: 6, len: 5, .. })
    ));
    assert!(matches!(
        desk.create_quiz_manually("Twice", &[2, 2]),
        Err(DeskError::DuplicateRejected { .. })
    ));
    assert!(desk.quizzes().is_empty());

    desk.create_quiz_manually("Q", &[1]).unwrap();
    assert!(matches!(
        desk.create_quiz_manually("Q", &[2]),
        Err(DeskError::DuplicateIdentifier { .. })
    ));
    assert!(desk
        .add_quiz_question("Missing", 1, 1)
        .unwrap_err()
        .is_not_found());
    assert_eq!(desk.remove_quiz_question("Missing", 1).unwrap(), None);
    assert_eq!(prompts(&desk, "Q"), ["Q1"]);
}

#[test]
fn exports_match_the_quiz() {
    let mut desk = imported();
    desk.create_quiz_manually("Export Me", &[2, 4]).unwrap();
    let quiz = desk.quiz("Export Me").unwrap();

    let dir = tempfile::tempdir().unwrap();
    let text_path = quizdesk_export::text::write_text_export(quiz, dir.path()).unwrap();
    assert_eq!(
        std::fs::read_to_string(text_path).unwrap(),
        desk.questions_and_answers("Export Me").unwrap()
    );

    let html_path = quizdesk_export::html::write_html_export(quiz, dir.path()).unwrap();
    let html = std::fs::read_to_string(html_path).unwrap();
    assert!(html.contains("<li>y</li>"));
    assert!(html.contains("<li>A4</li>"));
}
