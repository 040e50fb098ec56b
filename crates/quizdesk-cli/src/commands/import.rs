//! The `quizdesk import` command.

use std::path::PathBuf;

use anyhow::Result;

use quizdesk_core::parser::load_banks;
use quizdesk_core::DeskError;

use super::Session;

pub fn execute(session: &Session, bank_path: PathBuf) -> Result<()> {
    let banks = load_banks(&bank_path)?;

    session.update(|desk| {
        for bank in banks {
            let questions = bank.questions.len();
            let mut students = 0;
            let mut skipped = 0;

            for question in bank.questions {
                desk.add_question(question);
            }
            for student in bank.students {
                match desk.add_student(student.name) {
                    Ok(_) => students += 1,
                    Err(DeskError::DuplicateRejected { id, .. }) => {
                        tracing::debug!(student = %id, "already on the student list");
                        skipped += 1;
                    }
                    Err(e) => return Err(e.into()),
                }
            }

            println!(
                "Imported {questions} question(s) and {students} student(s) from {}",
                bank.name
            );
            if skipped > 0 {
                println!("Skipped {skipped} student(s) already on the list");
            }
        }

        println!(
            "Bank now holds {} question(s); {} student(s) on the list.",
            desk.questions().len(),
            desk.students().len()
        );
        Ok(())
    })
}
