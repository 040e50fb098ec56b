//! The `quizdesk student` commands.

use anyhow::Result;
use clap::Subcommand;
use comfy_table::{Cell, Table};

use super::Session;

#[derive(Subcommand)]
pub enum StudentCommand {
    /// Add a student to the list
    Add {
        /// Student name
        name: String,
    },

    /// Rename a student (groups keep the old name)
    Edit {
        /// 1-based student number
        number: usize,
        /// New name
        name: String,
    },

    /// Remove a student from the list (groups keep their copy)
    Remove {
        /// 1-based student number
        number: usize,
    },

    /// List all students
    List,
}

pub fn execute(session: &Session, command: StudentCommand) -> Result<()> {
    match command {
        StudentCommand::Add { name } => session.update(|desk| {
            desk.add_student(name.clone())?;
            println!("Added student {} as #{}", name, desk.students().len());
            Ok(())
        }),
        StudentCommand::Edit { number, name } => session.update(|desk| {
            let old = desk.student(number)?.name.clone();
            let student = desk.rename_student(number, name.clone())?;
            println!("Renamed student #{number} from {old} to {student}");
            Ok(())
        }),
        StudentCommand::Remove { number } => session.update(|desk| {
            let student = desk.remove_student(number)?;
            println!("Removed student {student}");
            Ok(())
        }),
        StudentCommand::List => {
            let desk = session.load_desk()?;
            if desk.students().is_empty() {
                println!("No students yet. Add one with `quizdesk student add <NAME>`.");
                return Ok(());
            }

            let mut table = Table::new();
            table.set_header(vec!["#", "Name"]);
            for (i, student) in desk.students().iter().enumerate() {
                table.add_row(vec![Cell::new(i + 1), Cell::new(&student.name)]);
            }
            println!("{table}");
            Ok(())
        }
    }
}
