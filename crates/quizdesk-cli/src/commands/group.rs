//! The `quizdesk group` commands.

use anyhow::Result;
use clap::Subcommand;
use comfy_table::{Cell, Table};

use super::Session;

#[derive(Subcommand)]
pub enum GroupCommand {
    /// Create a group from student numbers
    Create {
        /// Group identifier
        id: String,

        /// 1-based student numbers, in roster order (e.g. "1,2")
        #[arg(long, value_delimiter = ',')]
        students: Vec<usize>,
    },

    /// Insert a student into a group
    AddStudent {
        /// Group identifier
        id: String,

        /// 1-based student number
        #[arg(long)]
        student: usize,

        /// 1-based position in the group (default: append)
        #[arg(long)]
        slot: Option<usize>,
    },

    /// Remove the student at a position in a group
    RemoveStudent {
        /// Group identifier
        id: String,

        /// 1-based position in the group
        #[arg(long)]
        slot: usize,
    },

    /// Print a group's roster
    Show {
        /// Group identifier
        id: String,
    },

    /// List all groups
    List,

    /// Delete a group
    Delete {
        /// Group identifier
        id: String,
    },
}

pub fn execute(session: &Session, command: GroupCommand) -> Result<()> {
    match command {
        GroupCommand::Create { id, students } => session.update(|desk| {
            let group = desk.create_group(&id, &students)?;
            println!("Created group {} with {} student(s)", group.id(), group.len());
            Ok(())
        }),
        GroupCommand::AddStudent { id, student, slot } => session.update(|desk| {
            let slot = slot.unwrap_or_else(|| desk.group(&id).map_or(1, |group| group.len() + 1));
            desk.add_student_to_group(&id, student, slot)?;
            println!("Added student #{student} to group {id} at position {slot}");
            Ok(())
        }),
        GroupCommand::RemoveStudent { id, slot } => session.update(|desk| {
            let removed = desk.remove_student_from_group(&id, slot)?;
            println!("Removed {removed} from group {id}");
            Ok(())
        }),
        GroupCommand::Show { id } => {
            let desk = session.load_desk()?;
            let roster = desk
                .students_in_group(&id)
                .ok_or_else(|| anyhow::anyhow!("no group with identifier '{id}'"))?;
            if roster.is_empty() {
                println!("Group {id} has no students.");
            } else {
                println!("{roster}");
            }
            Ok(())
        }
        GroupCommand::List => {
            let desk = session.load_desk()?;
            if desk.groups().is_empty() {
                println!("No groups yet.");
                return Ok(());
            }

            let mut table = Table::new();
            table.set_header(vec!["Group", "Students"]);
            for group in desk.groups().iter() {
                let names: Vec<&str> = group.students().iter().map(|s| s.name.as_str()).collect();
                table.add_row(vec![Cell::new(group.id()), Cell::new(names.join(", "))]);
            }
            println!("{table}");
            Ok(())
        }
        GroupCommand::Delete { id } => session.update(|desk| match desk.remove_group(&id) {
            Some(_) => {
                println!("Deleted group {id}");
                Ok(())
            }
            None => anyhow::bail!("no group with identifier '{id}'"),
        }),
    }
}
