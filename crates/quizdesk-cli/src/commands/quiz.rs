//! The `quizdesk quiz` commands.

use std::path::PathBuf;

use anyhow::Result;
use clap::Subcommand;
use comfy_table::{Cell, Table};
use rand::rngs::StdRng;
use rand::SeedableRng;

use quizdesk_core::QuestionFilter;

use super::{parse_filter, Session};
use crate::config::ExportFormat;

#[derive(Subcommand)]
pub enum QuizCommand {
    /// Create a quiz from bank question numbers
    Create {
        /// Quiz identifier
        id: String,

        /// 1-based question numbers, in quiz order (e.g. "1,3,4")
        #[arg(long, value_delimiter = ',', required = true)]
        questions: Vec<usize>,
    },

    /// Create a quiz from a random selection of bank questions
    Auto {
        /// Quiz identifier
        id: String,

        /// Number of questions to draw
        #[arg(long)]
        count: usize,

        /// Draw only from one type: open, mcq, all
        #[arg(long = "type", value_parser = parse_filter)]
        filter: Option<QuestionFilter>,

        /// Seed for a reproducible draw
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Print a quiz with its answer key
    Show {
        /// Quiz identifier
        id: String,
    },

    /// List all quizzes
    List,

    /// Insert a bank question into a quiz
    AddQuestion {
        /// Quiz identifier
        id: String,

        /// 1-based bank question number
        #[arg(long)]
        question: usize,

        /// 1-based position in the quiz (default: append)
        #[arg(long)]
        slot: Option<usize>,
    },

    /// Remove the question at a position in a quiz
    RemoveQuestion {
        /// Quiz identifier
        id: String,

        /// 1-based position in the quiz
        #[arg(long)]
        slot: usize,
    },

    /// Delete a quiz
    Delete {
        /// Quiz identifier
        id: String,
    },

    /// Write a quiz to a file
    Export {
        /// Quiz identifier
        id: String,

        /// Output format: html, text
        #[arg(long, value_enum)]
        format: Option<ExportFormat>,

        /// Output directory
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

pub fn execute(session: &Session, command: QuizCommand) -> Result<()> {
    match command {
        QuizCommand::Create { id, questions } => session.update(|desk| {
            let quiz = desk.create_quiz_manually(&id, &questions)?;
            println!("Created quiz {} with {} question(s)", quiz.id(), quiz.len());
            Ok(())
        }),
        QuizCommand::Auto {
            id,
            count,
            filter,
            seed,
        } => {
            let filter = match filter {
                Some(filter) => filter,
                None => session.config.question_filter()?,
            };
            session.update(|desk| {
                let quiz = match seed {
                    Some(seed) => {
                        let mut rng = StdRng::seed_from_u64(seed);
                        desk.create_quiz_automatically(&id, count, filter, &mut rng)?
                    }
                    None => desk.create_quiz_automatically(&id, count, filter, &mut rand::rng())?,
                };
                if quiz.len() < count {
                    println!(
                        "Only {} {filter} question(s) available; using all of them.",
                        quiz.len()
                    );
                }
                println!("Created quiz {} with {} question(s)", quiz.id(), quiz.len());
                Ok(())
            })
        }
        QuizCommand::Show { id } => {
            let desk = session.load_desk()?;
            let text = desk
                .questions_and_answers(&id)
                .ok_or_else(|| anyhow::anyhow!("no quiz with identifier '{id}'"))?;
            print!("{text}");
            Ok(())
        }
        QuizCommand::List => {
            let desk = session.load_desk()?;
            if desk.quizzes().is_empty() {
                println!("No quizzes yet.");
                return Ok(());
            }

            let mut table = Table::new();
            table.set_header(vec!["Quiz", "Questions", "Created"]);
            for quiz in desk.quizzes().iter() {
                table.add_row(vec![
                    Cell::new(quiz.id()),
                    Cell::new(quiz.len()),
                    Cell::new(quiz.created_at().format("%Y-%m-%d %H:%M")),
                ]);
            }
            println!("{table}");
            Ok(())
        }
        QuizCommand::AddQuestion { id, question, slot } => session.update(|desk| {
            let slot = slot.unwrap_or_else(|| desk.quiz(&id).map_or(1, |quiz| quiz.len() + 1));
            desk.add_quiz_question(&id, question, slot)?;
            println!("Added question #{question} to quiz {id} at position {slot}");
            Ok(())
        }),
        QuizCommand::RemoveQuestion { id, slot } => session.update(|desk| {
            match desk.remove_quiz_question(&id, slot)? {
                Some(removed) => {
                    println!("Removed \"{}\" from quiz {id}", removed.prompt());
                    Ok(())
                }
                None => anyhow::bail!("no quiz with identifier '{id}'"),
            }
        }),
        QuizCommand::Delete { id } => session.update(|desk| match desk.remove_quiz(&id) {
            Some(_) => {
                println!("Deleted quiz {id}");
                Ok(())
            }
            None => anyhow::bail!("no quiz with identifier '{id}'"),
        }),
        QuizCommand::Export { id, format, output } => {
            let desk = session.load_desk()?;
            let quiz = desk
                .quiz(&id)
                .ok_or_else(|| anyhow::anyhow!("no quiz with identifier '{id}'"))?;
            let dir = output.unwrap_or_else(|| session.config.export_dir.clone());

            let path = match format.unwrap_or(session.config.default_export_format) {
                ExportFormat::Html => quizdesk_export::html::write_html_export(quiz, &dir)?,
                ExportFormat::Text => quizdesk_export::text::write_text_export(quiz, &dir)?,
            };
            println!("Exported quiz {id} to {}", path.display());
            Ok(())
        }
    }
}
