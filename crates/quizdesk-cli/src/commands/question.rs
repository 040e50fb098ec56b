//! The `quizdesk question` commands.

use anyhow::Result;
use clap::Subcommand;
use comfy_table::{Cell, Table};

use quizdesk_core::{Options, Question, QuestionFilter};

use super::{parse_filter, Session};

#[derive(Subcommand)]
pub enum QuestionCommand {
    /// Add a question to the bank
    Add {
        #[arg(long)]
        prompt: String,

        #[arg(long)]
        answer: String,

        /// Four options A to D make it multiple choice (repeat the flag)
        #[arg(long = "option")]
        options: Vec<String>,
    },

    /// Replace a question, keeping whatever is not given
    Edit {
        /// 1-based question number
        number: usize,

        #[arg(long)]
        prompt: Option<String>,

        #[arg(long)]
        answer: Option<String>,

        /// New options A to D (repeat the flag)
        #[arg(long = "option")]
        options: Vec<String>,
    },

    /// Delete a question from the bank
    Delete {
        /// 1-based question number
        number: usize,
    },

    /// List questions in the bank
    List {
        /// Only list one type: open, mcq, all
        #[arg(long = "type", value_parser = parse_filter)]
        filter: Option<QuestionFilter>,
    },
}

pub fn execute(session: &Session, command: QuestionCommand) -> Result<()> {
    match command {
        QuestionCommand::Add {
            prompt,
            answer,
            options,
        } => {
            let question = build_question(prompt, answer, options)?;
            session.update(|desk| {
                desk.add_question(question);
                println!("Added question #{}", desk.questions().len());
                Ok(())
            })
        }
        QuestionCommand::Edit {
            number,
            prompt,
            answer,
            options,
        } => session.update(|desk| {
            let current = desk.question(number)?;
            let prompt = prompt.unwrap_or_else(|| current.prompt().to_string());
            let answer = answer.unwrap_or_else(|| current.answer().to_string());
            let question = match (options.is_empty(), current.options()) {
                (true, Some(kept)) => Question::multiple_choice(prompt, answer, kept.clone()),
                _ => build_question(prompt, answer, options)?,
            };

            desk.replace_question(number, question)?;
            println!("Updated question #{number}");
            Ok(())
        }),
        QuestionCommand::Delete { number } => session.update(|desk| {
            let removed = desk.delete_question(number)?;
            println!("Deleted question #{number}: {}", removed.prompt());
            Ok(())
        }),
        QuestionCommand::List { filter } => {
            let filter = match filter {
                Some(filter) => filter,
                None => session.config.question_filter()?,
            };
            let desk = session.load_desk()?;

            let mut table = Table::new();
            table.set_header(vec!["#", "Type", "Prompt", "Answer"]);
            let mut shown = 0;
            for (i, question) in desk.questions().iter().enumerate() {
                if !filter.matches(question) {
                    continue;
                }
                let kind = if question.is_multiple_choice() {
                    "mcq"
                } else {
                    "open"
                };
                table.add_row(vec![
                    Cell::new(i + 1),
                    Cell::new(kind),
                    Cell::new(question.prompt()),
                    Cell::new(question.answer()),
                ]);
                shown += 1;
            }

            if shown == 0 && filter == QuestionFilter::All {
                println!("No questions in the bank.");
            } else if shown == 0 {
                println!("No {filter} questions in the bank.");
            } else {
                println!("{table}");
            }
            Ok(())
        }
    }
}

/// An open question, or multiple choice when exactly four options are given.
fn build_question(prompt: String, answer: String, options: Vec<String>) -> Result<Question> {
    if options.is_empty() {
        return Ok(Question::open_ended(prompt, answer));
    }

    let [a, b, c, d]: [String; 4] = options
        .try_into()
        .map_err(|_| anyhow::anyhow!("options A to D are necessary for mcq questions"))?;
    Ok(Question::multiple_choice(
        prompt,
        answer,
        Options { a, b, c, d },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_options_make_mcq() {
        let q = build_question(
            "Pick".into(),
            "B".into(),
            vec!["w".into(), "x".into(), "y".into(), "z".into()],
        )
        .unwrap();
        assert_eq!(q.options().unwrap().d, "z");

        let q = build_question("Why?".into(), "Because".into(), vec![]).unwrap();
        assert!(!q.is_multiple_choice());
    }

    #[test]
    fn wrong_option_count_rejected() {
        let err = build_question("Pick".into(), "A".into(), vec!["only".into()]).unwrap_err();
        assert!(err.to_string().contains("options A to D"));
    }
}
