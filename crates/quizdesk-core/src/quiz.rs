//! Quizzes and the quiz record.
//!
//! A quiz holds snapshots of questions taken from the bank when it was
//! assembled. It never reads the bank again, so editing or deleting a bank
//! question does not change a quiz that already contains it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Collection, DeskError, Result};
use crate::model::{Question, QuestionId};
use crate::registry::{Identified, Registry};

/// All quizzes, in creation order, looked up by identifier.
pub type QuizRecord = Registry<Quiz>;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quiz {
    id: String,
    #[serde(default)]
    questions: Vec<Question>,
    created_at: DateTime<Utc>,
}

impl Identified for Quiz {
    const COLLECTION: Collection = Collection::Quiz;

    fn identifier(&self) -> &str {
        &self.id
    }
}

impl Quiz {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            questions: Vec::new(),
            created_at: Utc::now(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn contains(&self, id: QuestionId) -> bool {
        self.questions.iter().any(|q| q.id() == id)
    }

    /// The question at 1-based `slot`.
    pub fn question(&self, slot: usize) -> Result<&Question> {
        let offset = Collection::Quiz.offset(slot, self.questions.len())?;
        Ok(&self.questions[offset])
    }

    /// Append a question unless it is already in the quiz.
    pub fn push_question(&mut self, question: Question) -> Result<()> {
        let slot = self.questions.len() + 1;
        self.insert_question(slot, question)
    }

    /// Insert a question at 1-based `slot`. Later questions shift back by
    /// one; nothing is overwritten.
    pub fn insert_question(&mut self, slot: usize, question: Question) -> Result<()> {
        let offset = Collection::Quiz.insert_offset(slot, self.questions.len())?;
        if self.contains(question.id()) {
            return Err(DeskError::DuplicateRejected {
                collection: Collection::Quiz,
                id: self.id.clone(),
            });
        }
        self.questions.insert(offset, question);
        Ok(())
    }

    /// Remove the question at 1-based `slot`.
    pub fn remove_question(&mut self, slot: usize) -> Result<Question> {
        let offset = Collection::Quiz.offset(slot, self.questions.len())?;
        Ok(self.questions.remove(offset))
    }

    /// Numbered question sheet, with lettered options for multiple choice.
    pub fn formatted_questions(&self) -> String {
        let mut out = format!("{}.\n\nQuestions:\n", self.id);
        for (i, question) in self.questions.iter().enumerate() {
            out.push_str(&format!("{}. {}\n", i + 1, question.prompt()));
            if let Some(options) = question.options() {
                for (letter, text) in options.labelled() {
                    out.push_str(&format!("{letter}. {text}\n"));
                }
            }
            out.push('\n');
        }
        out
    }

    /// Numbered answer key for the quiz owner.
    pub fn formatted_answers(&self) -> String {
        let mut out = String::from("Answers [Teacher's Copy]:\n");
        for (i, question) in self.questions.iter().enumerate() {
            out.push_str(&format!("{}. {}\n\n", i + 1, question.answer()));
        }
        out
    }

    pub fn questions_and_answers(&self) -> String {
        self.formatted_questions() + &self.formatted_answers()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Options;

    fn quiz_with(prompts: &[&str]) -> Quiz {
        let mut quiz = Quiz::new("Midterm");
        for prompt in prompts {
            quiz.push_question(Question::open_ended(*prompt, format!("ans {prompt}")))
                .unwrap();
        }
        quiz
    }

    #[test]
    fn insert_at_slot_shifts() {
        let mut quiz = quiz_with(&["one", "three"]);
        quiz.insert_question(2, Question::open_ended("two", "2"))
            .unwrap();
        let prompts: Vec<_> = quiz.questions().iter().map(|q| q.prompt()).collect();
        assert_eq!(prompts, vec!["one", "two", "three"]);

        quiz.insert_question(4, Question::open_ended("four", "4"))
            .unwrap();
        assert_eq!(quiz.question(4).unwrap().prompt(), "four");
        assert!(quiz.insert_question(6, Question::open_ended("x", "x")).is_err());
    }

    #[test]
    fn duplicate_question_rejected() {
        let q = Question::open_ended("only", "1");
        let mut quiz = Quiz::new("Q");
        quiz.push_question(q.clone()).unwrap();
        assert!(matches!(
            quiz.insert_question(1, q),
            Err(DeskError::DuplicateRejected { .. })
        ));
        assert_eq!(quiz.len(), 1);
    }

    #[test]
    fn remove_by_slot() {
        let mut quiz = quiz_with(&["a", "b", "c"]);
        assert_eq!(quiz.remove_question(2).unwrap().prompt(), "b");
        assert_eq!(quiz.question(2).unwrap().prompt(), "c");
        assert!(quiz.remove_question(3).is_err());
    }

    #[test]
    fn formatted_questions_letters_mcq() {
        let mut quiz = Quiz::new("Finals");
        quiz.push_question(Question::open_ended("Why?", "Because"))
            .unwrap();
        quiz.push_question(Question::multiple_choice(
            "Which year?",
            "1965",
            Options::new("1945", "1965", "1942", "1943"),
        ))
        .unwrap();

        assert_eq!(
            quiz.formatted_questions(),
            "Finals.\n\nQuestions:\n\
             1. Why?\n\n\
             2. Which year?\nA. 1945\nB. 1965\nC. 1942\nD. 1943\n\n"
        );
        assert_eq!(
            quiz.formatted_answers(),
            "Answers [Teacher's Copy]:\n1. Because\n\n2. 1965\n\n"
        );
        assert!(quiz.questions_and_answers().ends_with("2. 1965\n\n"));
    }
}
