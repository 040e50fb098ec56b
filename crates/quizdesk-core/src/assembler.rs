//! Quiz assembly from the question bank.
//!
//! A quiz is built either from explicit bank positions or by drawing a
//! random, duplicate-free selection from a type-filtered slice of the bank.
//! Either way the finished quiz holds question snapshots and is inserted
//! into the quiz record under its identifier.

use crate::error::{Collection, DeskError, Result};
use crate::model::{Question, QuestionFilter};
use crate::question_record::QuestionRecord;
use crate::quiz::{Quiz, QuizRecord};
use crate::sampling::{sample_distinct, IndexSource};

/// Assembles quizzes out of a question bank into a quiz record.
pub struct QuizAssembler<'a> {
    questions: &'a QuestionRecord,
    quizzes: &'a mut QuizRecord,
}

impl<'a> QuizAssembler<'a> {
    pub fn new(questions: &'a QuestionRecord, quizzes: &'a mut QuizRecord) -> Self {
        Self { questions, quizzes }
    }

    /// Build a quiz from 1-based bank positions, in the order given.
    ///
    /// Every position is resolved before anything is stored, so an invalid
    /// position or a repeated question leaves the record untouched.
    pub fn assemble_manual(&mut self, id: &str, question_numbers: &[usize]) -> Result<&Quiz> {
        self.ensure_free(id)?;

        let mut quiz = Quiz::new(id);
        for &number in question_numbers {
            let question = self.questions.get(number)?;
            quiz.push_question(question.clone())?;
        }

        tracing::info!(quiz = id, questions = quiz.len(), "assembled quiz manually");
        self.quizzes.insert(quiz)
    }

    /// Build a quiz of up to `target` questions drawn at random from the
    /// questions matching `filter`.
    ///
    /// When the filtered pool holds no more than `target` questions the
    /// quiz receives the whole pool in bank order. Otherwise `target`
    /// distinct questions are drawn uniformly without replacement and kept
    /// in draw order.
    pub fn assemble_automatic<S: IndexSource + ?Sized>(
        &mut self,
        id: &str,
        target: usize,
        filter: QuestionFilter,
        source: &mut S,
    ) -> Result<&Quiz> {
        self.ensure_free(id)?;

        let pool = self.questions.filter_by_variant(filter);
        let chosen: Vec<&Question> = if pool.len() <= target {
            tracing::debug!(
                quiz = id,
                pool = pool.len(),
                target,
                "pool not larger than target, taking all"
            );
            pool
        } else {
            tracing::debug!(quiz = id, pool = pool.len(), target, "sampling from pool");
            sample_distinct(pool.len(), target, source)
                .into_iter()
                .map(|position| pool[position])
                .collect()
        };

        let mut quiz = Quiz::new(id);
        for question in chosen {
            quiz.push_question(question.clone())?;
        }

        tracing::info!(
            quiz = id,
            questions = quiz.len(),
            filter = %filter,
            "assembled quiz automatically"
        );
        self.quizzes.insert(quiz)
    }

    /// Insert bank question `question_number` (1-based) into quiz `quiz_id`
    /// at 1-based `quiz_slot`.
    ///
    /// The quiz is resolved first, then the bank position, then the slot.
    pub fn add_question_to_quiz(
        &mut self,
        quiz_id: &str,
        question_number: usize,
        quiz_slot: usize,
    ) -> Result<()> {
        let quiz = self.quizzes.require_mut(quiz_id)?;
        let question = self.questions.get(question_number)?;
        quiz.insert_question(quiz_slot, question.clone())
    }

    /// Remove the question at 1-based `slot` from quiz `quiz_id`.
    ///
    /// A missing quiz is not an error: nothing happens and `None` is
    /// returned. An invalid slot in an existing quiz is.
    pub fn remove_question_from_quiz(
        &mut self,
        quiz_id: &str,
        slot: usize,
    ) -> Result<Option<Question>> {
        match self.quizzes.get_mut(quiz_id) {
            Some(quiz) => quiz.remove_question(slot).map(Some),
            None => Ok(None),
        }
    }

    fn ensure_free(&self, id: &str) -> Result<()> {
        if self.quizzes.contains(id) {
            return Err(DeskError::DuplicateIdentifier {
                collection: Collection::Quiz,
                id: id.to_string(),
            });
        }
        Ok(())
    }
}
