//! The question bank.
//!
//! An ordered sequence of questions addressed by 1-based position. Positions
//! are not identities: deleting index `k` shifts everything above `k` down by
//! one, so callers that hold on to a question across mutations should keep
//! its [`QuestionId`] and re-resolve it with [`QuestionRecord::position_of`].

use std::collections::HashSet;

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

use crate::error::{Collection, DeskError, Result};
use crate::model::{Question, QuestionFilter, QuestionId};

#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct QuestionRecord {
    questions: Vec<Question>,
}

impl QuestionRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter()
    }

    /// Append a question. There is no content uniqueness check.
    ///
    /// A question whose identity is already held by the bank (a re-added
    /// clone) is stored under a fresh identity instead.
    pub fn add(&mut self, question: Question) -> QuestionId {
        let question = if self.contains(question.id()) {
            tracing::warn!(id = %question.id(), "question already in bank, re-issuing identity");
            question.reissued()
        } else {
            question
        };
        let id = question.id();
        self.questions.push(question);
        id
    }

    /// The question at 1-based `index`.
    pub fn get(&self, index: usize) -> Result<&Question> {
        let offset = Collection::QuestionBank.offset(index, self.len())?;
        Ok(&self.questions[offset])
    }

    /// Remove the question at 1-based `index`; higher indices shift down.
    pub fn delete_at(&mut self, index: usize) -> Result<Question> {
        let offset = Collection::QuestionBank.offset(index, self.len())?;
        Ok(self.questions.remove(offset))
    }

    /// Overwrite the question at 1-based `index`, returning the old one.
    ///
    /// No other position moves.
    pub fn replace_at(&mut self, index: usize, question: Question) -> Result<Question> {
        let offset = Collection::QuestionBank.offset(index, self.len())?;
        let clashes = self
            .questions
            .iter()
            .enumerate()
            .any(|(i, q)| i != offset && q.id() == question.id());
        let question = if clashes {
            question.reissued()
        } else {
            question
        };
        Ok(std::mem::replace(&mut self.questions[offset], question))
    }

    /// The ordered subsequence of questions matching `filter`, as of now.
    pub fn filter_by_variant(&self, filter: QuestionFilter) -> Vec<&Question> {
        self.questions.iter().filter(|q| filter.matches(q)).collect()
    }

    pub fn contains(&self, id: QuestionId) -> bool {
        self.questions.iter().any(|q| q.id() == id)
    }

    /// Current 1-based position of the question with `id`.
    pub fn position_of(&self, id: QuestionId) -> Option<usize> {
        self.questions
            .iter()
            .position(|q| q.id() == id)
            .map(|offset| offset + 1)
    }

    pub fn get_by_id(&self, id: QuestionId) -> Option<&Question> {
        self.questions.iter().find(|q| q.id() == id)
    }

    /// Numbered listing of every prompt in the bank.
    pub fn summary(&self) -> String {
        if self.questions.is_empty() {
            return "No questions in the bank.".to_string();
        }
        self.questions
            .iter()
            .enumerate()
            .map(|(i, q)| format!("{}. {}", i + 1, q))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl FromIterator<Question> for QuestionRecord {
    fn from_iter<I: IntoIterator<Item = Question>>(iter: I) -> Self {
        let mut record = QuestionRecord::new();
        for question in iter {
            record.add(question);
        }
        record
    }
}

/// A saved bank with a repeated question identity is rejected, not re-issued.
impl<'de> Deserialize<'de> for QuestionRecord {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let questions = Vec::<Question>::deserialize(deserializer)?;
        let mut seen = HashSet::with_capacity(questions.len());
        for question in &questions {
            if !seen.insert(question.id()) {
                return Err(de::Error::custom(DeskError::DuplicateIdentifier {
                    collection: Collection::QuestionBank,
                    id: question.id().to_string(),
                }));
            }
        }
        Ok(Self { questions })
    }
}
