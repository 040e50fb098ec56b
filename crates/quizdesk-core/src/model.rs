//! Core data model types for quizdesk.
//!
//! Questions and students carry an opaque, stable identity that is separate
//! from the 1-based position they are displayed at. Positions shift when a
//! collection is mutated; identities never do.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Stable identity of a question, independent of its position in the bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(Uuid);

impl QuestionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for QuestionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Stable identity of a student.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StudentId(Uuid);

impl StudentId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for StudentId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The four options of a multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Options {
    pub a: String,
    pub b: String,
    pub c: String,
    pub d: String,
}

impl Options {
    pub fn new(
        a: impl Into<String>,
        b: impl Into<String>,
        c: impl Into<String>,
        d: impl Into<String>,
    ) -> Self {
        Self {
            a: a.into(),
            b: b.into(),
            c: c.into(),
            d: d.into(),
        }
    }

    /// Options paired with their letter, in A-D order.
    pub fn labelled(&self) -> [(char, &str); 4] {
        [
            ('A', self.a.as_str()),
            ('B', self.b.as_str()),
            ('C', self.c.as_str()),
            ('D', self.d.as_str()),
        ]
    }
}

/// The shape of a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Variant {
    OpenEnded,
    MultipleChoice(Options),
}

/// A single question in the bank.
///
/// Questions are immutable: editing one at the bank level produces a
/// replacement with a new identity. Equality compares identity, so two
/// questions with identical text are still distinct.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    id: QuestionId,
    prompt: String,
    answer: String,
    variant: Variant,
}

impl Question {
    pub fn open_ended(prompt: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            id: QuestionId::new(),
            prompt: prompt.into(),
            answer: answer.into(),
            variant: Variant::OpenEnded,
        }
    }

    pub fn multiple_choice(
        prompt: impl Into<String>,
        answer: impl Into<String>,
        options: Options,
    ) -> Self {
        Self {
            id: QuestionId::new(),
            prompt: prompt.into(),
            answer: answer.into(),
            variant: Variant::MultipleChoice(options),
        }
    }

    pub fn id(&self) -> QuestionId {
        self.id
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn variant(&self) -> &Variant {
        &self.variant
    }

    /// The options, if this is a multiple-choice question.
    pub fn options(&self) -> Option<&Options> {
        match &self.variant {
            Variant::MultipleChoice(options) => Some(options),
            Variant::OpenEnded => None,
        }
    }

    pub fn is_multiple_choice(&self) -> bool {
        matches!(self.variant, Variant::MultipleChoice(_))
    }

    /// The same content under a fresh identity.
    pub(crate) fn reissued(self) -> Self {
        Self {
            id: QuestionId::new(),
            ..self
        }
    }
}

impl PartialEq for Question {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Question {}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self.variant {
            Variant::OpenEnded => "open",
            Variant::MultipleChoice(_) => "mcq",
        };
        write!(f, "[{tag}] {}", self.prompt)
    }
}

/// Which questions an automatic assembly may draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionFilter {
    OpenEnded,
    MultipleChoice,
    All,
}

impl QuestionFilter {
    pub fn matches(self, question: &Question) -> bool {
        match self {
            QuestionFilter::All => true,
            QuestionFilter::OpenEnded => !question.is_multiple_choice(),
            QuestionFilter::MultipleChoice => question.is_multiple_choice(),
        }
    }
}

impl fmt::Display for QuestionFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuestionFilter::OpenEnded => write!(f, "open"),
            QuestionFilter::MultipleChoice => write!(f, "mcq"),
            QuestionFilter::All => write!(f, "all"),
        }
    }
}

impl FromStr for QuestionFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "open" | "open-ended" | "open_ended" => Ok(QuestionFilter::OpenEnded),
            "mcq" | "multiple-choice" | "multiple_choice" => Ok(QuestionFilter::MultipleChoice),
            "all" => Ok(QuestionFilter::All),
            other => Err(format!("unknown question type: {other}")),
        }
    }
}

/// A student that can be placed into groups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: StudentId,
    pub name: String,
}

impl Student {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: StudentId::new(),
            name: name.into(),
        }
    }

    /// Whether both values refer to the same student.
    pub fn is_same_student(&self, other: &Student) -> bool {
        self.id == other.id
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_display_and_parse() {
        assert_eq!(QuestionFilter::MultipleChoice.to_string(), "mcq");
        assert_eq!("open".parse::<QuestionFilter>(), Ok(QuestionFilter::OpenEnded));
        assert_eq!(
            "Multiple-Choice".parse::<QuestionFilter>(),
            Ok(QuestionFilter::MultipleChoice)
        );
        assert_eq!(" ALL ".parse::<QuestionFilter>(), Ok(QuestionFilter::All));
        assert!("essay".parse::<QuestionFilter>().is_err());
    }

    #[test]
    fn identical_text_is_distinct() {
        let a = Question::open_ended("What is 2 + 2?", "4");
        let b = Question::open_ended("What is 2 + 2?", "4");
        assert_ne!(a, b);
        assert_eq!(a, a.clone());
    }

    #[test]
    fn reissued_keeps_content() {
        let original = Question::multiple_choice(
            "Pick one",
            "A",
            Options::new("x", "y", "z", "w"),
        );
        let copy = original.clone().reissued();
        assert_ne!(copy, original);
        assert_eq!(copy.prompt(), original.prompt());
        assert_eq!(copy.options(), original.options());
    }

    #[test]
    fn filter_matches_variant() {
        let open = Question::open_ended("Why?", "Because");
        let mcq = Question::multiple_choice("Which?", "B", Options::new("1", "2", "3", "4"));
        assert!(QuestionFilter::OpenEnded.matches(&open));
        assert!(!QuestionFilter::OpenEnded.matches(&mcq));
        assert!(QuestionFilter::MultipleChoice.matches(&mcq));
        assert!(QuestionFilter::All.matches(&open) && QuestionFilter::All.matches(&mcq));
    }

    #[test]
    fn question_serde_roundtrip_keeps_identity() {
        let mcq = Question::multiple_choice("Which?", "B", Options::new("1", "2", "3", "4"));
        let json = serde_json::to_string(&mcq).unwrap();
        assert!(json.contains("\"multiple_choice\""));
        let back: Question = serde_json::from_str(&json).unwrap();
        assert_eq!(back, mcq);
        assert_eq!(back.options().unwrap().c, "3");
    }
}
