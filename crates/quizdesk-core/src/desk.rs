//! The application model that owns every collection.
//!
//! A `StudyDesk` exclusively owns the student list, the question bank, the
//! quiz record, and the group roster, and is the one place the outer layers
//! (the CLI, exporters) go through. It also persists itself as a JSON
//! snapshot: every collection is stored as an ordered sequence with its
//! identities, so reloading never renumbers anything.

use std::path::Path;

use std::collections::HashSet;

use anyhow::{Context, Result as AnyResult};
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

use crate::assembler::QuizAssembler;
use crate::error::{Collection, DeskError, Result};
use crate::model::{Question, QuestionFilter, QuestionId, Student, StudentId};
use crate::question_record::QuestionRecord;
use crate::quiz::{Quiz, QuizRecord};
use crate::roster::{Group, GroupRoster};
use crate::sampling::IndexSource;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StudyDesk {
    #[serde(default, deserialize_with = "unique_students")]
    students: Vec<Student>,
    #[serde(default)]
    questions: QuestionRecord,
    #[serde(default)]
    quizzes: QuizRecord,
    #[serde(default)]
    groups: GroupRoster,
}

impl StudyDesk {
    pub fn new() -> Self {
        Self::default()
    }

    // -----------------------------------------------------------------------
    // Students
    // -----------------------------------------------------------------------

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    /// Append a student. Names are unique on the student list.
    pub fn add_student(&mut self, name: impl Into<String>) -> Result<StudentId> {
        let name = name.into();
        self.ensure_name_free(&name, None)?;
        let student = Student::new(name);
        let id = student.id;
        self.students.push(student);
        Ok(id)
    }

    /// Rename the student at 1-based `number`, keeping its identity.
    ///
    /// Groups keep the name they were given.
    pub fn rename_student(&mut self, number: usize, name: impl Into<String>) -> Result<&Student> {
        let offset = Collection::StudentList.offset(number, self.students.len())?;
        let name = name.into();
        self.ensure_name_free(&name, Some(offset))?;
        self.students[offset].name = name;
        Ok(&self.students[offset])
    }

    fn ensure_name_free(&self, name: &str, except: Option<usize>) -> Result<()> {
        let taken = self
            .students
            .iter()
            .enumerate()
            .any(|(i, s)| Some(i) != except && s.name == name);
        if taken {
            return Err(DeskError::DuplicateRejected {
                collection: Collection::StudentList,
                id: name.to_string(),
            });
        }
        Ok(())
    }

    /// The student at 1-based `number`.
    pub fn student(&self, number: usize) -> Result<&Student> {
        let offset = Collection::StudentList.offset(number, self.students.len())?;
        Ok(&self.students[offset])
    }

    /// Remove the student at 1-based `number` from the student list.
    ///
    /// Groups keep their own copy and are not affected.
    pub fn remove_student(&mut self, number: usize) -> Result<Student> {
        let offset = Collection::StudentList.offset(number, self.students.len())?;
        Ok(self.students.remove(offset))
    }

    // -----------------------------------------------------------------------
    // Questions
    // -----------------------------------------------------------------------

    pub fn questions(&self) -> &QuestionRecord {
        &self.questions
    }

    pub fn add_question(&mut self, question: Question) -> QuestionId {
        self.questions.add(question)
    }

    pub fn question(&self, index: usize) -> Result<&Question> {
        self.questions.get(index)
    }

    pub fn delete_question(&mut self, index: usize) -> Result<Question> {
        self.questions.delete_at(index)
    }

    pub fn replace_question(&mut self, index: usize, question: Question) -> Result<Question> {
        self.questions.replace_at(index, question)
    }

    pub fn questions_summary(&self) -> String {
        self.questions.summary()
    }

    // -----------------------------------------------------------------------
    // Quizzes
    // -----------------------------------------------------------------------

    pub fn quizzes(&self) -> &QuizRecord {
        &self.quizzes
    }

    pub fn quiz(&self, quiz_id: &str) -> Option<&Quiz> {
        self.quizzes.get(quiz_id)
    }

    fn assembler(&mut self) -> QuizAssembler<'_> {
        QuizAssembler::new(&self.questions, &mut self.quizzes)
    }

    pub fn create_quiz_manually(
        &mut self,
        quiz_id: &str,
        question_numbers: &[usize],
    ) -> Result<&Quiz> {
        self.assembler().assemble_manual(quiz_id, question_numbers)?;
        self.quizzes.require(quiz_id)
    }

    pub fn create_quiz_automatically<S: IndexSource + ?Sized>(
        &mut self,
        quiz_id: &str,
        num_questions: usize,
        filter: QuestionFilter,
        source: &mut S,
    ) -> Result<&Quiz> {
        self.assembler()
            .assemble_automatic(quiz_id, num_questions, filter, source)?;
        self.quizzes.require(quiz_id)
    }

    pub fn add_quiz_question(
        &mut self,
        quiz_id: &str,
        question_number: usize,
        quiz_slot: usize,
    ) -> Result<()> {
        self.assembler()
            .add_question_to_quiz(quiz_id, question_number, quiz_slot)
    }

    pub fn remove_quiz_question(&mut self, quiz_id: &str, slot: usize) -> Result<Option<Question>> {
        self.assembler().remove_question_from_quiz(quiz_id, slot)
    }

    pub fn remove_quiz(&mut self, quiz_id: &str) -> Option<Quiz> {
        self.quizzes.remove(quiz_id)
    }

    /// The question sheet followed by the answer key, if the quiz exists.
    pub fn questions_and_answers(&self, quiz_id: &str) -> Option<String> {
        self.quizzes.get(quiz_id).map(Quiz::questions_and_answers)
    }

    // -----------------------------------------------------------------------
    // Groups
    // -----------------------------------------------------------------------

    pub fn groups(&self) -> &GroupRoster {
        &self.groups
    }

    pub fn group(&self, group_id: &str) -> Option<&Group> {
        self.groups.get(group_id)
    }

    /// Create a group from 1-based student numbers, in the order given.
    pub fn create_group(&mut self, group_id: &str, student_numbers: &[usize]) -> Result<&Group> {
        if self.groups.contains(group_id) {
            return Err(DeskError::DuplicateIdentifier {
                collection: Collection::Group,
                id: group_id.to_string(),
            });
        }

        let mut group = Group::new(group_id);
        for &number in student_numbers {
            group.add_student(self.student(number)?.clone())?;
        }

        tracing::info!(group = group_id, students = group.len(), "created group");
        self.groups.insert(group)
    }

    /// Insert student `student_number` (1-based) into group `group_id` at
    /// 1-based `slot`.
    pub fn add_student_to_group(
        &mut self,
        group_id: &str,
        student_number: usize,
        slot: usize,
    ) -> Result<()> {
        let group = self.groups.require_mut(group_id)?;
        let offset = Collection::StudentList.offset(student_number, self.students.len())?;
        group.insert_student(slot, self.students[offset].clone())
    }

    /// Remove the student at 1-based `slot` from group `group_id`.
    pub fn remove_student_from_group(&mut self, group_id: &str, slot: usize) -> Result<Student> {
        self.groups.require_mut(group_id)?.remove_student(slot)
    }

    /// Numbered roster of the group, if it exists.
    pub fn students_in_group(&self, group_id: &str) -> Option<String> {
        self.groups.get(group_id).map(Group::formatted_roster)
    }

    pub fn remove_group(&mut self, group_id: &str) -> Option<Group> {
        self.groups.remove(group_id)
    }

    // -----------------------------------------------------------------------
    // Persistence
    // -----------------------------------------------------------------------

    /// Save the desk as JSON to a file.
    pub fn save_json(&self, path: &Path) -> AnyResult<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize desk")?;
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write desk to {}", path.display()))?;
        tracing::info!(
            path = %path.display(),
            questions = self.questions.len(),
            quizzes = self.quizzes.len(),
            groups = self.groups.len(),
            "saved desk"
        );
        Ok(())
    }

    /// Load a desk from a JSON file.
    pub fn load_json(path: &Path) -> AnyResult<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read desk from {}", path.display()))?;
        let desk: StudyDesk = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse desk JSON: {}", path.display()))?;
        tracing::info!(path = %path.display(), "loaded desk");
        Ok(desk)
    }

    /// Load from `path` if it exists, otherwise start empty.
    pub fn load_or_default(path: &Path) -> AnyResult<Self> {
        if path.exists() {
            Self::load_json(path)
        } else {
            Ok(Self::new())
        }
    }
}

/// Student lists in a snapshot must not repeat an identity or a name.
fn unique_students<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> std::result::Result<Vec<Student>, D::Error> {
    let students = Vec::<Student>::deserialize(deserializer)?;
    let mut ids = HashSet::with_capacity(students.len());
    let mut names = HashSet::with_capacity(students.len());
    for student in &students {
        if !ids.insert(student.id) || !names.insert(student.name.as_str()) {
            return Err(de::Error::custom(DeskError::DuplicateRejected {
                collection: Collection::StudentList,
                id: student.name.clone(),
            }));
        }
    }
    Ok(students)
}
