//! Student groups.

use serde::{Deserialize, Serialize};

use crate::error::{Collection, DeskError, Result};
use crate::model::Student;
use crate::registry::{Identified, Registry};

/// All groups, in creation order, looked up by identifier.
pub type GroupRoster = Registry<Group>;

/// A named, ordered subset of students.
///
/// A group copies each student value at the time it is added; later edits
/// to the student elsewhere are not reflected here. A student occupies a
/// 1-based slot and appears at most once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    id: String,
    #[serde(default)]
    students: Vec<Student>,
}

impl Identified for Group {
    const COLLECTION: Collection = Collection::Group;

    fn identifier(&self) -> &str {
        &self.id
    }
}

impl Group {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            students: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    pub fn contains(&self, student: &Student) -> bool {
        self.students.iter().any(|s| s.is_same_student(student))
    }

    /// Append a student.
    pub fn add_student(&mut self, student: Student) -> Result<()> {
        let slot = self.students.len() + 1;
        self.insert_student(slot, student)
    }

    /// Insert a student at 1-based `slot`, shifting later students back.
    ///
    /// `slot` may be one past the end to append.
    pub fn insert_student(&mut self, slot: usize, student: Student) -> Result<()> {
        let offset = Collection::Group.insert_offset(slot, self.students.len())?;
        if self.contains(&student) {
            return Err(DeskError::DuplicateRejected {
                collection: Collection::Group,
                id: self.id.clone(),
            });
        }
        self.students.insert(offset, student);
        Ok(())
    }

    /// Remove the student at 1-based `slot`.
    pub fn remove_student(&mut self, slot: usize) -> Result<Student> {
        let offset = Collection::Group.offset(slot, self.students.len())?;
        Ok(self.students.remove(offset))
    }

    /// Numbered, newline-joined listing of the group's students.
    pub fn formatted_roster(&self) -> String {
        self.students
            .iter()
            .enumerate()
            .map(|(i, s)| format!("{}. {}", i + 1, s.name))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
