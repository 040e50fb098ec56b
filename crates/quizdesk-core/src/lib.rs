//! quizdesk-core: question bank, quiz assembly, and group rosters.
//!
//! This crate defines the data model and the relational core that keeps a
//! flat question bank, a record of quizzes, and a roster of student groups
//! consistent with each other, plus randomized duplicate-free quiz assembly.

pub mod assembler;
pub mod desk;
pub mod error;
pub mod model;
pub mod parser;
pub mod question_record;
pub mod quiz;
pub mod registry;
pub mod roster;
pub mod sampling;

pub use assembler::QuizAssembler;
pub use desk::StudyDesk;
pub use error::{Collection, DeskError, Result};
pub use model::{Options, Question, QuestionFilter, QuestionId, Student, StudentId, Variant};
pub use question_record::QuestionRecord;
pub use quiz::{Quiz, QuizRecord};
pub use registry::{Identified, Registry};
pub use roster::{Group, GroupRoster};
pub use sampling::IndexSource;
