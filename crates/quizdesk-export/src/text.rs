//! Plain-text export: the question sheet followed by the answer key.

use std::path::{Path, PathBuf};

use anyhow::Result;

use quizdesk_core::Quiz;

/// Write `{dir}/{quiz id}.txt`. Refuses to overwrite an existing file.
pub fn write_text_export(quiz: &Quiz, dir: &Path) -> Result<PathBuf> {
    crate::write_new_file(dir, quiz.id(), "txt", &quiz.questions_and_answers())
}
