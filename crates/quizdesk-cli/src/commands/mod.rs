//! Subcommand implementations.

pub mod group;
pub mod import;
pub mod init;
pub mod question;
pub mod quiz;
pub mod student;
pub mod validate;

use std::path::{Path, PathBuf};

use anyhow::Result;

use quizdesk_core::StudyDesk;

use crate::config::{load_config_from, QuizdeskConfig};

/// Resolved configuration plus the desk state file it points at.
pub struct Session {
    pub config: QuizdeskConfig,
    pub state_file: PathBuf,
}

impl Session {
    /// Load the config; `--state` wins over everything in it.
    pub fn open(config_path: Option<&Path>, state: Option<PathBuf>) -> Result<Self> {
        let config = load_config_from(config_path)?;
        let state_file = state.unwrap_or_else(|| config.state_file.clone());
        Ok(Self { config, state_file })
    }

    pub fn load_desk(&self) -> Result<StudyDesk> {
        StudyDesk::load_or_default(&self.state_file)
    }

    pub fn save_desk(&self, desk: &StudyDesk) -> Result<()> {
        desk.save_json(&self.state_file)
    }

    /// Load, apply `change`, and save only if it succeeded.
    pub fn update<T>(&self, change: impl FnOnce(&mut StudyDesk) -> Result<T>) -> Result<T> {
        let mut desk = self.load_desk()?;
        let value = change(&mut desk)?;
        self.save_desk(&desk)?;
        Ok(value)
    }
}

/// Parse a `--type` value.
pub fn parse_filter(s: &str) -> Result<quizdesk_core::QuestionFilter, String> {
    s.parse()
}
