//! CLI configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use quizdesk_core::QuestionFilter;

/// File format for `quiz export`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Html,
    Text,
}

/// Top-level quizdesk configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizdeskConfig {
    /// JSON snapshot holding the whole desk.
    #[serde(default = "default_state_file")]
    pub state_file: PathBuf,
    /// Where exported quizzes are written.
    #[serde(default = "default_export_dir")]
    pub export_dir: PathBuf,
    /// Pool used by `quiz auto` and `question list` when `--type` is omitted.
    #[serde(default = "default_question_type")]
    pub default_question_type: String,
    #[serde(default = "default_export_format")]
    pub default_export_format: ExportFormat,
}

fn default_state_file() -> PathBuf {
    PathBuf::from("quizdesk.json")
}
fn default_export_dir() -> PathBuf {
    PathBuf::from(".")
}
fn default_question_type() -> String {
    "all".to_string()
}
fn default_export_format() -> ExportFormat {
    ExportFormat::Html
}

impl Default for QuizdeskConfig {
    fn default() -> Self {
        Self {
            state_file: default_state_file(),
            export_dir: default_export_dir(),
            default_question_type: default_question_type(),
            default_export_format: default_export_format(),
        }
    }
}

impl QuizdeskConfig {
    pub fn question_filter(&self) -> Result<QuestionFilter> {
        self.default_question_type
            .parse()
            .map_err(|e: String| anyhow::anyhow!("invalid default_question_type: {e}"))
    }
}

/// Resolve environment variable references like `${VAR_NAME}` in a string.
fn resolve_env_vars(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(start) = rest.find("${") {
        let Some(end) = rest[start..].find('}') else {
            break;
        };
        let var_name = &rest[start + 2..start + end];
        result.push_str(&rest[..start]);
        result.push_str(&std::env::var(var_name).unwrap_or_default());
        rest = &rest[start + end + 1..];
    }
    result.push_str(rest);
    result
}

fn resolve_path(path: &Path) -> PathBuf {
    PathBuf::from(resolve_env_vars(&path.to_string_lossy()))
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order:
/// 1. `quizdesk.toml` in the current directory
/// 2. `~/.config/quizdesk/config.toml`
///
/// Environment variable overrides: `QUIZDESK_STATE_FILE`, `QUIZDESK_EXPORT_DIR`.
pub fn load_config_from(path: Option<&Path>) -> Result<QuizdeskConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("quizdesk.toml");
        if local.exists() {
            Some(local)
        } else if let Some(home) = dirs_path() {
            let global = home.join("config.toml");
            if global.exists() {
                Some(global)
            } else {
                None
            }
        } else {
            None
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            let config = toml::from_str::<QuizdeskConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?;
            tracing::debug!(path = %path.display(), "loaded config");
            config
        }
        None => QuizdeskConfig::default(),
    };

    // Apply env var overrides
    if let Ok(state) = std::env::var("QUIZDESK_STATE_FILE") {
        config.state_file = PathBuf::from(state);
    }
    if let Ok(dir) = std::env::var("QUIZDESK_EXPORT_DIR") {
        config.export_dir = PathBuf::from(dir);
    }

    config.state_file = resolve_path(&config.state_file);
    config.export_dir = resolve_path(&config.export_dir);
    config.question_filter()?;

    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("quizdesk"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_env_vars_basic() {
        std::env::set_var("_QUIZDESK_TEST_VAR", "hello");
        assert_eq!(resolve_env_vars("${_QUIZDESK_TEST_VAR}"), "hello");
        assert_eq!(
            resolve_env_vars("prefix_${_QUIZDESK_TEST_VAR}_suffix"),
            "prefix_hello_suffix"
        );
        assert_eq!(resolve_env_vars("unterminated ${"), "unterminated ${");
        std::env::remove_var("_QUIZDESK_TEST_VAR");
    }

    #[test]
    fn resolve_env_vars_does_not_expand_values() {
        std::env::set_var("_QUIZDESK_SELF_REF", "${_QUIZDESK_SELF_REF}");
        assert_eq!(
            resolve_env_vars("a/${_QUIZDESK_SELF_REF}/b"),
            "a/${_QUIZDESK_SELF_REF}/b"
        );
        std::env::remove_var("_QUIZDESK_SELF_REF");
        assert_eq!(resolve_env_vars("${_QUIZDESK_UNSET_VAR}/x"), "/x");
    }

    #[test]
    fn default_config() {
        let config = QuizdeskConfig::default();
        assert_eq!(config.state_file, PathBuf::from("quizdesk.json"));
        assert_eq!(config.default_export_format, ExportFormat::Html);
        assert_eq!(config.question_filter().unwrap(), QuestionFilter::All);
    }

    #[test]
    fn parse_partial_config() {
        let toml_str = r#"
state_file = "data/desk.json"
default_question_type = "mcq"
default_export_format = "text"
"#;
        let config: QuizdeskConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.state_file, PathBuf::from("data/desk.json"));
        assert_eq!(config.export_dir, PathBuf::from("."));
        assert_eq!(
            config.question_filter().unwrap(),
            QuestionFilter::MultipleChoice
        );
        assert_eq!(config.default_export_format, ExportFormat::Text);
    }

    #[test]
    fn explicit_missing_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        let err = load_config_from(Some(&missing)).unwrap_err();
        assert!(err.to_string().contains("config file not found"));
    }

    #[test]
    fn explicit_config_is_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quizdesk.toml");
        std::fs::write(&path, "export_dir = \"out\"\n").unwrap();
        let config = load_config_from(Some(&path)).unwrap();
        assert_eq!(config.export_dir, PathBuf::from("out"));
    }

    #[test]
    fn bad_question_type_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quizdesk.toml");
        std::fs::write(&path, "default_question_type = \"essay\"\n").unwrap();
        assert!(load_config_from(Some(&path)).is_err());
    }
}
