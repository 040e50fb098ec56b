//! TOML question bank parser.
//!
//! Loads question banks (questions plus an optional student list) from TOML
//! files and directories, and validates them.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::model::{Options, Question, QuestionFilter, Student};

/// A parsed question bank file.
#[derive(Debug, Clone)]
pub struct QuestionBank {
    pub name: String,
    pub description: String,
    pub questions: Vec<Question>,
    pub students: Vec<Student>,
    /// 1-based numbers of open questions whose `options` were ignored.
    pub ignored_options: Vec<usize>,
}

/// Intermediate TOML structure for parsing bank files.
#[derive(Debug, Deserialize)]
struct TomlBankFile {
    bank: TomlBankHeader,
    #[serde(default)]
    questions: Vec<TomlQuestion>,
    #[serde(default)]
    students: Vec<TomlStudent>,
}

#[derive(Debug, Deserialize)]
struct TomlBankHeader {
    name: String,
    #[serde(default)]
    description: String,
}

#[derive(Debug, Deserialize)]
struct TomlQuestion {
    prompt: String,
    answer: String,
    #[serde(default = "default_type_str", rename = "type")]
    kind: String,
    #[serde(default)]
    options: Vec<String>,
}

fn default_type_str() -> String {
    "open".to_string()
}

#[derive(Debug, Deserialize)]
struct TomlStudent {
    name: String,
}

/// Parse a single TOML file into a `QuestionBank`.
pub fn parse_bank(path: &Path) -> Result<QuestionBank> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read question bank file: {}", path.display()))?;

    parse_bank_str(&content, path)
}

/// Parse a TOML string into a `QuestionBank` (useful for testing).
pub fn parse_bank_str(content: &str, source_path: &Path) -> Result<QuestionBank> {
    let parsed: TomlBankFile = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

    let ignored_options = parsed
        .questions
        .iter()
        .enumerate()
        .filter(|(_, q)| {
            !q.options.is_empty()
                && q.kind.parse::<QuestionFilter>() == Ok(QuestionFilter::OpenEnded)
        })
        .map(|(i, _)| i + 1)
        .collect();

    let questions = parsed
        .questions
        .into_iter()
        .enumerate()
        .map(|(i, q)| -> Result<Question> {
            let kind: QuestionFilter = q
                .kind
                .parse()
                .map_err(|e: String| anyhow::anyhow!("question {}: {}", i + 1, e))?;

            match kind {
                QuestionFilter::OpenEnded => Ok(Question::open_ended(q.prompt, q.answer)),
                QuestionFilter::MultipleChoice => {
                    let [a, b, c, d]: [String; 4] = q.options.try_into().map_err(|_| {
                        anyhow::anyhow!(
                            "question {}: options A to D are necessary for mcq questions",
                            i + 1
                        )
                    })?;
                    Ok(Question::multiple_choice(
                        q.prompt,
                        q.answer,
                        Options { a, b, c, d },
                    ))
                }
                QuestionFilter::All => {
                    anyhow::bail!("question {}: type must be \"open\" or \"mcq\"", i + 1)
                }
            }
        })
        .collect::<Result<Vec<_>>>()?;

    let students = parsed
        .students
        .into_iter()
        .map(|s| Student::new(s.name))
        .collect();

    Ok(QuestionBank {
        name: parsed.bank.name,
        description: parsed.bank.description,
        questions,
        students,
        ignored_options,
    })
}

/// Recursively load all `.toml` bank files from a directory.
pub fn load_bank_directory(dir: &Path) -> Result<Vec<QuestionBank>> {
    let mut banks = Vec::new();

    if !dir.is_dir() {
        anyhow::bail!("not a directory: {}", dir.display());
    }

    let mut entries = std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?
        .collect::<std::io::Result<Vec<_>>>()?;
    entries.sort_by_key(|e| e.path());

    for entry in entries {
        let path = entry.path();

        if path.is_dir() {
            banks.extend(load_bank_directory(&path)?);
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            match parse_bank(&path) {
                Ok(bank) => banks.push(bank),
                Err(e) => {
                    tracing::warn!("skipping {}: {:#}", path.display(), e);
                }
            }
        }
    }

    Ok(banks)
}

/// Load a bank file, or every bank under a directory.
pub fn load_banks(path: &Path) -> Result<Vec<QuestionBank>> {
    if path.is_dir() {
        load_bank_directory(path)
    } else {
        Ok(vec![parse_bank(path)?])
    }
}

/// A warning from bank validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// 1-based question number (if applicable).
    pub question: Option<usize>,
    /// Warning message.
    pub message: String,
}

/// Validate a question bank for common issues.
pub fn validate_bank(bank: &QuestionBank) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    // Identical prompts are allowed but usually a mistake
    let mut seen_prompts = std::collections::HashMap::new();
    for (i, question) in bank.questions.iter().enumerate() {
        let key = question.prompt().trim().to_lowercase();
        if let Some(first) = seen_prompts.insert(key, i + 1) {
            warnings.push(ValidationWarning {
                question: Some(i + 1),
                message: format!("same prompt as question {first}"),
            });
        }
    }

    for (i, question) in bank.questions.iter().enumerate() {
        let number = Some(i + 1);

        if question.prompt().trim().is_empty() {
            warnings.push(ValidationWarning {
                question: number,
                message: "prompt is empty".into(),
            });
        }

        if question.answer().trim().is_empty() {
            warnings.push(ValidationWarning {
                question: number,
                message: "answer is empty".into(),
            });
        }

        // An mcq answer should name an option, by letter or by text
        if let Some(options) = question.options() {
            let answer = question.answer().trim();
            let matches = options.labelled().iter().any(|(letter, text)| {
                answer.eq_ignore_ascii_case(&letter.to_string()) || answer == text.trim()
            });
            if !matches {
                warnings.push(ValidationWarning {
                    question: number,
                    message: format!("answer '{answer}' matches none of the options"),
                });
            }
        }
    }

    for &number in &bank.ignored_options {
        warnings.push(ValidationWarning {
            question: Some(number),
            message: "options are ignored on open questions".into(),
        });
    }

    if bank.questions.is_empty() {
        warnings.push(ValidationWarning {
            question: None,
            message: "bank contains no questions".into(),
        });
    }

    warnings
}
