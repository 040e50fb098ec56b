//! quizdesk-export: write quizzes out as HTML pages or plain text.

pub mod html;
pub mod text;

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// A file stem derived from a quiz id, safe to join onto a directory.
pub fn file_stem(quiz_id: &str) -> String {
    let stem: String = quiz_id
        .trim()
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' => '_',
            c => c,
        })
        .collect();

    match stem.as_str() {
        "" | "." | ".." => "quiz".to_string(),
        _ => stem,
    }
}

/// Write `contents` to `{dir}/{stem}.{extension}`, failing if the file exists.
pub(crate) fn write_new_file(
    dir: &Path,
    quiz_id: &str,
    extension: &str,
    contents: &str,
) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create export directory: {}", dir.display()))?;

    let path = dir.join(format!("{}.{extension}", file_stem(quiz_id)));
    let file = std::fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&path)
        .with_context(|| format!("cannot export to {}", path.display()))?;
    write_or_remove(file, &path, contents)?;

    tracing::info!(quiz = quiz_id, path = %path.display(), "exported quiz");
    Ok(path)
}

/// Write `contents` through `out`, deleting the freshly created `path` if
/// the write fails.
fn write_or_remove<W: Write>(mut out: W, path: &Path, contents: &str) -> Result<()> {
    let written = out.write_all(contents.as_bytes()).and_then(|()| out.flush());
    drop(out);
    if let Err(e) = written {
        if let Err(cleanup) = std::fs::remove_file(path) {
            tracing::warn!(path = %path.display(), "failed to remove partial export: {cleanup}");
        }
        return Err(e).with_context(|| format!("failed to write {}", path.display()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FullDisk;

    impl Write for FullDisk {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::Other, "disk full"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn failed_write_leaves_no_file_behind() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Q1.txt");
        std::fs::write(&path, "").unwrap();

        let err = write_or_remove(FullDisk, &path, "contents").unwrap_err();
        assert!(format!("{err:#}").contains("failed to write"));
        assert!(!path.exists());

        let path = write_new_file(dir.path(), "Q1", "txt", "retry").unwrap();
        assert_eq!(std::fs::read_to_string(path).unwrap(), "retry");
    }

    #[test]
    fn stem_replaces_separators() {
        assert_eq!(file_stem("Midterm"), "Midterm");
        assert_eq!(file_stem("CS/2103 T"), "CS_2103 T");
        assert_eq!(file_stem("a\\b:c"), "a_b_c");
        assert_eq!(file_stem(".."), "quiz");
        assert_eq!(file_stem("  "), "quiz");
    }

    #[test]
    fn existing_file_is_not_overwritten() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_new_file(dir.path(), "Q1", "txt", "first").unwrap();
        assert!(write_new_file(dir.path(), "Q1", "txt", "second").is_err());
        assert_eq!(std::fs::read_to_string(path).unwrap(), "first");
    }
}
