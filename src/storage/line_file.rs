//! Whole-file reads and writes of line-oriented text files.
//!
//! Every read re-parses the file from disk. Rewrites go to a temporary sibling
//! first and are renamed over the target, so a crash mid-write leaves either the
//! old or the new content, never a torn file.

use crate::domain::error::Result;
use std::fs::OpenOptions;
use std::io::{ErrorKind, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

/// A UTF-8 text file holding one record per `\n`-terminated line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineFile {
    path: PathBuf,
}

impl LineFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads every line of the file.
    ///
    /// Returns `Ok(None)` when the file does not exist; that is the "empty store"
    /// signal, not an error.
    ///
    /// # Errors
    ///
    /// Returns an error for any I/O failure other than a missing file.
    pub fn read_lines(&self) -> Result<Option<Vec<String>>> {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) => Ok(Some(contents.lines().map(String::from).collect())),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::trace!(path = ?self.path, "file absent");
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Appends one line, creating the file if it is absent.
    ///
    /// A hand-edited file missing its final `\n` is terminated first, so the
    /// new record never joins the last one.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened, read, or written.
    pub fn append_line(&self, line: &str) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .read(true)
            .append(true)
            .open(&self.path)?;

        if file.metadata()?.len() > 0 {
            let mut last = [0u8; 1];
            file.seek(SeekFrom::End(-1))?;
            file.read_exact(&mut last)?;
            if last[0] != b'\n' {
                tracing::debug!(path = ?self.path, "terminating unterminated last line");
                writeln!(file)?;
            }
        }

        writeln!(file, "{line}")?;
        file.flush()?;
        Ok(())
    }

    /// Replaces the whole file with `lines`.
    ///
    /// # Errors
    ///
    /// Returns an error if the temporary file cannot be written or renamed.
    pub fn rewrite<S: AsRef<str>>(&self, lines: &[S]) -> Result<()> {
        let mut contents = String::new();
        for line in lines {
            contents.push_str(line.as_ref());
            contents.push('\n');
        }

        let tmp_path = self.tmp_path();
        tracing::trace!(tmp_path = ?tmp_path, "writing to temporary file");
        std::fs::write(&tmp_path, contents)?;

        tracing::trace!("renaming temporary file to final location");
        std::fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }

    /// `.favoritedirs` → `.favoritedirs.tmp`; appending keeps dotfiles intact.
    fn tmp_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_os_string();
        name.push(".tmp");
        PathBuf::from(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_reads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let file = LineFile::new(dir.path().join("absent"));
        assert_eq!(file.read_lines().unwrap(), None);
    }

    #[test]
    fn append_creates_then_extends() {
        let dir = tempfile::tempdir().unwrap();
        let file = LineFile::new(dir.path().join(".favoritedirs"));

        file.append_line("a|1").unwrap();
        file.append_line("b|2").unwrap();

        assert_eq!(
            std::fs::read_to_string(file.path()).unwrap(),
            "a|1\nb|2\n"
        );
    }

    #[test]
    fn append_after_unterminated_line_starts_a_new_line() {
        let dir = tempfile::tempdir().unwrap();
        let file = LineFile::new(dir.path().join(".favoritedirs"));
        std::fs::write(file.path(), "Home|~").unwrap();

        file.append_line("Work|/srv/work").unwrap();

        assert_eq!(
            file.read_lines().unwrap(),
            Some(vec!["Home|~".to_string(), "Work|/srv/work".to_string()])
        );
    }

    #[test]
    fn rewrite_replaces_contents_and_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = LineFile::new(dir.path().join(".shortenerdirs"));
        file.append_line("old|/x").unwrap();

        file.rewrite(&["new|/y"]).unwrap();

        assert_eq!(file.read_lines().unwrap(), Some(vec!["new|/y".to_string()]));
        assert!(!dir.path().join(".shortenerdirs.tmp").exists());
    }
}
