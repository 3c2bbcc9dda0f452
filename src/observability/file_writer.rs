//! Rotating log file writer with size-based rotation and backup retention.
//!
//! Plugs into `tracing-subscriber` as a [`MakeWriter`], so every formatted event
//! lands in one file that never grows past a fixed size.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::fmt::MakeWriter;

/// Maximum file size before rotation (10 MB).
const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Number of backup files to retain after rotation.
const MAX_BACKUP_FILES: usize = 3;

/// Thread-safe rotating file writer.
///
/// When the log exceeds `MAX_FILE_SIZE_BYTES` it is renamed to
/// `<name>.<timestamp>` and a fresh file is started. Only the newest
/// `MAX_BACKUP_FILES` backups are kept.
pub struct FileWriter {
    /// Path to the primary log file.
    file_path: PathBuf,
    /// Lazily-opened file handle.
    file: Mutex<Option<fs::File>>,
}

impl FileWriter {
    /// Creates a writer; the file is not opened until the first write.
    pub const fn new(file_path: PathBuf) -> Self {
        Self {
            file_path,
            file: Mutex::new(None),
        }
    }

    /// Writes `bytes`, rotating first if the file has grown too large.
    ///
    /// # Errors
    ///
    /// Fails on rotation, open, or write errors, or if the lock is poisoned.
    pub fn write_bytes(&self, bytes: &[u8]) -> io::Result<()> {
        let mut guard = self
            .file
            .lock()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("Mutex poisoned: {e}")))?;

        if fs::metadata(&self.file_path).is_ok_and(|m| m.len() > MAX_FILE_SIZE_BYTES) {
            *guard = None;
            self.rotate()?;
        }

        if guard.is_none() {
            *guard = Some(
                OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(&self.file_path)?,
            );
        }

        let file = guard
            .as_mut()
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "No file available"))?;
        file.write_all(bytes)?;
        file.flush()
    }

    /// Renames the current file to a timestamped backup and prunes old ones.
    fn rotate(&self) -> io::Result<()> {
        let stamp = chrono::Local::now().format("%Y%m%dT%H%M%S");
        let mut backup = self.file_path.as_os_str().to_os_string();
        backup.push(format!(".{stamp}"));

        if self.file_path.exists() {
            fs::rename(&self.file_path, PathBuf::from(backup))?;
        }
        self.prune_backups()
    }

    /// Deletes backups beyond the retention limit, oldest first.
    ///
    /// Timestamp suffixes sort chronologically, so name order is age order.
    fn prune_backups(&self) -> io::Result<()> {
        let Some(parent) = self.file_path.parent() else {
            return Ok(());
        };
        let Some(file_name) = self.file_path.file_name().and_then(|n| n.to_str()) else {
            return Ok(());
        };
        let prefix = format!("{file_name}.");

        let mut backups: Vec<PathBuf> = fs::read_dir(parent)?
            .filter_map(std::result::Result::ok)
            .map(|entry| entry.path())
            .filter(|path| {
                path.file_name()
                    .and_then(|name| name.to_str())
                    .is_some_and(|name| name.starts_with(&prefix))
            })
            .collect();

        backups.sort_unstable_by(|a, b| b.cmp(a));
        for old in backups.iter().skip(MAX_BACKUP_FILES) {
            let _ = fs::remove_file(old);
        }
        Ok(())
    }
}

impl std::fmt::Debug for FileWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileWriter")
            .field("file_path", &self.file_path)
            .finish_non_exhaustive()
    }
}

/// Per-event handle handed out to the formatter.
pub struct FileSink<'a> {
    writer: &'a FileWriter,
}

impl Write for FileSink<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.writer.write_bytes(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for FileWriter {
    type Writer = FileSink<'a>;

    fn make_writer(&'a self) -> Self::Writer {
        FileSink { writer: self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_across_sinks() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pathmarks.log");
        let writer = FileWriter::new(path.clone());

        writer.make_writer().write_all(b"first\n").unwrap();
        writer.make_writer().write_all(b"second\n").unwrap();

        assert_eq!(fs::read_to_string(path).unwrap(), "first\nsecond\n");
    }

    #[test]
    fn prune_keeps_newest_backups() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pathmarks.log");
        for stamp in ["20260101T000000", "20260102T000000", "20260103T000000", "20260104T000000"] {
            fs::write(dir.path().join(format!("pathmarks.log.{stamp}")), "old").unwrap();
        }

        FileWriter::new(path).prune_backups().unwrap();

        assert!(!dir.path().join("pathmarks.log.20260101T000000").exists());
        assert!(dir.path().join("pathmarks.log.20260104T000000").exists());
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), MAX_BACKUP_FILES);
    }
}
