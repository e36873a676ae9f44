//! RunLog - the per-run log file handle
//!
//! One handle is created at startup and passed explicitly to everything that
//! writes to the log: the tracing file layer and the stage runner teeing
//! child process output. It starts detached (writes are dropped) and is
//! attached to `<output_dir>/ig_simulator.log` once that directory exists.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};

use tracing_subscriber::fmt::MakeWriter;

#[derive(Debug, Default)]
struct Inner {
    path: Option<PathBuf>,
    file: Option<File>,
}

/// Shared, append-only run log
#[derive(Debug, Clone, Default)]
pub struct RunLog {
    inner: Arc<Mutex<Inner>>,
}

impl RunLog {
    /// Handle that is not attached to any file yet
    pub fn detached() -> Self {
        Self::default()
    }

    /// Attach to `path`, truncating any previous content
    pub fn open(&self, path: &Path) -> io::Result<()> {
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(path)?;
        let mut inner = self.lock();
        inner.file = Some(file);
        inner.path = Some(path.to_path_buf());
        Ok(())
    }

    /// Path of the attached file
    pub fn path(&self) -> Option<PathBuf> {
        self.lock().path.clone()
    }

    pub fn is_open(&self) -> bool {
        self.lock().file.is_some()
    }

    /// Append one line of tool output
    pub fn append_line(&self, line: &str) -> io::Result<()> {
        let mut inner = self.lock();
        match inner.file.as_mut() {
            Some(file) => {
                file.write_all(line.as_bytes())?;
                file.write_all(b"\n")
            }
            None => Ok(()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        // a panic while holding the lock leaves the file usable
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

/// Writer handed out to the tracing file layer
pub struct RunLogWriter {
    log: RunLog,
}

impl Write for RunLogWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut inner = self.log.lock();
        match inner.file.as_mut() {
            Some(file) => file.write(buf),
            None => Ok(buf.len()),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        let mut inner = self.log.lock();
        match inner.file.as_mut() {
            Some(file) => file.flush(),
            None => Ok(()),
        }
    }
}

impl<'a> MakeWriter<'a> for RunLog {
    type Writer = RunLogWriter;

    fn make_writer(&'a self) -> Self::Writer {
        RunLogWriter { log: self.clone() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_detached_drops_writes() {
        let log = RunLog::detached();
        assert!(!log.is_open());
        assert!(log.append_line("nobody listens").is_ok());
        let mut writer = log.make_writer();
        assert_eq!(writer.write(b"abc").unwrap(), 3);
    }

    #[test]
    fn test_open_truncates_and_appends() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ig_simulator.log");
        fs::write(&path, "previous run\n").unwrap();

        let log = RunLog::detached();
        log.open(&path).unwrap();
        log.append_line("first").unwrap();

        let clone = log.clone();
        let mut writer = clone.make_writer();
        writer.write_all(b"second\n").unwrap();
        writer.flush().unwrap();

        assert_eq!(log.path(), Some(path.clone()));
        assert_eq!(fs::read_to_string(&path).unwrap(), "first\nsecond\n");
    }
}
