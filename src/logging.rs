//! Logging init: append to a log file, or fall back to stderr.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::fmt::writer::BoxMakeWriter;

const DEFAULT_FILTER: &str = "warn,fame_kit=info";

/// Where one log line goes: the log file, or stderr when the file handle
/// could not be duplicated.
enum LogSink {
    File(fs::File),
    Stderr,
}

impl io::Write for LogSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            LogSink::File(f) => f.write(buf),
            LogSink::Stderr => io::stderr().lock().write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            LogSink::File(f) => f.flush(),
            LogSink::Stderr => io::stderr().lock().flush(),
        }
    }
}

/// The open log file. The first time it has to fall back to stderr it
/// says so there, once.
struct LogFile {
    path: PathBuf,
    file: fs::File,
    fell_back: AtomicBool,
}

impl LogFile {
    fn open(path: &Path) -> io::Result<Self> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let file = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)?;
        Ok(Self {
            path: path.to_path_buf(),
            file,
            fell_back: AtomicBool::new(false),
        })
    }

    fn sink(&self) -> LogSink {
        match self.file.try_clone() {
            Ok(file) => LogSink::File(file),
            Err(e) => {
                // tracing cannot be used from inside its own writer
                if !self.fell_back.swap(true, Ordering::Relaxed) {
                    let _ = writeln!(
                        io::stderr().lock(),
                        "fame: cannot write {} ({}), logging to stderr",
                        self.path.display(),
                        e
                    );
                }
                LogSink::Stderr
            }
        }
    }
}

impl<'a> MakeWriter<'a> for LogFile {
    type Writer = LogSink;

    fn make_writer(&'a self) -> Self::Writer {
        self.sink()
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Initialize structured logging, appending to `log_path`.
/// Returns Err if the file cannot be opened so the caller can fall back to stderr.
pub fn init_logging(log_path: &Path) -> io::Result<()> {
    let writer = BoxMakeWriter::new(LogFile::open(log_path)?);

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|e| io::Error::other(e.to_string()))?;

    tracing::debug!("logging initialized at {}", log_path.display());
    Ok(())
}

/// Initialize logging to stderr only. Used when `init_logging` fails.
pub fn init_logging_stderr() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(io::stderr)
        .with_ansi(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_file_appends_each_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fame.log");
        fs::write(&path, "existing\n").unwrap();

        let log = LogFile::open(&path).unwrap();
        log.make_writer().write_all(b"one\n").unwrap();
        log.make_writer().write_all(b"two\n").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "existing\none\ntwo\n");
        assert!(!log.fell_back.load(Ordering::Relaxed));
    }

    #[test]
    fn log_file_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs").join("dev").join("fame.log");

        let log = LogFile::open(&path).unwrap();
        assert_eq!(log.path, path);
        assert!(path.exists());
    }

    #[test]
    fn log_file_under_a_file_fails_to_open() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "").unwrap();
        assert!(LogFile::open(&blocker.join("fame.log")).is_err());
    }
}
