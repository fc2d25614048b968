//! File-backed `log` sink.
//!
//! The terminal is owned by the UI while the game runs, so log records go to
//! a file chosen with `--log-file`. Without one, no logger is installed and
//! every `log` macro is a no-op.

use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::sync::Mutex;

use chrono::{DateTime, Local};
use log::{LevelFilter, Log, Metadata, Record};

pub struct FileLogger {
    level: LevelFilter,
    writer: Mutex<BufWriter<File>>,
}

impl FileLogger {
    /// Open (append) the log file at `path`.
    pub fn open(path: &Path, level: LevelFilter) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            level,
            writer: Mutex::new(BufWriter::new(file)),
        })
    }
}

impl Log for FileLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = format_line(Local::now(), record);
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", line);
            let _ = writer.flush();
        }
    }

    fn flush(&self) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writer.flush();
        }
    }
}

fn format_line(timestamp: DateTime<Local>, record: &Record) -> String {
    format!(
        "{} {:<5} [{}] {}",
        timestamp.format("%Y-%m-%d %H:%M:%S%.3f"),
        record.level(),
        record.target(),
        record.args()
    )
}

/// Install a [`FileLogger`] as the global logger.
///
/// Fails if the file cannot be opened or a logger is already installed.
pub fn init(path: &Path, level: LevelFilter) -> io::Result<()> {
    let logger = FileLogger::open(path, level)?;
    log::set_boxed_logger(Box::new(logger)).map_err(io::Error::other)?;
    log::set_max_level(level);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use log::Level;

    fn temp_log_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("sweep_{}_{}.log", name, std::process::id()))
    }

    #[test]
    fn test_format_line() {
        let timestamp = Local.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).unwrap();
        let line = format_line(
            timestamp,
            &Record::builder()
                .args(format_args!("New game"))
                .level(Level::Info)
                .target("sweep::session")
                .build(),
        );
        assert_eq!(line, "2024-03-09 14:05:07.000 INFO  [sweep::session] New game");
    }

    #[test]
    fn test_logger_respects_level() {
        let path = temp_log_path("level");
        let _ = std::fs::remove_file(&path);
        let logger = FileLogger::open(&path, LevelFilter::Warn).unwrap();

        logger.log(
            &Record::builder()
                .args(format_args!("kept"))
                .level(Level::Warn)
                .build(),
        );
        logger.log(
            &Record::builder()
                .args(format_args!("dropped"))
                .level(Level::Debug)
                .build(),
        );
        logger.flush();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("kept"));
        assert!(!contents.contains("dropped"));
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_open_fails_for_missing_directory() {
        let path = std::env::temp_dir()
            .join("sweep_missing_dir_for_logs")
            .join("nested")
            .join("sweep.log");
        assert!(FileLogger::open(&path, LevelFilter::Info).is_err());
    }
}
