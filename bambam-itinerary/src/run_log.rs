//! diagnostics for itinerary authors. messages are collected in memory for
//! the whole run and written to `log.txt` once, at the end, so that a fatal
//! abort still leaves a complete log behind.
use std::{
    fmt::Display,
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Warn,
    Error,
    Fatal,
}

impl Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
            LogLevel::Fatal => "FATAL",
        };
        write!(f, "{s}")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LogMessage {
    pub level: LogLevel,
    pub message: String,
}

impl Display for LogMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.level, self.message)
    }
}

/// append-only collection of run diagnostics. each message is also echoed to
/// the `log` facade so it shows up on the console while the run progresses.
#[derive(Debug, Default)]
pub struct RunLog {
    messages: Vec<LogMessage>,
}

impl RunLog {
    pub fn new() -> RunLog {
        RunLog::default()
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.push(LogLevel::Info, message.into());
    }

    pub fn warn(&mut self, message: impl Into<String>) {
        self.push(LogLevel::Warn, message.into());
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(LogLevel::Error, message.into());
    }

    pub fn fatal(&mut self, message: impl Into<String>) {
        self.push(LogLevel::Fatal, message.into());
    }

    pub fn messages(&self) -> &[LogMessage] {
        &self.messages
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// number of messages logged at `level`.
    pub fn count(&self, level: LogLevel) -> usize {
        self.messages.iter().filter(|m| m.level == level).count()
    }

    /// writes every message, one per line in the order logged, to `filepath`.
    /// nothing is written when the log is empty. consumes the log.
    pub fn flush(self, filepath: &Path) -> std::io::Result<usize> {
        if self.messages.is_empty() {
            return Ok(0);
        }
        let mut writer = BufWriter::new(File::create(filepath)?);
        for message in self.messages.iter() {
            writeln!(writer, "{message}")?;
        }
        writer.flush()?;
        Ok(self.messages.len())
    }

    fn push(&mut self, level: LogLevel, message: String) {
        match level {
            LogLevel::Info => log::info!("{message}"),
            LogLevel::Warn => log::warn!("{message}"),
            LogLevel::Error | LogLevel::Fatal => log::error!("{message}"),
        }
        self.messages.push(LogMessage { level, message });
    }
}

#[cfg(test)]
mod test {
    use super::{LogLevel, RunLog};

    #[test]
    fn test_flush_in_emission_order() {
        let dir = tempfile::tempdir().expect("temp dir");
        let filepath = dir.path().join("log.txt");
        let mut run_log = RunLog::new();
        run_log.warn("first");
        run_log.info("second");
        run_log.fatal("third");
        assert_eq!(run_log.count(LogLevel::Warn), 1);
        let written = run_log.flush(&filepath).expect("should write");
        assert_eq!(written, 3);
        let contents = std::fs::read_to_string(&filepath).expect("should read");
        assert_eq!(contents, "[WARN] first\n[INFO] second\n[FATAL] third\n");
    }

    #[test]
    fn test_empty_log_writes_nothing() {
        let dir = tempfile::tempdir().expect("temp dir");
        let filepath = dir.path().join("log.txt");
        let written = RunLog::new().flush(&filepath).expect("should not fail");
        assert_eq!(written, 0);
        assert!(!filepath.exists());
    }
}
