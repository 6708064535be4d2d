use chrono::{DateTime, Local};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::warn;

pub struct FileLogger {
    path: PathBuf,
    bot_name: String,
}

impl FileLogger {
    pub fn new(path: impl AsRef<Path>, bot_name: &str) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            bot_name: bot_name.to_string(),
        }
    }

    pub fn format_line(&self, at: DateTime<Local>, message: &str) -> String {
        format!(
            "[{}] [{}] {}\n",
            at.format("%Y-%m-%d %H:%M:%S"),
            self.bot_name,
            message
        )
    }

    /// Appends one line per message. The file is reopened on every write so a
    /// deleted or rotated log recovers on the next cycle.
    pub fn log(&self, at: DateTime<Local>, message: &str) {
        let line = self.format_line(at, message);

        let result = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .and_then(|mut file| {
                file.write_all(line.as_bytes())?;
                file.flush()
            });

        if let Err(e) = result {
            warn!("Failed to write log file {}: {}", self.path.display(), e);
        }
    }
}
