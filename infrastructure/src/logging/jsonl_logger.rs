//! JSONL file writer for the submission journal.
//!
//! Each [`SubmissionEvent`] is serialized as a single JSON line with a
//! `type` field and `timestamp`, appended to the file via a buffered
//! writer. The journal is opened in append mode so the record survives
//! across sessions.

use inquiry_application::{SubmissionEvent, SubmissionLogger};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::warn;

/// Submission journal that writes one JSON object per line.
///
/// Thread-safe via `Mutex<BufWriter<File>>`. Flushes on `Drop`.
pub struct JsonlSubmissionLogger {
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
}

impl JsonlSubmissionLogger {
    /// Create a journal appending to the given path.
    ///
    /// Creates the file (and parent directories) if they don't exist.
    /// Returns `None` if the file cannot be opened.
    pub fn new(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && let Err(e) = std::fs::create_dir_all(parent)
        {
            warn!(
                "Could not create submission journal directory {}: {}",
                parent.display(),
                e
            );
            return None;
        }

        let file = match OpenOptions::new().create(true).append(true).open(path) {
            Ok(f) => f,
            Err(e) => {
                warn!(
                    "Could not open submission journal {}: {}",
                    path.display(),
                    e
                );
                return None;
            }
        };

        Some(Self {
            writer: Mutex::new(BufWriter::new(file)),
            path: path.to_path_buf(),
        })
    }

    /// Get the path to the journal file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SubmissionLogger for JsonlSubmissionLogger {
    fn log(&self, event: SubmissionEvent) {
        let timestamp = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true);

        // Build the record: merge payload with type + timestamp
        let record = if let serde_json::Value::Object(mut map) = event.payload {
            map.insert(
                "type".to_string(),
                serde_json::Value::String(event.event_type.to_string()),
            );
            map.insert(
                "timestamp".to_string(),
                serde_json::Value::String(timestamp),
            );
            serde_json::Value::Object(map)
        } else {
            serde_json::json!({
                "type": event.event_type,
                "timestamp": timestamp,
                "data": event.payload,
            })
        };

        let Ok(line) = serde_json::to_string(&record) else {
            return;
        };

        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", line);
            // Submissions are rare; flush every record so the journal
            // stays current
            let _ = writer.flush();
        }
    }
}

impl Drop for JsonlSubmissionLogger {
    fn drop(&mut self) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writer.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    #[test]
    fn test_journal_writes_valid_jsonl() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("submissions.jsonl");
        let logger = JsonlSubmissionLogger::new(&path).unwrap();

        logger.log(SubmissionEvent::new(
            "submission_accepted",
            serde_json::json!({
                "subject": "support",
                "email": "jo@example.com"
            }),
        ));

        logger.log(SubmissionEvent::new(
            "submission_rejected",
            serde_json::json!({
                "message": "Invalid data"
            }),
        ));

        // Flush
        drop(logger);

        let mut content = String::new();
        File::open(&path)
            .unwrap()
            .read_to_string(&mut content)
            .unwrap();

        let lines: Vec<&str> = content.trim().lines().collect();
        assert_eq!(lines.len(), 2);

        // Each line should be valid JSON with type + timestamp
        for line in &lines {
            let value: serde_json::Value = serde_json::from_str(line).unwrap();
            assert!(value.get("type").is_some());
            assert!(value.get("timestamp").is_some());
        }

        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["type"], "submission_accepted");
        assert_eq!(first["subject"], "support");
        assert_eq!(first["email"], "jo@example.com");
    }

    #[test]
    fn test_journal_appends_across_sessions() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("submissions.jsonl");

        {
            let logger = JsonlSubmissionLogger::new(&path).unwrap();
            logger.log(SubmissionEvent::new(
                "submission_accepted",
                serde_json::json!({"email": "first@example.com"}),
            ));
        }
        {
            let logger = JsonlSubmissionLogger::new(&path).unwrap();
            logger.log(SubmissionEvent::new(
                "submission_accepted",
                serde_json::json!({"email": "second@example.com"}),
            ));
        }

        let mut content = String::new();
        File::open(&path)
            .unwrap()
            .read_to_string(&mut content)
            .unwrap();
        assert_eq!(content.trim().lines().count(), 2);
    }

    #[test]
    fn test_journal_handles_non_object_payload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("odd.jsonl");
        let logger = JsonlSubmissionLogger::new(&path).unwrap();

        logger.log(SubmissionEvent::new(
            "simple_event",
            serde_json::json!("just a string"),
        ));

        drop(logger);

        let mut content = String::new();
        File::open(&path)
            .unwrap()
            .read_to_string(&mut content)
            .unwrap();

        let value: serde_json::Value = serde_json::from_str(content.trim()).unwrap();
        assert_eq!(value["type"], "simple_event");
        assert_eq!(value["data"], "just a string");
    }
}
