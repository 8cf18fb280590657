//! Job status reporting

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    Pending,
    Processing,
    Done,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusMessage {
    pub id: String,
    pub status: SubmissionStatus,
    /// Failure text for `failed`, empty otherwise
    #[serde(default)]
    pub reason: String,
}

impl StatusMessage {
    pub fn new(id: &str, status: SubmissionStatus) -> Self {
        Self {
            id: id.to_string(),
            status,
            reason: String::new(),
        }
    }

    pub fn failed(id: &str, reason: impl Into<String>) -> Self {
        Self {
            id: id.to_string(),
            status: SubmissionStatus::Failed,
            reason: reason.into(),
        }
    }
}

/// Channel announcing job progress
pub trait StatusReporter {
    fn report(&mut self, message: &StatusMessage) -> Result<()>;
}

/// Writes each status message as one JSON object per line
pub struct JsonLinesReporter<W: Write> {
    writer: W,
}

impl<W: Write> JsonLinesReporter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> StatusReporter for JsonLinesReporter<W> {
    fn report(&mut self, message: &StatusMessage) -> Result<()> {
        serde_json::to_writer(&mut self.writer, message)?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_status_serializes_lowercase() {
        let json = serde_json::to_string(&StatusMessage::new("42", SubmissionStatus::Processing)).unwrap();
        assert_eq!(json, r#"{"id":"42","status":"processing","reason":""}"#);
    }

    #[test]
    fn test_json_lines_reporter() {
        let mut reporter = JsonLinesReporter::new(Vec::new());
        reporter.report(&StatusMessage::new("a", SubmissionStatus::Done)).unwrap();
        reporter.report(&StatusMessage::failed("b", "boom")).unwrap();

        let text = String::from_utf8(reporter.into_inner()).unwrap();
        let lines: Vec<StatusMessage> = text.lines().map(|l| serde_json::from_str(l).unwrap()).collect();
        assert_eq!(lines[0].status, SubmissionStatus::Done);
        assert_eq!(lines[1], StatusMessage::failed("b", "boom"));
    }
}
