//! Append-only usage event log.
//!
//! The sink is dependency-injected so callers stay testable without a
//! filesystem, and a write failure must never interrupt the primary flow.

use chrono::Local;
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::EventError;

const CSV_HEADER: &str = "timestamp,event_name,title_analyzed,score_given,description_provided";

/// One usage record: what happened, when, and the optional analysis context.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub timestamp: String,
    pub event_name: String,
    pub title_analyzed: Option<String>,
    pub score_given: Option<u8>,
    pub description_provided: Option<bool>,
}

impl Event {
    pub fn now(event_name: &str) -> Self {
        Self {
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            event_name: event_name.to_string(),
            title_analyzed: None,
            score_given: None,
            description_provided: None,
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: &str) -> Self {
        self.title_analyzed = Some(title.to_string());
        self
    }

    #[must_use]
    pub fn with_score(mut self, score: u8) -> Self {
        self.score_given = Some(score);
        self
    }

    #[must_use]
    pub fn with_description_provided(mut self, provided: bool) -> Self {
        self.description_provided = Some(provided);
        self
    }
}

pub trait EventSink: Send + Sync {
    fn record(&self, event: &Event) -> Result<(), EventError>;
}

/// CSV-backed sink. Creates the file (with a header row) on first write
/// and appends one row per event after that.
pub struct CsvEventSink {
    path: PathBuf,
}

impl CsvEventSink {
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }

    fn to_row(event: &Event) -> String {
        let columns = [
            escape_field(&event.timestamp),
            escape_field(&event.event_name),
            event.title_analyzed.as_deref().map(escape_field).unwrap_or_default(),
            event.score_given.map(|s| s.to_string()).unwrap_or_default(),
            event
                .description_provided
                .map(|p| p.to_string())
                .unwrap_or_default(),
        ];
        columns.join(",")
    }
}

impl EventSink for CsvEventSink {
    fn record(&self, event: &Event) -> Result<(), EventError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let is_new = !self.path.exists();
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        if is_new {
            writeln!(file, "{CSV_HEADER}")?;
        }
        writeln!(file, "{}", Self::to_row(event))?;
        Ok(())
    }
}

/// Sink that discards everything. Used in tests and offline runs.
pub struct NullEventSink;

impl EventSink for NullEventSink {
    fn record(&self, _event: &Event) -> Result<(), EventError> {
        Ok(())
    }
}

/// Minimal RFC 4180 quoting: fields with commas, quotes, or newlines are
/// wrapped in double quotes, with embedded quotes doubled.
fn escape_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
