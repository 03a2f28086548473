//! Transcript Export
//!
//! Renders a conversation into the downloadable plain-text artifact:
//! a dated header, one timestamped block per message, and a branded
//! footer, with a date-stamped suggested filename.

use std::path::Path;

use chrono::{Local, Utc};
use thiserror::Error;

use solarbot_config::constants::brand;
use solarbot_core::{ChatMessage, ChatRole};

const SEPARATOR_WIDTH: usize = 33;

/// Transcript export errors
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("no messages to export")]
    NoContent,
    #[error("failed to write transcript: {0}")]
    Io(#[from] std::io::Error),
}

/// A rendered transcript ready to hand to the user
#[derive(Debug, Clone)]
pub struct ChatExport {
    /// Full plain-text artifact
    pub text: String,
    /// Date-stamped download name, e.g. `SolarBot_Chat_2026-08-24.txt`
    pub suggested_filename: String,
}

impl ChatExport {
    /// Write the artifact to disk
    pub fn write_to(&self, path: &Path) -> Result<(), ExportError> {
        std::fs::write(path, &self.text)?;
        Ok(())
    }
}

/// Render the message history into the export artifact.
///
/// Fails with [`ExportError::NoContent`] when there is nothing to export.
pub fn render_transcript(messages: &[ChatMessage]) -> Result<ChatExport, ExportError> {
    if messages.is_empty() {
        return Err(ExportError::NoContent);
    }

    let separator = "=".repeat(SEPARATOR_WIDTH);
    let mut text = format!("=== {} Chat Transcript ===\n", brand::BOT_NAME);
    text.push_str(&format!(
        "Date: {}\n",
        Local::now().format("%-m/%-d/%Y, %-I:%M:%S %p")
    ));
    text.push_str(&format!("Total Messages: {}\n", messages.len()));
    text.push_str(&separator);
    text.push_str("\n\n");

    for message in messages {
        let sender = match message.role {
            ChatRole::User => "You",
            ChatRole::Assistant => brand::BOT_NAME,
        };
        let time = message.timestamp.with_timezone(&Local).format("%-I:%M:%S %p");
        text.push_str(&format!("[{}] {}:\n{}\n\n", time, sender, message.content));
    }

    text.push_str(&separator);
    text.push('\n');
    text.push_str(&format!(
        "Generated by {} - {}\n",
        brand::BOT_NAME,
        brand::TAGLINE
    ));

    let suggested_filename = format!("{}_Chat_{}.txt", brand::BOT_NAME, Utc::now().format("%Y-%m-%d"));

    tracing::debug!(
        messages = messages.len(),
        filename = %suggested_filename,
        "transcript rendered"
    );

    Ok(ChatExport {
        text,
        suggested_filename,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_history() -> Vec<ChatMessage> {
        vec![
            ChatMessage::assistant("Hi there! Ask me about solar."),
            ChatMessage::user("how much does it cost?"),
            ChatMessage::assistant("Costs vary by system size."),
        ]
    }

    #[test]
    fn test_empty_history_is_rejected() {
        let result = render_transcript(&[]);
        assert!(matches!(result, Err(ExportError::NoContent)));
    }

    #[test]
    fn test_artifact_structure() {
        let export = render_transcript(&sample_history()).unwrap();

        assert!(export.text.starts_with("=== SolarBot Chat Transcript ===\n"));
        assert!(export.text.contains("Date: "));
        assert!(export.text.contains("Total Messages: 3\n"));
        assert!(export.text.contains("] You:\nhow much does it cost?\n"));
        assert!(export.text.contains("] SolarBot:\nHi there! Ask me about solar.\n"));
        assert!(export
            .text
            .ends_with("Generated by SolarBot - Your Solar Energy Assistant\n"));
    }

    #[test]
    fn test_separator_width() {
        let export = render_transcript(&sample_history()).unwrap();
        let separator = "=".repeat(33);
        assert_eq!(
            export.text.matches(&separator).count(),
            2,
            "one separator after the header, one before the footer"
        );
    }

    #[test]
    fn test_suggested_filename_shape() {
        let export = render_transcript(&sample_history()).unwrap();
        assert!(export.suggested_filename.starts_with("SolarBot_Chat_"));
        assert!(export.suggested_filename.ends_with(".txt"));
    }

    #[test]
    fn test_write_to_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("transcript.txt");

        let export = render_transcript(&sample_history()).unwrap();
        export.write_to(&path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, export.text);
    }
}
