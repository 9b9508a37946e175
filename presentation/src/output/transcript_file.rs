//! Plain-text transcript file

use crate::output::console::ConsoleFormatter;
use crate::output::formatter::OutputFormatter;
use arena_domain::{DebateOutcome, Transcript};
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Writes the finished debate to a file without colour.
///
/// The file is created (and truncated) when the writer is opened, so a
/// stale transcript from an earlier run never survives a new session.
pub struct TranscriptFileWriter {
    path: PathBuf,
    writer: BufWriter<File>,
}

impl TranscriptFileWriter {
    pub fn create(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        let file = File::create(&path)?;
        Ok(Self {
            path,
            writer: BufWriter::new(file),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn write_outcome(mut self, outcome: &DebateOutcome) -> io::Result<()> {
        let text = ConsoleFormatter::plain().format(outcome);
        self.writer.write_all(text.as_bytes())?;
        self.writer.flush()
    }

    /// Turns accepted before the session failed, followed by `reason`.
    pub fn write_partial(
        mut self,
        topic: &str,
        max_turns: u32,
        transcript: &Transcript,
        reason: &str,
    ) -> io::Result<()> {
        let formatter = ConsoleFormatter::plain();
        let mut text = formatter.header(topic, max_turns);
        text.push_str(&formatter.turns(transcript.turns(), max_turns));
        text.push_str(&format!("Debate aborted: {}\n", reason));
        self.writer.write_all(text.as_bytes())?;
        self.writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::console::tests::sample_outcome;

    #[test]
    fn test_writes_plain_transcript() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("debate.txt");

        let writer = TranscriptFileWriter::create(&path).unwrap();
        writer.write_outcome(&sample_outcome()).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains("--- Turn 1/5 ---"));
        assert!(text.contains("Debater B: Shops depend on drivers."));
        assert!(!text.contains('\u{1b}'));
    }

    #[test]
    fn test_partial_transcript_survives_failure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("debate.txt");
        let outcome = sample_outcome();

        let writer = TranscriptFileWriter::create(&path).unwrap();
        writer
            .write_partial(
                outcome.topic.content(),
                outcome.max_turns,
                &outcome.transcript,
                "Backend unavailable: connection refused",
            )
            .unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains("Topic: Should cities ban cars downtown?"));
        assert!(text.contains("Debater A: Cars choke the city centre."));
        assert!(text.ends_with("Debate aborted: Backend unavailable: connection refused\n"));
    }

    #[test]
    fn test_truncates_on_open() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("debate.txt");
        fs::write(&path, "old transcript that must vanish").unwrap();

        let _writer = TranscriptFileWriter::create(&path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }
}
