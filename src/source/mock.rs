// In-memory collaborators for exercising providers without the real OS

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use super::{ClockSource, Collaborators, CommandRunner, FileReader, RawText};
use crate::error::{SourceError, UnavailableKind};

#[derive(Debug, Clone)]
enum Outcome {
    Output(RawText),
    Timeout(Duration),
}

/// Canned command output, file contents and clock readings.
/// Unknown commands and paths behave like a missing program or file.
#[derive(Debug, Clone, Default)]
pub struct MockSources {
    commands: HashMap<String, Outcome>,
    files: HashMap<String, String>,
    uptime: Option<i64>,
    now: i64,
}

impl MockSources {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_command(&mut self, command: &str, stdout: impl Into<String>) -> &mut Self {
        self.commands
            .insert(command.to_string(), Outcome::Output(RawText::success(stdout)));
        self
    }

    pub fn add_failed_command(&mut self, command: &str, stderr: impl Into<String>) -> &mut Self {
        self.commands
            .insert(command.to_string(), Outcome::Output(RawText::failure(stderr)));
        self
    }

    pub fn add_timeout(&mut self, command: &str, after: Duration) -> &mut Self {
        self.commands
            .insert(command.to_string(), Outcome::Timeout(after));
        self
    }

    pub fn add_file(&mut self, path: &str, content: impl Into<String>) -> &mut Self {
        self.files.insert(path.to_string(), content.into());
        self
    }

    pub fn set_uptime(&mut self, seconds: i64) -> &mut Self {
        self.uptime = Some(seconds);
        self
    }

    pub fn set_now(&mut self, epoch: i64) -> &mut Self {
        self.now = epoch;
        self
    }

    pub fn into_collaborators(self) -> Collaborators {
        let shared = Arc::new(self);
        Collaborators {
            runner: shared.clone(),
            files: shared.clone(),
            clock: shared,
        }
    }
}

impl CommandRunner for MockSources {
    fn run(&self, command: &str) -> Result<RawText, SourceError> {
        match self.commands.get(command) {
            Some(Outcome::Output(raw)) => Ok(raw.clone()),
            Some(Outcome::Timeout(after)) => Err(SourceError::Timeout {
                command: command.to_string(),
                after: *after,
            }),
            None => Err(SourceError::unavailable(
                command,
                UnavailableKind::CommandNotFound,
                "no such command",
            )),
        }
    }
}

impl FileReader for MockSources {
    fn read(&self, path: &str) -> Result<String, SourceError> {
        self.files.get(path).cloned().ok_or_else(|| {
            SourceError::unavailable(path, UnavailableKind::FileNotFound, "no such file")
        })
    }
}

impl ClockSource for MockSources {
    fn uptime_seconds(&self) -> Result<i64, SourceError> {
        self.uptime.ok_or_else(|| {
            SourceError::unavailable("mock clock", UnavailableKind::Io, "uptime not set")
        })
    }

    fn now_epoch(&self) -> i64 {
        self.now
    }
}
