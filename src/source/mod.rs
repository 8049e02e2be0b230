// Collaborators that produce raw text: command runner, pseudo-file reader, clock

mod fs;
mod mock;
mod shell;
mod system;

pub use fs::ProcFs;
pub use mock::MockSources;
pub use shell::ShellRunner;
pub use system::{SystemClock, system_page_size};

use std::sync::Arc;
use std::time::Duration;

use crate::error::{SourceError, UnavailableKind};

/// Unmodified output of a file read or command run, with the command's
/// exit status. On failure `text` holds stderr only; on success stdout only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawText {
    text: String,
    succeeded: bool,
}

impl RawText {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            succeeded: true,
        }
    }

    pub fn failure(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            succeeded: false,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn succeeded(&self) -> bool {
        self.succeeded
    }

    /// Keep successful output; a failure becomes `SourceError::Unavailable`
    /// carrying the stderr text, so it never reaches a parser.
    pub fn into_success(self, source_name: &str) -> Result<RawText, SourceError> {
        if self.succeeded {
            Ok(self)
        } else {
            Err(SourceError::unavailable(
                source_name,
                UnavailableKind::NonZeroExit,
                self.text.trim(),
            ))
        }
    }
}

pub trait CommandRunner: Send + Sync {
    /// Run `command` (whitespace-separated program and arguments, no shell).
    /// A non-zero exit is a failure-marked `RawText`; spawn errors and
    /// timeouts are `Err`.
    fn run(&self, command: &str) -> Result<RawText, SourceError>;
}

pub trait FileReader: Send + Sync {
    fn read(&self, path: &str) -> Result<String, SourceError>;
}

pub trait ClockSource: Send + Sync {
    /// Seconds since boot from the platform's monotonic clock.
    fn uptime_seconds(&self) -> Result<i64, SourceError>;

    /// Current wall-clock time, seconds since the Unix epoch.
    fn now_epoch(&self) -> i64;
}

/// The I/O shims a provider reads through.
#[derive(Clone)]
pub struct Collaborators {
    pub runner: Arc<dyn CommandRunner>,
    pub files: Arc<dyn FileReader>,
    pub clock: Arc<dyn ClockSource>,
}

impl Collaborators {
    /// Real processes, files and clocks; commands may block indefinitely.
    pub fn system() -> Self {
        Self {
            runner: Arc::new(ShellRunner::new()),
            files: Arc::new(ProcFs),
            clock: Arc::new(SystemClock),
        }
    }

    /// Like [`Collaborators::system`], but every command is killed after `timeout`.
    pub fn system_with_timeout(timeout: Duration) -> Self {
        Self {
            runner: Arc::new(ShellRunner::with_timeout(timeout)),
            ..Self::system()
        }
    }
}
