// Source provider: resolve a metric to its platform source and read the raw text

use tracing::debug;

use crate::error::{Error, ParseError, SourceError};
use crate::parser::{elapsed_from_proc_uptime, kstat_integer};
use crate::platform::{Metric, Platform, SUNOS_BOOT_TIME_LABEL, Source};
use crate::source::{Collaborators, RawText};

/// Reads raw text for one platform. Holds no state between calls.
#[derive(Clone)]
pub struct Provider {
    platform: Platform,
    path: String,
    collaborators: Collaborators,
}

impl Provider {
    pub fn new(platform: Platform, collaborators: Collaborators) -> Self {
        Self {
            platform,
            path: String::new(),
            collaborators,
        }
    }

    /// Restrict df / iostat to one mount point or device.
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn source(&self, metric: Metric) -> Source {
        self.platform.source(metric, &self.path)
    }

    /// Raw text for `metric` exactly as the collaborator produced it; a
    /// failed command comes back failure-marked, not as an error.
    pub fn fetch(&self, metric: Metric) -> Result<RawText, SourceError> {
        match self.source(metric) {
            Source::File(path) => {
                let text = self.collaborators.files.read(path)?;
                debug!(metric = %metric, path, bytes = text.len(), "read file");
                Ok(RawText::success(text))
            }
            Source::Command(command) => {
                let raw = self.collaborators.runner.run(&command)?;
                debug!(metric = %metric, command = %command, succeeded = raw.succeeded(), "ran command");
                Ok(raw)
            }
            Source::Clock => {
                let secs = self.collaborators.clock.uptime_seconds()?;
                Ok(RawText::success(secs.to_string()))
            }
        }
    }

    /// Successful raw text only; failure output becomes `SourceError`.
    pub fn fetch_success(&self, metric: Metric) -> Result<RawText, SourceError> {
        let source = self.source(metric);
        self.fetch(metric)?.into_success(source.describe())
    }

    /// Whole seconds since boot.
    pub fn fetch_uptime(&self) -> Result<i64, Error> {
        let raw = self.fetch_success(Metric::Uptime)?;
        let secs = match self.platform {
            Platform::Linux | Platform::FreeBsd => elapsed_from_proc_uptime(raw.text())?,
            Platform::SunOs => {
                let boot_time = kstat_integer(raw.text(), SUNOS_BOOT_TIME_LABEL)?;
                let now = self.collaborators.clock.now_epoch();
                now.checked_sub(boot_time).ok_or_else(|| {
                    ParseError::InvalidInput(format!("boot time {boot_time} out of range for now {now}"))
                })?
            }
        };
        Ok(secs)
    }

    pub fn fetch_memory(&self) -> Result<RawText, SourceError> {
        self.fetch_success(Metric::Memory)
    }

    pub fn fetch_swap(&self) -> Result<RawText, SourceError> {
        self.fetch_success(Metric::Swap)
    }

    pub fn fetch_loadavg(&self) -> Result<RawText, SourceError> {
        self.fetch_success(Metric::LoadAverage)
    }

    pub fn fetch_fsusage(&self) -> Result<RawText, SourceError> {
        self.fetch_success(Metric::FsUsage)
    }

    pub fn fetch_inodes(&self) -> Result<RawText, SourceError> {
        self.fetch_success(Metric::Inodes)
    }

    pub fn fetch_iostat(&self) -> Result<RawText, SourceError> {
        self.fetch_success(Metric::IoStat)
    }

    pub fn fetch_interfaces(&self) -> Result<RawText, SourceError> {
        self.fetch_success(Metric::Interfaces)
    }
}
