// Error taxonomy: "could not get data" (SourceError) vs "got data but could not understand it" (ParseError)

use std::time::Duration;

/// Why a raw source could not be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnavailableKind {
    FileNotFound,
    PermissionDenied,
    CommandNotFound,
    NonZeroExit,
    Io,
}

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("source unavailable ({kind:?}): {source_name}: {reason}")]
    Unavailable {
        source_name: String,
        kind: UnavailableKind,
        reason: String,
    },

    #[error("{command} timed out after {after:?}")]
    Timeout { command: String, after: Duration },
}

impl SourceError {
    pub(crate) fn unavailable(
        source_name: impl Into<String>,
        kind: UnavailableKind,
        reason: impl Into<String>,
    ) -> Self {
        SourceError::Unavailable {
            source_name: source_name.into(),
            kind,
            reason: reason.into(),
        }
    }

    pub fn kind(&self) -> Option<UnavailableKind> {
        match self {
            SourceError::Unavailable { kind, .. } => Some(*kind),
            SourceError::Timeout { .. } => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Input has fewer lines than the format's header.
    #[error("expected at least {expected} header lines, got {found}")]
    HeaderSkip { expected: usize, found: usize },

    /// No usable token where one was required.
    #[error("no {what} token in input")]
    Tokenize { what: &'static str },

    #[error("row {row} has {found} tokens, expected {expected}: {line:?}")]
    MalformedRow {
        row: usize,
        line: String,
        expected: usize,
        found: usize,
    },

    #[error("invalid number for {field}: {value:?}")]
    InvalidNumber { field: String, value: String },

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("field {0} not present in source")]
    FieldNotFound(String),
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("unsupported platform: {0}")]
    UnsupportedPlatform(String),

    #[error("sampling task failed: {0}")]
    Task(String),
}

impl Error {
    pub fn is_timeout(&self) -> bool {
        matches!(self, Error::Source(SourceError::Timeout { .. }))
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
