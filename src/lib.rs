// Host OS statistics: per-platform raw sources and the parsers that turn them into records

pub mod config;
pub mod error;
pub mod host;
pub mod models;
pub mod parser;
pub mod platform;
pub mod provider;
pub mod source;

pub use error::{Error, ParseError, Result, SourceError};
pub use host::Host;
pub use platform::{Metric, Platform};
pub use provider::Provider;
