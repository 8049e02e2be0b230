// Platform variants and their per-metric raw sources and field layouts

mod freebsd;
mod linux;
mod sunos;

pub(crate) use sunos::BOOT_TIME_LABEL as SUNOS_BOOT_TIME_LABEL;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Linux,
    FreeBsd,
    SunOs,
}

impl Platform {
    /// Platform of the running process, decided once by the caller at startup.
    pub fn detect() -> Result<Self, Error> {
        Self::from_os_name(std::env::consts::OS)
    }

    /// Accepts `uname -s` style names and Rust target OS names, case-insensitively.
    pub fn from_os_name(name: &str) -> Result<Self, Error> {
        match name.trim().to_ascii_lowercase().as_str() {
            "linux" => Ok(Platform::Linux),
            "freebsd" => Ok(Platform::FreeBsd),
            "sunos" | "solaris" | "illumos" => Ok(Platform::SunOs),
            other => Err(Error::UnsupportedPlatform(other.to_string())),
        }
    }

    pub fn layout(self) -> &'static Layout {
        match self {
            Platform::Linux => &linux::LAYOUT,
            Platform::FreeBsd => &freebsd::LAYOUT,
            Platform::SunOs => &sunos::LAYOUT,
        }
    }

    /// Raw source backing `metric`; `path` narrows the storage commands to one mount or device.
    pub fn source(self, metric: Metric, path: &str) -> Source {
        match self {
            Platform::Linux => linux::source(metric, path),
            Platform::FreeBsd => freebsd::source(metric, path),
            Platform::SunOs => sunos::source(metric, path),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Platform::Linux => "Linux",
            Platform::FreeBsd => "FreeBSD",
            Platform::SunOs => "SunOS",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    Uptime,
    Memory,
    Swap,
    LoadAverage,
    FsUsage,
    Inodes,
    IoStat,
    Interfaces,
}

impl Metric {
    pub const ALL: [Metric; 8] = [
        Metric::Uptime,
        Metric::Memory,
        Metric::Swap,
        Metric::LoadAverage,
        Metric::FsUsage,
        Metric::Inodes,
        Metric::IoStat,
        Metric::Interfaces,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Metric::Uptime => "uptime",
            Metric::Memory => "memory",
            Metric::Swap => "swap",
            Metric::LoadAverage => "load_average",
            Metric::FsUsage => "fs_usage",
            Metric::Inodes => "inodes",
            Metric::IoStat => "io_stat",
            Metric::Interfaces => "interfaces",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a metric's raw text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    File(&'static str),
    Command(String),
    /// Monotonic time-since-boot clock; no text source.
    Clock,
}

impl Source {
    fn command(base: &str, path: &str) -> Source {
        let path = path.trim();
        if path.is_empty() {
            Source::Command(base.to_string())
        } else {
            Source::Command(format!("{base} {path}"))
        }
    }

    pub fn describe(&self) -> &str {
        match self {
            Source::File(path) => path,
            Source::Command(command) => command,
            Source::Clock => "monotonic clock",
        }
    }
}

/// Which token of a data row names the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyColumn {
    /// Key is token 0; fields start at token 1.
    First,
    /// Key is the last token; fields start at token 0 (SunOS iostat).
    Last,
}

/// Layout of a whitespace-separated table.
///
/// `header_lines` leading lines are dropped. Trailing blank lines and blank
/// lines between data rows are ignored. Every data row carries exactly one
/// token per field plus the key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableFormat {
    pub header_lines: usize,
    pub key: KeyColumn,
    pub fields: &'static [&'static str],
    /// The last field takes the rest of the row, rejoined with single
    /// spaces (df mount points may contain spaces).
    pub rest_in_last: bool,
    /// Key of a summary row some tools append (pstat's `Total`); dropped.
    pub summary_key: Option<&'static str>,
}

impl TableFormat {
    pub const fn new(header_lines: usize, key: KeyColumn, fields: &'static [&'static str]) -> Self {
        Self {
            header_lines,
            key,
            fields,
            rest_in_last: false,
            summary_key: None,
        }
    }

    pub const fn with_rest_in_last(mut self) -> Self {
        self.rest_in_last = true;
        self
    }

    pub const fn with_summary(mut self, key: &'static str) -> Self {
        self.summary_key = Some(key);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadFormat {
    /// First three tokens containing a decimal point.
    Decimal,
    /// Fixed-point integers under the given labels, divided by `scale`.
    Scaled {
        labels: [&'static str; 3],
        scale: u32,
    },
}

/// Token position in an interface row; the key is always token 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Offset {
    Start(usize),
    /// Counted from the end: `End(1)` is the last token.
    End(usize),
}

impl Offset {
    pub fn index(self, len: usize) -> usize {
        match self {
            Offset::Start(i) => i,
            Offset::End(n) => len - n,
        }
    }

    /// Tokens a row needs so this offset lands after the key.
    pub fn min_tokens(self) -> usize {
        match self {
            Offset::Start(i) => i + 1,
            Offset::End(n) => n + 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterColumns {
    pub bytes: Offset,
    pub packets: Offset,
    pub errors: Offset,
    pub dropped: Option<Offset>,
}

impl CounterColumns {
    fn offsets(&self) -> impl Iterator<Item = Offset> {
        [Some(self.bytes), Some(self.packets), Some(self.errors), self.dropped]
            .into_iter()
            .flatten()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterfaceKey {
    /// `name:` possibly glued to the first counter (`eth0:1234`).
    Colon,
    /// Token 0 as-is.
    Name,
    /// Token 0 plus an address-family suffix token, joined as `name/suffix`.
    NameWithSuffix { index: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InterfaceFormat {
    pub header_lines: usize,
    /// Token printed where a counter does not apply; read as zero.
    pub placeholder: Option<&'static str>,
    pub key: InterfaceKey,
    pub inbound: CounterColumns,
    pub outbound: CounterColumns,
}

impl InterfaceFormat {
    pub fn min_tokens(&self) -> usize {
        let suffix = match self.key {
            InterfaceKey::NameWithSuffix { index } => index + 1,
            _ => 1,
        };
        self.inbound
            .offsets()
            .chain(self.outbound.offsets())
            .map(Offset::min_tokens)
            .fold(suffix, usize::max)
    }
}

/// Per-platform field table for every metric.
#[derive(Debug)]
pub struct Layout {
    pub memory: &'static [&'static str],
    pub swap: TableFormat,
    pub load: LoadFormat,
    pub fs_usage: TableFormat,
    pub inodes: TableFormat,
    pub io_stats: TableFormat,
    pub interfaces: InterfaceFormat,
}
