// SunOS: kstat, swap, df, iostat and dladm output

use super::{
    CounterColumns, InterfaceFormat, InterfaceKey, KeyColumn, Layout, LoadFormat, Metric, Offset,
    Source, TableFormat,
};

pub(crate) const BOOT_TIME_LABEL: &str = "unix:0:system_misc:boot_time";

/// avenrun values are fixed-point with 8 fractional bits.
const LOAD_SCALE: u32 = 256;

pub(super) static LAYOUT: Layout = Layout {
    // Page counts; multiply by the page size for bytes.
    memory: &[
        "unix:0:system_pages:physmem",
        "unix:0:system_pages:freemem",
        "unix:0:system_pages:availrmem",
        "unix:0:system_pages:pagestotal",
        "unix:0:system_pages:pagesfree",
    ],
    // swapfile dev swaplo blocks free
    swap: TableFormat::new(1, KeyColumn::First, &["dev", "swaplo", "blocks", "free"]),
    load: LoadFormat::Scaled {
        labels: [
            "unix:0:system_misc:avenrun_1min",
            "unix:0:system_misc:avenrun_5min",
            "unix:0:system_misc:avenrun_15min",
        ],
        scale: LOAD_SCALE,
    },
    // Filesystem kbytes used avail capacity Mounted-on
    fs_usage: TableFormat::new(
        1,
        KeyColumn::First,
        &["kbytes", "used", "avail", "capacity", "mount"],
    )
    .with_rest_in_last(),
    // Filesystem iused ifree %iused Mounted-on
    inodes: TableFormat::new(1, KeyColumn::First, &["used", "free", "percent", "mount"])
        .with_rest_in_last(),
    // "extended device statistics", then r/s w/s kr/s kw/s wait actv wsvc_t asvc_t %w %b device
    io_stats: TableFormat::new(
        2,
        KeyColumn::Last,
        &["rs", "ws", "krs", "kws", "wait", "actv", "wsvc_t", "asvc_t", "w", "b"],
    ),
    // LINK IPACKETS RBYTES IERRORS OPACKETS OBYTES OERRORS; no drop counters
    interfaces: InterfaceFormat {
        header_lines: 1,
        placeholder: Some("N/A"),
        key: InterfaceKey::Name,
        inbound: CounterColumns {
            bytes: Offset::Start(2),
            packets: Offset::Start(1),
            errors: Offset::Start(3),
            dropped: None,
        },
        outbound: CounterColumns {
            bytes: Offset::Start(5),
            packets: Offset::Start(4),
            errors: Offset::Start(6),
            dropped: None,
        },
    },
};

pub(super) fn source(metric: Metric, path: &str) -> Source {
    match metric {
        Metric::Uptime => Source::Command(format!("kstat -p {BOOT_TIME_LABEL}")),
        Metric::Memory => Source::Command("kstat -p unix:0:system_pages".to_string()),
        Metric::Swap => Source::Command("swap -l".to_string()),
        Metric::LoadAverage => Source::Command("kstat -p unix:0:system_misc".to_string()),
        Metric::FsUsage => Source::command("df -k", path),
        Metric::Inodes => Source::command("df -o i", path),
        Metric::IoStat => Source::command("iostat -n -x", path),
        Metric::Interfaces => Source::Command("dladm show-link -s".to_string()),
    }
}
