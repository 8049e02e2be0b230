// Linux: /proc pseudo-files plus df and iostat

use super::{
    CounterColumns, InterfaceFormat, InterfaceKey, KeyColumn, Layout, LoadFormat, Metric, Offset,
    Source, TableFormat,
};

pub(super) static LAYOUT: Layout = Layout {
    memory: &["MemTotal", "MemFree", "MemAvailable", "Buffers", "Cached"],
    // Filename Type Size Used Priority
    swap: TableFormat::new(1, KeyColumn::First, &["type", "size", "used", "priority"]),
    load: LoadFormat::Decimal,
    // Filesystem 1024-blocks Used Available Capacity Mounted-on
    fs_usage: TableFormat::new(
        1,
        KeyColumn::First,
        &["size", "used", "free", "percent", "mount"],
    )
    .with_rest_in_last(),
    // Filesystem Inodes IUsed IFree IUse% Mounted-on
    inodes: TableFormat::new(
        1,
        KeyColumn::First,
        &["inodes", "used", "free", "percent", "mount"],
    )
    .with_rest_in_last(),
    // banner, blank, then sysstat 12+:
    // Device tps kB_read/s kB_wrtn/s kB_dscd/s kB_read kB_wrtn kB_dscd
    io_stats: TableFormat::new(
        3,
        KeyColumn::First,
        &["tps", "kbrs", "kbws", "kbds", "kbr", "kbw", "kbd"],
    ),
    // name: rx bytes packets errs drop fifo frame compressed multicast
    //       tx bytes packets errs drop fifo colls carrier compressed
    interfaces: InterfaceFormat {
        header_lines: 2,
        placeholder: None,
        key: InterfaceKey::Colon,
        inbound: CounterColumns {
            bytes: Offset::End(16),
            packets: Offset::End(15),
            errors: Offset::End(14),
            dropped: Some(Offset::End(13)),
        },
        outbound: CounterColumns {
            bytes: Offset::End(8),
            packets: Offset::End(7),
            errors: Offset::End(6),
            dropped: Some(Offset::End(5)),
        },
    },
};

pub(super) fn source(metric: Metric, path: &str) -> Source {
    match metric {
        Metric::Uptime => Source::File("/proc/uptime"),
        Metric::Memory => Source::File("/proc/meminfo"),
        Metric::Swap => Source::File("/proc/swaps"),
        Metric::LoadAverage => Source::File("/proc/loadavg"),
        Metric::FsUsage => Source::command("df -k -P", path),
        Metric::Inodes => Source::command("df -i -P", path),
        Metric::IoStat => Source::command("iostat -d -N -k", path),
        Metric::Interfaces => Source::File("/proc/net/dev"),
    }
}
