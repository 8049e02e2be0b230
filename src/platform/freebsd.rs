// FreeBSD: sysctl, pstat, df, iostat and netstat output; uptime from the monotonic clock

use super::{
    CounterColumns, InterfaceFormat, InterfaceKey, KeyColumn, Layout, LoadFormat, Metric, Offset,
    Source, TableFormat,
};

// df -i appends inode columns to the usage columns, so one layout serves both.
const DF_FIELDS: &[&str] = &[
    "blocks", "used", "free", "percent", "iused", "ifree", "ipercent", "mount",
];

pub(super) static LAYOUT: Layout = Layout {
    // Page counts; multiply by the page size for bytes.
    memory: &[
        "vm.stats.vm.v_page_count",
        "vm.stats.vm.v_free_count",
        "vm.stats.vm.v_inactive_count",
        "vm.stats.vm.v_cache_count",
        "vm.stats.vm.v_active_count",
        "vm.stats.vm.v_wire_count",
    ],
    // Device 1K-blocks Used Avail Capacity; a Total row follows when
    // there are several devices.
    swap: TableFormat::new(1, KeyColumn::First, &["blocks", "used", "avail", "capacity"])
        .with_summary("Total"),
    load: LoadFormat::Decimal,
    fs_usage: TableFormat::new(1, KeyColumn::First, DF_FIELDS).with_rest_in_last(),
    inodes: TableFormat::new(1, KeyColumn::First, DF_FIELDS).with_rest_in_last(),
    // "extended device statistics", then
    // device r/s w/s kr/s kw/s ms/r ms/w ms/o ms/t qlen %b
    io_stats: TableFormat::new(
        2,
        KeyColumn::First,
        &["rs", "ws", "krs", "kws", "ms_r", "ms_w", "ms_o", "ms_t", "qlen", "b"],
    ),
    // Name Mtu Network Address Ipkts Ierrs Idrop Ibytes Opkts Oerrs Obytes Coll
    // Address is blank on some rows, so counters are read from the end.
    // No outbound drop column without -d.
    interfaces: InterfaceFormat {
        header_lines: 1,
        placeholder: Some("-"),
        key: InterfaceKey::NameWithSuffix { index: 3 },
        inbound: CounterColumns {
            bytes: Offset::End(5),
            packets: Offset::End(8),
            errors: Offset::End(7),
            dropped: Some(Offset::End(6)),
        },
        outbound: CounterColumns {
            bytes: Offset::End(2),
            packets: Offset::End(4),
            errors: Offset::End(3),
            dropped: None,
        },
    },
};

pub(super) fn source(metric: Metric, path: &str) -> Source {
    match metric {
        Metric::Uptime => Source::Clock,
        Metric::Memory => Source::Command("sysctl vm.stats.vm".to_string()),
        Metric::Swap => Source::Command("pstat -s -k".to_string()),
        Metric::LoadAverage => Source::Command("sysctl -n vm.loadavg".to_string()),
        Metric::FsUsage | Metric::Inodes => Source::command("df -k -i", path),
        Metric::IoStat => Source::command("iostat -d -x", path),
        Metric::Interfaces => Source::Command("netstat -i -b -n".to_string()),
    }
}
