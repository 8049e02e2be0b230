// Shared fixtures: captured tool output per platform

#![allow(dead_code)]

use hoststat::source::MockSources;

pub const LINUX_MEMINFO: &str = "\
MemTotal:       16384000 kB
MemFree:         2048000 kB
MemAvailable:    8192000 kB
Buffers:          512000 kB
Cached:          4096000 kB
SwapCached:            0 kB
SwapTotal:       2097148 kB
SwapFree:        2097148 kB
";

pub const LINUX_SWAPS: &str = "\
Filename\t\t\t\tType\t\tSize\t\tUsed\t\tPriority
/dev/sda2                               partition\t2097148\t\t0\t\t-2
/swapfile                               file\t\t1048572\t\t512\t\t-3
";

pub const LINUX_DF: &str = "\
Filesystem     1024-blocks     Used Available Capacity Mounted on
/dev/sda1         102400    51200     51200      50% /
tmpfs             8192        0      8192       0% /dev/shm
/dev/sdb1        2048000  1024000   1024000      50% /data

";

pub const LINUX_DF_INODES: &str = "\
Filesystem      Inodes  IUsed   IFree IUse% Mounted on
/dev/sda1       655360 123456  531904   19% /
";

pub const LINUX_IOSTAT: &str = "\
Linux 6.1.0-18-amd64 (host) \t10/18/2026 \t_x86_64_\t(8 CPU)

Device             tps    kB_read/s    kB_wrtn/s    kB_dscd/s    kB_read    kB_wrtn    kB_dscd
sda              12.34       100.50       200.25         0.00    1234567    2345678          0
nvme0n1           3.21        10.00        20.00         1.50      12345      23456       4096


";

// sysstat before 12 had no discard columns.
pub const LINUX_IOSTAT_LEGACY: &str = "\
Linux 4.19.0-6-amd64 (host) \t10/18/2026 \t_x86_64_\t(8 CPU)

Device             tps    kB_read/s    kB_wrtn/s    kB_read    kB_wrtn
sda              12.34       100.50       200.25    1234567    2345678

";

pub const LINUX_NET_DEV: &str = "\
Inter-|   Receive                                                |  Transmit
 face |bytes    packets errs drop fifo frame compressed multicast|bytes    packets errs drop fifo colls carrier compressed
    lo:  123456     1000    0    0    0     0          0         0   123456     1000    0    0    0     0       0          0
  eth0:98765432  654321    3    7    0     0          0       120 12345678   98765    1    2    0     0       0          0
";

pub const FREEBSD_SYSCTL_VM: &str = "\
vm.stats.vm.v_page_count: 2031234
vm.stats.vm.v_free_count: 1500000
vm.stats.vm.v_inactive_count: 200000
vm.stats.vm.v_active_count: 250000
vm.stats.vm.v_wire_count: 80000
vm.stats.vm.v_page_size: 4096
";

pub const FREEBSD_DF: &str = "\
Filesystem  1K-blocks    Used    Avail Capacity iused  ifree %iused  Mounted on
/dev/ada0p2  20307196 4538560 14144064    24%  450000 2300000   16%   /
devfs               1       1        0   100%       0       0  100%   /dev
";

pub const FREEBSD_IOSTAT: &str = "\
                        extended device statistics
device       r/s     w/s     kr/s     kw/s  ms/r  ms/w  ms/o  ms/t qlen  %b
ada0           1       3     20.1     40.2     2     5     0     4    0   1
cd0            0       0      0.0      0.0     0     0     0     0    0   0
";

// iostat -x before FreeBSD 10 printed wait/svc_t instead of the ms/* columns.
pub const FREEBSD_IOSTAT_LEGACY: &str = "\
                        extended device statistics
device     r/s   w/s    kr/s    kw/s  wait  svc_t  %b
ada0       1.5   3.0    20.1    40.2     0    0.8   1
";

pub const FREEBSD_NETSTAT: &str = "\
Name    Mtu Network       Address              Ipkts Ierrs Idrop     Ibytes    Opkts Oerrs     Obytes  Coll
em0    1500 <Link#1>      08:00:27:aa:bb:cc   100000     0     0   90000000    50000     0    4000000     0
em0       - 192.168.1.0/24 192.168.1.10       80000     -     -   70000000    40000     -    3000000     -
lo0   16384 <Link#2>      lo0                   1200     0     0     150000     1200     0     150000     0
pflog0 33160 <Link#3>                              0     0     0          0        0     0          0     0
";

pub const FREEBSD_PSTAT: &str = "\
Device          1K-blocks     Used    Avail Capacity
/dev/ada0p3       2097152    10240  2086912     0%
";

pub const FREEBSD_PSTAT_MULTI: &str = "\
Device          1K-blocks     Used    Avail Capacity
/dev/ada0p3       2097152    10240  2086912     0%
/dev/ada1p3       2097152        0  2097152     0%
Total             4194304    10240  4184064     0%
";

pub const SUNOS_KSTAT_PAGES: &str = "\
unix:0:system_pages:availrmem\t200000
unix:0:system_pages:crtime\t0
unix:0:system_pages:freemem\t150000
unix:0:system_pages:pagesfree\t150000
unix:0:system_pages:pagestotal\t260000
unix:0:system_pages:physmem\t262144
";

pub const SUNOS_KSTAT_MISC: &str = "\
unix:0:system_misc:avenrun_15min\t64
unix:0:system_misc:avenrun_1min\t256
unix:0:system_misc:avenrun_5min\t128
unix:0:system_misc:boot_time\t1760000000
unix:0:system_misc:ncpus\t4
";

pub const SUNOS_IOSTAT: &str = "\
                    extended device statistics
    r/s    w/s   kr/s   kw/s wait actv wsvc_t asvc_t  %w  %b device
    0.5    1.2    4.1   10.3  0.0  0.0    0.0    1.4   0   0 c0t0d0
    0.0    0.0    0.0    0.0  0.0  0.0    0.0    0.0   0   0 c0t1d0
";

pub const SUNOS_DLADM: &str = "\
LINK         IPACKETS  RBYTES      IERRORS    OPACKETS   OBYTES      OERRORS
net0         1000      500000      0          900        400000      0
vnic0        N/A       N/A         N/A        N/A        N/A         N/A
";

pub const SUNOS_DF: &str = "\
Filesystem            kbytes    used   avail capacity  Mounted on
rpool/ROOT/solaris  30000000 5000000 25000000    17%    /
swap                 4000000     100 3999900     1%    /tmp
";

pub const SUNOS_SWAP: &str = "\
swapfile             dev    swaplo   blocks     free
/dev/zvol/dsk/rpool/swap 256,1      16  4194288  4194288
";

pub fn linux_sources() -> MockSources {
    let mut mock = MockSources::new();
    mock.add_file("/proc/uptime", "350735.47 234388.90\n")
        .add_file("/proc/meminfo", LINUX_MEMINFO)
        .add_file("/proc/swaps", LINUX_SWAPS)
        .add_file("/proc/loadavg", "0.10 0.20 0.30 1/200 12345\n")
        .add_file("/proc/net/dev", LINUX_NET_DEV)
        .add_command("df -k -P", LINUX_DF)
        .add_command("df -i -P", LINUX_DF_INODES)
        .add_command("iostat -d -N -k", LINUX_IOSTAT);
    mock
}

pub fn freebsd_sources() -> MockSources {
    let mut mock = MockSources::new();
    mock.set_uptime(90_061)
        .add_command("sysctl vm.stats.vm", FREEBSD_SYSCTL_VM)
        .add_command("pstat -s -k", FREEBSD_PSTAT)
        .add_command("sysctl -n vm.loadavg", "{ 0.52 0.41 0.33 }\n")
        .add_command("df -k -i", FREEBSD_DF)
        .add_command("iostat -d -x", FREEBSD_IOSTAT)
        .add_command("netstat -i -b -n", FREEBSD_NETSTAT);
    mock
}

pub fn sunos_sources() -> MockSources {
    let mut mock = MockSources::new();
    mock.set_now(1_760_086_400)
        .add_command(
            "kstat -p unix:0:system_misc:boot_time",
            "unix:0:system_misc:boot_time\t1760000000\n",
        )
        .add_command("kstat -p unix:0:system_pages", SUNOS_KSTAT_PAGES)
        .add_command("kstat -p unix:0:system_misc", SUNOS_KSTAT_MISC)
        .add_command("swap -l", SUNOS_SWAP)
        .add_command("df -k", SUNOS_DF)
        .add_command(
            "df -o i",
            "Filesystem             iused   ifree  %iused  Mounted on\n/dev/dsk/c0t0d0s0     12000  500000     2%    /\n",
        )
        .add_command("iostat -n -x", SUNOS_IOSTAT)
        .add_command("dladm show-link -s", SUNOS_DLADM);
    mock
}
