// Platform clock and page size

use super::ClockSource;
use crate::error::{SourceError, UnavailableKind};

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl ClockSource for SystemClock {
    fn uptime_seconds(&self) -> Result<i64, SourceError> {
        #[cfg(target_os = "freebsd")]
        {
            let mut ts = libc::timespec {
                tv_sec: 0,
                tv_nsec: 0,
            };
            // SAFETY: `ts` is a valid, writable timespec for the duration of the call.
            let rc = unsafe { libc::clock_gettime(libc::CLOCK_UPTIME_PRECISE, &mut ts) };
            if rc != 0 {
                return Err(SourceError::unavailable(
                    "clock_gettime(CLOCK_UPTIME_PRECISE)",
                    UnavailableKind::Io,
                    std::io::Error::last_os_error().to_string(),
                ));
            }
            Ok(ts.tv_sec as i64)
        }
        #[cfg(not(target_os = "freebsd"))]
        {
            let secs = sysinfo::System::uptime();
            i64::try_from(secs).map_err(|_| {
                SourceError::unavailable("system uptime", UnavailableKind::Io, "uptime out of range")
            })
        }
    }

    fn now_epoch(&self) -> i64 {
        chrono::Utc::now().timestamp()
    }
}

/// Memory page size in bytes, for converting page counts (FreeBSD, SunOS) to bytes.
pub fn system_page_size() -> Result<u64, SourceError> {
    #[cfg(unix)]
    {
        // SAFETY: sysconf has no preconditions and does not touch caller memory.
        let ret = unsafe { libc::sysconf(libc::_SC_PAGESIZE) };
        if ret > 0 {
            return Ok(ret as u64);
        }
    }
    Err(SourceError::unavailable(
        "sysconf(_SC_PAGESIZE)",
        UnavailableKind::Io,
        "page size not reported",
    ))
}
