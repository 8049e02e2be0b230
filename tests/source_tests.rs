// Real collaborators: file reader and command runner

use std::io::Write;
use std::time::Duration;

use hoststat::SourceError;
use hoststat::error::UnavailableKind;
use hoststat::source::{ClockSource, CommandRunner, FileReader, ProcFs, RawText, ShellRunner, SystemClock};

#[test]
fn test_procfs_reads_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "0.10 0.20 0.30 1/200 12345").unwrap();
    let text = ProcFs.read(file.path().to_str().unwrap()).unwrap();
    assert!(text.starts_with("0.10"));
}

#[test]
fn test_procfs_missing_file() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("absent");
    let err = ProcFs.read(path.to_str().unwrap()).unwrap_err();
    assert_eq!(err.kind(), Some(UnavailableKind::FileNotFound));
}

#[test]
fn test_raw_text_into_success() {
    assert!(RawText::success("ok").into_success("x").is_ok());
    let err = RawText::failure("boom\n").into_success("cmd").unwrap_err();
    assert!(err.to_string().contains("boom"));
}

#[test]
fn test_runner_timeout_setting() {
    assert_eq!(ShellRunner::new().timeout(), None);
    assert_eq!(
        ShellRunner::with_timeout(Duration::from_millis(250)).timeout(),
        Some(Duration::from_millis(250))
    );
}

#[test]
fn test_empty_command() {
    let err = ShellRunner::new().run("   ").unwrap_err();
    assert_eq!(err.kind(), Some(UnavailableKind::CommandNotFound));
}

#[test]
fn test_unknown_program() {
    let err = ShellRunner::new()
        .run("hoststat-no-such-program-4711 -x")
        .unwrap_err();
    assert_eq!(err.kind(), Some(UnavailableKind::CommandNotFound));
}

#[cfg(unix)]
#[test]
fn test_stdout_on_success() {
    let raw = ShellRunner::new().run("echo hello world").unwrap();
    assert!(raw.succeeded());
    assert_eq!(raw.text(), "hello world\n");
}

#[cfg(unix)]
#[test]
fn test_stderr_only_on_failure() {
    let raw = ShellRunner::with_timeout(Duration::from_secs(10))
        .run("ls /hoststat-definitely-missing-dir")
        .unwrap();
    assert!(!raw.succeeded());
    assert!(raw.text().contains("hoststat-definitely-missing-dir"));
}

#[cfg(unix)]
#[test]
fn test_timeout_kills_command() {
    let started = std::time::Instant::now();
    let err = ShellRunner::with_timeout(Duration::from_millis(100))
        .run("sleep 5")
        .unwrap_err();
    assert!(matches!(err, SourceError::Timeout { .. }));
    assert!(started.elapsed() < Duration::from_secs(4));
}

#[test]
fn test_system_clock() {
    let clock = SystemClock;
    assert!(clock.uptime_seconds().unwrap() >= 0);
    assert!(clock.now_epoch() > 1_600_000_000);
}

#[cfg(unix)]
#[test]
fn test_page_size() {
    let size = hoststat::source::system_page_size().unwrap();
    assert!(size >= 4096);
    assert!(size.is_power_of_two());
}
