// Command runner: spawn without a shell, capture stdout/stderr, optional deadline

use std::io::{self, Read};
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use tracing::debug;

use super::{CommandRunner, RawText};
use crate::error::{SourceError, UnavailableKind};

const POLL_INTERVAL: Duration = Duration::from_millis(10);

#[derive(Debug, Default, Clone, Copy)]
pub struct ShellRunner {
    timeout: Option<Duration>,
}

impl ShellRunner {
    pub fn new() -> Self {
        Self { timeout: None }
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            timeout: Some(timeout),
        }
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

impl CommandRunner for ShellRunner {
    fn run(&self, command: &str) -> Result<RawText, SourceError> {
        let mut parts = command.split_whitespace();
        let program = parts.next().ok_or_else(|| {
            SourceError::unavailable(command, UnavailableKind::CommandNotFound, "empty command")
        })?;

        let started = Instant::now();
        let mut child = Command::new(program)
            .args(parts)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| spawn_error(command, e))?;

        // Drain both pipes while waiting.
        let stdout = drain(child.stdout.take());
        let stderr = drain(child.stderr.take());

        let status = match self.timeout {
            Some(timeout) => wait_with_deadline(&mut child, command, timeout)?,
            None => child
                .wait()
                .map_err(|e| SourceError::unavailable(command, UnavailableKind::Io, e.to_string()))?,
        };

        let stdout = collect(stdout, command)?;
        let stderr = collect(stderr, command)?;
        debug!(
            command,
            status = ?status.code(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "command finished"
        );

        if status.success() {
            Ok(RawText::success(stdout))
        } else {
            Ok(RawText::failure(stderr))
        }
    }
}

fn spawn_error(command: &str, e: io::Error) -> SourceError {
    let kind = match e.kind() {
        io::ErrorKind::NotFound => UnavailableKind::CommandNotFound,
        io::ErrorKind::PermissionDenied => UnavailableKind::PermissionDenied,
        _ => UnavailableKind::Io,
    };
    SourceError::unavailable(command, kind, e.to_string())
}

fn drain<R: Read + Send + 'static>(pipe: Option<R>) -> JoinHandle<io::Result<Vec<u8>>> {
    thread::spawn(move || {
        let mut buf = Vec::new();
        if let Some(mut pipe) = pipe {
            pipe.read_to_end(&mut buf)?;
        }
        Ok(buf)
    })
}

fn collect(handle: JoinHandle<io::Result<Vec<u8>>>, command: &str) -> Result<String, SourceError> {
    let bytes = handle
        .join()
        .map_err(|_| SourceError::unavailable(command, UnavailableKind::Io, "output reader panicked"))?
        .map_err(|e| SourceError::unavailable(command, UnavailableKind::Io, e.to_string()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn wait_with_deadline(
    child: &mut Child,
    command: &str,
    timeout: Duration,
) -> Result<ExitStatus, SourceError> {
    let start = Instant::now();
    loop {
        match child.try_wait() {
            Ok(Some(status)) => return Ok(status),
            Ok(None) => {
                if start.elapsed() >= timeout {
                    let _ = child.kill();
                    let _ = child.wait();
                    debug!(command, ?timeout, "command killed after deadline");
                    return Err(SourceError::Timeout {
                        command: command.to_string(),
                        after: timeout,
                    });
                }
                thread::sleep(POLL_INTERVAL);
            }
            Err(e) => {
                return Err(SourceError::unavailable(
                    command,
                    UnavailableKind::Io,
                    e.to_string(),
                ));
            }
        }
    }
}
