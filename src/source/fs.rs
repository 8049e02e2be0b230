// Pseudo-file reader backed by std::fs

use std::io;

use super::FileReader;
use crate::error::{SourceError, UnavailableKind};

#[derive(Debug, Default, Clone, Copy)]
pub struct ProcFs;

impl FileReader for ProcFs {
    fn read(&self, path: &str) -> Result<String, SourceError> {
        std::fs::read_to_string(path).map_err(|e| {
            let kind = match e.kind() {
                io::ErrorKind::NotFound => UnavailableKind::FileNotFound,
                io::ErrorKind::PermissionDenied => UnavailableKind::PermissionDenied,
                _ => UnavailableKind::Io,
            };
            SourceError::unavailable(path, kind, e.to_string())
        })
    }
}
