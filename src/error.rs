//! Application error carrying a process exit code.
//!
//! Exit codes:
//! - `2`: input/output (missing or malformed files, failed writes)
//! - `3`: dataset shape (empty, mismatched lengths)
//! - `4`: numeric (undefined model value, no finite fit)
//! - `5`: rendering

use std::path::Path;

pub const EXIT_IO: u8 = 2;
pub const EXIT_DATASET: u8 = 3;
pub const EXIT_NUMERIC: u8 = 4;
pub const EXIT_RENDER: u8 = 5;

#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    /// Wrap an I/O failure on `path` with a short description of the action.
    pub fn io(action: &str, path: &Path, err: std::io::Error) -> Self {
        Self::new(EXIT_IO, format!("Failed to {action} '{}': {err}", path.display()))
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}
