use std::io;
use thiserror::Error;

/// Errors raised while reporting a run.
///
/// A report stream that cannot be written is fatal for the whole run.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to write to report stream: {0}")]
    Write(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, ReportError>;
