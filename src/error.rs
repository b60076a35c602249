use std::path::PathBuf;

use thiserror::Error;

/// Everything that can stop a metrics run. All variants are terminal: a run
/// has no meaningful partial result.
#[derive(Debug, Error)]
pub enum WearError {
    #[error("input {} not found", path.display())]
    InputNotFound { path: PathBuf },
    #[error("unable to read input {}: {source}", path.display())]
    InputUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed record at row {row}{}: {reason}", field.as_deref().map(|f| format!(" (field `{f}`)")).unwrap_or_default())]
    MalformedRecord {
        /// 1-based data row, header excluded.
        row: u64,
        field: Option<String>,
        reason: String,
    },
    #[error("input contains no data records")]
    EmptyInput,
    #[error("maximum seconds_elapsed is zero; rates are undefined")]
    ZeroElapsedTime,
    #[error("log rate is zero; savings are undefined")]
    ZeroLogRate,
}

impl WearError {
    pub(crate) fn malformed(row: u64, field: &str, reason: impl Into<String>) -> Self {
        WearError::MalformedRecord {
            row,
            field: Some(field.to_owned()),
            reason: reason.into(),
        }
    }
}

/// Alias for fallible wear-metrics operations.
pub type WearResult<T> = Result<T, WearError>;
