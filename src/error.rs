use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the report pipeline.
///
/// The loader and the chart renderer never recover internally; every failure
/// propagates to the driver, which turns the first one into a diagnostic and
/// a non-zero exit status.
#[derive(Debug, Error)]
pub enum MetricsError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("report is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// A result entry is missing a required field or holds a value that
    /// cannot be coerced. Fatal: a silently dropped record would distort the
    /// tables and charts without any signal.
    #[error("malformed record #{index}: field `{field}` {reason}")]
    MalformedRecord {
        index: usize,
        field: &'static str,
        reason: String,
    },

    /// The report parses but holds zero usable result entries.
    #[error("report contains no usable results")]
    EmptyReport,

    #[error("failed to write chart {}: {message}", path.display())]
    ChartIo { path: PathBuf, message: String },
}

impl MetricsError {
    pub(crate) fn missing_field(index: usize, field: &'static str) -> Self {
        MetricsError::MalformedRecord {
            index,
            field,
            reason: "is missing".to_string(),
        }
    }

    pub(crate) fn bad_field(index: usize, field: &'static str, reason: impl Into<String>) -> Self {
        MetricsError::MalformedRecord {
            index,
            field,
            reason: reason.into(),
        }
    }
}
