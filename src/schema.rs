use serde::{Deserialize, Serialize};

/// One aggregated benchmark data point: averages for a single `(base, exp)`
/// configuration, where `ring_size = base^exp`.
///
/// Rows are constructed once by the loader and never mutated afterwards.
/// Duplicate `exp` or `ring_size` values are allowed and preserved; ordering
/// is always a derived view, never a property of the row set itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchRow {
    pub exp: i64,
    pub ring_size: i64,
    pub sign_avg_ms: f64,
    pub verify_avg_ms: f64,
    pub sig_len_avg_bytes: f64,
}
