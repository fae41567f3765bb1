//! Loading and coercion of benchmark result reports.
//!
//! The benchmark runner emits a JSON document of the shape:
//!
//! ```text
//! {
//!   "config":  { ... },          // opaque, passed through unused
//!   "results": [
//!     {
//!       "exp": 3,
//!       "ring_size": 8,
//!       "sign_avg_ms": 12.4,
//!       "verify_avg_ms": 9.1,
//!       "sig_len_avg_bytes": 1216.0
//!     },
//!     ...
//!   ]
//! }
//! ```
//!
//! Each result entry is coerced into a [`BenchRow`]: the integer fields also
//! accept floats (truncated) and numeric strings, the float fields also
//! accept numeric strings; anything else is a fatal [`MalformedRecord`].
//! An absent `results` key is not an error and yields zero rows; reporting
//! "no data" is the driver's job, not the loader's.
//!
//! [`MalformedRecord`]: crate::error::MetricsError::MalformedRecord

use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

use crate::error::MetricsError;
use crate::schema::BenchRow;

#[derive(Debug, Deserialize)]
struct RawReport {
    #[serde(default)]
    config: Value,
    #[serde(default)]
    results: Vec<Value>,
}

/// Read a report file and parse it into its opaque config and row set.
pub fn load_report(path: &Path) -> Result<(Value, Vec<BenchRow>), MetricsError> {
    let text = fs::read_to_string(path)?;
    parse_report(&text)
}

/// Parse report text into `(config, rows)`.
///
/// Rows come back in input order; deriving a sorted view is an explicit,
/// separate step (see [`crate::order`]).
pub fn parse_report(text: &str) -> Result<(Value, Vec<BenchRow>), MetricsError> {
    let raw: RawReport = serde_json::from_str(text)?;

    let mut rows = Vec::with_capacity(raw.results.len());
    for (index, record) in raw.results.iter().enumerate() {
        rows.push(coerce_row(record, index)?);
    }

    Ok((raw.config, rows))
}

fn coerce_row(record: &Value, index: usize) -> Result<BenchRow, MetricsError> {
    let sig_len_avg_bytes = coerce_float(record, index, "sig_len_avg_bytes")?;
    if sig_len_avg_bytes < 0.0 {
        return Err(MetricsError::bad_field(
            index,
            "sig_len_avg_bytes",
            format!("is negative ({sig_len_avg_bytes})"),
        ));
    }

    Ok(BenchRow {
        exp: coerce_int(record, index, "exp")?,
        ring_size: coerce_int(record, index, "ring_size")?,
        sign_avg_ms: coerce_float(record, index, "sign_avg_ms")?,
        verify_avg_ms: coerce_float(record, index, "verify_avg_ms")?,
        sig_len_avg_bytes,
    })
}

/// Integer coercion: JSON integers pass through, floats and numeric strings
/// are truncated toward zero.
fn coerce_int(record: &Value, index: usize, field: &'static str) -> Result<i64, MetricsError> {
    let value = field_value(record, index, field)?;
    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(i)
            } else if let Some(f) = n.as_f64() {
                Ok(f.trunc() as i64)
            } else {
                Err(non_numeric(index, field, value))
            }
        }
        Value::String(s) => match s.trim().parse::<f64>() {
            Ok(f) if f.is_finite() => Ok(f.trunc() as i64),
            _ => Err(non_numeric(index, field, value)),
        },
        _ => Err(non_numeric(index, field, value)),
    }
}

/// Float coercion: JSON numbers and numeric strings; the result must be a
/// finite real.
fn coerce_float(record: &Value, index: usize, field: &'static str) -> Result<f64, MetricsError> {
    let value = field_value(record, index, field)?;
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    match parsed {
        Some(f) if f.is_finite() => Ok(f),
        _ => Err(non_numeric(index, field, value)),
    }
}

fn field_value<'a>(
    record: &'a Value,
    index: usize,
    field: &'static str,
) -> Result<&'a Value, MetricsError> {
    record
        .get(field)
        .ok_or_else(|| MetricsError::missing_field(index, field))
}

fn non_numeric(index: usize, field: &'static str, value: &Value) -> MetricsError {
    MetricsError::bad_field(index, field, format!("holds non-numeric value {value}"))
}
