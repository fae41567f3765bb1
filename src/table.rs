//! Fixed-width console tables over an ordered row view.
//!
//! Both renderers are pure projections: no filtering, no aggregation, one
//! data row out per row in. Millisecond columns print with 3 decimals, the
//! averaged byte length rounds to a whole number. An empty view renders to
//! an empty string; deciding whether "no data" deserves a diagnostic is the
//! driver's call.

use crate::schema::BenchRow;

/// Full summary: exponent, ring size, and the three averaged metrics.
///
/// Callers pass the ring-size-ordered view.
pub fn render_summary(rows: &[BenchRow]) -> String {
    if rows.is_empty() {
        return String::new();
    }

    let header = format!(
        "{:>7} | {:>7} | {:>16} | {:>18} | {:>16}",
        "exp", "ring", "sign avg, ms", "verify avg, ms", "sig len, bytes"
    );
    let rule = "-".repeat(header.len());

    let mut out = String::new();
    out.push_str(&rule);
    out.push('\n');
    out.push_str(&header);
    out.push('\n');
    out.push_str(&rule);
    out.push('\n');
    for r in rows {
        out.push_str(&format!(
            "{:>7} | {:>7} | {:>16.3} | {:>18.3} | {:>16.0}\n",
            r.exp, r.ring_size, r.sign_avg_ms, r.verify_avg_ms, r.sig_len_avg_bytes
        ));
    }
    out.push_str(&rule);
    out.push('\n');
    out
}

/// Secondary summary: signature length keyed by exponent.
///
/// Callers pass the exponent-ordered view.
pub fn render_length_by_exp(rows: &[BenchRow]) -> String {
    if rows.is_empty() {
        return String::new();
    }

    let header = format!("{:>7} | {:>16}", "exp", "sig len, bytes");
    let rule = "-".repeat(header.len());

    let mut out = String::new();
    out.push_str(&rule);
    out.push('\n');
    out.push_str("Signature length by exponent (averages):\n");
    out.push_str(&header);
    out.push('\n');
    out.push_str(&rule);
    out.push('\n');
    for r in rows {
        out.push_str(&format!("{:>7} | {:>16.0}\n", r.exp, r.sig_len_avg_bytes));
    }
    out.push_str(&rule);
    out.push('\n');
    out
}
