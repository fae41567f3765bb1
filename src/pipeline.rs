//! The fixed report-to-output sequence: load, order, two tables, four charts.

use std::fs;
use std::io::Write;
use std::path::Path;

use tracing::{debug, info};

use crate::chart::{render_line_chart, ChartSpec};
use crate::error::MetricsError;
use crate::order::{ordered_by, SortKey};
use crate::report::load_report;
use crate::table;

/// Run the whole pipeline for one report.
///
/// Tables are written to `console` before the first chart render, so the
/// console output is intact even when a chart fails. A report with zero
/// usable rows stops the run with [`MetricsError::EmptyReport`] before any
/// output is produced.
pub fn run<W: Write>(
    report_path: &Path,
    out_dir: &Path,
    console: &mut W,
) -> Result<(), MetricsError> {
    let (config, rows) = load_report(report_path)?;
    if rows.is_empty() {
        return Err(MetricsError::EmptyReport);
    }

    info!(
        "loaded {} result rows from {}",
        rows.len(),
        report_path.display()
    );
    debug!("report config: {}", config);

    fs::create_dir_all(out_dir)?;

    // The two views every table and chart reads from. Never the raw loader
    // output: ordering stays an explicit property of each view.
    let by_ring = ordered_by(&rows, SortKey::RingSize);
    let by_exp = ordered_by(&rows, SortKey::Exp);

    console.write_all(table::render_summary(&by_ring).as_bytes())?;
    console.write_all(table::render_length_by_exp(&by_exp).as_bytes())?;
    console.flush()?;

    let ring_xs: Vec<f64> = by_ring.iter().map(|r| r.ring_size as f64).collect();
    let sign_ys: Vec<f64> = by_ring.iter().map(|r| r.sign_avg_ms).collect();
    let verify_ys: Vec<f64> = by_ring.iter().map(|r| r.verify_avg_ms).collect();
    let len_by_ring_ys: Vec<f64> = by_ring.iter().map(|r| r.sig_len_avg_bytes).collect();

    let exp_xs: Vec<f64> = by_exp.iter().map(|r| r.exp as f64).collect();
    let len_by_exp_ys: Vec<f64> = by_exp.iter().map(|r| r.sig_len_avg_bytes).collect();

    render_line_chart(
        &ring_xs,
        &sign_ys,
        &ChartSpec {
            x_label: "Ring size (base^exp)",
            y_label: "Signing time (ms)",
            title: "Signing time vs ring size",
        },
        &out_dir.join("sign_time_vs_ring.svg"),
    )?;

    render_line_chart(
        &ring_xs,
        &verify_ys,
        &ChartSpec {
            x_label: "Ring size (base^exp)",
            y_label: "Verification time (ms)",
            title: "Verification time vs ring size",
        },
        &out_dir.join("verify_time_vs_ring.svg"),
    )?;

    render_line_chart(
        &ring_xs,
        &len_by_ring_ys,
        &ChartSpec {
            x_label: "Ring size (base^exp)",
            y_label: "Signature length (bytes)",
            title: "Signature length vs ring size",
        },
        &out_dir.join("sig_len_vs_ring.svg"),
    )?;

    render_line_chart(
        &exp_xs,
        &len_by_exp_ys,
        &ChartSpec {
            x_label: "Exponent (exp)",
            y_label: "Signature length (bytes)",
            title: "Signature length vs exponent",
        },
        &out_dir.join("sig_len_vs_exp.svg"),
    )?;

    Ok(())
}
