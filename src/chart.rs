//! Single-series line chart rendering.
//!
//! Each call is fully self-contained: it receives the series, the axis
//! labels, the title, and the destination, draws one SVG, and owns no state
//! across calls. The renderer knows nothing about which metric it is
//! plotting beyond the labels it is handed.

use std::fmt::Display;
use std::ops::Range;
use std::path::Path;

use plotters::prelude::*;
use tracing::info;

use crate::error::MetricsError;

const CHART_SIZE: (u32, u32) = (960, 600);
const MARKER_RADIUS: i32 = 4;

/// Axis and title metadata for one chart.
#[derive(Debug, Clone, Copy)]
pub struct ChartSpec<'a> {
    pub x_label: &'a str,
    pub y_label: &'a str,
    pub title: &'a str,
}

/// Draw `ys` over `xs` as a line with point markers and persist the SVG at
/// `dest`, overwriting any existing file.
///
/// The two slices must be the same length; a mismatch is a bug in the caller
/// and panics rather than silently truncating the series.
pub fn render_line_chart(
    xs: &[f64],
    ys: &[f64],
    spec: &ChartSpec<'_>,
    dest: &Path,
) -> Result<(), MetricsError> {
    assert_eq!(
        xs.len(),
        ys.len(),
        "series length mismatch: {} x values vs {} y values",
        xs.len(),
        ys.len()
    );

    let x_range = axis_range(xs);
    let y_range = axis_range(ys);

    // The SVG backend only opens `dest` when the finished chart is flushed;
    // probe the destination first so an unwritable path fails before any
    // drawing happens.
    std::fs::File::create(dest).map_err(|e| chart_error(dest, e))?;

    let root = SVGBackend::new(dest, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(|e| chart_error(dest, e))?;

    let mut chart = ChartBuilder::on(&root)
        .caption(spec.title, ("sans-serif", 24))
        .margin(16)
        .x_label_area_size(48)
        .y_label_area_size(64)
        .build_cartesian_2d(x_range, y_range)
        .map_err(|e| chart_error(dest, e))?;

    chart
        .configure_mesh()
        .light_line_style(BLACK.mix(0.08))
        .bold_line_style(BLACK.mix(0.18))
        .x_desc(spec.x_label)
        .y_desc(spec.y_label)
        .label_style(("sans-serif", 16))
        .draw()
        .map_err(|e| chart_error(dest, e))?;

    let points: Vec<(f64, f64)> = xs.iter().copied().zip(ys.iter().copied()).collect();

    chart
        .draw_series(LineSeries::new(points.iter().copied(), BLUE.stroke_width(2)))
        .map_err(|e| chart_error(dest, e))?;
    chart
        .draw_series(
            points
                .iter()
                .map(|&(x, y)| Circle::new((x, y), MARKER_RADIUS, BLUE.filled())),
        )
        .map_err(|e| chart_error(dest, e))?;

    root.present().map_err(|e| chart_error(dest, e))?;
    info!("saved {}", dest.display());
    Ok(())
}

/// Data range padded so points never sit on the plot border. A single-valued
/// series still gets a non-empty range.
fn axis_range(values: &[f64]) -> Range<f64> {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for &v in values {
        lo = lo.min(v);
        hi = hi.max(v);
    }
    if !lo.is_finite() || !hi.is_finite() {
        return 0.0..1.0;
    }
    let span = hi - lo;
    let pad = if span == 0.0 {
        lo.abs().max(1.0) * 0.1
    } else {
        span * 0.05
    };
    (lo - pad)..(hi + pad)
}

fn chart_error<E: Display>(dest: &Path, err: E) -> MetricsError {
    MetricsError::ChartIo {
        path: dest.to_path_buf(),
        message: err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const SPEC: ChartSpec<'static> = ChartSpec {
        x_label: "x",
        y_label: "y",
        title: "test chart",
    };

    #[test]
    fn writes_an_svg_file() {
        let dir = tempdir().unwrap();
        let dest = dir.path().join("chart.svg");
        render_line_chart(&[1.0, 2.0, 4.0], &[0.5, 1.2, 2.0], &SPEC, &dest).unwrap();

        let contents = std::fs::read_to_string(&dest).unwrap();
        assert!(contents.contains("<svg"));
        assert!(contents.contains("test chart"));
    }

    #[test]
    fn overwrites_an_existing_destination() {
        let dir = tempdir().unwrap();
        let dest = dir.path().join("chart.svg");
        std::fs::write(&dest, "stale").unwrap();

        render_line_chart(&[1.0, 2.0], &[1.0, 2.0], &SPEC, &dest).unwrap();
        let contents = std::fs::read_to_string(&dest).unwrap();
        assert!(contents.contains("<svg"));
    }

    #[test]
    fn single_point_series_renders() {
        let dir = tempdir().unwrap();
        let dest = dir.path().join("single.svg");
        render_line_chart(&[8.0], &[3.5], &SPEC, &dest).unwrap();
        assert!(dest.exists());
    }

    #[test]
    fn unwritable_destination_is_a_chart_error() {
        let dir = tempdir().unwrap();
        let dest = dir.path().join("missing-subdir").join("chart.svg");
        let err = render_line_chart(&[1.0], &[1.0], &SPEC, &dest).unwrap_err();
        assert!(matches!(err, MetricsError::ChartIo { .. }));
    }

    #[test]
    #[should_panic(expected = "series length mismatch")]
    fn mismatched_series_lengths_panic() {
        let dir = tempdir().unwrap();
        let dest = dir.path().join("bad.svg");
        let _ = render_line_chart(&[1.0, 2.0], &[1.0], &SPEC, &dest);
    }

    #[test]
    fn degenerate_range_is_padded() {
        let r = axis_range(&[5.0, 5.0]);
        assert!(r.start < 5.0 && r.end > 5.0);
    }
}
