//! Plotters-powered comparison chart written to an image file.
//!
//! Layout:
//! - observed points: red triangles (`observations`)
//! - model values: blue line through the co-sorted inputs (`model`)
//! - a legend-only entry carrying the stored loss (`loss=...`)
//! - axis labels `t` / `z`, background grid, legend in the upper right
//!
//! A `.svg` path is drawn with the SVG backend; any other extension goes to
//! the bitmap encoder (`png`, `jpg`/`jpeg`, `bmp`).

use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;

use crate::domain::{ChartSize, FittedSeries};
use crate::error::{AppError, EXIT_RENDER};

use super::{finite_range, pad_range};

/// Fraction of the data span added on each side of both axes.
const AXIS_MARGIN: f64 = 0.05;

const MARKER_SIZE: i32 = 6;

/// Render `series` to `path`, overwriting any existing file.
///
/// On failure the output file is removed, so a failed run leaves no image.
pub fn render_chart(path: &Path, series: &FittedSeries, loss: f64, size: ChartSize) -> Result<(), AppError> {
    let dims = (size.width, size.height);
    let result = if is_svg(path) {
        draw(SVGBackend::new(path, dims).into_drawing_area(), series, loss)
    } else {
        draw(BitMapBackend::new(path, dims).into_drawing_area(), series, loss)
    };

    match result {
        Ok(()) => {
            tracing::info!(path = %path.display(), width = size.width, height = size.height, "plot saved");
            Ok(())
        }
        Err(err) => {
            // Both backends flush on drop, even after a drawing error.
            if path.exists() {
                let _ = std::fs::remove_file(path);
            }
            Err(err)
        }
    }
}

fn is_svg(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"))
}

fn draw<DB: DrawingBackend>(root: DrawingArea<DB, Shift>, series: &FittedSeries, loss: f64) -> Result<(), AppError> {
    let (x0, x1) = axis(&series.t);
    let (y0, y1) = axis(series.z.iter().chain(&series.z_hat));

    root.fill(&WHITE).map_err(render_err)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(15)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(x0..x1, y0..y1)
        .map_err(render_err)?;

    chart
        .configure_mesh()
        .x_desc("t")
        .y_desc("z")
        .draw()
        .map_err(render_err)?;

    chart
        .draw_series(
            series
                .observed_points()
                .map(|p| TriangleMarker::new(p, MARKER_SIZE, RED.filled())),
        )
        .map_err(render_err)?
        .label("observations")
        .legend(|(x, y)| TriangleMarker::new((x, y), MARKER_SIZE, RED.filled()));

    chart
        .draw_series(LineSeries::new(series.model_points(), BLUE.stroke_width(2)))
        .map_err(render_err)?
        .label("model")
        .legend(|(x, y)| PathElement::new(vec![(x - 8, y), (x + 8, y)], BLUE.stroke_width(2)));

    // Nothing is drawn for the loss; it only adds a legend row.
    chart
        .draw_series(std::iter::empty::<PathElement<(f64, f64)>>())
        .map_err(render_err)?
        .label(format!("loss={loss}"))
        .legend(|(x, y)| PathElement::new(vec![(x - 8, y), (x + 8, y)], WHITE.mix(0.0)));

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(render_err)?;

    root.present().map_err(render_err)?;
    Ok(())
}

fn axis<'a>(values: impl IntoIterator<Item = &'a f64>) -> (f64, f64) {
    let (min, max) = finite_range(values).unwrap_or((0.0, 1.0));
    pad_range(min, max, AXIS_MARGIN)
}

fn render_err<E: std::fmt::Debug>(e: E) -> AppError {
    AppError::new(EXIT_RENDER, format!("Failed to render plot: {e:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_pads_data_span() {
        let (lo, hi) = axis(&[-5.0, 87.0]);
        assert!((lo - (-9.6)).abs() < 1e-9);
        assert!((hi - 91.6).abs() < 1e-9);
    }

    fn series() -> FittedSeries {
        FittedSeries {
            t: vec![0.0, 1.0],
            z: vec![1.0, 2.0],
            z_hat: vec![1.5, 1.5],
        }
    }

    #[test]
    fn unwritable_path_fails_without_output() {
        let path = std::env::temp_dir()
            .join(format!("zcurve_missing_dir_{}", std::process::id()))
            .join("plot.png");
        let err = render_chart(&path, &series(), 0.5, ChartSize::default()).unwrap_err();
        assert_eq!(err.exit_code(), EXIT_RENDER);
        assert!(!path.exists());
    }

    #[test]
    fn svg_extension_selects_svg_backend() {
        assert!(is_svg(Path::new("out/plot.SVG")));
        assert!(!is_svg(Path::new("plot.png")));
        assert!(!is_svg(Path::new("svg")));

        let path = std::env::temp_dir().join(format!("zcurve_chart_{}.svg", std::process::id()));
        render_chart(&path, &series(), 0.5, ChartSize::default()).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        assert!(text.starts_with("<svg"), "{}", &text[..text.len().min(80)]);
        assert!(text.contains("loss=0.5"));
    }
}
