//! ASCII plotting for terminal output.
//!
//! This is intentionally "dumb" (fixed-size grid), optimized for:
//! - quick visual sanity checks in a terminal
//! - deterministic output (helpful for golden tests)
//!
//! Plot elements:
//! - observations: `^`
//! - model: `-` line through the co-sorted points

use crate::domain::FittedSeries;

use super::{finite_range, pad_range};

/// Character grid with the data ranges it maps onto.
struct Canvas {
    cells: Vec<Vec<char>>,
    t_range: (f64, f64),
    z_range: (f64, f64),
}

impl Canvas {
    fn new(width: usize, height: usize, t_range: (f64, f64), z_range: (f64, f64)) -> Self {
        Self {
            cells: vec![vec![' '; width]; height],
            t_range,
            z_range,
        }
    }

    fn width(&self) -> usize {
        self.cells[0].len()
    }

    fn height(&self) -> usize {
        self.cells.len()
    }

    /// `(column, row)` of a data point; larger `z` is closer to the top row.
    fn cell(&self, t: f64, z: f64) -> (usize, usize) {
        let col = scale(t, self.t_range, self.width());
        let row = self.height() - 1 - scale(z, self.z_range, self.height());
        (col, row)
    }

    /// Stamp `ch` along the segment between two cells by stepping the longer
    /// axis one cell at a time. Occupied cells are left alone.
    fn segment(&mut self, from: (usize, usize), to: (usize, usize), ch: char) {
        let (dc, dr) = (to.0 as f64 - from.0 as f64, to.1 as f64 - from.1 as f64);
        let steps = dc.abs().max(dr.abs()) as usize;
        for step in 0..=steps {
            let f = if steps == 0 { 0.0 } else { step as f64 / steps as f64 };
            let col = (from.0 as f64 + dc * f).round() as usize;
            let row = (from.1 as f64 + dr * f).round() as usize;
            let cell = &mut self.cells[row][col];
            if *cell == ' ' {
                *cell = ch;
            }
        }
    }

    fn put(&mut self, (col, row): (usize, usize), ch: char) {
        self.cells[row][col] = ch;
    }

    fn into_rows(self) -> impl Iterator<Item = String> {
        self.cells.into_iter().map(|row| row.into_iter().collect())
    }
}

/// Position of `value` on `cells` evenly spaced slots covering `range`.
fn scale(value: f64, (lo, hi): (f64, f64), cells: usize) -> usize {
    let frac = ((value - lo) / (hi - lo)).clamp(0.0, 1.0);
    (frac * (cells - 1) as f64).round() as usize
}

/// Render a terminal preview of the chart.
pub fn render_ascii_plot(series: &FittedSeries, loss: f64, width: usize, height: usize) -> String {
    // t spans the data exactly; z gets 5% headroom so extremes stay visible.
    let t_range = finite_range(&series.t).unwrap_or((0.0, 1.0));
    let t_range = pad_range(t_range.0, t_range.1, 0.0);
    let z_range = finite_range(series.z.iter().chain(&series.z_hat)).unwrap_or((0.0, 1.0));
    let z_range = pad_range(z_range.0, z_range.1, 0.05);

    let mut canvas = Canvas::new(width.max(10), height.max(5), t_range, z_range);

    // Model first so observations overlay it; a non-finite value breaks the line.
    let mut last = None;
    for (t, z) in series.model_points() {
        if !(t.is_finite() && z.is_finite()) {
            last = None;
            continue;
        }
        let here = canvas.cell(t, z);
        canvas.segment(last.unwrap_or(here), here, '-');
        last = Some(here);
    }

    for (t, z) in series.observed_points() {
        if t.is_finite() && z.is_finite() {
            let at = canvas.cell(t, z);
            canvas.put(at, '^');
        }
    }

    let (t_min, t_max) = t_range;
    let (z_min, z_max) = z_range;
    let mut out = format!("Plot: t=[{t_min:.3}, {t_max:.3}] | z=[{z_min:.2}, {z_max:.2}] | loss={loss}\n");
    for row in canvas.into_rows() {
        out.push_str(&row);
        out.push('\n');
    }
    out
}
