use crate::error::Error;
use plotters::backend::BitMapBackend;
use plotters::chart::ChartBuilder;
use plotters::drawing::IntoDrawingArea;
use plotters::series::LineSeries;
use plotters::style::colors::{BLUE, WHITE};
use plotters::style::Color;
use std::fmt::Display;
use std::ops::Range;
use std::path::{Path, PathBuf};
use tracing::info;

const FONT_SIZE_CAPTION: i32 = 24;
const LINE_WIDTH: u32 = 2;

/// A sampled curve, ready to be rendered
#[derive(Debug, Clone, PartialEq)]
pub struct Plot {
    /// The expression as typed by the user
    pub expression: String,
    /// Sampled values of `x`
    pub xs: Vec<f64>,
    /// Values of the expression for each of `xs`
    pub ys: Vec<f64>,
}

impl Plot {
    /// Iterate over the `(x, y)` points of the curve
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.xs.iter().copied().zip(self.ys.iter().copied())
    }

    /// Range of the sampled `x` values
    pub fn x_range(&self) -> Range<f64> {
        let first = self.xs.first().copied().unwrap_or(0.0);
        let last = self.xs.last().copied().unwrap_or(first);
        if last > first {
            first..last
        } else {
            first - 0.5..first + 0.5
        }
    }

    /// Range of the `y` values, with 15% padding, or a fixed padding for flat
    /// curves.
    pub fn y_range(&self) -> Range<f64> {
        let min = self.ys.iter().copied().fold(f64::INFINITY, f64::min);
        let max = self.ys.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        if min > max {
            return -0.5..0.5;
        }
        let span = max - min;
        let padding = if span < 1e-6 { 0.5 } else { span * 0.15 };
        min - padding..max + padding
    }
}

/// Something able to draw a `Plot`
pub trait Renderer {
    /// Draw `plot`, replacing whatever was drawn before.
    ///
    /// # Errors
    ///
    /// Fails with a `RenderError` when drawing fails. What was drawn before
    /// is then left as is.
    fn render(&mut self, plot: &Plot) -> Result<(), Error>;
}

/// Render plots as PNG images with `plotters`
#[derive(Debug, Clone)]
pub struct ChartRenderer {
    path: PathBuf,
    width: u32,
    height: u32,
}

impl ChartRenderer {
    pub fn new(path: impl AsRef<Path>, width: u32, height: u32) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            width,
            height,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Renderer for ChartRenderer {
    fn render(&mut self, plot: &Plot) -> Result<(), Error> {
        let root = BitMapBackend::new(&self.path, (self.width, self.height)).into_drawing_area();
        root.fill(&WHITE).map_err(render_error)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(
                format!("f(x) = {}", plot.expression),
                ("sans-serif", FONT_SIZE_CAPTION),
            )
            .margin(10)
            .x_label_area_size(40)
            .y_label_area_size(60)
            .build_cartesian_2d(plot.x_range(), plot.y_range())
            .map_err(render_error)?;

        chart
            .configure_mesh()
            .x_desc("x")
            .y_desc("f(x)")
            .draw()
            .map_err(render_error)?;

        chart
            .draw_series(LineSeries::new(plot.points(), BLUE.stroke_width(LINE_WIDTH)))
            .map_err(render_error)?;

        root.present().map_err(render_error)?;
        info!(path = %self.path.display(), samples = plot.xs.len(), "rendered plot");
        Ok(())
    }
}

fn render_error(err: impl Display) -> Error {
    Error::RenderError(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::Plot;

    fn plot(xs: Vec<f64>, ys: Vec<f64>) -> Plot {
        Plot {
            expression: "f".into(),
            xs,
            ys,
        }
    }

    #[test]
    fn points() {
        let plot = plot(vec![0.0, 1.0], vec![2.0, 3.0]);
        assert_eq!(plot.points().collect::<Vec<_>>(), [(0.0, 2.0), (1.0, 3.0)]);
    }

    #[test]
    fn ranges() {
        let curve = plot(vec![0.0, 1.0, 2.0], vec![0.0, 10.0, 5.0]);
        assert_eq!(curve.x_range(), 0.0..2.0);
        assert_eq!(curve.y_range(), -1.5..11.5);

        let flat = plot(vec![0.0, 1.0], vec![5.0, 5.0]);
        assert_eq!(flat.y_range(), 4.5..5.5);

        let empty = plot(vec![], vec![]);
        assert_eq!(empty.x_range(), -0.5..0.5);
        assert_eq!(empty.y_range(), -0.5..0.5);
    }
}
