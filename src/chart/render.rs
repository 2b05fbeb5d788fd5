//! Chart rendering.
//!
//! Each builder returns an explicit [`Chart`] value describing the whole
//! figure; nothing touches a backend until [`Chart::save`] rasterises it to
//! a PNG. There is no process-wide figure state.

use std::path::Path;

use anyhow::{bail, Context, Result};
use plotters::coord::Shift;
use plotters::prelude::*;

use crate::chart::series::{ComparisonSeries, Scale};

/// Factorized series color.
const SKY_BLUE: RGBColor = RGBColor(135, 206, 235);

/// Conventional series color.
const INDIAN_RED: RGBColor = RGBColor(205, 92, 92);

/// Output raster size — 5 × 4.5 inches at 400 DPI.
const WIDTH: u32 = 2000;
const HEIGHT: u32 = 1800;

/// Half-width of one bar, in group units.
const BAR_WIDTH: f64 = 0.2;

/// How a comparison is drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChartStyle {
    /// Grouped bars on a log10 vertical axis.
    GroupedBars,
    /// Lines over a log10 horizontal axis.
    Lines,
}

/// A fully described comparison chart, ready to render.
#[derive(Clone, Debug)]
pub struct Chart {
    series: ComparisonSeries,
    style: ChartStyle,
    title: String,
    x_label: String,
    y_label: String,
}

impl Chart {
    /// Grouped-bar chart of a comparison series at the given scale.
    pub fn grouped_bars(series: &ComparisonSeries, scale: Scale, x_label: &str) -> Self {
        Self::build(series, scale, ChartStyle::GroupedBars, x_label)
    }

    /// Line chart of a comparison series at the given scale.
    pub fn lines(series: &ComparisonSeries, scale: Scale, x_label: &str) -> Self {
        Self::build(series, scale, ChartStyle::Lines, x_label)
    }

    fn build(series: &ComparisonSeries, scale: Scale, style: ChartStyle, x_label: &str) -> Self {
        let metric = series.metric;
        Self {
            series: series.scaled(scale),
            style,
            title: format!("Factorized vs Conventional {}", metric.label()),
            x_label: x_label.to_string(),
            y_label: format!("{} ({}{})", metric.label(), scale.prefix(), metric.unit()),
        }
    }

    /// Number of bar groups / line points — one per swept size.
    pub fn group_count(&self) -> usize {
        self.series.len()
    }

    /// Render the chart into a PNG file.
    pub fn save(&self, path: &Path) -> Result<()> {
        if self.series.is_empty() {
            bail!("cannot render an empty comparison series");
        }

        let root = BitMapBackend::new(path, (WIDTH, HEIGHT)).into_drawing_area();
        root.fill(&WHITE)
            .with_context(|| format!("failed to prepare chart canvas for {}", path.display()))?;

        match self.style {
            ChartStyle::GroupedBars => self.draw_bars(&root)?,
            ChartStyle::Lines => self.draw_lines(&root)?,
        }

        root.present()
            .with_context(|| format!("failed to write chart to {}", path.display()))?;
        Ok(())
    }

    fn draw_bars(&self, root: &DrawingArea<BitMapBackend, Shift>) -> Result<()> {
        let y_min = self.series.min_value() * 0.1;
        let y_max = self.series.max_value() * 1.1;
        let groups = self.series.len() as f64;

        let mut chart = ChartBuilder::on(root)
            .caption(&self.title, ("sans-serif", 48))
            .margin(20)
            .x_label_area_size(110)
            .y_label_area_size(160)
            .build_cartesian_2d(-0.5f64..groups - 0.5, (y_min..y_max).log_scale())?;

        let sides = self.series.sides.clone();
        let side_label = move |x: &f64| {
            let group = x.round();
            if (x - group).abs() > 1e-9 {
                return String::new();
            }
            sides
                .get(group as usize)
                .map(|side| side.to_string())
                .unwrap_or_default()
        };

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_labels(self.series.len())
            .x_label_formatter(&side_label)
            .x_desc(&self.x_label)
            .y_desc(&self.y_label)
            .label_style(("sans-serif", 30))
            .axis_desc_style(("sans-serif", 36))
            .draw()?;

        chart
            .draw_series(self.series.factorized.iter().enumerate().map(|(i, &v)| {
                let x = i as f64;
                Rectangle::new([(x - BAR_WIDTH, y_min), (x, v)], SKY_BLUE.filled())
            }))?
            .label("Factorized")
            .legend(|(x, y)| Rectangle::new([(x, y - 8), (x + 16, y + 8)], SKY_BLUE.filled()));

        chart
            .draw_series(self.series.conventional.iter().enumerate().map(|(i, &v)| {
                let x = i as f64;
                Rectangle::new([(x, y_min), (x + BAR_WIDTH, v)], INDIAN_RED.filled())
            }))?
            .label("Conventional")
            .legend(|(x, y)| Rectangle::new([(x, y - 8), (x + 16, y + 8)], INDIAN_RED.filled()));

        chart
            .configure_series_labels()
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .label_font(("sans-serif", 30))
            .draw()?;
        Ok(())
    }

    fn draw_lines(&self, root: &DrawingArea<BitMapBackend, Shift>) -> Result<()> {
        let y_max = self.series.max_value();
        let y_lo = self.series.min_value() - y_max * 0.1;
        let y_hi = y_max * 1.1;
        let x_lo = self.series.sides[0] as f64;
        let x_hi = self.series.sides[self.series.len() - 1] as f64;

        let mut chart = ChartBuilder::on(root)
            .caption(&self.title, ("sans-serif", 48))
            .margin(20)
            .x_label_area_size(110)
            .y_label_area_size(160)
            .build_cartesian_2d((x_lo..x_hi).log_scale(), y_lo..y_hi)?;

        chart
            .configure_mesh()
            .x_desc(&self.x_label)
            .y_desc(&self.y_label)
            .label_style(("sans-serif", 30))
            .axis_desc_style(("sans-serif", 36))
            .draw()?;

        let points = |values: &ndarray::Array1<f64>| -> Vec<(f64, f64)> {
            self.series
                .sides
                .iter()
                .zip(values.iter())
                .map(|(&side, &v)| (side as f64, v))
                .collect()
        };

        chart
            .draw_series(LineSeries::new(
                points(&self.series.factorized),
                SKY_BLUE.stroke_width(4),
            ))?
            .label("Factorized")
            .legend(|(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], SKY_BLUE.stroke_width(4))
            });

        chart
            .draw_series(LineSeries::new(
                points(&self.series.conventional),
                INDIAN_RED.stroke_width(4),
            ))?
            .label("Conventional")
            .legend(|(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], INDIAN_RED.stroke_width(4))
            });

        chart
            .configure_series_labels()
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .label_font(("sans-serif", 30))
            .draw()?;
        Ok(())
    }
}
