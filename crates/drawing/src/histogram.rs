//! Histogram rendering

use std::path::PathBuf;

use contracts::PipelineError;
use observability::RunningStats;
use plotters::prelude::*;
use tracing::{info, warn};

/// What to draw and where
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistogramSpec {
    pub x_label: String,
    pub y_label: String,
    pub output: PathBuf,
}

impl HistogramSpec {
    pub fn new(x_label: impl Into<String>, y_label: impl Into<String>, output: PathBuf) -> Self {
        Self {
            x_label: x_label.into(),
            y_label: y_label.into(),
            output,
        }
    }
}

/// Histogram renderer trait
///
/// Implementations write an image of `values` to `spec.output`.
pub trait HistogramRenderer {
    fn render(&self, values: &[f64], spec: &HistogramSpec) -> Result<(), PipelineError>;
}

/// Equal-width bins over `[min, max]`
#[derive(Debug, Clone, PartialEq)]
pub struct Bins {
    pub min: f64,
    pub max: f64,
    pub counts: Vec<u64>,
}

impl Bins {
    pub fn max_count(&self) -> u64 {
        self.counts.iter().copied().max().unwrap_or(0)
    }
}

/// Split `values` into `bins` equal-width bins
///
/// A sample whose values are all equal gets a single bin.
pub fn bin_values(values: &[f64], bins: usize) -> Bins {
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    if values.is_empty() {
        return Bins {
            min: 0.0,
            max: 0.0,
            counts: Vec::new(),
        };
    }
    if max <= min || bins <= 1 {
        return Bins {
            min,
            max,
            counts: vec![values.len() as u64],
        };
    }

    let width = (max - min) / bins as f64;
    let mut counts = vec![0u64; bins];
    for &v in values {
        // the maximum lands in the last bin
        let idx = (((v - min) / width) as usize).min(bins - 1);
        counts[idx] += 1;
    }
    Bins { min, max, counts }
}

const BAR: RGBColor = RGBColor(70, 130, 180);

/// PNG histogram drawn with plotters
#[derive(Debug, Clone)]
pub struct PngHistogram {
    pub width: u32,
    pub height: u32,
    pub bins: usize,
}

impl Default for PngHistogram {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            bins: 20,
        }
    }
}

impl PngHistogram {
    fn draw(&self, bins: &Bins, spec: &HistogramSpec) -> Result<(), PipelineError> {
        let draw_error = |e: &dyn std::fmt::Display| {
            PipelineError::visualization(format!("cannot write {}: {e}", spec.output.display()))
        };

        let root = BitMapBackend::new(&spec.output, (self.width, self.height)).into_drawing_area();
        root.fill(&WHITE).map_err(|e| draw_error(&e))?;

        let segments = bins.counts.len().max(1) as u32;
        let max_count = bins.max_count().max(1);
        let bin_width = (bins.max - bins.min) / f64::from(segments);
        let edge = |v: &SegmentValue<u32>| match v {
            SegmentValue::Exact(i) | SegmentValue::CenterOf(i) => {
                format!("{:.1}", bins.min + f64::from(*i) * bin_width)
            }
            SegmentValue::Last => format!("{:.1}", bins.max),
        };

        let mut chart = ChartBuilder::on(&root)
            .margin(15)
            .x_label_area_size(50)
            .y_label_area_size(70)
            .build_cartesian_2d(
                (0u32..segments).into_segmented(),
                0u64..max_count + max_count / 10 + 1,
            )
            .map_err(|e| draw_error(&e))?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_desc(spec.x_label.as_str())
            .y_desc(spec.y_label.as_str())
            .x_label_formatter(&edge)
            .draw()
            .map_err(|e| draw_error(&e))?;

        chart
            .draw_series(
                Histogram::vertical(&chart)
                    .style(BAR.filled())
                    .margin(1)
                    .data(bins.counts.iter().enumerate().map(|(i, &c)| (i as u32, c))),
            )
            .map_err(|e| draw_error(&e))?;

        root.present().map_err(|e| draw_error(&e))
    }
}

impl HistogramRenderer for PngHistogram {
    fn render(&self, values: &[f64], spec: &HistogramSpec) -> Result<(), PipelineError> {
        let stats = RunningStats::from_values(values);
        info!(
            x_label = %spec.x_label,
            y_label = %spec.y_label,
            "Drawing histogram: {}",
            stats.summary()
        );
        if values.is_empty() {
            warn!(output = %spec.output.display(), "no values to draw, writing empty axes");
        }

        self.draw(&bin_values(values, self.bins), spec)
    }
}
