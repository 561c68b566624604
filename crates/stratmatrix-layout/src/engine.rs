//! Layout description assembly.

use std::time::Instant;

use serde::Serialize;
use stratmatrix_config::MatrixConfig;
use stratmatrix_core::quadrant::{AXIS_MAX, AXIS_MIN};
use stratmatrix_core::{Quadrant, QuadrantRegion, Record, RecordSet, RATING_LABELS};
use tracing::info;

use crate::jitter::{jitter_point, JitterSource};
use crate::label::wrap_label;
use crate::placement::{anchors_for_buckets, bucket_points, AnchorPosition};
use crate::style::{marker_size, ColorScale};

/// One record positioned on the matrix.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlottedPoint {
    pub name: String,
    /// Jittered feasibility.
    pub x: f64,
    /// Jittered actionability.
    pub y: f64,
    pub business_value_rank: u8,
    pub wrapped_label: String,
    pub anchor: AnchorPosition,
    pub quadrant: Quadrant,
    pub hover_text: String,
    pub marker_size: f64,
    pub marker_color: String,
}

/// A rating axis with its tick labels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Axis {
    pub title: &'static str,
    pub tick_values: [u8; 3],
    pub tick_text: [&'static str; 3],
    pub range: [f64; 2],
}

impl Axis {
    /// Axis ticking ranks `1..=3` as Low, Medium and High.
    pub const fn rating(title: &'static str) -> Self {
        Self {
            title,
            tick_values: [1, 2, 3],
            tick_text: RATING_LABELS,
            range: [AXIS_MIN, AXIS_MAX],
        }
    }
}

/// Everything a renderer needs to draw the priority matrix.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatrixLayout {
    pub points: Vec<PlottedPoint>,
    pub regions: Vec<QuadrantRegion>,
    pub region_opacity: f64,
    pub region_line_width: u32,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub color_axis: Axis,
    pub height: u32,
}

impl MatrixLayout {
    /// Returns true if there is nothing to plot.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns the quadrant of every point, in record order.
    pub fn quadrants(&self) -> Vec<Quadrant> {
        self.points.iter().map(|p| p.quadrant).collect()
    }
}

/// Stateless engine turning a record set into a [`MatrixLayout`].
///
/// Each call to [`layout`](Self::layout) is an independent render pass.
/// Randomness comes only from the supplied [`JitterSource`].
///
/// # Examples
///
/// ```
/// use stratmatrix_core::{Quadrant, Rating, Record, RecordSet};
/// use stratmatrix_layout::{LayoutEngine, RandomJitter};
///
/// let records: RecordSet = vec![
///     Record::new("AI Chatbot", Rating::High, Rating::High, Rating::Medium),
/// ].into();
///
/// let layout = LayoutEngine::default().layout(&records, &mut RandomJitter::with_seed(1));
/// assert_eq!(layout.quadrants(), vec![Quadrant::Priority]);
/// assert!((layout.points[0].x - 3.0).abs() < 0.11);
/// ```
#[derive(Debug, Clone)]
pub struct LayoutEngine {
    spread: f64,
    wrap_width: usize,
    cell_size: f64,
    size_max: f64,
    height: u32,
    colors: ColorScale,
}

impl LayoutEngine {
    /// Creates an engine from a configuration.
    pub fn new(config: &MatrixConfig) -> Self {
        Self {
            spread: config.jitter.spread,
            wrap_width: config.labels.wrap_width,
            cell_size: config.labels.cell_size,
            size_max: config.chart.size_max,
            height: config.chart.height,
            colors: ColorScale::from_config(&config.chart),
        }
    }

    /// Runs one layout pass over `records`.
    pub fn layout<S: JitterSource + ?Sized>(
        &self,
        records: &RecordSet,
        source: &mut S,
    ) -> MatrixLayout {
        let start = Instant::now();
        info!(event = "layout_start", record_count = records.len() as u64);

        let points = if records.is_empty() {
            Vec::new()
        } else {
            self.plot(records, source)
        };

        info!(
            event = "layout_end",
            point_count = points.len() as u64,
            duration_ms = start.elapsed().as_millis() as u64,
        );

        MatrixLayout {
            points,
            regions: QuadrantRegion::all().to_vec(),
            region_opacity: QuadrantRegion::OPACITY,
            region_line_width: QuadrantRegion::LINE_WIDTH,
            x_axis: Axis::rating("Feasibility"),
            y_axis: Axis::rating("Actionability"),
            color_axis: Axis::rating("Business Value"),
            height: self.height,
        }
    }

    fn plot<S: JitterSource + ?Sized>(&self, records: &RecordSet, source: &mut S) -> Vec<PlottedPoint> {
        let coords: Vec<(f64, f64)> = records
            .iter()
            .map(|r| {
                jitter_point(
                    f64::from(r.feasibility.rank()),
                    f64::from(r.actionability.rank()),
                    self.spread,
                    &mut *source,
                )
            })
            .collect();

        let buckets = bucket_points(&coords, self.cell_size);
        let shared_cells = buckets.values().filter(|idx| idx.len() > 1).count();
        info!(
            event = "placement",
            cell_count = buckets.len() as u64,
            shared_cells = shared_cells as u64,
        );
        let anchors = anchors_for_buckets(&buckets, coords.len());

        records
            .iter()
            .zip(coords)
            .zip(anchors)
            .map(|((record, (x, y)), anchor)| PlottedPoint {
                name: record.name.clone(),
                x,
                y,
                business_value_rank: record.business_value.rank(),
                wrapped_label: wrap_label(&record.name, self.wrap_width),
                anchor,
                quadrant: record.quadrant(),
                hover_text: hover_text(record),
                marker_size: marker_size(record.business_value, self.size_max),
                marker_color: self.colors.color_at(record.business_value),
            })
            .collect()
    }
}

impl Default for LayoutEngine {
    fn default() -> Self {
        Self::new(&MatrixConfig::default())
    }
}

fn hover_text(record: &Record) -> String {
    format!(
        "<b>{}</b><br>Feasibility: {}<br>Actionability: {}<br>Business Value: {}",
        record.name, record.feasibility, record.actionability, record.business_value
    )
}
