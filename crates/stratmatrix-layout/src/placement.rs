//! Grid-bucketed label anchor assignment.
//!
//! Placement runs in two passes. Points are first grouped by the grid cell
//! containing their jittered coordinates, then each cell hands out anchors
//! independently: a lone point gets [`AnchorPosition::TopCenter`], while
//! points sharing a cell take positions round-robin from [`FAN_OUT_ORDER`]
//! so their labels fan out around the crowd.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use stratmatrix_config::DEFAULT_CELL_SIZE;
use tracing::debug;

/// Compass-style placement of a label relative to its point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum AnchorPosition {
    #[default]
    #[serde(rename = "top center")]
    TopCenter,
    #[serde(rename = "top right")]
    TopRight,
    #[serde(rename = "top left")]
    TopLeft,
    #[serde(rename = "bottom center")]
    BottomCenter,
    #[serde(rename = "bottom right")]
    BottomRight,
    #[serde(rename = "bottom left")]
    BottomLeft,
    #[serde(rename = "middle right")]
    MiddleRight,
    #[serde(rename = "middle left")]
    MiddleLeft,
}

impl AnchorPosition {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnchorPosition::TopCenter => "top center",
            AnchorPosition::TopRight => "top right",
            AnchorPosition::TopLeft => "top left",
            AnchorPosition::BottomCenter => "bottom center",
            AnchorPosition::BottomRight => "bottom right",
            AnchorPosition::BottomLeft => "bottom left",
            AnchorPosition::MiddleRight => "middle right",
            AnchorPosition::MiddleLeft => "middle left",
        }
    }
}

impl fmt::Display for AnchorPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Order in which co-located points receive anchors.
pub const FAN_OUT_ORDER: [AnchorPosition; 8] = [
    AnchorPosition::TopCenter,
    AnchorPosition::TopRight,
    AnchorPosition::TopLeft,
    AnchorPosition::BottomCenter,
    AnchorPosition::BottomRight,
    AnchorPosition::BottomLeft,
    AnchorPosition::MiddleRight,
    AnchorPosition::MiddleLeft,
];

/// Integer key of a square grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridCell {
    pub col: i64,
    pub row: i64,
}

impl GridCell {
    /// Returns the cell containing `(x, y)`.
    ///
    /// Uses floor division so cells stay uniform across zero.
    pub fn containing(x: f64, y: f64, cell_size: f64) -> Self {
        Self {
            col: (x / cell_size).floor() as i64,
            row: (y / cell_size).floor() as i64,
        }
    }
}

/// Groups point indices by the grid cell containing each point.
///
/// Indices within a cell keep the order of `points`. A cell size that is
/// not finite and positive falls back to [`DEFAULT_CELL_SIZE`].
pub fn bucket_points(points: &[(f64, f64)], cell_size: f64) -> BTreeMap<GridCell, Vec<usize>> {
    let cell_size = if cell_size.is_finite() && cell_size > 0.0 {
        cell_size
    } else {
        DEFAULT_CELL_SIZE
    };

    let mut buckets: BTreeMap<GridCell, Vec<usize>> = BTreeMap::new();
    for (idx, &(x, y)) in points.iter().enumerate() {
        buckets
            .entry(GridCell::containing(x, y, cell_size))
            .or_default()
            .push(idx);
    }
    buckets
}

/// Assigns one anchor per point from precomputed buckets.
///
/// `point_count` is the number of points the buckets were built from.
/// Cells with more than eight points cycle through [`FAN_OUT_ORDER`] again.
pub fn anchors_for_buckets(
    buckets: &BTreeMap<GridCell, Vec<usize>>,
    point_count: usize,
) -> Vec<AnchorPosition> {
    let mut anchors = vec![AnchorPosition::default(); point_count];

    for (cell, indices) in buckets {
        if let [only] = indices.as_slice() {
            if let Some(slot) = anchors.get_mut(*only) {
                *slot = AnchorPosition::TopCenter;
            }
            continue;
        }

        if indices.len() > FAN_OUT_ORDER.len() {
            debug!(
                event = "cell_overflow",
                col = cell.col,
                row = cell.row,
                points = indices.len() as u64,
            );
        }

        for (slot_idx, &point_idx) in indices.iter().enumerate() {
            if let Some(slot) = anchors.get_mut(point_idx) {
                *slot = FAN_OUT_ORDER[slot_idx % FAN_OUT_ORDER.len()];
            }
        }
    }

    anchors
}

/// Buckets `points` and assigns every point exactly one anchor.
///
/// # Examples
///
/// ```
/// use stratmatrix_layout::{assign_anchors, AnchorPosition};
///
/// let anchors = assign_anchors(&[(3.02, 3.05), (3.08, 3.11), (1.0, 1.0)], 0.5);
/// assert_eq!(
///     anchors,
///     vec![AnchorPosition::TopCenter, AnchorPosition::TopRight, AnchorPosition::TopCenter]
/// );
/// ```
pub fn assign_anchors(points: &[(f64, f64)], cell_size: f64) -> Vec<AnchorPosition> {
    if points.is_empty() {
        return Vec::new();
    }
    let buckets = bucket_points(points, cell_size);
    anchors_for_buckets(&buckets, points.len())
}
