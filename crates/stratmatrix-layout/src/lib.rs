//! StratMatrix Layout - turns rated records into a renderable scatter layout
//!
//! The pipeline runs in one pass per render:
//! - [`jitter`] perturbs ordinal ranks so coincident points separate
//! - [`label`] re-flows long names onto several lines
//! - [`placement`] buckets points into a grid and fans out label anchors
//! - [`engine`] assembles everything into a [`MatrixLayout`]

pub mod engine;
pub mod jitter;
pub mod label;
pub mod placement;
pub mod style;

pub use engine::{Axis, LayoutEngine, MatrixLayout, PlottedPoint};
pub use jitter::{jitter, jitter_point, JitterSource, RandomJitter};
pub use label::{wrap_label, LINE_BREAK};
pub use placement::{
    anchors_for_buckets, assign_anchors, bucket_points, AnchorPosition, GridCell, FAN_OUT_ORDER,
};
pub use stratmatrix_config::{DEFAULT_CELL_SIZE, DEFAULT_SPREAD, DEFAULT_WRAP_WIDTH};
pub use style::{marker_size, ColorScale};
