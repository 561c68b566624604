//! StratMatrix - Use Case Priority Matrix in Rust
//!
//! Rate use cases Low/Medium/High on actionability, feasibility and
//! business value, then lay them out on a quadrant matrix.
//!
//! # Example
//!
//! ```rust
//! use stratmatrix::prelude::*;
//!
//! let mut session = Session::new(MatrixConfig::default().with_random_seed(7));
//! session
//!     .add_use_case("AI Chatbot", Rating::High, Rating::High, Rating::Medium)
//!     .unwrap();
//!
//! let layout = session.render();
//! assert_eq!(layout.points[0].quadrant, Quadrant::Priority);
//! ```

// Core types
pub use stratmatrix_core::{
    classify, decode, encode, MatrixError, Quadrant, QuadrantRegion, Rating, Record, RecordSet,
    QUADRANT_BOUNDARY, RATING_LABELS,
};

// Layout engine
pub use stratmatrix_layout::{
    assign_anchors, jitter, wrap_label, AnchorPosition, JitterSource, LayoutEngine, MatrixLayout,
    PlottedPoint, RandomJitter,
};

// Configuration
pub use stratmatrix_config::{ConfigError, MatrixConfig};

// CSV boundary
pub use stratmatrix_io::{
    validate_columns, validate_ratings, Table, TableError, RATING_COLUMNS, REQUIRED_COLUMNS,
    VALID_RATINGS,
};

mod session;
pub use session::Session;

#[cfg(feature = "console")]
pub use stratmatrix_console as console;

pub mod prelude {
    pub use super::{
        classify, AnchorPosition, LayoutEngine, MatrixConfig, MatrixError, MatrixLayout,
        PlottedPoint, Quadrant, Rating, Record, RecordSet, Session, TableError,
    };
}
