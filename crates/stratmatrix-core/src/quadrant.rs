//! Quadrant classification and chart shading regions.

use std::fmt;

use crate::rating::Rating;

/// Axis value separating the low and high halves of each axis.
pub const QUADRANT_BOUNDARY: f64 = 2.0;

/// Lower edge of both plotted axes.
pub const AXIS_MIN: f64 = 0.5;

/// Upper edge of both plotted axes.
pub const AXIS_MAX: f64 = 3.5;

/// Strategic bucket a use case falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Quadrant {
    /// High actionability, high feasibility.
    Priority,
    /// High actionability, feasibility not yet there.
    Research,
    /// Feasible today, but the business is not ready.
    Enablement,
    /// Neither dimension is High.
    Backlog,
}

impl Quadrant {
    /// All quadrants in chart drawing order.
    pub const ALL: [Quadrant; 4] = [
        Quadrant::Priority,
        Quadrant::Research,
        Quadrant::Backlog,
        Quadrant::Enablement,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Quadrant::Priority => "Priority",
            Quadrant::Research => "Research",
            Quadrant::Enablement => "Enablement",
            Quadrant::Backlog => "Backlog",
        }
    }

    /// Shading color used for this quadrant's region.
    pub fn color(&self) -> &'static str {
        match self {
            Quadrant::Priority => "green",
            Quadrant::Research => "orange",
            Quadrant::Enablement => "blue",
            Quadrant::Backlog => "red",
        }
    }

    /// Returns the fixed shading region, in axis units.
    ///
    /// Feasibility runs along x, actionability along y.
    pub fn region(&self) -> QuadrantRegion {
        let (x0, x1, y0, y1) = match self {
            Quadrant::Priority => (QUADRANT_BOUNDARY, AXIS_MAX, QUADRANT_BOUNDARY, AXIS_MAX),
            Quadrant::Research => (AXIS_MIN, QUADRANT_BOUNDARY, QUADRANT_BOUNDARY, AXIS_MAX),
            Quadrant::Backlog => (AXIS_MIN, QUADRANT_BOUNDARY, AXIS_MIN, QUADRANT_BOUNDARY),
            Quadrant::Enablement => (QUADRANT_BOUNDARY, AXIS_MAX, AXIS_MIN, QUADRANT_BOUNDARY),
        };
        QuadrantRegion {
            quadrant: *self,
            x0,
            x1,
            y0,
            y1,
            color: self.color(),
        }
    }
}

impl fmt::Display for Quadrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Rectangular shaded area of the chart belonging to one quadrant.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct QuadrantRegion {
    pub quadrant: Quadrant,
    pub x0: f64,
    pub x1: f64,
    pub y0: f64,
    pub y1: f64,
    pub color: &'static str,
}

impl QuadrantRegion {
    /// Fill opacity applied to every region.
    pub const OPACITY: f64 = 0.1;

    /// Border width applied to every region.
    pub const LINE_WIDTH: u32 = 2;

    /// Returns the four regions in drawing order.
    pub fn all() -> [QuadrantRegion; 4] {
        Quadrant::ALL.map(|q| q.region())
    }
}

/// Classifies a use case from its two positional ratings.
///
/// Only the High / not-High boundary matters; Medium and Low behave
/// identically.
///
/// # Examples
///
/// ```
/// use stratmatrix_core::{classify, Quadrant, Rating};
///
/// assert_eq!(classify(Rating::High, Rating::High), Quadrant::Priority);
/// assert_eq!(classify(Rating::High, Rating::Low), Quadrant::Research);
/// assert_eq!(classify(Rating::Low, Rating::High), Quadrant::Enablement);
/// assert_eq!(classify(Rating::Medium, Rating::Medium), Quadrant::Backlog);
/// ```
pub fn classify(actionability: Rating, feasibility: Rating) -> Quadrant {
    match (actionability.is_high(), feasibility.is_high()) {
        (true, true) => Quadrant::Priority,
        (true, false) => Quadrant::Research,
        (false, true) => Quadrant::Enablement,
        (false, false) => Quadrant::Backlog,
    }
}
