//! Three-level ordinal rating and its rank encoding.

use std::fmt;
use std::str::FromStr;

use crate::error::{MatrixError, Result};

/// Tick labels for ranks 1, 2 and 3, in rank order.
pub const RATING_LABELS: [&str; 3] = ["Low", "Medium", "High"];

/// An ordinal rating on one of the three matrix dimensions.
///
/// Ratings are totally ordered (`Low < Medium < High`) and map one-to-one
/// onto the integer ranks `1..=3`.
///
/// # Examples
///
/// ```
/// use stratmatrix_core::Rating;
///
/// assert_eq!(Rating::Medium.rank(), 2);
/// assert_eq!("High".parse::<Rating>().unwrap(), Rating::High);
/// assert!(Rating::Low < Rating::High);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Rating {
    Low,
    Medium,
    High,
}

impl Rating {
    /// All ratings in rank order.
    pub const ALL: [Rating; 3] = [Rating::Low, Rating::Medium, Rating::High];

    /// Returns the numeric rank (`Low = 1`, `Medium = 2`, `High = 3`).
    #[inline]
    pub const fn rank(self) -> u8 {
        match self {
            Rating::Low => 1,
            Rating::Medium => 2,
            Rating::High => 3,
        }
    }

    /// Returns the rating for a numeric rank.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::InvalidRank`] for anything outside `1..=3`.
    pub fn from_rank(rank: i64) -> Result<Self> {
        match rank {
            1 => Ok(Rating::Low),
            2 => Ok(Rating::Medium),
            3 => Ok(Rating::High),
            other => Err(MatrixError::InvalidRank(other)),
        }
    }

    /// Returns the literal used in tables and CSV files.
    pub const fn as_str(self) -> &'static str {
        RATING_LABELS[self.rank() as usize - 1]
    }

    /// Returns true if this is the top rating.
    ///
    /// Quadrant classification only distinguishes High from not-High.
    #[inline]
    pub const fn is_high(self) -> bool {
        matches!(self, Rating::High)
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Rating {
    type Err = MatrixError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "Low" => Ok(Rating::Low),
            "Medium" => Ok(Rating::Medium),
            "High" => Ok(Rating::High),
            other => Err(MatrixError::InvalidRating(other.to_string())),
        }
    }
}

impl TryFrom<i64> for Rating {
    type Error = MatrixError;

    fn try_from(rank: i64) -> Result<Self> {
        Rating::from_rank(rank)
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> u8 {
        rating.rank()
    }
}

/// Encodes a rating literal as its rank.
///
/// # Errors
///
/// Returns [`MatrixError::InvalidRating`] if `value` is not exactly one of
/// `Low`, `Medium` or `High`.
pub fn encode(value: &str) -> Result<u8> {
    value.parse::<Rating>().map(Rating::rank)
}

/// Decodes a rank back into its rating. Exact inverse of [`encode`].
///
/// # Errors
///
/// Returns [`MatrixError::InvalidRank`] if `rank` is outside `1..=3`.
pub fn decode(rank: i64) -> Result<Rating> {
    Rating::from_rank(rank)
}
