//! Marker size and color encoding of business value.

use stratmatrix_config::{parse_hex_color, ChartConfig};
use stratmatrix_core::Rating;
use tracing::warn;

const MAX_RANK: f64 = 3.0;

/// Marker diameter for a business value.
///
/// Marker area grows linearly with rank, so the diameter scales with its
/// square root; High maps to exactly `size_max`.
pub fn marker_size(business_value: Rating, size_max: f64) -> f64 {
    size_max * (f64::from(business_value.rank()) / MAX_RANK).sqrt()
}

/// Continuous two-stop color scale over the business value ranks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorScale {
    low: [u8; 3],
    high: [u8; 3],
}

impl ColorScale {
    pub const fn new(low: [u8; 3], high: [u8; 3]) -> Self {
        Self { low, high }
    }

    /// Builds a scale from two `#RRGGBB` strings.
    pub fn from_hex(low: &str, high: &str) -> Option<Self> {
        Some(Self::new(parse_hex_color(low)?, parse_hex_color(high)?))
    }

    /// Builds the scale configured for the chart, falling back to the
    /// default stops if either color does not parse.
    pub fn from_config(chart: &ChartConfig) -> Self {
        Self::from_hex(&chart.color_low, &chart.color_high).unwrap_or_else(|| {
            warn!(
                color_low = %chart.color_low,
                color_high = %chart.color_high,
                "unparseable chart colors, using default scale"
            );
            Self::default()
        })
    }

    /// Returns the `#RRGGBB` color for a rating.
    ///
    /// Low maps to the low stop, High to the high stop, Medium halfway.
    pub fn color_at(&self, rating: Rating) -> String {
        let t = (f64::from(rating.rank()) - 1.0) / (MAX_RANK - 1.0);
        let channel = |i: usize| {
            let low = f64::from(self.low[i]);
            let high = f64::from(self.high[i]);
            (low + (high - low) * t).round() as u8
        };
        format!("#{:02X}{:02X}{:02X}", channel(0), channel(1), channel(2))
    }
}

impl Default for ColorScale {
    fn default() -> Self {
        Self::new([0xAE, 0xDF, 0xF7], [0x00, 0x7B, 0xFF])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_size_scales_by_area() {
        assert_eq!(marker_size(Rating::High, 60.0), 60.0);
        let low = marker_size(Rating::Low, 60.0);
        let medium = marker_size(Rating::Medium, 60.0);
        assert!(low < medium && medium < 60.0);
        // Area ratio Low:High is 1:3.
        assert!(((low * low) / (60.0 * 60.0) - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_color_scale_endpoints() {
        let scale = ColorScale::default();
        assert_eq!(scale.color_at(Rating::Low), "#AEDFF7");
        assert_eq!(scale.color_at(Rating::High), "#007BFF");
    }

    #[test]
    fn test_color_scale_midpoint() {
        let scale = ColorScale::new([0, 0, 0], [200, 100, 50]);
        assert_eq!(scale.color_at(Rating::Medium), "#643219");
    }

    #[test]
    fn test_from_config_falls_back() {
        let chart = ChartConfig {
            color_low: "nope".to_string(),
            ..ChartConfig::default()
        };
        assert_eq!(ColorScale::from_config(&chart), ColorScale::default());

        let chart = ChartConfig {
            color_low: "#000000".to_string(),
            color_high: "#FFFFFF".to_string(),
            ..ChartConfig::default()
        };
        assert_eq!(ColorScale::from_config(&chart).color_at(Rating::High), "#FFFFFF");
    }
}
