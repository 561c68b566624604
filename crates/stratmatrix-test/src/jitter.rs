//! Deterministic jitter sources.

use stratmatrix_layout::JitterSource;

/// Jitter source that always returns zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZeroJitter;

impl JitterSource for ZeroJitter {
    fn offset(&mut self, _spread: f64) -> f64 {
        0.0
    }
}

/// Jitter source replaying a fixed sequence of offsets.
///
/// The sequence wraps around once exhausted. An empty sequence yields zero.
#[derive(Debug, Clone, Default)]
pub struct FixedJitter {
    offsets: Vec<f64>,
    cursor: usize,
    draws: usize,
}

impl FixedJitter {
    pub fn new(offsets: impl Into<Vec<f64>>) -> Self {
        Self {
            offsets: offsets.into(),
            cursor: 0,
            draws: 0,
        }
    }

    /// Number of offsets drawn so far.
    pub fn draws(&self) -> usize {
        self.draws
    }
}

impl JitterSource for FixedJitter {
    fn offset(&mut self, _spread: f64) -> f64 {
        self.draws += 1;
        if self.offsets.is_empty() {
            return 0.0;
        }
        let value = self.offsets[self.cursor];
        self.cursor = (self.cursor + 1) % self.offsets.len();
        value
    }
}
