//! Random positional offsets that separate coincident points.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of jitter offsets.
///
/// Production code draws from [`RandomJitter`]; tests can supply a fixed
/// sequence to assert exact coordinates.
pub trait JitterSource {
    /// Draws an offset from `[-spread, spread]`.
    ///
    /// `spread` is always finite and strictly positive.
    fn offset(&mut self, spread: f64) -> f64;
}

impl<S: JitterSource + ?Sized> JitterSource for &mut S {
    fn offset(&mut self, spread: f64) -> f64 {
        (**self).offset(spread)
    }
}

/// Uniform jitter drawn from a random number generator.
///
/// # Examples
///
/// ```
/// use stratmatrix_layout::{jitter, RandomJitter};
///
/// let mut source = RandomJitter::with_seed(42);
/// let x = jitter(2.0, 0.1, &mut source);
/// assert!((1.9..=2.1).contains(&x));
/// ```
#[derive(Debug, Clone)]
pub struct RandomJitter<R = StdRng> {
    rng: R,
}

impl RandomJitter<StdRng> {
    /// Creates a jitter source seeded from the operating system.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Creates a jitter source with a specific seed.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomJitter<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> JitterSource for RandomJitter<R> {
    fn offset(&mut self, spread: f64) -> f64 {
        // Scaling a unit draw keeps the range finite for any finite spread.
        spread * self.rng.random_range(-1.0..=1.0)
    }
}

/// Returns `rank` perturbed by an offset within `[-spread, spread]`.
///
/// Negative spreads are treated by magnitude. A zero or non-finite spread
/// leaves the rank untouched. Offsets returned by the source are clamped to
/// the interval, so the result never leaves `[rank - spread, rank + spread]`.
pub fn jitter<S: JitterSource + ?Sized>(rank: f64, spread: f64, source: &mut S) -> f64 {
    let spread = spread.abs();
    if !spread.is_finite() || spread == 0.0 {
        return rank;
    }
    rank + source.offset(spread).clamp(-spread, spread)
}

/// Jitters both axes of a point with two independent draws.
///
/// Points that share both ranks therefore separate in two dimensions
/// rather than sliding along a diagonal.
pub fn jitter_point<S: JitterSource + ?Sized>(
    x_rank: f64,
    y_rank: f64,
    spread: f64,
    source: &mut S,
) -> (f64, f64) {
    let x = jitter(x_rank, spread, source);
    let y = jitter(y_rank, spread, source);
    (x, y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use stratmatrix_config::DEFAULT_SPREAD;

    struct Constant(f64);

    impl JitterSource for Constant {
        fn offset(&mut self, _spread: f64) -> f64 {
            self.0
        }
    }

    #[test]
    fn test_seeded_jitter_within_range() {
        let mut source = RandomJitter::with_seed(7);
        for rank in [1.0, 2.0, 3.0] {
            for _ in 0..1_000 {
                let value = jitter(rank, DEFAULT_SPREAD, &mut source);
                assert!(value >= rank - DEFAULT_SPREAD && value <= rank + DEFAULT_SPREAD);
            }
        }
    }

    #[test]
    fn test_os_seeded_jitter_moves_points() {
        let mut source = RandomJitter::new();
        let moved = (0..100).any(|_| jitter(2.0, DEFAULT_SPREAD, &mut source) != 2.0);
        assert!(moved);
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = RandomJitter::with_seed(99);
        let mut b = RandomJitter::with_seed(99);
        for _ in 0..10 {
            assert_eq!(jitter(1.0, 0.1, &mut a), jitter(1.0, 0.1, &mut b));
        }
    }

    #[test]
    fn test_out_of_range_offset_is_clamped() {
        assert_eq!(jitter(2.0, 0.1, &mut Constant(5.0)), 2.0 + 0.1);
        assert_eq!(jitter(2.0, 0.1, &mut Constant(-5.0)), 2.0 - 0.1);
    }

    #[test]
    fn test_zero_and_non_finite_spread_leave_rank() {
        let mut source = Constant(0.05);
        assert_eq!(jitter(3.0, 0.0, &mut source), 3.0);
        assert_eq!(jitter(3.0, f64::NAN, &mut source), 3.0);
        assert_eq!(jitter(3.0, f64::INFINITY, &mut source), 3.0);
    }

    #[test]
    fn test_huge_finite_spread_is_total() {
        let mut source = RandomJitter::with_seed(5);
        for spread in [1e308, f64::MAX, -f64::MAX] {
            for _ in 0..100 {
                let value = jitter(2.0, spread, &mut source);
                assert!(value.is_finite());
                assert!(value.abs() <= spread.abs());
            }
        }
    }

    #[test]
    fn test_negative_spread_uses_magnitude() {
        assert_eq!(jitter(1.0, -0.1, &mut Constant(0.5)), 1.0 + 0.1);
    }

    #[test]
    fn test_jitter_point_draws_twice() {
        struct Counting(usize);
        impl JitterSource for Counting {
            fn offset(&mut self, _spread: f64) -> f64 {
                self.0 += 1;
                if self.0 % 2 == 1 {
                    0.05
                } else {
                    -0.05
                }
            }
        }

        let mut source = Counting(0);
        let (x, y) = jitter_point(2.0, 2.0, 0.1, &mut source);
        assert_eq!(source.0, 2);
        assert_eq!(x, 2.0 + 0.05);
        assert_eq!(y, 2.0 - 0.05);
    }
}
