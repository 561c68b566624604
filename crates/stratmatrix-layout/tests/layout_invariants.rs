//! Property tests for the layout pipeline.

use proptest::prelude::*;
use stratmatrix_layout::{
    assign_anchors, jitter, wrap_label, LayoutEngine, RandomJitter, DEFAULT_SPREAD, LINE_BREAK,
};
use stratmatrix_test::strategies::{arb_rating, arb_record_set};

proptest! {
    #[test]
    fn jitter_stays_within_spread(rating in arb_rating(), seed in any::<u64>(), spread in 0.0f64..0.5) {
        let rank = f64::from(rating.rank());
        let value = jitter(rank, spread, &mut RandomJitter::with_seed(seed));
        prop_assert!(value >= rank - spread && value <= rank + spread);
    }

    #[test]
    fn layout_has_one_point_per_record(records in arb_record_set(40), seed in any::<u64>()) {
        let layout = LayoutEngine::default().layout(&records, &mut RandomJitter::with_seed(seed));
        prop_assert_eq!(layout.len(), records.len());

        for (point, record) in layout.points.iter().zip(records.iter()) {
            prop_assert_eq!(&point.name, &record.name);
            prop_assert_eq!(point.quadrant, record.quadrant());
            prop_assert!((point.x - f64::from(record.feasibility.rank())).abs() <= DEFAULT_SPREAD + 1e-9);
            prop_assert!((point.y - f64::from(record.actionability.rank())).abs() <= DEFAULT_SPREAD + 1e-9);
        }
    }

    #[test]
    fn every_point_gets_an_anchor(points in prop::collection::vec((0.5f64..3.5, 0.5f64..3.5), 0..60)) {
        prop_assert_eq!(assign_anchors(&points, 0.5).len(), points.len());
    }

    #[test]
    fn wrapping_preserves_words(words in prop::collection::vec("[a-z]{1,20}", 1..8)) {
        let name = words.join(" ");
        let wrapped = wrap_label(&name, 15);
        let rejoined: Vec<&str> = wrapped
            .split(LINE_BREAK)
            .flat_map(|line| line.split(' '))
            .collect();
        prop_assert_eq!(rejoined, words.iter().map(String::as_str).collect::<Vec<_>>());

        for line in wrapped.split(LINE_BREAK) {
            // Over-long lines only ever hold a single word.
            prop_assert!(line.chars().count() <= 15 || !line.contains(' '));
        }
    }
}
