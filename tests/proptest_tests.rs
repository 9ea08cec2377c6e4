//! Property-based tests using proptest for invariant testing.
//!
//! These tests verify that:
//! 1. Every candle's high/low are exactly the max/min of its open/close
//! 2. Valid input produces one candle per record in date order
//! 3. The pipeline is deterministic
//! 4. Arbitrary text never panics and never mixes errors with candles

use chrono::{Days, NaiveDate};
use proptest::prelude::*;

use weigh_in_candles::{TrendSummary, transform_weigh_ins};

// ============================================================================
// Generators
// ============================================================================

/// (day offset from 2026-01-01, morning, night)
fn weigh_in_strategy() -> impl Strategy<Value = (u64, f64, f64)> {
    (0u64..400, 50.0..400.0f64, 50.0..400.0f64)
}

fn render_document(rows: &[(u64, f64, f64)]) -> String {
    let start = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
    let values: Vec<serde_json::Value> = rows
        .iter()
        .map(|(offset, morning, night)| {
            let date = start.checked_add_days(Days::new(*offset)).unwrap();
            serde_json::json!({
                "date": date.format("%Y-%m-%d").to_string(),
                "morning": morning,
                "night": night,
            })
        })
        .collect();
    serde_json::to_string(&values).unwrap()
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn prop_candles_match_records(rows in prop::collection::vec(weigh_in_strategy(), 0..40)) {
        let result = transform_weigh_ins(&render_document(&rows));

        prop_assert!(result.errors.is_empty());
        prop_assert_eq!(result.candles.len(), rows.len());

        for candle in &result.candles {
            prop_assert_eq!(candle.high, candle.open.max(candle.close));
            prop_assert_eq!(candle.low, candle.open.min(candle.close));
        }
        for pair in result.candles.windows(2) {
            prop_assert!(pair[0].time <= pair[1].time);
        }
    }

    #[test]
    fn prop_net_change_spans_first_open_to_last_close(
        rows in prop::collection::vec(weigh_in_strategy(), 1..40)
    ) {
        let result = transform_weigh_ins(&render_document(&rows));
        let first = result.candles.first().unwrap();
        let last = result.candles.last().unwrap();
        prop_assert_eq!(result.summary.net_change, last.close - first.open);
    }

    #[test]
    fn prop_pipeline_is_deterministic(rows in prop::collection::vec(weigh_in_strategy(), 0..20)) {
        let doc = render_document(&rows);
        prop_assert_eq!(transform_weigh_ins(&doc), transform_weigh_ins(&doc));
    }

    #[test]
    fn prop_arbitrary_text_keeps_errors_and_candles_exclusive(input in ".{0,200}") {
        let result = transform_weigh_ins(&input);
        if result.has_errors() {
            prop_assert!(result.candles.is_empty());
            prop_assert!(result.warnings.is_empty());
            prop_assert_eq!(result.summary, TrendSummary::ZERO);
        }
    }
}
