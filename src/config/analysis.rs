//! Trend and sequencing constants (Immutable Blueprints)

/// Only accepted calendar date layout for weigh-in records.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Tunables shared by the sequencer and the aggregator.
pub struct TrendConfig {
    /// Number of most recent points covered by the rolling change.
    pub rolling_window: usize,
    /// Absolute net change (in weight units) below which the trend is reported as flat.
    pub flat_deadband: f64,
    /// Consecutive dates further apart than this many days raise a gap warning.
    pub gap_threshold_days: f64,
}

pub const TREND: TrendConfig = TrendConfig {
    rolling_window: 7,
    flat_deadband: 0.05,
    gap_threshold_days: 1.5,
};
