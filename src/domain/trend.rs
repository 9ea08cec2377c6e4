use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

use crate::config::TREND;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TrendDirection {
    Up,
    Down,
    #[default]
    Flat,
}

impl TrendDirection {
    /// Flat inside the absolute deadband, otherwise the sign of the change.
    pub fn from_net_change(net_change: f64) -> Self {
        if net_change.abs() < TREND.flat_deadband {
            Self::Flat
        } else if net_change > 0.0 {
            Self::Up
        } else {
            Self::Down
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Up => "Upward",
            Self::Down => "Downward",
            Self::Flat => "Flat",
        }
    }
}

/// Whole-series statistics. The default value is the zero summary reported alongside errors.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendSummary {
    pub net_change: f64,
    pub net_change_pct: f64,
    pub rolling_change: f64,
    pub rolling_change_pct: f64,
    pub direction: TrendDirection,
}

impl TrendSummary {
    pub const ZERO: Self = Self {
        net_change: 0.0,
        net_change_pct: 0.0,
        rolling_change: 0.0,
        rolling_change_pct: 0.0,
        direction: TrendDirection::Flat,
    };
}
