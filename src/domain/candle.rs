use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::WeighInRecord;

#[derive(Debug, PartialEq)]
pub enum CandleType {
    /// Night reading at or above the morning reading
    Rising,
    Falling,
}

/// Open/high/low/close view of a single weigh-in. Open is the morning reading, close the night one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CandlestickPoint {
    pub time: NaiveDate,
    pub open: f64,
    pub close: f64,
    pub high: f64,
    pub low: f64,
}

impl From<&WeighInRecord> for CandlestickPoint {
    fn from(record: &WeighInRecord) -> Self {
        CandlestickPoint {
            time: record.date,
            open: record.morning,
            close: record.night,
            high: record.morning.max(record.night),
            low: record.morning.min(record.night),
        }
    }
}

impl CandlestickPoint {
    pub fn get_type(&self) -> CandleType {
        if self.close >= self.open {
            CandleType::Rising
        } else {
            CandleType::Falling
        }
    }

    // Returns the low and high of the candle body as a tuple
    pub fn body_range(&self) -> (f64, f64) {
        match self.get_type() {
            CandleType::Rising => (self.open, self.close),
            CandleType::Falling => (self.close, self.open),
        }
    }

    /// Morning to night swing (close - open).
    pub fn intraday_change(&self) -> f64 {
        self.close - self.open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, d).unwrap()
    }

    #[test]
    fn test_candle_from_rising_day() {
        let record = WeighInRecord::new(date(1), 182.4, 183.1);
        let candle = CandlestickPoint::from(&record);
        assert_eq!(
            candle,
            CandlestickPoint {
                time: date(1),
                open: 182.4,
                close: 183.1,
                high: 183.1,
                low: 182.4,
            }
        );
        assert_eq!(candle.get_type(), CandleType::Rising);
        assert_eq!(candle.body_range(), (182.4, 183.1));
    }

    #[test]
    fn test_candle_from_falling_day() {
        let record = WeighInRecord::new(date(2), 181.0, 180.2);
        let candle = CandlestickPoint::from(&record);
        assert_eq!(candle.high, 181.0);
        assert_eq!(candle.low, 180.2);
        assert_eq!(candle.get_type(), CandleType::Falling);
        assert_eq!(candle.body_range(), (180.2, 181.0));
        assert!(candle.intraday_change() < 0.0);
    }

    #[test]
    fn test_flat_day_counts_as_rising() {
        let candle = CandlestickPoint::from(&WeighInRecord::new(date(3), 180.0, 180.0));
        assert_eq!(candle.get_type(), CandleType::Rising);
        assert_eq!(candle.high, candle.low);
    }

    #[test]
    fn test_candle_serializes_time_as_iso_date() {
        let candle = CandlestickPoint::from(&WeighInRecord::new(date(5), 1.0, 2.0));
        let json = serde_json::to_value(candle).unwrap();
        assert_eq!(json["time"], "2026-01-05");
        assert_eq!(json["high"], 2.0);
    }
}
