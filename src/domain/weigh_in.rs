use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One validated day of readings. Only the validator builds these from untrusted input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeighInRecord {
    pub date: NaiveDate,
    pub morning: f64,
    pub night: f64,
}

impl WeighInRecord {
    pub fn new(date: NaiveDate, morning: f64, night: f64) -> Self {
        WeighInRecord {
            date,
            morning,
            night,
        }
    }
}
