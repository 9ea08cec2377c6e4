//! Bundled demo series, shown in the editor on first launch.

use serde::Serialize;

use crate::domain::WeighInRecord;
use crate::utils::parse_calendar_date;

/// (date, morning, night) for ten consecutive days of gently falling weight.
pub const SAMPLE_WEIGH_INS: &[(&str, f64, f64)] = &[
    ("2026-01-01", 182.4, 183.1),
    ("2026-01-02", 182.1, 182.6),
    ("2026-01-03", 181.8, 182.2),
    ("2026-01-04", 181.5, 181.9),
    ("2026-01-05", 181.3, 181.6),
    ("2026-01-06", 181.0, 181.4),
    ("2026-01-07", 180.6, 181.0),
    ("2026-01-08", 180.4, 180.8),
    ("2026-01-09", 180.2, 180.7),
    ("2026-01-10", 180.1, 180.3),
];

#[derive(Serialize)]
struct SampleRow<'a> {
    date: &'a str,
    morning: f64,
    night: f64,
}

/// The sample series as pretty-printed JSON, ready to paste into the editor.
pub fn sample_input_json() -> String {
    let rows: Vec<SampleRow> = SAMPLE_WEIGH_INS
        .iter()
        .map(|&(date, morning, night)| SampleRow {
            date,
            morning,
            night,
        })
        .collect();
    // Plain structs of str/f64 always serialize.
    serde_json::to_string_pretty(&rows).unwrap_or_default()
}

pub fn sample_records() -> Vec<WeighInRecord> {
    SAMPLE_WEIGH_INS
        .iter()
        .filter_map(|&(date, morning, night)| {
            parse_calendar_date(date).map(|date| WeighInRecord::new(date, morning, night))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_dates_are_all_valid() {
        assert_eq!(sample_records().len(), SAMPLE_WEIGH_INS.len());
    }

    #[test]
    fn test_sample_json_is_an_indented_array() {
        let json = sample_input_json();
        assert!(json.starts_with("[\n  {\n    \"date\": \"2026-01-01\""));
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value.as_array().map(Vec::len), Some(10));
        assert_eq!(value[9]["night"], 180.3);
    }
}
