use serde_json::{Map, Value};

use crate::domain::WeighInRecord;
use crate::pipeline::{RowDefect, TransformError};
use crate::utils::parse_calendar_date;

/// Output of the validation stage: every fully valid row plus every defect found, in row order.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ValidatedRecords {
    pub records: Vec<WeighInRecord>,
    pub errors: Vec<TransformError>,
}

/// Checks the document shape, then scans every row and accumulates defects.
///
/// Only a non-array document is returned as `Err`. Row defects are collected and never stop the scan.
/// A row yields a record only when its date and both weights are valid.
pub fn validate_document(document: &Value) -> Result<ValidatedRecords, TransformError> {
    let Value::Array(entries) = document else {
        return Err(TransformError::ShapeError);
    };

    let mut validated = ValidatedRecords {
        records: Vec::with_capacity(entries.len()),
        errors: Vec::new(),
    };

    for (idx, entry) in entries.iter().enumerate() {
        let row = idx + 1;
        match entry {
            Value::Object(fields) => validate_row(row, fields, &mut validated),
            _ => validated
                .errors
                .push(TransformError::row(row, RowDefect::NotAnObject)),
        }
    }

    log::debug!(
        "Validated {} rows: {} records, {} errors",
        entries.len(),
        validated.records.len(),
        validated.errors.len()
    );
    Ok(validated)
}

fn validate_row(row: usize, fields: &Map<String, Value>, validated: &mut ValidatedRecords) {
    // A non-string date counts as absent.
    let date = fields
        .get("date")
        .and_then(Value::as_str)
        .and_then(parse_calendar_date);
    let morning = fields.get("morning").and_then(coerce_weight);
    let night = fields.get("night").and_then(coerce_weight);

    if date.is_none() {
        validated
            .errors
            .push(TransformError::row(row, RowDefect::InvalidDate));
    }
    if morning.is_none() {
        validated
            .errors
            .push(TransformError::row(row, RowDefect::InvalidMorning));
    }
    if night.is_none() {
        validated
            .errors
            .push(TransformError::row(row, RowDefect::InvalidNight));
    }

    if let (Some(date), Some(morning), Some(night)) = (date, morning, night) {
        validated
            .records
            .push(WeighInRecord::new(date, morning, night));
    }
}

/// Native finite numbers pass as-is. Strings are trimmed and parsed; anything else is rejected.
pub(crate) fn coerce_weight(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return None;
            }
            trimmed.parse::<f64>().ok()?
        }
        _ => return None,
    };
    number.is_finite().then_some(number)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use serde_json::json;

    fn messages(validated: &ValidatedRecords) -> Vec<String> {
        validated.errors.iter().map(|e| e.to_string()).collect()
    }

    #[test]
    fn test_non_array_is_shape_error() {
        for doc in [json!({}), json!("text"), json!(12), json!(null), json!(true)] {
            assert_eq!(validate_document(&doc), Err(TransformError::ShapeError));
        }
    }

    #[test]
    fn test_empty_array_is_clean() {
        let validated = validate_document(&json!([])).unwrap();
        assert!(validated.records.is_empty());
        assert!(validated.errors.is_empty());
    }

    #[test]
    fn test_valid_row_becomes_record() {
        let doc = json!([{ "date": "2026-01-01", "morning": 182.4, "night": "183.1" }]);
        let validated = validate_document(&doc).unwrap();
        assert!(validated.errors.is_empty());
        assert_eq!(
            validated.records,
            vec![WeighInRecord::new(
                NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
                182.4,
                183.1
            )]
        );
    }

    #[test]
    fn test_non_object_rows_skip_field_checks() {
        let doc = json!([1, "x", null, [1, 2], true]);
        let validated = validate_document(&doc).unwrap();
        assert_eq!(
            messages(&validated),
            vec![
                "Row 1 must be an object.",
                "Row 2 must be an object.",
                "Row 3 must be an object.",
                "Row 4 must be an object.",
                "Row 5 must be an object.",
            ]
        );
        assert!(validated.records.is_empty());
    }

    #[test]
    fn test_every_defect_in_a_row_is_reported() {
        let doc = json!([{ "date": 20260101, "morning": "", "night": null }]);
        let validated = validate_document(&doc).unwrap();
        assert_eq!(
            messages(&validated),
            vec![
                "Row 1 has an invalid date. Use YYYY-MM-DD.",
                "Row 1 is missing a valid morning weight.",
                "Row 1 is missing a valid night weight.",
            ]
        );
    }

    #[test]
    fn test_partial_rows_produce_no_record_and_scan_continues() {
        let doc = json!([
            { "date": "2026-02-30", "morning": 180, "night": 181 },
            { "date": "2026-01-02", "morning": 180 },
            { "date": "2026-01-03", "morning": 180, "night": 181 },
            "oops",
        ]);
        let validated = validate_document(&doc).unwrap();
        assert_eq!(
            messages(&validated),
            vec![
                "Row 1 has an invalid date. Use YYYY-MM-DD.",
                "Row 2 is missing a valid night weight.",
                "Row 4 must be an object.",
            ]
        );
        assert_eq!(validated.records.len(), 1);
        assert_eq!(
            validated.records[0].date,
            NaiveDate::from_ymd_opt(2026, 1, 3).unwrap()
        );
    }

    #[test]
    fn test_coerce_weight() {
        assert_eq!(coerce_weight(&json!(182.4)), Some(182.4));
        assert_eq!(coerce_weight(&json!(0)), Some(0.0));
        assert_eq!(coerce_weight(&json!(-3)), Some(-3.0));
        assert_eq!(coerce_weight(&json!(" 181.25 ")), Some(181.25));
        assert_eq!(coerce_weight(&json!("1e2")), Some(100.0));
        assert_eq!(coerce_weight(&json!("")), None);
        assert_eq!(coerce_weight(&json!("   ")), None);
        assert_eq!(coerce_weight(&json!("abc")), None);
        assert_eq!(coerce_weight(&json!("180kg")), None);
        assert_eq!(coerce_weight(&json!("inf")), None);
        assert_eq!(coerce_weight(&json!("NaN")), None);
        assert_eq!(coerce_weight(&json!(true)), None);
        assert_eq!(coerce_weight(&json!(null)), None);
        assert_eq!(coerce_weight(&json!([180])), None);
        assert_eq!(coerce_weight(&json!({ "v": 180 })), None);
    }
}
