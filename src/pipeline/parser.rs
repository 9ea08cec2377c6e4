use serde_json::Value;

use crate::pipeline::TransformError;

/// Decodes raw text into a generic JSON value. No partial results: any syntax error fails the whole document.
pub fn parse_document(input: &str) -> Result<Value, TransformError> {
    serde_json::from_str(input).map_err(|e| {
        log::warn!(
            "Weigh-in document is not valid JSON (line {}, column {}): {}",
            e.line(),
            e.column(),
            e
        );
        TransformError::MalformedInput
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_document() {
        let value = parse_document(r#"[{"date": "2026-01-01", "morning": 1, "night": 2}]"#).unwrap();
        assert!(value.is_array());
    }

    #[test]
    fn test_parse_any_json_value() {
        assert_eq!(parse_document("{}").unwrap(), Value::Object(Default::default()));
        assert_eq!(parse_document(" 42 ").unwrap(), Value::from(42));
        assert_eq!(parse_document("null").unwrap(), Value::Null);
    }

    #[test]
    fn test_parse_out_of_range_number() {
        let value = parse_document(r#"[1e400, -1e400]"#).unwrap();
        assert_eq!(value[0].as_f64(), None);
        assert_eq!(value[1].as_f64(), None);
    }

    #[test]
    fn test_parse_failures_are_malformed_input() {
        for input in ["{not json", "", "[1, 2,]", "[{'date': 1}]", "[1] trailing"] {
            assert_eq!(
                parse_document(input),
                Err(TransformError::MalformedInput),
                "input: {:?}",
                input
            );
        }
    }
}
