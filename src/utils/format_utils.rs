/// Two decimals, explicit `+` only for strictly positive values: `+0.70`, `-2.10`, `0.00`.
pub fn format_delta(value: f64) -> String {
    let sign = if value > 0.0 { "+" } else { "" };
    format!("{}{:.2}", sign, value)
}

/// Same as `format_delta` with a trailing percent sign.
pub fn format_pct(value: f64) -> String {
    format!("{}%", format_delta(value))
}

pub fn format_weight(value: f64) -> String {
    format!("{:.1}", value)
}
