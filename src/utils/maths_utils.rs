/// `delta` expressed as a percentage of `base`. A zero base yields 0 instead of inf/NaN.
pub(crate) fn pct_of(delta: f64, base: f64) -> f64 {
    if base != 0.0 { delta / base * 100.0 } else { 0.0 }
}

#[inline]
pub(crate) fn signed_delta(from: f64, to: f64) -> f64 {
    to - from
}
