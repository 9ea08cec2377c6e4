use crate::config::TREND;
use crate::domain::{CandlestickPoint, TrendDirection, TrendSummary, WeighInRecord};
use crate::utils::{pct_of, signed_delta};

/// One candle per record, same order.
pub fn to_candles(records: &[WeighInRecord]) -> Vec<CandlestickPoint> {
    records.iter().map(CandlestickPoint::from).collect()
}

/// Net change runs from the first open to the last close. The rolling change compares the last
/// close with the close `rolling_window - 1` candles earlier, or the first close on shorter series.
pub fn summarize(candles: &[CandlestickPoint]) -> TrendSummary {
    let (Some(first), Some(last)) = (candles.first(), candles.last()) else {
        return TrendSummary::ZERO;
    };

    let net_change = signed_delta(first.open, last.close);
    let net_change_pct = pct_of(net_change, first.open);

    let window_size = TREND.rolling_window.clamp(1, candles.len());
    let baseline = candles[candles.len() - window_size].close;
    let rolling_change = signed_delta(baseline, last.close);
    let rolling_change_pct = pct_of(rolling_change, baseline);

    TrendSummary {
        net_change,
        net_change_pct,
        rolling_change,
        rolling_change_pct,
        direction: TrendDirection::from_net_change(net_change),
    }
}
