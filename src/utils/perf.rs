/// Times a block and reports it when it runs past a threshold in microseconds.
/// Without a threshold, `config::SLOW_PIPELINE_MICROS` applies.
/// Evaluates to the block's value; timing is skipped unless `config::LOG_PERFORMANCE` is set.
#[macro_export]
macro_rules! trace_time {
    ($name:expr, $block:block) => {
        $crate::trace_time!($name, $crate::config::SLOW_PIPELINE_MICROS, $block)
    };
    ($name:expr, $threshold_micros:expr, $block:block) => {{
        if $crate::config::LOG_PERFORMANCE {
            let start = $crate::utils::AppInstant::now();
            let result = $block;
            let micros: u128 = start.elapsed().as_micros();
            if micros > $threshold_micros {
                log::warn!(
                    "Slow run '{}': {:.3}ms over a {:.3}ms budget",
                    $name,
                    micros as f64 / 1000.0,
                    $threshold_micros as f64 / 1000.0
                );
            } else {
                log::trace!("'{}' finished in {}us", $name, micros);
            }
            result
        } else {
            $block
        }
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_trace_time_yields_block_value() {
        let doubled = crate::trace_time!("double", 1_000_000, { 21 * 2 });
        assert_eq!(doubled, 42);
    }

    #[test]
    fn test_trace_time_default_threshold() {
        let words = crate::trace_time!("split", { "a b c".split(' ').count() });
        assert_eq!(words, 3);
    }
}
