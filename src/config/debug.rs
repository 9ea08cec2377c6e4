//! Debugging feature flags.

/// Activate trace_time macro (for cool scope-level timing)
pub const LOG_PERFORMANCE: bool = cfg!(debug_assertions);

/// A pipeline run slower than this (in microseconds) gets reported by trace_time.
pub const SLOW_PIPELINE_MICROS: u128 = 2_000;
