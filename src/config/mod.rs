//! Configuration module for the weigh-in application.

// Can all be private now because we have a public re-export.
mod analysis;
mod debug;

// Can't be private because we don't re-export it
pub mod plot;

// Re-export commonly used items
pub use analysis::{DATE_FORMAT, TREND, TrendConfig};
pub use debug::{LOG_PERFORMANCE, SLOW_PIPELINE_MICROS};
pub use plot::PLOT_CONFIG;
