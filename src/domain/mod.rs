// Domain types and value objects
mod candle;
mod trend;
mod weigh_in;

// Re-export commonly used types to the world
pub use candle::{CandleType, CandlestickPoint};
pub use trend::{TrendDirection, TrendSummary};
pub use weigh_in::WeighInRecord;
