mod format_utils;
mod maths_utils;
mod perf;
mod time_utils;

pub use format_utils::{format_delta, format_pct, format_weight};
pub use time_utils::{AppInstant, TimeUtils, days_between, format_date, parse_calendar_date};

pub(crate) use maths_utils::{pct_of, signed_delta};
