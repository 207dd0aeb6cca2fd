pub mod error;
pub mod timeline;

use chrono::NaiveDate;
use timeline::{TimelineCalculator, window::TimelineWindow};

pub use error::{ComputeError, Result, ValidationError};
pub use timeline::Timeline;

/// Number of days shown by the dashboard timeline unless configured otherwise.
pub const DEFAULT_HORIZON_DAYS: u32 = 30;

/// Returns a pre-configured calculator for the dashboard: `today` through
/// `today + horizon_days`, extended `lookback_days` into the past.
///
/// `today` is always passed in; the calculator never reads the clock.
pub fn default_timeline(today: NaiveDate, horizon_days: u32, lookback_days: u32) -> Result<TimelineCalculator> {
    let window = TimelineWindow::next_days(today, horizon_days)?.with_lookback(lookback_days)?;
    Ok(TimelineCalculator::new(today, window))
}
