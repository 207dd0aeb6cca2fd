use chrono::{Days, Months, NaiveDate};
use model::timeline::TimelineEvent;
use tracing::debug;

use crate::error::{ComputeError, Result};

/// An inclusive range of calendar days the timeline is restricted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimelineWindow {
    start: NaiveDate,
    end: NaiveDate,
}

impl TimelineWindow {
    /// Creates a window. Fails when `start` lies after `end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if start > end {
            return Err(ComputeError::InvalidWindow { start, end });
        }
        Ok(Self { start, end })
    }

    /// `today` through `today + days`, e.g. "next 30 days".
    pub fn next_days(today: NaiveDate, days: u32) -> Result<Self> {
        let end = today
            .checked_add_days(Days::new(u64::from(days)))
            .ok_or_else(|| ComputeError::Date(format!("{} + {} days is out of range", today, days)))?;
        Self::new(today, end)
    }

    /// `today` through the same day `months` later, e.g. "next 3 months".
    pub fn next_months(today: NaiveDate, months: u32) -> Result<Self> {
        let end = today
            .checked_add_months(Months::new(months))
            .ok_or_else(|| ComputeError::Date(format!("{} + {} months is out of range", today, months)))?;
        Self::new(today, end)
    }

    /// Moves the start `days` earlier so that recently missed payments stay visible.
    pub fn with_lookback(self, days: u32) -> Result<Self> {
        let start = self
            .start
            .checked_sub_days(Days::new(u64::from(days)))
            .ok_or_else(|| ComputeError::Date(format!("{} - {} days is out of range", self.start, days)))?;
        Self::new(start, self.end)
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Keeps the events dated inside the window and orders them by date.
///
/// The sort is stable: events on the same day keep the order in which they
/// were produced.
pub fn filter_and_sort(events: Vec<TimelineEvent>, window: &TimelineWindow) -> Vec<TimelineEvent> {
    let total = events.len();
    let mut kept: Vec<TimelineEvent> = events
        .into_iter()
        .filter(|event| window.contains(event.date()))
        .collect();
    kept.sort_by_key(|event| event.date());

    debug!(
        "Kept {} of {} events between {} and {}",
        kept.len(),
        total,
        window.start,
        window.end
    );
    kept
}
