use chrono::{Datelike, NaiveDate};
use model::timeline::TimelineEvent;
use model::PaymentStatus;
use tracing::{trace, warn};

use super::normalize::{PrototypeEvent, Schedule};
use crate::error::{ComputeError, Result, ValidationError};

/// Upper bound on occurrences produced for one recurring payment.
pub const MAX_OCCURRENCES: usize = 1024;

/// Returns the number of days in the given month, or `None` past the end of
/// the supported calendar.
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    // Create a date for the first day of the next month
    let next_month_year = year + (month / 12) as i32;
    let next_month = (month % 12) + 1;

    // Go back one day to get the last day of the current month
    NaiveDate::from_ymd_opt(next_month_year, next_month, 1)?
        .pred_opt()
        .map(|last_day| last_day.day())
}

/// Checks that a due day lies in 1..=31.
pub fn validate_due_day(id: &str, due_day: i64) -> std::result::Result<u32, ValidationError> {
    match u32::try_from(due_day) {
        Ok(day @ 1..=31) => Ok(day),
        _ => Err(ValidationError::InvalidDueDay {
            id: id.to_string(),
            due_day,
        }),
    }
}

/// The date a monthly rule falls on in the given month.
///
/// A due day past the end of the month is clamped to the month's last day:
/// day 31 in April is April 30 and day 30 in February 2024 is February 29.
/// The clamp never carries into the following month.
pub fn occurrence_in_month(year: i32, month: u32, due_day: u32) -> Option<NaiveDate> {
    let day = due_day.min(days_in_month(year, month)?);
    NaiveDate::from_ymd_opt(year, month, day)
}

fn next_month(year: i32, month: u32) -> (i32, u32) {
    if month == 12 { (year + 1, 1) } else { (year, month + 1) }
}

/// Projects a recurring prototype onto every monthly occurrence between
/// `today` and `horizon_end`, both inclusive.
///
/// Starts in today's month and skips a candidate that already lies before
/// today. The stored status of the record describes the cycle of today's
/// month, so only an occurrence in today's month inherits it. Once this
/// month's due day has passed, every projected occurrence starts out as
/// upcoming.
pub fn expand(
    prototype: &PrototypeEvent,
    due_day: u32,
    today: NaiveDate,
    horizon_end: NaiveDate,
) -> Result<Vec<TimelineEvent>> {
    let due_day = validate_due_day(&prototype.source_id, i64::from(due_day))?;

    let mut events = Vec::new();
    let (mut year, mut month) = (today.year(), today.month());

    loop {
        let candidate = occurrence_in_month(year, month, due_day).ok_or_else(|| {
            ComputeError::Date(format!(
                "No occurrence of day {} in {}-{:02} for payment {}",
                due_day, year, month, prototype.source_id
            ))
        })?;

        if candidate > horizon_end {
            break;
        }

        if candidate >= today {
            let stored_status = if (year, month) == (today.year(), today.month()) {
                prototype.stored_status
            } else {
                PaymentStatus::Upcoming
            };
            trace!(
                "Projected occurrence of {} on {} (stored status {})",
                prototype.source_id, candidate, stored_status
            );
            events.push(prototype.to_event(candidate, stored_status));

            if events.len() >= MAX_OCCURRENCES {
                warn!(
                    "Stopped expanding payment {} after {} occurrences",
                    prototype.source_id, MAX_OCCURRENCES
                );
                break;
            }
        }

        (year, month) = next_month(year, month);
    }

    Ok(events)
}

/// Turns a prototype of either schedule into its events.
pub fn project(prototype: &PrototypeEvent, today: NaiveDate, horizon_end: NaiveDate) -> Result<Vec<TimelineEvent>> {
    match prototype.schedule {
        Schedule::MonthlyOnDay(due_day) => expand(prototype, due_day, today, horizon_end),
        Schedule::Once(date) => Ok(vec![prototype.to_event(date, prototype.stored_status)]),
    }
}
