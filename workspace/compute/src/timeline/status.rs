use std::cmp::Ordering;

use chrono::NaiveDate;
use model::timeline::TimelineEvent;
use model::PaymentStatus;
use tracing::trace;

/// Date-only status of a payment due on `date`, seen from `today`.
pub fn status_for_date(date: NaiveDate, today: NaiveDate) -> PaymentStatus {
    match date.cmp(&today) {
        Ordering::Less => PaymentStatus::Overdue,
        Ordering::Equal => PaymentStatus::DueToday,
        Ordering::Greater => PaymentStatus::Upcoming,
    }
}

/// Recomputes the status of an event.
///
/// A stored `paid` always wins, so a paid event is never shown as overdue.
/// Any other stored status is ignored in favour of the date comparison.
pub fn classify(event: &TimelineEvent, today: NaiveDate) -> PaymentStatus {
    if event.stored_status().is_paid() {
        return PaymentStatus::Paid;
    }
    status_for_date(event.date(), today)
}

/// Classifies every event in place.
pub fn classify_all(events: &mut [TimelineEvent], today: NaiveDate) {
    for event in events.iter_mut() {
        let status = classify(event, today);
        if status != event.stored_status() {
            trace!(
                "Event {} reclassified from {} to {}",
                event.id(),
                event.stored_status(),
                status
            );
        }
        event.set_status(status);
    }
}
