use chrono::NaiveDate;
use model::timeline::TimelineEvent;
use model::PaymentStatus;
use rust_decimal::Decimal;

use crate::error::{ComputeError, Result};

/// Totals shown above the timeline.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TimelineSummary {
    pub total_events: usize,
    pub overdue: usize,
    pub due_today: usize,
    pub upcoming: usize,
    pub paid: usize,
    /// Sum of every event amount in the list.
    pub total_amount: Decimal,
    /// Sum of the amounts not yet paid.
    pub outstanding_amount: Decimal,
    pub overdue_amount: Decimal,
    /// Earliest unpaid payment dated today or later.
    pub next_due: Option<NaiveDate>,
}

/// Adds `amount` to a running total. Fails instead of panicking when the
/// sum leaves the range of `Decimal`.
pub fn add_amount(total: Decimal, amount: Decimal, total_name: &'static str) -> Result<Decimal> {
    total
        .checked_add(amount)
        .ok_or(ComputeError::AmountOverflow { total: total_name })
}

/// Summarizes classified events.
pub fn summarize(events: &[TimelineEvent], today: NaiveDate) -> Result<TimelineSummary> {
    let mut summary = TimelineSummary {
        total_events: events.len(),
        ..Default::default()
    };

    for event in events {
        summary.total_amount = add_amount(summary.total_amount, event.amount(), "total_amount")?;
        match event.status() {
            PaymentStatus::Paid => summary.paid += 1,
            PaymentStatus::Overdue => {
                summary.overdue += 1;
                summary.overdue_amount = add_amount(summary.overdue_amount, event.amount(), "overdue_amount")?;
            }
            PaymentStatus::DueToday => summary.due_today += 1,
            PaymentStatus::Upcoming => summary.upcoming += 1,
        }

        if !event.is_paid() {
            summary.outstanding_amount =
                add_amount(summary.outstanding_amount, event.amount(), "outstanding_amount")?;
            if event.date() >= today {
                summary.next_due = Some(match summary.next_due {
                    Some(current) => current.min(event.date()),
                    None => event.date(),
                });
            }
        }
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use model::timeline::EventKind;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn classified(id: &str, date: NaiveDate, amount: i64, status: PaymentStatus) -> TimelineEvent {
        classified_amount(id, date, Decimal::new(amount, 0), status)
    }

    fn classified_amount(id: &str, date: NaiveDate, amount: Decimal, status: PaymentStatus) -> TimelineEvent {
        let mut event = TimelineEvent::new(
            id.to_string(),
            id.to_string(),
            EventKind::Recurring,
            id.to_string(),
            amount,
            "#6B7280".to_string(),
            date,
            status,
        );
        event.set_status(status);
        event
    }

    #[test]
    fn test_summarize_counts_and_totals() {
        let today = date(2024, 2, 15);
        let events = vec![
            classified("a", date(2024, 2, 10), 100, PaymentStatus::Overdue),
            classified("b", date(2024, 2, 12), 50, PaymentStatus::Paid),
            classified("c", today, 30, PaymentStatus::DueToday),
            classified("d", date(2024, 2, 20), 20, PaymentStatus::Upcoming),
        ];

        let summary = summarize(&events, today).unwrap();

        assert_eq!(summary.total_events, 4);
        assert_eq!(summary.overdue, 1);
        assert_eq!(summary.paid, 1);
        assert_eq!(summary.due_today, 1);
        assert_eq!(summary.upcoming, 1);
        assert_eq!(summary.total_amount, Decimal::new(200, 0));
        assert_eq!(summary.outstanding_amount, Decimal::new(150, 0));
        assert_eq!(summary.overdue_amount, Decimal::new(100, 0));
        assert_eq!(summary.next_due, Some(today));
    }

    #[test]
    fn test_next_due_skips_paid_events() {
        let today = date(2024, 2, 15);
        let events = vec![
            classified("paid", date(2024, 2, 16), 10, PaymentStatus::Paid),
            classified("later", date(2024, 3, 1), 10, PaymentStatus::Upcoming),
        ];

        assert_eq!(summarize(&events, today).unwrap().next_due, Some(date(2024, 3, 1)));
    }

    #[test]
    fn test_summarize_empty() {
        let summary = summarize(&[], date(2024, 2, 15)).unwrap();
        assert_eq!(summary, TimelineSummary::default());
    }

    #[test]
    fn test_summarize_amount_overflow_is_an_error() {
        let today = date(2024, 2, 15);
        let events = vec![
            classified_amount("a", date(2024, 2, 20), Decimal::MAX, PaymentStatus::Upcoming),
            classified_amount("b", date(2024, 2, 21), Decimal::MAX, PaymentStatus::Upcoming),
        ];

        let result = summarize(&events, today);

        assert!(matches!(
            result,
            Err(ComputeError::AmountOverflow { total: "total_amount" })
        ));
    }

    #[test]
    fn test_summarize_single_max_amount_fits() {
        let today = date(2024, 2, 15);
        let events = vec![classified_amount("a", date(2024, 2, 10), Decimal::MAX, PaymentStatus::Overdue)];

        let summary = summarize(&events, today).unwrap();
        assert_eq!(summary.overdue_amount, Decimal::MAX);
    }
}
