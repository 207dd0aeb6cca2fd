use std::collections::BTreeMap;

use chrono::NaiveDate;
use model::timeline::TimelineEvent;
use rust_decimal::Decimal;

use super::summary::add_amount;
use crate::error::Result;

/// All events due on one calendar day.
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineDay {
    pub date: NaiveDate,
    pub events: Vec<TimelineEvent>,
    pub total_amount: Decimal,
}

/// Groups events per day, ascending by date. Events keep their relative
/// order within a day.
pub fn group_by_date(events: &[TimelineEvent]) -> Result<Vec<TimelineDay>> {
    let mut days: BTreeMap<NaiveDate, Vec<TimelineEvent>> = BTreeMap::new();
    for event in events {
        days.entry(event.date()).or_default().push(event.clone());
    }

    days.into_iter()
        .map(|(date, events)| {
            let total_amount = events
                .iter()
                .try_fold(Decimal::ZERO, |total, e| add_amount(total, e.amount(), "day total"))?;
            Ok(TimelineDay {
                date,
                events,
                total_amount,
            })
        })
        .collect()
}
