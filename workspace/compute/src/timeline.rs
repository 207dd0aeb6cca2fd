//! Payment timeline projection.
//!
//! The pipeline runs strictly left to right and keeps no state between calls:
//! records are normalized into prototypes, recurring prototypes are expanded
//! onto monthly dates, the result is cut to the window and sorted, and every
//! event is classified against `today`.

use chrono::{NaiveDate, NaiveDateTime};
use model::entities::{installment, recurring_payment};
use model::timeline::TimelineEvent;
use tracing::{debug, info, instrument};

use crate::error::Result;

pub mod calendar;
pub mod normalize;
pub mod recurrence;
pub mod status;
pub mod summary;
pub mod window;

#[cfg(test)]
pub mod testing;

use normalize::{RecordDiagnostic, normalize};
use window::{TimelineWindow, filter_and_sort};

/// A classified, windowed timeline together with the records that were skipped.
#[derive(Debug, Clone, PartialEq)]
pub struct Timeline {
    pub today: NaiveDate,
    pub window: TimelineWindow,
    pub events: Vec<TimelineEvent>,
    pub diagnostics: Vec<RecordDiagnostic>,
}

/// Projects recurring payments and installments onto a timeline as seen from
/// a fixed `today`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelineCalculator {
    /// The date used as "today" for expansion and classification.
    today: NaiveDate,
    /// The days the output is restricted to. Also the expansion horizon.
    window: TimelineWindow,
}

impl TimelineCalculator {
    pub fn new(today: NaiveDate, window: TimelineWindow) -> Self {
        Self { today, window }
    }

    /// Uses the calendar date of `now`; the time of day is ignored.
    pub fn from_now(now: NaiveDateTime, window: TimelineWindow) -> Self {
        Self::new(now.date(), window)
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn window(&self) -> TimelineWindow {
        self.window
    }

    /// Runs the whole pipeline.
    ///
    /// Malformed records never fail the batch: they are skipped and listed in
    /// [`Timeline::diagnostics`]. Only calendar overflow is returned as an error.
    #[instrument(skip(self, recurring_payments, installments), fields(today = %self.today, start = %self.window.start(), end = %self.window.end()))]
    pub fn project(
        &self,
        recurring_payments: &[recurring_payment::Model],
        installments: &[installment::Model],
    ) -> Result<Timeline> {
        info!(
            "Projecting timeline for {} recurring payments and {} installments",
            recurring_payments.len(),
            installments.len()
        );

        let normalized = normalize(recurring_payments, installments);

        // due days were validated by the normalizer, so expansion only fails on calendar overflow
        let mut events = Vec::new();
        for prototype in &normalized.prototypes {
            let projected = recurrence::project(prototype, self.today, self.window.end())?;
            debug!("Prototype {} produced {} events", prototype.source_id, projected.len());
            events.extend(projected);
        }

        let mut events = filter_and_sort(events, &self.window);
        status::classify_all(&mut events, self.today);

        info!(
            "Timeline projected with {} events and {} skipped records",
            events.len(),
            normalized.diagnostics.len()
        );

        Ok(Timeline {
            today: self.today,
            window: self.window,
            events,
            diagnostics: normalized.diagnostics,
        })
    }
}
