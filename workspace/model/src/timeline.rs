use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::entities::payment_status::PaymentStatus;

/// Where a timeline event came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    Recurring,
    Installment,
}

impl EventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Recurring => "recurring",
            EventKind::Installment => "installment",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Progress of an installment plan, copied from the source record.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InstallmentProgress {
    pub remaining_amount: Option<Decimal>,
    pub completion_percentage: Option<Decimal>,
}

/// One dated, render-ready entry of the payment timeline.
///
/// Events are recomputed on every call and never persisted. `stored_status`
/// keeps what the source record claimed; `status` is what the classifier
/// decided for the event's date.
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineEvent {
    id: String,
    source_id: String,
    kind: EventKind,
    title: String,
    amount: Decimal,
    category: Option<String>,
    color: String,
    date: NaiveDate,
    stored_status: PaymentStatus,
    status: PaymentStatus,
    progress: Option<InstallmentProgress>,
}

impl TimelineEvent {
    /// Creates an event. The status starts out as the stored status until the
    /// event is classified.
    pub fn new(
        id: String,
        source_id: String,
        kind: EventKind,
        title: String,
        amount: Decimal,
        color: String,
        date: NaiveDate,
        stored_status: PaymentStatus,
    ) -> Self {
        Self {
            id,
            source_id,
            kind,
            title,
            amount,
            category: None,
            color,
            date,
            stored_status,
            status: stored_status,
            progress: None,
        }
    }

    pub fn with_category(mut self, category: Option<String>) -> Self {
        self.category = category;
        self
    }

    pub fn with_progress(mut self, progress: InstallmentProgress) -> Self {
        self.progress = Some(progress);
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn source_id(&self) -> &str {
        &self.source_id
    }

    pub fn kind(&self) -> EventKind {
        self.kind
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn stored_status(&self) -> PaymentStatus {
        self.stored_status
    }

    pub fn status(&self) -> PaymentStatus {
        self.status
    }

    pub fn set_status(&mut self, status: PaymentStatus) {
        self.status = status;
    }

    /// Installment progress; `None` for recurring events.
    pub fn progress(&self) -> Option<&InstallmentProgress> {
        self.progress.as_ref()
    }

    pub fn is_paid(&self) -> bool {
        self.status.is_paid()
    }
}
