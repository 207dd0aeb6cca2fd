use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Inclusive date range.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct DateRange {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl DateRange {
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self { start_date, end_date }
    }
}

/// One render-ready entry of the timeline.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct TimelineEventDto {
    /// Unique per occurrence, e.g. `recurring-p-1-2024-02-20`
    pub id: String,
    /// Id of the record the event was projected from
    pub source_id: String,
    /// `recurring` or `installment`
    pub kind: String,
    pub title: String,
    pub amount: Decimal,
    pub category: Option<String>,
    /// Hex color, e.g. `#6B7280`
    pub color: String,
    pub date: NaiveDate,
    /// Computed status: `overdue`, `due_today`, `upcoming` or `paid`
    pub status: String,
    /// Status the source record carried
    pub stored_status: String,
    pub remaining_amount: Option<Decimal>,
    pub completion_percentage: Option<Decimal>,
}

/// Dashboard header totals.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Default)]
pub struct TimelineSummaryDto {
    pub total_events: usize,
    pub overdue: usize,
    pub due_today: usize,
    pub upcoming: usize,
    pub paid: usize,
    pub total_amount: Decimal,
    pub outstanding_amount: Decimal,
    pub overdue_amount: Decimal,
    pub next_due: Option<NaiveDate>,
}

/// A record left out of the timeline and the reason.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct RecordDiagnosticDto {
    pub kind: String,
    /// Position of the record in its request list
    pub index: usize,
    pub record_id: Option<String>,
    pub error: String,
}

/// The projected timeline.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct TimelineResponse {
    pub today: NaiveDate,
    pub window: DateRange,
    pub events: Vec<TimelineEventDto>,
    pub summary: TimelineSummaryDto,
    pub diagnostics: Vec<RecordDiagnosticDto>,
}

/// Events of one calendar day.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct TimelineDayDto {
    pub date: NaiveDate,
    pub total_amount: Decimal,
    pub events: Vec<TimelineEventDto>,
}
