use chrono::NaiveDate;
use model::entities::{installment, recurring_payment};
use model::timeline::{EventKind, InstallmentProgress, TimelineEvent};
use model::PaymentStatus;
use rust_decimal::Decimal;
use tracing::{debug, instrument, trace, warn};

use super::recurrence::validate_due_day;
use crate::error::ValidationError;

/// Color used for recurring payments whose category carries no color.
pub const DEFAULT_RECURRING_COLOR: &str = "#6B7280";

/// Color used for every installment event.
pub const INSTALLMENT_COLOR: &str = "#8B5CF6";

/// When a prototype produces events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Schedule {
    /// Every month on this day (already validated to 1..=31).
    MonthlyOnDay(u32),
    /// Exactly once, on this date.
    Once(NaiveDate),
}

/// A source record reduced to the fields the timeline needs, before it is
/// placed on concrete dates.
#[derive(Debug, Clone, PartialEq)]
pub struct PrototypeEvent {
    pub source_id: String,
    pub kind: EventKind,
    pub title: String,
    pub amount: Decimal,
    pub category: Option<String>,
    pub color: String,
    pub stored_status: PaymentStatus,
    pub schedule: Schedule,
    pub progress: Option<InstallmentProgress>,
}

impl PrototypeEvent {
    /// Deterministic event id. Recurring occurrences include the ISO date so
    /// that every month of the same payment gets its own id.
    pub fn event_id(&self, date: NaiveDate) -> String {
        match self.kind {
            EventKind::Recurring => {
                format!("recurring-{}-{}", self.source_id, date.format("%Y-%m-%d"))
            }
            EventKind::Installment => format!("installment-{}", self.source_id),
        }
    }

    /// Places the prototype on a concrete date.
    pub fn to_event(&self, date: NaiveDate, stored_status: PaymentStatus) -> TimelineEvent {
        let event = TimelineEvent::new(
            self.event_id(date),
            self.source_id.clone(),
            self.kind,
            self.title.clone(),
            self.amount,
            self.color.clone(),
            date,
            stored_status,
        )
        .with_category(self.category.clone());

        match self.progress {
            Some(progress) => event.with_progress(progress),
            None => event,
        }
    }
}

/// Why a record was left out of the timeline.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordDiagnostic {
    pub kind: EventKind,
    /// Position of the record in its input list.
    pub index: usize,
    pub record_id: Option<String>,
    pub error: ValidationError,
}

/// Output of the normalizer: prototypes in input order plus skipped records.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Normalized {
    pub prototypes: Vec<PrototypeEvent>,
    pub diagnostics: Vec<RecordDiagnostic>,
}

/// A record type that can be normalized into a prototype event.
pub trait EventSource {
    fn kind(&self) -> EventKind;

    /// The record id, if storage supplied one.
    fn record_id(&self) -> Option<&str>;

    /// Checks required fields and builds the prototype.
    fn to_prototype(&self) -> Result<PrototypeEvent, ValidationError>;
}

fn required<T: Clone>(value: &Option<T>, kind: EventKind, field: &'static str) -> Result<T, ValidationError> {
    value
        .clone()
        .ok_or(ValidationError::MissingField { kind, field })
}

fn required_text(value: &Option<String>, kind: EventKind, field: &'static str) -> Result<String, ValidationError> {
    let text = required(value, kind, field)?;
    if text.trim().is_empty() {
        return Err(ValidationError::EmptyField { kind, field });
    }
    Ok(text)
}

fn non_negative(value: Decimal, kind: EventKind, id: &str, field: &'static str) -> Result<Decimal, ValidationError> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(ValidationError::NegativeAmount {
            kind,
            id: id.to_string(),
            field,
            value,
        });
    }
    Ok(value)
}

/// Blank strings from storage count as absent metadata.
fn optional_text(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(str::to_string)
}

impl EventSource for recurring_payment::Model {
    fn kind(&self) -> EventKind {
        EventKind::Recurring
    }

    fn record_id(&self) -> Option<&str> {
        self.payment_id.as_deref()
    }

    fn to_prototype(&self) -> Result<PrototypeEvent, ValidationError> {
        let kind = self.kind();
        let source_id = required_text(&self.payment_id, kind, "payment_id")?;
        let title = required_text(&self.payment_type, kind, "payment_type")?;
        let amount = non_negative(required(&self.amount, kind, "amount")?, kind, &source_id, "amount")?;
        let due_day = required(&self.due_day, kind, "due_day")?;
        let due_day = validate_due_day(&source_id, i64::from(due_day))?;

        Ok(PrototypeEvent {
            source_id,
            kind,
            title,
            amount,
            category: optional_text(&self.category_name),
            color: optional_text(&self.category_color)
                .unwrap_or_else(|| DEFAULT_RECURRING_COLOR.to_string()),
            stored_status: self.payment_status.unwrap_or_default(),
            schedule: Schedule::MonthlyOnDay(due_day),
            progress: None,
        })
    }
}

impl EventSource for installment::Model {
    fn kind(&self) -> EventKind {
        EventKind::Installment
    }

    fn record_id(&self) -> Option<&str> {
        self.installment_id.as_deref()
    }

    fn to_prototype(&self) -> Result<PrototypeEvent, ValidationError> {
        let kind = self.kind();
        let source_id = required_text(&self.installment_id, kind, "installment_id")?;
        let title = required_text(&self.item_name, kind, "item_name")?;
        let amount = non_negative(
            required(&self.monthly_payment, kind, "monthly_payment")?,
            kind,
            &source_id,
            "monthly_payment",
        )?;
        let due_date = required(&self.due_date, kind, "due_date")?;
        let remaining_amount = self
            .remaining_amount
            .map(|value| non_negative(value, kind, &source_id, "remaining_amount"))
            .transpose()?;

        Ok(PrototypeEvent {
            source_id,
            kind,
            title,
            amount,
            category: None,
            color: INSTALLMENT_COLOR.to_string(),
            stored_status: self.payment_status.unwrap_or_default(),
            schedule: Schedule::Once(due_date),
            progress: Some(InstallmentProgress {
                remaining_amount,
                completion_percentage: self.completion_percentage,
            }),
        })
    }
}

fn normalize_records<R: EventSource>(records: &[R], normalized: &mut Normalized) {
    for (index, record) in records.iter().enumerate() {
        match record.to_prototype() {
            Ok(prototype) => {
                trace!(
                    "Normalized {} record {}: {:?}",
                    prototype.kind, prototype.source_id, prototype.schedule
                );
                normalized.prototypes.push(prototype);
            }
            Err(error) => {
                warn!(
                    kind = %record.kind(),
                    index,
                    record_id = ?record.record_id(),
                    %error,
                    "Skipping malformed record"
                );
                normalized.diagnostics.push(RecordDiagnostic {
                    kind: record.kind(),
                    index,
                    record_id: record.record_id().map(str::to_string),
                    error,
                });
            }
        }
    }
}

/// Maps every recurring payment and every installment to one prototype event.
///
/// Recurring payments come first, then installments, each in input order.
/// Malformed records are skipped and reported instead of failing the batch.
#[instrument(skip_all, fields(recurring = recurring_payments.len(), installments = installments.len()))]
pub fn normalize(
    recurring_payments: &[recurring_payment::Model],
    installments: &[installment::Model],
) -> Normalized {
    let mut normalized = Normalized::default();
    normalize_records(recurring_payments, &mut normalized);
    normalize_records(installments, &mut normalized);

    debug!(
        "Normalized {} records, skipped {}",
        normalized.prototypes.len(),
        normalized.diagnostics.len()
    );
    normalized
}
