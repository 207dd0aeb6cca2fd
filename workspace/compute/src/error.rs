use chrono::NaiveDate;
use model::timeline::EventKind;
use rust_decimal::Decimal;
use thiserror::Error;
use tracing::warn;

/// A record that cannot be turned into timeline events.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required column is null in storage
    #[error("{kind} record is missing required field `{field}`")]
    MissingField { kind: EventKind, field: &'static str },

    /// A required text column is present but blank
    #[error("{kind} record has an empty `{field}`")]
    EmptyField { kind: EventKind, field: &'static str },

    /// A monetary value below zero
    #[error("{kind} {id}: `{field}` must not be negative, got {value}")]
    NegativeAmount {
        kind: EventKind,
        id: String,
        field: &'static str,
        value: Decimal,
    },

    /// A recurrence day outside 1..=31
    #[error("recurring payment {id}: due day {due_day} is outside 1..=31")]
    InvalidDueDay { id: String, due_day: i64 },
}

/// Error types for the compute module
#[derive(Error, Debug)]
pub enum ComputeError {
    /// Error from record validation
    #[error("Validation error: {0}")]
    Validation(ValidationError),

    /// A window whose start lies after its end
    #[error("Invalid window: start {start} is after end {end}")]
    InvalidWindow { start: NaiveDate, end: NaiveDate },

    /// Error from date operations
    #[error("Date error: {0}")]
    Date(String),

    /// A sum of amounts that does not fit into a decimal
    #[error("Amount overflow while adding up {total}")]
    AmountOverflow { total: &'static str },
}

impl From<ValidationError> for ComputeError {
    fn from(error: ValidationError) -> Self {
        warn!(%error, "Validation error");
        ComputeError::Validation(error)
    }
}

/// Type alias for Result with ComputeError
pub type Result<T> = std::result::Result<T, ComputeError>;
