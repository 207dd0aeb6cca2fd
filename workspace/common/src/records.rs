use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A recurring payment row as stored by the data service.
///
/// Every column may be null. Rows with missing required values are skipped
/// by the timeline and reported back as diagnostics.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Default)]
pub struct RecurringPaymentDto {
    pub payment_id: Option<String>,
    /// Display label, e.g. "Rent"
    pub payment_type: Option<String>,
    pub amount: Option<Decimal>,
    /// Day of month, 1 to 31
    pub due_day: Option<i32>,
    /// One of `overdue`, `due_today`, `upcoming`, `paid`
    pub payment_status: Option<String>,
    pub category_name: Option<String>,
    pub category_color: Option<String>,
}

/// An installment row as stored by the data service.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Default)]
pub struct InstallmentDto {
    pub installment_id: Option<String>,
    pub item_name: Option<String>,
    pub monthly_payment: Option<Decimal>,
    pub remaining_amount: Option<Decimal>,
    /// ISO date (YYYY-MM-DD)
    pub due_date: Option<NaiveDate>,
    pub payment_status: Option<String>,
    pub completion_percentage: Option<Decimal>,
}

/// Both record lists, as read by `budgetai project` from a JSON file.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Default)]
pub struct TimelineRecords {
    #[serde(default)]
    pub recurring_payments: Vec<RecurringPaymentDto>,
    #[serde(default)]
    pub installments: Vec<InstallmentDto>,
}
