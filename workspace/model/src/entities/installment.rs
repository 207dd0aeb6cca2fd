use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::payment_status::PaymentStatus;

/// A purchase paid off in monthly installments.
///
/// Unlike a recurring payment an installment carries one concrete due date.
/// The data store supplies the next due date after each payment cycle and
/// decrements `remaining_amount` when a payment is recorded.
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Model {
    pub installment_id: Option<String>,
    pub item_name: Option<String>,
    /// Amount due per period. Never negative.
    pub monthly_payment: Option<Decimal>,
    /// Amount still owed. Never negative, never increases.
    pub remaining_amount: Option<Decimal>,
    pub due_date: Option<NaiveDate>,
    pub payment_status: Option<PaymentStatus>,
    /// Share of the total already paid, 0 to 100.
    pub completion_percentage: Option<Decimal>,
}

impl Model {
    /// Creates a fully populated record.
    pub fn new(installment_id: &str, item_name: &str, monthly_payment: Decimal, due_date: NaiveDate) -> Self {
        Self {
            installment_id: Some(installment_id.to_string()),
            item_name: Some(item_name.to_string()),
            monthly_payment: Some(monthly_payment),
            remaining_amount: None,
            due_date: Some(due_date),
            payment_status: Some(PaymentStatus::Upcoming),
            completion_percentage: None,
        }
    }

    pub fn with_status(mut self, status: PaymentStatus) -> Self {
        self.payment_status = Some(status);
        self
    }

    pub fn with_progress(mut self, remaining_amount: Decimal, completion_percentage: Decimal) -> Self {
        self.remaining_amount = Some(remaining_amount);
        self.completion_percentage = Some(completion_percentage);
        self
    }
}
