use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::payment_status::PaymentStatus;

/// A payment that repeats every month on a fixed day (rent, subscriptions).
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Model {
    /// Opaque identifier, unique per user.
    pub payment_id: Option<String>,
    /// Display label, e.g. "Rent".
    pub payment_type: Option<String>,
    /// The value of each occurrence. Never negative.
    pub amount: Option<Decimal>,
    /// Calendar day of month the payment recurs on, 1 to 31.
    pub due_day: Option<i32>,
    /// Last status written to storage. May be stale.
    pub payment_status: Option<PaymentStatus>,
    pub category_name: Option<String>,
    /// Hex color of the category, e.g. `#EF4444`.
    pub category_color: Option<String>,
}

impl Model {
    /// Creates a fully populated record with no category.
    pub fn new(payment_id: &str, payment_type: &str, amount: Decimal, due_day: i32) -> Self {
        Self {
            payment_id: Some(payment_id.to_string()),
            payment_type: Some(payment_type.to_string()),
            amount: Some(amount),
            due_day: Some(due_day),
            payment_status: Some(PaymentStatus::Upcoming),
            category_name: None,
            category_color: None,
        }
    }

    pub fn with_status(mut self, status: PaymentStatus) -> Self {
        self.payment_status = Some(status);
        self
    }

    pub fn with_category(mut self, name: &str, color: &str) -> Self {
        self.category_name = Some(name.to_string());
        self.category_color = Some(color.to_string());
        self
    }
}
