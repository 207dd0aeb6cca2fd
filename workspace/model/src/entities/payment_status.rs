use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Payment status as stored on a record, and as recomputed for a timeline event.
///
/// The stored value may be stale: it is only refreshed when the record is
/// written, not when the calendar day changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Overdue,
    DueToday,
    #[default]
    Upcoming,
    Paid,
}

impl PaymentStatus {
    /// All variants in display order.
    pub const ALL: [PaymentStatus; 4] = [
        PaymentStatus::Overdue,
        PaymentStatus::DueToday,
        PaymentStatus::Upcoming,
        PaymentStatus::Paid,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Overdue => "overdue",
            PaymentStatus::DueToday => "due_today",
            PaymentStatus::Upcoming => "upcoming",
            PaymentStatus::Paid => "paid",
        }
    }

    pub fn is_paid(&self) -> bool {
        matches!(self, PaymentStatus::Paid)
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "overdue" => Ok(PaymentStatus::Overdue),
            "due_today" => Ok(PaymentStatus::DueToday),
            "upcoming" => Ok(PaymentStatus::Upcoming),
            "paid" => Ok(PaymentStatus::Paid),
            _ => Err(format!("Invalid payment status: {}", s)),
        }
    }
}
