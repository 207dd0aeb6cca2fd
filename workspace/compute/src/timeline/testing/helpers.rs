use chrono::NaiveDate;
use model::entities::prelude::{Installment, PaymentStatus, RecurringPayment};
use rust_decimal::Decimal;

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub fn new_recurring_payment(id: &str, title: &str, amount: i64, due_day: i32, status: PaymentStatus) -> RecurringPayment {
    RecurringPayment::new(id, title, Decimal::new(amount * 100, 2), due_day).with_status(status)
}

pub fn new_installment(id: &str, title: &str, amount: i64, due_date: NaiveDate, status: PaymentStatus) -> Installment {
    Installment::new(id, title, Decimal::new(amount * 100, 2), due_date).with_status(status)
}

pub fn expected(id: &str, date: NaiveDate, status: PaymentStatus) -> (String, NaiveDate, PaymentStatus) {
    (id.to_string(), date, status)
}
