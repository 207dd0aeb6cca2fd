//! Records owned by the external data store.
//!
//! Rows come from a hosted Postgres service where any column may be null, so
//! fields the timeline requires are still `Option` here. The compute crate's
//! normalizer is the one place that rejects records with absent fields.

pub mod installment;
pub mod payment_status;
pub mod recurring_payment;

pub mod prelude {
    //! A prelude module for easy importing of all records.
    pub use super::installment::Model as Installment;
    pub use super::payment_status::PaymentStatus;
    pub use super::recurring_payment::Model as RecurringPayment;
}
