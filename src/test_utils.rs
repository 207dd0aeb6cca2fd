#[cfg(test)]
pub mod test_utils {
    use crate::config::{Settings, initialize_app_state};
    use crate::router::create_router;
    use crate::schemas::AppState;
    use axum::Router;
    use serde_json::{Value, json};
    use tracing::Level;
    use tracing_subscriber::FmtSubscriber;

    /// Create AppState for testing with a small cache
    pub fn setup_test_app_state() -> AppState {
        initialize_app_state(Settings {
            cache_capacity: 100,
            ..Settings::default()
        })
    }

    /// Initialize tracing for tests with output to STDERR.
    ///
    /// The log level is determined by the RUST_LOG environment variable,
    /// defaulting to WARN if not set.
    fn init_test_tracing() {
        let log_level = std::env::var("RUST_LOG")
            .ok()
            .and_then(|level| match level.to_uppercase().as_str() {
                "ERROR" => Some(Level::ERROR),
                "WARN" => Some(Level::WARN),
                "INFO" => Some(Level::INFO),
                "DEBUG" => Some(Level::DEBUG),
                "TRACE" => Some(Level::TRACE),
                _ => None,
            })
            .unwrap_or(Level::WARN);

        // Tests share one process, so only the first call installs the subscriber
        let _ = FmtSubscriber::builder()
            .with_max_level(log_level)
            .with_writer(std::io::stderr) // Output to stderr, which is captured by tests
            .try_init();
    }

    /// Create axum app for testing
    pub fn setup_test_app() -> Router {
        init_test_tracing();
        create_router(setup_test_app_state())
    }

    /// Request body of the dashboard as seen on 2024-02-15: rent on the 20th,
    /// a phone bill paid for this cycle, an overdue laptop installment and a
    /// broken row without a due day.
    pub fn dashboard_request() -> Value {
        json!({
            "today": "2024-02-15",
            "lookback_days": 10,
            "recurring_payments": [
                {
                    "payment_id": "p-rent",
                    "payment_type": "Rent",
                    "amount": "1200.00",
                    "due_day": 20,
                    "payment_status": "overdue",
                    "category_name": "Housing",
                    "category_color": "#EF4444"
                },
                {
                    "payment_id": "p-phone",
                    "payment_type": "Phone",
                    "amount": "45.00",
                    "due_day": 15,
                    "payment_status": "paid"
                },
                {
                    "payment_id": "p-broken",
                    "payment_type": "Internet",
                    "amount": "30.00",
                    "due_day": null
                }
            ],
            "installments": [
                {
                    "installment_id": "i-laptop",
                    "item_name": "Laptop",
                    "monthly_payment": "150.00",
                    "remaining_amount": "600.00",
                    "due_date": "2024-02-10",
                    "payment_status": "upcoming",
                    "completion_percentage": "50"
                }
            ]
        })
    }
}
