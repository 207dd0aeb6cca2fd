pub mod helpers;
pub mod scenario_malformed_records;
pub mod scenario_mixed_sources;
pub mod scenario_month_end;

pub use scenario_malformed_records::ScenarioMalformedRecords;
pub use scenario_mixed_sources::ScenarioMixedSources;
pub use scenario_month_end::ScenarioMonthEnd;

use chrono::NaiveDate;
use model::entities::prelude::{Installment, RecurringPayment};
use model::PaymentStatus;

use crate::error::Result as ComputeResult;
use crate::timeline::TimelineCalculator;

/// Type representing the expected result of a test scenario.
/// in the following schema (event id, date, expected status)
pub type AssertResult = Vec<(String, NaiveDate, PaymentStatus)>;

/// Prepared test scenario.
pub type TestScenario = (Vec<RecurringPayment>, Vec<Installment>, AssertResult);

/// Trait for building test scenarios.
pub trait TestScenarioBuilder {
    fn get_scenario(&self) -> TestScenario;
}

/// Routes pipeline logs through the test harness, so they only show for failing tests.
fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

pub fn run_and_assert_scenario(builder: &dyn TestScenarioBuilder, calculator: &TimelineCalculator) -> ComputeResult<()> {
    init_test_tracing();
    let (recurring_payments, installments, assert_result) = builder.get_scenario();

    let timeline = calculator.project(&recurring_payments, &installments)?;

    let actual: AssertResult = timeline
        .events
        .iter()
        .map(|event| (event.id().to_string(), event.date(), event.status()))
        .collect();

    println!("{:#?}", actual);
    assert_eq!(actual, assert_result);

    Ok(())
}
