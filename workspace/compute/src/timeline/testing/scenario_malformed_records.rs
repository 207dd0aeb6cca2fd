use model::PaymentStatus::{Overdue, Upcoming};

use super::helpers::{date, expected, new_installment, new_recurring_payment};
use crate::timeline::testing::{TestScenario, TestScenarioBuilder};

/// A batch where some rows are broken. The broken rows are skipped and the
/// rest of the dashboard still renders.
pub struct ScenarioMalformedRecords {}

impl ScenarioMalformedRecords {
    pub fn new() -> Self {
        Self {}
    }
}

impl TestScenarioBuilder for ScenarioMalformedRecords {
    fn get_scenario(&self) -> TestScenario {
        let mut no_due_day = new_recurring_payment("p-no-day", "Internet", 50, 1, Upcoming);
        no_due_day.due_day = None;

        let mut no_due_date = new_installment("i-no-date", "Camera", 70, date(2024, 2, 1), Upcoming);
        no_due_date.due_date = None;

        let recurring_payments = vec![
            new_recurring_payment("p-rent", "Rent", 1200, 20, Upcoming),
            new_recurring_payment("p-zero", "Broken rule", 10, 0, Upcoming),
            no_due_day,
        ];

        let installments = vec![
            no_due_date,
            new_installment("i-laptop", "Laptop", 150, date(2024, 2, 14), Upcoming),
        ];

        let assert_result = vec![
            expected("installment-i-laptop", date(2024, 2, 14), Overdue),
            expected("recurring-p-rent-2024-02-20", date(2024, 2, 20), Upcoming),
        ];

        (recurring_payments, installments, assert_result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use crate::timeline::TimelineCalculator;
    use crate::timeline::testing::run_and_assert_scenario;
    use crate::timeline::window::TimelineWindow;
    use model::timeline::EventKind;

    fn calculator() -> TimelineCalculator {
        let today = date(2024, 2, 15);
        let window = TimelineWindow::next_days(today, 30)
            .and_then(|window| window.with_lookback(7))
            .unwrap();
        TimelineCalculator::new(today, window)
    }

    #[test]
    fn test_scenario_malformed_records() {
        run_and_assert_scenario(&ScenarioMalformedRecords::new(), &calculator()).unwrap();
    }

    #[test]
    fn test_scenario_malformed_records_diagnostics() {
        let (recurring_payments, installments, _) = ScenarioMalformedRecords::new().get_scenario();

        let timeline = calculator().project(&recurring_payments, &installments).unwrap();

        let skipped: Vec<_> = timeline
            .diagnostics
            .iter()
            .map(|d| (d.kind, d.index, d.record_id.as_deref()))
            .collect();
        assert_eq!(
            skipped,
            vec![
                (EventKind::Recurring, 1, Some("p-zero")),
                (EventKind::Recurring, 2, Some("p-no-day")),
                (EventKind::Installment, 0, Some("i-no-date")),
            ]
        );
        assert_eq!(
            timeline.diagnostics[1].error,
            ValidationError::MissingField { kind: EventKind::Recurring, field: "due_day" }
        );
    }
}
