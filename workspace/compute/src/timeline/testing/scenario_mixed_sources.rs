use model::PaymentStatus::{Overdue, Paid, Upcoming};

use super::helpers::{date, expected, new_installment, new_recurring_payment};
use crate::timeline::testing::{TestScenario, TestScenarioBuilder};

/// Recurring payments and installments on the dashboard of 2024-02-15,
/// shown 10 days back and 30 days ahead.
pub struct ScenarioMixedSources {}

impl ScenarioMixedSources {
    pub fn new() -> Self {
        Self {}
    }
}

impl TestScenarioBuilder for ScenarioMixedSources {
    fn get_scenario(&self) -> TestScenario {
        let recurring_payments = vec![
            // stale status from last month, still ahead this month
            new_recurring_payment("p-rent", "Rent", 1200, 20, Overdue),
            // paid for the current cycle, the next one is upcoming
            new_recurring_payment("p-phone", "Phone", 45, 15, Paid),
            // this month's occurrence already passed
            new_recurring_payment("p-gym", "Gym", 30, 1, Upcoming),
        ];

        let installments = vec![
            new_installment("i-laptop", "Laptop", 150, date(2024, 2, 10), Upcoming),
            new_installment("i-sofa", "Sofa", 80, date(2024, 2, 10), Paid),
            new_installment("i-bike", "Bike", 60, date(2024, 3, 1), Upcoming),
            // before the lookback
            new_installment("i-old", "Old TV", 20, date(2024, 1, 20), Upcoming),
        ];

        let assert_result = vec![
            expected("installment-i-laptop", date(2024, 2, 10), Overdue),
            expected("installment-i-sofa", date(2024, 2, 10), Paid),
            expected("recurring-p-phone-2024-02-15", date(2024, 2, 15), Paid),
            expected("recurring-p-rent-2024-02-20", date(2024, 2, 20), Upcoming),
            expected("recurring-p-gym-2024-03-01", date(2024, 3, 1), Upcoming),
            expected("installment-i-bike", date(2024, 3, 1), Upcoming),
            expected("recurring-p-phone-2024-03-15", date(2024, 3, 15), Upcoming),
        ];

        (recurring_payments, installments, assert_result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timeline::TimelineCalculator;
    use crate::timeline::testing::run_and_assert_scenario;
    use crate::timeline::window::TimelineWindow;

    #[test]
    fn test_scenario_mixed_sources() {
        let today = date(2024, 2, 15);
        let window = TimelineWindow::next_days(today, 30)
            .and_then(|window| window.with_lookback(10))
            .unwrap();
        let calculator = TimelineCalculator::new(today, window);

        run_and_assert_scenario(&ScenarioMixedSources::new(), &calculator).unwrap();
    }

    #[test]
    fn test_scenario_mixed_sources_without_lookback() {
        let scenario = ScenarioMixedSources::new();
        let (recurring_payments, installments, assert_result) = scenario.get_scenario();
        let today = date(2024, 2, 15);
        let window = TimelineWindow::next_days(today, 30).unwrap();

        let timeline = TimelineCalculator::new(today, window)
            .project(&recurring_payments, &installments)
            .unwrap();

        // everything before today drops out of the window
        let expected: Vec<_> = assert_result.into_iter().filter(|(_, date, _)| *date >= today).collect();
        let actual: Vec<_> = timeline
            .events
            .iter()
            .map(|event| (event.id().to_string(), event.date(), event.status()))
            .collect();
        assert_eq!(actual, expected);
    }
}
