use model::PaymentStatus::Upcoming;

use super::helpers::{date, expected, new_recurring_payment};
use crate::timeline::testing::{TestScenario, TestScenarioBuilder};

/// Payments due at the end of the month, projected three months ahead from
/// 2024-04-15. Due days past the end of a month land on its last day.
pub struct ScenarioMonthEnd {}

impl ScenarioMonthEnd {
    pub fn new() -> Self {
        Self {}
    }
}

impl TestScenarioBuilder for ScenarioMonthEnd {
    fn get_scenario(&self) -> TestScenario {
        let recurring_payments = vec![
            new_recurring_payment("p-31", "Savings transfer", 300, 31, Upcoming),
            new_recurring_payment("p-30", "Insurance", 90, 30, Upcoming),
            new_recurring_payment("p-29", "Streaming", 12, 29, Upcoming),
        ];

        let assert_result = vec![
            expected("recurring-p-29-2024-04-29", date(2024, 4, 29), Upcoming),
            expected("recurring-p-31-2024-04-30", date(2024, 4, 30), Upcoming),
            expected("recurring-p-30-2024-04-30", date(2024, 4, 30), Upcoming),
            expected("recurring-p-29-2024-05-29", date(2024, 5, 29), Upcoming),
            expected("recurring-p-30-2024-05-30", date(2024, 5, 30), Upcoming),
            expected("recurring-p-31-2024-05-31", date(2024, 5, 31), Upcoming),
            expected("recurring-p-29-2024-06-29", date(2024, 6, 29), Upcoming),
            expected("recurring-p-31-2024-06-30", date(2024, 6, 30), Upcoming),
            expected("recurring-p-30-2024-06-30", date(2024, 6, 30), Upcoming),
        ];

        (recurring_payments, vec![], assert_result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timeline::TimelineCalculator;
    use crate::timeline::testing::run_and_assert_scenario;
    use crate::timeline::window::TimelineWindow;

    #[test]
    fn test_scenario_month_end() {
        let today = date(2024, 4, 15);
        let window = TimelineWindow::next_months(today, 3).unwrap();
        let calculator = TimelineCalculator::new(today, window);

        run_and_assert_scenario(&ScenarioMonthEnd::new(), &calculator).unwrap();
    }
}
