/*
    Loop Scheduling

    Fixed period, no catch-up: each iteration sleeps for whatever is left
    of the period and an overrun simply starts the next one at once.
*/

use embassy_time::Duration;

/// Time left in the current period, zero once the period is used up.
pub fn remaining(period: Duration, elapsed: Duration) -> Duration {
    period.checked_sub(elapsed).unwrap_or(Duration::from_ticks(0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MAIN_TASK_PERIOD;

    #[test]
    fn sleeps_for_the_rest_of_the_period() {
        let left = remaining(MAIN_TASK_PERIOD, Duration::from_millis(12));
        assert_eq!(left, Duration::from_millis(38));
    }

    #[test]
    fn overrun_does_not_sleep() {
        assert_eq!(remaining(MAIN_TASK_PERIOD, Duration::from_millis(50)), Duration::from_ticks(0));
        assert_eq!(remaining(MAIN_TASK_PERIOD, Duration::from_millis(75)), Duration::from_ticks(0));
    }

    #[test]
    fn idle_iteration_sleeps_full_period() {
        assert_eq!(remaining(MAIN_TASK_PERIOD, Duration::from_ticks(0)), Duration::from_millis(50));
    }
}
