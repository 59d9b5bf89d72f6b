use serde::{Deserialize, Serialize};
use serene_core::Clock;

pub const EARLY_WINDOW: &str = "22:00-02:00";
pub const LATE_WINDOW: &str = "02:00-06:00";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SleepPlan {
    pub sleep_window: String,
    pub deep_sleep_boost: String,
    pub rem_optimization: String,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SleepManager;

impl SleepManager {
    pub fn optimize_cycle(&self, clock: &dyn Clock) -> SleepPlan {
        SleepPlan {
            sleep_window: sleep_window(clock.local_hour()).to_string(),
            deep_sleep_boost: "白噪音+体温调节".to_string(),
            rem_optimization: "睡前认知解离练习".to_string(),
        }
    }
}

/// Mornings plan for the coming night; afternoons and evenings for the late slot.
pub fn sleep_window(hour: u32) -> &'static str {
    if hour < 12 {
        EARLY_WINDOW
    } else {
        LATE_WINDOW
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serene_core::FixedClock;

    #[test]
    fn test_window_switches_at_noon() {
        assert_eq!(sleep_window(0), EARLY_WINDOW);
        assert_eq!(sleep_window(11), EARLY_WINDOW);
        assert_eq!(sleep_window(12), LATE_WINDOW);
        assert_eq!(sleep_window(23), LATE_WINDOW);
    }

    #[test]
    fn test_plan_uses_clock() {
        let plan = SleepManager.optimize_cycle(&FixedClock::new(0, 15));
        assert_eq!(plan.sleep_window, LATE_WINDOW);
        assert_eq!(plan.deep_sleep_boost, "白噪音+体温调节");
    }
}
