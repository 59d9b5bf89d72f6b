pub mod movement;
pub mod nutrition;
pub mod sleep;

pub use movement::{MicroWorkout, MovementTracker};
pub use nutrition::{NutrientBalance, NutritionEngine};
pub use sleep::{SleepManager, SleepPlan};

use serene_core::{Clock, SystemClock};

/// Physical self-care: sleep, movement and nutrition behind one facade.
pub struct PhysicalSubsystem {
    sleep: SleepManager,
    movement: MovementTracker,
    nutrition: NutritionEngine,
    clock: Box<dyn Clock>,
}

impl Default for PhysicalSubsystem {
    fn default() -> Self {
        Self::with_clock(Box::new(SystemClock))
    }
}

impl PhysicalSubsystem {
    pub fn with_clock(clock: Box<dyn Clock>) -> Self {
        Self {
            sleep: SleepManager,
            movement: MovementTracker,
            nutrition: NutritionEngine::new(),
            clock,
        }
    }

    pub fn circadian_rhythm_sync(&self) -> SleepPlan {
        self.sleep.optimize_cycle(self.clock.as_ref())
    }

    /// Log meals and return the adjusted recommendations.
    pub fn metabolic_balancer<S: AsRef<str>>(&mut self, food_log: &[S]) -> Vec<String> {
        self.nutrition.log_meals(food_log);
        self.nutrition.suggest_adjustment()
    }

    pub fn neurovascular_reset(&self) -> Vec<MicroWorkout> {
        self.movement.prescribe_micro_workouts()
    }

    pub fn nutrition(&self) -> &NutritionEngine {
        &self.nutrition
    }
}
