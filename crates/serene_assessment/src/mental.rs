use crate::filter::TextFilter;
use crate::reward::RewardSelector;
use crate::trend::TrendAggregator;
use serene_core::error::ensure_finite;
use serene_core::{Clock, ScoredEvent, SereneConfig, SereneResult, SystemClock};

/// Emotion-processing pipeline: filter → bounded history → trend, plus the
/// self-care reward suggestion driven by current energy and stress.
pub struct MentalSubsystem {
    filter: TextFilter,
    trend: TrendAggregator,
    rewards: RewardSelector,
    energy_level: f32,
    stress_index: f32,
}

impl MentalSubsystem {
    pub fn from_config(config: &SereneConfig) -> SereneResult<Self> {
        Self::with_clock(config, Box::new(SystemClock))
    }

    pub fn with_clock(config: &SereneConfig, clock: Box<dyn Clock>) -> SereneResult<Self> {
        Ok(Self {
            filter: TextFilter::with_clock(&config.filter, clock)?,
            trend: TrendAggregator::new(config.trend.window)?,
            rewards: RewardSelector::new(config.reward.clone())?,
            energy_level: 0.0,
            stress_index: 0.0,
        })
    }

    /// Filter the text, append it with its intensity, and return the rolling
    /// average intensity.
    pub fn process_emotion(&mut self, text: &str, intensity: f32) -> SereneResult<f32> {
        let filtered = self.filter.apply(text);
        let event = ScoredEvent::from_filtered(filtered, intensity)?;
        self.trend.push(event);
        Ok(self.trend.rolling_average())
    }

    pub fn set_levels(&mut self, energy_level: f32, stress_index: f32) -> SereneResult<()> {
        let energy_level = ensure_finite("energy_level", energy_level)?;
        let stress_index = ensure_finite("stress_index", stress_index)?;
        self.energy_level = energy_level;
        self.stress_index = stress_index;
        Ok(())
    }

    pub fn energy_level(&self) -> f32 {
        self.energy_level
    }

    pub fn stress_index(&self) -> f32 {
        self.stress_index
    }

    pub fn trend(&self) -> &TrendAggregator {
        &self.trend
    }

    pub fn generate_selfcare_suggestion(&self) -> Vec<String> {
        self.rewards.select(self.energy_level, self.stress_index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serene_core::FixedClock;

    fn subsystem() -> MentalSubsystem {
        MentalSubsystem::with_clock(&SereneConfig::default(), Box::new(FixedClock::new(5, 8)))
            .unwrap()
    }

    #[test]
    fn test_process_emotion_filters_and_averages() {
        let mut mental = subsystem();
        assert!((mental.process_emotion("担心他人期待", 0.8).unwrap() - 0.8).abs() < 1e-6);
        assert!((mental.process_emotion("散步后好多了", 0.2).unwrap() - 0.5).abs() < 1e-6);

        let first = mental.trend().history().next().unwrap();
        assert_eq!(first.content, "担心[FILTERED]");
        assert_eq!(first.timestamp, 5);
    }

    #[test]
    fn test_out_of_range_intensity_is_not_stored() {
        let mut mental = subsystem();
        assert!(mental.process_emotion("x", 1.2).is_err());
        assert!(mental.trend().is_empty());
    }

    #[test]
    fn test_history_stays_bounded() {
        let mut mental = subsystem();
        for i in 0..20 {
            mental.process_emotion(&format!("event {}", i), 0.5).unwrap();
        }
        assert_eq!(mental.trend().len(), 7);
    }

    #[test]
    fn test_selfcare_defaults_to_low_energy_tier() {
        // Energy starts at 0, which is below the low-energy threshold
        let mental = subsystem();
        let rewards = mental.generate_selfcare_suggestion();
        assert!(rewards.contains(&"5分钟散步".to_string()));
    }

    #[test]
    fn test_selfcare_follows_levels() {
        let mut mental = subsystem();
        mental.set_levels(0.9, 0.9).unwrap();
        assert!(mental
            .generate_selfcare_suggestion()
            .contains(&"泡茶仪式".to_string()));
        assert!(mental.set_levels(f32::NAN, 0.1).is_err());
    }
}
