//! Simulated stress assessment.
//!
//! Physiological readings are derived from biomarkers, the attention test is
//! sampled from an injected [`EntropySource`], and mood sampling cycles the
//! configured mood list.

use serde::{Deserialize, Serialize};
use serene_core::config::StressConfig;
use serene_core::EntropySource;

const BASE_HRV: f32 = 55.0;
const HRV_PER_SLEEP_QUALITY: f32 = 15.0;
const BASE_SKIN_CONDUCTANCE: f32 = 2.0;

pub const FOCUS_DURATION_RANGE: (u32, u32) = (5, 45);
pub const TASK_SWITCHING_COST_RANGE: (u32, u32) = (100, 500);

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Biomarkers {
    pub sleep_quality: f32,
    pub muscle_tension: f32,
    pub mind_wandering: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhysiologicalReading {
    pub hrv: f32,
    pub skin_conductance: f32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttentionReading {
    /// Minutes.
    pub focus_duration: u32,
    /// Milliseconds.
    pub task_switching_cost: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StressReport {
    pub physiological: PhysiologicalReading,
    pub cognitive: AttentionReading,
    pub emotional: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct StressEvaluator {
    pub biomarkers: Biomarkers,
    moods: Vec<String>,
    mood_samples: usize,
}

impl Default for StressEvaluator {
    fn default() -> Self {
        Self::new(&StressConfig::default())
    }
}

impl StressEvaluator {
    pub fn new(config: &StressConfig) -> Self {
        if config.moods.is_empty() && config.mood_samples > 0 {
            tracing::warn!("StressEvaluator: no moods configured, mood sampling will be empty");
        }
        Self {
            biomarkers: Biomarkers::default(),
            moods: config.moods.clone(),
            mood_samples: config.mood_samples,
        }
    }

    pub fn continuous_assessment(&self, entropy: &mut dyn EntropySource) -> StressReport {
        StressReport {
            physiological: self.bio_feedback(),
            cognitive: attention_test(entropy),
            emotional: self.mood_sampling(),
        }
    }

    pub fn bio_feedback(&self) -> PhysiologicalReading {
        PhysiologicalReading {
            hrv: BASE_HRV + HRV_PER_SLEEP_QUALITY * self.biomarkers.sleep_quality,
            skin_conductance: BASE_SKIN_CONDUCTANCE + self.biomarkers.muscle_tension,
        }
    }

    pub fn mood_sampling(&self) -> Vec<String> {
        if self.moods.is_empty() {
            return Vec::new();
        }
        (0..self.mood_samples)
            .map(|i| self.moods[i % self.moods.len()].clone())
            .collect()
    }
}

pub fn attention_test(entropy: &mut dyn EntropySource) -> AttentionReading {
    let (focus_lo, focus_hi) = FOCUS_DURATION_RANGE;
    let (switch_lo, switch_hi) = TASK_SWITCHING_COST_RANGE;
    AttentionReading {
        focus_duration: entropy.sample_inclusive(focus_lo, focus_hi),
        task_switching_cost: entropy.sample_inclusive(switch_lo, switch_hi),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serene_core::SeededEntropy;

    /// Always returns the upper bound.
    struct Ceiling;

    impl EntropySource for Ceiling {
        fn sample_inclusive(&mut self, _low: u32, high: u32) -> u32 {
            high
        }
    }

    #[test]
    fn test_default_biomarkers() {
        let report = StressEvaluator::default().continuous_assessment(&mut Ceiling);
        assert_eq!(report.physiological.hrv, 55.0);
        assert_eq!(report.physiological.skin_conductance, 2.0);
        assert_eq!(report.cognitive.focus_duration, 45);
        assert_eq!(report.cognitive.task_switching_cost, 500);
    }

    #[test]
    fn test_biomarkers_shift_physiology() {
        let mut evaluator = StressEvaluator::default();
        evaluator.biomarkers.sleep_quality = 1.0;
        evaluator.biomarkers.muscle_tension = 0.5;
        let reading = evaluator.bio_feedback();
        assert_eq!(reading.hrv, 70.0);
        assert_eq!(reading.skin_conductance, 2.5);
    }

    #[test]
    fn test_mood_sampling_cycles() {
        let moods = StressEvaluator::default().mood_sampling();
        assert_eq!(moods, vec!["平静", "烦躁", "期待", "倦怠", "平静"]);
    }

    #[test]
    fn test_empty_moods() {
        let config = StressConfig {
            moods: vec![],
            ..StressConfig::default()
        };
        assert!(StressEvaluator::new(&config).mood_sampling().is_empty());
    }

    #[test]
    fn test_attention_test_in_range() {
        let mut entropy = SeededEntropy::new(11);
        for _ in 0..200 {
            let r = attention_test(&mut entropy);
            assert!((5..=45).contains(&r.focus_duration));
            assert!((100..=500).contains(&r.task_switching_cost));
        }
    }
}
