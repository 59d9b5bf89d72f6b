//! Tiered self-care reward bundles.
//!
//! Branch order is the policy: low energy is checked before high stress, so
//! an exhausted and stressed user gets the low-energy tier.

use serde::{Deserialize, Serialize};
use serene_core::config::RewardConfig;
use serene_core::error::ensure_finite;
use serene_core::{SereneError, SereneResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RewardTier {
    /// Low energy: gentle, short rewards.
    Bronze,
    /// High stress: calming rewards.
    Silver,
    /// Default tier.
    Gold,
}

#[derive(Debug, Clone, Default)]
pub struct RewardSelector {
    config: RewardConfig,
}

impl RewardSelector {
    pub fn new(config: RewardConfig) -> SereneResult<Self> {
        ensure_finite("low_energy_threshold", config.low_energy_threshold)
            .and_then(|_| ensure_finite("high_stress_threshold", config.high_stress_threshold))
            .map_err(|e| SereneError::Config(e.to_string()))?;
        Ok(Self { config })
    }

    /// First matching branch wins.
    pub fn tier(&self, energy_level: f32, stress_index: f32) -> RewardTier {
        if energy_level < self.config.low_energy_threshold {
            RewardTier::Bronze
        } else if stress_index > self.config.high_stress_threshold {
            RewardTier::Silver
        } else {
            RewardTier::Gold
        }
    }

    /// Base achievements followed by the tier's rewards.
    pub fn select(&self, energy_level: f32, stress_index: f32) -> Vec<String> {
        let tier = self.tier(energy_level, stress_index);
        let extras = match tier {
            RewardTier::Bronze => &self.config.bronze,
            RewardTier::Silver => &self.config.silver,
            RewardTier::Gold => &self.config.gold,
        };
        tracing::debug!(
            "RewardSelector: energy={:.2} stress={:.2} -> {:?}",
            energy_level,
            stress_index,
            tier
        );
        self.config
            .base_achievements
            .iter()
            .chain(extras.iter())
            .cloned()
            .collect()
    }

    /// Like [`select`](Self::select) but rejects NaN and infinite levels.
    pub fn checked_select(&self, energy_level: f32, stress_index: f32) -> SereneResult<Vec<String>> {
        ensure_finite("energy_level", energy_level)?;
        ensure_finite("stress_index", stress_index)?;
        Ok(self.select(energy_level, stress_index))
    }
}
