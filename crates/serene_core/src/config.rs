use crate::entropy::SamplingMode;
use crate::lexicon::{self, BiasPatternSpec, Lexicon};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

pub const DEFAULT_TREND_WINDOW: usize = 7;
pub const DEFAULT_REDACTION_MARKER: &str = "[FILTERED]";

// ============================================================================
// Top-level config
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SereneConfig {
    pub lexicon: LexiconConfig,
    pub filter: FilterConfig,
    pub bias: BiasConfig,
    pub trend: TrendConfig,
    pub reward: RewardConfig,
    pub flow: FlowConfig,
    pub stress: StressConfig,
}

impl SereneConfig {
    /// Load config from a TOML file, falling back to defaults for missing fields.
    /// After loading, env var overrides are applied.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;
        let mut config: SereneConfig =
            toml::from_str(&content).with_context(|| "Failed to parse TOML config")?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Try to load from path; if the file is missing or invalid, return defaults with env overrides.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        match Self::load(path) {
            Ok(cfg) => cfg,
            Err(e) => {
                tracing::info!("Config file not found or invalid ({:#}), using defaults", e);
                let mut cfg = Self::default();
                cfg.apply_env_overrides();
                cfg
            }
        }
    }

    /// Apply environment variable overrides on top of file-based config.
    fn apply_env_overrides(&mut self) {
        if let Ok(v) = std::env::var("SERENE_TREND_WINDOW") {
            match v.parse() {
                Ok(n) => self.trend.window = n,
                Err(_) => tracing::warn!("Ignoring unparseable SERENE_TREND_WINDOW={}", v),
            }
        }
        if let Ok(v) = std::env::var("SERENE_RNG_SEED") {
            match v.parse() {
                Ok(n) => self.stress.seed = Some(n),
                Err(_) => tracing::warn!("Ignoring unparseable SERENE_RNG_SEED={}", v),
            }
        }
        if let Ok(v) = std::env::var("SERENE_REDACTION_MARKER") {
            self.filter.redaction_marker = v;
        }
    }
}

// ============================================================================
// Sub-configs
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LexiconConfig {
    pub emotions: Lexicon,
}

impl Default for LexiconConfig {
    fn default() -> Self {
        Self {
            emotions: Lexicon::default_emotions(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    pub blacklist: Vec<String>,
    /// Grounding phrases. Carried for callers; the filter never rewrites them.
    pub whitelist: Vec<String>,
    pub redaction_marker: String,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            blacklist: lexicon::owned(lexicon::FILTER_BLACKLIST),
            whitelist: lexicon::owned(lexicon::FILTER_WHITELIST),
            redaction_marker: DEFAULT_REDACTION_MARKER.to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BiasConfig {
    pub patterns: Vec<BiasPatternSpec>,
}

impl Default for BiasConfig {
    fn default() -> Self {
        Self {
            patterns: BiasPatternSpec::defaults(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TrendConfig {
    /// Capacity of the recent-history buffer.
    pub window: usize,
}

impl Default for TrendConfig {
    fn default() -> Self {
        Self {
            window: DEFAULT_TREND_WINDOW,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RewardConfig {
    /// Energy strictly below this selects the bronze tier.
    pub low_energy_threshold: f32,
    /// Stress strictly above this selects the silver tier.
    pub high_stress_threshold: f32,
    pub base_achievements: Vec<String>,
    pub bronze: Vec<String>,
    pub silver: Vec<String>,
    pub gold: Vec<String>,
}

impl Default for RewardConfig {
    fn default() -> Self {
        Self {
            low_energy_threshold: 0.4,
            high_stress_threshold: 0.7,
            base_achievements: lexicon::owned(lexicon::BASE_ACHIEVEMENTS),
            bronze: lexicon::owned(lexicon::BRONZE_REWARDS),
            silver: lexicon::owned(lexicon::SILVER_REWARDS),
            gold: lexicon::owned(lexicon::GOLD_REWARDS),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FlowConfig {
    /// Skill/challenge ratio considered ideal for flow.
    pub ideal_ratio: f32,
    pub max_feedback_interval_minutes: f32,
    pub clear_goals: bool,
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            ideal_ratio: 0.6,
            max_feedback_interval_minutes: 60.0,
            clear_goals: false,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StressConfig {
    /// Seed for attention-test sampling. `None` uses the thread RNG.
    pub seed: Option<u64>,
    pub moods: Vec<String>,
    pub mood_samples: usize,
}

impl Default for StressConfig {
    fn default() -> Self {
        Self {
            seed: None,
            moods: lexicon::owned(lexicon::STRESS_MOODS),
            mood_samples: 5,
        }
    }
}

impl StressConfig {
    pub fn sampling_mode(&self) -> SamplingMode {
        SamplingMode::from_seed(self.seed)
    }
}

// ============================================================================
// Tests
// ============================================================================
