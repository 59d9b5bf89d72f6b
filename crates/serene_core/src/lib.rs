pub mod config;
pub mod entropy;
pub mod error;
pub mod lexicon;

pub use config::SereneConfig;
pub use entropy::{EntropySource, SamplingMode, SeededEntropy, ThreadEntropy};
pub use error::{SereneError, SereneResult};
pub use lexicon::{BiasPatternSpec, Lexicon, LexiconEntry};

use chrono::{Local, Timelike, Utc};
use serde::{Deserialize, Serialize};

/// Free text after blacklist redaction, stamped with the time it was filtered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilteredEvent {
    pub content: String,
    pub timestamp: i64, // Unix millis
}

/// A filtered event paired with the intensity the caller reported for it.
///
/// Created once per input event and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredEvent {
    pub content: String,
    pub timestamp: i64,
    /// Emotional intensity in `[0.0, 1.0]`.
    pub intensity: f32,
}

impl ScoredEvent {
    /// Build an event, rejecting intensities outside `[0, 1]` (including NaN).
    pub fn new(content: impl Into<String>, timestamp: i64, intensity: f32) -> SereneResult<Self> {
        if !(0.0..=1.0).contains(&intensity) {
            return Err(SereneError::Validation(format!(
                "intensity must lie in [0, 1], got {}",
                intensity
            )));
        }
        Ok(Self {
            content: content.into(),
            timestamp,
            intensity,
        })
    }

    pub fn from_filtered(event: FilteredEvent, intensity: f32) -> SereneResult<Self> {
        Self::new(event.content, event.timestamp, intensity)
    }
}

/// One cognitive-distortion pattern that matched a piece of text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BiasFinding {
    pub bias_type: String,
    /// Length-derived proxy in `0..=10`, not a semantic judgement.
    pub severity: u8,
    pub trigger_phrases: Vec<String>,
}

/// A challenge the user went through and how it turned out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChallengeRecord {
    pub event: String,
    pub outcome: f32,
    #[serde(default)]
    pub coping_strategies: Vec<String>,
}

// ============================================================================
// Clock
// ============================================================================

/// Source of wall-clock readings, injectable so tests can pin time.
pub trait Clock {
    /// Current Unix time in milliseconds.
    fn now_millis(&self) -> i64;

    /// Current hour of day (0-23) in local time.
    fn local_hour(&self) -> u32;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }

    fn local_hour(&self) -> u32 {
        Local::now().hour()
    }
}

/// A clock frozen at a fixed instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    pub millis: i64,
    pub hour: u32,
}

impl FixedClock {
    pub fn new(millis: i64, hour: u32) -> Self {
        Self {
            millis,
            hour: hour % 24,
        }
    }
}

impl Clock for FixedClock {
    fn now_millis(&self) -> i64 {
        self.millis
    }

    fn local_hour(&self) -> u32 {
        self.hour
    }
}
