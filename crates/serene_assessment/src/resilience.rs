use serene_core::error::ensure_finite;
use serene_core::{ChallengeRecord, SereneResult};

/// Outcomes at or above this count as coping successes.
pub const SUCCESS_THRESHOLD: f32 = 0.5;

/// Accumulates challenge records and reports the share that went well.
#[derive(Debug, Clone, Default)]
pub struct ResilienceTracker {
    log: Vec<ChallengeRecord>,
}

impl ResilienceTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, event: impl Into<String>, outcome: f32) -> SereneResult<()> {
        self.record_with_strategies(event, outcome, Vec::new())
    }

    pub fn record_with_strategies(
        &mut self,
        event: impl Into<String>,
        outcome: f32,
        coping_strategies: Vec<String>,
    ) -> SereneResult<()> {
        ensure_finite("outcome", outcome)?;
        let event = event.into();
        tracing::debug!("ResilienceTracker: recorded '{}' with outcome {:.2}", event, outcome);
        self.log.push(ChallengeRecord {
            event,
            outcome,
            coping_strategies,
        });
        Ok(())
    }

    /// Share of records with outcome >= 0.5, or exactly 1.0 with no records.
    pub fn score(&self) -> f32 {
        if self.log.is_empty() {
            return 1.0;
        }
        let successes = self
            .log
            .iter()
            .filter(|r| r.outcome >= SUCCESS_THRESHOLD)
            .count();
        successes as f32 / self.log.len() as f32
    }

    pub fn records(&self) -> &[ChallengeRecord] {
        &self.log
    }
}
