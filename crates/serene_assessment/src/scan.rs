//! The composed "full scan".
//!
//! No scoring happens here: the orchestrator feeds its stored journal,
//! thought log and challenge records to each component and collects the
//! results. Component errors propagate unchanged.

use crate::bias::BiasScanner;
use crate::emotion::EmotionScorer;
use crate::resilience::ResilienceTracker;
use crate::stress::{StressEvaluator, StressReport};
use serde::Serialize;
use serene_core::{BiasFinding, EntropySource, SamplingMode, SereneConfig, SereneResult};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScanReport {
    /// One balance per journal entry, in insertion order.
    pub emotional_balance: Vec<f32>,
    pub cognitive_biases: Vec<BiasFinding>,
    pub stress_level: StressReport,
    pub resilience_index: f32,
}

#[derive(Debug, Clone)]
pub struct ScanOrchestrator {
    scorer: EmotionScorer,
    scanner: BiasScanner,
    stress: StressEvaluator,
    resilience: ResilienceTracker,
    sampling: SamplingMode,
    journal: Vec<String>,
    thoughts: Vec<String>,
}

impl ScanOrchestrator {
    pub fn from_config(config: &SereneConfig) -> SereneResult<Self> {
        Ok(Self {
            scorer: EmotionScorer::new(config.lexicon.emotions.clone(), config.trend.window)?,
            scanner: BiasScanner::from_specs(&config.bias.patterns)?,
            stress: StressEvaluator::new(&config.stress),
            resilience: ResilienceTracker::new(),
            sampling: config.stress.sampling_mode(),
            journal: Vec::new(),
            thoughts: Vec::new(),
        })
    }

    pub fn with_sampling(mut self, sampling: SamplingMode) -> Self {
        self.sampling = sampling;
        self
    }

    pub fn add_journal_entry(&mut self, entry: impl Into<String>) {
        self.journal.push(entry.into());
    }

    pub fn add_thought(&mut self, thought: impl Into<String>) {
        self.thoughts.push(thought.into());
    }

    pub fn record_challenge(&mut self, event: impl Into<String>, outcome: f32) -> SereneResult<()> {
        self.resilience.record(event, outcome)
    }

    pub fn stress_evaluator_mut(&mut self) -> &mut StressEvaluator {
        &mut self.stress
    }

    pub fn resilience(&self) -> &ResilienceTracker {
        &self.resilience
    }

    /// Thought log as scanned: entries joined by newlines.
    pub fn thought_record(&self) -> String {
        self.thoughts.join("\n")
    }

    /// Scan with a fresh entropy source from the configured sampling mode.
    /// With a seeded mode, identical stored state yields identical reports.
    pub fn full_scan(&self) -> SereneResult<ScanReport> {
        let mut entropy = self.sampling.source();
        self.full_scan_with(entropy.as_mut())
    }

    pub fn full_scan_with(&self, entropy: &mut dyn EntropySource) -> SereneResult<ScanReport> {
        let report = ScanReport {
            emotional_balance: self.run_emotion_analysis(),
            cognitive_biases: self.detect_thinking_errors(),
            stress_level: self.stress.continuous_assessment(entropy),
            resilience_index: self.resilience.score(),
        };
        tracing::info!(
            "Full scan: {} journal entr(ies), {} bias finding(s), resilience {:.2}",
            report.emotional_balance.len(),
            report.cognitive_biases.len(),
            report.resilience_index
        );
        Ok(report)
    }

    fn run_emotion_analysis(&self) -> Vec<f32> {
        self.journal.iter().map(|j| self.scorer.balance(j)).collect()
    }

    fn detect_thinking_errors(&self) -> Vec<BiasFinding> {
        self.scanner.scan(&self.thought_record())
    }
}
