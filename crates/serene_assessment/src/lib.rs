//! Rule-based psychological scoring: redaction, emotion and bias heuristics,
//! trend tracking, reward tiers, resilience, stress and flow, composed into a
//! single scan.

pub mod bias;
pub mod emotion;
pub mod filter;
pub mod flow;
pub mod mental;
pub mod resilience;
pub mod reward;
pub mod scan;
pub mod stress;
pub mod trend;

pub use bias::BiasScanner;
pub use emotion::EmotionScorer;
pub use filter::TextFilter;
pub use flow::{FlowAssessment, FlowStateMonitor, FlowTask};
pub use mental::MentalSubsystem;
pub use resilience::ResilienceTracker;
pub use reward::{RewardSelector, RewardTier};
pub use scan::{ScanOrchestrator, ScanReport};
pub use stress::{Biomarkers, StressEvaluator, StressReport};
pub use trend::TrendAggregator;
