//! Flow-state estimation from the skill/challenge ratio.

use serde::{Deserialize, Serialize};
use serene_core::config::FlowConfig;
use serene_core::error::ensure_finite;
use serene_core::{SereneError, SereneResult};

pub const SHORTEN_FEEDBACK: &str = "缩短反馈周期至30分钟内";
pub const CLARIFY_GOALS: &str = "拆解任务为更明确的子目标";

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlowTask {
    pub skill_level: f32,
    pub challenge_level: f32,
    pub feedback_interval_minutes: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowAssessment {
    pub flow_probability: f32,
    pub optimization_suggestions: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct FlowStateMonitor {
    config: FlowConfig,
}

impl FlowStateMonitor {
    pub fn new(config: FlowConfig) -> Self {
        Self { config }
    }

    pub fn assess(&self, task: &FlowTask) -> SereneResult<FlowAssessment> {
        ensure_finite("skill_level", task.skill_level)?;
        ensure_finite("challenge_level", task.challenge_level)?;
        ensure_finite("feedback_interval_minutes", task.feedback_interval_minutes)?;
        if task.challenge_level <= 0.0 {
            return Err(SereneError::Validation(format!(
                "challenge_level must be positive, got {}",
                task.challenge_level
            )));
        }

        let ratio = task.skill_level / task.challenge_level;
        Ok(FlowAssessment {
            flow_probability: self.flow_probability(ratio),
            optimization_suggestions: self.suggestions(task),
        })
    }

    /// `1 - |ratio - ideal|`, clamped to `[0, 1]`.
    pub fn flow_probability(&self, ratio: f32) -> f32 {
        (1.0 - (ratio - self.config.ideal_ratio).abs()).clamp(0.0, 1.0)
    }

    fn suggestions(&self, task: &FlowTask) -> Vec<String> {
        let mut out = Vec::new();
        if task.feedback_interval_minutes > self.config.max_feedback_interval_minutes {
            out.push(SHORTEN_FEEDBACK.to_string());
        }
        if !self.config.clear_goals {
            out.push(CLARIFY_GOALS.to_string());
        }
        out
    }
}
