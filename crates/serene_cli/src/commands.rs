//! Subcommand bodies. Each renders its typed report as pretty JSON; `main`
//! only prints it.

use anyhow::{Context, Result};
use serde::Serialize;
use serene_assessment::{
    BiasScanner, EmotionScorer, FlowStateMonitor, FlowTask, MentalSubsystem, RewardSelector,
    RewardTier, ScanOrchestrator, TextFilter,
};
use serene_core::{FilteredEvent, SamplingMode, ScoredEvent, SereneConfig};
use serene_somatic::{MicroWorkout, PhysicalSubsystem, SleepPlan};
use std::collections::BTreeMap;
use std::path::Path;

/// Inputs for a full scan, gathered from files and repeated flags.
#[derive(Debug, Default)]
pub struct ScanInput {
    pub journal: Vec<String>,
    pub thoughts: Vec<String>,
    pub challenges: Vec<(String, f32)>,
    pub seed: Option<u64>,
    pub sleep_quality: f32,
    pub muscle_tension: f32,
}

#[derive(Debug, Serialize)]
struct FilterOutput<'a> {
    #[serde(flatten)]
    event: FilteredEvent,
    marker: &'a str,
    whitelist: &'a [String],
}

#[derive(Debug, Serialize)]
struct BalanceOutput<'a> {
    balance: f32,
    counts: BTreeMap<&'a str, usize>,
}

#[derive(Debug, Serialize)]
struct RewardOutput {
    tier: RewardTier,
    rewards: Vec<String>,
}

#[derive(Debug, Serialize)]
struct TrackOutput<'a> {
    rolling_average: f32,
    history: Vec<&'a ScoredEvent>,
    selfcare: Vec<String>,
}

#[derive(Debug, Serialize)]
struct CareOutput {
    sleep: SleepPlan,
    workouts: Vec<MicroWorkout>,
    nutrition: Vec<String>,
}

fn render(output: &impl Serialize) -> Result<String> {
    Ok(serde_json::to_string_pretty(output)?)
}

/// Non-empty, trimmed lines of a text file.
pub fn read_entries(path: &Path) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(content
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect())
}

pub fn scan(config: &SereneConfig, input: ScanInput) -> Result<String> {
    let mut orchestrator = ScanOrchestrator::from_config(config)?;
    if let Some(seed) = input.seed {
        orchestrator = orchestrator.with_sampling(SamplingMode::Seeded(seed));
    }
    let biomarkers = &mut orchestrator.stress_evaluator_mut().biomarkers;
    biomarkers.sleep_quality = input.sleep_quality;
    biomarkers.muscle_tension = input.muscle_tension;

    for entry in input.journal {
        orchestrator.add_journal_entry(entry);
    }
    for thought in input.thoughts {
        orchestrator.add_thought(thought);
    }
    for (event, outcome) in input.challenges {
        orchestrator.record_challenge(event, outcome)?;
    }
    render(&orchestrator.full_scan()?)
}

pub fn filter(config: &SereneConfig, text: &str) -> Result<String> {
    let filter = TextFilter::new(&config.filter)?;
    render(&FilterOutput {
        event: filter.apply(text),
        marker: filter.marker(),
        whitelist: filter.whitelist(),
    })
}

pub fn bias(config: &SereneConfig, text: &str) -> Result<String> {
    let scanner = BiasScanner::from_specs(&config.bias.patterns)?;
    render(&scanner.scan(text))
}

pub fn balance(config: &SereneConfig, text: &str) -> Result<String> {
    let scorer = EmotionScorer::new(config.lexicon.emotions.clone(), config.trend.window)?;
    render(&BalanceOutput {
        balance: scorer.balance(text),
        counts: scorer.category_counts(text).into_iter().collect(),
    })
}

pub fn reward(config: &SereneConfig, energy: f32, stress: f32) -> Result<String> {
    let selector = RewardSelector::new(config.reward.clone())?;
    let rewards = selector.checked_select(energy, stress)?;
    render(&RewardOutput {
        tier: selector.tier(energy, stress),
        rewards,
    })
}

pub fn flow(config: &SereneConfig, task: FlowTask) -> Result<String> {
    let monitor = FlowStateMonitor::new(config.flow.clone());
    render(&monitor.assess(&task)?)
}

pub fn track(
    config: &SereneConfig,
    events: &[(String, f32)],
    energy: f32,
    stress: f32,
) -> Result<String> {
    let mut mental = MentalSubsystem::from_config(config)?;
    mental.set_levels(energy, stress)?;
    let mut rolling_average = 0.0;
    for (text, intensity) in events {
        rolling_average = mental.process_emotion(text, *intensity)?;
    }
    let output = TrackOutput {
        rolling_average,
        history: mental.trend().history().collect(),
        selfcare: mental.generate_selfcare_suggestion(),
    };
    render(&output)
}

pub fn care(meals: &[String]) -> Result<String> {
    let mut body = PhysicalSubsystem::default();
    let nutrition = body.metabolic_balancer(meals);
    let output = CareOutput {
        sleep: body.circadian_rhythm_sync(),
        workouts: body.neurovascular_reset(),
        nutrition,
    };
    render(&output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};
    use std::io::Write;

    fn parsed(output: Result<String>) -> Value {
        serde_json::from_str(&output.unwrap()).unwrap()
    }

    #[test]
    fn test_read_entries_skips_blank_lines() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "今天很平静\n\n   \n  有点焦虑  ").unwrap();
        let entries = read_entries(file.path()).unwrap();
        assert_eq!(entries, vec!["今天很平静", "有点焦虑"]);
    }

    #[test]
    fn test_read_entries_missing_file() {
        assert!(read_entries(Path::new("/nonexistent/journal.txt")).is_err());
    }

    #[test]
    fn test_scan_value() {
        let input = ScanInput {
            journal: vec!["希望".to_string()],
            thoughts: vec!["我永远做不到".to_string()],
            challenges: vec![("考试".to_string(), 0.9)],
            seed: Some(1),
            sleep_quality: 1.0,
            ..ScanInput::default()
        };
        let v = parsed(scan(&SereneConfig::default(), input));
        assert_eq!(v["emotional_balance"][0], 1.0);
        assert_eq!(v["cognitive_biases"][0]["bias_type"], "灾难化思维");
        assert_eq!(v["stress_level"]["physiological"]["hrv"], 70.0);
        assert_eq!(v["resilience_index"], 1.0);
    }

    #[test]
    fn test_reward_value() {
        let v = parsed(reward(&SereneConfig::default(), 0.2, 0.9));
        assert_eq!(v["tier"], "bronze");
        assert_eq!(v["rewards"].as_array().unwrap().len(), 5);
        assert!(reward(&SereneConfig::default(), f32::NAN, 0.9).is_err());
    }

    #[test]
    fn test_balance_value() {
        let v = parsed(balance(&SereneConfig::default(), "焦虑但有希望"));
        assert_eq!(v["balance"], 0.5);
        assert_eq!(v["counts"]["positive"], 1);
        assert_eq!(v["counts"]["negative"], 1);
    }

    #[test]
    fn test_scores_print_at_f32_precision() {
        // Two positive hits and one negative: 2/3.
        let out = balance(&SereneConfig::default(), "希望 平静 焦虑").unwrap();
        assert!(out.contains("\"balance\": 0.6666667"), "{}", out);
        assert!(!out.contains("0.6666666865348816"));
    }

    #[test]
    fn test_filter_value_reports_marker_and_whitelist() {
        let v = parsed(filter(&SereneConfig::default(), "又是他人期待"));
        assert_eq!(v["content"], "又是[FILTERED]");
        assert_eq!(v["marker"], "[FILTERED]");
        assert_eq!(v["whitelist"], json!(["当下", "可控", "具体"]));
        assert!(v["timestamp"].is_i64());
    }

    #[test]
    fn test_track_value() {
        let events = vec![("完美主义作祟".to_string(), 0.6), ("好一些".to_string(), 0.2)];
        let v = parsed(track(&SereneConfig::default(), &events, 0.9, 0.9));
        assert_eq!(v["history"][0]["content"], "[FILTERED]作祟");
        assert_eq!(v["history"].as_array().unwrap().len(), 2);
        assert!(v["selfcare"].as_array().unwrap().contains(&json!("泡茶仪式")));
    }

    #[test]
    fn test_flow_rejects_zero_challenge() {
        let task = FlowTask {
            skill_level: 1.0,
            challenge_level: 0.0,
            feedback_interval_minutes: 10.0,
        };
        assert!(flow(&SereneConfig::default(), task).is_err());
    }

    #[test]
    fn test_care_value() {
        let v = parsed(care(&["蛋白质早餐".to_string()]));
        assert_eq!(v["workouts"].as_array().unwrap().len(), 3);
        assert_eq!(v["nutrition"][0], "氨基酸补充剂x2");
    }
}
