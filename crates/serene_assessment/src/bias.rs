//! Cognitive-distortion scanning.
//!
//! Each registered pattern is tested against the whole text. Findings come
//! back in registration order, not match position, and severity is a pure
//! length proxy: `min(chars / 10, 10)`.

use regex::Regex;
use serene_core::{BiasFinding, BiasPatternSpec, SereneError, SereneResult};

pub const MAX_SEVERITY: u8 = 10;

#[derive(Debug, Clone)]
struct CompiledPattern {
    bias_type: String,
    regex: Regex,
}

#[derive(Debug, Clone)]
pub struct BiasScanner {
    patterns: Vec<CompiledPattern>,
}

impl Default for BiasScanner {
    fn default() -> Self {
        // Built-in patterns are constants and covered by tests.
        Self::from_specs(&BiasPatternSpec::defaults()).expect("built-in bias patterns are valid")
    }
}

impl BiasScanner {
    pub fn from_specs(specs: &[BiasPatternSpec]) -> SereneResult<Self> {
        let patterns = specs
            .iter()
            .map(|spec| {
                let regex = Regex::new(&spec.pattern).map_err(|e| SereneError::Pattern {
                    bias_type: spec.bias_type.clone(),
                    reason: e.to_string(),
                })?;
                if regex.is_match("") {
                    return Err(SereneError::Pattern {
                        bias_type: spec.bias_type.clone(),
                        reason: "pattern matches the empty string".to_string(),
                    });
                }
                Ok(CompiledPattern {
                    bias_type: spec.bias_type.clone(),
                    regex,
                })
            })
            .collect::<SereneResult<Vec<_>>>()?;
        Ok(Self { patterns })
    }

    /// Registered bias types, in scan order.
    pub fn bias_types(&self) -> impl Iterator<Item = &str> {
        self.patterns.iter().map(|p| p.bias_type.as_str())
    }

    pub fn scan(&self, text: &str) -> Vec<BiasFinding> {
        let severity = severity_for(text);
        let findings: Vec<BiasFinding> = self
            .patterns
            .iter()
            .filter_map(|p| {
                let trigger_phrases: Vec<String> = p
                    .regex
                    .find_iter(text)
                    .filter(|m| !m.is_empty())
                    .map(|m| m.as_str().to_string())
                    .collect();
                if trigger_phrases.is_empty() {
                    None
                } else {
                    Some(BiasFinding {
                        bias_type: p.bias_type.clone(),
                        severity,
                        trigger_phrases,
                    })
                }
            })
            .collect();

        if !findings.is_empty() {
            tracing::debug!(
                "BiasScanner: {} pattern(s) matched, severity {}",
                findings.len(),
                severity
            );
        }
        findings
    }
}

/// Length-derived severity proxy counted in characters.
pub fn severity_for(text: &str) -> u8 {
    (text.chars().count() / 10).min(MAX_SEVERITY as usize) as u8
}
