//! Blacklist redaction for free-text input.

use regex::{NoExpand, Regex};
use std::borrow::Cow;
use serene_core::config::FilterConfig;
use serene_core::{Clock, FilteredEvent, SereneError, SereneResult, SystemClock};

/// Replaces every blacklisted phrase with a redaction marker and stamps the
/// result with the current time.
pub struct TextFilter {
    pattern: Option<Regex>,
    marker: String,
    whitelist: Vec<String>,
    clock: Box<dyn Clock>,
}

impl TextFilter {
    pub fn new(config: &FilterConfig) -> SereneResult<Self> {
        Self::with_clock(config, Box::new(SystemClock))
    }

    pub fn with_clock(config: &FilterConfig, clock: Box<dyn Clock>) -> SereneResult<Self> {
        let mut phrases: Vec<&str> = Vec::with_capacity(config.blacklist.len());
        for phrase in &config.blacklist {
            if phrase.is_empty() {
                return Err(SereneError::Validation(
                    "blacklisted phrase must not be empty".to_string(),
                ));
            }
            if let Some(reason) = marker_overlap(&config.redaction_marker, phrase) {
                return Err(SereneError::Validation(format!(
                    "redaction marker '{}' {} blacklisted phrase '{}'",
                    config.redaction_marker, reason, phrase
                )));
            }
            if !phrases.contains(&phrase.as_str()) {
                phrases.push(phrase);
            }
        }

        // Leftmost-first alternation: list longer phrases first so they win
        // over their own prefixes.
        phrases.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()));

        let pattern = if phrases.is_empty() {
            None
        } else {
            let alternation = phrases
                .iter()
                .map(|p| regex::escape(p))
                .collect::<Vec<_>>()
                .join("|");
            let re = Regex::new(&alternation)
                .map_err(|e| SereneError::Config(format!("blacklist regex: {}", e)))?;
            Some(re)
        };

        Ok(Self {
            pattern,
            marker: config.redaction_marker.clone(),
            whitelist: config.whitelist.clone(),
            clock,
        })
    }

    pub fn marker(&self) -> &str {
        &self.marker
    }

    pub fn whitelist(&self) -> &[String] {
        &self.whitelist
    }

    /// Redact and timestamp. Never fails; empty input yields empty content.
    pub fn apply(&self, raw_text: &str) -> FilteredEvent {
        FilteredEvent {
            content: self.redact(raw_text),
            timestamp: self.clock.now_millis(),
        }
    }

    /// Redaction without the timestamp. A single pass suffices: construction
    /// guarantees no phrase can overlap or contain an inserted marker.
    pub fn redact(&self, raw_text: &str) -> String {
        let Some(re) = &self.pattern else {
            return raw_text.to_string();
        };
        let redacted = re.replace_all(raw_text, NoExpand(&self.marker));
        if matches!(redacted, Cow::Owned(_)) {
            tracing::debug!("TextFilter: redacted {} phrase(s)", re.find_iter(raw_text).count());
        }
        redacted.into_owned()
    }
}

/// Describes how `marker` could produce or hide `phrase` once spliced into
/// surrounding text, or `None` when it cannot.
fn marker_overlap(marker: &str, phrase: &str) -> Option<&'static str> {
    if marker.contains(phrase) {
        return Some("contains");
    }
    if phrase.contains(marker) {
        return Some("is contained in");
    }
    let inner = marker.char_indices().skip(1).map(|(i, _)| i);
    for i in inner {
        if phrase.starts_with(&marker[i..]) {
            return Some("ends with a prefix of");
        }
        if phrase.ends_with(&marker[..i]) {
            return Some("starts with a suffix of");
        }
    }
    None
}
