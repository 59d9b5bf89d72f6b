//! Lexicon-based emotion scoring.
//!
//! Two heuristics live here: the rolling mean of reported intensities over a
//! bounded window, and the journal "balance" ratio from lexicon hits. Neither
//! is a validated psychological model; both are reproduced exactly.

use serene_core::config::DEFAULT_TREND_WINDOW;
use serene_core::lexicon::{NEUTRAL, POSITIVE};
use serene_core::{Lexicon, ScoredEvent, SereneError, SereneResult};

/// Balance reported when no lexicon term is present.
pub const NEUTRAL_BALANCE: f32 = 0.5;

/// Mean intensity over at most the last `window` events; 0 for no events.
pub fn mean_intensity<'a, I>(history: I, window: usize) -> f32
where
    I: IntoIterator<Item = &'a ScoredEvent>,
    I::IntoIter: DoubleEndedIterator,
{
    let (sum, count) = history
        .into_iter()
        .rev()
        .take(window)
        .fold((0.0f64, 0usize), |(sum, n), e| (sum + e.intensity as f64, n + 1));
    if count == 0 {
        0.0
    } else {
        (sum / count as f64) as f32
    }
}

#[derive(Debug, Clone)]
pub struct EmotionScorer {
    lexicon: Lexicon,
    window: usize,
}

impl Default for EmotionScorer {
    fn default() -> Self {
        Self {
            lexicon: Lexicon::default_emotions(),
            window: DEFAULT_TREND_WINDOW,
        }
    }
}

impl EmotionScorer {
    pub fn new(lexicon: Lexicon, window: usize) -> SereneResult<Self> {
        if window == 0 {
            return Err(SereneError::Validation(
                "emotion window must hold at least one event".to_string(),
            ));
        }
        Ok(Self { lexicon, window })
    }

    pub fn window(&self) -> usize {
        self.window
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Mean intensity of the most recent events (FIFO window). Does not
    /// mutate the history.
    pub fn score<'a, I>(&self, history: I) -> f32
    where
        I: IntoIterator<Item = &'a ScoredEvent>,
        I::IntoIter: DoubleEndedIterator,
    {
        mean_intensity(history, self.window)
    }

    /// Number of distinct terms per category present in `text`, in lexicon order.
    pub fn category_counts(&self, text: &str) -> Vec<(&str, usize)> {
        self.lexicon
            .entries()
            .iter()
            .map(|entry| {
                let hits = entry
                    .terms
                    .iter()
                    .filter(|t| !t.is_empty() && text.contains(t.as_str()))
                    .count();
                (entry.category.as_str(), hits)
            })
            .collect()
    }

    /// `(positive + 0.5 * neutral) / total` over lexicon hits, or 0.5 when
    /// nothing matched.
    pub fn balance(&self, text: &str) -> f32 {
        let counts = self.category_counts(text);
        let total: usize = counts.iter().map(|(_, n)| n).sum();
        if total == 0 {
            return NEUTRAL_BALANCE;
        }
        let hits_for = |category: &str| {
            counts
                .iter()
                .find(|(c, _)| *c == category)
                .map_or(0, |(_, n)| *n)
        };
        let positive = hits_for(POSITIVE) as f64;
        let neutral = hits_for(NEUTRAL) as f64;
        let balance = ((positive + 0.5 * neutral) / total as f64) as f32;
        tracing::debug!("EmotionScorer: {} lexicon hit(s), balance {:.3}", total, balance);
        balance.clamp(0.0, 1.0)
    }
}
