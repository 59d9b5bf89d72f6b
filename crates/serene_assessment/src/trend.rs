use crate::emotion::mean_intensity;
use serene_core::config::DEFAULT_TREND_WINDOW;
use serene_core::{ScoredEvent, SereneError, SereneResult};
use std::collections::VecDeque;

/// Bounded recent-history buffer of scored events.
///
/// Oldest events are evicted first once capacity is reached.
#[derive(Debug, Clone)]
pub struct TrendAggregator {
    history: VecDeque<ScoredEvent>,
    capacity: usize,
}

impl Default for TrendAggregator {
    fn default() -> Self {
        Self {
            history: VecDeque::with_capacity(DEFAULT_TREND_WINDOW),
            capacity: DEFAULT_TREND_WINDOW,
        }
    }
}

impl TrendAggregator {
    pub fn new(capacity: usize) -> SereneResult<Self> {
        if capacity == 0 {
            return Err(SereneError::Validation(
                "trend window must hold at least one event".to_string(),
            ));
        }
        Ok(Self {
            history: VecDeque::with_capacity(capacity),
            capacity,
        })
    }

    /// Append an event, returning the evicted one if the buffer was full.
    pub fn push(&mut self, event: ScoredEvent) -> Option<ScoredEvent> {
        let evicted = if self.history.len() >= self.capacity {
            self.history.pop_front()
        } else {
            None
        };
        self.history.push_back(event);
        evicted
    }

    pub fn rolling_average(&self) -> f32 {
        mean_intensity(&self.history, self.capacity)
    }

    pub fn history(&self) -> impl DoubleEndedIterator<Item = &ScoredEvent> + '_ {
        self.history.iter()
    }

    pub fn latest(&self) -> Option<&ScoredEvent> {
        self.history.back()
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(content: &str, intensity: f32) -> ScoredEvent {
        ScoredEvent::new(content, 0, intensity).unwrap()
    }

    #[test]
    fn test_empty_average_is_zero() {
        let trend = TrendAggregator::default();
        assert!(trend.is_empty());
        assert_eq!(trend.rolling_average(), 0.0);
    }

    #[test]
    fn test_evicts_oldest_first() {
        let mut trend = TrendAggregator::new(3).unwrap();
        assert!(trend.push(event("a", 0.1)).is_none());
        assert!(trend.push(event("b", 0.2)).is_none());
        assert!(trend.push(event("c", 0.3)).is_none());
        let evicted = trend.push(event("d", 0.4)).unwrap();
        assert_eq!(evicted.content, "a");

        let contents: Vec<&str> = trend.history().map(|e| e.content.as_str()).collect();
        assert_eq!(contents, vec!["b", "c", "d"]);
        assert_eq!(trend.len(), 3);
        assert_eq!(trend.latest().unwrap().content, "d");
    }

    #[test]
    fn test_average_over_default_window() {
        let mut trend = TrendAggregator::default();
        for _ in 0..5 {
            trend.push(event("high", 1.0));
        }
        for _ in 0..7 {
            trend.push(event("low", 0.0));
        }
        assert_eq!(trend.len(), 7);
        assert_eq!(trend.rolling_average(), 0.0);
    }

    #[test]
    fn test_zero_capacity_rejected() {
        assert!(TrendAggregator::new(0).is_err());
    }
}
