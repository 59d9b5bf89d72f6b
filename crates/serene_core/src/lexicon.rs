//! Built-in word lists and cognitive-distortion patterns.
//!
//! Everything here is data: the defaults can be overridden wholesale through
//! `SereneConfig`. Category and term order is preserved because downstream
//! scanners report findings in registration order.

use serde::{Deserialize, Serialize};

pub const POSITIVE: &str = "positive";
pub const NEGATIVE: &str = "negative";
pub const NEUTRAL: &str = "neutral";

const POSITIVE_TERMS: &[&str] = &["希望", "平静", "成就感"];
const NEGATIVE_TERMS: &[&str] = &["焦虑", "疲惫", "自我怀疑"];
const NEUTRAL_TERMS: &[&str] = &["例行", "观察", "等待"];

pub(crate) const FILTER_BLACKLIST: &[&str] = &["未来焦虑", "他人期待", "完美主义"];
pub(crate) const FILTER_WHITELIST: &[&str] = &["当下", "可控", "具体"];

pub(crate) const BASE_ACHIEVEMENTS: &[&str] = &["呼吸√", "饮水√", "眨眼√"];
pub(crate) const BRONZE_REWARDS: &[&str] = &["5分钟散步", "听1首歌"];
pub(crate) const SILVER_REWARDS: &[&str] = &["看云10分钟", "泡茶仪式"];
pub(crate) const GOLD_REWARDS: &[&str] = &["艺术创作", "自然沉浸"];

pub(crate) const STRESS_MOODS: &[&str] = &["平静", "烦躁", "期待", "倦怠"];

/// Bias label and regex, in the order they are registered with the scanner.
const BIAS_PATTERNS: &[(&str, &str)] = &[
    ("灾难化思维", "永远|绝对无法|彻底完蛋"),
    ("过度概括", "总是|从不|每个人"),
    // Character class, not an alternation: 只 followed by any one of 记得|关注.
    ("心理过滤", "只[记得|关注]"),
];

pub(crate) fn owned(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

/// One category and its trigger terms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexiconEntry {
    pub category: String,
    pub terms: Vec<String>,
}

impl LexiconEntry {
    pub fn new(category: &str, terms: &[&str]) -> Self {
        Self {
            category: category.to_string(),
            terms: owned(terms),
        }
    }
}

/// Ordered category → terms mapping. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<LexiconEntry>", into = "Vec<LexiconEntry>")]
pub struct Lexicon {
    entries: Vec<LexiconEntry>,
}

impl Lexicon {
    /// Build from entries. Later duplicates of a category are merged into the
    /// first occurrence so lookups stay unambiguous.
    pub fn new(entries: Vec<LexiconEntry>) -> Self {
        let mut merged: Vec<LexiconEntry> = Vec::with_capacity(entries.len());
        for entry in entries {
            match merged.iter_mut().find(|e| e.category == entry.category) {
                Some(existing) => {
                    for term in entry.terms {
                        if !existing.terms.contains(&term) {
                            existing.terms.push(term);
                        }
                    }
                }
                None => merged.push(entry),
            }
        }
        Self { entries: merged }
    }

    pub fn default_emotions() -> Self {
        Self::new(vec![
            LexiconEntry::new(POSITIVE, POSITIVE_TERMS),
            LexiconEntry::new(NEGATIVE, NEGATIVE_TERMS),
            LexiconEntry::new(NEUTRAL, NEUTRAL_TERMS),
        ])
    }

    pub fn entries(&self) -> &[LexiconEntry] {
        &self.entries
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.category.as_str())
    }

    /// Terms for a category, or an empty slice if it is unknown.
    pub fn terms(&self, category: &str) -> &[String] {
        self.entries
            .iter()
            .find(|e| e.category == category)
            .map(|e| e.terms.as_slice())
            .unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.entries.iter().all(|e| e.terms.is_empty())
    }
}

impl From<Vec<LexiconEntry>> for Lexicon {
    fn from(entries: Vec<LexiconEntry>) -> Self {
        Self::new(entries)
    }
}

impl From<Lexicon> for Vec<LexiconEntry> {
    fn from(lexicon: Lexicon) -> Self {
        lexicon.entries
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::default_emotions()
    }
}

/// A named cognitive-distortion regex as it appears in configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BiasPatternSpec {
    pub bias_type: String,
    pub pattern: String,
}

impl BiasPatternSpec {
    pub fn defaults() -> Vec<Self> {
        BIAS_PATTERNS
            .iter()
            .map(|(bias_type, pattern)| Self {
                bias_type: bias_type.to_string(),
                pattern: pattern.to_string(),
            })
            .collect()
    }
}
