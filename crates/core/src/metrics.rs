//! Text statistics for the word and character counters

use crate::error::{Result, TextError};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

const STOPWORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "been", "but", "by", "for", "from", "has", "have",
    "he", "i", "in", "is", "it", "its", "of", "on", "or", "she", "that", "the", "they", "this",
    "to", "was", "we", "were", "will", "with", "you",
];

/// Reading and speaking rates used for the time estimates
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CountOptions {
    pub words_per_minute: u32,
    pub speaking_words_per_minute: u32,
}

impl Default for CountOptions {
    fn default() -> Self {
        Self {
            words_per_minute: 200,
            speaking_words_per_minute: 130,
        }
    }
}

impl CountOptions {
    pub(crate) fn validate(&self) -> Result<()> {
        if self.words_per_minute == 0 || self.speaking_words_per_minute == 0 {
            return Err(TextError::invalid_config(
                "count rates must be greater than zero",
            ));
        }
        Ok(())
    }
}

/// Counts computed for a single text
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextMetrics {
    // Basic counts
    pub characters: usize,
    pub characters_no_spaces: usize,
    pub words: usize,
    pub sentences: usize,
    pub paragraphs: usize,
    pub lines: usize,

    // Derived metrics
    pub average_word_length: f64,
    pub reading_time_secs: u64,
    pub speaking_time_secs: u64,
}

impl TextMetrics {
    /// Compute all metrics with the default reading rates
    pub fn compute(text: &str) -> Self {
        Self::compute_with(text, &CountOptions::default())
    }

    /// Compute all metrics for a given text
    pub fn compute_with(text: &str, options: &CountOptions) -> Self {
        let characters = text.chars().count();
        let characters_no_spaces = text.chars().filter(|c| !c.is_whitespace()).count();

        let words: Vec<&str> = text.split_whitespace().collect();
        let word_count = words.len();

        let average_word_length = if word_count > 0 {
            words.iter().map(|w| w.chars().count()).sum::<usize>() as f64 / word_count as f64
        } else {
            0.0
        };

        let lines = if text.is_empty() {
            0
        } else {
            text.matches('\n').count() + 1
        };

        Self {
            characters,
            characters_no_spaces,
            words: word_count,
            sentences: count_sentences(text),
            paragraphs: count_paragraphs(text),
            lines,
            average_word_length,
            reading_time_secs: minutes_to_secs(word_count, options.words_per_minute),
            speaking_time_secs: minutes_to_secs(word_count, options.speaking_words_per_minute),
        }
    }
}

/// Most frequent words, lowercased and stripped of surrounding punctuation,
/// excluding stop words. Ties are ordered alphabetically.
pub fn top_keywords(text: &str, limit: usize) -> Vec<(String, usize)> {
    let mut counts: HashMap<String, usize> = HashMap::new();

    for word in text.split_whitespace() {
        let cleaned = word
            .trim_matches(|c: char| !c.is_alphanumeric())
            .to_lowercase();
        if cleaned.is_empty() || STOPWORDS.contains(&cleaned.as_str()) {
            continue;
        }
        *counts.entry(cleaned).or_insert(0) += 1;
    }

    let mut ranked: Vec<(String, usize)> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked.truncate(limit);
    ranked
}

// ============================================================================
// Helper Functions
// ============================================================================

fn count_sentences(text: &str) -> usize {
    let mut sentences = 0;
    let mut has_word = false;

    for ch in text.chars() {
        if matches!(ch, '.' | '!' | '?') {
            // "?!" and "..." close a single sentence
            if has_word {
                sentences += 1;
                has_word = false;
            }
        } else if !ch.is_whitespace() {
            has_word = true;
        }
    }

    if has_word {
        sentences += 1;
    }

    sentences
}

fn count_paragraphs(text: &str) -> usize {
    let mut paragraphs = 0;
    let mut in_paragraph = false;

    for line in text.lines() {
        if line.trim().is_empty() {
            in_paragraph = false;
        } else if !in_paragraph {
            paragraphs += 1;
            in_paragraph = true;
        }
    }

    paragraphs
}

fn minutes_to_secs(words: usize, per_minute: u32) -> u64 {
    if per_minute == 0 {
        return 0;
    }
    (words as u64 * 60).div_ceil(per_minute as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_metrics() {
        let text = "The cat sat on the mat. It was happy!\n\nA second paragraph";
        let metrics = TextMetrics::compute(text);

        assert_eq!(metrics.words, 12);
        assert_eq!(metrics.sentences, 3);
        assert_eq!(metrics.paragraphs, 2);
        assert_eq!(metrics.lines, 3);
        assert_eq!(metrics.characters, text.chars().count());
        assert_eq!(
            metrics.characters_no_spaces,
            text.chars().filter(|c| !c.is_whitespace()).count()
        );
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(TextMetrics::compute(""), TextMetrics::default());
    }

    #[test]
    fn test_unicode_counts_scalars() {
        let metrics = TextMetrics::compute("héllo wörld");
        assert_eq!(metrics.characters, 11);
        assert_eq!(metrics.characters_no_spaces, 10);
        assert_eq!(metrics.average_word_length, 5.0);
    }

    #[test]
    fn test_sentence_punctuation_runs() {
        assert_eq!(count_sentences("Really?! Yes... fine"), 3);
        assert_eq!(count_sentences("..."), 0);
    }

    #[test]
    fn test_reading_time_rounds_up() {
        let text = "word ".repeat(201);
        let metrics = TextMetrics::compute(&text);
        assert_eq!(metrics.reading_time_secs, 61);

        let options = CountOptions {
            words_per_minute: 100,
            speaking_words_per_minute: 50,
        };
        let metrics = TextMetrics::compute_with("one two three four five", &options);
        assert_eq!(metrics.reading_time_secs, 3);
        assert_eq!(metrics.speaking_time_secs, 6);
    }

    #[test]
    fn test_top_keywords() {
        let keywords = top_keywords("Rust is fast. Rust is safe, and rust is fun; fast!", 2);
        assert_eq!(
            keywords,
            vec![("rust".to_string(), 3), ("fast".to_string(), 2)]
        );
    }

    #[test]
    fn test_top_keywords_ties_alphabetical() {
        let keywords = top_keywords("zeta alpha beta", 10);
        let words: Vec<&str> = keywords.iter().map(|(w, _)| w.as_str()).collect();
        assert_eq!(words, vec!["alpha", "beta", "zeta"]);
    }
}
