//! Compare engine that pairs lines and aligns them token by token

use crate::algorithm::{Alignment, DiffAlgorithm, LcsAlgorithm};
use crate::config::CompareConfig;
use crate::diff::{ComparisonResult, LineDiff};
use crate::error::{Result, Side, TextError};
use crate::tokenizers::Tokenizer;

/// The main compare engine
pub struct CompareEngine {
    config: CompareConfig,
    tokenizer: Box<dyn Tokenizer>,
    algorithm: Box<dyn DiffAlgorithm>,
}

impl CompareEngine {
    /// Create a new compare engine with the given configuration
    pub fn new(config: CompareConfig) -> Self {
        let tokenizer = config.granularity.tokenizer();
        Self {
            config,
            tokenizer,
            algorithm: Box::new(LcsAlgorithm::new()),
        }
    }

    /// Replace the alignment algorithm
    pub fn with_algorithm(mut self, algorithm: Box<dyn DiffAlgorithm>) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn config(&self) -> &CompareConfig {
        &self.config
    }

    /// Compare two texts line by line.
    ///
    /// Both texts are split on `'\n'` and paired by position. A side with
    /// fewer lines contributes empty strings for the missing indices. Lines
    /// are never re-aligned across indices, so an inserted line shifts every
    /// following pair.
    pub fn compare(&self, left: &str, right: &str) -> ComparisonResult {
        let left_lines: Vec<&str> = left.split('\n').collect();
        let right_lines: Vec<&str> = right.split('\n').collect();
        let line_count = left_lines.len().max(right_lines.len());

        let lines: Vec<LineDiff> = (0..line_count)
            .map(|index| {
                let left_line = left_lines.get(index).copied().unwrap_or("");
                let right_line = right_lines.get(index).copied().unwrap_or("");
                self.compare_line(index, left_line, right_line)
            })
            .collect();

        let result = ComparisonResult::new(lines);
        tracing::debug!(
            lines = result.line_count(),
            differing = result.differing_lines(),
            tokenizer = self.tokenizer.name(),
            "compared texts"
        );
        result
    }

    /// Compare after enforcing `max_input_bytes` on both sides
    pub fn compare_checked(&self, left: &str, right: &str) -> Result<ComparisonResult> {
        if let Some(limit) = self.config.max_input_bytes {
            for (side, text) in [(Side::Left, left), (Side::Right, right)] {
                if text.len() > limit {
                    tracing::warn!(%side, len = text.len(), limit, "input exceeds compare limit");
                    return Err(TextError::InputTooLarge {
                        side,
                        len: text.len(),
                        limit,
                    });
                }
            }
        }

        Ok(self.compare(left, right))
    }

    /// Align a single pair of lines
    pub fn compare_line(&self, index: usize, left: &str, right: &str) -> LineDiff {
        let left_tokens = self.tokenizer.tokenize(left);
        let right_tokens = self.tokenizer.tokenize(right);
        let Alignment {
            left: left_segments,
            right: right_segments,
        } = self.algorithm.align(&left_tokens, &right_tokens);

        tracing::trace!(
            index,
            left_tokens = left_tokens.len(),
            right_tokens = right_tokens.len(),
            "aligned line"
        );

        LineDiff {
            index,
            left: left_segments,
            right: right_segments,
            has_difference: left != right,
        }
    }
}

impl Default for CompareEngine {
    fn default() -> Self {
        Self::new(CompareConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Granularity;
    use crate::diff::{Classification, Segment};

    fn assert_merged(segments: &[Segment]) {
        for pair in segments.windows(2) {
            assert_ne!(pair[0].classification, pair[1].classification);
        }
    }

    #[test]
    fn test_identity() {
        let engine = CompareEngine::default();
        let text = "first line\n  indented\tline \n\nlast";
        let result = engine.compare(text, text);

        assert_eq!(result.line_count(), 4);
        for (line, original) in result.lines.iter().zip(text.split('\n')) {
            assert!(!line.has_difference);
            assert_eq!(line.left, line.right);
            if original.is_empty() {
                assert_eq!(line.left, vec![Segment::same("")]);
            } else {
                assert_eq!(line.left, vec![Segment::same(original)]);
            }
        }
        assert!(result.is_identical());
    }

    #[test]
    fn test_empty_input() {
        let result = CompareEngine::default().compare("", "");
        assert_eq!(result.line_count(), 1);
        assert_eq!(result.lines[0].left, vec![Segment::same("")]);
        assert_eq!(result.lines[0].right, vec![Segment::same("")]);
        assert!(!result.lines[0].has_difference);
    }

    #[test]
    fn test_lines_pair_by_position() {
        let result = CompareEngine::default().compare("a\nb", "a\nx\nb");

        assert_eq!(result.line_count(), 3);
        assert!(!result.lines[0].has_difference);
        assert!(result.lines[1].has_difference);
        assert_eq!(result.lines[1].left, vec![Segment::removed("b")]);
        assert_eq!(result.lines[1].right, vec![Segment::added("x")]);
        assert!(result.lines[2].has_difference);
        assert!(result.lines[2].left.is_empty());
        assert_eq!(result.lines[2].right, vec![Segment::added("b")]);
        assert_eq!(result.differing_indices(), vec![1, 2]);
    }

    #[test]
    fn test_token_level_example() {
        let result = CompareEngine::default().compare("the quick fox", "the slow fox");
        let line = &result.lines[0];
        assert_eq!(
            line.left,
            vec![
                Segment::same("the "),
                Segment::removed("quick"),
                Segment::same(" fox"),
            ]
        );
        assert_eq!(
            line.right,
            vec![
                Segment::same("the "),
                Segment::added("slow"),
                Segment::same(" fox"),
            ]
        );
    }

    #[test]
    fn test_reconstruction_and_merge() {
        let engine = CompareEngine::default();
        let left = "alpha beta  gamma\nshared line\n trailing ";
        let right = "alpha gamma delta\nshared  line\n\nextra";
        let result = engine.compare(left, right);

        let left_lines: Vec<&str> = left.split('\n').collect();
        let right_lines: Vec<&str> = right.split('\n').collect();
        for line in &result.lines {
            assert_eq!(line.left_text(), left_lines.get(line.index).copied().unwrap_or(""));
            assert_eq!(line.right_text(), right_lines.get(line.index).copied().unwrap_or(""));
            assert_merged(&line.left);
            assert_merged(&line.right);
            assert!(line.left.iter().all(|s| s.classification != Classification::Added));
            assert!(line.right.iter().all(|s| s.classification != Classification::Removed));
        }
    }

    #[test]
    fn test_symmetry_of_detection() {
        let engine = CompareEngine::default();
        let a = "one two\nthree\nfour five six";
        let b = "one two\nthree!\nfour six\nseven";

        let forward = engine.compare(a, b);
        let backward = engine.compare(b, a);
        assert_eq!(forward.differing_indices(), backward.differing_indices());

        let flipped: Vec<Classification> = backward.lines[2]
            .right
            .iter()
            .map(|s| s.classification)
            .collect();
        assert!(flipped.contains(&Classification::Added));
        assert!(forward.lines[2]
            .left
            .iter()
            .any(|s| s.classification == Classification::Removed));
    }

    #[test]
    fn test_carriage_returns_are_content() {
        let result = CompareEngine::default().compare("a\r\nb", "a\nb");
        assert!(result.lines[0].has_difference);
        assert!(!result.lines[1].has_difference);
    }

    #[test]
    fn test_char_granularity() {
        let engine = CompareEngine::new(CompareConfig::new().with_granularity(Granularity::Char));
        let result = engine.compare("colour", "color");
        assert_eq!(
            result.lines[0].left,
            vec![Segment::same("colo"), Segment::removed("u"), Segment::same("r")]
        );
        assert_eq!(result.lines[0].right, vec![Segment::same("color")]);
    }

    #[test]
    fn test_compare_checked_limit() {
        let engine = CompareEngine::new(CompareConfig::new().with_max_input_bytes(5));

        assert!(engine.compare_checked("12345", "abc").is_ok());

        let err = engine.compare_checked("12345", "abcdef").unwrap_err();
        assert!(matches!(
            err,
            TextError::InputTooLarge {
                side: Side::Right,
                len: 6,
                limit: 5
            }
        ));
    }

    #[test]
    fn test_compare_checked_without_limit() {
        let engine = CompareEngine::default();
        let big = "word ".repeat(50);
        assert_eq!(
            engine.compare_checked(&big, &big).unwrap(),
            engine.compare(&big, &big)
        );
    }
}
