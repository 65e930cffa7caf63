//! # textbench
//!
//! Pure, synchronous text utilities: a word-level text comparer, word and
//! character statistics, and a set of composable text transforms.
//!
//! ## Core Concepts
//!
//! - **Tokenizers**: Split a line into whitespace and non-whitespace runs
//! - **DiffAlgorithm**: Align two token sequences (longest common subsequence)
//! - **CompareEngine**: Pair lines by position and align each pair
//! - **Transforms**: Text tools such as case conversion or line-break removal
//! - **Pipelines**: Chain transforms, recording every intermediate text
//!
//! ## Example
//!
//! ```rust
//! use textbench_core::{compare, Classification};
//!
//! let result = compare("the quick fox", "the slow fox");
//! let line = &result.lines[0];
//!
//! assert!(line.has_difference);
//! assert_eq!(line.left[1].classification, Classification::Removed);
//! assert_eq!(line.right[1].text, "slow");
//! ```

pub mod algorithm;
pub mod config;
pub mod diff;
pub mod engine;
pub mod error;
pub mod metrics;
pub mod pipeline;
pub mod tokenizers;
pub mod transforms;

// Re-export main types
pub use config::{CompareConfig, Granularity, ToolConfig};
pub use diff::{Classification, ComparisonResult, DiffStatistics, LineDiff, Segment};
pub use engine::CompareEngine;
pub use error::{Result, TextError};
pub use metrics::{CountOptions, TextMetrics};
pub use pipeline::{LayerSet, TextPipeline};

/// Compare two texts line by line with the default configuration
///
/// # Arguments
///
/// * `left` - The original text
/// * `right` - The changed text
///
/// # Returns
///
/// One `LineDiff` per line index up to the longer text's line count
///
/// # Example
///
/// ```rust
/// use textbench_core::compare;
///
/// let result = compare("a\nb", "a\nc");
/// assert_eq!(result.summary(), "1 of 2 lines differ");
/// ```
pub fn compare(left: &str, right: &str) -> ComparisonResult {
    CompareEngine::default().compare(left, right)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_compare() {
        let result = compare("hello world", "hello rust");
        assert_eq!(result.line_count(), 1);
        assert_eq!(result.differing_lines(), 1);
    }

    #[test]
    fn test_identical_multiline() {
        let text = "one\ntwo\n";
        let result = compare(text, text);
        // trailing newline yields a final empty line
        assert_eq!(result.line_count(), 3);
        assert!(result.is_identical());
        assert_eq!(result.lines[2].left, vec![Segment::same("")]);
    }

    #[test]
    fn test_result_serializes() {
        let result = compare("a b", "a c");
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["lines"][0]["has_difference"], true);
        assert_eq!(json["lines"][0]["right"][1]["classification"], "added");

        let back: ComparisonResult = serde_json::from_value(json).unwrap();
        assert_eq!(back, result);
    }
}
