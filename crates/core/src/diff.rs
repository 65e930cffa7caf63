//! Comparison result types

use serde::{Deserialize, Serialize};
use std::fmt;

/// How a segment relates to the other side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    /// Present on both sides
    Same,
    /// Only on the right side
    Added,
    /// Only on the left side
    Removed,
}

impl Classification {
    pub fn as_str(&self) -> &'static str {
        match self {
            Classification::Same => "same",
            Classification::Added => "added",
            Classification::Removed => "removed",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A maximal run of equally classified tokens on one side of a line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub text: String,
    pub classification: Classification,
}

impl Segment {
    pub fn new(text: impl Into<String>, classification: Classification) -> Self {
        Self {
            text: text.into(),
            classification,
        }
    }

    pub fn same(text: impl Into<String>) -> Self {
        Self::new(text, Classification::Same)
    }

    pub fn added(text: impl Into<String>) -> Self {
        Self::new(text, Classification::Added)
    }

    pub fn removed(text: impl Into<String>) -> Self {
        Self::new(text, Classification::Removed)
    }

    pub fn is_change(&self) -> bool {
        self.classification != Classification::Same
    }
}

/// Append `text` to `segments`, extending the last segment when it carries
/// the same classification.
pub(crate) fn push_merged(segments: &mut Vec<Segment>, text: &str, classification: Classification) {
    match segments.last_mut() {
        Some(last) if last.classification == classification => last.text.push_str(text),
        _ => segments.push(Segment::new(text, classification)),
    }
}

/// Aligned segments for one line index
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineDiff {
    /// Zero-based line index
    pub index: usize,

    pub left: Vec<Segment>,

    pub right: Vec<Segment>,

    /// Whether the raw left and right lines differ
    pub has_difference: bool,
}

impl LineDiff {
    /// Concatenated text of the left segments
    pub fn left_text(&self) -> String {
        self.left.iter().map(|s| s.text.as_str()).collect()
    }

    /// Concatenated text of the right segments
    pub fn right_text(&self) -> String {
        self.right.iter().map(|s| s.text.as_str()).collect()
    }

    /// Render one side with inline change markers: `[-removed-]`, `{+added+}`
    pub fn render_marked(&self, segments: &[Segment]) -> String {
        let mut out = String::new();
        for segment in segments {
            match segment.classification {
                Classification::Same => out.push_str(&segment.text),
                Classification::Removed => {
                    out.push_str("[-");
                    out.push_str(&segment.text);
                    out.push_str("-]");
                }
                Classification::Added => {
                    out.push_str("{+");
                    out.push_str(&segment.text);
                    out.push_str("+}");
                }
            }
        }
        out
    }
}

/// Totals derived from a comparison
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffStatistics {
    /// Number of line indices compared
    pub lines: usize,

    /// Number of lines whose raw text differs
    pub differing_lines: usize,

    /// Bytes of text marked `added` on the right
    pub added_bytes: usize,

    /// Bytes of text marked `removed` on the left
    pub removed_bytes: usize,

    /// Bytes of text marked `same` on the left
    pub unchanged_bytes: usize,
}

/// Complete line-by-line comparison of two texts
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub lines: Vec<LineDiff>,
}

impl ComparisonResult {
    pub fn new(lines: Vec<LineDiff>) -> Self {
        Self { lines }
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Number of line indices flagged as different
    pub fn differing_lines(&self) -> usize {
        self.lines.iter().filter(|l| l.has_difference).count()
    }

    pub fn is_identical(&self) -> bool {
        self.lines.iter().all(|l| !l.has_difference)
    }

    /// Indices of the lines that differ
    pub fn differing_indices(&self) -> Vec<usize> {
        self.lines
            .iter()
            .filter(|l| l.has_difference)
            .map(|l| l.index)
            .collect()
    }

    pub fn statistics(&self) -> DiffStatistics {
        let mut stats = DiffStatistics {
            lines: self.line_count(),
            differing_lines: self.differing_lines(),
            ..Default::default()
        };

        for line in &self.lines {
            for segment in &line.left {
                match segment.classification {
                    Classification::Same => stats.unchanged_bytes += segment.text.len(),
                    Classification::Removed => stats.removed_bytes += segment.text.len(),
                    Classification::Added => {}
                }
            }
            stats.added_bytes += line
                .right
                .iter()
                .filter(|s| s.classification == Classification::Added)
                .map(|s| s.text.len())
                .sum::<usize>();
        }

        stats
    }

    /// Get a summary of the comparison
    pub fn summary(&self) -> String {
        format!(
            "{} of {} lines differ",
            self.differing_lines(),
            self.line_count()
        )
    }
}

impl fmt::Display for ComparisonResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            if line.has_difference {
                writeln!(f, "{:>4} - {}", line.index + 1, line.render_marked(&line.left))?;
                writeln!(f, "{:>4} + {}", line.index + 1, line.render_marked(&line.right))?;
            } else {
                writeln!(f, "{:>4}   {}", line.index + 1, line.left_text())?;
            }
        }
        write!(f, "{}", self.summary())
    }
}
