//! Token alignment algorithms
//!
//! An algorithm takes the tokens of a left and a right line and classifies
//! every token as `same`, `added` or `removed`, returning merged segments for
//! each side.
pub mod lcs;

pub use lcs::LcsAlgorithm;

use crate::diff::{push_merged, Classification, Segment};
use crate::tokenizers::Token;

/// Segments produced for one aligned line pair
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Alignment {
    pub left: Vec<Segment>,
    pub right: Vec<Segment>,
}

impl Alignment {
    /// Alignment of two empty lines: one empty `same` segment per side
    pub fn empty() -> Self {
        Self {
            left: vec![Segment::same("")],
            right: vec![Segment::same("")],
        }
    }
}

/// Trait for token alignment algorithms
pub trait DiffAlgorithm: Send + Sync {
    /// Align two token sequences
    fn align(&self, left: &[Token], right: &[Token]) -> Alignment;

    /// Get the name of this algorithm
    fn name(&self) -> &str;
}

/// A single classified token emitted while walking an alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Edit<'a> {
    pub text: &'a str,
    pub classification: Classification,
}

/// Merge per-token edits (already in line order) into segments
pub(crate) fn merge_edits(edits: &[Edit<'_>]) -> Vec<Segment> {
    let mut segments: Vec<Segment> = Vec::new();
    for edit in edits {
        push_merged(&mut segments, edit.text, edit.classification);
    }
    segments
}
