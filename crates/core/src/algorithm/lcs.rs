use crate::algorithm::{merge_edits, Alignment, DiffAlgorithm, Edit};
use crate::diff::Classification;
use crate::tokenizers::Token;

/// Longest-common-subsequence alignment over tokens.
///
/// Builds the full `(m + 1) x (n + 1)` length table and walks it back from the
/// bottom-right corner. When skipping a token from either side would keep the
/// same LCS length, the right-side token is consumed first, so ties surface as
/// `added` before `removed` in the backward walk.
#[derive(Debug, Clone, Default)]
pub struct LcsAlgorithm;

impl LcsAlgorithm {
    pub fn new() -> Self {
        Self
    }
}

impl DiffAlgorithm for LcsAlgorithm {
    fn align(&self, left: &[Token], right: &[Token]) -> Alignment {
        if left.is_empty() && right.is_empty() {
            return Alignment::empty();
        }

        let table = lcs_table(left, right);
        let (left_edits, right_edits) = backtrack(&table, left, right);

        Alignment {
            left: merge_edits(&left_edits),
            right: merge_edits(&right_edits),
        }
    }

    fn name(&self) -> &str {
        "lcs"
    }
}

/// Row-major LCS length table with `right.len() + 1` columns
struct LcsTable {
    cells: Vec<usize>,
    cols: usize,
}

impl LcsTable {
    fn get(&self, i: usize, j: usize) -> usize {
        self.cells[i * self.cols + j]
    }
}

fn lcs_table(left: &[Token], right: &[Token]) -> LcsTable {
    let m = left.len();
    let n = right.len();
    let cols = n + 1;
    let mut cells = vec![0usize; (m + 1) * cols];

    for i in 1..=m {
        for j in 1..=n {
            cells[i * cols + j] = if left[i - 1].matches(&right[j - 1]) {
                cells[(i - 1) * cols + (j - 1)] + 1
            } else {
                cells[(i - 1) * cols + j].max(cells[i * cols + (j - 1)])
            };
        }
    }

    LcsTable { cells, cols }
}

/// Walk the table from `(m, n)` to `(0, 0)` and return per-side edits in line
/// order.
fn backtrack<'a>(
    table: &LcsTable,
    left: &'a [Token],
    right: &'a [Token],
) -> (Vec<Edit<'a>>, Vec<Edit<'a>>) {
    let mut left_edits = Vec::with_capacity(left.len());
    let mut right_edits = Vec::with_capacity(right.len());
    let mut i = left.len();
    let mut j = right.len();

    while i > 0 || j > 0 {
        if i > 0 && j > 0 && left[i - 1].matches(&right[j - 1]) {
            left_edits.push(Edit {
                text: &left[i - 1].text,
                classification: Classification::Same,
            });
            right_edits.push(Edit {
                text: &right[j - 1].text,
                classification: Classification::Same,
            });
            i -= 1;
            j -= 1;
        } else if j > 0 && (i == 0 || table.get(i, j - 1) >= table.get(i - 1, j)) {
            right_edits.push(Edit {
                text: &right[j - 1].text,
                classification: Classification::Added,
            });
            j -= 1;
        } else {
            left_edits.push(Edit {
                text: &left[i - 1].text,
                classification: Classification::Removed,
            });
            i -= 1;
        }
    }

    left_edits.reverse();
    right_edits.reverse();
    (left_edits, right_edits)
}
