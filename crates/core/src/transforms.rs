//! Text transforms
//!
//! Provides the `Transform` trait and the built-in text tools: case
//! conversion, line-break and whitespace cleanup, character removal and
//! line-level operations. Every transform is a pure `&str -> String` mapping.

use crate::error::{Result, TextError};
use std::collections::HashSet;
use std::sync::Arc;
use unicode_normalization::UnicodeNormalization;

/// Trait for text transforms
pub trait Transform: Send + Sync {
    /// Transform the input text
    fn apply(&self, input: &str) -> String;

    /// Get the registry name of this transform
    fn name(&self) -> &str;

    /// Get metadata about this transform (e.g., configuration)
    fn metadata(&self) -> Vec<(String, String)> {
        Vec::new()
    }

    /// Clone this transform into a Box
    fn clone_box(&self) -> Box<dyn Transform>;
}

impl Clone for Box<dyn Transform> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

/// Names accepted by [`by_name`], in display order
pub fn available() -> &'static [&'static str] {
    &[
        "upper",
        "lower",
        "title",
        "sentence",
        "alternating",
        "inverse",
        "remove-line-breaks",
        "remove-extra-spaces",
        "remove-punctuation",
        "remove-numbers",
        "remove-accents",
        "reverse",
        "dedupe-lines",
        "sort-lines",
    ]
}

/// Look up a built-in transform by its registry name
pub fn by_name(name: &str) -> Result<Box<dyn Transform>> {
    let transform: Box<dyn Transform> = match name {
        "upper" => Box::new(Uppercase),
        "lower" => Box::new(Lowercase),
        "title" => Box::new(TitleCase),
        "sentence" => Box::new(SentenceCase),
        "alternating" => Box::new(AlternatingCase),
        "inverse" => Box::new(InverseCase),
        "remove-line-breaks" => Box::new(LineBreakRemover::new()),
        "remove-extra-spaces" => Box::new(WhitespaceNormalizer),
        "remove-punctuation" => Box::new(RemovePunctuation),
        "remove-numbers" => Box::new(RemoveNumbers),
        "remove-accents" => Box::new(RemoveAccents),
        "reverse" => Box::new(ReverseText),
        "dedupe-lines" => Box::new(RemoveDuplicateLines),
        "sort-lines" => Box::new(SortLines::new()),
        _ => {
            return Err(TextError::UnknownTransform {
                name: name.to_string(),
                available: available().join(", "),
            })
        }
    };
    Ok(transform)
}

// ============================================================================
// Case Conversion
// ============================================================================

/// Converts all text to uppercase
#[derive(Debug, Clone)]
pub struct Uppercase;

impl Transform for Uppercase {
    fn apply(&self, input: &str) -> String {
        input.to_uppercase()
    }

    fn name(&self) -> &str {
        "upper"
    }

    fn clone_box(&self) -> Box<dyn Transform> {
        Box::new(self.clone())
    }
}

/// Converts all text to lowercase
#[derive(Debug, Clone)]
pub struct Lowercase;

impl Transform for Lowercase {
    fn apply(&self, input: &str) -> String {
        input.to_lowercase()
    }

    fn name(&self) -> &str {
        "lower"
    }

    fn clone_box(&self) -> Box<dyn Transform> {
        Box::new(self.clone())
    }
}

/// Capitalises the first letter of every whitespace-separated word and
/// lowercases the rest
#[derive(Debug, Clone)]
pub struct TitleCase;

impl Transform for TitleCase {
    fn apply(&self, input: &str) -> String {
        let mut out = String::with_capacity(input.len());
        let mut at_word_start = true;

        for ch in input.chars() {
            if ch.is_whitespace() {
                at_word_start = true;
                out.push(ch);
            } else if at_word_start {
                out.extend(ch.to_uppercase());
                at_word_start = false;
            } else {
                out.extend(ch.to_lowercase());
            }
        }

        out
    }

    fn name(&self) -> &str {
        "title"
    }

    fn clone_box(&self) -> Box<dyn Transform> {
        Box::new(self.clone())
    }
}

/// Lowercases everything, then capitalises the first letter of the text and
/// the first letter following `.`, `!` or `?`
#[derive(Debug, Clone)]
pub struct SentenceCase;

impl Transform for SentenceCase {
    fn apply(&self, input: &str) -> String {
        let mut out = String::with_capacity(input.len());
        let mut capitalize_next = true;

        for ch in input.chars() {
            if ch.is_alphabetic() {
                if capitalize_next {
                    out.extend(ch.to_uppercase());
                    capitalize_next = false;
                } else {
                    out.extend(ch.to_lowercase());
                }
            } else {
                if matches!(ch, '.' | '!' | '?') {
                    capitalize_next = true;
                }
                out.push(ch);
            }
        }

        out
    }

    fn name(&self) -> &str {
        "sentence"
    }

    fn clone_box(&self) -> Box<dyn Transform> {
        Box::new(self.clone())
    }
}

/// aLtErNaTiNg case over letters; other characters keep their place in the
/// rhythm untouched
#[derive(Debug, Clone)]
pub struct AlternatingCase;

impl Transform for AlternatingCase {
    fn apply(&self, input: &str) -> String {
        let mut out = String::with_capacity(input.len());
        let mut upper = false;

        for ch in input.chars() {
            if ch.is_alphabetic() {
                if upper {
                    out.extend(ch.to_uppercase());
                } else {
                    out.extend(ch.to_lowercase());
                }
                upper = !upper;
            } else {
                out.push(ch);
            }
        }

        out
    }

    fn name(&self) -> &str {
        "alternating"
    }

    fn clone_box(&self) -> Box<dyn Transform> {
        Box::new(self.clone())
    }
}

/// Swaps the case of every letter
#[derive(Debug, Clone)]
pub struct InverseCase;

impl Transform for InverseCase {
    fn apply(&self, input: &str) -> String {
        let mut out = String::with_capacity(input.len());
        for ch in input.chars() {
            if ch.is_uppercase() {
                out.extend(ch.to_lowercase());
            } else if ch.is_lowercase() {
                out.extend(ch.to_uppercase());
            } else {
                out.push(ch);
            }
        }
        out
    }

    fn name(&self) -> &str {
        "inverse"
    }

    fn clone_box(&self) -> Box<dyn Transform> {
        Box::new(self.clone())
    }
}

// ============================================================================
// Whitespace
// ============================================================================

/// Replaces every run of line breaks (`\n`, `\r\n`, `\r`) with a single
/// replacement string. Breaks at the very start or end are dropped.
#[derive(Debug, Clone)]
pub struct LineBreakRemover {
    pub replacement: String,
}

impl Default for LineBreakRemover {
    fn default() -> Self {
        Self {
            replacement: " ".to_string(),
        }
    }
}

impl LineBreakRemover {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_replacement(mut self, replacement: impl Into<String>) -> Self {
        self.replacement = replacement.into();
        self
    }
}

impl Transform for LineBreakRemover {
    fn apply(&self, input: &str) -> String {
        let mut out = String::with_capacity(input.len());
        let mut pending_break = false;

        for ch in input.chars() {
            if matches!(ch, '\n' | '\r') {
                pending_break = true;
                continue;
            }
            if pending_break && !out.is_empty() {
                out.push_str(&self.replacement);
            }
            pending_break = false;
            out.push(ch);
        }

        out
    }

    fn name(&self) -> &str {
        "remove-line-breaks"
    }

    fn metadata(&self) -> Vec<(String, String)> {
        vec![("replacement".to_string(), self.replacement.clone())]
    }

    fn clone_box(&self) -> Box<dyn Transform> {
        Box::new(self.clone())
    }
}

/// Collapses spaces and tabs to a single space and trims every line.
/// Line structure is kept; `\r\n` endings come out as `\n`.
#[derive(Debug, Clone)]
pub struct WhitespaceNormalizer;

impl Transform for WhitespaceNormalizer {
    fn apply(&self, input: &str) -> String {
        input
            .split('\n')
            .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn name(&self) -> &str {
        "remove-extra-spaces"
    }

    fn clone_box(&self) -> Box<dyn Transform> {
        Box::new(self.clone())
    }
}

// ============================================================================
// Character Removal
// ============================================================================

/// Removes all ASCII punctuation
#[derive(Debug, Clone)]
pub struct RemovePunctuation;

impl Transform for RemovePunctuation {
    fn apply(&self, input: &str) -> String {
        input.chars().filter(|c| !c.is_ascii_punctuation()).collect()
    }

    fn name(&self) -> &str {
        "remove-punctuation"
    }

    fn clone_box(&self) -> Box<dyn Transform> {
        Box::new(self.clone())
    }
}

/// Removes numbers
#[derive(Debug, Clone)]
pub struct RemoveNumbers;

impl Transform for RemoveNumbers {
    fn apply(&self, input: &str) -> String {
        input.chars().filter(|c| !c.is_numeric()).collect()
    }

    fn name(&self) -> &str {
        "remove-numbers"
    }

    fn clone_box(&self) -> Box<dyn Transform> {
        Box::new(self.clone())
    }
}

/// Removes accents/diacritics (e.g., é -> e)
#[derive(Debug, Clone)]
pub struct RemoveAccents;

impl Transform for RemoveAccents {
    fn apply(&self, input: &str) -> String {
        input.nfd().filter(|c| !is_combining_mark(*c)).nfc().collect()
    }

    fn name(&self) -> &str {
        "remove-accents"
    }

    fn clone_box(&self) -> Box<dyn Transform> {
        Box::new(self.clone())
    }
}

fn is_combining_mark(ch: char) -> bool {
    matches!(ch, '\u{0300}'..='\u{036F}' | '\u{1AB0}'..='\u{1AFF}' | '\u{1DC0}'..='\u{1DFF}' | '\u{20D0}'..='\u{20FF}' | '\u{FE20}'..='\u{FE2F}')
}

/// Reverses the text by Unicode scalar value
#[derive(Debug, Clone)]
pub struct ReverseText;

impl Transform for ReverseText {
    fn apply(&self, input: &str) -> String {
        input.chars().rev().collect()
    }

    fn name(&self) -> &str {
        "reverse"
    }

    fn clone_box(&self) -> Box<dyn Transform> {
        Box::new(self.clone())
    }
}

// ============================================================================
// Line Operations
// ============================================================================

/// Apply `f` to the lines of `input`, keeping a single trailing newline if
/// the input had one
fn map_lines<F>(input: &str, f: F) -> String
where
    F: FnOnce(Vec<&str>) -> Vec<&str>,
{
    let (body, trailing) = match input.strip_suffix('\n') {
        Some(body) => (body, "\n"),
        None => (input, ""),
    };
    if body.is_empty() {
        return input.to_string();
    }

    let mut out = f(body.split('\n').collect()).join("\n");
    out.push_str(trailing);
    out
}

/// Removes repeated lines, keeping the first occurrence of each
#[derive(Debug, Clone)]
pub struct RemoveDuplicateLines;

impl Transform for RemoveDuplicateLines {
    fn apply(&self, input: &str) -> String {
        map_lines(input, |lines| {
            let mut seen = HashSet::new();
            lines.into_iter().filter(|line| seen.insert(*line)).collect()
        })
    }

    fn name(&self) -> &str {
        "dedupe-lines"
    }

    fn clone_box(&self) -> Box<dyn Transform> {
        Box::new(self.clone())
    }
}

/// Sorts lines lexicographically
#[derive(Debug, Clone, Default)]
pub struct SortLines {
    pub descending: bool,
}

impl SortLines {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn descending(mut self) -> Self {
        self.descending = true;
        self
    }
}

impl Transform for SortLines {
    fn apply(&self, input: &str) -> String {
        map_lines(input, |mut lines| {
            lines.sort_unstable();
            if self.descending {
                lines.reverse();
            }
            lines
        })
    }

    fn name(&self) -> &str {
        "sort-lines"
    }

    fn metadata(&self) -> Vec<(String, String)> {
        vec![("descending".to_string(), self.descending.to_string())]
    }

    fn clone_box(&self) -> Box<dyn Transform> {
        Box::new(self.clone())
    }
}

// ============================================================================
// Custom
// ============================================================================

/// Custom transform using a user-provided function
#[derive(Clone)]
pub struct CustomTransform {
    name: String,
    func: Arc<dyn Fn(&str) -> String + Send + Sync>,
}

impl CustomTransform {
    pub fn new<F>(name: impl Into<String>, func: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            func: Arc::new(func),
        }
    }
}

impl Transform for CustomTransform {
    fn apply(&self, input: &str) -> String {
        (self.func)(input)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn clone_box(&self) -> Box<dyn Transform> {
        Box::new(self.clone())
    }
}
