//! Line tokenizers
//!
//! Provides the `Tokenizer` trait and the implementations used by the compare
//! engine. A tokenizer never drops input: concatenating the text of every
//! token reproduces the line it was given.

use serde::{Deserialize, Serialize};

/// Byte range of a token within its line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// What a token is made of
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    /// A run of whitespace characters
    Whitespace,
    /// A run of anything else
    Text,
}

/// A single token with its position in the line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The token text, borrowed verbatim from the line
    pub text: String,

    /// Byte span in the line
    pub span: Span,

    /// Token index in the sequence
    pub index: usize,

    pub kind: TokenKind,
}

impl Token {
    pub fn new(text: impl Into<String>, span: Span, index: usize, kind: TokenKind) -> Self {
        Self {
            text: text.into(),
            span,
            index,
            kind,
        }
    }

    pub fn is_whitespace(&self) -> bool {
        self.kind == TokenKind::Whitespace
    }

    /// Alignment equality: exact text, position and kind ignored
    pub fn matches(&self, other: &Token) -> bool {
        self.text == other.text
    }
}

/// Trait for tokenizers that split a single line into tokens
pub trait Tokenizer: Send + Sync {
    /// Tokenize one line of text
    ///
    /// # Arguments
    ///
    /// * `line` - The line to split; it should not contain `'\n'`
    ///
    /// # Returns
    ///
    /// Tokens in order. Empty input returns an empty vector.
    fn tokenize(&self, line: &str) -> Vec<Token>;

    /// Get the name of this tokenizer
    fn name(&self) -> &str;

    /// Clone this tokenizer into a Box
    fn clone_box(&self) -> Box<dyn Tokenizer>;
}

impl Clone for Box<dyn Tokenizer> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

// ============================================================================
// Built-in Tokenizers
// ============================================================================

/// Splits a line into alternating whitespace and non-whitespace runs.
///
/// `"the  quick fox"` becomes `["the", "  ", "quick", " ", "fox"]`.
#[derive(Debug, Clone, Default)]
pub struct WhitespaceTokenizer;

impl WhitespaceTokenizer {
    pub fn new() -> Self {
        Self
    }
}

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, line: &str) -> Vec<Token> {
        let mut tokens = Vec::new();
        let mut current_start = 0;
        let mut current_kind: Option<TokenKind> = None;

        for (pos, ch) in line.char_indices() {
            let kind = classify_char(ch);

            match current_kind {
                None => {
                    current_start = pos;
                    current_kind = Some(kind);
                }
                Some(prev) if prev == kind => {}
                Some(prev) => {
                    tokens.push(create_token(line, current_start, pos, tokens.len(), prev));
                    current_start = pos;
                    current_kind = Some(kind);
                }
            }
        }

        if let Some(kind) = current_kind {
            tokens.push(create_token(line, current_start, line.len(), tokens.len(), kind));
        }

        tokens
    }

    fn name(&self) -> &str {
        "whitespace"
    }

    fn clone_box(&self) -> Box<dyn Tokenizer> {
        Box::new(self.clone())
    }
}

/// Character-level tokenizer (one token per Unicode scalar value)
#[derive(Debug, Clone, Default)]
pub struct CharacterTokenizer;

impl Tokenizer for CharacterTokenizer {
    fn tokenize(&self, line: &str) -> Vec<Token> {
        line.char_indices()
            .enumerate()
            .map(|(index, (pos, ch))| {
                create_token(line, pos, pos + ch.len_utf8(), index, classify_char(ch))
            })
            .collect()
    }

    fn name(&self) -> &str {
        "character"
    }

    fn clone_box(&self) -> Box<dyn Tokenizer> {
        Box::new(self.clone())
    }
}

fn classify_char(ch: char) -> TokenKind {
    if ch.is_whitespace() {
        TokenKind::Whitespace
    } else {
        TokenKind::Text
    }
}

fn create_token(line: &str, start: usize, end: usize, index: usize, kind: TokenKind) -> Token {
    Token::new(&line[start..end], Span::new(start, end), index, kind)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(tokens: &[Token]) -> Vec<&str> {
        tokens.iter().map(|t| t.text.as_str()).collect()
    }

    #[test]
    fn test_whitespace_runs_are_tokens() {
        let tokens = WhitespaceTokenizer.tokenize("the  quick\tfox");
        assert_eq!(texts(&tokens), vec!["the", "  ", "quick", "\t", "fox"]);
        assert_eq!(tokens[1].kind, TokenKind::Whitespace);
        assert_eq!(tokens[2].span, Span::new(5, 10));
        assert_eq!(tokens[4].index, 4);
    }

    #[test]
    fn test_leading_and_trailing_whitespace() {
        let tokens = WhitespaceTokenizer.tokenize("  hi ");
        assert_eq!(texts(&tokens), vec!["  ", "hi", " "]);
    }

    #[test]
    fn test_empty_line() {
        assert!(WhitespaceTokenizer.tokenize("").is_empty());
        assert!(CharacterTokenizer.tokenize("").is_empty());
    }

    #[test]
    fn test_tokens_reconstruct_line() {
        let line = " mixed   ünïcode\u{3000}text ";
        let joined: String = WhitespaceTokenizer
            .tokenize(line)
            .iter()
            .map(|t| t.text.as_str())
            .collect();
        assert_eq!(joined, line);
    }

    #[test]
    fn test_character_tokenizer() {
        let tokens = CharacterTokenizer.tokenize("aé b");
        assert_eq!(texts(&tokens), vec!["a", "é", " ", "b"]);
        assert_eq!(tokens[1].span, Span::new(1, 3));
        assert!(tokens[2].is_whitespace());
    }
}
