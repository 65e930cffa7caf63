//! Configuration for the compare engine and the text tools

use crate::error::{Result, TextError};
use crate::metrics::CountOptions;
use crate::tokenizers::{CharacterTokenizer, Tokenizer, WhitespaceTokenizer};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Unit of comparison within a line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    /// Whitespace and non-whitespace runs (default)
    #[default]
    Word,
    /// Individual characters
    Char,
}

impl Granularity {
    /// Tokenizer implementing this granularity
    pub fn tokenizer(&self) -> Box<dyn Tokenizer> {
        match self {
            Granularity::Word => Box::new(WhitespaceTokenizer::new()),
            Granularity::Char => Box::new(CharacterTokenizer),
        }
    }
}

/// Configuration for text comparison
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompareConfig {
    /// Tokenization granularity
    pub granularity: Granularity,

    /// Largest accepted input, in bytes, per side. Only enforced by
    /// `CompareEngine::compare_checked`.
    pub max_input_bytes: Option<usize>,
}

impl CompareConfig {
    /// Create a new default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the tokenization granularity
    pub fn with_granularity(mut self, granularity: Granularity) -> Self {
        self.granularity = granularity;
        self
    }

    /// Set the per-side input ceiling for checked comparisons
    pub fn with_max_input_bytes(mut self, limit: usize) -> Self {
        self.max_input_bytes = Some(limit);
        self
    }

    fn validate(&self) -> Result<()> {
        if self.max_input_bytes == Some(0) {
            return Err(TextError::invalid_config(
                "compare.max_input_bytes must be greater than zero",
            ));
        }
        Ok(())
    }
}

/// File-level configuration shared by all tools
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolConfig {
    pub compare: CompareConfig,
    pub count: CountOptions,
}

impl ToolConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: ToolConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&source)?;
        tracing::debug!(path = %path.display(), "loaded tool configuration");
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.compare.validate()?;
        self.count.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = CompareConfig::default();
        assert_eq!(config.granularity, Granularity::Word);
        assert_eq!(config.max_input_bytes, None);
    }

    #[test]
    fn test_builder_pattern() {
        let config = CompareConfig::new()
            .with_granularity(Granularity::Char)
            .with_max_input_bytes(1024);

        assert_eq!(config.granularity, Granularity::Char);
        assert_eq!(config.max_input_bytes, Some(1024));
    }

    #[test]
    fn test_granularity_tokenizer() {
        assert_eq!(Granularity::Word.tokenizer().name(), "whitespace");
        assert_eq!(Granularity::Char.tokenizer().name(), "character");
    }

    #[test]
    fn test_parse_full_document() {
        let config = ToolConfig::from_toml_str(
            r#"
            [compare]
            granularity = "char"
            max_input_bytes = 4096

            [count]
            words_per_minute = 250
            speaking_words_per_minute = 150
            "#,
        )
        .unwrap();

        assert_eq!(config.compare.granularity, Granularity::Char);
        assert_eq!(config.compare.max_input_bytes, Some(4096));
        assert_eq!(config.count.words_per_minute, 250);
        assert_eq!(config.count.speaking_words_per_minute, 150);
    }

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = ToolConfig::from_toml_str("").unwrap();
        assert_eq!(config, ToolConfig::default());
    }

    #[test]
    fn test_rejects_unknown_granularity() {
        let err = ToolConfig::from_toml_str("[compare]\ngranularity = \"line\"").unwrap_err();
        assert!(matches!(err, TextError::ConfigParse(_)));
    }

    #[test]
    fn test_rejects_zero_values() {
        let err = ToolConfig::from_toml_str("[count]\nwords_per_minute = 0").unwrap_err();
        assert!(matches!(err, TextError::InvalidConfig { .. }));

        let err = ToolConfig::from_toml_str("[compare]\nmax_input_bytes = 0").unwrap_err();
        assert!(matches!(err, TextError::InvalidConfig { .. }));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[compare]\ngranularity = \"word\"").unwrap();

        let config = ToolConfig::load(file.path()).unwrap();
        assert_eq!(config.compare.granularity, Granularity::Word);
    }

    #[test]
    fn test_load_missing_file() {
        let err = ToolConfig::load("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, TextError::Io(_)));
    }
}
