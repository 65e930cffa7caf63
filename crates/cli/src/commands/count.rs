//! Count command
//!
//! Usage: textbench count [FILE] [--keywords N] [--format text|json]

use super::OutputFormat;
use crate::input::{load_config, read_text};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use textbench_core::metrics::top_keywords;
use textbench_core::TextMetrics;

#[derive(Debug, Args)]
pub struct CountArgs {
    /// Text file to count (default: stdin)
    pub file: Option<PathBuf>,

    /// Also list the N most frequent keywords
    #[arg(short, long, value_name = "N", default_value_t = 0)]
    pub keywords: usize,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// TOML configuration file
    #[arg(short, long, env = "TEXTBENCH_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Execute count command
pub fn execute(args: CountArgs) -> Result<()> {
    let options = load_config(args.config.as_deref())?.count;
    let text = read_text(args.file.as_deref())?;

    let metrics = TextMetrics::compute_with(&text, &options);
    let keywords = top_keywords(&text, args.keywords);

    match args.format {
        OutputFormat::Text => print!("{}", render_text(&metrics, &keywords)),
        OutputFormat::Json => {
            let keywords: Vec<_> = keywords
                .iter()
                .map(|(word, count)| serde_json::json!({ "word": word, "count": count }))
                .collect();
            let report = serde_json::json!({ "metrics": metrics, "keywords": keywords });
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}

fn render_text(metrics: &TextMetrics, keywords: &[(String, usize)]) -> String {
    let mut out = String::new();
    out.push_str(&format!("Characters:             {}\n", metrics.characters));
    out.push_str(&format!("Characters (no spaces): {}\n", metrics.characters_no_spaces));
    out.push_str(&format!("Words:                  {}\n", metrics.words));
    out.push_str(&format!("Sentences:              {}\n", metrics.sentences));
    out.push_str(&format!("Paragraphs:             {}\n", metrics.paragraphs));
    out.push_str(&format!("Lines:                  {}\n", metrics.lines));
    out.push_str(&format!("Average word length:    {:.2}\n", metrics.average_word_length));
    out.push_str(&format!("Reading time:           {}\n", format_duration(metrics.reading_time_secs)));
    out.push_str(&format!("Speaking time:          {}\n", format_duration(metrics.speaking_time_secs)));

    if !keywords.is_empty() {
        out.push_str("Keywords:\n");
        for (word, count) in keywords {
            out.push_str(&format!("  {word} ({count})\n"));
        }
    }

    out
}

fn format_duration(secs: u64) -> String {
    match (secs / 60, secs % 60) {
        (0, s) => format!("{s} sec"),
        (m, 0) => format!("{m} min"),
        (m, s) => format!("{m} min {s} sec"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_durations() {
        assert_eq!(format_duration(0), "0 sec");
        assert_eq!(format_duration(45), "45 sec");
        assert_eq!(format_duration(120), "2 min");
        assert_eq!(format_duration(61), "1 min 1 sec");
    }

    #[test]
    fn renders_keywords_section() {
        let metrics = TextMetrics::compute("apple apple pear");
        let keywords = top_keywords("apple apple pear", 1);
        let text = render_text(&metrics, &keywords);
        assert!(text.contains("Words:                  3\n"));
        assert!(text.ends_with("Keywords:\n  apple (2)\n"));
    }
}
