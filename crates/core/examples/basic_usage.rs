//! Basic usage example of the textbench library

use textbench_core::transforms::{LineBreakRemover, TitleCase};
use textbench_core::{compare, CompareConfig, CompareEngine, Granularity, TextMetrics, TextPipeline};

const LINE: &str = "----------------------------------------";

fn main() {
    println!("=== textbench Examples ===\n");

    example_word_compare();
    example_char_compare();
    example_counts();
    example_pipeline();
}

fn example_word_compare() {
    println!("Example 1: Word Compare");
    println!("{}", LINE);

    let original = "Hello World! This is a test.\nUnchanged line";
    let modified = "Hello Rust! This is a test.\nUnchanged line\nNew line";

    let result = compare(original, modified);
    println!("{}\n", result);
}

fn example_char_compare() {
    println!("Example 2: Character Compare");
    println!("{}", LINE);

    let engine = CompareEngine::new(CompareConfig::new().with_granularity(Granularity::Char));
    let result = engine.compare("colour", "color");
    println!("{}\n", result);
}

fn example_counts() {
    println!("Example 3: Counting");
    println!("{}", LINE);

    let metrics = TextMetrics::compute("The cat sat on the mat. It purred.");
    println!("Words: {}", metrics.words);
    println!("Sentences: {}", metrics.sentences);
    println!("Reading time: {}s\n", metrics.reading_time_secs);
}

fn example_pipeline() {
    println!("Example 4: Transform Pipeline");
    println!("{}", LINE);

    let pipeline = TextPipeline::new()
        .add_transform(Box::new(LineBreakRemover::new()))
        .add_transform(Box::new(TitleCase));

    for (i, layer) in pipeline.process("the quick\nbrown fox").iter().enumerate() {
        println!("  Layer {}: {:?}", i, layer);
    }
}
