use std::io::Read;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use stilwende::{run_pipeline, Language, LlmConfig, TransformRequest};

#[derive(Parser)]
#[command(
    name = "stilwende",
    about = "Reduce stylometric fingerprints in German and English prose",
    version
)]
struct Cli {
    /// File paths to transform (reads stdin if none provided)
    files: Vec<String>,

    /// Input language
    #[arg(long, default_value = "de")]
    language: Language,

    /// Transform strength, cumulative (0 = normalization only, 3 = full)
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u8).range(0..=3))]
    strength: u8,
}

fn transform(text: String, language: Language, strength: u8) -> anyhow::Result<()> {
    let request = TransformRequest {
        text,
        language,
        strength,
        llm: LlmConfig::default(),
    };
    let response = run_pipeline(&request, None)?;
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.files.is_empty() {
        let mut input = String::new();
        std::io::stdin()
            .read_to_string(&mut input)
            .context("failed to read stdin")?;
        transform(input, cli.language, cli.strength)?;
    } else {
        for path in &cli.files {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {path}"))?;
            transform(text, cli.language, cli.strength)?;
        }
    }
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}
