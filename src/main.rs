//! Text extraction CLI application.
//!
//! Reads a text file, extracts every supported category of data, prints the
//! findings as JSON and saves them to an output file.

use anyhow::{Context, Result};
use clap::Parser;
use std::io::Read;
use std::path::{Path, PathBuf};

use extractor::{to_json, Category, ExtractionService, Matchers, ScanConfig, ScanResult};

/// Sensitive data extraction tool
///
/// Extracts emails, URLs, phone numbers, credit cards, times, currency,
/// hashtags and HTML tags from text. Emails and cards are masked.
#[derive(Parser)]
#[command(name = "extractor")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Input text file path ("-" reads standard input)
    #[arg(short, long, value_name = "FILE", default_value = "samples/input.txt")]
    input: PathBuf,

    /// Output JSON file path
    #[arg(short, long, value_name = "FILE", default_value = "samples/output.json")]
    output: PathBuf,

    /// Print the JSON without writing the output file
    #[arg(long)]
    no_write: bool,

    /// Only extract these categories (comma separated or repeated)
    #[arg(long, value_name = "CATEGORY", value_delimiter = ',')]
    only: Vec<Category>,

    /// Emit compact JSON instead of indented JSON
    #[arg(long)]
    compact: bool,

    /// Reject input larger than this many bytes
    #[arg(long, value_name = "BYTES")]
    max_bytes: Option<usize>,

    /// Print per-category counts to stderr
    #[arg(long)]
    summary: bool,

    /// Enable verbose (debug) logging
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Disable all logging
    #[arg(short, long)]
    quiet: bool,
}

/// Extraction command handler with dependency injection.
struct ExtractionHandler {
    service: ExtractionService,
    pretty: bool,
}

impl ExtractionHandler {
    fn new(config: ScanConfig, pretty: bool) -> Self {
        Self {
            service: ExtractionService::new(Matchers::new(), config),
            pretty,
        }
    }

    fn read_input(&self, input: &Path) -> Result<String> {
        if input == Path::new("-") {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read standard input")?;
            return Ok(text);
        }

        if !input.exists() {
            anyhow::bail!("Input file does not exist: {}", input.display());
        }
        Ok(extractor::read_text(input)?)
    }

    /// Scans the input and returns the rendered JSON.
    fn run(&self, input: &Path) -> Result<(ScanResult, String)> {
        let text = self.read_input(input)?;
        log::debug!("read {} bytes from {}", text.len(), input.display());

        let result = self
            .service
            .scan(&text)
            .with_context(|| format!("Extraction failed for {}", input.display()))?;
        let json = to_json(&result, self.pretty)?;
        Ok((result, json))
    }

    fn write_output(&self, output: &Path, json: &str) -> Result<()> {
        if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        std::fs::write(output, json)
            .with_context(|| format!("Failed to write to {}", output.display()))?;
        log::info!("wrote findings to {}", output.display());
        Ok(())
    }
}

/// Builds the scan configuration from command-line flags.
fn build_config(only: &[Category], max_bytes: Option<usize>) -> ScanConfig {
    ScanConfig::new()
        .only(only.iter().copied())
        .with_max_input_bytes(max_bytes)
}

fn init_logging(verbose: bool, quiet: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if quiet {
        builder.filter_level(log::LevelFilter::Off);
    } else if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.format_timestamp(None).init();
}

fn print_summary(result: &ScanResult) {
    for (category, count) in result.counts() {
        eprintln!("  {:<12} {}", category, count);
    }
    eprintln!("  {:<12} {}", "total", result.total());
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let handler = ExtractionHandler::new(build_config(&cli.only, cli.max_bytes), !cli.compact);
    let (result, json) = handler.run(&cli.input)?;

    println!("{}", json);

    if !cli.no_write {
        handler.write_output(&cli.output, &json)?;
    }

    if cli.summary {
        print_summary(&result);
    }

    Ok(())
}
