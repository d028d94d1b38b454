//! mdline CLI - convert a Markdown subset file to HTML

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Convert markdown to HTML
#[derive(Parser)]
#[command(name = "mdline")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to input markdown file
    input_file: PathBuf,

    /// Path to output HTML file
    output_file: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match mdline::stream::convert_file(&cli.input_file, &cli.output_file) {
        Ok(stats) => {
            info!(
                "Wrote {} fragments from {} lines to {}",
                stats.fragments,
                stats.lines,
                cli.output_file.display()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            ExitCode::from(1)
        }
    }
}
