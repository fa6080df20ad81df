use clap::Parser;
use hog::config::{AppConfig, DEFAULT_CONFIG_PATH};
use hog::interface::console::ConsoleInterface;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::EnvFilter;

/// Play Hog
#[derive(Parser, Debug)]
#[command(name = "hog")]
#[command(about = "Play Hog", long_about = None)]
struct Cli {
    /// Runs strategy experiments
    #[arg(short = 'r', long = "run_experiments", conflicts_with = "final_strategy")]
    run_experiments: bool,

    /// Display the final_strategy win rate against always_roll(5)
    #[arg(long = "final")]
    final_strategy: bool,

    /// Configuration file
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = AppConfig::load_from(&cli.config).and_then(|config| {
        if cli.run_experiments {
            ConsoleInterface::run_experiments(&config)
        } else if cli.final_strategy {
            ConsoleInterface::run_final(&config)
        } else {
            Ok(())
        }
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
