mod commands;
mod logging;
mod progress;

use std::env;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use commands::{extension_breakdown, summary_line, Cli};
use disc_optimizer_core::{DiscFinder, ScanResult};
use dotenv::dotenv;
use progress::CliReporter;
use tracing::{debug, info};

fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let _guard = logging::init_logger();

    let args = Cli::parse();

    let config = disc_optimizer_core::config::load_configuration()
        .context("Error loading configuration")?;
    debug!("Configuration: {:?}", config);

    let (path, description) = match args.path {
        Some(arg) => (PathBuf::from(&arg), arg),
        None => (
            env::current_dir().context("Error reading current directory")?,
            "current directory".to_string(),
        ),
    };

    let finder = DiscFinder::new(&config);
    let reporter = CliReporter::new();
    let result = finder
        .search(&path, &reporter)
        .with_context(|| format!("Error scanning {}", path.display()))?;

    log_breakdown(&result);
    println!("{}", summary_line(result.len(), &description));

    Ok(())
}

fn log_breakdown(result: &ScanResult) {
    for disc in &result.discs {
        debug!("{}", disc);
    }
    // Plain text: these events also reach the non-ANSI log file.
    for line in extension_breakdown(&result.discs) {
        info!("{}", line);
    }
    debug!(
        "{:?} scan took {:.2}s",
        result.kind,
        result.duration.as_secs_f64()
    );
}
