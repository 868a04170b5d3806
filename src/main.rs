use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use interface_jc::config::{EstimatorConfig, DEFAULT_DATA_DIR, DEFAULT_VOLTAGE_THRESHOLD};
use interface_jc::estimator::compute_interface_jc_with;
use interface_jc::report;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// Estimate critical current density (Jc) for every interface measurement
/// file in a directory.
#[derive(Debug, Parser)]
#[command(name = "interface-jc", version, about)]
struct Cli {
    /// Directory holding one `<interface>.csv` file per interface.
    #[arg(default_value = DEFAULT_DATA_DIR)]
    data_dir: PathBuf,

    /// Voltage (V) a row must strictly exceed to count toward Jc.
    #[arg(long, value_name = "VOLTS", default_value_t = DEFAULT_VOLTAGE_THRESHOLD)]
    threshold: f64,

    /// Report format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    if !cli.data_dir.exists() {
        println!("{}", report::not_found_message(&cli.data_dir));
        return Ok(());
    }

    let config = EstimatorConfig::with_threshold(cli.threshold);
    let results = compute_interface_jc_with(&cli.data_dir, &config)
        .with_context(|| format!("estimating Jc in {}", cli.data_dir.display()))?;
    log::info!("Computed Jc for {} interface(s)", results.len());

    match cli.format {
        OutputFormat::Text => print!("{}", report::render_text(&results)),
        OutputFormat::Json => {
            let json = report::render_json(&cli.data_dir, config.voltage_threshold, &results)
                .context("serializing report")?;
            println!("{json}");
        }
    }

    Ok(())
}
