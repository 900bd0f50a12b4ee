mod cli;

use anyhow::{Context, Result};
use clap::Parser;

use cli::{Cli, OutputFormat};

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = cli.resolve_config()?;

    // Built in full before printing, so a failure leaves stdout empty.
    let report = energy_growth::analyze(&config)
        .with_context(|| format!("analysing {}", config.input.display()))?;

    match cli.format {
        OutputFormat::Text => print!("{report}"),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&report).context("serializing report")?;
            println!("{json}");
        }
    }
    Ok(())
}
