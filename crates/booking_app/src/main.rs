//! `booking-report`: fetch the daily booking report and export it to a spreadsheet.
mod cli;

use std::process::ExitCode;

use booking_engine::ReportPipeline;
use clap::Parser;
use engine_logging::{engine_error, engine_info};

use crate::cli::Cli;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    engine_logging::initialize(cli.log_level(), cli.log_file.as_deref());

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            engine_error!("{:#}", err);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = cli.into_config()?;
    engine_info!(
        "Using {} exclusion phrases, output {}",
        config.exclusions.len(),
        config.output_path.display()
    );

    let pipeline = ReportPipeline::from_config(&config);
    let summary = pipeline.run(&config).await?;
    engine_info!(
        "Done: {} of {} rows kept from {}",
        summary.records_written,
        summary.stats.rows_seen,
        summary.url
    );
    Ok(())
}
