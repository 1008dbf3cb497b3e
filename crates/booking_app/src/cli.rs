use std::path::PathBuf;

use booking_core::{ExclusionList, DEFAULT_TABLE_CLASS};
use booking_engine::{
    load_exclusions, ConfigError, FetchSettings, ReportConfig, DEFAULT_OUTPUT_FILENAME,
    DEFAULT_REPORT_URL,
};
use clap::Parser;
use log::LevelFilter;

#[derive(Debug, Parser)]
#[command(
    name = "booking-report",
    about = "Export the daily jail booking report to a spreadsheet"
)]
pub struct Cli {
    /// Report page to fetch
    #[arg(long, default_value = DEFAULT_REPORT_URL)]
    pub url: String,

    /// Days back from today (0 = today, 1 = yesterday)
    #[arg(long)]
    pub day: Option<u32>,

    /// Spreadsheet to write
    #[arg(short, long, default_value = DEFAULT_OUTPUT_FILENAME)]
    pub output: PathBuf,

    /// Class of the table holding the bookings
    #[arg(long, default_value = DEFAULT_TABLE_CLASS)]
    pub table_class: String,

    /// Replace the built-in exclusion phrases with this file's (one per line)
    #[arg(long)]
    pub exclusions_file: Option<PathBuf>,

    /// Extra exclusion phrase; may be repeated
    #[arg(long = "exclude", value_name = "PHRASE")]
    pub exclude: Vec<String>,

    /// Also write logs to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn log_level(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        }
    }

    pub fn into_config(self) -> Result<ReportConfig, ConfigError> {
        let mut exclusions = match &self.exclusions_file {
            Some(path) => load_exclusions(path)?,
            None => ExclusionList::default(),
        };
        for phrase in self.exclude {
            exclusions.push(phrase);
        }

        Ok(ReportConfig {
            url: self.url,
            day_offset: self.day,
            output_path: self.output,
            table_class: self.table_class,
            exclusions,
            fetch: FetchSettings::default(),
        })
    }
}
