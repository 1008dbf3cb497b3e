use std::fs;
use std::path::{Path, PathBuf};

use booking_core::{ExclusionList, DEFAULT_TABLE_CLASS};
use thiserror::Error;
use url::Url;

use crate::FetchSettings;

/// Publisher page; `day=0` is today, `day=1` yesterday, and so on.
pub const DEFAULT_REPORT_URL: &str = "http://www.hcsheriff.gov/cor/display.php?day=0";
pub const DEFAULT_OUTPUT_FILENAME: &str = "booking_reports.xlsx";

const DAY_PARAM: &str = "day";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid report url {url}: {message}")]
    InvalidUrl { url: String, message: String },
    #[error("failed to read exclusions from {path}: {source}")]
    Exclusions {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Everything one run needs, assembled before the fetch starts.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    pub url: String,
    /// Overrides the `day` query parameter of `url` when set.
    pub day_offset: Option<u32>,
    pub output_path: PathBuf,
    pub table_class: String,
    pub exclusions: ExclusionList,
    pub fetch: FetchSettings,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_REPORT_URL.to_string(),
            day_offset: None,
            output_path: PathBuf::from(DEFAULT_OUTPUT_FILENAME),
            table_class: DEFAULT_TABLE_CLASS.to_string(),
            exclusions: ExclusionList::default(),
            fetch: FetchSettings::default(),
        }
    }
}

impl ReportConfig {
    pub fn report_url(&self) -> Result<Url, ConfigError> {
        let mut url = Url::parse(&self.url).map_err(|err| ConfigError::InvalidUrl {
            url: self.url.clone(),
            message: err.to_string(),
        })?;
        if let Some(day) = self.day_offset {
            let others: Vec<(String, String)> = url
                .query_pairs()
                .filter(|(key, _)| key != DAY_PARAM)
                .map(|(key, value)| (key.into_owned(), value.into_owned()))
                .collect();
            url.query_pairs_mut()
                .clear()
                .extend_pairs(others)
                .append_pair(DAY_PARAM, &day.to_string());
        }
        Ok(url)
    }
}

/// Read an exclusions file (one phrase per line, `#` comments).
pub fn load_exclusions(path: &Path) -> Result<ExclusionList, ConfigError> {
    let text = fs::read_to_string(path).map_err(|source| ConfigError::Exclusions {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(ExclusionList::parse_lines(&text))
}
