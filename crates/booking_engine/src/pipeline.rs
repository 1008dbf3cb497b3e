use std::path::PathBuf;

use booking_core::{BookingExtractor, ExtractionStats, RecordExtractor};
use engine_logging::{engine_info, engine_warn};
use thiserror::Error;

use crate::config::{ConfigError, ReportConfig};
use crate::decode::decode_page;
use crate::export::{ExportError, Exporter, XlsxExporter};
use crate::fetch::{Fetcher, ReqwestFetcher};
use crate::FetchError;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("failed to retrieve the webpage: {0}")]
    Fetch(#[from] FetchError),
    #[error("export failed: {0}")]
    Export(#[from] ExportError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub url: String,
    pub stats: ExtractionStats,
    pub records_written: usize,
    pub output_path: PathBuf,
}

/// Fetch, extract, export. One page, one output file, in that order.
pub struct ReportPipeline {
    fetcher: Box<dyn Fetcher>,
    exporter: Box<dyn Exporter>,
}

impl ReportPipeline {
    pub fn new(fetcher: Box<dyn Fetcher>, exporter: Box<dyn Exporter>) -> Self {
        Self { fetcher, exporter }
    }

    /// reqwest fetcher built from `config.fetch`, xlsx exporter.
    pub fn from_config(config: &ReportConfig) -> Self {
        Self::new(
            Box::new(ReqwestFetcher::new(config.fetch.clone())),
            Box::new(XlsxExporter),
        )
    }

    /// A failed fetch returns before anything is written.
    pub async fn run(&self, config: &ReportConfig) -> Result<RunSummary, PipelineError> {
        let url = config.report_url()?.to_string();
        let page = self.fetcher.fetch(&url).await?;

        let decoded = decode_page(&page.bytes, page.metadata.content_type.as_deref());
        let extractor =
            BookingExtractor::new(config.table_class.clone(), config.exclusions.clone());
        let extraction = extractor.extract(&decoded.html);
        if !extraction.stats.table_found {
            engine_warn!("Writing an empty report; no booking table at {}", url);
        }

        let summary = self
            .exporter
            .export(&extraction.records, &config.output_path)?;
        engine_info!(
            "Wrote {} records to {}",
            summary.record_count,
            summary.output_path.display()
        );

        Ok(RunSummary {
            url: page.metadata.final_url,
            stats: extraction.stats,
            records_written: summary.record_count,
            output_path: summary.output_path,
        })
    }
}
