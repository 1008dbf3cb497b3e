//! Booking engine: fetch, decode, export and the run pipeline around the core extractor.
mod config;
mod decode;
mod export;
mod fetch;
mod persist;
mod pipeline;
mod types;

pub use config::{
    load_exclusions, ConfigError, ReportConfig, DEFAULT_OUTPUT_FILENAME, DEFAULT_REPORT_URL,
};
pub use decode::{decode_page, DecodedPage};
pub use export::{ExportError, ExportSummary, Exporter, XlsxExporter};
pub use fetch::{FetchSettings, Fetcher, ReqwestFetcher};
pub use persist::{ensure_output_dir, AtomicFileWriter, PersistError};
pub use pipeline::{PipelineError, ReportPipeline, RunSummary};
pub use types::{FailureKind, FetchError, FetchMetadata, FetchOutput};
