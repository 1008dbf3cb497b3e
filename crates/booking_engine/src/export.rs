use std::path::{Path, PathBuf};

use booking_core::{BookingRecord, COLUMN_HEADERS};
use engine_logging::engine_info;
use rust_xlsxwriter::{Workbook, XlsxError};

use crate::persist::{AtomicFileWriter, PersistError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub record_count: usize,
    pub output_path: PathBuf,
}

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("xlsx error: {0}")]
    Xlsx(#[from] XlsxError),
    #[error("persist error: {0}")]
    Persist(#[from] PersistError),
}

/// Writes retained records to a tabular file.
pub trait Exporter: Send + Sync {
    fn export(&self, records: &[BookingRecord], path: &Path) -> Result<ExportSummary, ExportError>;
}

/// One worksheet, header row plus one row per record, no formatting.
#[derive(Debug, Default)]
pub struct XlsxExporter;

impl XlsxExporter {
    pub fn to_bytes(&self, records: &[BookingRecord]) -> Result<Vec<u8>, ExportError> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();

        for (col, header) in COLUMN_HEADERS.iter().enumerate() {
            worksheet.write_string(0, col as u16, *header)?;
        }
        for (index, record) in records.iter().enumerate() {
            let row = (index + 1) as u32;
            for (col, value) in record.columns().iter().enumerate() {
                if !value.is_empty() {
                    worksheet.write_string(row, col as u16, *value)?;
                }
            }
        }

        Ok(workbook.save_to_buffer()?)
    }
}

impl Exporter for XlsxExporter {
    fn export(&self, records: &[BookingRecord], path: &Path) -> Result<ExportSummary, ExportError> {
        let bytes = self.to_bytes(records)?;
        let output_path = AtomicFileWriter::new(path).write(&bytes)?;
        engine_info!("Data saved to {}", output_path.display());
        Ok(ExportSummary {
            record_count: records.len(),
            output_path,
        })
    }
}
