use std::path::Path;

use booking_core::BookingRecord;
use booking_engine::{Exporter, XlsxExporter};
use calamine::{open_workbook, Reader, Xlsx};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn read_rows(path: &Path) -> Vec<Vec<String>> {
    let mut workbook: Xlsx<_> = open_workbook(path).expect("open workbook");
    let sheet = workbook.sheet_names()[0].clone();
    let range = workbook.worksheet_range(&sheet).expect("worksheet range");
    range
        .rows()
        .map(|row| row.iter().map(|cell| cell.to_string()).collect())
        .collect()
}

fn header() -> Vec<String> {
    ["Name", "Street", "City", "Zip Code"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

#[test]
fn writes_header_and_one_row_per_record() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("booking_reports.xlsx");
    let records = vec![
        BookingRecord {
            name: "John Smith".to_string(),
            street: "123 Main St".to_string(),
            city: "Houston".to_string(),
            zip_code: "77002".to_string(),
        },
        BookingRecord {
            name: "Ann Lee".to_string(),
            ..BookingRecord::default()
        },
    ];

    let summary = XlsxExporter.export(&records, &path).unwrap();
    assert_eq!(summary.record_count, 2);
    assert_eq!(summary.output_path, path);

    let rows = read_rows(&path);
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0], header());
    assert_eq!(rows[1], vec!["John Smith", "123 Main St", "Houston", "77002"]);
    assert_eq!(rows[2], vec!["Ann Lee", "", "", ""]);
}

#[test]
fn zip_code_stays_text() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("zip.xlsx");
    let records = vec![BookingRecord {
        name: "A".to_string(),
        street: "1 Oak St".to_string(),
        city: "Boston".to_string(),
        zip_code: "02108".to_string(),
    }];

    XlsxExporter.export(&records, &path).unwrap();
    assert_eq!(read_rows(&path)[1][3], "02108");
}

#[test]
fn empty_record_set_writes_header_only() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("empty.xlsx");

    let summary = XlsxExporter.export(&[], &path).unwrap();
    assert_eq!(summary.record_count, 0);
    assert_eq!(read_rows(&path), vec![header()]);
}
