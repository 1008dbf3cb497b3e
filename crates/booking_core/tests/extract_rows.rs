use booking_core::{BookingExtractor, BookingRecord, ExclusionList, RecordExtractor};
use pretty_assertions::assert_eq;

const HEADER_ROW: &str = "<tr><th>Inmate</th></tr>";

fn page(rows: &[&str]) -> String {
    format!(
        r#"<html><body>
        <table class="other"><tr><td><strong>Decoy</strong></td></tr></table>
        <table class="booking_reports_list">{HEADER_ROW}{}</table>
        </body></html>"#,
        rows.concat()
    )
}

fn booking_row(name: &str, street: &str, city_zip: &str, charges: &[&str]) -> String {
    let items: String = charges.iter().map(|c| format!("<li>{c}</li>")).collect();
    format!(
        "<tr><td><strong>{name}</strong><br>{street}<br>{city_zip}<ul>{items}</ul></td></tr>"
    )
}

fn extract(html: &str) -> Vec<BookingRecord> {
    engine_logging::initialize_for_tests();
    BookingExtractor::default().extract(html).records
}

#[test]
fn retains_row_without_excluded_charge() {
    let row = booking_row("John Smith", "123 Main St", "Houston, 77002", &["Theft"]);
    let records = extract(&page(&[&row]));
    assert_eq!(
        records,
        vec![BookingRecord {
            name: "John Smith".to_string(),
            street: "123 Main St".to_string(),
            city: "Houston".to_string(),
            zip_code: "77002".to_string(),
        }]
    );
}

#[test]
fn drops_row_with_excluded_charge() {
    let kept = booking_row("John Smith", "123 Main St", "Houston, 77002", &["Theft"]);
    let dropped = booking_row("Jane Roe", "123 Main St", "Houston, 77002", &["Homeless"]);
    let extraction = BookingExtractor::default().extract(&page(&[&kept, &dropped]));
    assert_eq!(extraction.records.len(), 1);
    assert_eq!(extraction.records[0].name, "John Smith");
    assert_eq!(extraction.stats.rows_seen, 2);
    assert_eq!(extraction.stats.rows_excluded, 1);
}

#[test]
fn exclusion_matches_case_insensitive_substring() {
    let row = booking_row(
        "A",
        "1 Oak St",
        "Houston, 77002",
        &["Theft", "FAILURE TO APPEAR AT HEARING"],
    );
    assert!(extract(&page(&[&row])).is_empty());
}

#[test]
fn exclusion_checks_street_and_city() {
    let by_street = booking_row("A", "717 e 11th st", "Chattanooga, 37403", &["Theft"]);
    let by_city = booking_row("B", "1 Oak St", "Homeless, 00000", &[]);
    assert!(extract(&page(&[&by_street, &by_city])).is_empty());
}

#[test]
fn zip_code_is_not_checked_for_exclusions() {
    let custom = ExclusionList::new(["77002"]);
    let row = booking_row("A", "1 Oak St", "Houston, 77002", &[]);
    let extraction = BookingExtractor::new("booking_reports_list", custom).extract(&page(&[&row]));
    assert_eq!(extraction.records.len(), 1);
}

#[test]
fn missing_name_yields_empty_string() {
    let row = "<tr><td>No bold<br>1 Oak St<br>Houston, 77002</td></tr>";
    let records = extract(&page(&[row]));
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name, "");
    assert_eq!(records[0].street, "1 Oak St");
}

#[test]
fn fewer_than_two_breaks_leaves_address_empty() {
    let row = "<tr><td><strong> Ann Lee </strong><br>1 Oak St, Houston, 77002</td></tr>";
    let records = extract(&page(&[row]));
    assert_eq!(
        records,
        vec![BookingRecord {
            name: "Ann Lee".to_string(),
            ..BookingRecord::default()
        }]
    );
}

#[test]
fn city_zip_requires_exactly_two_parts() {
    let three = booking_row("A", "1 Oak St", "Houston, TX, 77002", &[]);
    let one = booking_row("B", "2 Oak St", "Houston 77002", &[]);
    let records = extract(&page(&[&three, &one]));
    assert_eq!(records.len(), 2);
    for record in &records {
        assert_eq!(record.city, "");
        assert_eq!(record.zip_code, "");
        assert!(!record.street.is_empty());
    }
}

#[test]
fn row_without_cell_is_skipped() {
    let no_cell = "<tr><th>Just a heading</th></tr>";
    let row = booking_row("A", "1 Oak St", "Houston, 77002", &[]);
    let extraction = BookingExtractor::default().extract(&page(&[no_cell, &row]));
    assert_eq!(extraction.records.len(), 1);
    assert_eq!(extraction.stats.rows_without_cell, 1);
}

#[test]
fn header_row_is_never_emitted() {
    let html = r#"<table class="booking_reports_list">
        <tr><td><strong>Header Name</strong><br>H St<br>Head, 00000</td></tr>
        <tr><td><strong>Row Name</strong></td></tr>
    </table>"#;
    let records = extract(html);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name, "Row Name");
}

#[test]
fn missing_table_yields_empty_extraction() {
    let extraction =
        BookingExtractor::default().extract("<html><body><p>No bookings</p></body></html>");
    assert!(!extraction.stats.table_found);
    assert!(extraction.records.is_empty());
}

#[test]
fn rows_keep_document_order() {
    let rows: Vec<String> = ["C", "A", "B"]
        .iter()
        .map(|name| booking_row(name, "1 Oak St", "Houston, 77002", &["Theft"]))
        .collect();
    let refs: Vec<&str> = rows.iter().map(String::as_str).collect();
    let names: Vec<String> = extract(&page(&refs)).into_iter().map(|r| r.name).collect();
    assert_eq!(names, vec!["C", "A", "B"]);
}

#[test]
fn custom_table_class_is_honoured() {
    let html = r#"<table class="wide daily"><tr><th>h</th></tr><tr><td><strong>Z</strong></td></tr></table>"#;
    let extraction = BookingExtractor::new("daily", ExclusionList::default()).extract(html);
    assert!(extraction.stats.table_found);
    assert_eq!(extraction.records.len(), 1);
}
