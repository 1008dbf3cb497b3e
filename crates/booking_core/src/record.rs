/// Output columns, in the order records are written.
pub const COLUMN_HEADERS: [&str; 4] = ["Name", "Street", "City", "Zip Code"];

/// One retained row of the booking report. Every field may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingRecord {
    pub name: String,
    pub street: String,
    pub city: String,
    pub zip_code: String,
}

impl BookingRecord {
    /// Field values in `COLUMN_HEADERS` order.
    pub fn columns(&self) -> [&str; 4] {
        [&self.name, &self.street, &self.city, &self.zip_code]
    }
}
