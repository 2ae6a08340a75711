// src/domain/listing.rs

use chrono::NaiveDate;
use serde::Serialize;

/// Columns shown in the listings table and the spreadsheet export, in schema order.
/// Row index, coordinates and the free-text title are internal-only.
pub const TABLE_COLUMNS: [&str; 8] = [
    "state",
    "location",
    "make",
    "predicted_price",
    "price",
    "time_posted",
    "odometer",
    "year",
];

/// One cleaned row of the base table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Listing {
    /// Position in the base table.
    pub id: usize,

    pub state: String,
    /// Title-cased, with known aliases resolved.
    pub location: String,
    /// Title-cased.
    pub make: String,

    pub predicted_price: f64,
    pub price: f64,
    pub time_posted: NaiveDate,
    pub odometer: f64,
    pub year: i32,

    pub latitude: f64,
    pub longitude: f64,
    pub title_text: String,
}
