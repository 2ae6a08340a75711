use crate::domain::{Listing, TABLE_COLUMNS};
use crate::views::{Render, ViewPayload};
use chrono::NaiveDate;
use serde::Serialize;

/// A listing with the internal-only columns dropped. Field order is column order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableRecord {
    pub state: String,
    pub location: String,
    pub make: String,
    pub predicted_price: f64,
    pub price: f64,
    pub time_posted: NaiveDate,
    pub odometer: f64,
    pub year: i32,
}

impl From<&Listing> for TableRecord {
    fn from(l: &Listing) -> Self {
        Self {
            state: l.state.clone(),
            location: l.location.clone(),
            make: l.make.clone(),
            predicted_price: l.predicted_price,
            price: l.price,
            time_posted: l.time_posted,
            odometer: l.odometer,
            year: l.year,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TablePayload {
    pub columns: Vec<&'static str>,
    pub records: Vec<TableRecord>,
}

pub struct TableView;

impl Render for TableView {
    fn render(&self, rows: &[&Listing]) -> ViewPayload {
        ViewPayload::Table(TablePayload {
            columns: TABLE_COLUMNS.to_vec(),
            records: rows.iter().map(|&l| TableRecord::from(l)).collect(),
        })
    }
}
