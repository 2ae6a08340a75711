// src/dataset/loader.rs

use crate::dataset::normalize::{canonical_location, title_case};
use crate::dataset::{DatasetError, DatasetStore};
use crate::domain::Listing;
use chrono::DateTime;
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info, warn};

/// Columns that must be present in the header row.
pub const REQUIRED_COLUMNS: [&str; 10] = [
    "state",
    "location",
    "make",
    "predicted_price",
    "price",
    "time_posted",
    "odometer",
    "year",
    "latitude",
    "longitude",
];

/// One line of the export as written. Year and timestamp sometimes arrive
/// float-formatted, so both are read as f64 and narrowed afterwards.
#[derive(Debug, Deserialize)]
struct RawListing {
    state: String,
    location: String,
    make: String,
    predicted_price: f64,
    price: f64,
    time_posted: f64,
    odometer: f64,
    year: f64,
    latitude: f64,
    longitude: f64,
    #[serde(default)]
    title_text: String,
}

impl RawListing {
    /// Cleans the raw row into a `Listing`. Returns `None` when a field that
    /// survived deserialization still cannot be interpreted, including a
    /// literal `NaN` or `inf` in any numeric column.
    fn into_listing(self, id: usize) -> Option<Listing> {
        let numeric = [
            self.price,
            self.time_posted,
            self.odometer,
            self.year,
            self.latitude,
            self.longitude,
        ];
        if !numeric.iter().all(|v| v.is_finite()) {
            return None;
        }

        let time_posted = DateTime::from_timestamp(self.time_posted.trunc() as i64, 0)?.date_naive();

        Some(Listing {
            id,
            state: self.state.trim().to_string(),
            location: canonical_location(&self.location),
            make: title_case(self.make.trim()),
            predicted_price: self.predicted_price,
            price: self.price,
            time_posted,
            odometer: self.odometer,
            year: self.year as i32,
            latitude: self.latitude,
            longitude: self.longitude,
            title_text: self.title_text,
        })
    }
}

/// What a load produced, plus how many lines were discarded and why.
#[derive(Debug)]
pub struct LoadReport {
    pub store: DatasetStore,
    /// Lines that could not be parsed.
    pub malformed: usize,
    /// Parsed rows dropped because their predicted price was not positive.
    pub excluded: usize,
}

pub fn load_path(path: impl AsRef<Path>) -> Result<LoadReport, DatasetError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| DatasetError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let report = load_reader(file)?;
    info!(
        path = %path.display(),
        rows = report.store.len(),
        malformed = report.malformed,
        excluded = report.excluded,
        "loaded listings"
    );

    Ok(report)
}

/// Reads a tab-separated listings export. Malformed lines are skipped; a
/// missing required column fails the whole load.
pub fn load_reader<R: Read>(reader: R) -> Result<LoadReport, DatasetError> {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(true)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h.trim() == column) {
            return Err(DatasetError::MissingColumn(column));
        }
    }

    let mut listings = Vec::new();
    let mut malformed = 0;
    let mut excluded = 0;

    for (line, record) in rdr.deserialize::<RawListing>().enumerate() {
        let raw = match record {
            Ok(raw) => raw,
            Err(e) => {
                debug!(line = line + 2, error = %e, "skipping malformed line");
                malformed += 1;
                continue;
            }
        };

        // NaN fails this comparison too.
        if !(raw.predicted_price > 0.0) {
            excluded += 1;
            continue;
        }

        match raw.into_listing(listings.len()) {
            Some(listing) => listings.push(listing),
            None => {
                debug!(line = line + 2, "skipping line with a non-finite or out-of-range value");
                malformed += 1;
            }
        }
    }

    if malformed > 0 {
        warn!(malformed, "skipped malformed listing lines");
    }

    Ok(LoadReport {
        store: DatasetStore::new(listings),
        malformed,
        excluded,
    })
}
