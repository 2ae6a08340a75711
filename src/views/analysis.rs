// src/views/analysis.rs

use crate::domain::Listing;
use crate::views::{Render, ViewPayload};
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MedianPoint {
    pub date: NaiveDate,
    pub median_price: f64,
}

/// Median price per posting day for one make.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MedianSeries {
    pub make: String,
    pub points: Vec<MedianPoint>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScatterPoint {
    /// `ln(1 + odometer)`
    pub log_odometer: f64,
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MakeCount {
    pub make: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisPayload {
    pub median_series: Vec<MedianSeries>,
    pub scatter: Vec<ScatterPoint>,
    pub make_counts: Vec<MakeCount>,
    /// Median over the whole subset, shown as the headline indicator.
    pub median_price: Option<f64>,
}

pub struct AnalysisView;

impl Render for AnalysisView {
    fn render(&self, rows: &[&Listing]) -> ViewPayload {
        ViewPayload::Analysis(AnalysisPayload {
            median_series: median_series(rows),
            scatter: scatter(rows),
            make_counts: make_counts(rows),
            median_price: median(rows.iter().map(|l| l.price).collect()),
        })
    }
}

/// One series per make, in first-seen order; points ordered by date.
pub fn median_series(rows: &[&Listing]) -> Vec<MedianSeries> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<(&str, BTreeMap<NaiveDate, Vec<f64>>)> = Vec::new();

    for l in rows {
        let slot = *index.entry(l.make.as_str()).or_insert_with(|| {
            groups.push((l.make.as_str(), BTreeMap::new()));
            groups.len() - 1
        });
        groups[slot]
            .1
            .entry(l.time_posted)
            .or_default()
            .push(l.price);
    }

    groups
        .into_iter()
        .map(|(make, by_day)| MedianSeries {
            make: make.to_string(),
            points: by_day
                .into_iter()
                .filter_map(|(date, prices)| {
                    median(prices).map(|median_price| MedianPoint { date, median_price })
                })
                .collect(),
        })
        .collect()
}

pub fn scatter(rows: &[&Listing]) -> Vec<ScatterPoint> {
    rows.iter()
        .map(|l| ScatterPoint {
            log_odometer: l.odometer.ln_1p(),
            price: l.price,
        })
        .collect()
}

/// Exact counts per make, largest first; equal counts keep first-seen order.
pub fn make_counts(rows: &[&Listing]) -> Vec<MakeCount> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<MakeCount> = Vec::new();

    for l in rows {
        match index.get(l.make.as_str()) {
            Some(&slot) => counts[slot].count += 1,
            None => {
                index.insert(l.make.as_str(), counts.len());
                counts.push(MakeCount {
                    make: l.make.clone(),
                    count: 1,
                });
            }
        }
    }

    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}

/// Middle value; the mean of the two middle values for even counts.
pub fn median(mut values: Vec<f64>) -> Option<f64> {
    if values.is_empty() {
        return None;
    }

    values.sort_by(f64::total_cmp);
    let mid = values.len() / 2;
    if values.len() % 2 == 0 {
        Some((values[mid - 1] + values[mid]) / 2.0)
    } else {
        Some(values[mid])
    }
}
