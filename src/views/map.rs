use crate::domain::Listing;
use crate::views::{Render, ViewPayload};
use serde::Serialize;

pub const MAP_ZOOM: u8 = 5;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub lat: f64,
    pub lon: f64,
    pub label: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Center {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapPayload {
    pub markers: Vec<Marker>,
    /// Mean of the displayed coordinates; `None` when nothing is displayed.
    pub center: Option<Center>,
    pub zoom: u8,
}

pub struct MapView;

impl Render for MapView {
    fn render(&self, rows: &[&Listing]) -> ViewPayload {
        let markers = rows
            .iter()
            .map(|l| Marker {
                lat: l.latitude,
                lon: l.longitude,
                label: marker_label(l),
            })
            .collect();

        ViewPayload::Map(MapPayload {
            markers,
            center: center_of(rows),
            zoom: MAP_ZOOM,
        })
    }
}

fn marker_label(l: &Listing) -> String {
    format!(
        "{}, {} | {} | ${:.0} | {:.0} mi",
        l.location, l.state, l.make, l.price, l.odometer
    )
}

fn center_of(rows: &[&Listing]) -> Option<Center> {
    if rows.is_empty() {
        return None;
    }

    let n = rows.len() as f64;
    let lat = rows.iter().map(|l| l.latitude).sum::<f64>() / n;
    let lon = rows.iter().map(|l| l.longitude).sum::<f64>() / n;
    (lat.is_finite() && lon.is_finite()).then_some(Center { lat, lon })
}
