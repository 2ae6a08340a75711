pub mod analysis;
pub mod map;
pub mod table;

pub use analysis::{AnalysisPayload, AnalysisView};
pub use map::{MapPayload, MapView};
pub use table::{TablePayload, TableRecord, TableView};

use crate::domain::{Listing, Tab};
use serde::Serialize;

/// Display payload for whichever tab is active.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "view", rename_all = "lowercase")]
pub enum ViewPayload {
    Table(TablePayload),
    Map(MapPayload),
    Analysis(AnalysisPayload),
}

/// Turns an ordered subset into a display payload.
pub trait Render {
    fn render(&self, rows: &[&Listing]) -> ViewPayload;
}

pub fn renderer(tab: Tab) -> &'static dyn Render {
    match tab {
        Tab::Table => &TableView,
        Tab::Map => &MapView,
        Tab::Analysis => &AnalysisView,
    }
}

pub fn render(tab: Tab, rows: &[&Listing]) -> ViewPayload {
    renderer(tab).render(rows)
}
