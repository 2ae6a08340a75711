pub mod analysis;
pub mod map;
pub mod table;

use crate::views::ViewPayload;
use maud::Markup;

/// Content of `#tab-content` for whichever payload was rendered.
pub fn tab_content(payload: &ViewPayload) -> Markup {
    match payload {
        ViewPayload::Table(table) => table::table_view(table),
        ViewPayload::Map(map) => map::map_view(map),
        ViewPayload::Analysis(analysis) => analysis::analysis_view(analysis),
    }
}
