use crate::views::MapPayload;
use maud::{html, Markup, PreEscaped};

/// Leaflet bootstrap. Reads the payload from the container's data attributes
/// so the fragment works both on first load and after an htmx swap.
const MAP_SCRIPT: &str = r#"
(function () {
  function init() {
    var el = document.getElementById('car-map');
    if (!el || el.dataset.ready || typeof L === 'undefined') { return; }
    el.dataset.ready = '1';
    var center = JSON.parse(el.dataset.center);
    var map = L.map(el).setView([center.lat, center.lon], Number(el.dataset.zoom));
    L.tileLayer('https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png', {
      attribution: '&copy; OpenStreetMap contributors'
    }).addTo(map);
    JSON.parse(el.dataset.markers).forEach(function (m) {
      L.circleMarker([m.lat, m.lon], { radius: 5, color: 'blue', fillOpacity: 0.4, weight: 1 })
        .bindTooltip(m.label)
        .addTo(map);
    });
  }
  if (document.readyState === 'complete') { init(); } else { window.addEventListener('load', init); }
})();
"#;

pub fn map_view(payload: &MapPayload) -> Markup {
    // An empty subset has no center to show.
    let Some(center) = payload.center else {
        return html! {
            p class="empty" { "No listings match the current filters." }
        };
    };

    let center_json = serde_json::to_string(&center).unwrap_or_default();
    let markers_json = serde_json::to_string(&payload.markers).unwrap_or_default();

    html! {
        p class="summary" {
            "Showing " strong { (payload.markers.len()) } " listings."
        }
        div
            id="car-map"
            class="map"
            data-center=(center_json)
            data-zoom=(payload.zoom)
            data-markers=(markers_json)
        {}
        script { (PreEscaped(MAP_SCRIPT)) }
    }
}
