use crate::router::handle;
use crate::tests::utils::{body_string, get, get_with_cookie, session_cookie, test_controller};

#[test]
fn dashboard_page_loads_with_controls_and_table() {
    let controller = test_controller();

    let resp = handle(get("/"), &controller).expect("Failed to handle request");
    assert_eq!(resp.status(), 200);
    let cookie = session_cookie(&resp);
    assert!(cookie.starts_with("dash_session="));

    let body = body_string(resp);
    assert!(body.contains("<!DOCTYPE html>"));
    assert!(body.contains("PNW Car Search Dashboard"));
    assert!(body.contains("All States"));
    assert!(body.contains("All Makes"));
    assert!(body.contains("Tri-Cities"));
    assert!(body.contains(r#"id="tab-content""#));
    assert!(body.contains("Found <strong>6</strong> listings."));
}

#[test]
fn known_session_is_not_reissued() {
    let controller = test_controller();
    let first = handle(get("/"), &controller).unwrap();
    let cookie = session_cookie(&first);

    let second = handle(get_with_cookie("/view", &cookie), &controller).unwrap();
    assert!(second.headers().get("Set-Cookie").is_none());
}

#[test]
fn view_fragment_is_a_partial() {
    let controller = test_controller();

    let resp = handle(get("/view?tab=tab-table"), &controller).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("<table"));
    assert!(!body.contains("<html"));
}

#[test]
fn table_rows_are_newest_first_then_cheapest() {
    let controller = test_controller();

    let body = body_string(handle(get("/view?state=WA"), &controller).unwrap());

    // All three Washington rows were posted the same day.
    let toyota = body.find("Toyota").expect("Toyota row");
    let ford = body.find("Ford").expect("Ford row");
    let honda = body.find("Honda").expect("Honda row");
    assert!(toyota < ford && ford < honda);
    assert!(!body.contains("Los Angeles"));
}

#[test]
fn map_tab_renders_markers_for_matches() {
    let controller = test_controller();

    let body = body_string(handle(get("/view?tab=tab-map"), &controller).unwrap());
    assert!(body.contains(r#"id="car-map""#));
    assert!(body.contains("data-center="));
    assert!(body.contains("Showing <strong>6</strong> listings."));
}

#[test]
fn map_tab_without_matches_shows_a_notice() {
    let controller = test_controller();

    let resp = handle(get("/view?tab=tab-map&price_min=50000"), &controller).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("No listings match the current filters."));
    assert!(!body.contains("car-map"));
}

#[test]
fn analysis_tab_reflects_the_filtered_subset() {
    let controller = test_controller();

    let body = body_string(handle(get("/view?tab=tab-analysis&make=Honda"), &controller).unwrap());
    assert!(body.contains("Median Car Price in Selected Area"));
    assert!(body.contains("$20000"));
    assert!(body.contains("<svg"));
    assert!(!body.contains("Toyota"));
}

#[test]
fn analysis_tab_with_empty_subset_renders_without_charts() {
    let controller = test_controller();

    let body = body_string(handle(get("/view?tab=analysis&year_min=2030"), &controller).unwrap());
    assert!(body.contains("No listings to chart."));
    assert!(!body.contains("<svg"));
}

#[test]
fn city_fragment_follows_state_selection() {
    let controller = test_controller();

    let body = body_string(handle(get("/cities?state=OR"), &controller).unwrap());
    assert!(body.contains("All Locations"));
    assert!(body.contains("Portland"));
    assert!(!body.contains("Seattle"));
}
