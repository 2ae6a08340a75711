use crate::controller::Controller;
use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{body_string, example_store, get, get_with_cookie, session_cookie, test_controller};
use serde_json::Value;
use std::sync::Arc;

fn json(resp: astra::Response) -> Value {
    serde_json::from_str(&body_string(resp)).expect("body should be JSON")
}

#[test]
fn price_odometer_and_year_ranges_keep_only_the_toyota() {
    let controller = Controller::new(Arc::new(example_store()), 4);
    let uri = "/api/view?state=All&price_min=0&price_max=15000&odometer_min=0&odometer_max=100000\
               &year_min=2010&year_max=2020&sort=ascending&time=descending";

    let payload = json(handle(get(uri), &controller).unwrap());
    assert_eq!(payload["view"], "table");

    let records = payload["records"].as_array().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["make"], "Toyota");
}

#[test]
fn washington_selection_keeps_the_honda_and_offers_seattle() {
    let controller = Controller::new(Arc::new(example_store()), 4);

    let payload = json(handle(get("/api/view?state=WA"), &controller).unwrap());
    let records = payload["records"].as_array().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["make"], "Honda");

    let cities = json(handle(get("/api/cities?state=WA"), &controller).unwrap());
    assert_eq!(cities, serde_json::json!(["Seattle"]));
}

#[test]
fn all_states_offer_every_city() {
    let controller = test_controller();

    let cities = json(handle(get("/api/cities?state=All"), &controller).unwrap());
    assert_eq!(
        cities,
        serde_json::json!(["Los Angeles", "Seattle", "Tri-Cities", "Portland"])
    );
}

#[test]
fn table_payload_omits_internal_columns() {
    let controller = test_controller();

    let payload = json(handle(get("/api/view"), &controller).unwrap());
    let record = &payload["records"][0];
    assert!(record.get("latitude").is_none());
    assert!(record.get("title_text").is_none());
    assert!(record.get("id").is_none());
    assert_eq!(payload["columns"][0], "state");
}

#[test]
fn map_payload_for_empty_subset_has_no_center() {
    let controller = test_controller();

    let payload = json(handle(get("/api/view?tab=map&make=Tesla"), &controller).unwrap());
    assert_eq!(payload["view"], "map");
    assert!(payload["markers"].as_array().unwrap().is_empty());
    assert!(payload["center"].is_null());
    assert_eq!(payload["zoom"], 5);
}

#[test]
fn current_view_follows_the_last_request_of_the_session() {
    let controller = test_controller();

    let first = handle(get("/view?make=Ford"), &controller).unwrap();
    let cookie = session_cookie(&first);

    let rows = json(handle(get_with_cookie("/api/current", &cookie), &controller).unwrap());
    let makes: Vec<&str> = rows
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["make"].as_str().unwrap())
        .collect();
    assert_eq!(makes, vec!["Ford", "Ford"]);
    // Newer posting first.
    assert_eq!(rows[0]["location"], "Tri-Cities");

    // Another browser has its own cache.
    let other = json(handle(get("/api/current"), &controller).unwrap());
    assert_eq!(other.as_array().unwrap().len(), 6);
}

#[test]
fn unparseable_controls_are_bad_requests() {
    let controller = test_controller();

    for uri in ["/view?price_min=abc", "/api/view?tab=tab-chart", "/?sort=upwards"] {
        match handle(get(uri), &controller) {
            Err(ServerError::BadRequest(_)) => {}
            other => panic!("{uri} should be a bad request, got {:?}", other.map(|r| r.status())),
        }
    }
}
