use crate::controller::Controller;
use crate::dataset::loader::load_reader;
use crate::dataset::DatasetStore;
use crate::domain::Listing;
use astra::{Body, Request, Response};
use chrono::NaiveDate;
use http::Method;
use std::io::Read;
use std::sync::Arc;

const SAMPLE_TSV: &str = include_str!("../../data/sample_listings.tsv");

/// The fixture export: six usable rows, one malformed line and one row with a
/// zero predicted price.
pub fn sample_store() -> DatasetStore {
    load_reader(SAMPLE_TSV.as_bytes())
        .unwrap_or_else(|e| panic!("sample listings failed to load: {e}"))
        .store
}

/// Two rows: a cheap 2015 Toyota in Los Angeles and a 2018 Honda in Seattle.
pub fn example_store() -> DatasetStore {
    let mut toyota = listing(0, "CA", "Los Angeles", "Toyota", 10000.0, 50000.0, 2015, "2021-01-01");
    toyota.latitude = 34.0;
    toyota.longitude = -118.2;

    let mut honda = listing(1, "WA", "Seattle", "Honda", 20000.0, 30000.0, 2018, "2021-06-01");
    honda.latitude = 47.6;
    honda.longitude = -122.3;

    DatasetStore::new(vec![toyota, honda])
}

#[allow(clippy::too_many_arguments)]
pub fn listing(
    id: usize,
    state: &str,
    location: &str,
    make: &str,
    price: f64,
    odometer: f64,
    year: i32,
    posted: &str,
) -> Listing {
    Listing {
        id,
        state: state.to_string(),
        location: location.to_string(),
        make: make.to_string(),
        predicted_price: price,
        price,
        time_posted: NaiveDate::parse_from_str(posted, "%Y-%m-%d")
            .unwrap_or_else(|e| panic!("bad test date {posted}: {e}")),
        odometer,
        year,
        latitude: 0.0,
        longitude: 0.0,
        title_text: format!("{year} {make}"),
    }
}

pub fn test_controller() -> Controller {
    Controller::new(Arc::new(sample_store()), 16)
}

pub fn get(uri: &str) -> Request {
    http::Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn get_with_cookie(uri: &str, cookie: &str) -> Request {
    http::Request::builder()
        .method(Method::GET)
        .uri(uri)
        .header("Cookie", cookie)
        .body(Body::empty())
        .unwrap()
}

/// The `name=value` part of the response's session cookie.
pub fn session_cookie(resp: &Response) -> String {
    resp.headers()
        .get("Set-Cookie")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .expect("response should set a session cookie")
        .to_string()
}

pub fn body_string(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}
