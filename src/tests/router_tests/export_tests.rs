use crate::errors::ServerError;
use crate::responses::download::XLSX_CONTENT_TYPE;
use crate::responses::error_response;
use crate::router::handle;
use crate::tests::utils::{body_string, get, get_with_cookie, session_cookie, test_controller};
use astra::Body;
use http::{Method, Request};

#[test]
fn export_downloads_the_cached_view() {
    let controller = test_controller();
    let first = handle(get("/view?state=OR"), &controller).unwrap();
    let cookie = session_cookie(&first);

    let resp = handle(get_with_cookie("/export", &cookie), &controller).expect("Export failed");
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap().to_str().unwrap(),
        XLSX_CONTENT_TYPE
    );
    assert!(resp
        .headers()
        .get("Content-Disposition")
        .unwrap()
        .to_str()
        .unwrap()
        .contains("car_listings.xlsx"));
}

#[test]
fn stylesheet_is_served() {
    let controller = test_controller();

    let resp = handle(get("/static/main.css"), &controller).unwrap();
    assert_eq!(resp.status(), 200);
    assert!(resp
        .headers()
        .get("Content-Type")
        .unwrap()
        .to_str()
        .unwrap()
        .starts_with("text/css"));
}

#[test]
fn unknown_routes_render_a_404_page() {
    let controller = test_controller();

    let err = handle(get("/nope"), &controller).unwrap_err();
    assert!(matches!(err, ServerError::NotFound));

    let resp = error_response(err);
    assert_eq!(resp.status(), 404);
    assert!(body_string(resp).contains("Error 404"));
}

#[test]
fn only_get_is_routed() {
    let controller = test_controller();

    let req = Request::builder()
        .method(Method::POST)
        .uri("/")
        .body(Body::empty())
        .unwrap();

    assert!(matches!(handle(req, &controller), Err(ServerError::NotFound)));
}

#[test]
fn bad_request_page_shows_the_reason() {
    let resp = error_response(ServerError::BadRequest("invalid price_min: 'abc'".into()));
    assert_eq!(resp.status(), 400);
    let body = body_string(resp);
    assert!(body.contains("invalid price_min"));
}
