use crate::controller::Controller;
use crate::errors::ServerError;
use crate::query::{Controls, QueryParams};
use crate::responses::{css_response, html_response, json_response, ResultResp};
use crate::session::SessionId;
use crate::spreadsheets::export_view_xlsx;
use crate::templates;
use crate::templates::components::{city_select, ControlsVm};
use crate::templates::pages::{dashboard_page, DashboardVm};
use crate::views::ViewPayload;
use astra::Request;
use tracing::{debug, warn};

const MAIN_CSS: &str = include_str!("../static/main.css");

/// Routes one request. A request without a usable session cookie gets a new
/// session, announced with `Set-Cookie` on a successful response.
pub fn handle(req: Request, controller: &Controller) -> ResultResp {
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();

    let existing = req
        .headers()
        .get("Cookie")
        .and_then(|v| v.to_str().ok())
        .and_then(SessionId::from_cookie_header);
    let is_new = existing.is_none();
    let session = existing.unwrap_or_else(SessionId::generate);

    let result = route(&req, controller, &session);

    match &result {
        Ok(resp) => debug!(%method, %path, status = resp.status().as_u16(), "handled request"),
        Err(err) => warn!(%method, %path, status = err.status(), error = %err, "request failed"),
    }

    let mut resp = result?;
    if is_new {
        let cookie = session
            .set_cookie_value()
            .parse()
            .map_err(|_| ServerError::InternalError)?;
        resp.headers_mut().insert("Set-Cookie", cookie);
    }
    Ok(resp)
}

fn route(req: &Request, controller: &Controller, session: &SessionId) -> ResultResp {
    let params = QueryParams::parse(req.uri().query());

    match (req.method().as_str(), req.uri().path()) {
        ("GET", "/") => {
            let controls = Controls::from_params(&params, controller.store().bounds())?;
            let payload = refresh(controller, session, &controls);
            let cities = controller.cities(&controls.constraints.states);
            let store = controller.store();

            html_response(dashboard_page(&DashboardVm {
                controls: ControlsVm {
                    states: store.states(),
                    makes: store.makes(),
                    cities: &cities,
                    bounds: store.bounds(),
                    controls: &controls,
                },
                payload: &payload,
                total_listings: store.len(),
            }))
        }

        ("GET", "/view") => {
            let controls = Controls::from_params(&params, controller.store().bounds())?;
            let payload = refresh(controller, session, &controls);
            html_response(templates::views::tab_content(&payload))
        }

        ("GET", "/cities") => {
            let cities = controller.cities(&params.categorical("state"));
            html_response(city_select(&cities, &params.categorical("city")))
        }

        ("GET", "/api/view") => {
            let controls = Controls::from_params(&params, controller.store().bounds())?;
            json_response(&refresh(controller, session, &controls))
        }

        ("GET", "/api/cities") => {
            json_response(&controller.cities(&params.categorical("state")))
        }

        ("GET", "/api/current") => {
            let view = controller.current(session);
            json_response(&controller.rows(&view))
        }

        ("GET", "/export") => {
            let view = controller.current(session);
            export_view_xlsx(&controller.rows(&view))
        }

        ("GET", "/static/main.css") => css_response(MAIN_CSS),

        _ => Err(ServerError::NotFound),
    }
}

fn refresh(controller: &Controller, session: &SessionId, controls: &Controls) -> ViewPayload {
    controller.refresh(session, controls.constraints.clone(), controls.tab)
}
