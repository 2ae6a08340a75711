use maud::{html, Markup};

pub mod chart;
pub mod controls;
pub mod error;

pub use controls::{city_select, controls_form, ControlsVm};
pub use error::error_page;

pub fn card(title: &str, body: Markup) -> Markup {
    html! {
        section class="card" {
            h2 { (title) }
            div class="card-body" {
                (body)
            }
        }
    }
}
