use crate::templates::components::{controls_form, ControlsVm};
use crate::templates::desktop_layout;
use crate::templates::views::tab_content;
use crate::views::ViewPayload;
use maud::{html, Markup};

pub struct DashboardVm<'a> {
    pub controls: ControlsVm<'a>,
    pub payload: &'a ViewPayload,
    pub total_listings: usize,
}

pub fn dashboard_page(vm: &DashboardVm) -> Markup {
    desktop_layout(
        "PNW Car Search Dashboard",
        html! {
            main class="container" {
                p class="muted" {
                    (vm.total_listings) " listings loaded."
                }

                (controls_form(&vm.controls))

                div id="tab-content" {
                    (tab_content(vm.payload))
                }
            }
        },
    )
}
