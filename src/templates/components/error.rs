use crate::templates::desktop_layout;
use maud::{html, Markup};

/// Full error page for a failed request.
pub fn error_page(status: u16, message: &str) -> Markup {
    desktop_layout(
        &format!("Error {status}"),
        html! {
            main class="container error" {
                h1 { "Error " (status) }
                p { (message) }
                p { a href="/" { "← Back to the dashboard" } }
            }
        },
    )
}
