use maud::{html, Markup, DOCTYPE};

pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                link rel="stylesheet" href="/static/main.css";
                link rel="stylesheet" href="https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";
                script src="https://unpkg.com/htmx.org@1.9.12" defer {};
                script src="https://unpkg.com/leaflet@1.9.4/dist/leaflet.js" defer {};
            }
            body {
                header class="flex items-center justify-between px-6 py-3 shadow" {
                    svg
                        xmlns="http://www.w3.org/2000/svg"
                        width="24"
                        height="24"
                        viewBox="0 0 24 24"
                        fill="none"
                        stroke="#524ed2"
                        stroke-width="2"
                        stroke-linecap="round"
                        stroke-linejoin="round"
                    {
                        path stroke="none" d="M0 0h24v24H0z" fill="none" {}
                        path d="M5 17h-2v-6l2 -5h9l4 5h1a2 2 0 0 1 2 2v4h-2" {}
                        path d="M9 17h6" {}
                        circle cx="7" cy="17" r="2" {}
                        circle cx="17" cy="17" r="2" {}
                    }
                    h1 { "PNW Car Search Dashboard" }
                    nav {
                        ul {
                            li { a href="/" { "Reset filters" } }
                            li { a href="/export" { "Download (.xlsx)" } }
                        }
                    }
                }
                (content)
            }
        }
    }
}
