use crate::views::TablePayload;
use maud::{html, Markup};

pub fn table_view(payload: &TablePayload) -> Markup {
    html! {
        div class="fade-in" {
            p class="summary" {
                "Found " strong { (payload.records.len()) } " listings."
            }

            div class="table-wrap" {
                table class="listings" {
                    thead {
                        tr {
                            @for column in &payload.columns {
                                th scope="col" { (column) }
                            }
                        }
                    }
                    tbody {
                        @for r in &payload.records {
                            tr {
                                td { (r.state) }
                                td { (r.location) }
                                td { (r.make) }
                                td class="num" { (format!("{:.0}", r.predicted_price)) }
                                td class="num" { (format!("{:.0}", r.price)) }
                                td { (r.time_posted.format("%Y-%m-%d").to_string()) }
                                td class="num" { (format!("{:.0}", r.odometer)) }
                                td class="num" { (r.year) }
                            }
                        }
                    }
                }
            }
        }
    }
}
