use crate::templates::card;
use crate::templates::components::chart::{bar_chart, line_chart, scatter_chart, Series};
use crate::views::AnalysisPayload;
use chrono::{Datelike, NaiveDate};
use maud::{html, Markup};

pub fn analysis_view(payload: &AnalysisPayload) -> Markup {
    let series: Vec<Series> = payload
        .median_series
        .iter()
        .map(|s| Series {
            label: s.make.clone(),
            points: s
                .points
                .iter()
                .map(|p| (p.date.num_days_from_ce() as f64, p.median_price))
                .collect(),
        })
        .collect();

    let scatter: Vec<(f64, f64)> = payload
        .scatter
        .iter()
        .map(|p| (p.log_odometer, p.price))
        .collect();

    let bars: Vec<(String, usize)> = payload
        .make_counts
        .iter()
        .map(|c| (c.make.clone(), c.count))
        .collect();

    html! {
        div class="analysis" {
            (card("Median Car Price in Selected Area", html! {
                @match payload.median_price {
                    Some(median) => p class="indicator" { "$" (format!("{median:.0}")) },
                    None => p class="empty" { "No listings match the current filters." },
                }
            }))

            (card("Median price by make over time", line_chart(&series, "Posted", "Median price ($)", day_label)))

            (card("Price vs. ln(1 + odometer)", scatter_chart(&scatter, "ln(1 + odometer)", "Price ($)")))

            (card("Listings per make", bar_chart(&bars)))
        }
    }
}

fn day_label(days: f64) -> String {
    NaiveDate::from_num_days_from_ce_opt(days.round() as i32)
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}
