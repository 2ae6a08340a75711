// templates/components/chart.rs
//
// Inline SVG charts. Every chart renders an empty-state notice instead of an
// <svg> when it has nothing to draw.

use maud::{html, Markup};

const WIDTH: f64 = 640.0;
const HEIGHT: f64 = 320.0;
const PAD: f64 = 48.0;

const PALETTE: [&str; 8] = [
    "#2563eb", "#dc2626", "#16a34a", "#d97706", "#7c3aed", "#0891b2", "#db2777", "#4b5563",
];

pub struct Series {
    pub label: String,
    pub points: Vec<(f64, f64)>,
}

/// Linear map from a data extent onto a pixel interval.
#[derive(Debug, Clone, Copy)]
struct Scale {
    lo: f64,
    hi: f64,
    out_lo: f64,
    out_hi: f64,
}

impl Scale {
    fn fit(values: impl Iterator<Item = f64>, out_lo: f64, out_hi: f64) -> Self {
        let (mut lo, mut hi) = values
            .filter(|v| v.is_finite())
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
                (lo.min(v), hi.max(v))
            });

        if !lo.is_finite() {
            lo = 0.0;
            hi = 1.0;
        } else if lo == hi {
            lo -= 1.0;
            hi += 1.0;
        }

        Self {
            lo,
            hi,
            out_lo,
            out_hi,
        }
    }

    fn map(&self, v: f64) -> f64 {
        self.out_lo + (v - self.lo) / (self.hi - self.lo) * (self.out_hi - self.out_lo)
    }
}

fn color(i: usize) -> &'static str {
    PALETTE[i % PALETTE.len()]
}

fn empty(message: &str) -> Markup {
    html! { p class="empty" { (message) } }
}

fn frame(x: Scale, y: Scale, x_label: &str, y_label: &str, fmt_x: fn(f64) -> String, body: Markup) -> Markup {
    html! {
        svg
            class="chart"
            xmlns="http://www.w3.org/2000/svg"
            viewBox=(format!("0 0 {WIDTH} {HEIGHT}"))
            role="img"
        {
            line class="axis" x1=(PAD) y1=(HEIGHT - PAD) x2=(WIDTH - PAD) y2=(HEIGHT - PAD) {}
            line class="axis" x1=(PAD) y1=(PAD) x2=(PAD) y2=(HEIGHT - PAD) {}

            text class="tick" x=(PAD) y=(HEIGHT - PAD + 16.0) { (fmt_x(x.lo)) }
            text class="tick" x=(WIDTH - PAD) y=(HEIGHT - PAD + 16.0) text-anchor="end" { (fmt_x(x.hi)) }
            text class="tick" x=(PAD - 4.0) y=(HEIGHT - PAD) text-anchor="end" { (format!("{:.0}", y.lo)) }
            text class="tick" x=(PAD - 4.0) y=(PAD + 4.0) text-anchor="end" { (format!("{:.0}", y.hi)) }

            text class="axis-label" x=(WIDTH / 2.0) y=(HEIGHT - 8.0) text-anchor="middle" { (x_label) }
            text class="axis-label" x=(12.0) y=(PAD - 16.0) { (y_label) }

            (body)
        }
    }
}

fn scales<'a>(points: impl Iterator<Item = &'a (f64, f64)> + Clone) -> (Scale, Scale) {
    let x = Scale::fit(points.clone().map(|p| p.0), PAD, WIDTH - PAD);
    // SVG y grows downwards.
    let y = Scale::fit(points.map(|p| p.1), HEIGHT - PAD, PAD);
    (x, y)
}

/// One polyline per series with a legend underneath.
pub fn line_chart(series: &[Series], x_label: &str, y_label: &str, fmt_x: fn(f64) -> String) -> Markup {
    if series.iter().all(|s| s.points.is_empty()) {
        return empty("No listings to chart.");
    }

    let (x, y) = scales(series.iter().flat_map(|s| s.points.iter()));

    html! {
        (frame(x, y, x_label, y_label, fmt_x, html! {
            @for (i, s) in series.iter().enumerate() {
                polyline
                    fill="none"
                    stroke=(color(i))
                    stroke-width="2"
                    points=(polyline_points(&s.points, x, y))
                {}
                @for p in &s.points {
                    circle cx=(x.map(p.0)) cy=(y.map(p.1)) r="3" fill=(color(i)) {
                        title { (s.label) ": " (format!("{:.0}", p.1)) }
                    }
                }
            }
        }))
        ul class="legend" {
            @for (i, s) in series.iter().enumerate() {
                li { span class="swatch" style=(format!("background:{}", color(i))) {} (s.label) }
            }
        }
    }
}

pub fn scatter_chart(points: &[(f64, f64)], x_label: &str, y_label: &str) -> Markup {
    if points.is_empty() {
        return empty("No listings to plot.");
    }

    let (x, y) = scales(points.iter());

    frame(x, y, x_label, y_label, |v| format!("{v:.1}"), html! {
        @for p in points {
            circle cx=(x.map(p.0)) cy=(y.map(p.1)) r="3" fill=(color(0)) fill-opacity="0.5" {}
        }
    })
}

/// Horizontal bars, one per entry, in the given order.
pub fn bar_chart(bars: &[(String, usize)]) -> Markup {
    if bars.is_empty() {
        return empty("No listings to count.");
    }

    let row_height = 22.0;
    let label_width = 140.0;
    let height = bars.len() as f64 * row_height + 8.0;
    let max = bars.iter().map(|(_, n)| *n).max().unwrap_or(1).max(1) as f64;
    let span = WIDTH - label_width - PAD;

    html! {
        svg
            class="chart bars"
            xmlns="http://www.w3.org/2000/svg"
            viewBox=(format!("0 0 {WIDTH} {height}"))
            role="img"
        {
            @for (i, (label, count)) in bars.iter().enumerate() {
                @let top = i as f64 * row_height + 4.0;
                text class="tick" x=(label_width - 6.0) y=(top + 14.0) text-anchor="end" { (label) }
                rect
                    x=(label_width)
                    y=(top)
                    width=(*count as f64 / max * span)
                    height=(row_height - 6.0)
                    fill=(color(0))
                {}
                text class="tick" x=(label_width + *count as f64 / max * span + 4.0) y=(top + 14.0) { (count) }
            }
        }
    }
}

fn polyline_points(points: &[(f64, f64)], x: Scale, y: Scale) -> String {
    points
        .iter()
        .map(|p| format!("{:.1},{:.1}", x.map(p.0), y.map(p.1)))
        .collect::<Vec<_>>()
        .join(" ")
}
