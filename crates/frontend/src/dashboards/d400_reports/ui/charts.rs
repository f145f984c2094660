//! Inline SVG charts over a [`ChartSeries`].

use std::f64::consts::PI;

use contracts::dashboards::d400_reports::{format_percent, ChartSeries};
use leptos::prelude::*;

const VIEW_WIDTH: f64 = 600.0;
const VIEW_HEIGHT: f64 = 300.0;
const BAR_GAP: f64 = 8.0;
const LABEL_SPACE: f64 = 40.0;
const PIE_RADIUS: f64 = 120.0;

const PALETTE: [&str; 8] = [
    "#39a900", "#00304d", "#fdc300", "#50e5f9", "#71277a", "#e4572e", "#7c9885", "#385f71",
];

pub fn palette_color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

/// Point on the circle at `fraction` of a turn, clockwise from 12 o'clock.
fn polar(cx: f64, cy: f64, r: f64, fraction: f64) -> (f64, f64) {
    let angle = fraction * 2.0 * PI - PI / 2.0;
    (cx + r * angle.cos(), cy + r * angle.sin())
}

/// SVG path of a pie slice between two fractions of a turn.
pub fn arc_path(cx: f64, cy: f64, r: f64, start: f64, end: f64) -> String {
    let (x0, y0) = polar(cx, cy, r, start);
    // A single arc cannot close on its own start point.
    if end - start >= 1.0 - 1e-9 {
        let (xm, ym) = polar(cx, cy, r, start + 0.5);
        return format!(
            "M {x0:.3} {y0:.3} A {r} {r} 0 1 1 {xm:.3} {ym:.3} A {r} {r} 0 1 1 {x0:.3} {y0:.3} Z"
        );
    }
    let (x1, y1) = polar(cx, cy, r, end);
    let large = if end - start > 0.5 { 1 } else { 0 };
    format!("M {cx} {cy} L {x0:.3} {y0:.3} A {r} {r} 0 {large} 1 {x1:.3} {y1:.3} Z")
}

/// Height of a bar scaled to the tallest value.
pub fn bar_height(value: f64, max: f64, available: f64) -> f64 {
    if max <= 0.0 || value <= 0.0 {
        0.0
    } else {
        value / max * available
    }
}

#[component]
pub fn BarChart(#[prop(into)] series: Signal<ChartSeries>) -> impl IntoView {
    view! {
        <svg class="chart chart--bar" viewBox=format!("0 0 {} {}", VIEW_WIDTH, VIEW_HEIGHT) role="img">
            {move || series.with(|s| {
                let rows = s.rows();
                let max = s.max_value();
                let slot = if rows.is_empty() { VIEW_WIDTH } else { VIEW_WIDTH / rows.len() as f64 };
                let available = VIEW_HEIGHT - LABEL_SPACE;
                rows.into_iter().enumerate().map(|(i, row)| {
                    let h = bar_height(row.value, max, available);
                    let x = i as f64 * slot + BAR_GAP / 2.0;
                    let w = (slot - BAR_GAP).max(1.0);
                    let y = available - h;
                    view! {
                        <g>
                            <rect x=x.to_string() y=y.to_string() width=w.to_string() height=h.to_string() fill=palette_color(i)>
                                <title>{format!("{}: {}", row.label, row.value)}</title>
                            </rect>
                            <text
                                class="chart__label"
                                x={(x + w / 2.0).to_string()}
                                y={(VIEW_HEIGHT - LABEL_SPACE / 2.0).to_string()}
                                text-anchor="middle"
                            >
                                {row.label}
                            </text>
                        </g>
                    }
                }).collect_view()
            })}
        </svg>
    }
}

#[component]
pub fn PieChart(#[prop(into)] series: Signal<ChartSeries>) -> impl IntoView {
    let cx = VIEW_HEIGHT / 2.0;
    let cy = VIEW_HEIGHT / 2.0;

    view! {
        <div class="chart chart--pie">
            <svg viewBox=format!("0 0 {} {}", VIEW_HEIGHT, VIEW_HEIGHT) role="img">
                {move || series.with(|s| {
                    let rows = s.rows();
                    s.pie_slices().into_iter().zip(rows).enumerate()
                        .filter(|(_, (slice, _))| slice.end > slice.start)
                        .map(|(i, (slice, row))| view! {
                            <path d=arc_path(cx, cy, PIE_RADIUS, slice.start, slice.end) fill=palette_color(i)>
                                <title>{format!("{}: {}", slice.label, format_percent(row.percent))}</title>
                            </path>
                        })
                        .collect_view()
                })}
            </svg>
            <ul class="chart__legend">
                {move || series.with(|s| s.rows().into_iter().enumerate().map(|(i, row)| view! {
                    <li>
                        <span class="chart__swatch" style=format!("background:{}", palette_color(i))></span>
                        {row.label}
                    </li>
                }).collect_view())}
            </ul>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quarter_slice_ends_at_three_oclock() {
        let path = arc_path(100.0, 100.0, 50.0, 0.0, 0.25);
        assert!(path.starts_with("M 100 100 L 100.000 50.000"));
        assert!(path.contains("0 0 1 150.000 100.000"));
    }

    #[test]
    fn large_arc_flag_past_half_turn() {
        let path = arc_path(0.0, 0.0, 10.0, 0.0, 0.75);
        assert!(path.contains(" 0 1 1 "));
    }

    #[test]
    fn full_turn_is_drawn_as_two_arcs() {
        let path = arc_path(0.0, 0.0, 10.0, 0.0, 1.0);
        assert_eq!(path.matches(" A ").count(), 2);
        assert!(!path.contains(" L "));
    }

    #[test]
    fn bars_scale_to_the_maximum() {
        assert_eq!(bar_height(5.0, 10.0, 200.0), 100.0);
        assert_eq!(bar_height(10.0, 10.0, 200.0), 200.0);
        assert_eq!(bar_height(3.0, 0.0, 200.0), 0.0);
        assert_eq!(bar_height(-1.0, 10.0, 200.0), 0.0);
    }

    #[test]
    fn palette_wraps_around() {
        assert_eq!(palette_color(0), palette_color(PALETTE.len()));
    }
}
