//! Chart Component
//!
//! Daily totals area chart drawn on an HTML5 Canvas from the dashboard's
//! chart description. Every redraw starts from a blank canvas.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use txboard::view::ChartSpec;

use crate::state::GlobalState;

const BACKGROUND: &str = "#1f2937"; // gray-800
const GRID: &str = "#374151"; // gray-700
const LABEL: &str = "#9ca3af"; // gray-400

const MARGIN_LEFT: f64 = 70.0;
const MARGIN_RIGHT: f64 = 20.0;
const MARGIN_TOP: f64 = 40.0;
const MARGIN_BOTTOM: f64 = 50.0;

/// Daily totals chart
#[component]
pub fn Chart() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let canvas_ref = create_node_ref::<html::Canvas>();

    // Redraw whenever the dashboard hands over a new description
    create_effect(move |_| {
        let spec = state.view.chart.get();

        if let Some(canvas) = canvas_ref.get() {
            draw_chart(&canvas, spec.as_ref());
        }
    });

    view! {
        <div id="plotlyChart" class="relative">
            <canvas
                node_ref=canvas_ref
                width="800"
                height="400"
                class="w-full h-64 md:h-96 rounded-lg"
            />
        </div>
    }
}

/// Y range with zero included, since the area is filled down to zero
fn value_bounds(values: &[f64]) -> (f64, f64) {
    let mut lo = values.iter().copied().fold(0.0_f64, f64::min);
    let mut hi = values.iter().copied().fold(0.0_f64, f64::max);

    if lo == hi {
        hi = lo + 1.0;
    }
    let padding = (hi - lo) * 0.1;
    if hi > 0.0 {
        hi += padding;
    }
    if lo < 0.0 {
        lo -= padding;
    }

    (lo, hi)
}

/// Evenly spaced x positions for categorical dates
fn x_positions(count: usize, left: f64, width: f64) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![left + width / 2.0],
        n => (0..n)
            .map(|i| left + (i as f64 / (n - 1) as f64) * width)
            .collect(),
    }
}

/// Draw the chart on canvas
fn draw_chart(canvas: &HtmlCanvasElement, spec: Option<&ChartSpec>) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;
    let chart_width = width - MARGIN_LEFT - MARGIN_RIGHT;
    let chart_height = height - MARGIN_TOP - MARGIN_BOTTOM;

    // Clear canvas
    ctx.set_fill_style(&BACKGROUND.into());
    ctx.fill_rect(0.0, 0.0, width, height);

    let Some(spec) = spec else {
        return;
    };

    // Title and axis titles
    ctx.set_fill_style(&"#e5e7eb".into());
    ctx.set_font("16px sans-serif");
    let _ = ctx.fill_text(&spec.layout.title, MARGIN_LEFT, 24.0);
    ctx.set_fill_style(&LABEL.into());
    ctx.set_font("12px sans-serif");
    let _ = ctx.fill_text(&spec.layout.xaxis.title, MARGIN_LEFT + chart_width / 2.0 - 12.0, height - 8.0);
    ctx.save();
    let _ = ctx.translate(14.0, MARGIN_TOP + chart_height / 2.0 + 20.0);
    let _ = ctx.rotate(-std::f64::consts::FRAC_PI_2);
    let _ = ctx.fill_text(&spec.layout.yaxis.title, 0.0, 0.0);
    ctx.restore();

    let Some(series) = spec.series().filter(|s| !s.x.is_empty()) else {
        ctx.set_fill_style(&"#6b7280".into());
        ctx.set_font("16px sans-serif");
        let _ = ctx.fill_text("No transactions to chart", width / 2.0 - 85.0, height / 2.0);
        return;
    };

    let (lo, hi) = value_bounds(&series.y);
    let to_y = |value: f64| MARGIN_TOP + ((hi - value) / (hi - lo)) * chart_height;
    let xs = x_positions(series.x.len(), MARGIN_LEFT, chart_width);

    // Horizontal grid lines with value labels
    ctx.set_stroke_style(&GRID.into());
    ctx.set_line_width(1.0);
    for i in 0..=5 {
        let y = MARGIN_TOP + (i as f64 / 5.0) * chart_height;
        ctx.begin_path();
        ctx.move_to(MARGIN_LEFT, y);
        ctx.line_to(width - MARGIN_RIGHT, y);
        ctx.stroke();

        let value = hi - (i as f64 / 5.0) * (hi - lo);
        ctx.set_fill_style(&LABEL.into());
        let _ = ctx.fill_text(&format!("{:.0}", value), 24.0, y + 4.0);
    }

    let color = series.line.color.as_str();
    let points: Vec<(f64, f64)> = xs.iter().copied().zip(series.y.iter().map(|v| to_y(*v))).collect();

    // Area down to zero
    if series.fill == "tozeroy" {
        let zero = to_y(0.0);
        ctx.begin_path();
        ctx.move_to(points[0].0, zero);
        for (x, y) in &points {
            ctx.line_to(*x, *y);
        }
        ctx.line_to(points[points.len() - 1].0, zero);
        ctx.close_path();
        ctx.set_global_alpha(0.3);
        ctx.set_fill_style(&color.into());
        ctx.fill();
        ctx.set_global_alpha(1.0);
    }

    // Line
    ctx.set_stroke_style(&color.into());
    ctx.set_line_width(2.0);
    ctx.begin_path();
    for (i, (x, y)) in points.iter().enumerate() {
        if i == 0 {
            ctx.move_to(*x, *y);
        } else {
            ctx.line_to(*x, *y);
        }
    }
    ctx.stroke();

    // Markers
    ctx.set_fill_style(&color.into());
    for (x, y) in &points {
        ctx.begin_path();
        let _ = ctx.arc(*x, *y, 3.0, 0.0, std::f64::consts::PI * 2.0);
        ctx.fill();
    }

    // Date labels
    ctx.set_fill_style(&LABEL.into());
    ctx.set_font("12px sans-serif");
    for (x, date) in xs.iter().zip(&series.x) {
        let _ = ctx.fill_text(date, x - 30.0, height - MARGIN_BOTTOM + 18.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_bounds_include_zero() {
        let (lo, hi) = value_bounds(&[5300.0, 5425.0]);
        assert_eq!(lo, 0.0);
        assert!(hi > 5425.0);

        let (lo, hi) = value_bounds(&[-10.0, 20.0]);
        assert!(lo < -10.0);
        assert!(hi > 20.0);
    }

    #[test]
    fn test_value_bounds_flat_series() {
        let (lo, hi) = value_bounds(&[0.0]);
        assert!(hi > lo);
    }

    #[test]
    fn test_x_positions() {
        assert!(x_positions(0, 10.0, 100.0).is_empty());
        assert_eq!(x_positions(1, 10.0, 100.0), vec![60.0]);
        assert_eq!(x_positions(3, 10.0, 100.0), vec![10.0, 60.0, 110.0]);
    }
}
