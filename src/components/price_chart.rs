use leptos::html;
use leptos::prelude::*;
use plotters::prelude::*;

use crate::models::{ChartSeries, PricePoint};
use crate::utils::{format_price, x_label_count};

const SERIES_LABEL: &str = "Brent Oil Price (USD per Barrel)";

// #007bff
const SERIES_COLOR: RGBColor = RGBColor(0, 123, 255);

const LINE_TENSION: f64 = 0.1;
const SMOOTH_STEPS: usize = 8;
const MAX_X_LABELS: usize = 8;

#[component]
pub fn PriceChart(
    prices: ReadSignal<Vec<PricePoint>>,
    width: u32,
    height: u32,
) -> impl IntoView {
    let chart_ref = NodeRef::<html::Div>::new();

    Effect::new(move |_| {
        // Re-derive the series from current state on every run.
        let series = ChartSeries::from_points(&prices.get());

        if let Some(element) = chart_ref.get() {
            match render_series_svg(&series, width, height) {
                Ok(svg) => element.set_inner_html(&svg),
                Err(err) => {
                    web_sys::console::error_1(&format!("Chart render failed: {}", err).into());
                }
            }
        }
    });

    view! {
        <div
            node_ref=chart_ref
            class="price-chart"
            style=format!("width: {}px; height: {}px;", width, height)
        ></div>
    }
}

/// Renders the series as a standalone SVG string.
///
/// An empty series produces the chart frame with no data drawn; it is a
/// valid plot, not an error.
pub fn render_series_svg(series: &ChartSeries, width: u32, height: u32) -> Result<String, String> {
    let mut buffer = String::new();
    {
        let root = SVGBackend::with_string(&mut buffer, (width, height)).into_drawing_area();
        root.fill(&WHITE).map_err(|e| e.to_string())?;

        let n = series.len();
        let x_max = if n > 1 { (n - 1) as f64 } else { 1.0 };
        let (y_min, y_max) = value_range(&series.values);

        let mut chart = ChartBuilder::on(&root)
            .margin(16)
            .x_label_area_size(28)
            .y_label_area_size(48)
            .build_cartesian_2d(0.0..x_max, y_min..y_max)
            .map_err(|e| e.to_string())?;

        let labels = series.labels.clone();
        chart
            .configure_mesh()
            .light_line_style(&RGBColor(235, 235, 235))
            .axis_style(&RGBColor(120, 120, 120))
            .x_labels(x_label_count(n, MAX_X_LABELS))
            .x_label_style(("sans-serif", 11))
            .y_label_style(("sans-serif", 11))
            .x_label_formatter(&|x| {
                let idx = x.round() as usize;
                // Labels only at ticks that land on an observation index.
                if (x - idx as f64).abs() > 1e-6 {
                    return String::new();
                }
                labels.get(idx).cloned().unwrap_or_default()
            })
            .y_label_formatter(&|y| format_price(*y))
            .draw()
            .map_err(|e| e.to_string())?;

        if n > 0 {
            let points: Vec<(f64, f64)> = series
                .values
                .iter()
                .enumerate()
                .map(|(i, &v)| (i as f64, v))
                .collect();

            let line = smooth_path(&points, LINE_TENSION, SMOOTH_STEPS);
            chart
                .draw_series(std::iter::once(PathElement::new(line, &SERIES_COLOR)))
                .map_err(|e| e.to_string())?
                .label(SERIES_LABEL)
                .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 16, y)], &SERIES_COLOR));

            chart
                .draw_series(
                    points
                        .iter()
                        .map(|&(x, y)| Circle::new((x, y), 2, SERIES_COLOR.filled())),
                )
                .map_err(|e| e.to_string())?;

            chart
                .configure_series_labels()
                .position(SeriesLabelPosition::UpperLeft)
                .background_style(&WHITE.mix(0.8))
                .border_style(&RGBColor(200, 200, 200))
                .label_font(("sans-serif", 12))
                .draw()
                .map_err(|e| e.to_string())?;
        }

        root.present().map_err(|e| e.to_string())?;
    }
    Ok(buffer)
}

/// Y range padded so the line never sits on the chart border. A flat or
/// single-point series still gets a visible band.
fn value_range(values: &[f64]) -> (f64, f64) {
    if values.is_empty() {
        return (0.0, 1.0);
    }
    let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let pad = ((max - min) * 0.05).max(1.0);
    (min - pad, max + pad)
}

/// Cardinal-spline interpolation between observations. Tension 0 reduces to
/// the straight polyline; fewer than three points pass through unchanged.
fn smooth_path(points: &[(f64, f64)], tension: f64, steps: usize) -> Vec<(f64, f64)> {
    if points.len() < 3 || steps < 2 {
        return points.to_vec();
    }

    let mut out = Vec::with_capacity((points.len() - 1) * steps + 1);
    for i in 0..points.len() - 1 {
        let p0 = points[i];
        let p1 = points[i + 1];
        let prev = if i == 0 { p0 } else { points[i - 1] };
        let next = if i + 2 < points.len() { points[i + 2] } else { p1 };

        let m0 = (tension * (p1.0 - prev.0), tension * (p1.1 - prev.1));
        let m1 = (tension * (next.0 - p0.0), tension * (next.1 - p0.1));

        for s in 0..steps {
            let t = s as f64 / steps as f64;
            let (h00, h10, h01, h11) = hermite_basis(t);
            out.push((
                h00 * p0.0 + h10 * m0.0 + h01 * p1.0 + h11 * m1.0,
                h00 * p0.1 + h10 * m0.1 + h01 * p1.1 + h11 * m1.1,
            ));
        }
    }
    out.push(points[points.len() - 1]);
    out
}

fn hermite_basis(t: f64) -> (f64, f64, f64, f64) {
    let t2 = t * t;
    let t3 = t2 * t;
    (
        2.0 * t3 - 3.0 * t2 + 1.0,
        t3 - 2.0 * t2 + t,
        -2.0 * t3 + 3.0 * t2,
        t3 - t2,
    )
}
