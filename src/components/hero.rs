//! Home hero with a decorative canvas globe.
//!
//! The globe is an orthographic wireframe with the hub cities the sales deck
//! talks about. Pure decoration: it spins, follows the system color scheme,
//! and has no interaction contract. Drawn with plotters on a full-bleed
//! canvas, redrawn on a short interval for the spin.

use gloo_timers::callback::Interval;
use plotters::prelude::*;
use plotters_canvas::CanvasBackend;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, MediaQueryListEvent};
use yew::prelude::*;

use crate::config;

const CANVAS_ID: &str = "hero-globe";
const SPIN_STEP_DEG: f64 = 0.25;
const FRAME_MS: u32 = 50;

/// Global tech hubs shown as markers: (lat, lng, marker size).
const HUBS: &[(f64, f64, f64)] = &[
    (37.7749, -122.4194, 0.5), // San Francisco
    (40.7128, -74.0060, 0.4),  // New York
    (51.5074, -0.1278, 0.45),  // London
    (35.6762, 139.6503, 0.5),  // Tokyo
    (-33.8688, 151.2093, 0.3), // Sydney
    (55.7558, 37.6173, 0.35),  // Moscow
    (28.6139, 77.2090, 0.4),   // Delhi
    (-22.9068, -43.1729, 0.3), // Rio
];

/// Orthographic projection of a point on the unit sphere, viewed from over
/// the equator at the spin longitude. Returns `None` for the back hemisphere.
pub fn project(lat_deg: f64, lng_deg: f64, spin_deg: f64) -> Option<(f64, f64)> {
    let lat = lat_deg.to_radians();
    let lng = (lng_deg + spin_deg).to_radians();
    if lng.cos() < 0.0 {
        return None;
    }
    Some((lat.cos() * lng.sin(), lat.sin()))
}

/// Splits a projected polyline into its visible runs so hidden-hemisphere
/// gaps don't get bridged by straight lines.
fn visible_segments(points: impl Iterator<Item = Option<(f64, f64)>>) -> Vec<Vec<(f64, f64)>> {
    let mut segments = Vec::new();
    let mut current = Vec::new();
    for point in points {
        match point {
            Some(p) => current.push(p),
            None => {
                if current.len() > 1 {
                    segments.push(std::mem::take(&mut current));
                } else {
                    current.clear();
                }
            }
        }
    }
    if current.len() > 1 {
        segments.push(current);
    }
    segments
}

struct GlobePalette {
    line: RGBAColor,
    outline: RGBAColor,
    hub: RGBColor,
}

fn palette(light: bool) -> GlobePalette {
    if light {
        GlobePalette {
            line: RGBColor(3, 105, 161).mix(0.35),
            outline: RGBColor(3, 105, 161).mix(0.8),
            hub: RGBColor(0, 153, 153),
        }
    } else {
        GlobePalette {
            line: RGBColor(0, 184, 184).mix(0.3),
            outline: RGBColor(0, 184, 184).mix(0.8),
            hub: RGBColor(0, 184, 184),
        }
    }
}

/// Resizes the canvas to the viewport. Setting the width also clears the
/// previous frame.
fn prepare_canvas() -> Option<HtmlCanvasElement> {
    let window = web_sys::window()?;
    let canvas: HtmlCanvasElement = window
        .document()?
        .get_element_by_id(CANVAS_ID)?
        .dyn_into()
        .ok()?;
    let width = window.inner_width().ok()?.as_f64()? as u32;
    let height = window.inner_height().ok()?.as_f64()? as u32;
    canvas.set_width(width.max(1));
    canvas.set_height(height.max(1));
    Some(canvas)
}

fn draw_globe(light: bool, spin_deg: f64) -> Result<(), Box<dyn std::error::Error>> {
    let backend = CanvasBackend::new(CANVAS_ID).ok_or("globe canvas missing")?;
    let root = backend.into_drawing_area();
    let (width, height) = root.dim_in_pixel();
    if width == 0 || height == 0 {
        return Ok(());
    }

    // Keep the sphere round regardless of viewport shape.
    let aspect = f64::from(width) / f64::from(height);
    let half = 1.4;
    let mut chart = ChartBuilder::on(&root)
        .build_cartesian_2d(-half * aspect..half * aspect, -half..half)?;

    let colors = palette(light);

    // Disc outline.
    let outline = (0..=180).map(|i| {
        let theta = f64::from(i) * 2.0 * std::f64::consts::PI / 180.0;
        (theta.cos(), theta.sin())
    });
    chart.draw_series(LineSeries::new(outline, colors.outline.stroke_width(2)))?;

    // Parallels.
    for lat in (-60..=60).step_by(30) {
        let points = (0..=120).map(|i| project(f64::from(lat), f64::from(i) * 3.0, spin_deg));
        for segment in visible_segments(points) {
            chart.draw_series(LineSeries::new(segment, colors.line.stroke_width(1)))?;
        }
    }

    // Meridians.
    for lng in (0..360).step_by(30) {
        let points = (0..=90).map(|i| project(f64::from(i) * 2.0 - 90.0, f64::from(lng), spin_deg));
        for segment in visible_segments(points) {
            chart.draw_series(LineSeries::new(segment, colors.line.stroke_width(1)))?;
        }
    }

    // Hub markers on the visible hemisphere.
    chart.draw_series(HUBS.iter().filter_map(|&(lat, lng, size)| {
        project(lat, lng, spin_deg)
            .map(|point| Circle::new(point, (size * 8.0) as i32, colors.hub.filled()))
    }))?;

    root.present()?;
    Ok(())
}

fn prefers_light() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-color-scheme: light)").ok())
        .flatten()
        .map(|media| media.matches())
        .unwrap_or(false)
}

#[function_component(Hero)]
pub fn hero() -> Html {
    let is_light = use_state(prefers_light);

    // Follow system color-scheme changes for the globe palette.
    {
        let is_light = is_light.clone();
        use_effect_with_deps(
            move |_| {
                let media = web_sys::window()
                    .and_then(|w| w.match_media("(prefers-color-scheme: light)").ok())
                    .flatten();
                let callback = Closure::wrap(Box::new(move |event: MediaQueryListEvent| {
                    is_light.set(event.matches());
                }) as Box<dyn FnMut(MediaQueryListEvent)>);
                if let Some(media) = &media {
                    let _ = media.add_event_listener_with_callback(
                        "change",
                        callback.as_ref().unchecked_ref(),
                    );
                }
                move || {
                    if let Some(media) = media {
                        let _ = media.remove_event_listener_with_callback(
                            "change",
                            callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    // Spin loop + resize handling. Both are torn down on unmount; the effect
    // re-runs when the palette flips.
    use_effect_with_deps(
        move |light: &bool| {
            let light = *light;
            let spin = Rc::new(Cell::new(0.0_f64));
            let interval = Interval::new(FRAME_MS, move || {
                spin.set(spin.get() + SPIN_STEP_DEG);
                if prepare_canvas().is_some() {
                    if let Err(err) = draw_globe(light, spin.get()) {
                        gloo_console::error!(format!("globe render failed: {err}"));
                    }
                }
            });
            move || drop(interval)
        },
        *is_light,
    );

    html! {
        <section class="hero">
            <div class={classes!("hero-backdrop", (*is_light).then_some("light"))}></div>
            <canvas id={CANVAS_ID} class="hero-globe"></canvas>

            <div class="hero-content">
                <h1>{"Smarter Systems, Stronger Business."}</h1>
                <p>
                    {"We build automations and AI agents that make work faster, cleaner, \
                      and more profitable, connecting global teams with seamless, \
                      intelligent workflows."}
                </p>
                <a
                    href={config::BOOKING_URL}
                    target="_blank"
                    rel="noopener noreferrer"
                    class="cta-button"
                >
                    {"Book a Strategy Call"}
                </a>
            </div>

            <style>
                {r#"
                    .hero {
                        position: relative;
                        width: 100%;
                        height: 100vh;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        overflow: hidden;
                    }

                    .hero-backdrop {
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(135deg, #0f172a, rgba(30, 58, 138, 0.7), rgba(19, 78, 74, 0.5));
                    }

                    .hero-backdrop.light {
                        background: linear-gradient(135deg, #0c4a6e, rgba(29, 78, 216, 0.7), rgba(165, 243, 252, 0.5));
                    }

                    .hero-globe {
                        position: absolute;
                        inset: 0;
                        width: 100%;
                        height: 100%;
                    }

                    .hero-content {
                        position: relative;
                        z-index: 2;
                        text-align: center;
                        max-width: 56rem;
                        padding: 0 1.5rem;
                    }

                    .hero-content h1 {
                        font-size: clamp(2rem, 6vw, 4.5rem);
                        font-weight: 700;
                        color: var(--primary-color);
                        text-shadow: 0 4px 20px rgba(0, 0, 0, 0.4);
                        margin-bottom: 1.5rem;
                    }

                    .hero-content p {
                        font-size: clamp(0.9rem, 2vw, 1.2rem);
                        color: #e5e7eb;
                        max-width: 46rem;
                        margin: 0 auto 2.5rem auto;
                        text-shadow: 0 2px 10px rgba(0, 0, 0, 0.4);
                    }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equator_front_center_projects_to_origin() {
        let (x, y) = project(0.0, 0.0, 0.0).unwrap();
        assert!(x.abs() < 1e-9);
        assert!(y.abs() < 1e-9);
    }

    #[test]
    fn poles_project_to_top_and_bottom() {
        let (_, y) = project(90.0, 0.0, 0.0).unwrap();
        assert!((y - 1.0).abs() < 1e-9);
        let (_, y) = project(-90.0, 0.0, 0.0).unwrap();
        assert!((y + 1.0).abs() < 1e-9);
    }

    #[test]
    fn back_hemisphere_is_hidden() {
        assert!(project(0.0, 180.0, 0.0).is_none());
        // Spinning half a turn brings it back into view.
        assert!(project(0.0, 180.0, 180.0).is_some());
    }

    #[test]
    fn segments_split_at_hidden_runs() {
        let points = vec![
            Some((0.0, 0.0)),
            Some((0.1, 0.0)),
            None,
            Some((0.5, 0.0)),
            Some((0.6, 0.0)),
            Some((0.7, 0.0)),
        ];
        let segments = visible_segments(points.into_iter());
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].len(), 2);
        assert_eq!(segments[1].len(), 3);
    }

    #[test]
    fn lone_visible_points_are_dropped() {
        let points = vec![Some((0.0, 0.0)), None, Some((0.5, 0.0)), None];
        let segments = visible_segments(points.into_iter());
        assert!(segments.is_empty());
    }
}
