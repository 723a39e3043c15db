//! SVG rendering of mounted chart configurations.
//!
//! Layout is split from output: each chart kind lays its marks out into a
//! [`Scene`](scene::Scene), and [`svg::markup`] serializes the scene. The
//! [`ChartCanvas`] component injects that markup into the chart container.

mod arc;
mod axis;
mod bar;
mod bubble;
pub mod geometry;
mod legend;
mod line;
mod radar;
pub mod scene;
pub mod svg;

use dioxus::prelude::*;

use self::{geometry::Rect, scene::Scene};
use super::config::{ChartConfig, ChartKind};

/// View box of cartesian charts.
pub const WIDE: (f64, f64) = (640.0, 360.0);
/// View box of doughnut, radar and bubble charts.
pub const SQUARE: (f64, f64) = (420.0, 420.0);
const PADDING: f64 = 8.0;

/// Lays out every mark of `config`.
pub fn scene(config: &ChartConfig) -> Scene {
    let (width, height) = if config.kind.is_square() { SQUARE } else { WIDE };
    let mut scene = Scene::new(width, height);
    let area = Rect::new(PADDING, PADDING, width - PADDING, height - PADDING);
    let area = legend::place(&mut scene, config, area);

    match config.kind {
        ChartKind::Doughnut { cutout } => arc::draw(&mut scene, config, area, cutout),
        ChartKind::Bar { orientation } => bar::draw(&mut scene, config, area, orientation),
        ChartKind::Line => line::draw(&mut scene, config, area),
        ChartKind::Radar => radar::draw(&mut scene, config, area),
        ChartKind::Bubble => bubble::draw(&mut scene, config, area),
    }
    scene
}

/// Draws one mounted chart.
#[component]
pub fn ChartCanvas(config: ChartConfig) -> Element {
    let markup = svg::markup(&scene(&config));
    let shape = if config.kind.is_square() {
        "chart-canvas chart-canvas--square"
    } else {
        "chart-canvas"
    };

    rsx! {
        div { class: "{shape}", dangerous_inner_html: "{markup}" }
    }
}
