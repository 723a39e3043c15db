//! Radar (spider) charts on a circular grid.

use std::f64::consts::TAU;

use super::{
    axis,
    geometry::{polar, polygon, LinearScale, Rect},
    scene::{Anchor, Mark, Scene},
};
use crate::charts::config::{Axis, ChartConfig};
use crate::core::format::format_number;
use crate::core::palette::{DARK, WHITE};

const POINT_LABEL_SIZE: f64 = 11.0;
/// Space kept around the grid for spoke labels.
const LABEL_ROOM: f64 = 64.0;

pub fn draw(scene: &mut Scene, config: &ChartConfig, area: Rect) {
    let spokes = config.labels.len();
    if spokes == 0 {
        return;
    }
    let (radial_axis, label_color) = match &config.scales.r {
        Some(r) => (r.axis.clone(), r.point_label_color),
        None => (Axis::default(), DARK),
    };
    let series: Vec<Vec<f64>> = config.datasets.iter().map(|d| d.data.scalars()).collect();
    let domain = axis::value_domain(Some(&radial_axis), series.iter().flatten().copied());

    let center = area.center();
    let radius = (area.width().min(area.height()) / 2.0 - LABEL_ROOM).max(10.0);
    let scale = LinearScale::new(domain, (0.0, radius));
    let angle = |i: usize| TAU * i as f64 / spokes as f64;

    if radial_axis.show_grid {
        for tick in axis::ticks(&radial_axis, &scale) {
            let r = scale.map(tick);
            if r > 0.0 {
                scene.push(Mark::circle(center, r).stroke(radial_axis.grid_color, 1.0));
            }
        }
        for i in 0..spokes {
            scene.push(Mark::line(
                center,
                polar(center, radius, angle(i)),
                radial_axis.grid_color,
                1.0,
            ));
        }
    }
    if radial_axis.show_ticks {
        let decimals = radial_axis.tick_decimals.unwrap_or(1);
        for tick in axis::ticks(&radial_axis, &scale) {
            scene.push(Mark::text(
                (center.0 + 4.0, center.1 - scale.map(tick)),
                format_number(tick, decimals),
                axis::TICK_SIZE - 1.0,
                Anchor::Start,
                radial_axis.tick_color,
            ));
        }
    }

    for (i, label) in config.labels.iter().enumerate() {
        let a = angle(i);
        let anchor = match a.sin() {
            s if s.abs() < 0.1 => Anchor::Middle,
            s if s > 0.0 => Anchor::Start,
            _ => Anchor::End,
        };
        scene.push(Mark::text(
            polar(center, radius + 14.0, a),
            label.clone(),
            POINT_LABEL_SIZE,
            anchor,
            label_color,
        ));
    }

    for (di, (dataset, values)) in config.datasets.iter().zip(&series).enumerate() {
        let vertices: Vec<(f64, f64)> = values
            .iter()
            .enumerate()
            .map(|(i, v)| polar(center, scale.map_clamped(*v), angle(i)))
            .collect();
        scene.push(
            Mark::path(polygon(&vertices))
                .fill(dataset.fill.at(0))
                .stroke(dataset.stroke.at(0), dataset.border_width),
        );
        if dataset.line.point_radius <= 0.0 {
            continue;
        }
        for (i, at) in vertices.into_iter().enumerate() {
            let point = config.point(di, i, values);
            scene.push(
                Mark::circle(at, dataset.line.point_radius)
                    .fill(dataset.stroke.at(i))
                    .stroke(WHITE, 2.0)
                    .tooltip(config.tooltip.text(&point, None).joined()),
            );
        }
    }
}
