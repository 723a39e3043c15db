//! Cartesian axes: domains, grid lines, tick labels and titles.

use super::{
    geometry::{decimals_for, nice_ceiling, nice_step, LinearScale, Rect},
    scene::{text_width, Anchor, Mark, Scene},
};
use crate::charts::config::Axis;
use crate::core::format::format_number;

pub const TICK_SIZE: f64 = 11.0;
const TITLE_SIZE: f64 = 12.0;
const TICK_COUNT: usize = 5;
const TITLE_BAND: f64 = 20.0;

/// Which edge of the plot an axis sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Bottom,
}

/// Domain for a value axis: configured bounds win, otherwise the data range
/// widened to include zero and rounded up.
pub fn value_domain(axis: Option<&Axis>, values: impl IntoIterator<Item = f64>) -> (f64, f64) {
    let (lo, hi) = values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold((0.0_f64, 0.0_f64), |(lo, hi), v| (lo.min(v), hi.max(v)));
    let min = axis.and_then(|a| a.min).unwrap_or(-nice_ceiling(-lo));
    let max = axis.and_then(|a| a.max).unwrap_or_else(|| nice_ceiling(hi));
    if max > min {
        (min, max)
    } else {
        (min, min + 1.0)
    }
}

/// Ticks an axis draws over `scale`.
pub fn ticks(axis: &Axis, scale: &LinearScale) -> Vec<f64> {
    scale.ticks(axis.step, TICK_COUNT)
}

/// Text for the tick at `value`, honoring fixed tick labels and decimals.
pub fn tick_text(axis: &Axis, value: f64, scale: &LinearScale) -> Option<String> {
    if let Some(labels) = &axis.tick_labels {
        let index = value.round();
        if (value - index).abs() > 1e-6 || index < 0.0 {
            return None;
        }
        return labels.get(index as usize).cloned();
    }
    let step = axis.step.unwrap_or_else(|| {
        let (min, max) = scale.domain();
        nice_step((max - min) / TICK_COUNT as f64)
    });
    let decimals = axis.tick_decimals.unwrap_or_else(|| decimals_for(step));
    Some(format_number(value, decimals))
}

/// Room needed outside the plot for an axis' tick labels and title.
pub fn margin(axis: Option<&Axis>, side: Side, scale_hint: &LinearScale) -> f64 {
    let Some(axis) = axis else {
        return 8.0;
    };
    let title = if axis.title.is_some() { TITLE_BAND } else { 0.0 };
    if !axis.show_ticks {
        return 8.0 + title;
    }
    let widest = ticks(axis, scale_hint)
        .into_iter()
        .filter_map(|t| tick_text(axis, t, scale_hint))
        .map(|t| text_width(&t, TICK_SIZE))
        .fold(0.0, f64::max);
    let rotated = axis.tick_labels.is_some();
    let ticks = match (side, rotated) {
        (Side::Left, _) => widest + 12.0,
        (Side::Bottom, false) => TICK_SIZE + 12.0,
        (Side::Bottom, true) => widest * 0.7 + 16.0,
    };
    ticks + title
}

/// Grid lines, tick labels and title of a value axis.
pub fn draw_value_axis(scene: &mut Scene, axis: &Axis, scale: &LinearScale, plot: Rect, side: Side) {
    for tick in ticks(axis, scale) {
        let pos = scale.map(tick);
        if axis.show_grid {
            let (from, to) = match side {
                Side::Left => ((plot.x0, pos), (plot.x1, pos)),
                Side::Bottom => ((pos, plot.y0), (pos, plot.y1)),
            };
            scene.push(Mark::line(from, to, axis.grid_color, 1.0));
        }
        if !axis.show_ticks {
            continue;
        }
        let Some(text) = tick_text(axis, tick, scale) else {
            continue;
        };
        let mark = match side {
            Side::Left => Mark::text(
                (plot.x0 - 8.0, pos),
                text,
                TICK_SIZE,
                Anchor::End,
                axis.tick_color,
            ),
            Side::Bottom if axis.tick_labels.is_some() => Mark::text(
                (pos, plot.y1 + 10.0),
                text,
                TICK_SIZE - 1.0,
                Anchor::End,
                axis.tick_color,
            )
            .rotated(-40.0),
            Side::Bottom => Mark::text(
                (pos, plot.y1 + 14.0),
                text,
                TICK_SIZE,
                Anchor::Middle,
                axis.tick_color,
            ),
        };
        scene.push(mark);
    }
    draw_title(scene, axis, plot, side);
}

/// Category labels at the given centers along one edge.
pub fn draw_category_axis(
    scene: &mut Scene,
    axis: Option<&Axis>,
    labels: &[String],
    centers: impl Iterator<Item = f64>,
    plot: Rect,
    side: Side,
) {
    let default = Axis::default();
    let axis = axis.unwrap_or(&default);
    if axis.show_ticks {
        for (label, pos) in labels.iter().zip(centers) {
            let mark = match side {
                Side::Left => Mark::text(
                    (plot.x0 - 8.0, pos),
                    label.clone(),
                    TICK_SIZE,
                    Anchor::End,
                    axis.tick_color,
                ),
                Side::Bottom => Mark::text(
                    (pos, plot.y1 + 14.0),
                    label.clone(),
                    TICK_SIZE - 1.0,
                    Anchor::Middle,
                    axis.tick_color,
                ),
            };
            scene.push(mark);
        }
    }
    draw_title(scene, axis, plot, side);
}

/// Room for category labels along an edge.
pub fn category_margin(axis: Option<&Axis>, labels: &[String], side: Side, limit: f64) -> f64 {
    let title = match axis.and_then(|a| a.title.as_ref()) {
        Some(_) => TITLE_BAND,
        None => 0.0,
    };
    let hidden = axis.is_some_and(|a| !a.show_ticks);
    let labels = if hidden {
        8.0
    } else {
        match side {
            Side::Left => labels
                .iter()
                .map(|l| text_width(l, TICK_SIZE))
                .fold(0.0, f64::max)
                .min(limit)
                + 14.0,
            Side::Bottom => TICK_SIZE + 14.0,
        }
    };
    labels + title
}

fn draw_title(scene: &mut Scene, axis: &Axis, plot: Rect, side: Side) {
    let Some(title) = &axis.title else {
        return;
    };
    let mark = match side {
        Side::Left => Mark::text(
            (scene.bounds().x0 + TITLE_SIZE, plot.center().1),
            title.clone(),
            TITLE_SIZE,
            Anchor::Middle,
            axis.tick_color,
        )
        .rotated(-90.0),
        Side::Bottom => Mark::text(
            (plot.center().0, scene.height - TITLE_SIZE),
            title.clone(),
            TITLE_SIZE,
            Anchor::Middle,
            axis.tick_color,
        ),
    };
    scene.push(mark.bold());
}
