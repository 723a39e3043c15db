//! Vertical, horizontal and grouped bars with optional error whiskers.

use super::{
    axis::{self, Side},
    geometry::{BandScale, LinearScale, Rect},
    scene::{Anchor, Mark, Scene},
};
use crate::charts::config::{Axis, ChartConfig, LabelPlacement, Orientation};
use crate::core::palette::DARK;

const BAND_PADDING: f64 = 0.25;
const LABEL_OFFSET: f64 = 6.0;
const CAP: f64 = 4.0;

pub fn draw(scene: &mut Scene, config: &ChartConfig, area: Rect, orientation: Orientation) {
    let horizontal = orientation == Orientation::Horizontal;
    let (category_axis, value_axis) = if horizontal {
        (config.scales.y.as_ref(), config.scales.x.as_ref())
    } else {
        (config.scales.x.as_ref(), config.scales.y.as_ref())
    };

    let series: Vec<Vec<f64>> = config.datasets.iter().map(|d| d.data.scalars()).collect();
    let extents = config.datasets.iter().zip(&series).flat_map(|(d, values)| {
        values.iter().enumerate().flat_map(move |(i, v)| {
            let e = d.error_bars.get(i).copied().unwrap_or(0.0);
            [v - e, v + e]
        })
    });
    let domain = axis::value_domain(value_axis, extents);
    let default_axis = Axis::default();
    let value_opts = value_axis.unwrap_or(&default_axis);

    let plot = if horizontal {
        let hint = LinearScale::new(domain, (area.x0, area.x1));
        let left = axis::category_margin(category_axis, &config.labels, Side::Left, area.width() * 0.4);
        let bottom = axis::margin(Some(value_opts), Side::Bottom, &hint);
        // Leave room past the longest bar for its label.
        Rect::new(area.x0 + left, area.y0 + 4.0, area.x1 - 56.0, area.y1 - bottom)
    } else {
        let hint = LinearScale::new(domain, (area.y1, area.y0));
        let left = axis::margin(Some(value_opts), Side::Left, &hint);
        let bottom = axis::category_margin(category_axis, &config.labels, Side::Bottom, 0.0);
        Rect::new(area.x0 + left, area.y0 + 18.0, area.x1 - 8.0, area.y1 - bottom)
    };

    let (scale, band) = if horizontal {
        (
            LinearScale::new(domain, (plot.x0, plot.x1)),
            BandScale::new(config.labels.len(), (plot.y0, plot.y1), BAND_PADDING),
        )
    } else {
        (
            LinearScale::new(domain, (plot.y1, plot.y0)),
            BandScale::new(config.labels.len(), (plot.x0, plot.x1), BAND_PADDING),
        )
    };

    let value_side = if horizontal { Side::Bottom } else { Side::Left };
    let category_side = if horizontal { Side::Left } else { Side::Bottom };
    axis::draw_value_axis(scene, value_opts, &scale, plot, value_side);
    axis::draw_category_axis(
        scene,
        category_axis,
        &config.labels,
        (0..config.labels.len()).map(|i| band.center(i)),
        plot,
        category_side,
    );

    let groups = config.datasets.len().max(1) as f64;
    let base = scale.map_clamped(0.0);
    let mut labels = Vec::new();

    for (di, (dataset, values)) in config.datasets.iter().zip(&series).enumerate() {
        for (i, &value) in values.iter().enumerate() {
            if !value.is_finite() {
                continue;
            }
            let (start, width) = band.band(i);
            let slot = width / groups;
            let across0 = start + slot * di as f64 + 1.0;
            let across1 = across0 + slot - 2.0;
            let mid = (across0 + across1) / 2.0;
            let end = scale.map_clamped(value);

            let rect = if horizontal {
                Rect::new(base, across0, end, across1)
            } else {
                Rect::new(across0, end, across1, base)
            };
            let point = config.point(di, i, values);
            scene.push(
                Mark::rect(rect, 4.0)
                    .fill(dataset.fill.at(i))
                    .stroke(dataset.stroke.at(i), dataset.border_width)
                    .tooltip(config.tooltip.text(&point, None).joined()),
            );

            let mut reach = end;
            if let Some(&e) = dataset.error_bars.get(i) {
                let lo = scale.map_clamped(value - e);
                let hi = scale.map_clamped(value + e);
                reach = if horizontal { hi.max(lo) } else { hi.min(lo) };
                whisker(scene, horizontal, mid, lo, hi);
            }

            let Some(options) = &config.data_labels else {
                continue;
            };
            let Some(text) = options.text_for(&point) else {
                continue;
            };
            let toward_negative = value < 0.0 && options.placement == LabelPlacement::Outward;
            let (at, anchor) = match (options.placement, horizontal) {
                (LabelPlacement::Center, _) => (rect.center(), Anchor::Middle),
                (_, true) if toward_negative => ((end - LABEL_OFFSET, mid), Anchor::End),
                (_, true) => ((reach + LABEL_OFFSET, mid), Anchor::Start),
                (_, false) if toward_negative || value < 0.0 => {
                    ((mid, end + LABEL_OFFSET * 2.0), Anchor::Middle)
                }
                (_, false) => ((mid, reach - LABEL_OFFSET * 2.0), Anchor::Middle),
            };
            labels.push(
                Mark::text(at, text, options.font_size, anchor, options.color.for_value(value))
                    .bold(),
            );
        }
    }

    // Labels go last so bars never cover them.
    for label in labels {
        scene.push(label);
    }
}

fn whisker(scene: &mut Scene, horizontal: bool, mid: f64, lo: f64, hi: f64) {
    let (line, caps) = if horizontal {
        (
            ((lo, mid), (hi, mid)),
            [((lo, mid - CAP), (lo, mid + CAP)), ((hi, mid - CAP), (hi, mid + CAP))],
        )
    } else {
        (
            ((mid, lo), (mid, hi)),
            [((mid - CAP, lo), (mid + CAP, lo)), ((mid - CAP, hi), (mid + CAP, hi))],
        )
    };
    scene.push(Mark::line(line.0, line.1, DARK, 1.5));
    for (from, to) in caps {
        scene.push(Mark::line(from, to, DARK, 1.5));
    }
}
