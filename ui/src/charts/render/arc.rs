//! Doughnut slices.

use std::f64::consts::TAU;

use super::{
    geometry::{annular_sector, polar, Rect},
    scene::{Anchor, Mark, Scene},
};
use crate::charts::config::ChartConfig;

pub fn draw(scene: &mut Scene, config: &ChartConfig, area: Rect, cutout: f64) {
    let Some(dataset) = config.datasets.first() else {
        return;
    };
    let values = dataset.data.scalars();
    let total: f64 = values.iter().filter(|v| v.is_finite() && **v > 0.0).sum();
    if total <= 0.0 {
        return;
    }

    let center = area.center();
    let outer = (area.width().min(area.height()) / 2.0 - 4.0).max(1.0);
    let inner = outer * cutout.clamp(0.0, 0.95);
    let mut labels = Vec::new();
    let mut start = 0.0;

    for (i, &value) in values.iter().enumerate() {
        if !value.is_finite() || value <= 0.0 {
            continue;
        }
        let sweep = value / total * TAU;
        let end = start + sweep;
        let point = config.point(0, i, &values);
        scene.push(
            Mark::path(annular_sector(center, outer, inner, start, end))
                .fill(dataset.fill.at(i))
                .stroke(dataset.stroke.at(i), dataset.border_width)
                .tooltip(config.tooltip.text(&point, None).joined()),
        );

        if let Some(options) = &config.data_labels {
            if let Some(text) = options.text_for(&point) {
                let at = polar(center, (outer + inner) / 2.0, start + sweep / 2.0);
                labels.push(
                    Mark::text(at, text, options.font_size, Anchor::Middle, options.color.for_value(value))
                        .bold(),
                );
            }
        }
        start = end;
    }

    for label in labels {
        scene.push(label);
    }
}
