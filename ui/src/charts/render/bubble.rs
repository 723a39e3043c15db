//! Bubble plots, used for the factor correlation matrix.

use super::{
    axis::{self, Side},
    geometry::{LinearScale, Rect},
    scene::{Anchor, Mark, Scene},
};
use crate::charts::config::{ChartConfig, SeriesData};

pub fn draw(scene: &mut Scene, config: &ChartConfig, area: Rect) {
    let bubbles: Vec<_> = config
        .datasets
        .iter()
        .flat_map(|d| match &d.data {
            SeriesData::Bubbles(b) => b.clone(),
            SeriesData::Values(_) => Vec::new(),
        })
        .collect();
    let x_axis = config.scales.x.clone().unwrap_or_default();
    let y_axis = config.scales.y.clone().unwrap_or_default();
    let x_domain = axis::value_domain(Some(&x_axis), bubbles.iter().map(|b| b.x));
    let y_domain = axis::value_domain(Some(&y_axis), bubbles.iter().map(|b| b.y));

    let left = axis::margin(
        Some(&y_axis),
        Side::Left,
        &LinearScale::new(y_domain, (area.y1, area.y0)),
    );
    let bottom = axis::margin(
        Some(&x_axis),
        Side::Bottom,
        &LinearScale::new(x_domain, (area.x0, area.x1)),
    );
    let plot = Rect::new(area.x0 + left, area.y0 + 8.0, area.x1 - 8.0, area.y1 - bottom);
    let x = LinearScale::new(x_domain, (plot.x0, plot.x1));
    let y = LinearScale::new(y_domain, (plot.y1, plot.y0));

    axis::draw_value_axis(scene, &x_axis, &x, plot, Side::Bottom);
    axis::draw_value_axis(scene, &y_axis, &y, plot, Side::Left);

    let mut labels = Vec::new();
    for (di, dataset) in config.datasets.iter().enumerate() {
        let SeriesData::Bubbles(cells) = &dataset.data else {
            continue;
        };
        let values = dataset.data.scalars();
        for (i, cell) in cells.iter().enumerate() {
            let at = (x.map(cell.x), y.map(cell.y));
            let point = config.point(di, i, &values);
            scene.push(
                Mark::circle(at, cell.r)
                    .fill(dataset.fill.at(i))
                    .stroke(dataset.stroke.at(i), dataset.border_width)
                    .tooltip(config.tooltip.text(&point, Some(cell)).joined()),
            );
            if let Some(options) = &config.data_labels {
                if let Some(text) = options.text_for(&point) {
                    labels.push(
                        Mark::text(at, text, options.font_size, Anchor::Middle, options.color.for_value(cell.value))
                            .bold(),
                    );
                }
            }
        }
    }

    for label in labels {
        scene.push(label);
    }
}
