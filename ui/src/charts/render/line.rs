//! Line series over categorical x positions.

use super::{
    axis::{self, Side},
    geometry::{polygon, polyline, BandScale, LinearScale, Rect},
    scene::{Anchor, Mark, Scene},
};
use crate::charts::config::{ChartConfig, PointShape};

pub fn draw(scene: &mut Scene, config: &ChartConfig, area: Rect) {
    let series: Vec<Vec<f64>> = config.datasets.iter().map(|d| d.data.scalars()).collect();
    let y_axis = config.scales.y.clone().unwrap_or_default();
    let domain = axis::value_domain(Some(&y_axis), series.iter().flatten().copied());

    let hint = LinearScale::new(domain, (area.y1, area.y0));
    let left = axis::margin(Some(&y_axis), Side::Left, &hint);
    let bottom = axis::category_margin(config.scales.x.as_ref(), &config.labels, Side::Bottom, 0.0);
    let plot = Rect::new(area.x0 + left, area.y0 + 12.0, area.x1 - 8.0, area.y1 - bottom);

    let scale = LinearScale::new(domain, (plot.y1, plot.y0));
    let band = BandScale::new(config.labels.len(), (plot.x0, plot.x1), 0.0);

    axis::draw_value_axis(scene, &y_axis, &scale, plot, Side::Left);
    if let Some(x_axis) = config.scales.x.as_ref().filter(|a| a.show_grid) {
        let grid = x_axis.grid_color;
        for i in 0..config.labels.len() {
            let x = band.center(i);
            scene.push(Mark::line((x, plot.y0), (x, plot.y1), grid, 1.0));
        }
    }
    axis::draw_category_axis(
        scene,
        config.scales.x.as_ref(),
        &config.labels,
        (0..config.labels.len()).map(|i| band.center(i)),
        plot,
        Side::Bottom,
    );

    let baseline = scale.map_clamped(0.0);
    let mut labels = Vec::new();

    for (di, (dataset, values)) in config.datasets.iter().zip(&series).enumerate() {
        let points: Vec<(f64, f64)> = values
            .iter()
            .enumerate()
            .filter(|(_, v)| v.is_finite())
            .map(|(i, v)| (band.center(i), scale.map_clamped(*v)))
            .collect();
        let (Some(first), Some(last)) = (points.first(), points.last()) else {
            continue;
        };

        if let Some(area_fill) = dataset.line.area {
            let mut outline = points.clone();
            outline.push((last.0, baseline));
            outline.push((first.0, baseline));
            scene.push(Mark::path(polygon(&outline)).fill(area_fill));
        }
        scene.push(
            Mark::path(polyline(&points))
                .stroke(dataset.stroke.at(0), dataset.border_width)
                .dash(dataset.line.dash),
        );

        let radius = dataset.line.point_radius;
        for (i, &value) in values.iter().enumerate() {
            if !value.is_finite() {
                continue;
            }
            let at = (band.center(i), scale.map_clamped(value));
            let point = config.point(di, i, values);
            if radius > 0.0 {
                let marker = match dataset.line.point_shape {
                    PointShape::Circle => Mark::circle(at, radius),
                    PointShape::Square => Mark::rect(
                        Rect::new(at.0 - radius, at.1 - radius, at.0 + radius, at.1 + radius),
                        0.0,
                    ),
                };
                scene.push(
                    marker
                        .fill(dataset.fill.at(i))
                        .stroke(dataset.stroke.at(i), 2.0)
                        .tooltip(config.tooltip.text(&point, None).joined()),
                );
            }
            if let Some(options) = &config.data_labels {
                if let Some(text) = options.text_for(&point) {
                    labels.push(
                        Mark::text(
                            (at.0, at.1 - radius - 10.0),
                            text,
                            options.font_size,
                            Anchor::Middle,
                            options.color.for_value(value),
                        )
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

