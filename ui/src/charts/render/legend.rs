//! Legend rows above or below the plot.

use super::{
    geometry::Rect,
    scene::{text_width, Anchor, Mark, Scene},
};
use crate::charts::config::{ChartConfig, ChartKind, LegendPosition};
use crate::core::palette::Rgba;

const SWATCH: f64 = 12.0;
const GAP: f64 = 6.0;
const ITEM_GAP: f64 = 18.0;
const ROW: f64 = 20.0;
const FONT: f64 = 12.0;

/// Legend entries: slices for doughnuts, labelled datasets otherwise.
pub fn entries(config: &ChartConfig) -> Vec<(String, Rgba)> {
    match config.kind {
        ChartKind::Doughnut { .. } => {
            let Some(dataset) = config.datasets.first() else {
                return Vec::new();
            };
            config
                .labels
                .iter()
                .enumerate()
                .map(|(i, label)| (label.clone(), dataset.fill.at(i)))
                .collect()
        }
        _ => config
            .datasets
            .iter()
            .filter_map(|d| Some((d.label.clone()?, d.stroke.at(0))))
            .collect(),
    }
}

/// Draws the legend inside `area` and returns what is left for the plot.
pub fn place(scene: &mut Scene, config: &ChartConfig, area: Rect) -> Rect {
    if !config.legend.is_visible() {
        return area;
    }
    let items = entries(config);
    if items.is_empty() {
        return area;
    }

    let mut rows: Vec<Vec<(String, Rgba, f64)>> = vec![Vec::new()];
    let mut row_width = 0.0;
    for (label, color) in items {
        let width = SWATCH + GAP + text_width(&label, FONT);
        let needed = if row_width > 0.0 { ITEM_GAP + width } else { width };
        if row_width > 0.0 && row_width + needed > area.width() {
            rows.push(Vec::new());
            row_width = 0.0;
        }
        row_width += if row_width > 0.0 { ITEM_GAP + width } else { width };
        if let Some(row) = rows.last_mut() {
            row.push((label, color, width));
        }
    }

    let height = rows.len() as f64 * ROW + 8.0;
    let top = match config.legend.position {
        LegendPosition::Top => area.y0,
        _ => area.y1 - height + 8.0,
    };
    for (r, row) in rows.iter().enumerate() {
        let total: f64 = row.iter().map(|(_, _, w)| w).sum::<f64>()
            + ITEM_GAP * row.len().saturating_sub(1) as f64;
        let mut x = area.center().0 - total / 2.0;
        let y = top + r as f64 * ROW + ROW / 2.0;
        for (label, color, width) in row {
            scene.push(
                Mark::rect(
                    Rect::new(x, y - SWATCH / 2.0, x + SWATCH, y + SWATCH / 2.0),
                    2.0,
                )
                .fill(*color),
            );
            scene.push(Mark::text(
                (x + SWATCH + GAP, y),
                label.clone(),
                FONT,
                Anchor::Start,
                config.legend.label_color,
            ));
            x += width + ITEM_GAP;
        }
    }

    match config.legend.position {
        LegendPosition::Top => Rect::new(area.x0, area.y0 + height, area.x1, area.y1),
        _ => Rect::new(area.x0, area.y0, area.x1, area.y1 - height),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::config::{Dataset, Legend, Orientation, Paint};
    use crate::core::palette::{CORAL_FEMALE, TEAL_MALE};

    fn grouped() -> ChartConfig {
        ChartConfig::new(
            ChartKind::Bar {
                orientation: Orientation::Vertical,
            },
            ["18-25", "26-34"],
        )
        .dataset(Dataset::values([42.0, 19.0]).label("Female").stroke(Paint::Single(CORAL_FEMALE)))
        .dataset(Dataset::values([25.0, 12.0]).label("Male").stroke(Paint::Single(TEAL_MALE)))
    }

    #[test]
    fn dataset_entries_use_outline_color() {
        assert_eq!(
            entries(&grouped()),
            vec![
                ("Female".to_string(), CORAL_FEMALE),
                ("Male".to_string(), TEAL_MALE)
            ]
        );
    }

    #[test]
    fn top_legend_shrinks_area_from_above() {
        let config = grouped().legend(Legend::at(LegendPosition::Top));
        let mut scene = Scene::new(400.0, 300.0);
        let area = Rect::new(0.0, 0.0, 400.0, 300.0);
        let rest = place(&mut scene, &config, area);
        assert!(rest.y0 > 0.0);
        assert_eq!(rest.y1, 300.0);
        assert_eq!(scene.texts().collect::<Vec<_>>(), vec!["Female", "Male"]);
    }

    #[test]
    fn hidden_legend_takes_no_space() {
        let config = grouped().legend(Legend::hidden());
        let mut scene = Scene::new(400.0, 300.0);
        let area = Rect::new(0.0, 0.0, 400.0, 300.0);
        assert_eq!(place(&mut scene, &config, area), area);
        assert!(scene.marks().is_empty());
    }
}
