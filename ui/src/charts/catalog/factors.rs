//! Factor extraction and inter-factor structure.

use crate::charts::{
    config::{
        Axis, Bubble, ChartConfig, ChartKind, DataLabels, Dataset, LabelColor, LabelFormat,
        LabelPlacement, LabelScope, Legend, LegendPosition, LineStyle, Orientation, Paint,
        PointShape, TooltipFormat,
    },
    host::{mount_with, Activation, ChartHost},
    id::ChartId,
};
use crate::core::palette::{
    Rgba, CITRUS_POP, CORAL_FEMALE, DARK, ELECTRIC_BLUE, GRAY_400, LEAF_GREEN, WHITE,
};

const EIGENVALUES: [f64; 10] = [4.01, 2.04, 1.63, 1.27, 1.03, 0.84, 0.81, 0.79, 0.67, 0.58];
/// 95th percentile of eigenvalues from parallel analysis on random data.
const PARALLEL_95: [f64; 10] = [1.45, 1.32, 1.22, 1.14, 1.07, 1.00, 0.94, 0.88, 0.82, 0.75];
const KAISER: [f64; 10] = [1.0; 10];
/// Factors retained by parallel analysis; only these get value labels.
const LABELLED_FACTORS: usize = 6;

const FACTOR_NAMES: [(&str, &str); 5] = [
    ("F1", "Facilities & Service"),
    ("F2", "Store Atmosphere"),
    ("F3", "Value Proposition"),
    ("F4", "VM External Appeal"),
    ("F5", "VM In-Store Experience"),
];
const FACTOR_PAIRS: [(&str, f64); 10] = [
    ("F1-F2", 0.24),
    ("F1-F3", 0.18),
    ("F1-F4", 0.12),
    ("F1-F5", 0.15),
    ("F2-F3", 0.31),
    ("F2-F4", 0.28),
    ("F2-F5", 0.22),
    ("F3-F4", 0.19),
    ("F3-F5", 0.22),
    ("F4-F5", 0.42),
];

const MATRIX_FACTORS: [&str; 5] = [
    "F1: Facilities",
    "F2: Atmosphere",
    "F3: Value",
    "F4: VM External",
    "F5: VM InStore",
];
/// Inter-factor correlations from the confirmatory model, row-major.
const FACTOR_MATRIX: [[f64; 5]; 5] = [
    [1.00, 0.22, 0.19, 0.08, 0.14],
    [0.22, 1.00, 0.34, 0.34, 0.33],
    [0.19, 0.34, 1.00, 0.31, 0.33],
    [0.08, 0.34, 0.31, 1.00, 0.40],
    [0.14, 0.33, 0.33, 0.40, 1.00],
];

pub(super) fn scree_plot(host: &mut dyn ChartHost) -> Activation {
    mount_with(host, ChartId::ScreePlot, || {
        let factors = (1..=EIGENVALUES.len()).map(|n| n.to_string());
        ChartConfig::new(ChartKind::Line, factors)
            .dataset(
                Dataset::values(EIGENVALUES)
                    .label("Actual Eigenvalues")
                    .fill(Paint::Single(ELECTRIC_BLUE))
                    .stroke(Paint::Single(ELECTRIC_BLUE))
                    .border_width(3.0)
                    .line(LineStyle {
                        point_radius: 8.0,
                        area: Some(ELECTRIC_BLUE.with_alpha(0.1)),
                        ..LineStyle::default()
                    }),
            )
            .dataset(
                Dataset::values(PARALLEL_95)
                    .label("Random 95th Percentile")
                    .fill(Paint::Single(CORAL_FEMALE))
                    .stroke(Paint::Single(CORAL_FEMALE))
                    .line(LineStyle {
                        dash: Some((6.0, 4.0)),
                        point_radius: 5.0,
                        point_shape: PointShape::Square,
                        area: None,
                    }),
            )
            .dataset(
                Dataset::values(KAISER)
                    .label("Kaiser Criterion (λ = 1)")
                    .fill(Paint::Single(LEAF_GREEN))
                    .stroke(Paint::Single(LEAF_GREEN))
                    .line(LineStyle {
                        dash: Some((3.0, 3.0)),
                        point_radius: 0.0,
                        ..LineStyle::default()
                    }),
            )
            .legend(Legend::at(LegendPosition::Top))
            .data_labels(
                DataLabels::new(LabelFormat::Fixed(2))
                    .color(LabelColor::Fixed(ELECTRIC_BLUE))
                    .scope(LabelScope::Leading {
                        dataset: 0,
                        count: LABELLED_FACTORS,
                    }),
            )
            .tooltip(TooltipFormat::Fixed(2))
            .x_axis(Axis::default().title("Factor Number").hide_grid())
            .y_axis(
                Axis::default()
                    .range(0.0, 4.5)
                    .step(0.5)
                    .tick_decimals(1)
                    .title("Eigenvalue"),
            )
    })
}

fn correlation_color(r: f64) -> Rgba {
    if r >= 0.4 {
        CITRUS_POP
    } else if r >= 0.25 {
        ELECTRIC_BLUE
    } else {
        LEAF_GREEN
    }
}

pub(super) fn factor_correlation(host: &mut dyn ChartHost) -> Activation {
    mount_with(host, ChartId::FactorCorrelation, || {
        let colors: Vec<_> = FACTOR_PAIRS
            .iter()
            .map(|(_, r)| correlation_color(*r))
            .collect();
        ChartConfig::new(
            ChartKind::Bar {
                orientation: Orientation::Vertical,
            },
            FACTOR_PAIRS.iter().map(|(pair, _)| *pair),
        )
        .dataset(
            Dataset::values(FACTOR_PAIRS.iter().map(|(_, r)| *r).collect::<Vec<_>>())
                .label("Inter-Factor Correlation (r)")
                .tinted(&colors, 0.8),
        )
        .legend(Legend::hidden())
        .data_labels(DataLabels::new(LabelFormat::Fixed(2)).font_size(10.0))
        .tooltip(TooltipFormat::FactorPair {
            names: FACTOR_NAMES
                .iter()
                .map(|(code, name)| (code.to_string(), name.to_string()))
                .collect(),
        })
        .x_axis(Axis::default().hide_grid())
        .y_axis(
            Axis::default()
                .range(0.0, 0.7)
                .title("Correlation Coefficient (r)"),
        )
    })
}

/// Fill and outline of one heatmap cell, by absolute correlation.
fn cell_colors(value: f64) -> (Rgba, Rgba) {
    let magnitude = value.abs();
    if magnitude >= 0.8 {
        (LEAF_GREEN.with_alpha(0.9), LEAF_GREEN)
    } else if magnitude >= 0.35 {
        (ELECTRIC_BLUE.with_alpha(0.8), ELECTRIC_BLUE)
    } else if magnitude >= 0.2 {
        (CITRUS_POP.with_alpha(0.7), CITRUS_POP)
    } else {
        (GRAY_400.with_alpha(0.4), GRAY_400)
    }
}

/// Lays the matrix out row by row with the first row at the top.
fn matrix_cells(matrix: &[[f64; 5]; 5]) -> Vec<Bubble> {
    let last = (matrix.len() - 1) as f64;
    matrix
        .iter()
        .enumerate()
        .flat_map(|(i, row)| {
            row.iter().enumerate().map(move |(j, &value)| Bubble {
                x: j as f64,
                y: last - i as f64,
                r: value.abs() * 18.0 + 4.0,
                value,
            })
        })
        .collect()
}

pub(super) fn correlation_heatmap(host: &mut dyn ChartHost) -> Activation {
    mount_with(host, ChartId::CorrelationHeatmap, || {
        let cells = matrix_cells(&FACTOR_MATRIX);
        let (fill, stroke): (Vec<_>, Vec<_>) =
            cells.iter().map(|cell| cell_colors(cell.value)).unzip();
        let names: Vec<String> = MATRIX_FACTORS.iter().map(|f| f.to_string()).collect();
        let span = MATRIX_FACTORS.len() as f64 - 0.5;

        ChartConfig::new(ChartKind::Bubble, std::iter::empty::<String>())
            .dataset(
                Dataset::bubbles(cells)
                    .fill(Paint::PerPoint(fill))
                    .stroke(Paint::PerPoint(stroke)),
            )
            .legend(Legend::hidden())
            .data_labels(
                DataLabels::new(LabelFormat::Fixed(2))
                    .placement(LabelPlacement::Center)
                    .color(LabelColor::ByMagnitude {
                        threshold: 0.8,
                        strong: WHITE,
                        normal: DARK,
                    })
                    .font_size(10.0),
            )
            .tooltip(TooltipFormat::MatrixCell {
                factors: names.clone(),
            })
            .x_axis(
                Axis::default()
                    .range(-0.5, span)
                    .step(1.0)
                    .tick_labels(names.clone())
                    .hide_grid(),
            )
            .y_axis(
                Axis::default()
                    .range(-0.5, span)
                    .step(1.0)
                    .tick_labels(names.into_iter().rev().collect())
                    .hide_grid(),
            )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::{config::SeriesData, host::ChartBoard};
    use crate::core::theme::Theme;

    fn mounted(id: ChartId) -> ChartConfig {
        let mut board = ChartBoard::new([id], Theme::Light);
        super::super::initializer(id)(&mut board);
        board.chart(id).cloned().unwrap()
    }

    #[test]
    fn scree_labels_only_retained_factors() {
        let config = mounted(ChartId::ScreePlot);
        let labels = config.data_labels.as_ref().unwrap();
        let actual = config.datasets[0].data.scalars();
        let shown = (0..actual.len())
            .filter_map(|i| labels.text_for(&config.point(0, i, &actual)))
            .count();
        assert_eq!(shown, LABELLED_FACTORS);

        let random = config.datasets[1].data.scalars();
        assert_eq!(labels.text_for(&config.point(1, 0, &random)), None);
    }

    #[test]
    fn heatmap_cells_cover_the_matrix() {
        let config = mounted(ChartId::CorrelationHeatmap);
        let SeriesData::Bubbles(cells) = &config.datasets[0].data else {
            panic!("heatmap should hold bubbles");
        };
        assert_eq!(cells.len(), 25);

        // Top-left cell is F1 with itself.
        let corner = cells[0];
        assert_eq!((corner.x, corner.y, corner.value), (0.0, 4.0, 1.0));
        assert_eq!(corner.r, 22.0);

        let text = config.tooltip.text(&config.point(0, 1, &[]), Some(&cells[1]));
        assert_eq!(text.joined(), "F1: Facilities × F2: Atmosphere: r = 0.22");
    }

    #[test]
    fn heatmap_cell_colors_by_magnitude() {
        assert_eq!(cell_colors(1.0).1, LEAF_GREEN);
        assert_eq!(cell_colors(0.40).1, ELECTRIC_BLUE);
        assert_eq!(cell_colors(0.22).1, CITRUS_POP);
        assert_eq!(cell_colors(0.08), (GRAY_400.with_alpha(0.4), GRAY_400));
    }

    #[test]
    fn strongest_pair_is_highlighted() {
        assert_eq!(correlation_color(0.42), CITRUS_POP);
        assert_eq!(correlation_color(0.31), ELECTRIC_BLUE);
        assert_eq!(correlation_color(0.12), LEAF_GREEN);
    }
}
