//! Shopping habits and attribute means from the exploratory analysis.

use crate::charts::{
    config::{
        Axis, ChartConfig, ChartKind, DataLabels, Dataset, LabelFormat, Legend, Orientation,
        Paint,
    },
    host::{mount_with, Activation, ChartHost},
    id::ChartId,
};
use crate::core::palette::{
    self, Rgba, CITRUS_POP, CORAL_FEMALE, ELECTRIC_BLUE, GRAY_400, LEAF_GREEN, PEACH_POP,
    PURPLE_SPLASH, WHITE,
};

const FREQUENCY_LABELS: [&str; 4] = [
    "Once in 3 months",
    "Once a month",
    "Once in 6 months",
    "Once a year",
];
const FREQUENCY_COUNTS: [f64; 4] = [62.0, 58.0, 24.0, 10.0];

const MOTIVATION_LABELS: [&str; 5] = [
    "Variety in life",
    "Keep up with trends",
    "Try new outlets",
    "Feel relaxed",
    "For fun",
];
const MOTIVATION_COUNTS: [f64; 5] = [70.0, 38.0, 16.0, 13.0, 13.0];
/// Respondents who answered the motivation question.
const MOTIVATION_RESPONDENTS: f64 = 150.0;

const STORE_MEANS: [(&str, f64); 5] = [
    ("Store Cleanliness", 4.68),
    ("Parking Facility", 4.60),
    ("Digital Payment", 4.57),
    ("Fast Checkout", 4.45),
    ("Return Policy", 4.36),
];

const VM_MEANS: [(&str, f64); 5] = [
    ("Lighting & Music", 4.09),
    ("AI/VR/AR", 3.90),
    ("Creative Displays", 3.78),
    ("Signage & Graphics", 3.72),
    ("Window Displays", 3.67),
];

fn horizontal() -> ChartKind {
    ChartKind::Bar {
        orientation: Orientation::Horizontal,
    }
}

/// Likert means on a zoomed x range, labelled to two decimals.
fn mean_bars(means: &[(&str, f64)], colors: &[Rgba], min: f64, max: f64) -> ChartConfig {
    ChartConfig::new(horizontal(), means.iter().map(|(label, _)| *label))
        .dataset(
            Dataset::values(means.iter().map(|(_, mean)| *mean).collect::<Vec<_>>())
                .tinted(colors, 0.85),
        )
        .legend(Legend::hidden())
        .data_labels(DataLabels::new(LabelFormat::Fixed(2)))
        .x_axis(Axis::default().range(min, max))
        .y_axis(Axis::default().hide_grid())
}

pub(super) fn shopping_frequency(host: &mut dyn ChartHost) -> Activation {
    mount_with(host, ChartId::ShoppingFrequency, || {
        ChartConfig::new(ChartKind::Doughnut { cutout: 0.55 }, FREQUENCY_LABELS)
            .dataset(
                Dataset::values(FREQUENCY_COUNTS)
                    .fill(Paint::PerPoint(vec![
                        ELECTRIC_BLUE,
                        CITRUS_POP,
                        LEAF_GREEN,
                        PURPLE_SPLASH,
                    ]))
                    .stroke(Paint::Single(WHITE))
                    .border_width(3.0),
            )
            .data_labels(DataLabels::on_slices(LabelFormat::ShareOfSeries {
                precision: 0,
                hide_at_or_below: Some(6.0),
            }))
    })
}

pub(super) fn shopping_motivation(host: &mut dyn ChartHost) -> Activation {
    mount_with(host, ChartId::ShoppingMotivation, || {
        ChartConfig::new(horizontal(), MOTIVATION_LABELS)
            .dataset(Dataset::values(MOTIVATION_COUNTS).tinted(&palette::PRIMARY, 0.85))
            .legend(Legend::hidden())
            .data_labels(DataLabels::new(LabelFormat::CountWithShare {
                total: MOTIVATION_RESPONDENTS,
            }))
            .x_axis(Axis::default().range(0.0, 85.0).hide_grid().hide_ticks())
            .y_axis(Axis::default().hide_grid())
    })
}

pub(super) fn store_importance(host: &mut dyn ChartHost) -> Activation {
    mount_with(host, ChartId::StoreImportance, || {
        let colors: Vec<_> = (0..STORE_MEANS.len()).map(palette::primary).collect();
        mean_bars(&STORE_MEANS, &colors, 4.0, 5.0)
    })
}

pub(super) fn vm_impact(host: &mut dyn ChartHost) -> Activation {
    mount_with(host, ChartId::VmImpact, || {
        mean_bars(
            &VM_MEANS,
            &[PURPLE_SPLASH, PEACH_POP, CORAL_FEMALE, CITRUS_POP, GRAY_400],
            3.5,
            4.5,
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::host::ChartBoard;
    use crate::core::theme::Theme;

    #[test]
    fn frequency_hides_slices_at_six_percent() {
        let mut board = ChartBoard::new([ChartId::ShoppingFrequency], Theme::Light);
        shopping_frequency(&mut board);
        let config = board.chart(ChartId::ShoppingFrequency).unwrap();
        let labels = config.data_labels.as_ref().unwrap();
        let series = config.datasets[0].data.scalars();
        let texts: Vec<_> = (0..series.len())
            .map(|i| labels.text_for(&config.point(0, i, &series)))
            .collect();
        assert_eq!(
            texts,
            vec![
                Some("40%".to_string()),
                Some("38%".to_string()),
                Some("16%".to_string()),
                None,
            ]
        );
    }

    #[test]
    fn store_means_cycle_primary_palette() {
        let mut board = ChartBoard::new([ChartId::StoreImportance], Theme::Light);
        store_importance(&mut board);
        let dataset = &board.chart(ChartId::StoreImportance).unwrap().datasets[0];
        assert_eq!(dataset.stroke.at(0), ELECTRIC_BLUE);
        assert_eq!(dataset.stroke.at(4), PEACH_POP);
        assert_eq!(dataset.fill.at(1), CITRUS_POP.with_alpha(0.85));
    }
}
