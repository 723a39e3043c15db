//! Scale reliability and sampling adequacy.

use crate::charts::{
    config::{Axis, ChartConfig, ChartKind, DataLabels, Dataset, LabelFormat, Legend, Orientation},
    host::{mount_with, Activation, ChartHost},
    id::ChartId,
};
use crate::core::palette::{CITRUS_POP, ELECTRIC_BLUE, LEAF_GREEN};

const SCALES: [&str; 3] = ["Store Importance", "Visual Merchandising", "Full Scale"];
const CRONBACH_ALPHA: [f64; 3] = [0.807, 0.775, 0.857];
const KMO: [f64; 3] = [0.754, 0.674, 0.689];

fn scale_bars(label: &str, values: [f64; 3], min: f64, max: f64) -> ChartConfig {
    ChartConfig::new(
        ChartKind::Bar {
            orientation: Orientation::Vertical,
        },
        SCALES,
    )
    .dataset(
        Dataset::values(values)
            .label(label)
            .tinted(&[LEAF_GREEN, CITRUS_POP, ELECTRIC_BLUE], 0.85),
    )
    .legend(Legend::hidden())
    .data_labels(DataLabels::new(LabelFormat::Fixed(3)).font_size(13.0))
    .x_axis(Axis::default().hide_grid())
    .y_axis(Axis::default().range(min, max).step(0.1))
}

pub(super) fn alpha(host: &mut dyn ChartHost) -> Activation {
    mount_with(host, ChartId::Alpha, || {
        scale_bars("Cronbach's Alpha", CRONBACH_ALPHA, 0.6, 0.95)
    })
}

pub(super) fn kmo(host: &mut dyn ChartHost) -> Activation {
    mount_with(host, ChartId::Kmo, || scale_bars("KMO Value", KMO, 0.5, 0.85))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::host::ChartBoard;
    use crate::core::theme::Theme;

    #[test]
    fn alpha_labels_use_three_decimals() {
        let mut board = ChartBoard::new([ChartId::Alpha], Theme::Light);
        alpha(&mut board);
        let config = board.chart(ChartId::Alpha).unwrap();
        let series = config.datasets[0].data.scalars();
        let labels = config.data_labels.as_ref().unwrap();
        assert_eq!(
            labels.text_for(&config.point(0, 2, &series)).as_deref(),
            Some("0.857")
        );
    }

    #[test]
    fn kmo_axis_starts_above_zero() {
        let mut board = ChartBoard::new([ChartId::Kmo], Theme::Light);
        kmo(&mut board);
        let y = board.chart(ChartId::Kmo).unwrap().scales.y.as_ref().unwrap();
        assert_eq!((y.min, y.max), (Some(0.5), Some(0.85)));
    }
}
