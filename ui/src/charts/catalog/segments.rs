//! Shopper segments from k-means and the attribute importance ranking.

use crate::charts::{
    config::{
        Axis, ChartConfig, ChartKind, DataLabels, Dataset, LabelFormat, Legend, LineStyle,
        Orientation, Paint,
    },
    host::{mount_with, Activation, ChartHost},
    id::ChartId,
};
use crate::core::palette::{Rgba, CITRUS_POP, ELECTRIC_BLUE, LEAF_GREEN, SLATE};

const PROFILE_AXES: [&str; 5] = [
    "Store Atmosphere",
    "Facilities & Service",
    "Value Proposition",
    "VM External Appeal",
    "VM In-Store Experience",
];
/// Standardized cluster centroids.
const LOW_INVOLVEMENT: [f64; 5] = [-0.35, -0.55, -0.65, -0.75, -0.85];
const VALUE_SEEKING: [f64; 5] = [0.30, 0.50, 0.60, 0.70, 0.80];

struct Attribute {
    label: &'static str,
    mean: f64,
    /// Standard error of the mean.
    ci: f64,
    rank: u32,
}

const fn attr(label: &'static str, mean: f64, ci: f64, rank: u32) -> Attribute {
    Attribute {
        label,
        mean,
        ci,
        rank,
    }
}

const ATTRIBUTES: [Attribute; 10] = [
    attr("Store Cleanliness", 4.71, 0.08, 1),
    attr("Parking Facility", 4.61, 0.10, 2),
    attr("Digital Payment", 4.61, 0.11, 3),
    attr("Fast Checkout", 4.48, 0.10, 4),
    attr("Return Policy", 4.44, 0.12, 5),
    attr("Changing Rooms", 4.29, 0.11, 6),
    attr("Washrooms", 4.28, 0.12, 7),
    attr("Merchandise Display", 4.06, 0.13, 8),
    attr("Store Ambience", 4.04, 0.12, 9),
    attr("Water Facility", 4.03, 0.14, 10),
];

/// Two-sided 95% normal quantile.
const Z_95: f64 = 1.96;

fn segment(label: &str, centroid: [f64; 5], color: Rgba) -> Dataset {
    Dataset::values(centroid)
        .label(label)
        .fill(Paint::Single(color.with_alpha(0.25)))
        .stroke(Paint::Single(color))
        .line(LineStyle {
            point_radius: 5.0,
            ..LineStyle::default()
        })
}

pub(super) fn cluster_radar(host: &mut dyn ChartHost) -> Activation {
    mount_with(host, ChartId::ClusterRadar, || {
        ChartConfig::new(ChartKind::Radar, PROFILE_AXES)
            .dataset(segment(
                "Low-Involvement Shoppers (n=72)",
                LOW_INVOLVEMENT,
                SLATE,
            ))
            .dataset(segment(
                "Value-Seeking Visual (n=82)",
                VALUE_SEEKING,
                LEAF_GREEN,
            ))
            .radial_axis(Axis::default().range(-1.0, 1.0).step(0.5))
    })
}

fn rank_color(rank: u32) -> Rgba {
    match rank {
        0..=3 => LEAF_GREEN,
        4..=6 => ELECTRIC_BLUE,
        _ => CITRUS_POP,
    }
}

pub(super) fn attribute_ranking(host: &mut dyn ChartHost) -> Activation {
    mount_with(host, ChartId::AttributeRanking, || {
        let colors: Vec<_> = ATTRIBUTES.iter().map(|a| rank_color(a.rank)).collect();
        ChartConfig::new(
            ChartKind::Bar {
                orientation: Orientation::Horizontal,
            },
            ATTRIBUTES.iter().map(|a| a.label),
        )
        .dataset(
            Dataset::values(ATTRIBUTES.iter().map(|a| a.mean).collect::<Vec<_>>())
                .tinted(&colors, 0.85)
                .error_bars(ATTRIBUTES.iter().map(|a| a.ci * Z_95).collect()),
        )
        .legend(Legend::hidden())
        .data_labels(DataLabels::new(LabelFormat::Ranked {
            ranks: ATTRIBUTES.iter().map(|a| a.rank).collect(),
            intervals: ATTRIBUTES.iter().map(|a| a.ci).collect(),
        }))
        .x_axis(
            Axis::default()
                .range(3.8, 5.1)
                .title("Mean Importance (1-5 Scale)"),
        )
        .y_axis(Axis::default().hide_grid())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::host::ChartBoard;
    use crate::core::theme::Theme;

    #[test]
    fn ranking_labels_carry_rank_and_interval() {
        let mut board = ChartBoard::new([ChartId::AttributeRanking], Theme::Light);
        attribute_ranking(&mut board);
        let config = board.chart(ChartId::AttributeRanking).unwrap();
        let series = config.datasets[0].data.scalars();
        let labels = config.data_labels.as_ref().unwrap();
        assert_eq!(
            labels.text_for(&config.point(0, 0, &series)).as_deref(),
            Some("#1 (4.71 ± 0.08)")
        );
        assert_eq!(
            labels.text_for(&config.point(0, 9, &series)).as_deref(),
            Some("#10 (4.03 ± 0.14)")
        );
        let whiskers = &config.datasets[0].error_bars;
        assert_eq!(whiskers.len(), 10);
        assert!((whiskers[0] - 0.1568).abs() < 1e-9);
    }

    #[test]
    fn rank_tiers() {
        assert_eq!(rank_color(3), LEAF_GREEN);
        assert_eq!(rank_color(6), ELECTRIC_BLUE);
        assert_eq!(rank_color(7), CITRUS_POP);
    }

    #[test]
    fn radar_has_no_value_labels() {
        let mut board = ChartBoard::new([ChartId::ClusterRadar], Theme::Dark);
        cluster_radar(&mut board);
        let config = board.chart(ChartId::ClusterRadar).unwrap();
        assert!(config.data_labels.is_none());
        let radial = config.scales.r.as_ref().unwrap();
        assert_eq!(radial.point_label_color, Theme::Dark.chrome().text);
        assert_eq!(radial.axis.min, Some(-1.0));
    }
}
