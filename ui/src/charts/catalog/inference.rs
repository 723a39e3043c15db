//! Group differences: gender t-tests and occupation ANOVA.

use crate::charts::{
    config::{
        Axis, ChartConfig, ChartKind, DataLabels, Dataset, LabelFormat, LabelPlacement, Legend,
        Orientation, Paint,
    },
    host::{mount_with, Activation, ChartHost},
    id::ChartId,
};
use crate::core::palette::{Rgba, CITRUS_POP, CORAL_FEMALE, GRAY_400, LEAF_GREEN};

const FACTORS: [&str; 5] = [
    "Facilities & Service",
    "Store Atmosphere",
    "Value Proposition",
    "VM External",
    "VM In-Store",
];
/// Cohen's d, female minus male.
const COHENS_D: [f64; 5] = [-0.27, -0.24, 0.16, -0.00, 0.01];

/// Starred factors differ significantly across occupations.
const ANOVA_FACTORS: [&str; 5] = [
    "Facilities",
    "Atmosphere*",
    "Value",
    "VM External*",
    "VM In-Store",
];
const ETA_SQUARED: [f64; 5] = [0.025, 0.055, 0.010, 0.055, 0.050];

/// Cohen's conventional bands: medium and above, small, negligible.
fn d_color(d: f64) -> Rgba {
    match d.abs() {
        m if m >= 0.5 => CORAL_FEMALE,
        m if m >= 0.2 => CITRUS_POP,
        _ => LEAF_GREEN,
    }
}

/// Fill and outline for η²: large, medium, small, negligible.
fn eta_colors(eta: f64) -> (Rgba, Rgba) {
    if eta >= 0.14 {
        (CORAL_FEMALE.with_alpha(0.8), CORAL_FEMALE)
    } else if eta >= 0.06 {
        (CITRUS_POP.with_alpha(0.8), CITRUS_POP)
    } else if eta >= 0.01 {
        (LEAF_GREEN.with_alpha(0.7), LEAF_GREEN)
    } else {
        (GRAY_400.with_alpha(0.5), GRAY_400)
    }
}

pub(super) fn effect_size(host: &mut dyn ChartHost) -> Activation {
    mount_with(host, ChartId::EffectSize, || {
        let colors: Vec<_> = COHENS_D.iter().copied().map(d_color).collect();
        ChartConfig::new(
            ChartKind::Bar {
                orientation: Orientation::Horizontal,
            },
            FACTORS,
        )
        .dataset(
            Dataset::values(COHENS_D)
                .label("Cohen's d")
                .tinted(&colors, 0.8),
        )
        .legend(Legend::hidden())
        .data_labels(DataLabels::new(LabelFormat::Fixed(2)).placement(LabelPlacement::Outward))
        .x_axis(Axis::default().range(-0.5, 0.5).title("Cohen's d"))
        .y_axis(Axis::default().hide_grid())
    })
}

pub(super) fn anova_effect(host: &mut dyn ChartHost) -> Activation {
    mount_with(host, ChartId::AnovaEffect, || {
        let (fill, stroke): (Vec<_>, Vec<_>) =
            ETA_SQUARED.iter().copied().map(eta_colors).unzip();
        ChartConfig::new(
            ChartKind::Bar {
                orientation: Orientation::Vertical,
            },
            ANOVA_FACTORS,
        )
        .dataset(
            Dataset::values(ETA_SQUARED)
                .label("η² (Eta-squared)")
                .fill(Paint::PerPoint(fill))
                .stroke(Paint::PerPoint(stroke)),
        )
        .legend(Legend::hidden())
        .data_labels(DataLabels::new(LabelFormat::Fixed(3)))
        .x_axis(Axis::default().hide_grid())
        .y_axis(Axis::default().range(0.0, 0.08).title("Effect Size (η²)"))
    })
}
