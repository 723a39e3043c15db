//! Respondent profile: gender, age, occupation, education.

use super::RESPONDENTS;
use crate::charts::{
    config::{
        Axis, ChartConfig, ChartKind, DataLabels, Dataset, LabelFormat, LabelPlacement, Legend,
        LegendPosition, Orientation, Paint, TooltipFormat,
    },
    host::{mount_with, Activation, ChartHost},
    id::ChartId,
};
use crate::core::palette::{
    Rgba, CITRUS_POP, CORAL_FEMALE, ELECTRIC_BLUE, GENDER, LEAF_GREEN, PEACH_POP, PURPLE_SPLASH,
    TEAL_MALE, WHITE,
};

const GENDER_LABELS: [&str; 2] = ["Female", "Male"];
const GENDER_COUNTS: [f64; 2] = [96.0, 58.0];

const AGE_LABELS: [&str; 4] = ["18-25 Years", "35-45 Years", "26-34 Years", "Above 45 Years"];
const AGE_COUNTS: [f64; 4] = [67.0, 33.0, 31.0, 23.0];

const OCCUPATION_LABELS: [&str; 4] = ["Paid Employment", "Student", "Business", "House Wife"];
const OCCUPATION_COUNTS: [f64; 4] = [66.0, 56.0, 27.0, 5.0];

const EDUCATION_LABELS: [&str; 3] = ["Degree (Bachelor's)", "Postgraduate", "HSC/Diploma"];
const EDUCATION_COUNTS: [f64; 3] = [96.0, 51.0, 6.0];

const AGE_BANDS: [&str; 4] = ["18-25", "26-34", "35-45", "45+"];
const FEMALE_BY_AGE: [f64; 4] = [42.0, 19.0, 21.0, 14.0];
const MALE_BY_AGE: [f64; 4] = [25.0, 12.0, 12.0, 9.0];

fn doughnut() -> ChartKind {
    ChartKind::Doughnut { cutout: 0.55 }
}

/// Horizontal bar of respondent counts labelled with their share of the sample.
fn respondent_bars(labels: &[&str], counts: &[f64], colors: &[Rgba], max: f64) -> ChartConfig {
    ChartConfig::new(
        ChartKind::Bar {
            orientation: Orientation::Horizontal,
        },
        labels.iter().copied(),
    )
    .dataset(
        Dataset::values(counts)
            .label("Number of Respondents")
            .tinted(colors, 0.85),
    )
    .legend(Legend::hidden())
    .data_labels(
        DataLabels::new(LabelFormat::CountWithShare { total: RESPONDENTS }).font_size(12.0),
    )
    .x_axis(Axis::default().range(0.0, max).hide_grid().hide_ticks())
    .y_axis(Axis::default().hide_grid())
}

pub(super) fn gender(host: &mut dyn ChartHost) -> Activation {
    mount_with(host, ChartId::Gender, || {
        ChartConfig::new(doughnut(), GENDER_LABELS)
            .dataset(
                Dataset::values(GENDER_COUNTS)
                    .fill(Paint::PerPoint(GENDER.to_vec()))
                    .stroke(Paint::Single(WHITE))
                    .border_width(4.0),
            )
            .data_labels(DataLabels::on_slices(LabelFormat::ShareWithCount).font_size(18.0))
            .tooltip(TooltipFormat::Respondents)
    })
}

pub(super) fn age(host: &mut dyn ChartHost) -> Activation {
    mount_with(host, ChartId::Age, || {
        respondent_bars(
            &AGE_LABELS,
            &AGE_COUNTS,
            &[CITRUS_POP, PEACH_POP, ELECTRIC_BLUE, PURPLE_SPLASH],
            80.0,
        )
    })
}

pub(super) fn occupation(host: &mut dyn ChartHost) -> Activation {
    mount_with(host, ChartId::Occupation, || {
        ChartConfig::new(doughnut(), OCCUPATION_LABELS)
            .dataset(
                Dataset::values(OCCUPATION_COUNTS)
                    .fill(Paint::PerPoint(vec![
                        ELECTRIC_BLUE,
                        LEAF_GREEN,
                        PURPLE_SPLASH,
                        PEACH_POP,
                    ]))
                    .stroke(Paint::Single(WHITE))
                    .border_width(3.0),
            )
            .data_labels(DataLabels::on_slices(LabelFormat::ShareOfSeries {
                precision: 0,
                hide_at_or_below: Some(5.0),
            }))
    })
}

pub(super) fn education(host: &mut dyn ChartHost) -> Activation {
    mount_with(host, ChartId::Education, || {
        respondent_bars(
            &EDUCATION_LABELS,
            &EDUCATION_COUNTS,
            &[LEAF_GREEN, PURPLE_SPLASH, CITRUS_POP],
            120.0,
        )
    })
}

pub(super) fn gender_age(host: &mut dyn ChartHost) -> Activation {
    mount_with(host, ChartId::GenderAge, || {
        ChartConfig::new(
            ChartKind::Bar {
                orientation: Orientation::Vertical,
            },
            AGE_BANDS,
        )
        .dataset(
            Dataset::values(FEMALE_BY_AGE)
                .label("Female")
                .fill(Paint::Single(CORAL_FEMALE.with_alpha(0.8)))
                .stroke(Paint::Single(CORAL_FEMALE)),
        )
        .dataset(
            Dataset::values(MALE_BY_AGE)
                .label("Male")
                .fill(Paint::Single(TEAL_MALE.with_alpha(0.8)))
                .stroke(Paint::Single(TEAL_MALE)),
        )
        .legend(Legend::at(LegendPosition::Top))
        .data_labels(
            DataLabels::new(LabelFormat::Raw)
                .placement(LabelPlacement::End)
                .font_size(10.0),
        )
        .tooltip(TooltipFormat::ShareOfDataset)
        .x_axis(Axis::default().hide_grid())
        .y_axis(Axis::default().step(10.0))
    })
}
