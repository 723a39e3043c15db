//! Literal survey data and the chart each report container displays.
//!
//! Every initializer is independent: it checks for its container, builds one
//! [`ChartConfig`](super::config::ChartConfig) from constants in its section
//! module, and mounts it. Shared state is limited to the read-only palette.

mod demographics;
mod exploration;
mod factors;
mod inference;
mod segments;
mod validation;

use super::{id::ChartId, registry::Initializer};

/// Respondents in the cleaned survey sample.
pub const RESPONDENTS: f64 = 154.0;

pub fn initializer(id: ChartId) -> Initializer {
    match id {
        ChartId::Gender => demographics::gender,
        ChartId::Age => demographics::age,
        ChartId::Occupation => demographics::occupation,
        ChartId::Education => demographics::education,
        ChartId::GenderAge => demographics::gender_age,
        ChartId::ShoppingFrequency => exploration::shopping_frequency,
        ChartId::ShoppingMotivation => exploration::shopping_motivation,
        ChartId::StoreImportance => exploration::store_importance,
        ChartId::VmImpact => exploration::vm_impact,
        ChartId::Alpha => validation::alpha,
        ChartId::Kmo => validation::kmo,
        ChartId::ScreePlot => factors::scree_plot,
        ChartId::FactorCorrelation => factors::factor_correlation,
        ChartId::CorrelationHeatmap => factors::correlation_heatmap,
        ChartId::EffectSize => inference::effect_size,
        ChartId::AnovaEffect => inference::anova_effect,
        ChartId::ClusterRadar => segments::cluster_radar,
        ChartId::AttributeRanking => segments::attribute_ranking,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::{
        config::{ChartConfig, ChartKind, SeriesData},
        host::{Activation, ChartBoard, ChartHost},
    };
    use crate::core::theme::Theme;

    fn mount(id: ChartId) -> ChartConfig {
        let mut board = ChartBoard::new([id], Theme::Light);
        assert_eq!(initializer(id)(&mut board), Activation::Mounted);
        board.chart(id).cloned().expect("chart mounted")
    }

    #[test]
    fn every_initializer_mounts_its_own_container() {
        for id in ChartId::ALL {
            let mut board = ChartBoard::new([id], Theme::Light);
            assert_eq!(initializer(id)(&mut board), Activation::Mounted, "{id}");
            let ids: Vec<_> = board.mounted().map(|(mounted, _)| mounted).collect();
            assert_eq!(ids, vec![id]);
        }
    }

    #[test]
    fn every_initializer_tolerates_a_missing_container() {
        for id in ChartId::ALL {
            let mut board = ChartBoard::default();
            assert_eq!(
                initializer(id)(&mut board),
                Activation::MissingContainer,
                "{id}"
            );
            assert!(!board.has_container(id));
            assert_eq!(board.mounted().count(), 0);
        }
    }

    #[test]
    fn category_charts_label_every_point() {
        for id in ChartId::ALL {
            let config = mount(id);
            assert!(!config.datasets.is_empty(), "{id} has no data");
            if matches!(config.kind, ChartKind::Bubble) {
                continue;
            }
            for dataset in &config.datasets {
                assert_eq!(dataset.data.len(), config.labels.len(), "{id}");
            }
        }
    }

    #[test]
    fn gender_split() {
        let config = mount(ChartId::Gender);
        assert_eq!(config.labels, vec!["Female", "Male"]);
        assert_eq!(config.datasets[0].data, SeriesData::Values(vec![96.0, 58.0]));

        let labels = config.data_labels.as_ref().unwrap();
        let series = config.datasets[0].data.scalars();
        let texts: Vec<_> = (0..series.len())
            .filter_map(|i| labels.text_for(&config.point(0, i, &series)))
            .collect();
        assert_eq!(texts, vec!["62.3%\n(96)", "37.7%\n(58)"]);
    }
}
