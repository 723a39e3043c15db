//! Report sections, their anchors and the charts each one hosts.

use crate::charts::ChartId;
use crate::t;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionId {
    Demographics,
    Exploration,
    Validation,
    Factors,
    Inference,
    Segments,
}

impl SectionId {
    pub const ALL: [SectionId; 6] = [
        SectionId::Demographics,
        SectionId::Exploration,
        SectionId::Validation,
        SectionId::Factors,
        SectionId::Inference,
        SectionId::Segments,
    ];

    /// Fragment used by navbar links (`#demographics`).
    pub fn anchor(self) -> &'static str {
        match self {
            SectionId::Demographics => "demographics",
            SectionId::Exploration => "exploration",
            SectionId::Validation => "validation",
            SectionId::Factors => "factors",
            SectionId::Inference => "inference",
            SectionId::Segments => "segments",
        }
    }

    pub fn charts(self) -> &'static [ChartId] {
        match self {
            SectionId::Demographics => &[
                ChartId::Gender,
                ChartId::Age,
                ChartId::Occupation,
                ChartId::Education,
                ChartId::GenderAge,
            ],
            SectionId::Exploration => &[
                ChartId::ShoppingFrequency,
                ChartId::ShoppingMotivation,
                ChartId::StoreImportance,
                ChartId::VmImpact,
            ],
            SectionId::Validation => &[ChartId::Alpha, ChartId::Kmo],
            SectionId::Factors => &[
                ChartId::ScreePlot,
                ChartId::FactorCorrelation,
                ChartId::CorrelationHeatmap,
            ],
            SectionId::Inference => &[ChartId::EffectSize, ChartId::AnovaEffect],
            SectionId::Segments => &[ChartId::ClusterRadar, ChartId::AttributeRanking],
        }
    }

    pub fn nav_label(self) -> String {
        match self {
            SectionId::Demographics => t!("nav-demographics"),
            SectionId::Exploration => t!("nav-exploration"),
            SectionId::Validation => t!("nav-validation"),
            SectionId::Factors => t!("nav-factors"),
            SectionId::Inference => t!("nav-inference"),
            SectionId::Segments => t!("nav-segments"),
        }
    }

    pub fn title(self) -> String {
        match self {
            SectionId::Demographics => t!("section-demographics-title"),
            SectionId::Exploration => t!("section-exploration-title"),
            SectionId::Validation => t!("section-validation-title"),
            SectionId::Factors => t!("section-factors-title"),
            SectionId::Inference => t!("section-inference-title"),
            SectionId::Segments => t!("section-segments-title"),
        }
    }

    pub fn lead(self) -> String {
        match self {
            SectionId::Demographics => t!("section-demographics-lead"),
            SectionId::Exploration => t!("section-exploration-lead"),
            SectionId::Validation => t!("section-validation-lead"),
            SectionId::Factors => t!("section-factors-lead"),
            SectionId::Inference => t!("section-inference-lead"),
            SectionId::Segments => t!("section-segments-lead"),
        }
    }
}

/// Every chart container the report page renders.
pub fn page_containers() -> impl Iterator<Item = ChartId> {
    SectionId::ALL
        .into_iter()
        .flat_map(|section| section.charts().iter().copied())
}

pub fn chart_title(id: ChartId) -> String {
    match id {
        ChartId::Gender => t!("chart-gender"),
        ChartId::Age => t!("chart-age"),
        ChartId::Occupation => t!("chart-occupation"),
        ChartId::Education => t!("chart-education"),
        ChartId::GenderAge => t!("chart-gender-age"),
        ChartId::ShoppingFrequency => t!("chart-shopping-frequency"),
        ChartId::ShoppingMotivation => t!("chart-shopping-motivation"),
        ChartId::StoreImportance => t!("chart-store-importance"),
        ChartId::VmImpact => t!("chart-vm-impact"),
        ChartId::Alpha => t!("chart-alpha"),
        ChartId::Kmo => t!("chart-kmo"),
        ChartId::ScreePlot => t!("chart-scree-plot"),
        ChartId::FactorCorrelation => t!("chart-factor-correlation"),
        ChartId::CorrelationHeatmap => t!("chart-correlation-heatmap"),
        ChartId::EffectSize => t!("chart-effect-size"),
        ChartId::AnovaEffect => t!("chart-anova-effect"),
        ChartId::ClusterRadar => t!("chart-cluster-radar"),
        ChartId::AttributeRanking => t!("chart-attribute-ranking"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn every_chart_has_exactly_one_container() {
        let listed: Vec<_> = page_containers().collect();
        let unique: BTreeSet<_> = listed.iter().copied().collect();
        assert_eq!(listed.len(), unique.len());
        assert_eq!(unique, ChartId::ALL.into_iter().collect());
    }

    #[test]
    fn anchors_are_unique() {
        let anchors: BTreeSet<_> = SectionId::ALL.iter().map(|s| s.anchor()).collect();
        assert_eq!(anchors.len(), SectionId::ALL.len());
    }

    #[test]
    fn copy_is_localized() {
        crate::i18n::init();
        for section in SectionId::ALL {
            assert!(!section.title().is_empty());
            assert!(!section.nav_label().is_empty());
        }
        for id in ChartId::ALL {
            assert!(!chart_title(id).is_empty());
        }
    }
}
