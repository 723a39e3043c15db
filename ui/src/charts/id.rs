//! Identifiers of the chart containers on the report page.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// One chart container. The DOM name (`Display`/`FromStr`) is the value of the
/// container's `data-chart-id` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ChartId {
    Gender,
    Age,
    Occupation,
    Education,
    GenderAge,
    ShoppingFrequency,
    ShoppingMotivation,
    StoreImportance,
    VmImpact,
    Alpha,
    Kmo,
    ScreePlot,
    FactorCorrelation,
    CorrelationHeatmap,
    EffectSize,
    AnovaEffect,
    ClusterRadar,
    AttributeRanking,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown chart `{0}`")]
pub struct UnknownChart(pub String);

impl ChartId {
    pub const ALL: [ChartId; 18] = [
        ChartId::Gender,
        ChartId::Age,
        ChartId::Occupation,
        ChartId::Education,
        ChartId::GenderAge,
        ChartId::ShoppingFrequency,
        ChartId::ShoppingMotivation,
        ChartId::StoreImportance,
        ChartId::VmImpact,
        ChartId::Alpha,
        ChartId::Kmo,
        ChartId::ScreePlot,
        ChartId::FactorCorrelation,
        ChartId::CorrelationHeatmap,
        ChartId::EffectSize,
        ChartId::AnovaEffect,
        ChartId::ClusterRadar,
        ChartId::AttributeRanking,
    ];

    pub fn dom_name(self) -> &'static str {
        match self {
            ChartId::Gender => "genderChart",
            ChartId::Age => "ageChart",
            ChartId::Occupation => "occupationChart",
            ChartId::Education => "educationChart",
            ChartId::GenderAge => "genderAgeChart",
            ChartId::ShoppingFrequency => "shoppingFrequencyChart",
            ChartId::ShoppingMotivation => "shoppingMotivationChart",
            ChartId::StoreImportance => "storeImportanceChart",
            ChartId::VmImpact => "vmImpactChart",
            ChartId::Alpha => "alphaChart",
            ChartId::Kmo => "kmoChart",
            ChartId::ScreePlot => "screePlotChart",
            ChartId::FactorCorrelation => "factorCorrelationChart",
            ChartId::CorrelationHeatmap => "correlationHeatmap",
            ChartId::EffectSize => "effectSizeChart",
            ChartId::AnovaEffect => "anovaEffectChart",
            ChartId::ClusterRadar => "clusterRadarChart",
            ChartId::AttributeRanking => "attributeRankingChart",
        }
    }
}

impl fmt::Display for ChartId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dom_name())
    }
}

impl FromStr for ChartId {
    type Err = UnknownChart;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ChartId::ALL
            .into_iter()
            .find(|id| id.dom_name() == s)
            .ok_or_else(|| UnknownChart(s.to_string()))
    }
}
