//! Typed chart configuration handed to a [`ChartHost`](super::host::ChartHost).
//!
//! A configuration is plain data: the initializers build one from literal survey
//! numbers, the host stores it, and the SVG renderer in `charts::render` draws it.
//! Formatting callbacks are modelled as enums so every chart's label and tooltip
//! behaviour is visible in one place and unit-testable without a renderer.

use crate::core::{
    format::{format_number, format_percent, percent_of, round_to},
    palette::{Rgba, DARK, GRAY_600, WHITE},
    theme::Theme,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Orientation {
    Vertical,
    Horizontal,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ChartKind {
    /// Ring chart; `cutout` is the inner radius as a fraction of the outer one.
    Doughnut { cutout: f64 },
    Bar { orientation: Orientation },
    Line,
    Radar,
    Bubble,
}

impl ChartKind {
    /// Doughnut, radar and bubble charts keep a square drawing area.
    pub fn is_square(&self) -> bool {
        matches!(
            self,
            ChartKind::Doughnut { .. } | ChartKind::Radar | ChartKind::Bubble
        )
    }
}

/// Either one color for the whole dataset or one per data point.
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    Single(Rgba),
    PerPoint(Vec<Rgba>),
}

impl Paint {
    pub fn at(&self, index: usize) -> Rgba {
        match self {
            Paint::Single(color) => *color,
            Paint::PerPoint(colors) if colors.is_empty() => GRAY_600,
            Paint::PerPoint(colors) => colors[index % colors.len()],
        }
    }
}

/// One cell of a bubble matrix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bubble {
    pub x: f64,
    pub y: f64,
    /// Radius in pixels.
    pub r: f64,
    /// Value shown in labels and tooltips.
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SeriesData {
    Values(Vec<f64>),
    Bubbles(Vec<Bubble>),
}

impl SeriesData {
    pub fn len(&self) -> usize {
        match self {
            SeriesData::Values(values) => values.len(),
            SeriesData::Bubbles(bubbles) => bubbles.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Scalar per point; bubbles report their `value`.
    pub fn scalars(&self) -> Vec<f64> {
        match self {
            SeriesData::Values(values) => values.clone(),
            SeriesData::Bubbles(bubbles) => bubbles.iter().map(|b| b.value).collect(),
        }
    }

    pub fn total(&self) -> f64 {
        self.scalars().iter().sum()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointShape {
    Circle,
    Square,
}

/// Stroke and marker options for line and radar series.
#[derive(Debug, Clone, PartialEq)]
pub struct LineStyle {
    pub dash: Option<(f64, f64)>,
    pub point_radius: f64,
    pub point_shape: PointShape,
    /// Area fill between the series and the baseline.
    pub area: Option<Rgba>,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            dash: None,
            point_radius: 3.0,
            point_shape: PointShape::Circle,
            area: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub label: Option<String>,
    pub data: SeriesData,
    pub fill: Paint,
    pub stroke: Paint,
    pub border_width: f64,
    pub line: LineStyle,
    /// Symmetric half-widths drawn as whiskers on bar charts.
    pub error_bars: Vec<f64>,
}

impl Dataset {
    pub fn values(values: impl Into<Vec<f64>>) -> Self {
        Self::with_data(SeriesData::Values(values.into()))
    }

    pub fn bubbles(bubbles: Vec<Bubble>) -> Self {
        Self::with_data(SeriesData::Bubbles(bubbles))
    }

    fn with_data(data: SeriesData) -> Self {
        Self {
            label: None,
            data,
            fill: Paint::Single(GRAY_600),
            stroke: Paint::Single(GRAY_600),
            border_width: 2.0,
            line: LineStyle::default(),
            error_bars: Vec::new(),
        }
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn fill(mut self, fill: Paint) -> Self {
        self.fill = fill;
        self
    }

    pub fn stroke(mut self, stroke: Paint) -> Self {
        self.stroke = stroke;
        self
    }

    /// Translucent fill with an opaque outline of the same hues.
    pub fn tinted(self, colors: &[Rgba], alpha: f32) -> Self {
        let fill = colors.iter().map(|c| c.with_alpha(alpha)).collect();
        self.fill(Paint::PerPoint(fill))
            .stroke(Paint::PerPoint(colors.to_vec()))
    }

    pub fn border_width(mut self, width: f64) -> Self {
        self.border_width = width;
        self
    }

    pub fn line(mut self, line: LineStyle) -> Self {
        self.line = line;
        self
    }

    pub fn error_bars(mut self, half_widths: Vec<f64>) -> Self {
        self.error_bars = half_widths;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LegendPosition {
    Top,
    Bottom,
    Hidden,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Legend {
    pub position: LegendPosition,
    pub label_color: Rgba,
}

impl Legend {
    pub fn at(position: LegendPosition) -> Self {
        Self {
            position,
            label_color: GRAY_600,
        }
    }

    pub fn hidden() -> Self {
        Self::at(LegendPosition::Hidden)
    }

    pub fn is_visible(&self) -> bool {
        self.position != LegendPosition::Hidden
    }
}

/// Inputs to a label or tooltip formatter for one data point.
#[derive(Debug, Clone, Copy)]
pub struct PointContext<'a> {
    pub value: f64,
    pub index: usize,
    pub dataset_index: usize,
    pub series: &'a [f64],
    pub dataset_label: Option<&'a str>,
    pub category: Option<&'a str>,
}

/// How a data label is rendered from its point.
#[derive(Debug, Clone, PartialEq)]
pub enum LabelFormat {
    /// The value as written in the data.
    Raw,
    Fixed(usize),
    /// Share of the dataset total; hidden when the rounded share is at or below the cutoff.
    ShareOfSeries {
        precision: usize,
        hide_at_or_below: Option<f64>,
    },
    /// `"62.3%\n(96)"`
    ShareWithCount,
    /// `"67 (43.5%)"` against a fixed respondent count.
    CountWithShare { total: f64 },
    /// `"#1 (4.71 ± 0.08)"`, ranks and intervals indexed like the data.
    Ranked {
        ranks: Vec<u32>,
        intervals: Vec<f64>,
    },
}

impl LabelFormat {
    pub fn format(&self, point: &PointContext<'_>) -> Option<String> {
        let value = point.value;
        match self {
            LabelFormat::Raw => Some(format!("{value}")),
            LabelFormat::Fixed(decimals) => Some(format_number(value, *decimals)),
            LabelFormat::ShareOfSeries {
                precision,
                hide_at_or_below,
            } => {
                let total: f64 = point.series.iter().sum();
                let share = round_to(percent_of(value, total), *precision);
                match hide_at_or_below {
                    Some(cutoff) if share <= *cutoff => None,
                    _ => Some(format_percent(share, *precision)),
                }
            }
            LabelFormat::ShareWithCount => {
                let total: f64 = point.series.iter().sum();
                Some(format!(
                    "{}\n({value})",
                    format_percent(percent_of(value, total), 1)
                ))
            }
            LabelFormat::CountWithShare { total } => Some(format!(
                "{value} ({})",
                format_percent(percent_of(value, *total), 1)
            )),
            LabelFormat::Ranked { ranks, intervals } => {
                let rank = ranks.get(point.index)?;
                let interval = intervals.get(point.index)?;
                Some(format!(
                    "#{rank} ({} ± {})",
                    format_number(value, 2),
                    format_number(*interval, 2)
                ))
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LabelPlacement {
    /// Centered on the mark (slices, bubbles).
    Center,
    /// Just past the end of the bar or above the point.
    End,
    /// Past whichever end of the bar points away from zero.
    Outward,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LabelColor {
    Fixed(Rgba),
    /// `strong` when `|value| >= threshold`, `normal` otherwise.
    ByMagnitude {
        threshold: f64,
        strong: Rgba,
        normal: Rgba,
    },
}

impl LabelColor {
    pub fn for_value(&self, value: f64) -> Rgba {
        match *self {
            LabelColor::Fixed(color) => color,
            LabelColor::ByMagnitude {
                threshold,
                strong,
                normal,
            } => {
                if value.abs() >= threshold {
                    strong
                } else {
                    normal
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LabelScope {
    All,
    Leading { dataset: usize, count: usize },
}

impl LabelScope {
    pub fn includes(&self, dataset_index: usize, index: usize) -> bool {
        match *self {
            LabelScope::All => true,
            LabelScope::Leading { dataset, count } => dataset_index == dataset && index < count,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DataLabels {
    pub format: LabelFormat,
    pub color: LabelColor,
    pub placement: LabelPlacement,
    pub scope: LabelScope,
    pub font_size: f64,
}

impl DataLabels {
    pub fn new(format: LabelFormat) -> Self {
        Self {
            format,
            color: LabelColor::Fixed(DARK),
            placement: LabelPlacement::End,
            scope: LabelScope::All,
            font_size: 11.0,
        }
    }

    /// White labels centered on doughnut slices.
    pub fn on_slices(format: LabelFormat) -> Self {
        Self {
            color: LabelColor::Fixed(WHITE),
            placement: LabelPlacement::Center,
            font_size: 12.0,
            ..Self::new(format)
        }
    }

    pub fn placement(mut self, placement: LabelPlacement) -> Self {
        self.placement = placement;
        self
    }

    pub fn color(mut self, color: LabelColor) -> Self {
        self.color = color;
        self
    }

    pub fn scope(mut self, scope: LabelScope) -> Self {
        self.scope = scope;
        self
    }

    pub fn font_size(mut self, size: f64) -> Self {
        self.font_size = size;
        self
    }

    pub fn text_for(&self, point: &PointContext<'_>) -> Option<String> {
        if !self.scope.includes(point.dataset_index, point.index) {
            return None;
        }
        self.format.format(point)
    }
}

/// Hover text for a point: an optional title and one or more body lines.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TooltipText {
    pub title: Option<String>,
    pub lines: Vec<String>,
}

impl TooltipText {
    /// Flattened for an SVG `<title>` element.
    pub fn joined(&self) -> String {
        self.title
            .iter()
            .chain(self.lines.iter())
            .cloned()
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TooltipFormat {
    /// `"{category}"` title with `"{dataset}: {value}"` body.
    Default,
    /// `"{label}: {value} respondents ({pct:.1}%)"`
    Respondents,
    /// Default body plus `"{pct:.1}% of {dataset}"`.
    ShareOfDataset,
    /// `"{dataset}: {value:.N}"`
    Fixed(usize),
    /// Category `"F1-F2"` titled with both factor names, body `"Correlation: r = {r:.3}"`.
    FactorPair { names: Vec<(String, String)> },
    /// Bubble matrix cell: `"{row} × {col}: r = {r:.2}"`; factors indexed like the axes.
    MatrixCell { factors: Vec<String> },
}

impl TooltipFormat {
    pub fn text(&self, point: &PointContext<'_>, bubble: Option<&Bubble>) -> TooltipText {
        let value = point.value;
        let category = point.category.unwrap_or_default();
        let series_name = point.dataset_label.unwrap_or(category);
        match self {
            TooltipFormat::Default => TooltipText {
                title: point.category.map(str::to_string),
                lines: vec![format!("{series_name}: {value}")],
            },
            TooltipFormat::Respondents => {
                let total: f64 = point.series.iter().sum();
                TooltipText {
                    title: None,
                    lines: vec![format!(
                        "{category}: {value} respondents ({})",
                        format_percent(percent_of(value, total), 1)
                    )],
                }
            }
            TooltipFormat::ShareOfDataset => {
                let total: f64 = point.series.iter().sum();
                TooltipText {
                    title: point.category.map(str::to_string),
                    lines: vec![
                        format!("{series_name}: {value}"),
                        format!(
                            "{} of {series_name}",
                            format_percent(percent_of(value, total), 1)
                        ),
                    ],
                }
            }
            TooltipFormat::Fixed(decimals) => TooltipText {
                title: point.category.map(str::to_string),
                lines: vec![format!("{series_name}: {}", format_number(value, *decimals))],
            },
            TooltipFormat::FactorPair { names } => {
                let title = category
                    .split_once('-')
                    .and_then(|(left, right)| {
                        let lookup = |code: &str| {
                            names
                                .iter()
                                .find(|(key, _)| key == code)
                                .map(|(_, name)| name.as_str())
                        };
                        Some(format!("{} × {}", lookup(left)?, lookup(right)?))
                    })
                    .or_else(|| point.category.map(str::to_string));
                TooltipText {
                    title,
                    lines: vec![format!("Correlation: r = {}", format_number(value, 3))],
                }
            }
            TooltipFormat::MatrixCell { factors } => {
                let Some(bubble) = bubble else {
                    return TooltipText::default();
                };
                let last = factors.len().saturating_sub(1) as f64;
                let row = factors
                    .get((last - bubble.y).max(0.0) as usize)
                    .map(String::as_str)
                    .unwrap_or_default();
                let col = factors
                    .get(bubble.x.max(0.0) as usize)
                    .map(String::as_str)
                    .unwrap_or_default();
                TooltipText {
                    title: None,
                    lines: vec![format!(
                        "{row} × {col}: r = {}",
                        format_number(bubble.value, 2)
                    )],
                }
            }
        }
    }
}

/// Cartesian axis options.
#[derive(Debug, Clone, PartialEq)]
pub struct Axis {
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub step: Option<f64>,
    pub title: Option<String>,
    pub show_grid: bool,
    pub show_ticks: bool,
    pub tick_decimals: Option<usize>,
    /// Labels for integer tick positions (bubble matrices).
    pub tick_labels: Option<Vec<String>>,
    pub tick_color: Rgba,
    pub grid_color: Rgba,
}

impl Default for Axis {
    fn default() -> Self {
        Self {
            min: None,
            max: None,
            step: None,
            title: None,
            show_grid: true,
            show_ticks: true,
            tick_decimals: None,
            tick_labels: None,
            tick_color: GRAY_600,
            grid_color: Rgba::rgba(0, 0, 0, 0.1),
        }
    }
}

impl Axis {
    pub fn range(mut self, min: f64, max: f64) -> Self {
        self.min = Some(min);
        self.max = Some(max);
        self
    }

    pub fn max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    pub fn step(mut self, step: f64) -> Self {
        self.step = Some(step);
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn hide_grid(mut self) -> Self {
        self.show_grid = false;
        self
    }

    pub fn hide_ticks(mut self) -> Self {
        self.show_ticks = false;
        self
    }

    pub fn tick_decimals(mut self, decimals: usize) -> Self {
        self.tick_decimals = Some(decimals);
        self
    }

    pub fn tick_labels(mut self, labels: Vec<String>) -> Self {
        self.tick_labels = Some(labels);
        self
    }
}

/// Radial axis of a radar chart.
#[derive(Debug, Clone, PartialEq)]
pub struct RadialAxis {
    pub axis: Axis,
    pub point_label_color: Rgba,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Scales {
    pub x: Option<Axis>,
    pub y: Option<Axis>,
    pub r: Option<RadialAxis>,
}

impl Scales {
    pub fn is_empty(&self) -> bool {
        self.x.is_none() && self.y.is_none() && self.r.is_none()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartConfig {
    pub kind: ChartKind,
    /// Category labels (slices, bars, line x positions, radar spokes).
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
    pub legend: Legend,
    pub data_labels: Option<DataLabels>,
    pub tooltip: TooltipFormat,
    pub scales: Scales,
}

impl ChartConfig {
    pub fn new<I, S>(kind: ChartKind, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            kind,
            labels: labels.into_iter().map(Into::into).collect(),
            datasets: Vec::new(),
            legend: Legend::at(LegendPosition::Bottom),
            data_labels: None,
            tooltip: TooltipFormat::Default,
            scales: Scales::default(),
        }
    }

    pub fn dataset(mut self, dataset: Dataset) -> Self {
        self.datasets.push(dataset);
        self
    }

    pub fn legend(mut self, legend: Legend) -> Self {
        self.legend = legend;
        self
    }

    pub fn data_labels(mut self, labels: DataLabels) -> Self {
        self.data_labels = Some(labels);
        self
    }

    pub fn tooltip(mut self, tooltip: TooltipFormat) -> Self {
        self.tooltip = tooltip;
        self
    }

    pub fn x_axis(mut self, axis: Axis) -> Self {
        self.scales.x = Some(axis);
        self
    }

    pub fn y_axis(mut self, axis: Axis) -> Self {
        self.scales.y = Some(axis);
        self
    }

    pub fn radial_axis(mut self, axis: Axis) -> Self {
        self.scales.r = Some(RadialAxis {
            axis,
            point_label_color: DARK,
        });
        self
    }

    /// Recolors axis ticks, grid lines, radar point labels and legend text.
    /// Data colors are left untouched.
    pub fn apply_theme(&mut self, theme: Theme) {
        let chrome = theme.chrome();
        for axis in [self.scales.x.as_mut(), self.scales.y.as_mut()]
            .into_iter()
            .flatten()
        {
            axis.tick_color = chrome.text;
            axis.grid_color = chrome.grid;
        }
        if let Some(radial) = self.scales.r.as_mut() {
            radial.axis.tick_color = chrome.text;
            radial.axis.grid_color = chrome.grid;
            radial.point_label_color = chrome.text;
        }
        self.legend.label_color = chrome.text;
    }

    /// Context for point `index` of dataset `dataset_index`.
    pub fn point<'a>(
        &'a self,
        dataset_index: usize,
        index: usize,
        series: &'a [f64],
    ) -> PointContext<'a> {
        PointContext {
            value: series.get(index).copied().unwrap_or(f64::NAN),
            index,
            dataset_index,
            series,
            dataset_label: self
                .datasets
                .get(dataset_index)
                .and_then(|d| d.label.as_deref()),
            category: self.labels.get(index).map(String::as_str),
        }
    }
}
