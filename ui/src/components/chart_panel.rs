use dioxus::prelude::*;

use crate::charts::{render::ChartCanvas, ChartBoard, ChartId};
use crate::t;

/// Card holding one chart container.
///
/// The container carries the chart's DOM name in `data-chart-id` so the
/// visibility observer can report it. It stays a placeholder until the chart
/// is mounted on the board provided by the report view.
#[component]
pub fn ChartPanel(id: ChartId, title: String, #[props(default)] wide: bool) -> Element {
    let board = use_context::<Signal<ChartBoard>>();
    let config = board.read().chart(id).cloned();
    let mounted = config.is_some();

    let card = if wide { "chart-card chart-card--wide" } else { "chart-card" };
    let container = if mounted {
        "chart-container chart-animate animated"
    } else {
        "chart-container chart-animate"
    };

    rsx! {
        figure { class: "{card}",
            figcaption { class: "chart-card__title", "{title}" }
            div {
                id: "{id.dom_name()}",
                class: "{container}",
                "data-chart-id": "{id.dom_name()}",
                if let Some(config) = config {
                    ChartCanvas { config }
                } else {
                    div { class: "chart-placeholder", {t!("chart-loading")} }
                }
            }
        }
    }
}
