use dioxus::prelude::*;
use futures_util::StreamExt;
use tracing::debug;

use crate::charts::{
    visibility::{forward_samples, observer_script, Sample, VisibilityObserver, STOP_MESSAGE},
    ActivationRegistry, ChartBoard, ChartId, Dispatch,
};
use crate::components::{AppNavbar, ChartPanel};
use crate::core::{
    config::ReportConfig,
    storage::LocalPreferences,
    theme::Theme,
    timing::sleep_ms,
};
use crate::i18n;
use crate::t;
use crate::views::sections::{chart_title, page_containers, SectionId};

const THEME_CSS: Asset = asset!("/assets/theme/main.css");

/// Charts drawn across the full width of their section.
const WIDE_CHARTS: [ChartId; 4] = [
    ChartId::GenderAge,
    ChartId::ScreePlot,
    ChartId::FactorCorrelation,
    ChartId::AttributeRanking,
];

/// Running observer script; disconnects the page observer when the task
/// holding it is dropped.
struct ObserverScript(document::Eval);

impl Drop for ObserverScript {
    fn drop(&mut self) {
        let _ = self.0.send(STOP_MESSAGE);
    }
}

/// The full report page.
///
/// Owns the chart board, the activation registry and the theme. Charts are
/// dispatched from a coroutine fed by the visibility observer, so each one is
/// built the first time its container scrolls into view. Platforms may supply
/// a [`ReportConfig`] through context to override the defaults.
#[component]
pub fn Report() -> Element {
    i18n::init();
    i18n::use_language();

    let settings = try_use_context::<ReportConfig>().unwrap_or_default();
    let mut prefs = use_signal(LocalPreferences::open);
    let theme_key = settings.theme_key.clone();
    let mut theme = use_signal(|| Theme::load(&*prefs.peek(), &theme_key));
    let mut board = use_signal(|| ChartBoard::new(page_containers(), *theme.peek()));
    let mut registry = use_signal(ActivationRegistry::new);
    use_context_provider(|| board);

    let activation = use_coroutine(move |mut signals: UnboundedReceiver<ChartId>| async move {
        while let Some(id) = signals.next().await {
            let outcome = registry.write().dispatch(id, &mut *board.write());
            if outcome != Dispatch::Activated {
                debug!(chart = %id, ?outcome, "activation signal absorbed");
            }
        }
    });

    let observe = settings.clone();
    use_future(move || {
        let settings = observe.clone();
        async move {
            sleep_ms(settings.startup_delay_ms).await;
            let mut observer = VisibilityObserver::new(settings.visibility_threshold);
            let mut script = ObserverScript(document::eval(&observer_script(&settings)));
            let samples = futures_util::stream::unfold(&mut script.0, |page| async move {
                let next = page.recv::<Sample>().await;
                Some((next, page))
            });
            let end = forward_samples(samples, &mut observer, page_containers(), |id| {
                activation.send(id)
            })
            .await;
            debug!(?end, "visibility observer finished");
        }
    });

    let toggle_key = settings.theme_key.clone();
    let toggle_theme = move |_: ()| {
        let next = theme.peek().toggle();
        theme.set(next);
        board.write().set_theme(next);
        next.save(&mut *prefs.write(), &toggle_key);
    };

    rsx! {
        document::Link { rel: "stylesheet", href: THEME_CSS }

        div { id: "top", class: "report {theme().body_class()}",
            AppNavbar { theme: theme(), on_toggle_theme: toggle_theme }

            main { class: "report__body",
                header { class: "report__hero",
                    p { class: "report__eyebrow", {t!("report-eyebrow")} }
                    h1 { class: "report__title", {t!("report-title")} }
                    p { class: "report__lead", {t!("report-lead")} }
                }

                for section in SectionId::ALL {
                    ReportSection { key: "{section.anchor()}", section }
                }
            }

            footer { class: "report__footer",
                p { {t!("footer-note")} }
            }
        }
    }
}

#[component]
fn ReportSection(section: SectionId) -> Element {
    // Titles are passed down as props, so re-render them on language changes.
    i18n::use_language();
    rsx! {
        section { id: "{section.anchor()}", class: "report-section",
            div { class: "report-section__header",
                h2 { class: "report-section__title", {section.title()} }
                p { class: "report-section__lead", {section.lead()} }
            }
            div { class: "chart-grid",
                for id in section.charts().iter().copied() {
                    ChartPanel {
                        key: "{id}",
                        id,
                        title: chart_title(id),
                        wide: WIDE_CHARTS.contains(&id),
                    }
                }
            }
        }
    }
}
