//! Viewport tracking for chart containers.
//!
//! The browser side is a small `IntersectionObserver` script evaluated through
//! `document::eval`; it streams one [`Sample`] per intersection change. The
//! Rust side turns those samples into entry signals with
//! [`VisibilityObserver::observe`].

use std::collections::BTreeMap;
use std::fmt::Debug;

use futures_util::{pin_mut, Stream, StreamExt};
use serde::Deserialize;
use tracing::{info, warn};

use super::id::ChartId;
use crate::core::config::ReportConfig;

/// Attribute carrying the DOM name on every chart container.
pub const CONTAINER_ATTR: &str = "data-chart-id";

/// One intersection report from the page.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Sample {
    pub id: String,
    /// Visible fraction of the container, `0.0..=1.0`.
    pub ratio: f64,
}

/// Signals a chart each time its container enters the viewport.
///
/// An entry is a transition from below the threshold to at-or-above it. The
/// observer keeps watching after an entry, so scrolling away and back signals
/// again; repeated signals are absorbed by the activation registry.
#[derive(Debug, Clone)]
pub struct VisibilityObserver {
    threshold: f64,
    visible: BTreeMap<ChartId, bool>,
}

impl VisibilityObserver {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            visible: BTreeMap::new(),
        }
    }

    pub fn observe(&mut self, sample: &Sample) -> Option<ChartId> {
        let id = match sample.id.parse::<ChartId>() {
            Ok(id) => id,
            Err(err) => {
                info!(%err, "ignoring visibility sample");
                return None;
            }
        };

        let now = sample.ratio >= self.threshold;
        let before = self.visible.insert(id, now).unwrap_or(false);
        (now && !before).then_some(id)
    }
}

impl Default for VisibilityObserver {
    fn default() -> Self {
        Self::new(ReportConfig::default().visibility_threshold)
    }
}

/// How [`forward_samples`] finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObserverEnd {
    /// The sample stream ended.
    Closed,
    /// The page reported an error; every fallback chart was activated.
    FellBack,
}

/// Feeds page samples through `observer`, calling `activate` on every entry.
///
/// The first error means the page cannot report visibility, so each chart in
/// `fallback` is activated once and forwarding stops.
pub async fn forward_samples<S, E>(
    samples: S,
    observer: &mut VisibilityObserver,
    fallback: impl IntoIterator<Item = ChartId>,
    mut activate: impl FnMut(ChartId),
) -> ObserverEnd
where
    S: Stream<Item = Result<Sample, E>>,
    E: Debug,
{
    pin_mut!(samples);
    while let Some(next) = samples.next().await {
        match next {
            Ok(sample) => {
                if let Some(id) = observer.observe(&sample) {
                    activate(id);
                }
            }
            Err(err) => {
                warn!(?err, "visibility observer unavailable; activating every chart");
                for id in fallback {
                    activate(id);
                }
                return ObserverEnd::FellBack;
            }
        }
    }
    ObserverEnd::Closed
}

/// Message that makes a running [`observer_script`] disconnect.
pub const STOP_MESSAGE: &str = "stop";

/// Script that observes every container on the page and sends a [`Sample`]
/// for each intersection change. It keeps running until any message (see
/// [`STOP_MESSAGE`]) is sent back, then disconnects.
pub fn observer_script(config: &ReportConfig) -> String {
    let threshold = config.visibility_threshold;
    let margin = &config.root_margin;
    format!(
        r#"
const report = (entry) => dioxus.send({{
    id: entry.target.getAttribute("{CONTAINER_ATTR}"),
    ratio: entry.isIntersecting ? entry.intersectionRatio : 0,
}});
const observer = new IntersectionObserver(
    (entries) => entries.forEach(report),
    {{ threshold: [0, {threshold}], rootMargin: "{margin}" }},
);
document.querySelectorAll("[{CONTAINER_ATTR}]").forEach((el) => observer.observe(el));
await dioxus.recv();
observer.disconnect();
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(id: &str, ratio: f64) -> Sample {
        Sample {
            id: id.into(),
            ratio,
        }
    }

    #[test]
    fn signals_on_entry_only() {
        let mut observer = VisibilityObserver::new(0.2);
        assert_eq!(observer.observe(&sample("ageChart", 0.1)), None);
        assert_eq!(
            observer.observe(&sample("ageChart", 0.2)),
            Some(ChartId::Age)
        );
        assert_eq!(observer.observe(&sample("ageChart", 0.9)), None);
    }

    #[test]
    fn re_entry_signals_again() {
        let mut observer = VisibilityObserver::new(0.2);
        assert!(observer.observe(&sample("kmoChart", 0.5)).is_some());
        assert!(observer.observe(&sample("kmoChart", 0.0)).is_none());
        assert_eq!(
            observer.observe(&sample("kmoChart", 0.4)),
            Some(ChartId::Kmo)
        );
    }

    #[test]
    fn unknown_containers_are_ignored() {
        let mut observer = VisibilityObserver::default();
        assert_eq!(observer.observe(&sample("unknownChart", 1.0)), None);
        assert_eq!(observer.observe(&sample("", 1.0)), None);
    }

    #[test]
    fn samples_decode_from_script_payload() {
        let parsed: Sample =
            serde_json::from_str(r#"{"id":"genderChart","ratio":0.35}"#).unwrap();
        assert_eq!(parsed, sample("genderChart", 0.35));
    }

    #[test]
    fn script_uses_configured_threshold_and_margin() {
        let config = ReportConfig {
            visibility_threshold: 0.3,
            root_margin: "10px".into(),
            ..ReportConfig::default()
        };
        let script = observer_script(&config);
        assert!(script.contains("threshold: [0, 0.3]"));
        assert!(script.contains(r#"rootMargin: "10px""#));
        assert!(script.contains("[data-chart-id]"));
    }

    #[test]
    fn script_disconnects_when_told_to_stop() {
        let script = observer_script(&ReportConfig::default());
        let recv = script.find("await dioxus.recv()").expect("waits for a message");
        let disconnect = script.find("observer.disconnect()").expect("disconnects");
        assert!(recv < disconnect);
    }

    fn run<F: std::future::Future>(future: F) -> F::Output {
        tokio::runtime::Builder::new_current_thread()
            .build()
            .unwrap()
            .block_on(future)
    }

    fn forward(
        samples: Vec<Result<Sample, &'static str>>,
        fallback: &[ChartId],
    ) -> (ObserverEnd, Vec<ChartId>) {
        let mut observer = VisibilityObserver::new(0.2);
        let mut activated = Vec::new();
        let end = run(forward_samples(
            futures_util::stream::iter(samples),
            &mut observer,
            fallback.iter().copied(),
            |id| activated.push(id),
        ));
        (end, activated)
    }

    #[test]
    fn entries_are_forwarded() {
        let (end, activated) = forward(
            vec![
                Ok(sample("genderChart", 0.1)),
                Ok(sample("genderChart", 0.5)),
                Ok(sample("unknownChart", 1.0)),
                Ok(sample("alphaChart", 0.3)),
            ],
            &ChartId::ALL,
        );
        assert_eq!(end, ObserverEnd::Closed);
        assert_eq!(activated, vec![ChartId::Gender, ChartId::Alpha]);
    }

    #[test]
    fn error_activates_every_fallback_chart_once() {
        let (end, activated) = forward(vec![Err("eval unavailable")], &ChartId::ALL);
        assert_eq!(end, ObserverEnd::FellBack);
        assert_eq!(activated, ChartId::ALL.to_vec());
    }

    #[test]
    fn forwarding_stops_after_fallback() {
        let (end, activated) = forward(
            vec![
                Ok(sample("kmoChart", 0.9)),
                Err("channel closed"),
                Ok(sample("ageChart", 0.9)),
            ],
            &[ChartId::Gender, ChartId::Age],
        );
        assert_eq!(end, ObserverEnd::FellBack);
        assert_eq!(activated, vec![ChartId::Kmo, ChartId::Gender, ChartId::Age]);
    }
}
