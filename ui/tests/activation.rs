//! Scroll-driven activation, end to end: visibility samples flow through the
//! observer into the registry, which mounts charts on the page board.
use ui::charts::{
    render::{scene, svg},
    visibility::{Sample, VisibilityObserver},
    ActivationRegistry, ChartBoard, ChartId, Dispatch,
};
use ui::core::{
    storage::MemoryPreferences,
    theme::Theme,
};
use ui::views::sections::page_containers;

fn sample(id: &str, ratio: f64) -> Sample {
    Sample {
        id: id.to_string(),
        ratio,
    }
}

struct Page {
    observer: VisibilityObserver,
    registry: ActivationRegistry,
    board: ChartBoard,
}

impl Page {
    fn new(theme: Theme) -> Self {
        Self {
            observer: VisibilityObserver::default(),
            registry: ActivationRegistry::new(),
            board: ChartBoard::new(page_containers(), theme),
        }
    }

    fn scroll(&mut self, id: &str, ratio: f64) -> Option<Dispatch> {
        let chart = self.observer.observe(&sample(id, ratio))?;
        Some(self.registry.dispatch(chart, &mut self.board))
    }
}

#[test]
fn scrolling_to_gender_mounts_it_with_tooltips() {
    let mut page = Page::new(Theme::Light);

    assert_eq!(page.scroll("genderChart", 0.05), None);
    assert_eq!(page.scroll("genderChart", 0.35), Some(Dispatch::Activated));
    assert!(page.registry.is_active(ChartId::Gender));

    let config = page.board.chart(ChartId::Gender).expect("gender mounted");
    let markup = svg::markup(&scene(config));
    assert!(markup.contains("<title>Female: 96 respondents (62.3%)</title>"));
    assert!(markup.contains("<title>Male: 58 respondents (37.7%)</title>"));
}

#[test]
fn scrolling_back_and_forth_initializes_once() {
    let mut page = Page::new(Theme::Light);

    assert_eq!(page.scroll("kmoChart", 0.5), Some(Dispatch::Activated));
    assert_eq!(page.scroll("kmoChart", 0.0), None);
    assert_eq!(page.scroll("kmoChart", 0.9), Some(Dispatch::AlreadyActive));
    assert_eq!(page.registry.activated().len(), 1);
}

#[test]
fn unknown_names_never_reach_the_registry() {
    let mut page = Page::new(Theme::Light);
    page.scroll("ageChart", 1.0);

    assert_eq!(page.scroll("unknownChart", 1.0), None);
    assert_eq!(
        page.registry.dispatch_name("unknownChart", &mut page.board),
        Dispatch::Unknown("unknownChart".into())
    );
    assert_eq!(
        page.registry.activated().iter().copied().collect::<Vec<_>>(),
        vec![ChartId::Age]
    );
}

#[test]
fn every_container_activates_when_scrolled_through() {
    let mut page = Page::new(Theme::Dark);
    for id in ChartId::ALL {
        assert_eq!(
            page.scroll(id.dom_name(), 1.0),
            Some(Dispatch::Activated),
            "{id}"
        );
    }
    assert_eq!(page.board.mounted().count(), ChartId::ALL.len());
}

#[test]
fn theme_toggle_recolors_without_reactivating() {
    let mut prefs = MemoryPreferences::default();
    let key = "darkMode";
    let mut page = Page::new(Theme::load(&prefs, key));
    page.scroll("alphaChart", 1.0);
    page.scroll("screePlotChart", 1.0);
    let before = page.registry.activated().clone();

    let next = page.board.theme().toggle();
    page.board.set_theme(next);
    next.save(&mut prefs, key);

    assert_eq!(page.registry.activated(), &before);
    assert_eq!(Theme::load(&prefs, key), Theme::Dark);
    let dark_text = Theme::Dark.chrome().text;
    for (_, config) in page.board.mounted() {
        assert_eq!(config.legend.label_color, dark_text);
        if let Some(y) = &config.scales.y {
            assert_eq!(y.tick_color, dark_text);
        }
    }

    // Charts mounted after the switch pick up the new theme too.
    page.scroll("kmoChart", 1.0);
    let kmo = page.board.chart(ChartId::Kmo).expect("kmo mounted");
    assert_eq!(kmo.legend.label_color, dark_text);
}
