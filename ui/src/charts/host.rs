//! The surface charts are mounted into.

use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use super::{config::ChartConfig, id::ChartId};
use crate::core::theme::Theme;

/// What an initializer did with its container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    Mounted,
    /// The page has no container for this chart; nothing was built.
    MissingContainer,
}

/// Where initializers look up containers and submit configurations.
pub trait ChartHost {
    fn has_container(&self, id: ChartId) -> bool;
    fn mount(&mut self, id: ChartId, config: ChartConfig);
}

/// Runs `build` and mounts the result only when `id` has a container.
pub fn mount_with(
    host: &mut dyn ChartHost,
    id: ChartId,
    build: impl FnOnce() -> ChartConfig,
) -> Activation {
    if !host.has_container(id) {
        debug!(chart = %id, "no container on this page");
        return Activation::MissingContainer;
    }
    host.mount(id, build());
    Activation::Mounted
}

/// Page-level chart state: which containers exist, what has been mounted, and
/// the theme applied to mounted charts.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartBoard {
    containers: BTreeSet<ChartId>,
    mounted: BTreeMap<ChartId, ChartConfig>,
    theme: Theme,
}

impl ChartBoard {
    pub fn new(containers: impl IntoIterator<Item = ChartId>, theme: Theme) -> Self {
        Self {
            containers: containers.into_iter().collect(),
            mounted: BTreeMap::new(),
            theme,
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn chart(&self, id: ChartId) -> Option<&ChartConfig> {
        self.mounted.get(&id)
    }

    pub fn mounted(&self) -> impl Iterator<Item = (ChartId, &ChartConfig)> {
        self.mounted.iter().map(|(id, config)| (*id, config))
    }

    /// Recolors every mounted chart in place. Initializers are not re-run.
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        for config in self.mounted.values_mut() {
            config.apply_theme(theme);
        }
    }
}

impl ChartHost for ChartBoard {
    fn has_container(&self, id: ChartId) -> bool {
        self.containers.contains(&id)
    }

    fn mount(&mut self, id: ChartId, mut config: ChartConfig) {
        config.apply_theme(self.theme);
        self.mounted.insert(id, config);
    }
}
