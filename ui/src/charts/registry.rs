//! At-most-once chart activation.

use std::collections::BTreeSet;

use tracing::{debug, info};

use super::{
    catalog,
    host::{Activation, ChartHost},
    id::ChartId,
};

/// Builds one chart into a host.
pub type Initializer = fn(&mut dyn ChartHost) -> Activation;

/// Result of a single dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    Activated,
    AlreadyActive,
    /// Initializer ran but found no container; the chart stays eligible.
    MissingContainer,
    /// The name does not belong to any chart.
    Unknown(String),
}

/// Owns the activation set and the identifier → initializer table.
///
/// The set only grows: an identifier is recorded once its initializer has
/// mounted a chart, and every later dispatch for it is a no-op.
#[derive(Debug, Clone)]
pub struct ActivationRegistry {
    lookup: fn(ChartId) -> Initializer,
    activated: BTreeSet<ChartId>,
}

impl Default for ActivationRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ActivationRegistry {
    /// Registry backed by the report's chart catalog.
    pub fn new() -> Self {
        Self::with_lookup(catalog::initializer)
    }

    /// Registry with a custom table, for pages that host other charts.
    pub fn with_lookup(lookup: fn(ChartId) -> Initializer) -> Self {
        Self {
            lookup,
            activated: BTreeSet::new(),
        }
    }

    pub fn is_active(&self, id: ChartId) -> bool {
        self.activated.contains(&id)
    }

    pub fn activated(&self) -> &BTreeSet<ChartId> {
        &self.activated
    }

    pub fn dispatch(&mut self, id: ChartId, host: &mut dyn ChartHost) -> Dispatch {
        if self.activated.contains(&id) {
            debug!(chart = %id, "already active");
            return Dispatch::AlreadyActive;
        }

        match (self.lookup)(id)(host) {
            Activation::Mounted => {
                self.activated.insert(id);
                info!(chart = %id, "chart activated");
                Dispatch::Activated
            }
            Activation::MissingContainer => Dispatch::MissingContainer,
        }
    }

    /// Dispatch by DOM name, as delivered by the visibility observer.
    pub fn dispatch_name(&mut self, name: &str, host: &mut dyn ChartHost) -> Dispatch {
        match name.parse::<ChartId>() {
            Ok(id) => self.dispatch(id, host),
            Err(err) => {
                info!(%err, "ignoring activation request");
                Dispatch::Unknown(name.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::config::ChartConfig;
    use std::cell::RefCell;
    use std::collections::BTreeMap;

    /// Counts container lookups, one per initializer run.
    #[derive(Default)]
    struct RecordingHost {
        present: BTreeSet<ChartId>,
        lookups: RefCell<BTreeMap<ChartId, usize>>,
        mounts: BTreeMap<ChartId, ChartConfig>,
    }

    impl RecordingHost {
        fn with(ids: &[ChartId]) -> Self {
            Self {
                present: ids.iter().copied().collect(),
                ..Self::default()
            }
        }

        fn runs(&self, id: ChartId) -> usize {
            self.lookups.borrow().get(&id).copied().unwrap_or(0)
        }
    }

    impl ChartHost for RecordingHost {
        fn has_container(&self, id: ChartId) -> bool {
            *self.lookups.borrow_mut().entry(id).or_default() += 1;
            self.present.contains(&id)
        }

        fn mount(&mut self, id: ChartId, config: ChartConfig) {
            self.mounts.insert(id, config);
        }
    }

    #[test]
    fn each_chart_initializes_once() {
        let mut host = RecordingHost::with(&ChartId::ALL);
        let mut registry = ActivationRegistry::new();

        for id in ChartId::ALL {
            assert_eq!(registry.dispatch(id, &mut host), Dispatch::Activated);
            assert_eq!(registry.dispatch(id, &mut host), Dispatch::AlreadyActive);
            assert_eq!(host.runs(id), 1, "{id} initialized more than once");
        }
        assert_eq!(registry.activated().len(), ChartId::ALL.len());
    }

    #[test]
    fn missing_container_is_not_recorded() {
        let mut host = RecordingHost::default();
        let mut registry = ActivationRegistry::new();

        for id in ChartId::ALL {
            assert_eq!(registry.dispatch(id, &mut host), Dispatch::MissingContainer);
            assert!(!registry.is_active(id));
        }
        assert!(host.mounts.is_empty());
    }

    #[test]
    fn chart_stays_eligible_after_missing_container() {
        let mut registry = ActivationRegistry::new();

        let mut empty = RecordingHost::default();
        assert_eq!(
            registry.dispatch(ChartId::Gender, &mut empty),
            Dispatch::MissingContainer
        );

        let mut host = RecordingHost::with(&[ChartId::Gender]);
        assert_eq!(registry.dispatch(ChartId::Gender, &mut host), Dispatch::Activated);
        assert!(registry.is_active(ChartId::Gender));
    }

    #[test]
    fn unknown_name_leaves_set_unchanged() {
        let mut host = RecordingHost::with(&ChartId::ALL);
        let mut registry = ActivationRegistry::new();
        registry.dispatch(ChartId::Age, &mut host);

        let before = registry.activated().clone();
        assert_eq!(
            registry.dispatch_name("unknownChart", &mut host),
            Dispatch::Unknown("unknownChart".into())
        );
        assert_eq!(registry.activated(), &before);
    }

    #[test]
    fn dispatch_by_name() {
        let mut host = RecordingHost::with(&[ChartId::Gender]);
        let mut registry = ActivationRegistry::new();
        assert_eq!(
            registry.dispatch_name("genderChart", &mut host),
            Dispatch::Activated
        );
        assert!(host.mounts.contains_key(&ChartId::Gender));
    }

    #[test]
    fn custom_lookup_is_used() {
        fn noop(_: &mut dyn ChartHost) -> Activation {
            Activation::Mounted
        }
        fn table(_: ChartId) -> Initializer {
            noop
        }

        let mut host = RecordingHost::default();
        let mut registry = ActivationRegistry::with_lookup(table);
        assert_eq!(registry.dispatch(ChartId::Kmo, &mut host), Dispatch::Activated);
        assert!(host.mounts.is_empty());
    }
}
