// src/controller.rs

use crate::dataset::DatasetStore;
use crate::domain::{Categorical, ConstraintSet, Listing, Tab};
use crate::pipeline::{city_options, FilteredView};
use crate::session::{SessionId, SessionRegistry};
use crate::views::{self, ViewPayload};
use std::sync::Arc;
use tracing::debug;

/// Recomputes the dashboard whenever a control changes.
///
/// Holds the shared read-only base table and the per-session cache of the last
/// filtered view.
pub struct Controller {
    store: Arc<DatasetStore>,
    sessions: SessionRegistry,
}

impl Controller {
    pub fn new(store: Arc<DatasetStore>, max_sessions: usize) -> Self {
        Self {
            store,
            sessions: SessionRegistry::new(max_sessions),
        }
    }

    pub fn store(&self) -> &DatasetStore {
        &self.store
    }

    /// State selection changed: which cities can be offered.
    pub fn cities(&self, states: &Categorical) -> Vec<String> {
        city_options(self.store.city_pairs(), states)
    }

    /// Any other control changed: filter, order, render the active tab and
    /// publish the new filtered view for this session.
    pub fn refresh(&self, session: &SessionId, constraints: ConstraintSet, tab: Tab) -> ViewPayload {
        let view = Arc::new(FilteredView::compute(&self.store, constraints));
        let payload = views::render(tab, &view.rows(&self.store));

        debug!(tab = %tab, rows = view.len(), "recomputed view");
        self.sessions.publish(session, view);
        payload
    }

    /// The session's cached view, computing it from default constraints if the
    /// session has not published one yet.
    pub fn current(&self, session: &SessionId) -> Arc<FilteredView> {
        if let Some(view) = self.sessions.current(session) {
            return view;
        }

        let defaults = ConstraintSet::unconstrained(self.store.bounds());
        let view = Arc::new(FilteredView::compute(&self.store, defaults));
        self.sessions.publish(session, Arc::clone(&view));
        view
    }

    pub fn rows(&self, view: &FilteredView) -> Vec<&Listing> {
        view.rows(&self.store)
    }
}
