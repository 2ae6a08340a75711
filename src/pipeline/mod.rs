pub mod cities;
pub mod filter;
pub mod sort;

pub use cities::city_options;
pub use filter::filter;
pub use sort::sort;

use crate::dataset::DatasetStore;
use crate::domain::{ConstraintSet, Listing};

/// Filter then order: the subset every view renders from.
pub fn run<'a>(store: &'a DatasetStore, constraints: &ConstraintSet) -> Vec<&'a Listing> {
    sort(
        filter(store, constraints),
        constraints.price_order,
        constraints.time_order,
    )
}

/// The ordered subset produced for one constraint set, by row id.
///
/// Held behind an `Arc` in the session cache so every reader of one cycle sees
/// the same snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct FilteredView {
    pub constraints: ConstraintSet,
    pub ids: Vec<usize>,
}

impl FilteredView {
    pub fn compute(store: &DatasetStore, constraints: ConstraintSet) -> Self {
        let ids = run(store, &constraints).iter().map(|l| l.id).collect();
        Self { constraints, ids }
    }

    /// Resolves the row ids back into the store.
    pub fn rows<'a>(&self, store: &'a DatasetStore) -> Vec<&'a Listing> {
        self.ids.iter().filter_map(|&id| store.get(id)).collect()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }
}
