// src/pipeline/filter.rs

use crate::dataset::DatasetStore;
use crate::domain::{ConstraintSet, Listing};

/// Rows of the base table that satisfy every active predicate, in table order.
///
/// City is checked on its own; a selected city is not cross-checked against
/// the selected states.
pub fn filter<'a>(store: &'a DatasetStore, constraints: &ConstraintSet) -> Vec<&'a Listing> {
    store
        .listings()
        .iter()
        .filter(|listing| admits(constraints, listing))
        .collect()
}

pub fn admits(c: &ConstraintSet, listing: &Listing) -> bool {
    c.price.contains(listing.price)
        && c.odometer.contains(listing.odometer)
        && c.year.contains(listing.year)
        && c.states.admits(&listing.state)
        && c.cities.admits(&listing.location)
        && c.makes.admits(&listing.make)
}
