// src/dataset/store.rs

use crate::domain::{Bounds, Listing, Range};
use std::collections::HashSet;

/// A distinct (location, state) combination seen in the base table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CityPair {
    pub location: String,
    pub state: String,
}

/// The cleaned base table plus the lookup tables the controls are built from.
///
/// Built once at startup and never mutated afterwards. Every option table keeps
/// first-encountered order.
#[derive(Debug)]
pub struct DatasetStore {
    listings: Vec<Listing>,
    bounds: Bounds,
    states: Vec<String>,
    makes: Vec<String>,
    city_pairs: Vec<CityPair>,
}

impl DatasetStore {
    pub fn new(listings: Vec<Listing>) -> Self {
        let bounds = compute_bounds(&listings);
        let states = distinct(listings.iter().map(|l| l.state.as_str()));
        let makes = distinct(listings.iter().map(|l| l.make.as_str()));

        let mut seen = HashSet::new();
        let city_pairs = listings
            .iter()
            .filter(|l| seen.insert((l.location.as_str(), l.state.as_str())))
            .map(|l| CityPair {
                location: l.location.clone(),
                state: l.state.clone(),
            })
            .collect();

        Self {
            listings,
            bounds,
            states,
            makes,
            city_pairs,
        }
    }

    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    pub fn get(&self, id: usize) -> Option<&Listing> {
        self.listings.get(id)
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    pub fn states(&self) -> &[String] {
        &self.states
    }

    pub fn makes(&self) -> &[String] {
        &self.makes
    }

    pub fn city_pairs(&self) -> &[CityPair] {
        &self.city_pairs
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    values
        .filter(|v| seen.insert(*v))
        .map(str::to_string)
        .collect()
}

fn compute_bounds(listings: &[Listing]) -> Bounds {
    let Some(first) = listings.first() else {
        return Bounds::default();
    };

    let mut bounds = Bounds {
        price: Range::new(first.price, first.price),
        odometer: Range::new(first.odometer, first.odometer),
        year: Range::new(first.year, first.year),
    };

    for listing in &listings[1..] {
        bounds.price.include(listing.price);
        bounds.odometer.include(listing.odometer);
        bounds.year.include(listing.year);
    }

    bounds
}
