// src/pipeline/cities.rs

use crate::dataset::CityPair;
use crate::domain::Categorical;
use std::collections::HashSet;

/// Cities offered for a state selection: the distinct locations whose
/// (location, state) pair falls in the selected states.
pub fn city_options(pairs: &[CityPair], states: &Categorical) -> Vec<String> {
    let mut seen = HashSet::new();
    pairs
        .iter()
        .filter(|pair| states.admits(&pair.state))
        .filter(|pair| seen.insert(pair.location.as_str()))
        .map(|pair| pair.location.clone())
        .collect()
}
