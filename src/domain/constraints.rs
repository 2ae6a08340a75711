// src/domain/constraints.rs

use serde::Serialize;
use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Value the selection widgets use to mean "no restriction".
pub const ALL_SENTINEL: &str = "All";

/// A filter over a discrete-valued field (state, city or make).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub enum Categorical {
    #[default]
    Unconstrained,
    RestrictedTo(BTreeSet<String>),
}

impl Categorical {
    /// Builds a predicate from raw widget values.
    ///
    /// An empty selection, or one that contains the "All" sentinel, never
    /// restricts anything.
    pub fn from_selection<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = BTreeSet::new();
        for value in values {
            let value = value.into();
            if value == ALL_SENTINEL {
                return Categorical::Unconstrained;
            }
            if !value.is_empty() {
                set.insert(value);
            }
        }

        if set.is_empty() {
            Categorical::Unconstrained
        } else {
            Categorical::RestrictedTo(set)
        }
    }

    pub fn admits(&self, value: &str) -> bool {
        match self {
            Categorical::Unconstrained => true,
            Categorical::RestrictedTo(set) => set.contains(value),
        }
    }

    /// Whether `value` should render as selected in a widget. The sentinel is
    /// selected exactly when nothing is restricted.
    pub fn is_selected(&self, value: &str) -> bool {
        match self {
            Categorical::Unconstrained => value == ALL_SENTINEL,
            Categorical::RestrictedTo(set) => set.contains(value),
        }
    }
}

/// Inclusive `[min, max]` bound over a numeric field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Range<T> {
    pub min: T,
    pub max: T,
}

impl<T: PartialOrd + Copy> Range<T> {
    pub fn new(min: T, max: T) -> Self {
        Self { min, max }
    }

    /// `min > max` admits nothing; NaN never matches.
    pub fn contains(&self, value: T) -> bool {
        self.min <= value && value <= self.max
    }

    /// Widens the range so it covers `value`.
    pub fn include(&mut self, value: T) {
        if value < self.min {
            self.min = value;
        }
        if value > self.max {
            self.max = value;
        }
    }
}

/// Global numeric extents of the base table. They are the defaults for every
/// ranged control.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bounds {
    pub price: Range<f64>,
    pub odometer: Range<f64>,
    pub year: Range<i32>,
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            price: Range::new(0.0, 0.0),
            odometer: Range::new(0.0, 0.0),
            year: Range::new(0, 0),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    /// Orients an ascending comparison. Reversing the comparator (rather than
    /// the output) keeps equal keys in their incoming order.
    pub fn orient(self, ord: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Ascending => "ascending",
            SortDirection::Descending => "descending",
        }
    }
}

impl FromStr for SortDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ascending" => Ok(SortDirection::Ascending),
            "descending" => Ok(SortDirection::Descending),
            other => Err(format!("unknown sort direction '{other}'")),
        }
    }
}

/// Which presentation the dashboard is showing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Table,
    Map,
    Analysis,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Table, Tab::Map, Tab::Analysis];

    pub fn id(self) -> &'static str {
        match self {
            Tab::Table => "tab-table",
            Tab::Map => "tab-map",
            Tab::Analysis => "tab-analysis",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tab::Table => "Car Listings Table",
            Tab::Map => "Map of Car Listings",
            Tab::Analysis => "Price Analysis",
        }
    }
}

impl FromStr for Tab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tab-table" | "table" => Ok(Tab::Table),
            "tab-map" | "map" => Ok(Tab::Map),
            "tab-analysis" | "analysis" | "tab-median" => Ok(Tab::Analysis),
            other => Err(format!("unknown tab '{other}'")),
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Every active filter control value at one point in time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConstraintSet {
    pub states: Categorical,
    pub cities: Categorical,
    pub makes: Categorical,

    pub price: Range<f64>,
    pub odometer: Range<f64>,
    pub year: Range<i32>,

    pub price_order: SortDirection,
    pub time_order: SortDirection,
}

impl ConstraintSet {
    /// Nothing restricted, every range at the dataset extents, and the
    /// dashboard's initial ordering (cheapest first, newest first).
    pub fn unconstrained(bounds: &Bounds) -> Self {
        Self {
            states: Categorical::Unconstrained,
            cities: Categorical::Unconstrained,
            makes: Categorical::Unconstrained,
            price: bounds.price,
            odometer: bounds.odometer,
            year: bounds.year,
            price_order: SortDirection::Ascending,
            time_order: SortDirection::Descending,
        }
    }
}
