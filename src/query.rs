// src/query.rs
use crate::domain::{Bounds, Categorical, ConstraintSet, Range, SortDirection, Tab};
use crate::errors::ServerError;
use std::collections::HashMap;
use std::str::FromStr;

/// Control values decoded from a request's query string. Repeated keys keep
/// every value, in order.
#[derive(Debug, Default)]
pub struct QueryParams {
    values: HashMap<String, Vec<String>>,
}

impl QueryParams {
    pub fn parse(query: Option<&str>) -> Self {
        let mut values: HashMap<String, Vec<String>> = HashMap::new();
        if let Some(q) = query {
            for (key, value) in url::form_urlencoded::parse(q.as_bytes()) {
                values
                    .entry(key.into_owned())
                    .or_default()
                    .push(value.into_owned());
            }
        }
        Self { values }
    }

    pub fn all(&self, key: &str) -> &[String] {
        self.values.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The last non-blank value for `key`.
    pub fn last(&self, key: &str) -> Option<&str> {
        self.all(key)
            .iter()
            .rev()
            .map(|v| v.trim())
            .find(|v| !v.is_empty())
    }

    pub fn categorical(&self, key: &str) -> Categorical {
        Categorical::from_selection(self.all(key).iter().map(|v| v.trim()))
    }

    fn parsed<T: FromStr>(&self, key: &str) -> Result<Option<T>, ServerError> {
        self.last(key)
            .map(|raw| {
                raw.parse()
                    .map_err(|_| ServerError::BadRequest(format!("invalid {key}: '{raw}'")))
            })
            .transpose()
    }

    fn range<T>(&self, prefix: &str, default: Range<T>) -> Result<Range<T>, ServerError>
    where
        T: FromStr + PartialOrd + Copy,
    {
        let min = self.parsed(&format!("{prefix}_min"))?.unwrap_or(default.min);
        let max = self.parsed(&format!("{prefix}_max"))?.unwrap_or(default.max);
        Ok(Range::new(min, max))
    }

    fn direction(&self, key: &str, default: SortDirection) -> Result<SortDirection, ServerError> {
        match self.last(key) {
            Some(raw) => raw.parse().map_err(ServerError::BadRequest),
            None => Ok(default),
        }
    }
}

/// Everything the dashboard needs to recompute one view.
#[derive(Debug, Clone, PartialEq)]
pub struct Controls {
    pub constraints: ConstraintSet,
    pub tab: Tab,
}

impl Controls {
    /// Missing ranges fall back to the dataset bounds; a missing tab or sort
    /// direction falls back to the dashboard's initial state.
    pub fn from_params(params: &QueryParams, bounds: &Bounds) -> Result<Self, ServerError> {
        let defaults = ConstraintSet::unconstrained(bounds);

        let constraints = ConstraintSet {
            states: params.categorical("state"),
            cities: params.categorical("city"),
            makes: params.categorical("make"),
            price: params.range("price", defaults.price)?,
            odometer: params.range("odometer", defaults.odometer)?,
            year: params.range("year", defaults.year)?,
            price_order: params.direction("sort", defaults.price_order)?,
            time_order: params.direction("time", defaults.time_order)?,
        };

        let tab = match params.last("tab") {
            Some(raw) => raw.parse().map_err(ServerError::BadRequest)?,
            None => Tab::default(),
        };

        Ok(Self { constraints, tab })
    }
}
