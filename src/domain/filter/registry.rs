// Named filter trait and registry for template hosts

use serde_json::Value;
use std::collections::HashMap;

use super::args::{FragmentArgs, MapArgs};
use super::operations;
use super::output::FilterOutput;
use crate::config::FilterConfig;
use crate::error::Error;

/// A URL filter a template host can call by name
pub trait UrlFilter: Send + Sync {
    fn name(&self) -> &'static str;
    fn apply(
        &self,
        url: &str,
        a: Option<&Value>,
        b: Option<&Value>,
        config: &FilterConfig,
    ) -> FilterOutput;
}

/// `query` filter
pub struct QueryFilter;

impl UrlFilter for QueryFilter {
    fn name(&self) -> &'static str {
        "query"
    }

    fn apply(
        &self,
        url: &str,
        a: Option<&Value>,
        b: Option<&Value>,
        config: &FilterConfig,
    ) -> FilterOutput {
        operations::query(url, MapArgs::from_values(a, b), config)
    }
}

/// `param` filter
pub struct ParamFilter;

impl UrlFilter for ParamFilter {
    fn name(&self) -> &'static str {
        "param"
    }

    fn apply(
        &self,
        url: &str,
        a: Option<&Value>,
        b: Option<&Value>,
        config: &FilterConfig,
    ) -> FilterOutput {
        operations::param(url, MapArgs::from_values(a, b), config)
    }
}

/// `fragment` filter; takes a single argument, a second one is ignored
pub struct FragmentFilter;

impl UrlFilter for FragmentFilter {
    fn name(&self) -> &'static str {
        "fragment"
    }

    fn apply(
        &self,
        url: &str,
        a: Option<&Value>,
        _b: Option<&Value>,
        config: &FilterConfig,
    ) -> FilterOutput {
        operations::fragment(url, FragmentArgs::from_value(a), config)
    }
}

/// Registry for URL filters
pub struct FilterRegistry {
    filters: HashMap<&'static str, Box<dyn UrlFilter>>,
}

impl FilterRegistry {
    pub fn new() -> Self {
        let mut registry = Self {
            filters: HashMap::new(),
        };
        registry.register(Box::new(QueryFilter));
        registry.register(Box::new(ParamFilter));
        registry.register(Box::new(FragmentFilter));
        registry
    }

    pub fn register(&mut self, filter: Box<dyn UrlFilter>) {
        self.filters.insert(filter.name(), filter);
    }

    pub fn get(&self, name: &str) -> Option<&dyn UrlFilter> {
        self.filters.get(name).map(|b| b.as_ref())
    }

    /// Look up and apply a filter in one step
    pub fn apply(
        &self,
        name: &str,
        url: &str,
        a: Option<&Value>,
        b: Option<&Value>,
        config: &FilterConfig,
    ) -> Result<FilterOutput, Error> {
        let filter = self
            .get(name)
            .ok_or_else(|| Error::UnknownFilter(name.to_string()))?;
        Ok(filter.apply(url, a, b, config))
    }

    /// Registered filter names, sorted
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.filters.keys().copied().collect();
        names.sort_unstable();
        names
    }
}

impl Default for FilterRegistry {
    fn default() -> Self {
        Self::new()
    }
}
