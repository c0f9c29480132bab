// Common test utilities shared across test files

use serde_json::Value;
use urlparamfilter::{FilterConfig, FilterOutput, FilterRegistry};

/// Apply a filter by name with the default `:` delimiter
#[allow(dead_code)]
pub fn apply(name: &str, url: &str, a: Option<Value>, b: Option<Value>) -> FilterOutput {
    apply_with(name, url, a, b, &FilterConfig::default())
}

#[allow(dead_code)]
pub fn apply_with(
    name: &str,
    url: &str,
    a: Option<Value>,
    b: Option<Value>,
    config: &FilterConfig,
) -> FilterOutput {
    FilterRegistry::new()
        .apply(name, url, a.as_ref(), b.as_ref(), config)
        .expect("filter should be registered")
}

/// Apply a filter that is expected to hand back a URL
#[allow(dead_code)]
pub fn apply_url(name: &str, url: &str, a: Option<Value>, b: Option<Value>) -> String {
    match apply(name, url, a, b) {
        FilterOutput::Url(url) => url,
        other => panic!("Expected a url, got {:?}", other),
    }
}
