// Filter results

use serde_json::Value;

use crate::domain::url::ParamMap;

/// What a filter call produced: a rewritten URL, a single value, or a whole map
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterOutput {
    Url(String),
    Value(Option<String>),
    Map(Option<ParamMap>),
}

impl FilterOutput {
    /// Convert to a dynamic value for a template engine; absent becomes `null`
    pub fn into_json(self) -> Value {
        match self {
            FilterOutput::Url(url) => Value::String(url),
            FilterOutput::Value(value) => value.map(Value::String).unwrap_or(Value::Null),
            FilterOutput::Map(map) => map
                .and_then(|m| serde_json::to_value(m).ok())
                .unwrap_or(Value::Null),
        }
    }
}
