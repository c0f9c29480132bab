// Filter argument shapes

use serde_json::Value;

use crate::domain::url::ParamMap;

/// Argument shapes accepted by the `query` and `param` filters
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapArgs {
    /// No arguments: read the whole map
    All,
    /// `(key)`: read one value
    Get(String),
    /// `(key, value)`: set one value
    Set(String, String),
    /// `(key, false)`: remove one key
    Remove(String),
    /// `(map)`: merge, incoming entries win
    Merge(ParamMap),
    /// Any other combination; the filter hands back its input untouched
    Unrecognized,
}

impl MapArgs {
    /// Classify dynamically typed arguments, as a template engine passes them.
    ///
    /// `null` counts as absent. An object only merges when every value is a
    /// string or a number.
    pub fn from_values(a: Option<&Value>, b: Option<&Value>) -> Self {
        match (present(a), present(b)) {
            (None, None) => MapArgs::All,
            (Some(Value::String(key)), None) => MapArgs::Get(key.clone()),
            (Some(Value::String(key)), Some(Value::String(value))) => {
                MapArgs::Set(key.clone(), value.clone())
            }
            (Some(Value::String(key)), Some(Value::Bool(false))) => MapArgs::Remove(key.clone()),
            (Some(Value::Object(entries)), None) => object_to_params(entries)
                .map(MapArgs::Merge)
                .unwrap_or(MapArgs::Unrecognized),
            _ => MapArgs::Unrecognized,
        }
    }
}

/// Argument shapes accepted by the `fragment` filter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FragmentArgs {
    Get,
    Set(String),
    Unrecognized,
}

impl FragmentArgs {
    pub fn from_value(a: Option<&Value>) -> Self {
        match present(a) {
            None => FragmentArgs::Get,
            Some(Value::String(fragment)) => FragmentArgs::Set(fragment.clone()),
            Some(_) => FragmentArgs::Unrecognized,
        }
    }
}

fn present(value: Option<&Value>) -> Option<&Value> {
    value.filter(|v| !v.is_null())
}

fn object_to_params(entries: &serde_json::Map<String, Value>) -> Option<ParamMap> {
    entries
        .iter()
        .map(|(key, value)| match value {
            Value::String(s) => Some((key.clone(), s.clone())),
            Value::Number(n) => Some((key.clone(), n.to_string())),
            _ => None,
        })
        .collect()
}
