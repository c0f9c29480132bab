// The `query`, `param` and `fragment` filters

use tracing::debug;

use super::args::{FragmentArgs, MapArgs};
use super::output::FilterOutput;
use crate::config::FilterConfig;
use crate::domain::url::{assemble, split, ParamMap, UrlPieces};

/// Read or rewrite the query string of `url`
pub fn query(url: &str, args: MapArgs, config: &FilterConfig) -> FilterOutput {
    apply_map_args(url, args, config, query_map)
}

/// Read or rewrite the path parameters of `url`
pub fn param(url: &str, args: MapArgs, config: &FilterConfig) -> FilterOutput {
    apply_map_args(url, args, config, path_params_map)
}

/// Read or replace the fragment of `url`
pub fn fragment(url: &str, args: FragmentArgs, config: &FilterConfig) -> FilterOutput {
    if args == FragmentArgs::Unrecognized {
        debug!(url, "unrecognized fragment arguments, passing url through");
        return FilterOutput::Url(url.to_string());
    }

    let mut pieces = split(url, &config.param_sep);

    match args {
        FragmentArgs::Get => FilterOutput::Value(pieces.fragment),
        FragmentArgs::Set(fragment) => {
            pieces.fragment = Some(fragment);
            FilterOutput::Url(assemble(&pieces, &config.param_sep))
        }
        FragmentArgs::Unrecognized => FilterOutput::Url(url.to_string()),
    }
}

fn query_map(pieces: &mut UrlPieces) -> &mut Option<ParamMap> {
    &mut pieces.query
}

fn path_params_map(pieces: &mut UrlPieces) -> &mut Option<ParamMap> {
    &mut pieces.path_params
}

/// Shared dispatch for the two map-shaped filters; `target` picks the map
fn apply_map_args(
    url: &str,
    args: MapArgs,
    config: &FilterConfig,
    target: fn(&mut UrlPieces) -> &mut Option<ParamMap>,
) -> FilterOutput {
    if args == MapArgs::Unrecognized {
        debug!(url, "unrecognized filter arguments, passing url through");
        return FilterOutput::Url(url.to_string());
    }

    let mut pieces = split(url, &config.param_sep);
    let map = target(&mut pieces);

    match args {
        MapArgs::All => FilterOutput::Map(map.take()),
        MapArgs::Get(key) => {
            FilterOutput::Value(map.take().and_then(|m| m.get(&key).map(str::to_string)))
        }
        MapArgs::Set(key, value) => {
            map.get_or_insert_with(ParamMap::new).insert(key, value);
            FilterOutput::Url(assemble(&pieces, &config.param_sep))
        }
        MapArgs::Remove(key) => {
            if let Some(m) = map {
                m.remove(&key);
            }
            FilterOutput::Url(assemble(&pieces, &config.param_sep))
        }
        MapArgs::Merge(entries) => {
            map.get_or_insert_with(ParamMap::new).merge(entries);
            FilterOutput::Url(assemble(&pieces, &config.param_sep))
        }
        MapArgs::Unrecognized => FilterOutput::Url(url.to_string()),
    }
}
