// URL splitting: generic components, query decoding and path parameter extraction

use tracing::{debug, trace};
use url::form_urlencoded;

use super::param_map::ParamMap;
use super::pieces::UrlPieces;
use super::sanitize::{decode_param_key, decode_param_value};

/// Split a complete or partial URL into its pieces.
///
/// Never fails: a URL whose authority cannot be understood (bad port, empty host
/// with credentials) comes back as `UrlPieces::default()`.
pub fn split(url: &str, delimiter: &str) -> UrlPieces {
    let Some((mut pieces, raw_query)) = split_components(url) else {
        debug!(url, "unparseable url, treating every piece as absent");
        return UrlPieces::default();
    };

    if let Some(raw_query) = raw_query {
        pieces.query = Some(decode_query(raw_query));
    }

    if let Some((path, params)) = extract_path_params(&pieces.path, delimiter) {
        pieces.path = path;
        pieces.path_params = Some(params);
    }

    debug!(url, ?pieces, "split url");
    pieces
}

/// Decode an `application/x-www-form-urlencoded` string; the last duplicate wins
pub(crate) fn decode_query(raw: &str) -> ParamMap {
    form_urlencoded::parse(raw.as_bytes())
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect()
}

/// Shave path parameters (`key<delimiter>value` segments) off a path.
///
/// Returns `None` when the path carries no parameters, in which case the path
/// must be used exactly as it is.
pub(crate) fn extract_path_params(path: &str, delimiter: &str) -> Option<(String, ParamMap)> {
    if delimiter.is_empty() || !path.contains(delimiter) {
        return None;
    }

    let mut params = ParamMap::new();
    let mut kept = Vec::new();

    for segment in path.split('/') {
        if segment.contains(delimiter) {
            let parts: Vec<&str> = segment.split(delimiter).collect();
            if let [key, value] = parts.as_slice() {
                trace!(segment, "path parameter");
                params.insert(decode_param_key(key), decode_param_value(value));
                continue;
            }
            trace!(segment, "delimiter present but not a key/value pair, keeping in path");
        }
        kept.push(segment);
    }

    if params.is_empty() {
        return None;
    }

    let joined = kept.join("/");
    Some((format!("/{}", joined.trim_start_matches('/')), params))
}

/// Split into generic components, leaving the query string undecoded
fn split_components(url: &str) -> Option<(UrlPieces, Option<&str>)> {
    let mut pieces = UrlPieces::default();

    let (rest, fragment) = match url.split_once('#') {
        Some((rest, fragment)) => (rest, Some(fragment)),
        None => (url, None),
    };
    pieces.fragment = fragment.map(str::to_string);

    let (rest, query) = match rest.split_once('?') {
        Some((rest, query)) => (rest, Some(query)),
        None => (rest, None),
    };

    let rest = match split_scheme(rest) {
        Some((scheme, rest)) => {
            pieces.scheme = Some(scheme.to_string());
            rest
        }
        None => rest,
    };

    let path = match rest.strip_prefix("//") {
        Some(after) => {
            let end = after.find('/').unwrap_or(after.len());
            split_authority(&after[..end], &mut pieces)?;
            &after[end..]
        }
        None => rest,
    };
    pieces.path = path.to_string();

    Some((pieces, query))
}

/// Recognize `scheme:` only when followed by `//`, so `key:value` paths stay paths
fn split_scheme(input: &str) -> Option<(&str, &str)> {
    let (scheme, rest) = input.split_once(':')?;
    let mut chars = scheme.chars();
    let starts_alpha = chars.next().is_some_and(|c| c.is_ascii_alphabetic());
    let valid = starts_alpha
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));

    if valid && rest.starts_with("//") {
        Some((scheme, rest))
    } else {
        None
    }
}

fn split_authority(authority: &str, pieces: &mut UrlPieces) -> Option<()> {
    // file:///path style: no authority at all
    if authority.is_empty() {
        return Some(());
    }

    let host_port = match authority.rsplit_once('@') {
        Some((userinfo, host_port)) => {
            match userinfo.split_once(':') {
                Some((user, password)) => {
                    pieces.user = Some(user.to_string());
                    pieces.password = Some(password.to_string());
                }
                None => pieces.user = Some(userinfo.to_string()),
            }
            host_port
        }
        None => authority,
    };

    let (host, port) = split_host_port(host_port)?;
    if host.is_empty() {
        return None;
    }

    pieces.host = Some(host.to_string());
    pieces.port = port;
    Some(())
}

fn split_host_port(host_port: &str) -> Option<(&str, Option<u16>)> {
    let (host, port) = if host_port.starts_with('[') {
        // IPv6 literal, keep the brackets with the host
        let close = host_port.find(']')?;
        let (host, rest) = host_port.split_at(close + 1);
        match rest {
            "" => (host, None),
            _ => (host, Some(rest.strip_prefix(':')?)),
        }
    } else {
        match host_port.rsplit_once(':') {
            Some((host, port)) => (host, Some(port)),
            None => (host_port, None),
        }
    };

    match port {
        None | Some("") => Some((host, None)),
        Some(port) if port.bytes().all(|b| b.is_ascii_digit()) => {
            Some((host, Some(port.parse().ok()?)))
        }
        Some(_) => None,
    }
}
