// URL assembly: the inverse of the splitter

use tracing::debug;
use url::form_urlencoded;

use super::param_map::ParamMap;
use super::pieces::UrlPieces;

/// Assemble a URL string from its pieces. Only pieces that are present are emitted.
pub fn assemble(pieces: &UrlPieces, delimiter: &str) -> String {
    let mut url = String::new();

    if let Some(scheme) = &pieces.scheme {
        url.push_str(scheme);
        url.push(':');
    }
    if pieces.scheme.is_some() || pieces.has_authority() {
        url.push_str("//");
    }

    if let Some(user) = &pieces.user {
        url.push_str(user);
    }
    if let Some(password) = &pieces.password {
        url.push(':');
        url.push_str(password);
    }
    if pieces.user.is_some() || pieces.password.is_some() {
        url.push('@');
    }
    if let Some(host) = &pieces.host {
        url.push_str(host);
    }
    if let Some(port) = pieces.port {
        url.push(':');
        url.push_str(&port.to_string());
    }

    url.push_str(&pieces.path);

    if let Some(params) = pieces.path_params.as_ref().filter(|p| !p.is_empty()) {
        // a bare "/" path already separates; "//" would read back as an authority
        if pieces.path != "/" {
            url.push('/');
        }
        url.push_str(&encode_path_params(params, delimiter));
    }

    if let Some(query) = &pieces.query {
        url.push('?');
        url.push_str(&encode_query(query));
    }

    if let Some(fragment) = &pieces.fragment {
        url.push('#');
        url.push_str(fragment);
    }

    debug!(%url, "assembled url");
    url
}

/// `key<delimiter>value` segments joined by `/`, both sides percent-encoded
pub(crate) fn encode_path_params(params: &ParamMap, delimiter: &str) -> String {
    params
        .iter()
        .map(|(key, value)| {
            format!(
                "{}{}{}",
                encode_param_component(key, delimiter),
                delimiter,
                encode_param_component(value, delimiter)
            )
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Percent-encode a key or value, escaping every delimiter character too.
///
/// `urlencoding` leaves `- _ . ~` alone, so a delimiter built from those would
/// otherwise survive inside a value and split it apart on the next read.
fn encode_param_component(raw: &str, delimiter: &str) -> String {
    let encoded = urlencoding::encode(raw);
    if !encoded.chars().any(|c| delimiter.contains(c)) {
        return encoded.into_owned();
    }

    let mut out = String::with_capacity(encoded.len() + 6);
    for c in encoded.chars() {
        if delimiter.contains(c) {
            out.push_str(&format!("%{:02X}", c as u32));
        } else {
            out.push(c);
        }
    }
    out
}

/// Form-urlencoded query string in map order
pub(crate) fn encode_query(query: &ParamMap) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in query.iter() {
        serializer.append_pair(key, value);
    }
    serializer.finish()
}
