// Decoding and display-safety cleanup for path parameter values

/// Percent-decode a path parameter value and make it safe for raw display.
///
/// Invalid UTF-8 after decoding is replaced rather than rejected.
pub(crate) fn decode_param_value(raw: &str) -> String {
    let decoded = urlencoding::decode_binary(raw.as_bytes());
    sanitize(&String::from_utf8_lossy(&decoded))
}

/// Percent-decode a path parameter key. Keys are not sanitized.
pub(crate) fn decode_param_key(raw: &str) -> String {
    String::from_utf8_lossy(&urlencoding::decode_binary(raw.as_bytes())).into_owned()
}

/// Strip markup and control characters, entity-encode quotes.
///
/// Everything from a `<` up to the next `>` (or the end of input) is dropped,
/// as is any stray `>`.
fn sanitize(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut in_tag = false;

    for ch in value.chars() {
        if in_tag {
            if ch == '>' {
                in_tag = false;
            }
            continue;
        }

        match ch {
            '<' => in_tag = true,
            '>' => {}
            '\'' => out.push_str("&#39;"),
            '"' => out.push_str("&#34;"),
            c if c.is_ascii_control() => {}
            c => out.push(c),
        }
    }

    out
}
