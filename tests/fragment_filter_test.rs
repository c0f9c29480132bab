// Tests for the fragment filter

mod common;

use common::{apply, apply_url};
use serde_json::json;
use urlparamfilter::FilterOutput;

#[test]
fn test_fragment_read() {
    assert_eq!(
        apply("fragment", "/a#frag", None, None),
        FilterOutput::Value(Some("frag".to_string()))
    );
    assert_eq!(apply("fragment", "/a", None, None), FilterOutput::Value(None));
}

#[test]
fn test_fragment_read_empty() {
    assert_eq!(
        apply("fragment", "/a#", None, None),
        FilterOutput::Value(Some(String::new()))
    );
}

#[test]
fn test_fragment_set() {
    assert_eq!(apply_url("fragment", "/a", Some(json!("frag")), None), "/a#frag");
}

#[test]
fn test_fragment_replace() {
    assert_eq!(
        apply_url("fragment", "https://example.com/docs?x=1#old", Some(json!("new")), None),
        "https://example.com/docs?x=1#new"
    );
}

#[test]
fn test_fragment_set_keeps_path_params() {
    assert_eq!(
        apply_url("fragment", "/blog/tag:rust", Some(json!("comments")), None),
        "/blog/tag:rust#comments"
    );
}

#[test]
fn test_fragment_unrecognized_argument_returns_input() {
    assert_eq!(apply_url("fragment", "/a#x", Some(json!(false)), None), "/a#x");
    assert_eq!(apply_url("fragment", "/a#x", Some(json!({"a": "b"})), None), "/a#x");
}
