// Tests for the param filter (path-embedded key:value parameters)

mod common;

use common::{apply, apply_url, apply_with};
use serde_json::json;
use urlparamfilter::{FilterConfig, FilterOutput, ParamMap};

#[test]
fn test_param_returns_all_params() {
    let expected: ParamMap = [("foo", "bar"), ("moo", "quu")].into_iter().collect();
    assert_eq!(
        apply("param", "/some/url/foo:bar/moo:quu", None, None),
        FilterOutput::Map(Some(expected))
    );
}

#[test]
fn test_param_all_without_params() {
    assert_eq!(apply("param", "/some/url", None, None), FilterOutput::Map(None));
}

#[test]
fn test_param_read() {
    assert_eq!(
        apply("param", "/a/k:v", Some(json!("k")), None),
        FilterOutput::Value(Some("v".to_string()))
    );
    assert_eq!(
        apply("param", "/a/k:v", Some(json!("z")), None),
        FilterOutput::Value(None)
    );
}

#[test]
fn test_param_read_is_sanitized() {
    assert_eq!(
        apply("param", "/a/name:%3Cem%3EBob%3C%2Fem%3E%22", Some(json!("name")), None),
        FilterOutput::Value(Some("Bob&#34;".to_string()))
    );
}

#[test]
fn test_param_set() {
    assert_eq!(apply_url("param", "/a", Some(json!("k")), Some(json!("v"))), "/a/k:v");
    assert_eq!(
        apply_url("param", "/some/url/foo:bar", Some(json!("moo")), Some(json!("quu"))),
        "/some/url/foo:bar/moo:quu"
    );
}

#[test]
fn test_param_set_empty_value() {
    assert_eq!(
        apply_url("param", "/some/url/foo:bar", Some(json!("moo")), Some(json!(""))),
        "/some/url/foo:bar/moo:"
    );
}

#[test]
fn test_param_set_value_is_not_sanitized() {
    assert_eq!(
        apply_url("param", "/a", Some(json!("k")), Some(json!("<b>"))),
        "/a/k:%3Cb%3E"
    );
}

#[test]
fn test_param_set_encodes_reserved_characters() {
    assert_eq!(
        apply_url("param", "/a", Some(json!("k")), Some(json!("x:y/z"))),
        "/a/k:x%3Ay%2Fz"
    );
}

#[test]
fn test_param_params_move_to_end_of_path() {
    assert_eq!(
        apply_url("param", "/a/k:v/b", Some(json!("n")), Some(json!("1"))),
        "/a/b/k:v/n:1"
    );
}

#[test]
fn test_param_remove() {
    assert_eq!(apply_url("param", "/a/k:v", Some(json!("k")), Some(json!(false))), "/a");
    assert_eq!(
        apply_url("param", "/a/k:v/x:y", Some(json!("k")), Some(json!(false))),
        "/a/x:y"
    );
}

#[test]
fn test_param_remove_without_params() {
    assert_eq!(apply_url("param", "/a?q=1", Some(json!("k")), Some(json!(false))), "/a?q=1");
}

#[test]
fn test_param_merge() {
    assert_eq!(
        apply_url("param", "/some/url", Some(json!({"foo": "bar", "moo": "quu"})), None),
        "/some/url/foo:bar/moo:quu"
    );
    assert_eq!(
        apply_url("param", "/a/foo:old", Some(json!({"foo": "new"})), None),
        "/a/foo:new"
    );
}

#[test]
fn test_param_on_root_path() {
    assert_eq!(apply_url("param", "/", Some(json!("k")), Some(json!("v"))), "/k:v");
    assert_eq!(apply_url("param", "/k:v", Some(json!("j")), Some(json!("w"))), "/k:v/j:w");
}

#[test]
fn test_param_with_full_url() {
    assert_eq!(
        apply_url(
            "param",
            "https://example.com:8080/blog/tag:rust?page=2#top",
            Some(json!("tag")),
            Some(json!("go"))
        ),
        "https://example.com:8080/blog/tag:go?page=2#top"
    );
}

#[test]
fn test_param_double_delimiter_segment_untouched() {
    assert_eq!(apply("param", "/a/x:y:z", None, None), FilterOutput::Map(None));
    assert_eq!(
        apply_url("param", "/a/x:y:z", Some(json!("k")), Some(json!("v"))),
        "/a/x:y:z/k:v"
    );
}

#[test]
fn test_param_custom_delimiter() {
    let config = FilterConfig::with_param_sep(";").unwrap();

    assert_eq!(
        apply_with("param", "/a/k;v/t:x", Some(json!("k")), None, &config),
        FilterOutput::Value(Some("v".to_string()))
    );
    assert_eq!(
        apply_with("param", "/a", Some(json!("k")), Some(json!("v")), &config),
        FilterOutput::Url("/a/k;v".to_string())
    );
}

#[test]
fn test_param_value_containing_delimiter_reads_back() {
    let config = FilterConfig::with_param_sep("~").unwrap();

    let url = match apply_with("param", "/a", Some(json!("k")), Some(json!("x~y")), &config) {
        FilterOutput::Url(url) => url,
        other => panic!("Expected a url, got {:?}", other),
    };
    assert_eq!(url, "/a/k~x%7Ey");
    assert_eq!(
        apply_with("param", &url, Some(json!("k")), None, &config),
        FilterOutput::Value(Some("x~y".to_string()))
    );
}

#[test]
fn test_param_unrecognized_arguments_return_input() {
    let url = "/a/k:v";
    assert_eq!(apply_url("param", url, Some(json!(5)), None), url);
    assert_eq!(apply_url("param", url, Some(json!(false)), None), url);
    assert_eq!(apply_url("param", url, Some(json!({"k": ["v"]})), None), url);
}
