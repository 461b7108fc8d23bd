//! Tests for canonical path construction, reconstruction, and mutation.

use super::CanonicalPath;

fn canon(token: &str) -> CanonicalPath {
    CanonicalPath::parse("", token).unwrap()
}

#[test]
fn duplicate_slashes_collapse() {
    assert_eq!(canon("///a//b///c/").value(), "/a/b/c");
    assert_eq!(canon("a//b").value(), "a/b");
}

#[test]
fn relative_path_stays_relative() {
    assert_eq!(canon("a/b").value(), "a/b");
    assert_eq!(canon("/a/b").value(), "/a/b");
}

#[test]
fn query_survives_with_merged_keys() {
    let c = canon("/a?x=1&y=2&x=3");
    assert_eq!(c.query_values("x").unwrap(), ["1", "3"]);
    assert_eq!(c.value(), "/a?x=1&x=3&y=2");
}

#[test]
fn malformed_query_piece_is_rejected() {
    let err = CanonicalPath::parse("", "/a?flag").unwrap_err();
    assert!(err.to_string().contains("flag"));
}

#[test]
fn fragment_is_segmented_like_a_path() {
    let c = canon("/a#x//y/");
    assert_eq!(c.fragment_segments(), ["x", "y"]);
    assert_eq!(c.value(), "/a#x/y");
}

#[test]
fn consecutive_hashes_collapse() {
    assert_eq!(canon("/a?x=1##frag").value(), "/a?x=1#frag");
}

#[test]
fn root_path_is_stripped_and_reattached() {
    let c = CanonicalPath::parse("/api", "/api/users/42").unwrap();
    assert_eq!(c.segments(), ["users", "42"]);
    assert_eq!(c.value(), "/api/users/42");
}

#[test]
fn separator_inserted_between_bare_root_and_relative_path() {
    let c = CanonicalPath::parse("/api", "users").unwrap();
    assert_eq!(c.value(), "/api/users");
}

#[test]
fn no_double_slash_between_root_and_path() {
    let c = CanonicalPath::parse("/api/", "/users").unwrap();
    assert_eq!(c.value(), "/api/users");
}

#[test]
fn set_query_parameter_replaces_in_place() {
    let mut c = canon("/a?x=1&y=2&x=3");
    c.set_query_parameter("x", "9");
    assert_eq!(c.value(), "/a?x=9&y=2");
}

#[test]
fn set_query_parameter_appends_unknown_key() {
    let mut c = canon("/a?x=1");
    c.set_query_parameter("y", "2");
    assert_eq!(c.value(), "/a?x=1&y=2");
}

#[test]
fn append_parameter_keeps_first_seen_order() {
    let mut c = canon("/a?x=1&y=2");
    c.append_parameter("x", "3");
    assert_eq!(c.value(), "/a?x=1&x=3&y=2");
}

#[test]
fn remove_parameter_drops_all_values() {
    let mut c = canon("/a?x=1&y=2&x=3");
    c.remove_parameter("x");
    assert_eq!(c.value(), "/a?y=2");
}

#[test]
fn replace_path_resegments() {
    let mut c = canon("/a/b?x=1#f");
    c.replace_path("//c///d");
    assert_eq!(c.value(), "/c/d?x=1#f");
}

#[test]
fn empty_token_yields_empty_value() {
    assert_eq!(canon("").value(), "");
}
