#![cfg(test)]

use super::Recognizer;
use crate::method::Methods;
use http::Method;

fn recognizer(routes: &[&'static str]) -> Recognizer<&'static str> {
    let mut recognizer = Recognizer::default();
    for &pattern in routes {
        recognizer.insert(pattern, &Methods::default(), pattern);
    }
    recognizer
}

fn recognize(
    recognizer: &Recognizer<&'static str>,
    path: &'static str,
) -> Option<(&'static str, Vec<(String, String)>)> {
    recognizer
        .recognize(path, &Method::GET)
        .map(|(&handler, captures)| (handler, captures.into_vec()))
}

fn params(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .map(|&(name, value)| (name.to_owned(), value.to_owned()))
        .collect()
}

#[test]
fn case1_empty() {
    let recognizer = recognizer(&["/"]);
    assert_eq!(recognize(&recognizer, "/"), Some(("/", vec![])));
    assert_eq!(recognize(&recognizer, ""), Some(("/", vec![])));
    assert_eq!(recognize(&recognizer, "/a"), None);
}

#[test]
fn case2_multi_param() {
    let recognizer = recognizer(&["/files/{name}/{id}"]);
    assert_eq!(
        recognize(&recognizer, "/files/readme/0"),
        Some((
            "/files/{name}/{id}",
            params(&[("name", "readme"), ("id", "0")])
        ))
    );
    assert_eq!(recognize(&recognizer, "/files/readme"), None);
    assert_eq!(recognize(&recognizer, "/files/readme/0/1"), None);
}

#[test]
fn case3_literal_precedes_param() {
    let recognizer = recognizer(&["/a/{x}/", "/a/b/"]);
    assert_eq!(recognize(&recognizer, "/a/b/"), Some(("/a/b/", vec![])));
    assert_eq!(
        recognize(&recognizer, "/a/c/"),
        Some(("/a/{x}/", params(&[("x", "c")])))
    );
}

#[test]
fn case4_backtrack_from_literal_to_param() {
    let recognizer = recognizer(&["/a/b/c", "/a/{x}/d"]);
    assert_eq!(
        recognize(&recognizer, "/a/b/d"),
        Some(("/a/{x}/d", params(&[("x", "b")])))
    );
}

#[test]
fn case5_param_registration_order() {
    let recognizer = recognizer(&["/{a}/x", "/{b}/x", "/{c}/y"]);
    assert_eq!(
        recognize(&recognizer, "/v/x"),
        Some(("/{a}/x", params(&[("a", "v")])))
    );
    assert_eq!(
        recognize(&recognizer, "/v/y"),
        Some(("/{c}/y", params(&[("c", "v")])))
    );
}

#[test]
fn case6_failed_branch_drops_its_captures() {
    let recognizer = recognizer(&["/{a}/{b}/x", "/{c}/y/z"]);
    assert_eq!(
        recognize(&recognizer, "/1/y/z"),
        Some(("/{c}/y/z", params(&[("c", "1")])))
    );
}

#[test]
fn case7_wildcard() {
    let recognizer = recognizer(&["/files/*"]);
    assert_eq!(recognize(&recognizer, "/files/a/b/c/"), Some(("/files/*", vec![])));
    assert_eq!(recognize(&recognizer, "/files/a"), Some(("/files/*", vec![])));
    assert_eq!(recognize(&recognizer, "/files/"), Some(("/files/*", vec![])));
    assert_eq!(recognize(&recognizer, "/other/a"), None);
}

#[test]
fn case8_wildcard_is_tried_last() {
    let recognizer = recognizer(&["/files/*", "/files/{name}", "/files/index"]);
    assert_eq!(recognize(&recognizer, "/files/index"), Some(("/files/index", vec![])));
    assert_eq!(
        recognize(&recognizer, "/files/readme"),
        Some(("/files/{name}", params(&[("name", "readme")])))
    );
    assert_eq!(recognize(&recognizer, "/files/a/b"), Some(("/files/*", vec![])));
}

#[test]
fn case9_wildcard_after_param() {
    let recognizer = recognizer(&["/u/{id}/*"]);
    assert_eq!(
        recognize(&recognizer, "/u/42/a/b"),
        Some(("/u/{id}/*", params(&[("id", "42")])))
    );
}

#[test]
fn case10_segments_below_wildcard_are_unreachable() {
    let recognizer = recognizer(&["/files/*/raw"]);
    assert_eq!(recognize(&recognizer, "/files/a/raw"), None);
    assert_eq!(recognize(&recognizer, "/files/a"), None);
    // A literal "*" segment still walks the trie.
    assert_eq!(recognize(&recognizer, "/files/*/raw"), Some(("/files/*/raw", vec![])));
}

#[test]
fn case11_method_named_segment() {
    let mut recognizer = Recognizer::default();
    recognizer.insert("/", &Methods::default(), "root");
    recognizer.insert("/GET", &Methods::default(), "literal");

    assert_eq!(
        recognizer.recognize("/", &Method::GET).map(|(&h, _)| h),
        Some("root")
    );
    assert_eq!(
        recognizer.recognize("/GET", &Method::GET).map(|(&h, _)| h),
        Some("literal")
    );
}

#[test]
fn case12_method_mismatch() {
    let recognizer = recognizer(&["/a"]);
    assert!(recognizer.recognize("/a", &Method::POST).is_none());
    assert!(recognizer.recognize("/a", &Method::GET).is_some());
}

#[test]
fn case13_backtrack_on_method() {
    let mut recognizer = Recognizer::default();
    recognizer.insert("/a/b", &Methods::from(Method::GET), "literal");
    recognizer.insert("/a/{x}", &Methods::from(Method::POST), "param");

    assert_eq!(
        recognizer.recognize("/a/b", &Method::POST).map(|(&h, c)| (h, c.get("x"))),
        Some(("param", Some("b")))
    );
}

#[test]
fn allowed_methods() {
    let mut recognizer = Recognizer::default();
    recognizer.insert("/a", &Methods::from(vec![Method::GET, Method::PUT]), ());
    recognizer.insert("/a", &Methods::from(Method::DELETE), ());

    assert_eq!(
        recognizer.allowed_methods("/a"),
        vec![&Method::GET, &Method::PUT, &Method::DELETE]
    );
    assert!(recognizer.allowed_methods("/b").is_empty());
}

#[test]
fn allowed_methods_follow_backtracking() {
    let mut recognizer = Recognizer::default();
    recognizer.insert("/a/b", &Methods::from(Method::GET), "literal");
    recognizer.insert("/a/{x}", &Methods::from(Method::POST), "param");
    recognizer.insert("/a/*", &Methods::from(vec![Method::GET, Method::PUT]), "rest");

    assert_eq!(
        recognizer.allowed_methods("/a/b"),
        vec![&Method::GET, &Method::POST, &Method::PUT]
    );
    assert_eq!(
        recognizer.allowed_methods("/a/c"),
        vec![&Method::POST, &Method::GET, &Method::PUT]
    );
    for method in recognizer.allowed_methods("/a/b") {
        assert!(recognizer.recognize("/a/b", method).is_some());
    }
    assert!(recognizer.recognize("/a/b", &Method::DELETE).is_none());
}
