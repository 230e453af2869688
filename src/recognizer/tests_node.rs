#![cfg(test)]

use super::super::Recognizer;
use super::Node;
use crate::method::Methods;
use http::Method;
use indexmap::indexmap;

macro_rules! t {
    ($test:ident, [$($pattern:expr),*], $expected:expr) => {
        #[test]
        fn $test() {
            let mut recognizer = Recognizer::default();
            for (i, &pattern) in [$($pattern),*].iter().enumerate() {
                recognizer.insert(pattern, &Methods::default(), i);
            }
            assert_eq!(recognizer.root, $expected);
        }
    };
    ($test:ident, [$($pattern:expr,)+], $expected:expr) => {
        t!($test, [$($pattern),*], $expected);
    };
}

fn leaf(i: usize) -> Node {
    Node {
        handlers: indexmap! { Method::GET => i },
        ..Node::default()
    }
}

#[test]
fn case0() {
    let recognizer = Recognizer::<()>::default();
    assert_eq!(recognizer.root, Node::default());
}

t!(
    case1,
    ["/foo"],
    Node {
        children: indexmap! {
            "foo".into() => Node {
                children: indexmap! { "".into() => leaf(0) },
                ..Node::default()
            },
        },
        ..Node::default()
    }
);

t!(
    case2_root,
    ["/"],
    Node {
        children: indexmap! { "".into() => leaf(0) },
        ..Node::default()
    }
);

t!(
    case3_siblings,
    ["/foo", "/bar"],
    Node {
        children: indexmap! {
            "foo".into() => Node {
                children: indexmap! { "".into() => leaf(0) },
                ..Node::default()
            },
            "bar".into() => Node {
                children: indexmap! { "".into() => leaf(1) },
                ..Node::default()
            },
        },
        ..Node::default()
    }
);

t!(
    case4_shared_prefix,
    ["/foo", "/foo/bar/"],
    Node {
        children: indexmap! {
            "foo".into() => Node {
                children: indexmap! {
                    "".into() => leaf(0),
                    "bar".into() => Node {
                        children: indexmap! { "".into() => leaf(1) },
                        ..Node::default()
                    },
                },
                ..Node::default()
            },
        },
        ..Node::default()
    }
);

t!(
    param_positions,
    ["/{id}", "/users", "/{name}/x"],
    Node {
        children: indexmap! {
            "{id}".into() => Node {
                children: indexmap! { "".into() => leaf(0) },
                ..Node::default()
            },
            "users".into() => Node {
                children: indexmap! { "".into() => leaf(1) },
                ..Node::default()
            },
            "{name}".into() => Node {
                children: indexmap! {
                    "x".into() => Node {
                        children: indexmap! { "".into() => leaf(2) },
                        ..Node::default()
                    },
                },
                ..Node::default()
            },
        },
        params: vec![0, 2],
        ..Node::default()
    }
);

t!(
    wildcard,
    ["/files/*"],
    Node {
        children: indexmap! {
            "files".into() => Node {
                children: indexmap! {
                    "*".into() => Node {
                        children: indexmap! { "".into() => leaf(0) },
                        ..Node::default()
                    },
                },
                ..Node::default()
            },
        },
        ..Node::default()
    }
);

t!(
    empty_segments_are_literal,
    ["//a"],
    Node {
        children: indexmap! {
            "".into() => Node {
                children: indexmap! {
                    "a".into() => Node {
                        children: indexmap! { "".into() => leaf(0) },
                        ..Node::default()
                    },
                },
                ..Node::default()
            },
        },
        ..Node::default()
    }
);

#[test]
fn multiple_methods_share_one_handler() {
    let mut recognizer = Recognizer::default();
    recognizer.insert("/", &Methods::from(vec![Method::GET, Method::POST]), "a");

    assert_eq!(recognizer.handlers, vec!["a"]);
    assert_eq!(
        recognizer.root.children[""].handlers,
        indexmap! { Method::GET => 0, Method::POST => 0 }
    );
}

#[test]
fn reregistration_replaces_the_handler() {
    let mut recognizer = Recognizer::default();
    recognizer.insert("/a", &Methods::default(), "first");
    recognizer.insert("/a/", &Methods::default(), "second");

    let terminal = &recognizer.root.children["a"].children[""];
    assert_eq!(terminal.handlers, indexmap! { Method::GET => 1 });
}
