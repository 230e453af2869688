use http::Method;
use tsukuyomi_router::{ErrorKind, Route, Router};

#[test]
fn test_case1_round_trip() {
    let mut router = Router::new();
    router.add("/p/", Method::GET, (), Some("p1"));
    router.add("/q", Method::GET, (), Some("q1"));

    assert_eq!(router.resolve("p1"), Some("/p/"));
    assert_eq!(router.resolve("q1"), Some("/q/"));
    assert_eq!(router.resolve("unknown"), None);
}

#[test]
fn test_case2_name_collision() {
    let mut router = Router::new();
    router.add("/old", Method::GET, "old", Some("page"));
    router.add("/new/{id}", Method::GET, "new", Some("page"));

    assert_eq!(router.resolve("page"), Some("/new/{id}/"));
    // the route registered first is still reachable
    assert!(router.recognize("/old", &Method::GET).is_some());
    assert_eq!(router.names().len(), 1);
}

#[test]
fn test_case3_url_for() {
    let mut router = Router::new();
    router.add_route(Route::new("/users/{id}/posts/{post}", ()).name("post"));
    router.add_route(Route::new("/assets/*", ()).name("assets"));

    assert_eq!(
        router
            .url_for("post", vec![("id", "42"), ("post", "hello")])
            .unwrap(),
        "/users/42/posts/hello/"
    );
    assert_eq!(
        router.url_for("assets", vec![("*", "img/logo.png")]).unwrap(),
        "/assets/img/logo.png/"
    );

    let url = router.url_for("post", vec![("id", "42"), ("post", "hello")]).unwrap();
    assert!(router.recognize(&url, &Method::GET).is_some());
}

#[test]
fn test_case4_url_for_errors() {
    let mut router = Router::new();
    router.add("/users/{id}", Method::GET, (), Some("user"));

    let err = router.url_for("user", Vec::<(String, String)>::new()).unwrap_err();
    assert_eq!(
        err.into_kind(),
        ErrorKind::MissingParam {
            name: "user".into(),
            param: "id".into(),
        }
    );

    let err = router.url_for("member", vec![("id", "1")]).unwrap_err();
    assert_eq!(err.to_string(), r#"no route is registered with the name "member""#);
}

#[test]
fn test_case5_url_for_rejects_separator() {
    let mut router = Router::new();
    router.add("/users/{id}", Method::GET, "user", Some("user"));
    router.add("/assets/*", Method::GET, "assets", Some("assets"));

    let err = router.url_for("user", vec![("id", "a/b")]).unwrap_err();
    assert_eq!(
        err.into_kind(),
        ErrorKind::InvalidParam {
            name: "user".into(),
            param: "id".into(),
            value: "a/b".into(),
        }
    );

    let url = router.url_for("assets", vec![("*", "css/a.css")]).unwrap();
    assert_eq!(url, "/assets/css/a.css/");
    assert_eq!(*router.recognize(&url, &Method::GET).unwrap().handler, "assets");
}
