use super::{RegexRoute, RegexRouter, RouteMatch, Router, TreeRouter};
use crate::error::RouteError;
use crate::route::Route;
use std::sync::Arc;

fn regex_of(pattern: &str) -> String {
    RegexRoute::new(Route::new(pattern)).unwrap().pattern().to_string()
}

#[test]
fn test_regex_root_path() {
    assert_eq!(regex_of("/"), "^/$");
}

#[test]
fn test_regex_static_paths() {
    assert_eq!(regex_of("/cntrl"), "^/cntrl$");
    assert_eq!(regex_of("/cntrl/actn"), "^/cntrl/actn$");
    assert_eq!(regex_of("/1/"), "^/1/$");
}

#[test]
fn test_regex_named_params() {
    assert_eq!(
        regex_of("/cntrl/actn/clients/:id"),
        "^/cntrl/actn/clients/([^/]+)$"
    );
    assert_eq!(regex_of("/cntrl/:id/actn"), "^/cntrl/([^/]+)/actn$");
    assert_eq!(
        regex_of("/cntrl/actn/clients/:id<[0-9]+>/:name"),
        "^/cntrl/actn/clients/([0-9]+)/([^/]+)$"
    );
}

#[test]
fn test_regex_escapes_literals() {
    assert_eq!(
        regex_of("/cntrl/actn/a+b/:id<[0-9]+>/:name"),
        r"^/cntrl/actn/a\+b/([0-9]+)/([^/]+)$"
    );
}

#[test]
fn test_regex_splats() {
    assert_eq!(regex_of("/*"), "^/(.*)$");
    assert_eq!(regex_of("/protected/*"), "^/protected/(.*)$");
    assert_eq!(regex_of("/protected/*/content"), "^/protected/([^/]*)/content$");
    assert_eq!(regex_of("/say/*/to/*"), "^/say/([^/]*)/to/(.*)$");
}

#[test]
fn test_regex_router_keeps_specificity_order() {
    let mut router = RegexRouter::new();
    for pattern in ["/*", "/:id", "/specific", "/"] {
        router.add(Route::new(pattern)).unwrap();
    }
    let order: Vec<_> = router
        .routes()
        .map(|r| r.route().resource_path().to_string())
        .collect();
    assert_eq!(order, vec!["/", "/specific", "/:id", "/*"]);
}

#[test]
fn test_regex_router_replaces_duplicates() {
    let mut router = RegexRouter::new();
    router.add(Route::new("/hello")).unwrap();
    router.add(Route::new("/hello")).unwrap();
    assert_eq!(router.routes().count(), 1);
}

#[test]
fn test_tree_shape_independent_of_insertion_order() {
    let patterns = [
        "/",
        "/*",
        "/1",
        "/x",
        "/y",
        "/:id",
        "/cntrl/actn/:id<[0-9]+>",
        "/cntrl/actn/:id<[a-z]+>",
        "/hello/",
    ];
    let mut forward = TreeRouter::new();
    for pattern in patterns {
        forward.add(Route::new(pattern)).unwrap();
    }
    let mut backward = TreeRouter::new();
    for pattern in patterns.iter().rev() {
        backward.add(Route::new(*pattern)).unwrap();
    }
    assert_eq!(forward.dump(), backward.dump());
}

#[test]
fn test_tree_dump_lists_matchers_and_routes() {
    let mut router = TreeRouter::new();
    router.add(Route::new("/hello/")).unwrap();
    router.add(Route::new("/:id<[0-9]+>")).unwrap();
    assert_eq!(
        router.dump(),
        "^/$\n  ^hello$\n    ^/$ -> /hello/\n  ^([0-9]+)$ -> /:id<[0-9]+>\n"
    );
}

#[test]
fn test_tree_invalid_regex_leaves_tree_untouched() {
    let mut router = TreeRouter::new();
    router.add(Route::new("/a")).unwrap();
    let before = router.dump();
    let err = router.add(Route::new("/a/b/:id<(unclosed>")).unwrap_err();
    assert!(matches!(err, RouteError::InvalidSegmentPattern { .. }));
    assert_eq!(router.dump(), before);
    assert_eq!(router.route_count(), 1);
}

#[test]
fn test_tree_invalid_regex_on_empty_tree_creates_no_root() {
    let mut router = TreeRouter::new();
    assert!(router.add(Route::new("/:id<[>")).is_err());
    assert!(router.root().is_none());
}

#[test]
fn test_empty_tree_matches_nothing() {
    let router = TreeRouter::new();
    assert!(router.route("/").is_none());
    assert!(router.route("/anything").is_none());
    assert_eq!(router.dump(), "");
}

#[test]
fn test_route_match_extracts_params_and_splats() {
    let route = Arc::new(Route::new("/say/*/to/:name/:times<[0-9]+>/*"));
    let found = RouteMatch::new(route, "/say/hello/to/Tim%20Jones/3/a/b");
    assert_eq!(found.get_path_param("name"), Some("Tim Jones"));
    assert_eq!(found.get_path_param("times"), Some("3"));
    assert_eq!(found.get_path_param("missing"), None);
    assert_eq!(found.splat, vec!["hello", "a/b"]);
    assert_eq!(found.path_params_map().len(), 2);
}

#[test]
fn test_route_match_last_duplicate_name_wins() {
    let route = Arc::new(Route::new("/org/:id/user/:id"));
    let found = RouteMatch::new(route, "/org/1/user/2");
    assert_eq!(found.get_path_param("id"), Some("2"));
}

#[test]
fn test_find_decodes_encoded_separator_in_value() {
    let mut router = TreeRouter::new();
    router.add(Route::new("/files/:name")).unwrap();
    let found = router.find("/files/hello%2Fworld").unwrap();
    assert_eq!(found.get_path_param("name"), Some("hello/world"));
}
