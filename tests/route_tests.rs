//! Pattern parsing and parameter extraction on `Route`.

mod common;

use common::router_with;
use segrouter::{PathElement, RegexRouter, Route, Router, TreeRouter};
use std::collections::HashSet;

#[test]
fn test_routes_hash_by_pattern() {
    let set: HashSet<Route> = ["/", "/cntrl", "/cntrl", "/cntrl/actn/:id", "/cntrl/actn/:id"]
        .into_iter()
        .map(Route::new)
        .collect();
    assert_eq!(set.len(), 3);
    assert!(set.contains(&Route::new("/cntrl/actn/:id")));
}

#[test]
fn test_display_is_raw_pattern() {
    for pattern in ["/cntrl", "/cntrl/actn", "/cntrl/actn/clients/:id", "/*", "/a/:id<[0-9]+>"] {
        assert_eq!(Route::new(pattern).to_string(), pattern);
    }
}

#[test]
fn test_named_parameter_elements() {
    assert_eq!(Route::new("/actn").named_parameter_elements().count(), 0);

    let route = Route::new("/:id/:name");
    let named: Vec<_> = route
        .named_parameter_elements()
        .map(|e| (e.name().to_string(), e.index(), e.regex().map(str::to_string)))
        .collect();
    assert_eq!(
        named,
        vec![("id".to_string(), 0, None), ("name".to_string(), 1, None)]
    );

    let route = Route::new("/cntrl/actn/:id<[0-9]+>/:name<[a-z]+>");
    let named: Vec<_> = route
        .named_parameter_elements()
        .map(|e| (e.index(), e.regex().map(str::to_string)))
        .collect();
    assert_eq!(
        named,
        vec![(2, Some("[0-9]+".to_string())), (3, Some("[a-z]+".to_string()))]
    );
}

#[test]
fn test_custom_regex_may_contain_a_separator() {
    let route = Route::new("/cntrl/actn/:id<[^/]+>/:name<[a-z]+>");
    let named: Vec<_> = route.named_parameter_elements().collect();
    assert_eq!(named[0].regex(), Some("[^/]+"));
    assert_eq!(named[0].index(), 2);
    assert_eq!(named[1].regex(), Some("[a-z]+"));
    assert_eq!(named[1].index(), 3);
}

#[test]
fn test_splat_parameter_elements() {
    let indexes = |pattern: &str| -> Vec<usize> {
        Route::new(pattern)
            .splat_parameter_elements()
            .map(PathElement::index)
            .collect()
    };
    assert!(indexes("/").is_empty());
    assert_eq!(indexes("/*"), vec![0]);
    assert_eq!(indexes("/protected/*"), vec![1]);
    assert_eq!(indexes("/protected/*/content"), vec![1]);
    assert_eq!(indexes("/say/*/to/*"), vec![1, 3]);
}

#[test]
fn test_static_path_elements() {
    assert_eq!(Route::new("/").static_path_elements().count(), 0);
    let names: Vec<_> = Route::new("/cntrl/actn")
        .static_path_elements()
        .map(|e| (e.name().to_string(), e.index()))
        .collect();
    assert_eq!(names, vec![("cntrl".to_string(), 0), ("actn".to_string(), 1)]);
}

#[test]
fn test_all_path_elements_in_order() {
    let route = Route::new("/say/*/to/:name/:times<[0-9]+>/*");
    let elements = route.path_elements();
    assert_eq!(elements.len(), 6);
    assert!(matches!(&elements[0], PathElement::Literal { name, index: 0 } if name == "say"));
    assert!(matches!(elements[1], PathElement::Wildcard { index: 1 }));
    assert!(matches!(&elements[2], PathElement::Literal { name, index: 2 } if name == "to"));
    assert!(matches!(
        &elements[3],
        PathElement::Named { name, index: 3, regex: None } if name == "name"
    ));
    assert!(matches!(
        &elements[4],
        PathElement::Named { name, index: 4, regex: Some(r) } if name == "times" && r == "[0-9]+"
    ));
    assert!(matches!(elements[5], PathElement::Wildcard { index: 5 }));
}

#[test]
fn test_has_path_elements() {
    assert!(Route::new("/hello/*").has_path_elements());
    assert!(Route::new("/*").has_path_elements());
    assert!(Route::new("/:named").has_path_elements());
    assert!(!Route::new("/").has_path_elements());
}

#[test]
fn test_named_parameter_values() {
    let route = Route::new("/customer/:id/named/:name");
    assert_eq!(route.named_parameter("id", "/customer/1/named/John"), Some("1".into()));
    assert_eq!(route.named_parameter("name", "/customer/1/named/John"), Some("John".into()));
    assert_eq!(route.named_parameter("missing", "/customer/1/named/John"), None);
}

#[test]
fn test_named_parameter_decoding() {
    let route = Route::new("/customer/:id");
    assert_eq!(route.named_parameter("id", "/customer/f%C3%B6%C3%B6"), Some("föö".into()));

    let route = Route::new("/:test");
    assert_eq!(route.named_parameter("test", "/foo%2Fbar"), Some("foo/bar".into()));
    assert_eq!(route.named_parameter("test", "/bob+ross"), Some("bob+ross".into()));

    let route = Route::new("/hello/:test/there");
    assert_eq!(
        route.named_parameter("test", "/hello/foo%2Fbar/there"),
        Some("foo/bar".into())
    );
}

#[test]
fn test_general_wildcard_splat() {
    let route = Route::new("/*");
    assert_eq!(route.splat("/hello/there"), vec!["hello/there"]);
    assert_eq!(route.splat("/hello"), vec!["hello"]);
    assert_eq!(route.splat("/hello/"), vec!["hello/"]);
    assert_eq!(route.splat("/foo%2Fbar"), vec!["foo/bar"]);
    assert_eq!(route.splat("/f%C3%B6%C3%B6"), vec!["föö"]);
}

#[test]
fn test_splat_with_preceding_resource() {
    let route = Route::new("/protected/*");
    assert_eq!(route.splat("/protected/1"), vec!["1"]);
    assert_eq!(route.splat("/protected/1/2"), vec!["1/2"]);
}

#[test]
fn test_interjected_splat() {
    let route = Route::new("/protected/*/content");
    assert_eq!(route.splat("/protected/1/content"), vec!["1"]);
    assert_eq!(route.splat("/protected/blah/content"), vec!["blah"]);

    let route = Route::new("/hello/*/there");
    assert_eq!(route.splat("/hello/foo%2Fbar/there"), vec!["foo/bar"]);
}

#[test]
fn test_splats_occurring_multiple_times() {
    let route = Route::new("/say/*/to/*");
    assert_eq!(route.splat("/say/hello/to/world"), vec!["hello", "world"]);
    assert_eq!(route.splat("/say/bye/to/Tim"), vec!["bye", "Tim"]);
    assert_eq!(route.splat("/say/hello/to/John/Doe"), vec!["hello", "John/Doe"]);
    assert_eq!(route.splat_parameter(1, "/say/hello/to/John/Doe"), Some("John/Doe".into()));
    assert_eq!(route.splat_parameter(2, "/say/hello/to/John/Doe"), None);
}

#[test]
fn test_splats_with_various_path_params() {
    let route = Route::new("/say/*/to/:name/:times<[0-9]+>/*");

    let path = "/say/hello/to/Tim/1/time";
    assert_eq!(route.splat(path), vec!["hello", "time"]);
    assert_eq!(route.named_parameter("name", path), Some("Tim".into()));
    assert_eq!(route.named_parameter("times", path), Some("1".into()));

    let path = "/say/hello/to/Tim/1/time/thanks";
    assert_eq!(route.splat(path), vec!["hello", "time/thanks"]);
    assert_eq!(route.named_parameter("name", path), Some("Tim".into()));
}

#[test]
fn test_values_are_url_decoded() {
    let route = Route::new("/:foo/*");
    let path = "/hello%20world/how%20are%20you";
    assert_eq!(route.named_parameter("foo", path), Some("hello world".into()));
    assert_eq!(route.splat(path), vec!["how are you"]);

    let route = Route::new("/hello/*");
    assert_eq!(route.splat("/hello/bob+ross"), vec!["bob+ross"]);
    assert_eq!(route.splat("/hello/"), vec![""]);
}

#[test]
fn test_no_wildcards_no_splats() {
    assert!(Route::new("/").splat("/").is_empty());
    assert!(Route::new("/a/:b").splat("/a/c").is_empty());
}

#[test]
fn test_pattern_flags() {
    let route = Route::new("/files/*");
    assert!(route.ends_with_splat());
    assert!(!route.ends_with_path_separator());
    let route = Route::new("/files/");
    assert!(!route.ends_with_splat());
    assert!(route.ends_with_path_separator());
    let route = Route::new("/*/foo*");
    assert!(!route.ends_with_splat());
}

#[test]
fn test_literal_ending_in_star_keeps_earlier_splat_to_one_segment() {
    let route = Route::new("/*/foo*");
    assert_eq!(route.splat("/a/foo*"), vec!["a"]);
    assert_eq!(route.splat_parameter(0, "/a/foo*"), Some("a".into()));

    for router in [
        Box::new(router_with::<TreeRouter>(&["/*/foo*"])) as Box<dyn Router>,
        Box::new(router_with::<RegexRouter>(&["/*/foo*"])),
    ] {
        let found = router.find("/a/foo*").unwrap();
        assert_eq!(found.route.resource_path(), "/*/foo*");
        assert_eq!(found.splat, vec!["a"]);
    }
}
