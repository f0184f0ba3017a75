#![allow(dead_code)]

use segrouter::{Route, Router};

/// Build a router of type `R` holding `patterns`, registered in order.
pub fn router_with<R: Router + Default>(patterns: &[&str]) -> R {
    let mut router = R::default();
    for pattern in patterns {
        router.add(Route::new(*pattern)).unwrap();
    }
    router
}

/// Assert that `path` resolves to the route with pattern `expected`, or to
/// nothing when `expected` is `None`.
pub fn assert_route_match<R: Router + ?Sized>(router: &R, path: &str, expected: Option<&str>) {
    let actual = router.route(path);
    let actual = actual.as_deref().map(Route::resource_path);
    match actual {
        Some(pattern) => println!("✅ {path} → {pattern}"),
        None => println!("❌ {path} → no match"),
    }
    assert_eq!(
        actual, expected,
        "Route mismatch for {path}: expected {expected:?}, got {actual:?}"
    );
}
