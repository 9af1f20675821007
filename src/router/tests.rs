use super::{RouteLookup, Router, SharedRouter};
use crate::matcher::{BasicRouteMatcher, HttpRouteMatcher, RequestContext};
use crate::route::{Route, RouteCollection};

fn table() -> Router {
    let blog = RouteCollection::with_prefix("/blog")
        .with_route(Route::new("blog_post", "/blog/{year}/{slug}").with_rule("year", r"\d{4}"))
        .with_route(Route::new("blog_page", "/blog/{page}").with_default("page", "1"));
    let rest = RouteCollection::unprefixed()
        .with_route(Route::new("root", "/"))
        .with_route(Route::new("catch_all", "/{anything}"));
    Router::new(vec![blog, rest])
}

#[test]
fn test_first_match_wins() {
    let router = table();
    let matched = router.resolve_path("/blog").unwrap().unwrap();
    assert_eq!(matched.route_name(), "blog_page");
    assert_eq!(matched.get_param("page"), Some("1"));
    assert_eq!(matched.collection.as_deref(), Some("/blog"));
}

#[test]
fn test_prefix_filter_skips_collection() {
    let router = table();
    let matched = router.resolve_path("/news").unwrap().unwrap();
    assert_eq!(matched.route_name(), "catch_all");
    assert_eq!(matched.collection, None);
}

#[test]
fn test_root_path() {
    let router = table();
    assert_eq!(router.resolve_path("/").unwrap().unwrap().route_name(), "root");
    assert_eq!(router.resolve_path("").unwrap().unwrap().route_name(), "root");
}

#[test]
fn test_empty_path_enters_root_prefixed_collection() {
    let router = Router::new(vec![RouteCollection::with_prefix("/")
        .with_route(Route::new("root", "/"))
        .with_route(Route::http("http_root", "/").with_method("GET"))]);
    assert_eq!(router.resolve_path("").unwrap().unwrap().route_name(), "root");
    assert_eq!(router.resolve_path("/").unwrap().unwrap().route_name(), "root");

    let request = RequestContext::new("GET", "", "example.com", "http");
    let matched = router.resolve(&HttpRouteMatcher::new(request)).unwrap().unwrap();
    assert_eq!(matched.route_name(), "http_root");
}

#[test]
fn test_no_match() {
    let router = table();
    assert!(router.resolve_path("/a/b/c").unwrap().is_none());
}

#[test]
fn test_malformed_route_surfaces() {
    let router = Router::new(vec![RouteCollection::unprefixed()
        .with_route(Route::new("broken", "/x/{id"))
        .with_route(Route::new("fine", "/x/{id}"))]);
    assert!(router.resolve(&BasicRouteMatcher::new("/x/1")).is_err());
}

#[test]
fn test_lookup_keeps_first_duplicate() {
    let router = Router::new(vec![RouteCollection::unprefixed()
        .with_route(Route::new("dup", "/first"))
        .with_route(Route::new("dup", "/second"))]);
    assert!(router.has_route("dup"));
    assert_eq!(router.get_route("dup").unwrap().path, "/first");
    assert!(!router.has_route("missing"));
    assert_eq!(router.len(), 2);
}

#[test]
fn test_http_resolution_skips_basic_routes() {
    let router = Router::new(vec![RouteCollection::unprefixed()
        .with_route(Route::new("basic", "/items"))
        .with_route(Route::http("http", "/items").with_method("GET"))]);
    let request = RequestContext::new("GET", "/items", "localhost", "http");
    let matched = router.resolve(&HttpRouteMatcher::new(request)).unwrap().unwrap();
    assert_eq!(matched.route_name(), "http");
}

#[test]
fn test_shared_router_swap() {
    let shared = SharedRouter::new(table());
    assert!(shared.has_route("root"));

    let previous = shared.store(Router::new(vec![
        RouteCollection::unprefixed().with_route(Route::new("only", "/only"))
    ]));
    assert!(previous.has_route("root"));
    assert!(!shared.has_route("root"));
    assert_eq!(shared.load().route_names(), vec!["only"]);
}

#[test]
fn test_dump_routes_and_counts() {
    let router = table();
    router.dump_routes();
    assert_eq!(router.len(), 4);
    assert_eq!(router.collections().len(), 2);
    assert_eq!(
        router.route_names(),
        vec!["blog_post", "blog_page", "root", "catch_all"]
    );
    assert!(Router::default().is_empty());
}
