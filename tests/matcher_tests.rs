use brrtpath::matcher::{
    prefix_matches, BasicRouteMatcher, HttpRouteMatcher, ParameterScope, RequestContext,
    RouteMatcher, RouteParams,
};
use brrtpath::pattern::PatternCache;
use brrtpath::route::{Route, RouteCollection};
use brrtpath::RoutingError;
use http::Method;

fn params(pairs: &[(&str, &str)]) -> RouteParams {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn blog_post() -> Route {
    Route::new("blog_post", "/blog/{year}/{slug}").with_rule("year", r"\d{4}")
}

#[test]
fn test_optional_parameter_omission() {
    let route = Route::new("user", "/user/{id}").with_default("id", "0");

    let matched = BasicRouteMatcher::new("/user").matches_route(&route).unwrap();
    assert_eq!(matched, Some(params(&[("id", "0")])));

    let matched = BasicRouteMatcher::new("/user/42").matches_route(&route).unwrap();
    assert_eq!(matched, Some(params(&[("id", "42")])));

    // present but empty segment falls back to the default
    let matched = BasicRouteMatcher::new("/user/").matches_route(&route).unwrap();
    assert_eq!(matched, Some(params(&[("id", "0")])));
}

#[test]
fn test_rule_enforcement() {
    let route = blog_post();

    let matched = BasicRouteMatcher::new("/blog/2014/hello-world")
        .matches_route(&route)
        .unwrap();
    assert_eq!(
        matched,
        Some(params(&[("year", "2014"), ("slug", "hello-world")]))
    );

    assert!(BasicRouteMatcher::new("/blog/abc/hello-world")
        .matches_route(&route)
        .unwrap()
        .is_none());
    assert!(BasicRouteMatcher::new("/blog/2014/hello/world")
        .matches_route(&route)
        .unwrap()
        .is_none());
}

#[test]
fn test_rule_bound_scope_reports_only_declared_names() {
    let matcher = BasicRouteMatcher::new("/blog/2014/hello-world").with_scope(ParameterScope::RuleBound);
    let matched = matcher.matches_route(&blog_post()).unwrap();
    assert_eq!(matched, Some(params(&[("year", "2014")])));
}

#[test]
fn test_prefix_filtering() {
    let blog = RouteCollection::with_prefix("/blog");
    let open = RouteCollection::unprefixed();

    assert!(BasicRouteMatcher::new("/blog/2014/x").matches_collection(&blog));
    assert!(!BasicRouteMatcher::new("/news/1").matches_collection(&blog));
    assert!(BasicRouteMatcher::new("/news/1").matches_collection(&open));

    assert!(prefix_matches(None, ""));
    assert!(prefix_matches(Some("/blog"), "/blogroll"));
    assert!(!prefix_matches(Some("/blog"), "/Blog"));
}

#[test]
fn test_http_constraint_gating() {
    let route = Route::http("items", "/items/{id}").with_method("GET|POST");

    for (method, expected) in [("GET", true), ("post", true), ("DELETE", false), ("GETX", false)] {
        let request = RequestContext::new(method, "/items/1", "example.com", "https");
        let matched = HttpRouteMatcher::new(request).matches_route(&route).unwrap();
        assert_eq!(matched.is_some(), expected, "method {method}");
    }
}

#[test]
fn test_malformed_http_route_errors_whatever_the_method() {
    let route = Route::http("broken", "/items/{id").with_method("GET");
    for method in ["GET", "DELETE"] {
        let request = RequestContext::new(method, "/items/1", "example.com", "https");
        let err = HttpRouteMatcher::new(request).matches_route(&route).unwrap_err();
        assert!(matches!(err, RoutingError::TemplateMalformed { .. }));
    }
}

#[test]
fn test_http_matcher_with_http_request() {
    let route = Route::http("pet", "/pets/{id}")
        .with_rule("id", r"\d+")
        .with_hostname(r"(api|www)\.example\.com")
        .with_scheme("https");

    let request = http::Request::builder()
        .method(Method::GET)
        .uri("https://API.example.com/pets/7?verbose=1")
        .body(())
        .unwrap();
    let matched = HttpRouteMatcher::new(request).matches_route(&route).unwrap();
    assert_eq!(matched, Some(params(&[("id", "7")])));

    let request = RequestContext::parse(&Method::GET, "http://api.example.com/pets/7").unwrap();
    assert!(HttpRouteMatcher::new(request)
        .matches_route(&route)
        .unwrap()
        .is_none());
}

#[test]
fn test_basic_routes_never_match_http_requests() {
    let route = Route::new("plain", "/plain");
    let request = RequestContext::new("GET", "/plain", "example.com", "http");
    assert!(HttpRouteMatcher::new(request)
        .matches_route(&route)
        .unwrap()
        .is_none());
    assert!(BasicRouteMatcher::new("/plain")
        .matches_route(&route)
        .unwrap()
        .is_some());
}

#[test]
fn test_cached_matching_follows_route_changes() {
    let cache = PatternCache::default();
    let route = Route::new("item", "/items/{id}").with_rule("id", r"\d+");

    let matcher = BasicRouteMatcher::new("/items/abc").with_cache(cache.clone());
    assert!(matcher.matches_route(&route).unwrap().is_none());

    let relaxed = route.clone().with_rule("id", "[a-z]+");
    assert!(matcher.matches_route(&relaxed).unwrap().is_some());
    assert_eq!(cache.size(), 2);
}

#[test]
fn test_invalid_rule_is_an_error() {
    let route = Route::new("bad", "/bad/{id}").with_rule("id", "(unclosed");
    let err = BasicRouteMatcher::new("/bad/1").matches_route(&route).unwrap_err();
    assert!(matches!(err, RoutingError::InvalidPattern { ref route, .. } if route == "bad"));
}
