//! # Matcher Module
//!
//! Resolves a request to route parameters.
//!
//! ## Overview
//!
//! Two matchers implement [`RouteMatcher`]:
//!
//! - [`BasicRouteMatcher`] - built from a literal request path; accepts any
//!   route and tests only its path template.
//! - [`HttpRouteMatcher`] - built from a [`MatchRequest`]; accepts only HTTP
//!   routes, gates on method/hostname/scheme constraints, then tests the path.
//!
//! Both compose a [`MatcherCore`] for compilation (optionally through a shared
//! [`PatternCache`](crate::pattern::PatternCache)) and parameter extraction.
//!
//! ## Matching Flow
//!
//! 1. `matches_collection` - cheap prefix filter on the collection
//! 2. `matches_route` - compile the route, match the path, extract parameters
//!
//! A route that does not match yields `Ok(None)`. Only a malformed route is
//! an error.
//!
//! ## Example
//!
//! ```rust
//! use brrtpath::matcher::{BasicRouteMatcher, RouteMatcher};
//! use brrtpath::route::Route;
//!
//! let route = Route::new("user", "/user/{id}").with_default("id", "0");
//! let params = BasicRouteMatcher::new("/user").matches_route(&route).unwrap().unwrap();
//! assert_eq!(params["id"], "0");
//! ```

mod basic;
mod core;
mod http;
mod request;

pub use self::core::{
    collect_route_parameters, does_property_match, is_matching_route, normalize_path,
    prefix_matches, MatcherCore, ParameterScope, RouteMatcher, RouteParams,
};
pub use self::basic::BasicRouteMatcher;
pub use self::http::HttpRouteMatcher;
pub use self::request::{MatchRequest, RequestContext};
