//! # Router Module
//!
//! The route table: ordered collections of routes, name lookup for reverse
//! routing, and request resolution.
//!
//! ## Overview
//!
//! The router is responsible for:
//! - Holding route collections in match-priority order
//! - Resolving a request to the first matching route via a [`RouteMatcher`](crate::matcher::RouteMatcher)
//! - Looking routes up by name ([`RouteLookup`]) for the URI builder
//! - Swapping in a reloaded table without blocking readers ([`SharedRouter`])
//!
//! ## Resolution
//!
//! 1. Each collection is offered to the matcher's prefix filter.
//! 2. Routes of accepted collections are tried in insertion order.
//! 3. The first route returning parameters wins; nothing is re-sorted.
//!
//! ## Example
//!
//! ```rust
//! use brrtpath::matcher::{HttpRouteMatcher, RequestContext};
//! use brrtpath::route::{Route, RouteCollection};
//! use brrtpath::router::Router;
//!
//! let collection = RouteCollection::with_prefix("/pets")
//!     .with_route(Route::http("get_pet", "/pets/{id}").with_method("GET").with_rule("id", r"\d+"));
//! let router = Router::new(vec![collection]);
//!
//! let request = RequestContext::new("GET", "/pets/42", "localhost", "http");
//! let matched = router.resolve(&HttpRouteMatcher::new(request)).unwrap().unwrap();
//! assert_eq!(matched.route_name(), "get_pet");
//! assert_eq!(matched.get_param("id"), Some("42"));
//! ```

mod core;
mod shared;
#[cfg(test)]
mod tests;

pub use self::core::{RouteLookup, RouteMatch, Router};
pub use self::shared::SharedRouter;
