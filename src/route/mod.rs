//! # Route Module
//!
//! Route data and route supply.
//!
//! - [`Route`] - a named path template with per-placeholder rules and default
//!   values. [`RouteKind`] tags it as a basic path route or an HTTP route
//!   carrying method/hostname/scheme constraints.
//! - [`RouteCollection`] - an ordered group of routes behind an optional
//!   shared path prefix. Order is match priority.
//! - [`RouteSource`] - anything that yields collections; [`FileRouteSource`]
//!   reads them from YAML or JSON.
//!
//! Routes are read-only once registered and are shared as `Arc<Route>` between
//! the router, matchers and match results.

mod load;
mod types;

pub use load::{
    parse_routes, CollectionDef, FileRouteSource, HttpDef, RouteDef, RouteFile, RouteFormat,
    RouteSource,
};
pub use types::{HttpConstraints, Route, RouteCollection, RouteKind};
