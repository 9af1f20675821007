//! # brrtpath
//!
//! **brrtpath** is a bidirectional route-matching engine: it resolves request
//! paths to named routes with extracted parameters, and builds URIs back from
//! a route name plus parameter values.
//!
//! ## Overview
//!
//! A route is a named path template such as `/blog/{year}/{slug}` with an
//! optional regex rule and default value per placeholder. Templates compile
//! into anchored, case-insensitive regexes. HTTP routes additionally carry
//! method, hostname and scheme constraints.
//!
//! ## Architecture
//!
//! - **[`route`]** - Route, collection and route-file data model
//! - **[`pattern`]** - Template tokenizer, regex generator and compiled-pattern cache
//! - **[`matcher`]** - Basic (path only) and HTTP (constraints + path) matchers
//! - **[`router`]** - Ordered route table, resolution and name lookup
//! - **[`uri`]** - Reverse routing: route name + parameters to URI
//! - **[`hot_reload`]** - Live reloading of a route file
//! - **[`runtime_config`]** / **[`logging`]** - Environment-driven configuration
//! - **[`cli`]** - The `brrtpath` command
//!
//! ### Request Matching Flow
//!
//! ```mermaid
//! sequenceDiagram
//!     participant Caller
//!     participant Router
//!     participant Matcher as RouteMatcher
//!     participant Cache as PatternCache
//!     participant Gen as PatternGenerator
//!
//!     Caller->>Router: resolve(&matcher)
//!     loop each collection (registration order)
//!         Router->>Matcher: matches_collection(collection)
//!         loop each route (insertion order)
//!             Router->>Matcher: matches_route(route)
//!             Matcher->>Cache: get_or_compile(route)
//!             Cache->>Gen: compile_route(route) on miss
//!             Gen-->>Cache: CompiledRoute
//!             Matcher-->>Router: Some(params) / None
//!         end
//!     end
//!     Router-->>Caller: Option<RouteMatch>
//! ```
//!
//! ### URI Building Flow
//!
//! ```mermaid
//! sequenceDiagram
//!     participant Caller
//!     participant Builder as UriBuilder
//!     participant Lookup as RouteLookup
//!     participant Gen as PatternGenerator
//!
//!     Caller->>Builder: build(name, params, query)
//!     Builder->>Lookup: get_route(name)
//!     Builder->>Builder: substitute placeholders (params, then defaults)
//!     Builder->>Gen: compile(route)
//!     Builder->>Builder: check path against pattern
//!     Builder-->>Caller: base_url + path + ?query
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use std::collections::HashMap;
//! use brrtpath::route::{Route, RouteCollection};
//! use brrtpath::router::Router;
//! use brrtpath::uri::UriBuilder;
//!
//! let blog = RouteCollection::with_prefix("/blog")
//!     .with_route(Route::new("blog_post", "/blog/{year}/{slug}").with_rule("year", r"\d{4}"));
//! let router = Router::new(vec![blog]);
//!
//! let matched = router.resolve_path("/blog/2014/hello-world").unwrap().unwrap();
//! assert_eq!(matched.route_name(), "blog_post");
//! assert_eq!(matched.get_param("year"), Some("2014"));
//!
//! let builder = UriBuilder::new(router);
//! let uri = builder.build("blog_post", &matched.params, None).unwrap();
//! assert_eq!(uri, "/blog/2014/hello-world");
//! ```
//!
//! ## Errors
//!
//! All library operations return [`RoutingError`]. A malformed route is
//! always an error, never a silent non-match.

pub mod cli;
pub mod error;
pub mod hot_reload;
pub mod logging;
pub mod matcher;
pub mod pattern;
pub mod route;
pub mod router;
pub mod runtime_config;
pub mod uri;

pub use error::{Result, RoutingError};
pub use matcher::{BasicRouteMatcher, HttpRouteMatcher, RequestContext, RouteMatcher, RouteParams};
pub use pattern::{PatternCache, PatternGenerator};
pub use route::{Route, RouteCollection, RouteKind};
pub use router::{RouteLookup, RouteMatch, Router, SharedRouter};
pub use uri::UriBuilder;
