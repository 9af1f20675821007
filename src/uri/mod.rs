//! # URI Module
//!
//! Reverse routing: turn a route name plus parameter values back into a URI.
//!
//! The builder substitutes each `{name}` placeholder with the caller's value,
//! falling back to the route's default. The resulting path is then checked
//! against the route's own compiled pattern, so values that violate a rule
//! are rejected instead of producing a URI that would not route.
//!
//! ## Example
//!
//! ```rust
//! use std::collections::HashMap;
//! use brrtpath::route::{Route, RouteCollection};
//! use brrtpath::router::Router;
//! use brrtpath::uri::UriBuilder;
//!
//! let router = Router::new(vec![RouteCollection::unprefixed()
//!     .with_route(Route::new("user", "/user/{id}").with_default("id", "0"))]);
//! let builder = UriBuilder::new(router).with_base_url("https://example.com");
//!
//! let mut params = HashMap::new();
//! params.insert("id".to_string(), "42".to_string());
//! assert_eq!(
//!     builder.build("user", &params, Some("tab=posts")).unwrap(),
//!     "https://example.com/user/42?tab=posts"
//! );
//! ```

mod builder;

pub use self::builder::UriBuilder;
