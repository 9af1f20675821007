//! # CLI Module
//!
//! Command-line access to the route table.
//!
//! ## Commands
//!
//! ### `match`
//!
//! Resolve a path against a route file:
//!
//! ```bash
//! brrtpath match --routes routes.yaml --path /blog/2014/hello-world
//! brrtpath match --routes routes.yaml --path /pets/42 --method GET --host api.example.com
//! ```
//!
//! ### `build`
//!
//! Build a URI from a route name:
//!
//! ```bash
//! brrtpath build --routes routes.yaml --name blog_post \
//!     --param year=2014 --param slug=hello-world --query lang=en
//! ```
//!
//! ### `routes`
//!
//! List routes in match order:
//!
//! ```bash
//! brrtpath routes --routes routes.yaml
//! ```
//!
//! ### `pattern`
//!
//! Show the regex a template compiles to:
//!
//! ```bash
//! brrtpath pattern --template '/blog/{year}/{slug}' --rule 'year=\d{4}'
//! ```
//!
//! ## Environment
//!
//! `BRRTPATH_BASE_URL`, `BRRTPATH_PATTERN_CACHE` and `BRRTPATH_MAX_PLACEHOLDERS`
//! are read through [`RuntimeConfig`](crate::runtime_config::RuntimeConfig);
//! logging through [`LogConfig`](crate::logging::LogConfig).

mod commands;

#[cfg(test)]
mod tests;

pub use commands::{execute, run_cli, Cli, Commands};
