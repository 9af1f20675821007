//! # Pattern Module
//!
//! Compiles route path templates into anchored, case-insensitive regexes.
//!
//! ## Template Syntax
//!
//! A template is literal path text mixed with `{name}` placeholders:
//!
//! - A placeholder with a rule captures text matching that rule.
//! - A placeholder without a rule captures anything up to the next `/`.
//! - A placeholder with a default value is optional: its whole `/segment` may
//!   be absent, and if present its content may be empty.
//!
//! ## Pattern Format
//!
//! | Template piece               | Pattern piece                    |
//! |------------------------------|----------------------------------|
//! | `/{id}`                      | `/(?<id>[^/]+)`                  |
//! | `/{id}` + rule `\d+`         | `/(?<id>\d+)`                    |
//! | `/{id}` + rule + default     | `(?:/(?<id>(?:\d+)?))?`          |
//! | `/{id}` + default only       | `(?:/(?<id>(?:[^/]+)?))?`        |
//!
//! The whole pattern is anchored as `^/...$`.
//!
//! Literal template text is copied into the pattern unescaped, so regex
//! metacharacters keep their meaning: `/feed.{format}` also matches
//! `/feedXrss`. Built URIs copy the same text verbatim, so a template meant
//! to be built should keep its literals free of metacharacters.
//!
//! ## Example
//!
//! ```rust
//! use brrtpath::pattern::PatternGenerator;
//! use brrtpath::route::Route;
//!
//! let route = Route::new("post", "/blog/{year}/{slug}").with_rule("year", r"\d{4}");
//! let pattern = PatternGenerator::new().generate(&route).unwrap();
//! assert_eq!(pattern, r"^/blog/(?<year>\d{4})/(?<slug>[^/]+)$");
//! ```

mod cache;
mod generator;
pub mod template;

pub use cache::PatternCache;
pub use generator::{
    CompiledPattern, CompiledRoute, PatternGenerator, DEFAULT_MAX_PLACEHOLDERS, FALLBACK_RULE,
};
