//! Routines shared by every matcher.
//!
//! The matchers compose a [`MatcherCore`] rather than inheriting behaviour;
//! the free functions here are the building blocks it is made of.

use regex::{Captures, Regex};
use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use crate::error::Result;
use crate::pattern::{CompiledPattern, CompiledRoute, PatternCache, PatternGenerator};
use crate::route::{Route, RouteCollection};

/// Parameters extracted from a matched path, keyed by placeholder name.
pub type RouteParams = HashMap<String, String>;

/// Which placeholder names a successful match reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ParameterScope {
    /// Every placeholder in the template.
    #[default]
    AllPlaceholders,
    /// Only names declared in the route's rules or default values; plain
    /// fallback placeholders are matched but not reported.
    RuleBound,
}

/// Common contract of the basic and HTTP matchers.
///
/// Matchers hold no per-match state: parameters are returned from
/// [`matches_route`](RouteMatcher::matches_route) directly, so a matcher can
/// be shared across threads and reused without leaking earlier results.
pub trait RouteMatcher {
    /// Cheap pre-filter on the collection's shared prefix.
    fn matches_collection(&self, collection: &RouteCollection) -> bool;

    /// Test a single route.
    ///
    /// Returns `Ok(None)` when the route does not match and `Ok(Some(params))`
    /// when it does.
    ///
    /// # Errors
    ///
    /// Returns an error if the route's template or constraints fail to compile.
    fn matches_route(&self, route: &Route) -> Result<Option<RouteParams>>;
}

/// An empty request path is the root.
#[inline]
#[must_use]
pub fn normalize_path(path: &str) -> &str {
    if path.is_empty() {
        "/"
    } else {
        path
    }
}

/// A collection without a prefix passes every path; otherwise a plain
/// `starts_with` test.
#[inline]
#[must_use]
pub fn prefix_matches(prefix: Option<&str>, path: &str) -> bool {
    prefix.map_or(true, |p| path.starts_with(p))
}

/// Run `pattern` against `path`; the captures are the working parameter set
/// for this call only.
#[inline]
#[must_use]
pub fn is_matching_route<'h>(path: &'h str, pattern: &CompiledPattern) -> Option<Captures<'h>> {
    pattern.captures(path)
}

/// A missing constraint matches anything; otherwise the request property
/// must match the compiled `^(constraint)$` regex.
#[inline]
#[must_use]
pub fn does_property_match(constraint: Option<&Regex>, value: &str) -> bool {
    constraint.map_or(true, |re| re.is_match(value))
}

/// Resolve reported parameter values from a successful match.
///
/// A present, non-empty capture wins; otherwise the route's default is used;
/// a name with neither is left out.
#[must_use]
pub fn collect_route_parameters(
    route: &Route,
    pattern: &CompiledPattern,
    captures: &Captures<'_>,
    scope: ParameterScope,
) -> RouteParams {
    let resolve = |name: &str| -> Option<String> {
        captures
            .name(name)
            .map(|m| m.as_str())
            .filter(|v| !v.is_empty())
            .or_else(|| route.default_value(name))
            .map(str::to_string)
    };

    match scope {
        ParameterScope::AllPlaceholders => pattern
            .placeholders()
            .iter()
            .filter_map(|name| resolve(name.as_str()).map(|v| (name.clone(), v)))
            .collect(),
        ParameterScope::RuleBound => route
            .rules
            .keys()
            .chain(route.default_values.keys())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .filter_map(|name| resolve(name.as_str()).map(|v| (name.clone(), v)))
            .collect(),
    }
}

/// Compilation and extraction shared by both matchers.
#[derive(Debug, Clone, Default)]
pub struct MatcherCore {
    generator: PatternGenerator,
    cache: Option<PatternCache>,
    scope: ParameterScope,
}

impl MatcherCore {
    #[must_use]
    pub fn new(generator: PatternGenerator) -> Self {
        Self {
            generator,
            cache: None,
            scope: ParameterScope::default(),
        }
    }

    /// Compile through `cache` instead of compiling on every call.
    ///
    /// Replaces the current generator with the cache's own, so the cache's
    /// placeholder bound applies whatever generator was set before.
    #[must_use]
    pub fn with_cache(mut self, cache: PatternCache) -> Self {
        self.generator = *cache.generator();
        self.cache = Some(cache);
        self
    }

    #[must_use]
    pub fn with_scope(mut self, scope: ParameterScope) -> Self {
        self.scope = scope;
        self
    }

    #[inline]
    #[must_use]
    pub fn scope(&self) -> ParameterScope {
        self.scope
    }

    /// Compile `route`, through the cache when one is configured.
    ///
    /// # Errors
    ///
    /// Propagates generator failures.
    pub fn compile(&self, route: &Route) -> Result<Arc<CompiledRoute>> {
        match &self.cache {
            Some(cache) => cache.get_or_compile(route),
            None => self.generator.compile_route(route).map(Arc::new),
        }
    }

    /// Match `path` against an already compiled route.
    #[must_use]
    pub fn match_path(
        &self,
        route: &Route,
        compiled: &CompiledRoute,
        path: &str,
    ) -> Option<RouteParams> {
        let path = normalize_path(path);
        is_matching_route(path, &compiled.path)
            .map(|caps| collect_route_parameters(route, &compiled.path, &caps, self.scope))
    }
}
