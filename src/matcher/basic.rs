use tracing::debug;

use super::core::{
    normalize_path, prefix_matches, MatcherCore, ParameterScope, RouteMatcher, RouteParams,
};
use crate::error::Result;
use crate::pattern::{PatternCache, PatternGenerator};
use crate::route::{Route, RouteCollection};

/// Matches routes against a literal, already resolved request path.
///
/// Any route kind is accepted; HTTP constraints are ignored since there is no
/// request to test them against.
#[derive(Debug, Clone)]
pub struct BasicRouteMatcher {
    matching_path: String,
    core: MatcherCore,
}

impl BasicRouteMatcher {
    pub fn new(matching_path: impl Into<String>) -> Self {
        Self {
            matching_path: matching_path.into(),
            core: MatcherCore::default(),
        }
    }

    /// Compile with `generator`; drops a cache set earlier.
    #[must_use]
    pub fn with_generator(mut self, generator: PatternGenerator) -> Self {
        self.core = MatcherCore::new(generator).with_scope(self.core.scope());
        self
    }

    /// Compile through `cache`; its generator replaces one set earlier.
    #[must_use]
    pub fn with_cache(mut self, cache: PatternCache) -> Self {
        self.core = self.core.with_cache(cache);
        self
    }

    #[must_use]
    pub fn with_scope(mut self, scope: ParameterScope) -> Self {
        self.core = self.core.with_scope(scope);
        self
    }

    #[inline]
    #[must_use]
    pub fn matching_path(&self) -> &str {
        &self.matching_path
    }
}

impl RouteMatcher for BasicRouteMatcher {
    fn matches_collection(&self, collection: &RouteCollection) -> bool {
        prefix_matches(collection.prefix(), normalize_path(&self.matching_path))
    }

    fn matches_route(&self, route: &Route) -> Result<Option<RouteParams>> {
        let compiled = self.core.compile(route)?;
        let params = self.core.match_path(route, &compiled, &self.matching_path);
        debug!(
            route = %route.name,
            path = %self.matching_path,
            pattern = %compiled.path.as_str(),
            matched = params.is_some(),
            "Basic route match attempt"
        );
        Ok(params)
    }
}
