use tracing::debug;

use super::core::{
    does_property_match, normalize_path, prefix_matches, MatcherCore, ParameterScope, RouteMatcher,
    RouteParams,
};
use super::request::MatchRequest;
use crate::error::Result;
use crate::pattern::{PatternCache, PatternGenerator};
use crate::route::{Route, RouteCollection, RouteKind};

/// Matches HTTP routes against a request's method, host, scheme and path.
///
/// Basic routes never match. Each non-null constraint of an HTTP route is
/// tested as a case-insensitive `^(constraint)$` regex against the matching
/// request property; path matching only runs once all three pass.
#[derive(Debug, Clone)]
pub struct HttpRouteMatcher<R> {
    request: R,
    core: MatcherCore,
}

impl<R: MatchRequest> HttpRouteMatcher<R> {
    pub fn new(request: R) -> Self {
        Self {
            request,
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
    pub fn request(&self) -> &R {
        &self.request
    }
}

impl<R: MatchRequest> RouteMatcher for HttpRouteMatcher<R> {
    fn matches_collection(&self, collection: &RouteCollection) -> bool {
        prefix_matches(collection.prefix(), normalize_path(self.request.path()))
    }

    fn matches_route(&self, route: &Route) -> Result<Option<RouteParams>> {
        if let RouteKind::Basic = route.kind {
            return Ok(None);
        }

        let compiled = self.core.compile(route)?;
        let req = &self.request;
        let constraints_pass = does_property_match(compiled.method.as_ref(), req.method())
            && does_property_match(compiled.hostname.as_ref(), req.hostname())
            && does_property_match(compiled.scheme.as_ref(), req.scheme());

        if !constraints_pass {
            debug!(
                route = %route.name,
                method = %req.method(),
                hostname = %req.hostname(),
                scheme = %req.scheme(),
                "HTTP constraints rejected route"
            );
            return Ok(None);
        }

        let params = self.core.match_path(route, &compiled, req.path());
        debug!(
            route = %route.name,
            method = %req.method(),
            path = %req.path(),
            pattern = %compiled.path.as_str(),
            matched = params.is_some(),
            "HTTP route match attempt"
        );
        Ok(params)
    }
}
