use std::collections::HashMap;
use tracing::debug;
use url::form_urlencoded;

use crate::error::{Result, RoutingError};
use crate::pattern::template::{self, Token};
use crate::pattern::{CompiledPattern, PatternCache, PatternGenerator};
use crate::router::RouteLookup;
use crate::runtime_config::RuntimeConfig;

/// Builds URIs from a route name and parameter values.
///
/// Every path it emits is re-checked against the route's own pattern, so a
/// built URI always resolves back to the route it was built from.
#[derive(Debug, Clone)]
pub struct UriBuilder<L> {
    lookup: L,
    generator: PatternGenerator,
    cache: Option<PatternCache>,
    base_url: String,
}

impl<L: RouteLookup> UriBuilder<L> {
    pub fn new(lookup: L) -> Self {
        Self {
            lookup,
            generator: PatternGenerator::default(),
            cache: None,
            base_url: String::new(),
        }
    }

    /// Builder configured from [`RuntimeConfig`]: base URL, placeholder bound
    /// and pattern cache.
    pub fn from_config(lookup: L, config: &RuntimeConfig) -> Self {
        let builder = Self::new(lookup)
            .with_generator(PatternGenerator::from_config(config))
            .with_base_url(config.base_url.as_str());
        if config.pattern_cache {
            builder.with_cache(PatternCache::from_config(config))
        } else {
            builder
        }
    }

    /// Prefix for every built URI; a trailing `/` is dropped.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl AsRef<str>) -> Self {
        self.base_url = base_url.as_ref().trim_end_matches('/').to_string();
        self
    }

    /// Compile with `generator` when no cache is set; a cache always
    /// compiles with its own generator.
    #[must_use]
    pub fn with_generator(mut self, generator: PatternGenerator) -> Self {
        self.generator = generator;
        self
    }

    /// Validate built paths through a shared cache.
    ///
    /// Replaces any generator set earlier with the cache's own, so the
    /// cache's placeholder bound applies from here on.
    #[must_use]
    pub fn with_cache(mut self, cache: PatternCache) -> Self {
        self.generator = *cache.generator();
        self.cache = Some(cache);
        self
    }

    #[inline]
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn lookup(&self) -> &L {
        &self.lookup
    }

    /// Build the URI for `route_name`.
    ///
    /// Caller-supplied parameters take precedence over the route's defaults;
    /// parameters that do not appear in the template are ignored. A supplied
    /// query string is appended after a single `?`, whatever leading `?`
    /// characters it came with.
    ///
    /// # Errors
    ///
    /// * [`RoutingError::RouteNotFound`] if the name is unknown
    /// * [`RoutingError::RequiredParametersMissing`] if a placeholder has no value
    /// * [`RoutingError::PathNotValid`] if the route's pattern rejects the result
    /// * any compiler error for a malformed route
    pub fn build(
        &self,
        route_name: &str,
        path_parameters: &HashMap<String, String>,
        query_string: Option<&str>,
    ) -> Result<String> {
        let route = self
            .lookup
            .get_route(route_name)
            .ok_or_else(|| RoutingError::RouteNotFound {
                route: route_name.to_string(),
            })?;

        let tokens = template::tokenize(&route.path).map_err(|_| RoutingError::TemplateMalformed {
            route: route.name.clone(),
            template: route.path.clone(),
        })?;

        // The generator anchors every pattern at a single leading `/`.
        let mut expected_path = String::with_capacity(route.path.len() + 16);
        expected_path.push('/');
        let mut substituted = Vec::new();
        let mut missing = Vec::new();
        for (i, token) in tokens.into_iter().enumerate() {
            match token {
                Token::Literal(text) if i == 0 => {
                    expected_path.push_str(text.trim_start_matches('/'));
                }
                Token::Literal(text) => expected_path.push_str(text),
                Token::Placeholder(name) => {
                    match path_parameters
                        .get(name)
                        .map(String::as_str)
                        .or_else(|| route.default_value(name))
                    {
                        Some(value) => {
                            expected_path.push_str(value);
                            substituted.push((name, value));
                        }
                        None => missing.push(name.to_string()),
                    }
                }
            }
        }

        if !missing.is_empty() {
            return Err(RoutingError::RequiredParametersMissing {
                route: route.name.clone(),
                missing,
            });
        }

        // Matching the built path must hand back the values it was built from.
        let round_trips = |pattern: &CompiledPattern| {
            pattern.captures(&expected_path).is_some_and(|caps| {
                substituted.iter().all(|&(name, value)| {
                    value.is_empty() || caps.name(name).map(|m| m.as_str()) == Some(value)
                })
            })
        };
        let valid = match &self.cache {
            Some(cache) => round_trips(&cache.get_or_compile(&route)?.path),
            None => round_trips(&self.generator.compile(&route)?),
        };
        if !valid {
            return Err(RoutingError::PathNotValid {
                route: route.name.clone(),
                path: expected_path,
            });
        }

        let query = query_string
            .map(|q| q.trim_start_matches('?'))
            .filter(|q| !q.is_empty());
        let mut uri = String::with_capacity(
            self.base_url.len() + expected_path.len() + query.map_or(0, |q| q.len() + 1),
        );
        uri.push_str(&self.base_url);
        uri.push_str(&expected_path);
        if let Some(query) = query {
            uri.push('?');
            uri.push_str(query);
        }

        debug!(route = %route.name, uri = %uri, "URI built");
        Ok(uri)
    }

    /// Build the URI for `route_name` with a form-encoded query string.
    ///
    /// # Errors
    ///
    /// Same as [`build`](Self::build).
    pub fn build_with_query_pairs<I, K, V>(
        &self,
        route_name: &str,
        path_parameters: &HashMap<String, String>,
        query_pairs: I,
    ) -> Result<String>
    where
        I: IntoIterator,
        I::Item: std::borrow::Borrow<(K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let query = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(query_pairs)
            .finish();
        self.build(route_name, path_parameters, Some(&query))
    }
}
