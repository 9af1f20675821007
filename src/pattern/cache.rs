//! # Compiled Pattern Cache
//!
//! Compiling a route template into a regex is the expensive half of every
//! match attempt. This cache stores compiled routes and shares them across
//! matchers behind an `Arc`, so a route table can be matched repeatedly
//! without recompiling.
//!
//! ## Cache Key
//!
//! Entries are keyed by [`Route::fingerprint`], a SHA-256 digest over every
//! field that influences compilation. Mutating a route (a new rule, a changed
//! default, a different method constraint) changes its fingerprint, so stale
//! patterns are never served for the new definition. Entries are never
//! evicted on their own: [`PatternCache::clear`] drops every entry, and
//! [`watch_routes_with_cache`](crate::hot_reload::watch_routes_with_cache)
//! calls it after swapping in a new table.
//!
//! ## Thread Safety
//!
//! `Arc<RwLock<HashMap>>`: concurrent readers on the hit path, exclusive access
//! only when a new pattern is inserted. A poisoned lock is recovered rather
//! than propagated since entries are immutable once inserted.
//!
//! ## Configuration
//!
//! Disabled via `BRRTPATH_PATTERN_CACHE=off`; a disabled cache compiles on
//! every call, which is the reference behaviour of the matcher.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::{debug, info};

use super::generator::{CompiledRoute, PatternGenerator};
use crate::error::Result;
use crate::route::Route;
use crate::runtime_config::RuntimeConfig;

/// Thread-safe cache of compiled routes keyed by route fingerprint.
#[derive(Debug, Clone)]
pub struct PatternCache {
    cache: Arc<RwLock<HashMap<String, Arc<CompiledRoute>>>>,
    generator: PatternGenerator,
    enabled: bool,
}

impl PatternCache {
    /// Create a cache compiling with `generator`.
    #[must_use]
    pub fn new(generator: PatternGenerator, enabled: bool) -> Self {
        info!(
            enabled = enabled,
            max_placeholders = generator.max_placeholders(),
            "Initializing route pattern cache"
        );
        Self {
            cache: Arc::new(RwLock::new(HashMap::new())),
            generator,
            enabled,
        }
    }

    #[must_use]
    pub fn from_config(config: &RuntimeConfig) -> Self {
        Self::new(PatternGenerator::from_config(config), config.pattern_cache)
    }

    #[inline]
    #[must_use]
    pub fn generator(&self) -> &PatternGenerator {
        &self.generator
    }

    #[inline]
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Return the cached compilation of `route`, compiling it on a miss.
    ///
    /// # Errors
    ///
    /// Compilation errors are returned as-is and never cached.
    pub fn get_or_compile(&self, route: &Route) -> Result<Arc<CompiledRoute>> {
        if !self.enabled {
            return self.generator.compile_route(route).map(Arc::new);
        }

        let key = route.fingerprint();

        {
            let cache = self.cache.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(compiled) = cache.get(&key) {
                debug!(route = %route.name, cache_key = %key, "Route pattern cache hit");
                return Ok(Arc::clone(compiled));
            }
        }

        let compiled = Arc::new(self.generator.compile_route(route)?);
        let mut cache = self.cache.write().unwrap_or_else(PoisonError::into_inner);

        // Another thread may have compiled the same route while we waited.
        if let Some(existing) = cache.get(&key) {
            return Ok(Arc::clone(existing));
        }

        cache.insert(key.clone(), Arc::clone(&compiled));
        debug!(
            route = %route.name,
            cache_key = %key,
            pattern = %compiled.path.as_str(),
            cache_size = cache.len(),
            "Route pattern compiled and cached"
        );
        Ok(compiled)
    }

    /// Compile every route up front, returning how many were compiled.
    ///
    /// # Errors
    ///
    /// Stops at the first route that fails to compile.
    pub fn precompile<'a, I>(&self, routes: I) -> Result<usize>
    where
        I: IntoIterator<Item = &'a Route>,
    {
        let mut compiled = 0;
        for route in routes {
            self.get_or_compile(route)?;
            compiled += 1;
        }
        info!(compiled = compiled, "Route patterns precompiled");
        Ok(compiled)
    }

    /// Number of cached patterns.
    #[must_use]
    pub fn size(&self) -> usize {
        self.cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Drop every cached pattern.
    pub fn clear(&self) {
        let mut cache = self.cache.write().unwrap_or_else(PoisonError::into_inner);
        let dropped = cache.len();
        cache.clear();
        info!(dropped = dropped, "Route pattern cache cleared");
    }
}

impl Default for PatternCache {
    fn default() -> Self {
        Self::new(PatternGenerator::default(), true)
    }
}
