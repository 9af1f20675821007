use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

use crate::error::Result;
use crate::matcher::{BasicRouteMatcher, RouteMatcher, RouteParams};
use crate::route::{Route, RouteCollection, RouteSource};

/// Name-based route lookup, as needed by reverse routing.
pub trait RouteLookup {
    fn has_route(&self, name: &str) -> bool;
    fn get_route(&self, name: &str) -> Option<Arc<Route>>;
}

/// Result of resolving a request against the route table.
#[derive(Debug, Clone)]
pub struct RouteMatch {
    /// The matched route (shared with the table)
    pub route: Arc<Route>,
    /// Extracted path parameters (e.g., `{id}` → `{"id": "123"}`)
    pub params: RouteParams,
    /// Prefix of the collection the route was found in
    pub collection: Option<String>,
}

impl RouteMatch {
    #[inline]
    #[must_use]
    pub fn route_name(&self) -> &str {
        &self.route.name
    }

    #[inline]
    #[must_use]
    pub fn get_param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }
}

/// Ordered route table.
///
/// Collections are tried in registration order and routes within a collection
/// in insertion order; the first match wins.
#[derive(Debug, Clone, Default)]
pub struct Router {
    collections: Vec<RouteCollection>,
    by_name: HashMap<String, Arc<Route>>,
}

impl Router {
    /// Build a router from collections in priority order.
    ///
    /// When two routes share a name, lookups by name return the first one
    /// registered.
    #[must_use]
    pub fn new(collections: Vec<RouteCollection>) -> Self {
        let mut by_name = HashMap::new();
        for route in collections.iter().flat_map(RouteCollection::iter) {
            if by_name.contains_key(&route.name) {
                warn!(
                    route = %route.name,
                    path = %route.path,
                    "Duplicate route name; keeping the first registration for lookups"
                );
                continue;
            }
            by_name.insert(route.name.clone(), Arc::clone(route));
        }

        let routes_summary: Vec<String> = collections
            .iter()
            .flat_map(RouteCollection::iter)
            .take(10)
            .map(|r| format!("{} {}", r.name, r.path))
            .collect();

        info!(
            collections_count = collections.len(),
            routes_count = by_name.len(),
            routes_summary = ?routes_summary,
            "Routing table loaded"
        );

        Self {
            collections,
            by_name,
        }
    }

    /// Load collections from `source` and build a router.
    ///
    /// # Errors
    ///
    /// Propagates the source's error.
    pub fn from_source<S: RouteSource + ?Sized>(source: &S) -> anyhow::Result<Self> {
        Ok(Self::new(source.load()?))
    }

    #[must_use]
    pub fn collections(&self) -> &[RouteCollection] {
        &self.collections
    }

    /// All routes in match-priority order.
    pub fn routes(&self) -> impl Iterator<Item = &Arc<Route>> {
        self.collections.iter().flat_map(RouteCollection::iter)
    }

    /// Route names in match-priority order.
    #[must_use]
    pub fn route_names(&self) -> Vec<&str> {
        self.routes().map(|r| r.name.as_str()).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.collections.iter().map(RouteCollection::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Print all registered routes to stdout.
    pub fn dump_routes(&self) {
        println!(
            "[routes] collections={} count={}",
            self.collections.len(),
            self.len()
        );
        for collection in &self.collections {
            let prefix = collection.prefix().unwrap_or("*");
            for route in collection.iter() {
                println!("[route] {prefix} {} -> {}", route.path, route.name);
            }
        }
    }

    /// Find the first route accepted by `matcher`.
    ///
    /// # Errors
    ///
    /// Returns the first compilation error hit while walking the table; a
    /// malformed route is never silently skipped.
    pub fn resolve<M: RouteMatcher + ?Sized>(&self, matcher: &M) -> Result<Option<RouteMatch>> {
        let start = Instant::now();

        for collection in &self.collections {
            if !matcher.matches_collection(collection) {
                debug!(prefix = ?collection.prefix(), "Collection skipped by prefix");
                continue;
            }
            for route in collection.iter() {
                if let Some(params) = matcher.matches_route(route)? {
                    let elapsed = start.elapsed();
                    if elapsed > Duration::from_millis(1) {
                        warn!(
                            route = %route.name,
                            params = ?params,
                            duration_us = elapsed.as_micros(),
                            "Slow route matching detected"
                        );
                    } else {
                        debug!(
                            route = %route.name,
                            params = ?params,
                            duration_us = elapsed.as_micros(),
                            "Route matched"
                        );
                    }
                    return Ok(Some(RouteMatch {
                        route: Arc::clone(route),
                        params,
                        collection: collection.path.clone(),
                    }));
                }
            }
        }

        debug!(duration_us = start.elapsed().as_micros(), "No route matched");
        Ok(None)
    }

    /// Resolve a bare path with an uncached [`BasicRouteMatcher`].
    ///
    /// # Errors
    ///
    /// See [`resolve`](Self::resolve).
    pub fn resolve_path(&self, path: &str) -> Result<Option<RouteMatch>> {
        self.resolve(&BasicRouteMatcher::new(path))
    }
}

impl RouteLookup for Router {
    fn has_route(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    fn get_route(&self, name: &str) -> Option<Arc<Route>> {
        self.by_name.get(name).cloned()
    }
}

impl<T: RouteLookup + ?Sized> RouteLookup for Arc<T> {
    fn has_route(&self, name: &str) -> bool {
        (**self).has_route(name)
    }

    fn get_route(&self, name: &str) -> Option<Arc<Route>> {
        (**self).get_route(name)
    }
}
