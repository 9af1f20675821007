use arc_swap::ArcSwap;
use std::sync::Arc;
use tracing::info;

use super::core::{RouteLookup, Router};
use crate::route::Route;

/// A router that can be replaced while readers keep matching.
///
/// Reads take an `Arc<Router>` snapshot without locking; [`store`](Self::store)
/// swaps the table atomically, so a request in flight finishes against the
/// snapshot it started with.
#[derive(Debug, Clone)]
pub struct SharedRouter {
    inner: Arc<ArcSwap<Router>>,
}

impl SharedRouter {
    #[must_use]
    pub fn new(router: Router) -> Self {
        Self {
            inner: Arc::new(ArcSwap::from_pointee(router)),
        }
    }

    /// Current routing table.
    #[must_use]
    pub fn load(&self) -> Arc<Router> {
        self.inner.load_full()
    }

    /// Replace the routing table, returning the previous one.
    pub fn store(&self, router: Router) -> Arc<Router> {
        let routes_count = router.len();
        let previous = self.inner.swap(Arc::new(router));
        info!(
            previous_routes = previous.len(),
            routes_count = routes_count,
            "Routing table swapped"
        );
        previous
    }
}

impl Default for SharedRouter {
    fn default() -> Self {
        Self::new(Router::default())
    }
}

impl RouteLookup for SharedRouter {
    fn has_route(&self, name: &str) -> bool {
        self.inner.load().has_route(name)
    }

    fn get_route(&self, name: &str) -> Option<Arc<Route>> {
        self.inner.load().get_route(name)
    }
}
