use sha2::{Digest, Sha256};
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::pattern::template;

/// Method/hostname/scheme constraints carried by an HTTP route.
///
/// Each constraint is a regex fragment tested as `^(constraint)$`
/// case-insensitively; `None` matches anything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HttpConstraints {
    pub method: Option<String>,
    pub hostname: Option<String>,
    pub scheme: Option<String>,
}

/// Discriminates plain path routes from HTTP routes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RouteKind {
    #[default]
    Basic,
    Http(HttpConstraints),
}

/// A named path template with per-placeholder rules and defaults.
///
/// A placeholder with a default value is optional: its `/segment` may be
/// absent from a matching path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub name: String,
    pub path: String,
    /// Regex fragment per placeholder name
    pub rules: BTreeMap<String, String>,
    /// Fallback value per placeholder name
    pub default_values: BTreeMap<String, String>,
    pub kind: RouteKind,
}

impl Route {
    /// Create a basic route with no rules or defaults.
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            rules: BTreeMap::new(),
            default_values: BTreeMap::new(),
            kind: RouteKind::Basic,
        }
    }

    /// Create an HTTP route that initially accepts any method, host and scheme.
    pub fn http(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            kind: RouteKind::Http(HttpConstraints::default()),
            ..Self::new(name, path)
        }
    }

    #[must_use]
    pub fn with_rule(mut self, name: impl Into<String>, rule: impl Into<String>) -> Self {
        self.rules.insert(name.into(), rule.into());
        self
    }

    #[must_use]
    pub fn with_default(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_values.insert(name.into(), value.into());
        self
    }

    /// Constrain the request method. Turns a basic route into an HTTP route.
    #[must_use]
    pub fn with_method(mut self, method: impl Into<String>) -> Self {
        let method = method.into();
        self.update_http(|c| c.method = Some(method));
        self
    }

    /// Constrain the request hostname. Turns a basic route into an HTTP route.
    #[must_use]
    pub fn with_hostname(mut self, hostname: impl Into<String>) -> Self {
        let hostname = hostname.into();
        self.update_http(|c| c.hostname = Some(hostname));
        self
    }

    /// Constrain the request scheme. Turns a basic route into an HTTP route.
    #[must_use]
    pub fn with_scheme(mut self, scheme: impl Into<String>) -> Self {
        let scheme = scheme.into();
        self.update_http(|c| c.scheme = Some(scheme));
        self
    }

    fn update_http(&mut self, apply: impl FnOnce(&mut HttpConstraints)) {
        let mut constraints = match std::mem::take(&mut self.kind) {
            RouteKind::Http(constraints) => constraints,
            RouteKind::Basic => HttpConstraints::default(),
        };
        apply(&mut constraints);
        self.kind = RouteKind::Http(constraints);
    }

    /// HTTP constraints, or `None` for a basic route.
    #[inline]
    #[must_use]
    pub fn http_constraints(&self) -> Option<&HttpConstraints> {
        match &self.kind {
            RouteKind::Http(constraints) => Some(constraints),
            RouteKind::Basic => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn is_http(&self) -> bool {
        matches!(self.kind, RouteKind::Http(_))
    }

    #[inline]
    #[must_use]
    pub fn rule(&self, name: &str) -> Option<&str> {
        self.rules.get(name).map(String::as_str)
    }

    #[inline]
    #[must_use]
    pub fn default_value(&self, name: &str) -> Option<&str> {
        self.default_values.get(name).map(String::as_str)
    }

    /// Placeholder names in template order.
    #[must_use]
    pub fn placeholders(&self) -> Vec<&str> {
        template::placeholder_names(&self.path)
    }

    /// Content hash identifying this exact route definition.
    ///
    /// Any change to the name, template, rules, defaults or HTTP constraints
    /// produces a different fingerprint, so caches keyed on it never serve a
    /// pattern compiled from an older definition.
    #[must_use]
    pub fn fingerprint(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.name.as_bytes());
        hasher.update([0]);
        hasher.update(self.path.as_bytes());
        hasher.update([0]);
        for (section, map) in [(b'r', &self.rules), (b'd', &self.default_values)] {
            for (key, value) in map {
                hasher.update([section]);
                hasher.update(key.as_bytes());
                hasher.update([0]);
                hasher.update(value.as_bytes());
                hasher.update([0]);
            }
        }
        if let Some(http) = self.http_constraints() {
            for constraint in [&http.method, &http.hostname, &http.scheme] {
                match constraint {
                    Some(value) => {
                        hasher.update([b'h']);
                        hasher.update(value.as_bytes());
                    }
                    None => hasher.update([b'-']),
                }
                hasher.update([0]);
            }
        }
        format!("{:x}", hasher.finalize())
    }
}

/// Ordered group of routes sharing an optional path prefix.
///
/// Insertion order is match priority; collections are never re-sorted.
#[derive(Debug, Clone, Default)]
pub struct RouteCollection {
    /// Shared prefix used as a cheap pre-filter before per-route matching
    pub path: Option<String>,
    routes: Vec<Arc<Route>>,
}

impl RouteCollection {
    /// Create an empty collection with the given prefix.
    pub fn new(path: Option<String>) -> Self {
        Self {
            path,
            routes: Vec::new(),
        }
    }

    /// Create an empty collection that every path passes.
    #[must_use]
    pub fn unprefixed() -> Self {
        Self::new(None)
    }

    /// Create an empty collection restricted to paths starting with `prefix`.
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self::new(Some(prefix.into()))
    }

    /// Append a route at the lowest priority.
    pub fn push(&mut self, route: Route) {
        self.routes.push(Arc::new(route));
    }

    #[must_use]
    pub fn with_route(mut self, route: Route) -> Self {
        self.push(route);
        self
    }

    #[inline]
    #[must_use]
    pub fn prefix(&self) -> Option<&str> {
        self.path.as_deref()
    }

    #[must_use]
    pub fn routes(&self) -> &[Arc<Route>] {
        &self.routes
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<Route>> {
        self.routes.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl FromIterator<Route> for RouteCollection {
    fn from_iter<I: IntoIterator<Item = Route>>(iter: I) -> Self {
        Self {
            path: None,
            routes: iter.into_iter().map(Arc::new).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_method_converts_to_http() {
        let route = Route::new("list", "/items").with_method("GET");
        assert!(route.is_http());
        assert_eq!(
            route.http_constraints().and_then(|c| c.method.as_deref()),
            Some("GET")
        );
    }

    #[test]
    fn test_fingerprint_tracks_mutation() {
        let route = Route::new("user", "/user/{id}").with_default("id", "0");
        let mut changed = route.clone();
        assert_eq!(route.fingerprint(), changed.fingerprint());

        changed.rules.insert("id".into(), r"\d+".into());
        assert_ne!(route.fingerprint(), changed.fingerprint());
    }

    #[test]
    fn test_fingerprint_distinguishes_http_constraints() {
        let any = Route::http("home", "/");
        let get = Route::http("home", "/").with_method("GET");
        assert_ne!(any.fingerprint(), get.fingerprint());
        assert_ne!(any.fingerprint(), Route::new("home", "/").fingerprint());
    }

    #[test]
    fn test_collection_preserves_insertion_order() {
        let collection = RouteCollection::with_prefix("/blog")
            .with_route(Route::new("b", "/blog/b"))
            .with_route(Route::new("a", "/blog/a"));
        let names: Vec<_> = collection.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["b", "a"]);
        assert_eq!(collection.prefix(), Some("/blog"));
    }
}
