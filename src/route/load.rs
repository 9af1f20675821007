use anyhow::{bail, Context};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::info;

use super::types::{HttpConstraints, Route, RouteCollection, RouteKind};

/// Supplies route collections in match-priority order.
pub trait RouteSource {
    /// Produce the collections; order must be preserved by the caller.
    fn load(&self) -> anyhow::Result<Vec<RouteCollection>>;
}

impl RouteSource for Vec<RouteCollection> {
    fn load(&self) -> anyhow::Result<Vec<RouteCollection>> {
        Ok(self.clone())
    }
}

/// On-disk route table.
///
/// ```yaml
/// collections:
///   - path: /blog
///     routes:
///       - name: blog_post
///         path: /blog/{year}/{slug}
///         rules: { year: '\d{4}' }
///         http: { method: "GET|HEAD" }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RouteFile {
    #[serde(default)]
    pub collections: Vec<CollectionDef>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CollectionDef {
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub routes: Vec<RouteDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteDef {
    pub name: String,
    pub path: String,
    #[serde(default)]
    pub rules: BTreeMap<String, String>,
    #[serde(default, alias = "default_values", deserialize_with = "scalar_map")]
    pub defaults: BTreeMap<String, String>,
    /// Present for HTTP routes, absent for basic routes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http: Option<HttpDef>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HttpDef {
    #[serde(default)]
    pub method: Option<String>,
    #[serde(default)]
    pub hostname: Option<String>,
    #[serde(default)]
    pub scheme: Option<String>,
}

/// Default values may be written as YAML numbers or booleans; they are
/// stored as the strings a path would contain.
fn scalar_map<'de, D>(deserializer: D) -> Result<BTreeMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;
    use serde_json::Value;

    let raw = BTreeMap::<String, Value>::deserialize(deserializer)?;
    raw.into_iter()
        .map(|(key, value)| match value {
            Value::String(s) => Ok((key, s)),
            Value::Number(n) => Ok((key, n.to_string())),
            Value::Bool(b) => Ok((key, b.to_string())),
            other => Err(D::Error::custom(format!(
                "default for '{key}' must be a scalar, got {other}"
            ))),
        })
        .collect()
}

impl From<RouteDef> for Route {
    fn from(def: RouteDef) -> Self {
        let kind = match def.http {
            Some(http) => RouteKind::Http(HttpConstraints {
                method: http.method,
                hostname: http.hostname,
                scheme: http.scheme,
            }),
            None => RouteKind::Basic,
        };
        Route {
            name: def.name,
            path: def.path,
            rules: def.rules,
            default_values: def.defaults,
            kind,
        }
    }
}

impl From<&Route> for RouteDef {
    fn from(route: &Route) -> Self {
        RouteDef {
            name: route.name.clone(),
            path: route.path.clone(),
            rules: route.rules.clone(),
            defaults: route.default_values.clone(),
            http: route.http_constraints().map(|c| HttpDef {
                method: c.method.clone(),
                hostname: c.hostname.clone(),
                scheme: c.scheme.clone(),
            }),
        }
    }
}

impl RouteFile {
    /// Convert into collections, preserving file order.
    #[must_use]
    pub fn into_collections(self) -> Vec<RouteCollection> {
        self.collections
            .into_iter()
            .map(|def| {
                let mut collection = RouteCollection::new(def.path);
                for route in def.routes {
                    collection.push(route.into());
                }
                collection
            })
            .collect()
    }

    /// Snapshot existing collections, e.g. to write them back to disk.
    #[must_use]
    pub fn from_collections(collections: &[RouteCollection]) -> Self {
        RouteFile {
            collections: collections
                .iter()
                .map(|c| CollectionDef {
                    path: c.path.clone(),
                    routes: c.iter().map(|r| RouteDef::from(r.as_ref())).collect(),
                })
                .collect(),
        }
    }
}

/// Serialization format of a route file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteFormat {
    Yaml,
    Json,
}

impl RouteFormat {
    /// Pick the format from the file extension; anything but `.yaml`/`.yml` is JSON.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                RouteFormat::Yaml
            }
            _ => RouteFormat::Json,
        }
    }
}

/// Parse a route table from text.
///
/// # Errors
///
/// Returns an error if the text is empty (a file caught mid-write), is not a
/// valid route file, or if a route has an empty name.
pub fn parse_routes(content: &str, format: RouteFormat) -> anyhow::Result<Vec<RouteCollection>> {
    if content.trim().is_empty() {
        bail!("route file is empty");
    }
    let file: RouteFile = match format {
        RouteFormat::Yaml => serde_yaml::from_str(content).context("invalid YAML route file")?,
        RouteFormat::Json => serde_json::from_str(content).context("invalid JSON route file")?,
    };
    for def in file.collections.iter().flat_map(|c| &c.routes) {
        if def.name.trim().is_empty() {
            bail!("route with path '{}' has an empty name", def.path);
        }
    }
    Ok(file.into_collections())
}

/// Reads route collections from a YAML or JSON file.
#[derive(Debug, Clone)]
pub struct FileRouteSource {
    path: PathBuf,
}

impl FileRouteSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RouteSource for FileRouteSource {
    fn load(&self) -> anyhow::Result<Vec<RouteCollection>> {
        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read route file {}", self.path.display()))?;
        let collections = parse_routes(&content, RouteFormat::from_path(&self.path))
            .with_context(|| format!("failed to load routes from {}", self.path.display()))?;
        info!(
            path = %self.path.display(),
            collections = collections.len(),
            routes = collections.iter().map(RouteCollection::len).sum::<usize>(),
            "Route file loaded"
        );
        Ok(collections)
    }
}
