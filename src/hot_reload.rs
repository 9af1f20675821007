//! # Hot Reload Module
//!
//! Live reloading of a route file without restarting the process.
//!
//! ## Overview
//!
//! [`watch_routes`] watches a YAML or JSON route file and, on every
//! modification:
//! - Reloads the collections through [`FileRouteSource`]
//! - Builds a new [`Router`] and swaps it into the [`SharedRouter`]
//! - Calls the reload hook with the new table
//!
//! ## Usage
//!
//! ```rust,no_run
//! use brrtpath::hot_reload::watch_routes;
//! use brrtpath::router::{Router, SharedRouter};
//! use brrtpath::route::FileRouteSource;
//!
//! let router = Router::from_source(&FileRouteSource::new("routes.yaml")).unwrap();
//! let shared = SharedRouter::new(router);
//!
//! let _watcher = watch_routes("routes.yaml", shared.clone(), |router| {
//!     println!("Reloaded {} routes", router.len());
//! })
//! .unwrap();
//! ```
//!
//! Drop the returned watcher to stop watching. Matchers that compile through
//! a shared [`PatternCache`] should use [`watch_routes_with_cache`], which
//! clears the cache after every swap so patterns of replaced routes are not
//! kept.
//!
//! ## Error Handling
//!
//! If the new file fails to parse, the error is logged and the previous table
//! stays active. Readers never observe a half-built router.

use notify::{Config, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::{Path, PathBuf};
use tracing::{error, info};

use crate::pattern::PatternCache;
use crate::route::FileRouteSource;
use crate::router::{Router, SharedRouter};

/// Watch a route file and swap a rebuilt [`Router`] into `shared` when it changes.
///
/// `on_reload` runs after each successful swap with the new table.
///
/// # Errors
///
/// Returns an error if the watcher cannot be created or the path cannot be
/// watched.
pub fn watch_routes<P, F>(
    routes_path: P,
    shared: SharedRouter,
    on_reload: F,
) -> notify::Result<RecommendedWatcher>
where
    P: AsRef<Path>,
    F: FnMut(&Router) + Send + 'static,
{
    watch(routes_path.as_ref(), shared, None, on_reload)
}

/// Like [`watch_routes`], and clears `cache` after each successful swap,
/// before `on_reload` runs.
///
/// # Errors
///
/// Same as [`watch_routes`].
pub fn watch_routes_with_cache<P, F>(
    routes_path: P,
    shared: SharedRouter,
    cache: PatternCache,
    on_reload: F,
) -> notify::Result<RecommendedWatcher>
where
    P: AsRef<Path>,
    F: FnMut(&Router) + Send + 'static,
{
    watch(routes_path.as_ref(), shared, Some(cache), on_reload)
}

fn watch<F>(
    path: &Path,
    shared: SharedRouter,
    cache: Option<PatternCache>,
    mut on_reload: F,
) -> notify::Result<RecommendedWatcher>
where
    F: FnMut(&Router) + Send + 'static,
{
    let path: PathBuf = path.to_path_buf();
    let source = FileRouteSource::new(path.clone());

    let mut watcher = RecommendedWatcher::new(
        move |res: Result<notify::Event, notify::Error>| match res {
            Ok(event) => {
                if !matches!(event.kind, EventKind::Modify(_) | EventKind::Create(_)) {
                    return;
                }
                match Router::from_source(&source) {
                    Ok(router) => {
                        info!(
                            path = %source.path().display(),
                            routes_count = router.len(),
                            "hot-reload: applying route updates"
                        );
                        shared.store(router);
                        if let Some(cache) = &cache {
                            cache.clear();
                        }
                        on_reload(&shared.load());
                    }
                    Err(e) => error!(
                        path = %source.path().display(),
                        error = %format!("{e:#}"),
                        "hot-reload: keeping previous routes"
                    ),
                }
            }
            Err(e) => error!(error = ?e, "hot-reload: watch error"),
        },
        Config::default(),
    )?;

    watcher.watch(&path, RecursiveMode::NonRecursive)?;
    Ok(watcher)
}
