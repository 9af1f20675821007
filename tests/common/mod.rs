#![allow(dead_code)]

pub mod temp_files {
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;
    use std::time::{SystemTime, UNIX_EPOCH};

    // Global counter and lock for thread-safe temporary file creation
    static TEMP_COUNTER: AtomicUsize = AtomicUsize::new(0);
    static TEMP_LOCK: Mutex<()> = Mutex::new(());

    /// Creates a temporary route file with a guaranteed unique name
    pub fn create_temp_routes(content: &str, ext: &str) -> PathBuf {
        let _lock = TEMP_LOCK.lock().unwrap();
        let counter = TEMP_COUNTER.fetch_add(1, Ordering::SeqCst);
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos();

        let path = std::env::temp_dir().join(format!(
            "brrtpath_test_{}_{}_{}.{}",
            std::process::id(),
            counter,
            nanos,
            ext
        ));

        std::fs::write(&path, content).unwrap();
        path
    }

    /// Creates a temporary file with yaml extension
    pub fn create_temp_yaml(content: &str) -> PathBuf {
        create_temp_routes(content, "yaml")
    }

    /// Creates a temporary file with json extension
    pub fn create_temp_json(content: &str) -> PathBuf {
        create_temp_routes(content, "json")
    }

    /// Cleanup temporary files (best effort)
    pub fn cleanup_temp_files(paths: &[PathBuf]) {
        for path in paths {
            let _ = std::fs::remove_file(path);
        }
    }
}

pub mod fixtures {
    use brrtpath::route::{Route, RouteCollection};
    use brrtpath::router::Router;

    /// The blog/user table used across the integration tests.
    pub fn blog_router() -> Router {
        let blog = RouteCollection::with_prefix("/blog")
            .with_route(Route::new("blog_post", "/blog/{year}/{slug}").with_rule("year", r"\d{4}"))
            .with_route(
                Route::new("blog_archive", "/blog/archive/{page}")
                    .with_rule("page", r"\d+")
                    .with_default("page", "1"),
            )
            .with_route(Route::new("blog_feed", "/blog/feed.{format}").with_rule("format", "rss|atom"));
        let rest = RouteCollection::unprefixed()
            .with_route(Route::new("user", "/user/{id}").with_default("id", "0"))
            .with_route(Route::new("home", "/"));
        Router::new(vec![blog, rest])
    }
}
