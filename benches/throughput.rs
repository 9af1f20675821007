use brrtpath::matcher::{BasicRouteMatcher, HttpRouteMatcher};
use brrtpath::pattern::PatternCache;
use brrtpath::route::{parse_routes, RouteFormat};
use brrtpath::router::Router;
use brrtpath::uri::UriBuilder;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::collections::HashMap;

fn example_routes() -> &'static str {
    r#"
collections:
  - path: /zoo
    routes:
      - name: get_animals
        path: /zoo/animals
        http: { method: "GET|POST" }
      - name: get_animal
        path: /zoo/animals/{id}
        rules: { id: '\d+' }
        http: { method: "GET|PUT|PATCH|DELETE" }
      - name: animal_toy
        path: /zoo/animals/{id}/toys/{toy_id}
        rules: { id: '\d+', toy_id: '\d+' }
        http: { method: GET }
      - name: habitat_section
        path: /zoo/{category}/animals/{id}/habitats/{habitat_id}/sections/{section_id}
        http: { method: GET }
      - name: health_check
        path: /zoo/health
        http: { method: "HEAD|OPTIONS" }
  - path: /inventory
    routes:
      - name: post_item_batch
        path: /inventory/{warehouse_id}/feeds/{feed_id}/items/{item_id}/batches/{batch_id}
        http: { method: POST }
  - routes:
      - name: complex_many_params
        path: /complex/{a}/{b}/{c}/{d}/{e}/{f}/{g}/{h}/{i}
        http: { method: GET }
      - name: listing
        path: /list/{page}
        rules: { page: '\d+' }
        defaults: { page: 1 }
        http: { method: GET }
      - name: root_handler
        path: /
        http: { method: GET }
"#
}

const TEST_PATHS: [(&str, &str); 6] = [
    ("GET", "/zoo/animals/123"),
    ("GET", "/zoo/animals/123/toys/456"),
    ("GET", "/zoo/cats/animals/123/habitats/88/sections/5"),
    ("POST", "/inventory/1/feeds/2/items/3/batches/4"),
    ("GET", "/complex/1/2/3/4/5/6/7/8/9"),
    ("GET", "/list"),
];

fn router() -> Router {
    let collections =
        parse_routes(example_routes(), RouteFormat::Yaml).expect("failed to parse routes");
    Router::new(collections)
}

fn bench_route_throughput(c: &mut Criterion) {
    let router = router();

    c.bench_function("route_match_uncached", |b| {
        b.iter(|| {
            for (_, path) in TEST_PATHS.iter() {
                let res = router.resolve_path(path);
                black_box(&res);
            }
        })
    });

    let cache = PatternCache::default();
    cache
        .precompile(router.routes().map(|r| r.as_ref()))
        .expect("routes compile");
    c.bench_function("route_match_cached", |b| {
        b.iter(|| {
            for (_, path) in TEST_PATHS.iter() {
                let matcher = BasicRouteMatcher::new(*path).with_cache(cache.clone());
                let res = router.resolve(&matcher);
                black_box(&res);
            }
        })
    });

    c.bench_function("http_route_match_cached", |b| {
        b.iter(|| {
            for (method, path) in TEST_PATHS.iter() {
                let request = http::Request::builder()
                    .method(*method)
                    .uri(format!("http://api.example.com{path}"))
                    .body(())
                    .expect("valid request");
                let matcher = HttpRouteMatcher::new(request).with_cache(cache.clone());
                let res = router.resolve(&matcher);
                black_box(&res);
            }
        })
    });
}

fn bench_uri_build(c: &mut Criterion) {
    let builder = UriBuilder::new(router())
        .with_cache(PatternCache::default())
        .with_base_url("https://api.example.com");
    let params: HashMap<String, String> = [("id", "123"), ("toy_id", "456")]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

    c.bench_function("uri_build", |b| {
        b.iter(|| {
            let uri = builder.build("animal_toy", &params, Some("sort=asc"));
            black_box(&uri);
        })
    });
}

criterion_group!(benches, bench_route_throughput, bench_uri_build);
criterion_main!(benches);
