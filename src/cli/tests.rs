//! Unit tests for CLI commands

use super::commands::parse_key_val;
use crate::cli::{execute, Cli, Commands};
use crate::runtime_config::RuntimeConfig;
use clap::Parser;
use std::io::Write;

const ROUTES_YAML: &str = r#"
collections:
  - path: /blog
    routes:
      - name: blog_post
        path: /blog/{year}/{slug}
        rules: { year: '\d{4}' }
      - name: blog_index
        path: /blog/{page}
        defaults: { page: 1 }
  - routes:
      - name: get_pet
        path: /pets/{id}
        rules: { id: '\d+' }
        http: { method: GET }
"#;

fn routes_file() -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
    file.write_all(ROUTES_YAML.as_bytes()).unwrap();
    file
}

fn run(args: &[&str]) -> anyhow::Result<String> {
    let cli = Cli::try_parse_from(args)?;
    let mut out = Vec::new();
    execute(&cli.command, &RuntimeConfig::default(), &mut out)?;
    Ok(String::from_utf8(out)?)
}

#[test]
fn test_match_command_parses() {
    let cli = Cli::try_parse_from([
        "brrtpath", "match", "--routes", "r.yaml", "--path", "/x", "--method", "POST",
    ])
    .unwrap();

    match cli.command {
        Commands::Match {
            routes,
            path,
            method,
            host,
            rule_bound,
            ..
        } => {
            assert_eq!(routes.to_string_lossy(), "r.yaml");
            assert_eq!(path, "/x");
            assert_eq!(method.as_deref(), Some("POST"));
            assert!(host.is_none());
            assert!(!rule_bound);
        }
        _ => panic!("Expected Match command"),
    }
}

#[test]
fn test_build_command_collects_params() {
    let cli = Cli::try_parse_from([
        "brrtpath", "build", "-r", "r.yaml", "-n", "user", "--param", "id=1", "-P", "tab=",
    ])
    .unwrap();

    match cli.command {
        Commands::Build { name, params, .. } => {
            assert_eq!(name, "user");
            assert_eq!(
                params,
                vec![
                    ("id".to_string(), "1".to_string()),
                    ("tab".to_string(), String::new())
                ]
            );
        }
        _ => panic!("Expected Build command"),
    }
}

#[test]
fn test_parse_key_val() {
    assert_eq!(
        parse_key_val("year=\\d{4}").unwrap(),
        ("year".to_string(), "\\d{4}".to_string())
    );
    assert_eq!(
        parse_key_val("a=b=c").unwrap(),
        ("a".to_string(), "b=c".to_string())
    );
    assert!(parse_key_val("novalue").is_err());
    assert!(parse_key_val("=x").is_err());
}

#[test]
fn test_execute_match() {
    let file = routes_file();
    let path = file.path().to_str().unwrap();

    let out = run(&["brrtpath", "match", "-r", path, "-p", "/blog/2014/hello"]).unwrap();
    assert_eq!(out, "route: blog_post\n  slug = hello\n  year = 2014\n");

    let out = run(&["brrtpath", "match", "-r", path, "-p", "/blog"]).unwrap();
    assert_eq!(out, "route: blog_index\n  page = 1\n");

    assert!(run(&["brrtpath", "match", "-r", path, "-p", "/nowhere/at/all"]).is_err());
}

#[test]
fn test_execute_http_match() {
    let file = routes_file();
    let path = file.path().to_str().unwrap();

    let out = run(&["brrtpath", "match", "-r", path, "-p", "/pets/7", "--method", "get"]).unwrap();
    assert_eq!(out, "route: get_pet\n  id = 7\n");
    assert!(run(&["brrtpath", "match", "-r", path, "-p", "/pets/7", "--method", "DELETE"]).is_err());
}

#[test]
fn test_execute_build() {
    let file = routes_file();
    let path = file.path().to_str().unwrap();

    let out = run(&[
        "brrtpath", "build", "-r", path, "-n", "blog_post", "-P", "year=2014", "-P", "slug=hi",
        "--query", "?lang=en", "--base-url", "https://example.com/",
    ])
    .unwrap();
    assert_eq!(out, "https://example.com/blog/2014/hi?lang=en\n");

    assert!(run(&["brrtpath", "build", "-r", path, "-n", "blog_post", "-P", "year=14", "-P", "slug=x"]).is_err());
}

#[test]
fn test_execute_routes_and_pattern() {
    let file = routes_file();
    let path = file.path().to_str().unwrap();

    let out = run(&["brrtpath", "routes", "-r", path]).unwrap();
    assert_eq!(
        out,
        "/blog\tblog_post\t/blog/{year}/{slug}\n/blog\tblog_index\t/blog/{page}\n*\tget_pet\t/pets/{id}\n"
    );

    let out = run(&["brrtpath", "pattern", "-t", "/user/{id}", "--default", "id=0"]).unwrap();
    assert_eq!(out, "^/user(?:/(?<id>(?:[^/]+)?))?$\n");
}

#[test]
fn test_missing_routes_file_is_error() {
    let err = run(&["brrtpath", "routes", "-r", "/definitely/not/here.yaml"]).unwrap_err();
    assert!(format!("{err:#}").contains("Failed to load routes"));
}
