use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::matcher::{
    BasicRouteMatcher, HttpRouteMatcher, ParameterScope, RequestContext, RouteParams,
};
use crate::pattern::{PatternCache, PatternGenerator};
use crate::route::{FileRouteSource, Route};
use crate::router::{RouteMatch, Router};
use crate::runtime_config::RuntimeConfig;
use crate::uri::UriBuilder;

/// Command-line interface for brrtpath
///
/// Resolve paths against a route file, build URIs from route names, and
/// inspect generated patterns.
#[derive(Parser, Debug)]
#[command(name = "brrtpath")]
#[command(about = "Bidirectional route matching and URI building", long_about = None)]
pub struct Cli {
    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve a request path to a route and its parameters
    ///
    /// Without --method/--host/--scheme every route is tried on its path
    /// alone. With any of them, only HTTP routes are tried and their
    /// constraints are checked.
    Match {
        /// Path to the route file (YAML or JSON)
        #[arg(short, long)]
        routes: PathBuf,

        /// Request path to resolve
        #[arg(short, long)]
        path: String,

        /// Request method (implies HTTP matching)
        #[arg(long)]
        method: Option<String>,

        /// Request host (implies HTTP matching)
        #[arg(long)]
        host: Option<String>,

        /// Request scheme (implies HTTP matching)
        #[arg(long)]
        scheme: Option<String>,

        /// Report only placeholders that have a rule or a default
        #[arg(long, default_value_t = false)]
        rule_bound: bool,
    },
    /// Build a URI from a route name and parameters
    Build {
        /// Path to the route file (YAML or JSON)
        #[arg(short, long)]
        routes: PathBuf,

        /// Route name
        #[arg(short, long)]
        name: String,

        /// Path parameter as key=value (repeatable)
        #[arg(short = 'P', long = "param", value_parser = parse_key_val)]
        params: Vec<(String, String)>,

        /// Query string appended after `?`
        #[arg(short, long)]
        query: Option<String>,

        /// Base URL prefix (overrides BRRTPATH_BASE_URL)
        #[arg(long)]
        base_url: Option<String>,
    },
    /// List the routes in a route file in match order
    Routes {
        /// Path to the route file (YAML or JSON)
        #[arg(short, long)]
        routes: PathBuf,
    },
    /// Print the regex generated for a path template
    Pattern {
        /// Path template, e.g. /blog/{year}/{slug}
        #[arg(short, long)]
        template: String,

        /// Placeholder rule as name=regex (repeatable)
        #[arg(long = "rule", value_parser = parse_key_val)]
        rules: Vec<(String, String)>,

        /// Placeholder default as name=value (repeatable)
        #[arg(long = "default", value_parser = parse_key_val)]
        defaults: Vec<(String, String)>,
    },
}

/// Parse a `key=value` argument.
pub(crate) fn parse_key_val(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("expected key=value, got `{s}`")),
    }
}

fn load_router(path: &Path) -> anyhow::Result<Router> {
    Router::from_source(&FileRouteSource::new(path))
        .with_context(|| format!("Failed to load routes from {}", path.display()))
}

fn write_match(out: &mut dyn Write, matched: &RouteMatch) -> io::Result<()> {
    writeln!(out, "route: {}", matched.route_name())?;
    let mut params: Vec<_> = matched.params.iter().collect();
    params.sort();
    for (key, value) in params {
        writeln!(out, "  {key} = {value}")?;
    }
    Ok(())
}

/// Run the CLI using process arguments and the process environment.
///
/// # Errors
///
/// Returns an error if:
/// - The route file cannot be read or parsed
/// - A route template or rule is malformed
/// - No route matches (for `match`)
/// - The URI cannot be built (for `build`)
pub fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = RuntimeConfig::from_env();
    let stdout = io::stdout();
    execute(&cli.command, &config, &mut stdout.lock())
}

/// Run one command, writing its output to `out`.
///
/// # Errors
///
/// See [`run_cli`].
pub fn execute(
    command: &Commands,
    config: &RuntimeConfig,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    match command {
        Commands::Match {
            routes,
            path,
            method,
            host,
            scheme,
            rule_bound,
        } => {
            let router = load_router(routes)?;
            let cache = PatternCache::from_config(config);
            let scope = if *rule_bound {
                ParameterScope::RuleBound
            } else {
                ParameterScope::AllPlaceholders
            };

            let matched = if method.is_some() || host.is_some() || scheme.is_some() {
                let request = RequestContext::new(
                    method.as_deref().unwrap_or("GET"),
                    path.as_str(),
                    host.as_deref().unwrap_or("localhost"),
                    scheme.as_deref().unwrap_or("http"),
                );
                router.resolve(
                    &HttpRouteMatcher::new(request)
                        .with_cache(cache)
                        .with_scope(scope),
                )?
            } else {
                router.resolve(
                    &BasicRouteMatcher::new(path.as_str())
                        .with_cache(cache)
                        .with_scope(scope),
                )?
            };

            match matched {
                Some(matched) => write_match(out, &matched)?,
                None => bail!("no route matches {path}"),
            }
            Ok(())
        }
        Commands::Build {
            routes,
            name,
            params,
            query,
            base_url,
        } => {
            let router = load_router(routes)?;
            let mut builder = UriBuilder::from_config(router, config);
            if let Some(base_url) = base_url {
                builder = builder.with_base_url(base_url);
            }
            let params: RouteParams = params.iter().cloned().collect();
            let uri = builder.build(name, &params, query.as_deref())?;
            writeln!(out, "{uri}")?;
            Ok(())
        }
        Commands::Routes { routes } => {
            let router = load_router(routes)?;
            for collection in router.collections() {
                let prefix = collection.prefix().unwrap_or("*");
                for route in collection.iter() {
                    writeln!(out, "{prefix}\t{}\t{}", route.name, route.path)?;
                }
            }
            Ok(())
        }
        Commands::Pattern {
            template,
            rules,
            defaults,
        } => {
            let mut route = Route::new("pattern", template.as_str());
            for (name, rule) in rules {
                route = route.with_rule(name.as_str(), rule.as_str());
            }
            for (name, value) in defaults {
                route = route.with_default(name.as_str(), value.as_str());
            }
            let pattern = PatternGenerator::from_config(config).compile(&route)?;
            writeln!(out, "{}", pattern.as_str())?;
            Ok(())
        }
    }
}
