use regex::{Captures, Regex, RegexBuilder};
use tracing::debug;

use super::template::{self, Token};
use crate::error::{Result, RoutingError};
use crate::route::{HttpConstraints, Route};
use crate::runtime_config::RuntimeConfig;

/// Capture used for placeholders that declare no rule: anything up to the next `/`.
pub const FALLBACK_RULE: &str = "[^/]+";

/// Default bound on placeholders per template.
pub const DEFAULT_MAX_PLACEHOLDERS: usize = 32;

/// A route template compiled into an anchored, case-insensitive regex.
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    source: String,
    regex: Regex,
    placeholders: Vec<String>,
}

impl CompiledPattern {
    /// Pattern text as generated, e.g. `^/user(?:/(?<id>(?:[^/]+)?))?$`.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.source
    }

    #[inline]
    #[must_use]
    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    /// Placeholder names in template order.
    #[must_use]
    pub fn placeholders(&self) -> &[String] {
        &self.placeholders
    }

    #[inline]
    #[must_use]
    pub fn is_match(&self, path: &str) -> bool {
        self.regex.is_match(path)
    }

    #[inline]
    #[must_use]
    pub fn captures<'h>(&self, path: &'h str) -> Option<Captures<'h>> {
        self.regex.captures(path)
    }
}

/// Everything needed to test a route against a request.
///
/// Basic routes carry only the path pattern; HTTP routes also carry one
/// compiled `^(constraint)$` regex per non-null constraint.
#[derive(Debug, Clone)]
pub struct CompiledRoute {
    pub path: CompiledPattern,
    pub method: Option<Regex>,
    pub hostname: Option<Regex>,
    pub scheme: Option<Regex>,
}

/// Turns route templates into matching patterns.
///
/// Output is a pure function of the route; the generator holds no mutable
/// state and can be shared freely.
#[derive(Debug, Clone, Copy)]
pub struct PatternGenerator {
    max_placeholders: usize,
}

impl Default for PatternGenerator {
    fn default() -> Self {
        Self {
            max_placeholders: DEFAULT_MAX_PLACEHOLDERS,
        }
    }
}

impl PatternGenerator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_config(config: &RuntimeConfig) -> Self {
        Self::with_max_placeholders(config.max_placeholders)
    }

    #[must_use]
    pub fn with_max_placeholders(max_placeholders: usize) -> Self {
        Self { max_placeholders }
    }

    #[inline]
    #[must_use]
    pub fn max_placeholders(&self) -> usize {
        self.max_placeholders
    }

    /// Generate the pattern text for `route`.
    ///
    /// Transforms templates like `/user/{id}` (with a default for `id`) into
    /// `^/user(?:/(?<id>(?:[^/]+)?))?$`. The template's leading `/` is absorbed
    /// by the `^/` anchor, so a placeholder in the first segment renders
    /// without a slash of its own.
    ///
    /// # Errors
    ///
    /// * [`RoutingError::TemplateMalformed`] if a brace does not form a placeholder
    /// * [`RoutingError::TooManyPlaceholders`] if the template exceeds the bound
    pub fn generate(&self, route: &Route) -> Result<String> {
        let malformed = || RoutingError::TemplateMalformed {
            route: route.name.clone(),
            template: route.path.clone(),
        };
        let mut tokens = template::tokenize(&route.path).map_err(|_| malformed())?;

        let count = tokens
            .iter()
            .filter(|t| matches!(t, Token::Placeholder(_)))
            .count();
        if count > self.max_placeholders {
            return Err(RoutingError::TooManyPlaceholders {
                route: route.name.clone(),
                count,
                max: self.max_placeholders,
            });
        }

        if let Some(Token::Literal(first)) = tokens.first_mut() {
            *first = first.trim_start_matches('/');
        }

        let mut pattern = String::with_capacity(route.path.len() * 2 + 16);
        pattern.push_str("^/");
        let mut slash_pending = false;

        for (i, token) in tokens.iter().enumerate() {
            match *token {
                Token::Literal(text) => {
                    let next_is_placeholder =
                        matches!(tokens.get(i + 1), Some(Token::Placeholder(_)));
                    match text.strip_suffix('/') {
                        Some(head) if next_is_placeholder => {
                            pattern.push_str(head);
                            slash_pending = true;
                        }
                        _ => pattern.push_str(text),
                    }
                }
                Token::Placeholder(name) => {
                    let rule = route.rule(name).unwrap_or(FALLBACK_RULE);
                    let optional = route.default_value(name).is_some();
                    push_placeholder(&mut pattern, name, rule, optional, slash_pending);
                    slash_pending = false;
                }
            }
        }

        pattern.push('$');

        debug!(
            route = %route.name,
            template = %route.path,
            pattern = %pattern,
            placeholders = count,
            "Generated route pattern"
        );
        Ok(pattern)
    }

    /// Generate and compile the path pattern for `route`.
    ///
    /// # Errors
    ///
    /// Any [`generate`](Self::generate) error, or [`RoutingError::InvalidPattern`]
    /// if the regex engine rejects the result (malformed rule, duplicate
    /// placeholder names).
    pub fn compile(&self, route: &Route) -> Result<CompiledPattern> {
        let source = self.generate(route)?;
        let regex = build_regex(&route.name, &source)?;
        let placeholders = route.placeholders().into_iter().map(String::from).collect();
        Ok(CompiledPattern {
            source,
            regex,
            placeholders,
        })
    }

    /// Compile the path pattern plus any HTTP constraints of `route`.
    ///
    /// # Errors
    ///
    /// Same as [`compile`](Self::compile); an invalid constraint is reported as
    /// [`RoutingError::InvalidPattern`].
    pub fn compile_route(&self, route: &Route) -> Result<CompiledRoute> {
        let path = self.compile(route)?;
        let (method, hostname, scheme) = match route.http_constraints() {
            Some(HttpConstraints {
                method,
                hostname,
                scheme,
            }) => (
                compile_constraint(&route.name, method.as_deref())?,
                compile_constraint(&route.name, hostname.as_deref())?,
                compile_constraint(&route.name, scheme.as_deref())?,
            ),
            None => (None, None, None),
        };
        Ok(CompiledRoute {
            path,
            method,
            hostname,
            scheme,
        })
    }
}

fn push_placeholder(pattern: &mut String, name: &str, rule: &str, optional: bool, slash: bool) {
    match (optional, slash) {
        (true, true) => {
            pattern.push_str("(?:/(?<");
            pattern.push_str(name);
            pattern.push_str(">(?:");
            pattern.push_str(rule);
            pattern.push_str(")?))?");
        }
        (true, false) => {
            pattern.push_str("(?<");
            pattern.push_str(name);
            pattern.push_str(">(?:");
            pattern.push_str(rule);
            pattern.push_str(")?)");
        }
        (false, slash) => {
            if slash {
                pattern.push('/');
            }
            pattern.push_str("(?<");
            pattern.push_str(name);
            pattern.push('>');
            pattern.push_str(rule);
            pattern.push(')');
        }
    }
}

fn build_regex(route: &str, source: &str) -> Result<Regex> {
    RegexBuilder::new(source)
        .case_insensitive(true)
        .build()
        .map_err(|source_err| RoutingError::InvalidPattern {
            route: route.to_string(),
            pattern: source.to_string(),
            source: source_err,
        })
}

fn compile_constraint(route: &str, constraint: Option<&str>) -> Result<Option<Regex>> {
    constraint
        .map(|c| build_regex(route, &format!("^({c})$")))
        .transpose()
}
