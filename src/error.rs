//! Error types for pattern compilation and URI building.
//!
//! Matching a request against a route is ordinary control flow: a route that
//! does not match yields `Ok(None)`, never an error. Errors are reserved for
//! malformed routes (compiler failures) and for reverse-routing failures that
//! the caller must handle.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, RoutingError>;

/// Failure raised by the pattern compiler or the URI builder.
#[derive(Debug, Error)]
pub enum RoutingError {
    /// A `{...}` token in the template could not be resolved to a placeholder.
    #[error("route '{route}': template '{template}' contains an unresolved placeholder")]
    TemplateMalformed {
        /// Route name
        route: String,
        /// Offending template
        template: String,
    },

    /// The generated pattern or an HTTP constraint failed to compile.
    #[error("route '{route}': pattern '{pattern}' does not compile: {source}")]
    InvalidPattern {
        /// Route name
        route: String,
        /// Pattern text handed to the regex engine
        pattern: String,
        /// Underlying regex error
        #[source]
        source: regex::Error,
    },

    /// The template declares more placeholders than the configured bound.
    #[error("route '{route}': {count} placeholders exceed the limit of {max}")]
    TooManyPlaceholders {
        /// Route name
        route: String,
        /// Placeholders found in the template
        count: usize,
        /// Configured maximum
        max: usize,
    },

    /// The URI builder was given a route name the router does not know.
    #[error("route '{route}' not found")]
    RouteNotFound {
        /// Requested route name
        route: String,
    },

    /// Some placeholders had neither a supplied value nor a default.
    #[error("route '{route}': missing required parameters: {}", missing.join(", "))]
    RequiredParametersMissing {
        /// Route name
        route: String,
        /// Placeholder names left unresolved, in template order
        missing: Vec<String>,
    },

    /// The built path is rejected by the route's own pattern.
    #[error("route '{route}': built path '{path}' does not match the route pattern")]
    PathNotValid {
        /// Route name
        route: String,
        /// The path produced by substitution
        path: String,
    },
}

impl RoutingError {
    /// Name of the route the error refers to.
    #[must_use]
    pub fn route_name(&self) -> &str {
        match self {
            RoutingError::TemplateMalformed { route, .. }
            | RoutingError::InvalidPattern { route, .. }
            | RoutingError::TooManyPlaceholders { route, .. }
            | RoutingError::RouteNotFound { route }
            | RoutingError::RequiredParametersMissing { route, .. }
            | RoutingError::PathNotValid { route, .. } => route,
        }
    }
}
