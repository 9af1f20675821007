use http::header::HOST;
use http::Method;
use url::Url;

/// The request properties an HTTP route can be constrained on.
pub trait MatchRequest {
    fn method(&self) -> &str;
    fn path(&self) -> &str;
    fn hostname(&self) -> &str;
    fn scheme(&self) -> &str;
}

/// Owned request snapshot, for callers without an `http::Request` at hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    method: String,
    path: String,
    hostname: String,
    scheme: String,
}

impl RequestContext {
    pub fn new(
        method: impl Into<String>,
        path: impl Into<String>,
        hostname: impl Into<String>,
        scheme: impl Into<String>,
    ) -> Self {
        Self {
            method: method.into(),
            path: path.into(),
            hostname: hostname.into(),
            scheme: scheme.into(),
        }
    }

    /// Build from a method and an absolute URL.
    #[must_use]
    pub fn from_url(method: &Method, url: &Url) -> Self {
        Self::new(
            method.as_str(),
            url.path(),
            url.host_str().unwrap_or_default(),
            url.scheme(),
        )
    }

    /// Parse `url` and build from it.
    ///
    /// # Errors
    ///
    /// Returns the parse error if `url` is not an absolute URL.
    pub fn parse(method: &Method, url: &str) -> Result<Self, url::ParseError> {
        Url::parse(url).map(|u| Self::from_url(method, &u))
    }
}

impl MatchRequest for RequestContext {
    fn method(&self) -> &str {
        &self.method
    }

    fn path(&self) -> &str {
        &self.path
    }

    fn hostname(&self) -> &str {
        &self.hostname
    }

    fn scheme(&self) -> &str {
        &self.scheme
    }
}

/// Hostname comes from the URI authority when the request line carried one,
/// otherwise from the `Host` header with any port removed. Scheme defaults to
/// `http` for origin-form requests.
impl<B> MatchRequest for http::Request<B> {
    fn method(&self) -> &str {
        http::Request::method(self).as_str()
    }

    fn path(&self) -> &str {
        self.uri().path()
    }

    fn hostname(&self) -> &str {
        if let Some(host) = self.uri().host() {
            return host;
        }
        self.headers()
            .get(HOST)
            .and_then(|v| v.to_str().ok())
            .map(strip_port)
            .unwrap_or_default()
    }

    fn scheme(&self) -> &str {
        self.uri().scheme_str().unwrap_or("http")
    }
}

fn strip_port(host: &str) -> &str {
    if host.starts_with('[') {
        // IPv6 literal: keep the brackets, drop whatever follows them
        return match host.find(']') {
            Some(end) => &host[..=end],
            None => host,
        };
    }
    host.split_once(':').map_or(host, |(name, _)| name)
}
