//! CAS client configuration.
//!
//! A [`ProtocolConfig`] is immutable once a client has been constructed from
//! it. Build one with [`ProtocolConfig::builder`], or deserialize it from the
//! host application's settings and let client construction validate it.

use std::collections::BTreeMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{CasError, CasResult};

/// Default timeout for requests to the CAS server.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration shared by every protocol client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProtocolConfig {
    /// Base URL of the CAS server, e.g. `https://cas.example.com/cas/`.
    pub server_url: String,

    /// Callback URL of this application that the CAS server redirects back to.
    pub service_url: String,

    /// Forces the user to re-enter primary credentials at login.
    #[serde(default)]
    pub renew: bool,

    /// Additional query parameters merged into the login URL.
    #[serde(default)]
    pub extra_login_params: BTreeMap<String, String>,

    /// Attribute holding the canonical username, when it differs from the
    /// principal the server reports.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username_attribute: Option<String>,

    /// URL the CAS server delivers proxy-granting tickets to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proxy_callback_url: Option<String>,

    /// Timeout applied to each request to the CAS server.
    #[serde(default = "default_timeout")]
    pub timeout: Duration,

    /// Whether to verify the CAS server's TLS certificate.
    #[serde(default = "default_verify_tls")]
    pub verify_tls: bool,
}

const fn default_timeout() -> Duration {
    DEFAULT_TIMEOUT
}

const fn default_verify_tls() -> bool {
    true
}

impl ProtocolConfig {
    /// Creates a new configuration builder.
    #[must_use]
    pub fn builder() -> ProtocolConfigBuilder {
        ProtocolConfigBuilder::new()
    }

    /// Validates the configuration.
    ///
    /// ## Errors
    ///
    /// Returns [`CasError::Configuration`] if a required URL is missing or
    /// malformed, or if the timeout is zero.
    pub fn validate(&self) -> CasResult<()> {
        validate_http_url("server_url", &self.server_url)?;
        validate_http_url("service_url", &self.service_url)?;

        if let Some(ref callback) = self.proxy_callback_url {
            validate_http_url("proxy_callback_url", callback)?;
        }

        if let Some(ref attr) = self.username_attribute {
            if attr.trim().is_empty() {
                return Err(CasError::config("username_attribute cannot be empty"));
            }
        }

        if self.timeout.is_zero() {
            return Err(CasError::config("timeout must be greater than zero"));
        }

        Ok(())
    }
}

/// Checks that `value` is an absolute `http`/`https` URL.
fn validate_http_url(field: &str, value: &str) -> CasResult<()> {
    if value.trim().is_empty() {
        return Err(CasError::config(format!("{field} is required")));
    }

    let url = Url::parse(value)
        .map_err(|e| CasError::config(format!("{field} is not a valid URL: {e}")))?;

    match url.scheme() {
        "http" | "https" => Ok(()),
        other => Err(CasError::config(format!(
            "{field} must use http or https, got '{other}'"
        ))),
    }
}

// ============================================================================
// Configuration Builder
// ============================================================================

/// Builder for [`ProtocolConfig`].
#[derive(Debug, Default)]
pub struct ProtocolConfigBuilder {
    server_url: Option<String>,
    service_url: Option<String>,
    renew: bool,
    extra_login_params: BTreeMap<String, String>,
    username_attribute: Option<String>,
    proxy_callback_url: Option<String>,
    timeout: Option<Duration>,
    verify_tls: Option<bool>,
}

impl ProtocolConfigBuilder {
    /// Creates a new builder with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the CAS server base URL.
    #[must_use]
    pub fn server_url(mut self, url: impl Into<String>) -> Self {
        self.server_url = Some(url.into());
        self
    }

    /// Sets the service (callback) URL.
    #[must_use]
    pub fn service_url(mut self, url: impl Into<String>) -> Self {
        self.service_url = Some(url.into());
        self
    }

    /// Sets whether login forces re-authentication.
    #[must_use]
    pub const fn renew(mut self, renew: bool) -> Self {
        self.renew = renew;
        self
    }

    /// Adds an extra login query parameter.
    #[must_use]
    pub fn extra_login_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_login_params.insert(key.into(), value.into());
        self
    }

    /// Replaces the extra login query parameters.
    #[must_use]
    pub fn extra_login_params(mut self, params: BTreeMap<String, String>) -> Self {
        self.extra_login_params = params;
        self
    }

    /// Sets the attribute holding the canonical username.
    #[must_use]
    pub fn username_attribute(mut self, attr: impl Into<String>) -> Self {
        self.username_attribute = Some(attr.into());
        self
    }

    /// Sets the proxy callback URL.
    #[must_use]
    pub fn proxy_callback_url(mut self, url: impl Into<String>) -> Self {
        self.proxy_callback_url = Some(url.into());
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets whether the server certificate is verified.
    #[must_use]
    pub const fn verify_tls(mut self, verify: bool) -> Self {
        self.verify_tls = Some(verify);
        self
    }

    /// Builds and validates the configuration.
    ///
    /// ## Errors
    ///
    /// Returns an error if:
    /// - `server_url` or `service_url` is missing or not an http(s) URL
    /// - `proxy_callback_url` is set but not an http(s) URL
    /// - the timeout is zero
    pub fn build(self) -> CasResult<ProtocolConfig> {
        let config = ProtocolConfig {
            server_url: self
                .server_url
                .ok_or_else(|| CasError::config("server_url is required"))?,
            service_url: self
                .service_url
                .ok_or_else(|| CasError::config("service_url is required"))?,
            renew: self.renew,
            extra_login_params: self.extra_login_params,
            username_attribute: self.username_attribute,
            proxy_callback_url: self.proxy_callback_url,
            timeout: self.timeout.unwrap_or(DEFAULT_TIMEOUT),
            verify_tls: self.verify_tls.unwrap_or(true),
        };

        config.validate()?;

        Ok(config)
    }
}
