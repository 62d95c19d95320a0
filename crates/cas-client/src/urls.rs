//! CAS URL construction.
//!
//! Pure functions over a [`ProtocolConfig`]; identical inputs always yield
//! byte-identical URLs. Base URLs are validated when the configuration is
//! built, not here.

use crate::config::ProtocolConfig;
use crate::types::{endpoints, params, ProtocolVersion};

/// Builds the login URL the user's browser is redirected to.
///
/// `service` always comes first, followed by `renew=true` when renewal is
/// configured, then the extra login parameters. An extra parameter named
/// like an earlier one replaces its value in place.
#[must_use]
pub fn login_url(config: &ProtocolConfig) -> String {
    let mut query: Vec<(&str, &str)> = vec![(params::SERVICE, config.service_url.as_str())];

    if config.renew {
        query.push((params::RENEW, "true"));
    }

    for (key, value) in &config.extra_login_params {
        match query.iter_mut().find(|(existing, _)| *existing == key.as_str()) {
            Some(slot) => slot.1 = value.as_str(),
            None => query.push((key.as_str(), value.as_str())),
        }
    }

    with_query(endpoint(config, endpoints::LOGIN), &query)
}

/// Builds the logout URL, optionally asking the server to redirect back.
#[must_use]
pub fn logout_url(config: &ProtocolConfig, redirect_url: Option<&str>) -> String {
    logout_url_with_param(config, redirect_url, params::SERVICE)
}

/// Builds the logout URL using a protocol-specific redirect parameter name.
#[must_use]
pub fn logout_url_with_param(
    config: &ProtocolConfig,
    redirect_url: Option<&str>,
    param: &str,
) -> String {
    let url = endpoint(config, endpoints::LOGOUT);
    match redirect_url {
        Some(redirect) => with_query(url, &[(param, redirect)]),
        None => url,
    }
}

/// Builds the ticket validation URL for `version`.
///
/// CAS+SAML carries the ticket in the POST body, so its URL holds only the
/// `TARGET` service parameter.
#[must_use]
pub fn validation_url(config: &ProtocolConfig, version: ProtocolVersion, ticket: &str) -> String {
    let url = endpoint(config, version.validation_path());

    if version.is_saml() {
        return with_query(url, &[(params::TARGET, config.service_url.as_str())]);
    }

    let mut query = vec![
        (params::TICKET, ticket),
        (params::SERVICE, config.service_url.as_str()),
    ];

    if version.supports_proxy() {
        if let Some(ref callback) = config.proxy_callback_url {
            query.push((params::PGT_URL, callback.as_str()));
        }
    }

    with_query(url, &query)
}

/// Builds the URL that exchanges a proxy-granting ticket for a proxy ticket
/// targeting the configured service.
#[must_use]
pub fn proxy_url(config: &ProtocolConfig, pgt: &str) -> String {
    with_query(
        endpoint(config, endpoints::PROXY),
        &[
            (params::PGT, pgt),
            (params::TARGET_SERVICE, config.service_url.as_str()),
        ],
    )
}

/// Joins an endpoint path onto the server URL.
fn endpoint(config: &ProtocolConfig, path: &str) -> String {
    format!("{}/{}", config.server_url.trim_end_matches('/'), path)
}

/// Appends URL-encoded query parameters.
fn with_query(url: String, query: &[(&str, &str)]) -> String {
    let encoded: String = query
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&");

    format!("{url}?{encoded}")
}
