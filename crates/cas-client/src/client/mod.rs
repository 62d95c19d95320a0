//! Protocol clients.
//!
//! [`CasClient`] is the single capability every protocol version provides:
//! verify a ticket. Built-in versions are served by [`ProtocolClient`];
//! applications plug in their own implementations (alternate transports,
//! test doubles) through [`crate::registry::ClientRegistry`].

mod http;
mod protocol;

use std::any::Any;
use std::fmt::Debug;

use async_trait::async_trait;

pub use http::HttpTransport;
pub use protocol::ProtocolClient;

use crate::config::ProtocolConfig;
use crate::error::CasResult;
use crate::types::VerificationResult;
use crate::urls;

/// A CAS protocol client.
#[async_trait]
pub trait CasClient: Send + Sync + Debug + Any {
    /// Returns the configuration this client was constructed with.
    fn config(&self) -> &ProtocolConfig;

    /// Builds the login URL to redirect the user's browser to.
    fn login_url(&self) -> String {
        urls::login_url(self.config())
    }

    /// Builds the logout URL, optionally redirecting back to `redirect_url`.
    fn logout_url(&self, redirect_url: Option<&str>) -> String {
        urls::logout_url(self.config(), redirect_url)
    }

    /// Exchanges a service ticket for the authenticated principal.
    ///
    /// ## Errors
    ///
    /// Rejections, transport failures and unparseable responses are
    /// distinct [`crate::CasError`] variants.
    async fn verify_ticket(&self, ticket: &str) -> CasResult<VerificationResult>;

    /// Returns a reference to self as Any for downcasting.
    fn as_any(&self) -> &dyn Any;
}

/// Construction of a client from configuration.
///
/// Implemented by every type the registry can construct by name.
pub trait FromConfig: CasClient + Sized {
    /// Creates a client.
    ///
    /// ## Errors
    ///
    /// Returns [`crate::CasError::Configuration`] if `config` is unusable.
    fn from_config(config: ProtocolConfig) -> CasResult<Self>;
}
