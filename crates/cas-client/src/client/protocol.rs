//! Built-in protocol client for CAS 1.0, 2.0, 3.0 and CAS+SAML 1.1.

use std::any::Any;
use std::future::Future;

use async_trait::async_trait;
use tracing::{debug, warn};

use super::{CasClient, HttpTransport};
use crate::config::ProtocolConfig;
use crate::error::{CasError, CasResult};
use crate::parser::{parse_proxy_response, parse_response};
use crate::saml::SamlValidateRequest;
use crate::types::{ProtocolVersion, VerificationResult};
use crate::urls;

/// Validates tickets against a CAS server over HTTP.
///
/// Stateless across calls: every verification is one fresh round trip, so a
/// single client can serve concurrent verifications.
#[derive(Debug, Clone)]
pub struct ProtocolClient {
    version: ProtocolVersion,
    config: ProtocolConfig,
    transport: HttpTransport,
}

impl ProtocolClient {
    /// Creates a client speaking `version`.
    ///
    /// ## Errors
    ///
    /// Returns [`CasError::Configuration`] if the configuration is invalid.
    pub fn new(version: ProtocolVersion, config: ProtocolConfig) -> CasResult<Self> {
        config.validate()?;
        let transport = HttpTransport::new(&config)?;

        Ok(Self {
            version,
            config,
            transport,
        })
    }

    /// Returns the protocol version.
    #[must_use]
    pub const fn version(&self) -> ProtocolVersion {
        self.version
    }

    /// Builds the validation URL for `ticket`.
    #[must_use]
    pub fn validation_url(&self, ticket: &str) -> String {
        urls::validation_url(&self.config, self.version, ticket)
    }

    /// Parses a raw validation response body without contacting the server.
    ///
    /// ## Errors
    ///
    /// Returns [`CasError::Rejected`] or [`CasError::Parse`].
    pub fn verify_response(&self, body: &str) -> CasResult<VerificationResult> {
        parse_response(
            self.version,
            body,
            self.config.username_attribute.as_deref(),
        )
    }

    /// Verifies `ticket`, giving up with [`CasError::Cancelled`] as soon as
    /// `cancel` completes.
    ///
    /// The in-flight request is dropped on cancellation; no partial result
    /// is returned.
    pub async fn verify_ticket_until<F>(
        &self,
        ticket: &str,
        cancel: F,
    ) -> CasResult<VerificationResult>
    where
        F: Future<Output = ()> + Send,
    {
        tokio::select! {
            biased;
            () = cancel => {
                debug!(version = %self.version, "Ticket verification cancelled");
                Err(CasError::Cancelled)
            }
            result = self.verify_ticket(ticket) => result,
        }
    }

    /// Exchanges a proxy-granting ticket for a proxy ticket targeting the
    /// configured service.
    ///
    /// ## Errors
    ///
    /// Returns [`CasError::Configuration`] for versions without proxy
    /// support, otherwise the same error kinds as ticket verification.
    pub async fn request_proxy_ticket(&self, pgt: &str) -> CasResult<String> {
        if !self.version.supports_proxy() {
            return Err(CasError::config(format!(
                "CAS version {} does not support proxy tickets",
                self.version
            )));
        }

        debug!(version = %self.version, "Requesting proxy ticket");
        let body = self.transport.get(&urls::proxy_url(&self.config, pgt)).await?;
        let result = parse_proxy_response(&body);
        if let Err(CasError::Rejected(ref failure)) = result {
            warn!(code = failure.code.as_deref().unwrap_or(""), "Proxy ticket refused");
        }
        result
    }
}

#[async_trait]
impl CasClient for ProtocolClient {
    fn config(&self) -> &ProtocolConfig {
        &self.config
    }

    fn logout_url(&self, redirect_url: Option<&str>) -> String {
        urls::logout_url_with_param(
            &self.config,
            redirect_url,
            self.version.logout_redirect_param(),
        )
    }

    async fn verify_ticket(&self, ticket: &str) -> CasResult<VerificationResult> {
        let url = self.validation_url(ticket);

        debug!(
            version = %self.version,
            endpoint = self.version.validation_path(),
            "Validating service ticket"
        );

        let body = if self.version.is_saml() {
            let request = SamlValidateRequest::new(ticket);
            self.transport.post_saml(&url, request.to_bytes()).await?
        } else {
            self.transport.get(&url).await?
        };

        match self.verify_response(&body) {
            Ok(result) => {
                debug!(username = %result.username, "Service ticket validated");
                Ok(result)
            }
            Err(CasError::Rejected(failure)) => {
                warn!(
                    code = failure.code.as_deref().unwrap_or(""),
                    "CAS server rejected service ticket"
                );
                Err(CasError::Rejected(failure))
            }
            Err(e) => {
                warn!(error = %e, "Could not understand CAS validation response");
                Err(e)
            }
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
