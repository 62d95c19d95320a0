//! HTTP transport to the CAS server.

use reqwest::header::{ACCEPT, CACHE_CONTROL, CONTENT_TYPE, PRAGMA};
use tracing::warn;

use crate::config::ProtocolConfig;
use crate::error::{CasError, CasResult};
use crate::types::SAML_SOAP_ACTION;

/// One request per call; no retries.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Creates a transport honouring the configured timeout and TLS policy.
    ///
    /// ## Errors
    ///
    /// Returns [`CasError::Configuration`] if the HTTP client cannot be built.
    pub fn new(config: &ProtocolConfig) -> CasResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .danger_accept_invalid_certs(!config.verify_tls)
            .build()
            .map_err(|e| CasError::config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { client })
    }

    /// Makes a GET request and returns the response body.
    pub async fn get(&self, url: &str) -> CasResult<String> {
        let response = self.client.get(url).send().await?;
        handle_response(response).await
    }

    /// POSTs a SAML SOAP body and returns the response body.
    pub async fn post_saml(&self, url: &str, body: Vec<u8>) -> CasResult<String> {
        let response = self
            .client
            .post(url)
            .header("SOAPAction", SAML_SOAP_ACTION)
            .header(CONTENT_TYPE, "text/xml; charset=utf-8")
            .header(ACCEPT, "text/xml")
            .header(CACHE_CONTROL, "no-cache")
            .header(PRAGMA, "no-cache")
            .body(body)
            .send()
            .await?;
        handle_response(response).await
    }
}

/// Returns the body of a 2xx response, or [`CasError::Status`].
async fn handle_response(response: reqwest::Response) -> CasResult<String> {
    let status = response.status();

    if status.is_success() {
        Ok(response.text().await?)
    } else {
        let message = response
            .text()
            .await
            .unwrap_or_else(|e| format!("<unreadable body: {e}>"));
        warn!(status = status.as_u16(), "CAS server returned an error status");
        Err(CasError::Status {
            status: status.as_u16(),
            message,
        })
    }
}
