//! Shared fixtures for the CAS client integration suite.
//!
//! [`TestEnv`] starts a mock CAS server on an ephemeral port and builds
//! client configurations pointing at it. The body builders produce the
//! responses real CAS servers send.

use std::time::Duration;

use cas_client::{
    CasResult, ClientRegistry, ProtocolClient, ProtocolConfig, ProtocolVersion, CAS_NS,
    SAML1_ASSERTION_NS, SAML1_PROTOCOL_NS, SOAP_ENVELOPE_NS,
};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Service URL every test client uses.
pub const SERVICE_URL: &str = "https://testserver/login/?next=%2F";

/// Mock CAS server plus client configuration.
pub struct TestEnv {
    /// The mock CAS server.
    pub server: MockServer,
    /// Client registry for factory tests.
    pub registry: ClientRegistry,
}

impl TestEnv {
    /// Starts a mock CAS server.
    pub async fn new() -> Self {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("cas_client=debug")
            .with_test_writer()
            .try_init();

        Self {
            server: MockServer::start().await,
            registry: ClientRegistry::new(),
        }
    }

    /// Base URL of the mock server, with the `/cas/` context path.
    #[must_use]
    pub fn server_url(&self) -> String {
        format!("{}/cas/", self.server.uri())
    }

    /// Configuration pointing at the mock server.
    #[must_use]
    pub fn config(&self) -> ProtocolConfig {
        self.config_with(|builder| builder)
    }

    /// Configuration pointing at the mock server, customised by `f`.
    ///
    /// # Panics
    ///
    /// Panics if the customised configuration is invalid.
    #[must_use]
    pub fn config_with(
        &self,
        f: impl FnOnce(cas_client::ProtocolConfigBuilder) -> cas_client::ProtocolConfigBuilder,
    ) -> ProtocolConfig {
        let builder = ProtocolConfig::builder()
            .server_url(self.server_url())
            .service_url(SERVICE_URL)
            .timeout(Duration::from_secs(5));
        f(builder).build().expect("valid test configuration")
    }

    /// A built-in client for `version` pointing at the mock server.
    pub fn client(&self, version: ProtocolVersion) -> CasResult<ProtocolClient> {
        ProtocolClient::new(version, self.config())
    }

    /// Mounts a GET responder on `/cas/{endpoint}` for a given ticket.
    pub async fn mock_validation(&self, endpoint: &str, ticket: &str, response: ResponseTemplate) {
        Mock::given(method("GET"))
            .and(path(format!("/cas/{endpoint}")))
            .and(query_param("ticket", ticket))
            .and(query_param("service", SERVICE_URL))
            .respond_with(response)
            .expect(1)
            .mount(&self.server)
            .await;
    }
}

/// A `200 OK` response with an XML body.
#[must_use]
pub fn xml_response(body: impl Into<String>) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .insert_header("content-type", "text/xml; charset=utf-8")
        .set_body_string(body.into())
}

/// CAS 2.0/3.0 `authenticationSuccess` with optional attributes and pgtIOU.
#[must_use]
pub fn cas_success(user: &str, attributes: &[(&str, &str)], pgt_iou: Option<&str>) -> String {
    let mut body = format!(
        r#"<cas:serviceResponse xmlns:cas="{CAS_NS}"><cas:authenticationSuccess><cas:user>{user}</cas:user>"#
    );

    if !attributes.is_empty() {
        body.push_str("<cas:attributes>");
        for (name, value) in attributes {
            body.push_str(&format!("<cas:{name}>{value}</cas:{name}>"));
        }
        body.push_str("</cas:attributes>");
    }

    if let Some(iou) = pgt_iou {
        body.push_str(&format!(
            "<cas:proxyGrantingTicket>{iou}</cas:proxyGrantingTicket>"
        ));
    }

    body.push_str("</cas:authenticationSuccess></cas:serviceResponse>");
    body
}

/// CAS 2.0/3.0 `authenticationFailure`.
#[must_use]
pub fn cas_failure(code: &str, message: &str) -> String {
    format!(
        r#"<cas:serviceResponse xmlns:cas="{CAS_NS}"><cas:authenticationFailure code="{code}">{message}</cas:authenticationFailure></cas:serviceResponse>"#
    )
}

/// CAS 2.0 `proxySuccess`.
#[must_use]
pub fn proxy_success(proxy_ticket: &str) -> String {
    format!(
        r#"<cas:serviceResponse xmlns:cas="{CAS_NS}"><cas:proxySuccess><cas:proxyTicket>{proxy_ticket}</cas:proxyTicket></cas:proxySuccess></cas:serviceResponse>"#
    )
}

/// SAML 1.1 response with status `samlp:{status}`, a subject and attributes.
#[must_use]
pub fn saml_response(status: &str, subject: &str, attributes: &[(&str, &str)]) -> String {
    let attrs: String = attributes
        .iter()
        .map(|(name, value)| {
            format!(
                r#"<Attribute AttributeName="{name}" AttributeNamespace="http://www.ja-sig.org/products/cas/"><AttributeValue>{value}</AttributeValue></Attribute>"#
            )
        })
        .collect();

    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?><SOAP-ENV:Envelope xmlns:SOAP-ENV="{SOAP_ENVELOPE_NS}"><SOAP-ENV:Header/><SOAP-ENV:Body><Response xmlns="{SAML1_PROTOCOL_NS}" MajorVersion="1" MinorVersion="1" ResponseID="_r1"><Status><StatusCode Value="samlp:{status}"/></Status><Assertion xmlns="{SAML1_ASSERTION_NS}" AssertionID="_a1" MajorVersion="1" MinorVersion="1"><AttributeStatement><Subject><NameIdentifier>{subject}</NameIdentifier></Subject>{attrs}</AttributeStatement></Assertion></Response></SOAP-ENV:Body></SOAP-ENV:Envelope>"#
    )
}
