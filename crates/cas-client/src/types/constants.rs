//! CAS protocol constants.
//!
//! Namespace URIs, endpoint paths, query parameter names and the error codes
//! defined by the CAS protocol specification.

/// CAS 2.0/3.0 XML namespace URI.
pub const CAS_NS: &str = "http://www.yale.edu/tp/cas";

/// SAML 1.0 protocol namespace URI.
pub const SAML1_PROTOCOL_NS: &str = "urn:oasis:names:tc:SAML:1.0:protocol";

/// SAML 1.0 assertion namespace URI.
pub const SAML1_ASSERTION_NS: &str = "urn:oasis:names:tc:SAML:1.0:assertion";

/// SOAP 1.1 envelope namespace URI.
pub const SOAP_ENVELOPE_NS: &str = "http://schemas.xmlsoap.org/soap/envelope/";

/// `SOAPAction` header value expected by `/samlValidate`.
pub const SAML_SOAP_ACTION: &str = "http://www.oasis-open.org/committees/security";

// ============================================================================
// Endpoint paths
// ============================================================================

/// CAS server endpoint paths, relative to the server URL.
pub mod endpoints {
    /// Login page.
    pub const LOGIN: &str = "login";
    /// Logout page.
    pub const LOGOUT: &str = "logout";
    /// CAS 1.0 plain-text validation.
    pub const VALIDATE: &str = "validate";
    /// CAS 2.0/3.0 XML validation.
    pub const SERVICE_VALIDATE: &str = "serviceValidate";
    /// CAS+SAML 1.1 validation.
    pub const SAML_VALIDATE: &str = "samlValidate";
    /// Proxy ticket issuance.
    pub const PROXY: &str = "proxy";
}

// ============================================================================
// Query parameters
// ============================================================================

/// Query parameter names used on the wire.
pub mod params {
    /// Callback URL of the client application.
    pub const SERVICE: &str = "service";
    /// Forces primary re-authentication.
    pub const RENEW: &str = "renew";
    /// Service ticket under validation.
    pub const TICKET: &str = "ticket";
    /// Proxy callback URL.
    pub const PGT_URL: &str = "pgtUrl";
    /// Proxy-granting ticket.
    pub const PGT: &str = "pgt";
    /// Service a proxy ticket is requested for.
    pub const TARGET_SERVICE: &str = "targetService";
    /// Service URL for `/samlValidate`.
    pub const TARGET: &str = "TARGET";
    /// CAS 1.0 logout redirect.
    pub const URL: &str = "url";
}

// ============================================================================
// Error codes
// ============================================================================

/// Error codes a CAS server places in `authenticationFailure`/`proxyFailure`.
pub mod error_codes {
    /// Not all required parameters were present.
    pub const INVALID_REQUEST: &str = "INVALID_REQUEST";
    /// The ticket is unknown, expired or already consumed.
    pub const INVALID_TICKET: &str = "INVALID_TICKET";
    /// The ticket was not issued for this service.
    pub const INVALID_SERVICE: &str = "INVALID_SERVICE";
    /// The proxy callback failed validation.
    pub const INVALID_PROXY_CALLBACK: &str = "INVALID_PROXY_CALLBACK";
    /// The service is not authorized for proxying.
    pub const UNAUTHORIZED_SERVICE_PROXY: &str = "UNAUTHORIZED_SERVICE_PROXY";
    /// Any other server-side failure.
    pub const INTERNAL_ERROR: &str = "INTERNAL_ERROR";
}
