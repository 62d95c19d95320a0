//! CAS+SAML 1.1 support.
//!
//! - [`SamlValidateRequest`] builds the SOAP-wrapped `samlp:Request` POSTed
//!   to `/samlValidate`.
//! - [`parse_saml_response`] decodes the server's `Response`.
//! - [`parse_logout_request`] decodes single logout requests, which CAS
//!   servers send for every protocol version.

mod logout;
mod request;
mod response;

pub use logout::{parse_logout_request, LogoutRequest};
pub use request::SamlValidateRequest;
pub use response::parse_saml_response;
