//! Central Authentication Service (CAS) client.
//!
//! This crate implements the client side of CAS single sign-on:
//!
//! - **Login/logout URLs** - Redirect targets for the user's browser
//! - **Ticket validation** - CAS 1.0 (`/validate`), CAS 2.0/3.0
//!   (`/serviceValidate`) and CAS+SAML 1.1 (`/samlValidate`)
//! - **Proxy tickets** - CAS 2.0+ `/proxy`
//! - **Single logout** - Parsing the server's `LogoutRequest`
//! - **Client factory** - Selecting a built-in or custom client by tag,
//!   type or registered name
//!
//! # Architecture
//!
//! - [`urls`] - URL construction
//! - [`parser`] - Validation response parsers, one per protocol version
//! - [`saml`] - SAML 1.1 request encoding and response parsing
//! - [`client`] - The [`CasClient`] trait and the HTTP-backed [`ProtocolClient`]
//! - [`registry`] - Version selection and custom client registration
//! - [`config`] - Client configuration
//! - [`error`] - Error types
//!
//! # Example
//!
//! ```rust,ignore
//! use cas_client::{ClientRegistry, ProtocolConfig};
//!
//! let config = ProtocolConfig::builder()
//!     .server_url("https://cas.example.com/cas/")
//!     .service_url("https://app.example.com/accounts/login/")
//!     .build()?;
//!
//! let client = ClientRegistry::new().resolve("3", config)?;
//! let redirect = client.login_url();
//! // ... the browser comes back with ?ticket=ST-...
//! let principal = client.verify_ticket(&ticket).await?;
//! ```
//!
//! # CAS Specifications
//!
//! - [CAS Protocol 3.0](https://apereo.github.io/cas/development/protocol/CAS-Protocol-Specification.html)
//! - [SAML 1.1 Bindings](https://www.oasis-open.org/committees/download.php/3405/oasis-sstc-saml-bindings-1.1.pdf)

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod client;
pub mod config;
pub mod error;
pub mod parser;
pub mod registry;
pub mod saml;
pub mod types;
pub mod urls;

mod xml;

pub use client::{CasClient, FromConfig, ProtocolClient};
pub use config::{ProtocolConfig, ProtocolConfigBuilder};
pub use error::{CasError, CasResult, ErrorKind};
pub use registry::{ClientConstructor, ClientRegistry, VersionSelector};
pub use types::*;
