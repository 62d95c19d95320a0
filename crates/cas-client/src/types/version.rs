//! CAS protocol versions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::constants::{endpoints, params};
use crate::error::CasError;

/// Built-in CAS protocol versions.
///
/// The string forms (`1`, `2`, `3`, `CAS_2_SAML_1_0`) are the tags host
/// applications put in their configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ProtocolVersion {
    /// CAS 1.0, plain-text `yes`/`no` validation.
    #[serde(rename = "1")]
    V1,
    /// CAS 2.0, XML validation without attributes.
    #[default]
    #[serde(rename = "2")]
    V2,
    /// CAS 3.0, XML validation with attributes.
    #[serde(rename = "3")]
    V3,
    /// CAS+SAML 1.1 validation.
    #[serde(rename = "CAS_2_SAML_1_0")]
    Saml,
}

impl ProtocolVersion {
    /// All built-in versions.
    pub const ALL: [Self; 4] = [Self::V1, Self::V2, Self::V3, Self::Saml];

    /// Returns the configuration tag for this version.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::V1 => "1",
            Self::V2 => "2",
            Self::V3 => "3",
            Self::Saml => "CAS_2_SAML_1_0",
        }
    }

    /// Returns the validation endpoint path.
    #[must_use]
    pub const fn validation_path(&self) -> &'static str {
        match self {
            Self::V1 => endpoints::VALIDATE,
            Self::V2 | Self::V3 => endpoints::SERVICE_VALIDATE,
            Self::Saml => endpoints::SAML_VALIDATE,
        }
    }

    /// Returns the logout query parameter that carries the redirect URL.
    #[must_use]
    pub const fn logout_redirect_param(&self) -> &'static str {
        match self {
            Self::V1 => params::URL,
            Self::V2 | Self::V3 | Self::Saml => params::SERVICE,
        }
    }

    /// Returns true if validation responses carry an attribute set.
    #[must_use]
    pub const fn supports_attributes(&self) -> bool {
        matches!(self, Self::V3 | Self::Saml)
    }

    /// Returns true if this version supports proxy authentication.
    #[must_use]
    pub const fn supports_proxy(&self) -> bool {
        matches!(self, Self::V2 | Self::V3)
    }

    /// Returns true if validation is a SAML POST instead of a GET.
    #[must_use]
    pub const fn is_saml(&self) -> bool {
        matches!(self, Self::Saml)
    }
}

impl fmt::Display for ProtocolVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProtocolVersion {
    type Err = CasError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1" => Ok(Self::V1),
            "2" => Ok(Self::V2),
            "3" => Ok(Self::V3),
            "CAS_2_SAML_1_0" => Ok(Self::Saml),
            other => Err(CasError::UnsupportedVersion(other.to_string())),
        }
    }
}
