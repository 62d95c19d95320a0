//! Client factory.
//!
//! Resolves a version selector into a ready-to-use [`CasClient`]. Built-in
//! versions are selected by tag; custom implementations are selected either
//! directly by type or by a name registered at startup.
//!
//! ```rust,ignore
//! let registry = ClientRegistry::new();
//! registry.register::<LdapBackedClient>("myapp.cas.LdapBackedClient")?;
//!
//! let client = registry.resolve(settings.cas_version.as_str(), config)?;
//! let principal = client.verify_ticket(&ticket).await?;
//! ```

use std::any::type_name;

use dashmap::DashMap;
use tracing::debug;

use crate::client::{CasClient, FromConfig, ProtocolClient};
use crate::config::ProtocolConfig;
use crate::error::{CasError, CasResult};
use crate::types::ProtocolVersion;

/// Constructs a client from configuration.
pub type ClientConstructor = fn(ProtocolConfig) -> CasResult<Box<dyn CasClient>>;

fn construct<T: FromConfig>(config: ProtocolConfig) -> CasResult<Box<dyn CasClient>> {
    Ok(Box::new(T::from_config(config)?))
}

/// Which client implementation to construct.
#[derive(Debug, Clone)]
pub enum VersionSelector {
    /// A built-in protocol version.
    Builtin(ProtocolVersion),

    /// A custom implementation supplied directly.
    Custom {
        /// Type name, for diagnostics.
        name: &'static str,
        /// Constructor for the type.
        construct: ClientConstructor,
    },

    /// A custom implementation looked up in the registry by name.
    Named(String),
}

impl VersionSelector {
    /// Selects the custom implementation `T`.
    #[must_use]
    pub fn of<T: FromConfig>() -> Self {
        Self::Custom {
            name: type_name::<T>(),
            construct: construct::<T>,
        }
    }
}

impl From<ProtocolVersion> for VersionSelector {
    fn from(version: ProtocolVersion) -> Self {
        Self::Builtin(version)
    }
}

/// Built-in tags win; anything else becomes a registry lookup.
impl From<&str> for VersionSelector {
    fn from(value: &str) -> Self {
        value
            .parse::<ProtocolVersion>()
            .map_or_else(|_| Self::Named(value.to_string()), Self::Builtin)
    }
}

impl From<String> for VersionSelector {
    fn from(value: String) -> Self {
        match value.parse::<ProtocolVersion>() {
            Ok(version) => Self::Builtin(version),
            Err(_) => Self::Named(value),
        }
    }
}

/// Registry of custom client implementations, keyed by name.
///
/// Thread-safe; registration typically happens once at startup and
/// resolution on every request.
#[derive(Debug, Default)]
pub struct ClientRegistry {
    constructors: DashMap<String, ClientConstructor>,
}

impl ClientRegistry {
    /// Creates an empty registry. Built-in versions need no registration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `T` under `name`, replacing any previous registration.
    ///
    /// ## Errors
    ///
    /// Returns [`CasError::Configuration`] if `name` is empty or is a
    /// built-in version tag.
    pub fn register<T: FromConfig>(&self, name: impl Into<String>) -> CasResult<()> {
        let name = name.into();

        if name.trim().is_empty() {
            return Err(CasError::config("client name cannot be empty"));
        }
        if name.parse::<ProtocolVersion>().is_ok() {
            return Err(CasError::config(format!(
                "'{name}' is a built-in CAS version and cannot be registered"
            )));
        }

        debug!(name = %name, client = type_name::<T>(), "Registering CAS client");
        self.constructors.insert(name, construct::<T>);
        Ok(())
    }

    /// Registers `T` under its Rust type path, e.g. `myapp::cas::CustomClient`.
    ///
    /// ## Errors
    ///
    /// See [`Self::register`].
    pub fn register_type<T: FromConfig>(&self) -> CasResult<()> {
        self.register::<T>(type_name::<T>())
    }

    /// Returns true if `name` is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.constructors.contains_key(name)
    }

    /// Returns the registered names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .constructors
            .iter()
            .map(|entry| entry.key().clone())
            .collect();
        names.sort();
        names
    }

    /// Resolves `selector` and constructs the client with `config`.
    ///
    /// ## Errors
    ///
    /// - [`CasError::UnsupportedVersion`] if the selector names nothing known
    /// - [`CasError::Configuration`] if `config` is invalid or the
    ///   implementation refuses it
    pub fn resolve(
        &self,
        selector: impl Into<VersionSelector>,
        config: ProtocolConfig,
    ) -> CasResult<Box<dyn CasClient>> {
        let constructor = match selector.into() {
            VersionSelector::Builtin(version) => {
                debug!(version = %version, "Resolved built-in CAS client");
                return Ok(Box::new(ProtocolClient::new(version, config)?));
            }
            VersionSelector::Custom { name, construct } => {
                debug!(client = name, "Resolved custom CAS client");
                construct
            }
            VersionSelector::Named(name) => {
                let constructor = self
                    .constructors
                    .get(&name)
                    .map(|entry| *entry.value())
                    .ok_or_else(|| CasError::UnsupportedVersion(name.clone()))?;
                debug!(client = %name, "Resolved registered CAS client");
                constructor
            }
        };

        config.validate()?;
        constructor(config)
    }
}
