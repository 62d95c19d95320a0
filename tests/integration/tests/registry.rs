//! Client factory resolution, including custom implementations.

use std::any::Any;

use async_trait::async_trait;
use cas_client::{
    CasClient, CasResult, FromConfig, ProtocolClient, ProtocolConfig, ProtocolVersion,
    VerificationResult, VersionSelector,
};
use cas_integration_tests::{cas_success, xml_response, TestEnv};

/// Client that trusts every ticket, for exercising custom resolution.
#[derive(Debug)]
struct CasClientCustom {
    config: ProtocolConfig,
}

#[async_trait]
impl CasClient for CasClientCustom {
    fn config(&self) -> &ProtocolConfig {
        &self.config
    }

    async fn verify_ticket(&self, ticket: &str) -> CasResult<VerificationResult> {
        Ok(VerificationResult::new("test_custom@example.com").with_attribute("ticket", ticket))
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl FromConfig for CasClientCustom {
    fn from_config(config: ProtocolConfig) -> CasResult<Self> {
        Ok(Self { config })
    }
}

#[tokio::test]
async fn test_resolve_builtin_tag_verifies_over_http() -> anyhow::Result<()> {
    let env = TestEnv::new().await;
    env.mock_validation(
        "serviceValidate",
        "ST-factory",
        xml_response(cas_success("jdoe", &[("mail", "jdoe@example.com")], None)),
    )
    .await;

    let client = env.registry.resolve("3", env.config())?;
    let concrete = client
        .as_any()
        .downcast_ref::<ProtocolClient>()
        .expect("built-in client");
    assert_eq!(concrete.version(), ProtocolVersion::V3);

    let result = client.verify_ticket("ST-factory").await?;
    assert_eq!(result.username, "jdoe");
    assert_eq!(result.attributes.first("mail"), Some("jdoe@example.com"));

    Ok(())
}

#[tokio::test]
async fn test_resolve_custom_class() -> anyhow::Result<()> {
    let env = TestEnv::new().await;

    let client = env
        .registry
        .resolve(VersionSelector::of::<CasClientCustom>(), env.config())?;
    assert!(client.as_any().is::<CasClientCustom>());

    let result = client.verify_ticket("ST-custom").await?;
    assert_eq!(result.username, "test_custom@example.com");
    assert_eq!(result.attributes.first("ticket"), Some("ST-custom"));

    Ok(())
}

#[tokio::test]
async fn test_resolve_custom_class_by_name() -> anyhow::Result<()> {
    let env = TestEnv::new().await;
    env.registry
        .register::<CasClientCustom>("tests.test_cas.CasClientCustom")?;

    let client = env
        .registry
        .resolve("tests.test_cas.CasClientCustom", env.config())?;
    assert!(client.as_any().is::<CasClientCustom>());

    Ok(())
}

#[tokio::test]
async fn test_resolve_custom_class_fail() -> anyhow::Result<()> {
    let env = TestEnv::new().await;

    let err = env.registry.resolve("foo.bar", env.config()).unwrap_err();
    assert_eq!(err.to_string(), "Unsupported CAS_VERSION 'foo.bar'");

    Ok(())
}

#[tokio::test]
async fn test_logout_url_through_trait_object() -> anyhow::Result<()> {
    let env = TestEnv::new().await;

    let v1 = env.registry.resolve("1", env.config())?;
    let v2 = env.registry.resolve("2", env.config())?;

    let redirect = Some("https://testserver/");
    assert_eq!(
        v1.logout_url(redirect),
        format!("{}logout?url=https%3A%2F%2Ftestserver%2F", env.server_url())
    );
    assert_eq!(
        v2.logout_url(redirect),
        format!("{}logout?service=https%3A%2F%2Ftestserver%2F", env.server_url())
    );

    Ok(())
}
