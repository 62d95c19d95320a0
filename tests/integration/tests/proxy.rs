//! Proxy ticket requests (CAS 2.0+).

use cas_client::{error_codes, ProtocolVersion};
use cas_integration_tests::{proxy_success, xml_response, TestEnv, SERVICE_URL};
use wiremock::matchers::{method, path, query_param};
use wiremock::Mock;

#[tokio::test]
async fn test_proxy_ticket_issued() -> anyhow::Result<()> {
    let env = TestEnv::new().await;

    Mock::given(method("GET"))
        .and(path("/cas/proxy"))
        .and(query_param("pgt", "PGT-330-CSdUbRSD"))
        .and(query_param("targetService", SERVICE_URL))
        .respond_with(xml_response(proxy_success("PT-1856392-b98xZrQN4p90ASrw96c8")))
        .expect(1)
        .mount(&env.server)
        .await;

    let client = env.client(ProtocolVersion::V3)?;
    let pt = client.request_proxy_ticket("PGT-330-CSdUbRSD").await?;

    assert_eq!(pt, "PT-1856392-b98xZrQN4p90ASrw96c8");

    Ok(())
}

#[tokio::test]
async fn test_proxy_ticket_refused() -> anyhow::Result<()> {
    let env = TestEnv::new().await;

    Mock::given(method("GET"))
        .and(path("/cas/proxy"))
        .respond_with(xml_response(
            r#"<cas:serviceResponse xmlns:cas="http://www.yale.edu/tp/cas"><cas:proxyFailure code="UNAUTHORIZED_SERVICE_PROXY">The supplied service is not authorized to use CAS proxy authentication.</cas:proxyFailure></cas:serviceResponse>"#,
        ))
        .mount(&env.server)
        .await;

    let client = env.client(ProtocolVersion::V2)?;
    let err = client.request_proxy_ticket("PGT-1").await.unwrap_err();

    assert!(err
        .failure()
        .is_some_and(|f| f.has_code(error_codes::UNAUTHORIZED_SERVICE_PROXY)));

    Ok(())
}
