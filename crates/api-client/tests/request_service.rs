use std::sync::Arc;

use api_client::{Error, RequestService, TransportError};
use api_client_test::{start_api_mock, ScriptedTransport};
use serde::Deserialize;
use wiremock::{
    matchers::{header, method, path},
    Mock, ResponseTemplate,
};

#[derive(Debug, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
struct TestResponse {
    id: String,
    should_pass: bool,
}

#[tokio::test]
async fn test_get_over_http_with_api_key() {
    let (server, config) = start_api_mock(
        vec![Mock::given(method("GET"))
            .and(path("/tests/X"))
            .and(header("x-api-key", "secret"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "Id": "X",
                "ShouldPass": true
            })))
            .expect(1)],
        |builder| {
            builder.with_api_key_secret("secret")?;
            Ok(())
        },
    )
    .await
    .unwrap();

    let service = RequestService::from_configuration(&config).unwrap();
    let result: TestResponse = service
        .get(&format!("{}/tests/X", config.base_url()))
        .await
        .unwrap();

    assert_eq!(
        result,
        TestResponse {
            id: "X".to_string(),
            should_pass: true
        }
    );

    drop(server);
}

#[tokio::test]
async fn test_get_over_http_unauthorized() {
    let (_server, config) = start_api_mock(
        vec![Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(401).set_body_string("Unauthorized"))],
        |_| Ok(()),
    )
    .await
    .unwrap();

    let service = RequestService::from_configuration(&config).unwrap();
    let err = service
        .get::<TestResponse>(config.base_url())
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(reqwest::StatusCode::UNAUTHORIZED));
}

#[tokio::test]
async fn test_get_over_http_wrong_shape() {
    let (_server, config) = start_api_mock(
        vec![Mock::given(method("GET")).respond_with(
            ResponseTemplate::new(200).set_body_string(r#"{"Testid":"X","ShouldPass":false}"#),
        )],
        |_| Ok(()),
    )
    .await
    .unwrap();

    let service = RequestService::from_configuration(&config).unwrap();
    let err = service
        .get::<TestResponse>(config.base_url())
        .await
        .unwrap_err();

    assert!(err.is_decode_failed());
}

#[tokio::test]
async fn test_service_is_shareable_across_tasks() {
    let transport = ScriptedTransport::new();
    for i in 0..4 {
        transport.push_response(200, format!(r#"{{"Id":"{i}","ShouldPass":true}}"#));
    }
    let service = Arc::new(RequestService::new(transport.clone()));

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let service = service.clone();
            tokio::spawn(async move {
                service
                    .get::<TestResponse>(&format!("https://a.test/{i}"))
                    .await
            })
        })
        .collect();

    for handle in handles {
        let result = handle.await.unwrap().unwrap();
        assert!(result.should_pass);
    }
    assert_eq!(transport.requests().len(), 4);
}

#[tokio::test]
async fn test_transport_failure_is_not_a_request_failure() {
    let transport = ScriptedTransport::new();
    transport.push_error(TransportError::Other("connection reset".to_string()));
    let service = RequestService::new(transport);

    let err = service
        .get::<TestResponse>("https://a.test")
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Transport(_)));
    assert!(!err.is_request_failed());
    assert!(!err.is_decode_failed());
}

#[tokio::test]
async fn test_blank_url_never_reaches_transport() {
    let transport = ScriptedTransport::respond_with(200, "{}");
    let service = RequestService::new(transport.clone());

    let err = service.get::<serde_json::Value>("   ").await.unwrap_err();

    assert!(err.is_invalid_argument());
    assert!(transport.requests().is_empty());
}
