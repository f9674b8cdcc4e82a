use api_client::{Configuration, ConfigurationBuilder};

/// Helper for testing against a wiremock server.
///
/// Returns the server and a [`Configuration`] whose base URL points at it. `configure` can add
/// credentials or a content type before the configuration is built.
///
/// Warning: when using `Mock::expect` ensure `server` is not dropped before the test completes.
pub async fn start_api_mock(
    mocks: Vec<wiremock::Mock>,
    configure: impl FnOnce(&mut ConfigurationBuilder) -> api_client::Result<()>,
) -> api_client::Result<(wiremock::MockServer, Configuration)> {
    let server = wiremock::MockServer::start().await;

    for mock in mocks {
        server.register(mock).await;
    }

    let mut builder = ConfigurationBuilder::new();
    builder.with_base_url(server.uri())?;
    configure(&mut builder)?;
    let config = builder.build()?;

    Ok((server, config))
}
