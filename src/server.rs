use std::sync::Arc;

use poem::{listener::TcpListener, middleware::Tracing, Endpoint, EndpointExt, Route, Server};
use poem_openapi::OpenApiService;

use crate::AppData;
use crate::api::{ItemsApi, RootApi};
use crate::errors::StartupError;

/// Compose the HTTP application
///
/// Routes:
/// * `/` and `/items` - OpenAPI service
/// * `/swagger` - Swagger UI
/// * `/openapi.json` - OpenAPI document
pub fn build_app(app_data: Arc<AppData>) -> impl Endpoint {
    let api_service = OpenApiService::new(
        (RootApi, ItemsApi::new(app_data)),
        "Itemstash API",
        env!("CARGO_PKG_VERSION"),
    );

    let ui = api_service.swagger_ui();
    let spec = api_service.spec_endpoint();

    Route::new()
        .nest("/swagger", ui)
        .at("/openapi.json", spec)
        .nest("/", api_service)
        .with(Tracing)
}

/// Bind the configured address and serve until Ctrl-C
pub async fn run(app_data: Arc<AppData>) -> Result<(), StartupError> {
    let address = app_data.settings.bind_address();
    tracing::info!(
        address = %address,
        policy = %app_data.settings.validation_failure_policy,
        "Starting server"
    );
    tracing::info!("Swagger UI available at http://{}/swagger", address);

    Server::new(TcpListener::bind(address))
        .run_with_graceful_shutdown(
            build_app(app_data),
            async {
                if let Err(e) = tokio::signal::ctrl_c().await {
                    tracing::error!("Failed to listen for shutdown signal: {}", e);
                }
            },
            None,
        )
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}
