// --- File: crates/services/ptslot_backend/src/app.rs ---
use axum::{routing::get, Router};
use http::Method;
use ptslot_common::PtslotError;
use ptslot_config::AppConfig;
use ptslot_slots::routes::routes_from_config;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

/// Assembles the full application: availability routes under `/api`, docs when enabled,
/// request tracing and CORS for the grid frontend.
pub fn build_app(config: Arc<AppConfig>) -> Result<Router, PtslotError> {
    let api_router = Router::new()
        .route("/", get(|| async { "Welcome to the ptslot availability API!" }))
        .merge(routes_from_config(config)?);

    #[allow(unused_mut)] // mutated only with the openapi feature
    let mut app = Router::new().nest("/api", api_router);

    // Conditionally add Swagger UI and JSON endpoint if openapi feature enabled
    #[cfg(feature = "openapi")]
    {
        use ptslot_slots::doc::SlotsApiDoc;
        use utoipa::OpenApi;
        use utoipa_swagger_ui::SwaggerUi;

        #[derive(OpenApi)]
        #[openapi(
            info(
                title = "ptslot API",
                version = "0.1.0",
                description = "Trainer availability grid and approval requests",
                license(name = "MIT", url = "https://opensource.org/licenses/MIT")
            ),
            servers( (url = "/api", description = "Main API Prefix")),
        )]
        struct ApiDoc;

        let mut openapi_doc = ApiDoc::openapi();
        openapi_doc.merge(SlotsApiDoc::openapi());
        info!("Adding Swagger UI at /api/docs");

        let swagger_ui = SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", openapi_doc);
        app = app.merge(swagger_ui);
    }

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any)
        .allow_origin(Any);

    info!("Application routes assembled");
    Ok(app.layer(cors).layer(TraceLayer::new_for_http()))
}
