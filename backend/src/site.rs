use crate::config::ServerConfig;
use axum::{
    debug_handler,
    extract::Request,
    middleware::{self, Next},
    response::Response,
    routing::get,
    Json, Router,
};
use serde::Serialize;
use tower_http::services::ServeDir;
use tower_http::{
    catch_panic::CatchPanicLayer, compression::CompressionLayer, timeout::TimeoutLayer,
};
use tracing::trace;

#[derive(Debug, Serialize)]
pub struct Health {
    pub status: &'static str,
    pub version: &'static str,
}

#[debug_handler]
async fn handle_health() -> Json<Health> {
    Json(Health {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

async fn log_request(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let response = next.run(request).await;
    trace!("{} {} -> {}", method, path, response.status());
    response
}

/// The whole site: health probe, the wasm bundle under `/pkg` and the
/// static page for everything else.
pub fn router(config: &ServerConfig) -> Router {
    let middleware = tower::ServiceBuilder::new()
        .layer(CompressionLayer::new().quality(tower_http::CompressionLevel::Fastest))
        .layer(TimeoutLayer::new(config.request_timeout))
        .layer(CatchPanicLayer::new())
        .layer(middleware::from_fn(log_request));

    Router::new()
        .route("/healthz", get(handle_health))
        .nest_service("/pkg", ServeDir::new(&config.wasm_pkg_dir))
        .fallback_service(ServeDir::new(&config.site_dir))
        .layer(middleware)
}
